use contracts::domain::a001_main_category::aggregate::{MainCategory, MainCategoryDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_main_category::api;
use crate::shared::icons::icon;
use crate::shared::list_utils::confirm_delete;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

#[component]
pub fn MainCategoryList() -> impl IntoView {
    let items: RwSignal<Vec<MainCategory>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing: RwSignal<Option<MainCategoryDto>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_main_categories().await {
                Ok(data) => items.set(data),
                Err(e) => {
                    log::error!("Failed to load main categories: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    load_data();

    let delete_row = move |slug: String| {
        if !confirm_delete(&format!("main category '{}'", slug)) {
            return;
        }
        spawn_local(async move {
            match api::delete_main_category(&slug).await {
                Ok(()) => load_data(),
                Err(e) => {
                    log::error!("Failed to delete main category {}: {}", slug, e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a001_main_category--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Main categories"</h1>
                    <Badge>{move || items.with(|i| i.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(MainCategoryDto::new()))
                    >
                        {icon("plus")}
                        " New"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=120.0>"Slug"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Title (EN)"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Title (AR)"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Order"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|m| format!("{}:{}:{}", m.slug, m.title_en, m.sort_order)
                                children=move |row: MainCategory| {
                                    let dto = MainCategoryDto::from_row(&row);
                                    let slug = row.slug.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <code>{row.slug.clone()}</code>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{row.title_en.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span dir="rtl">{row.title_ar.clone().unwrap_or_default()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.sort_order}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {if row.active {
                                                        view! { <span class="badge badge--success">"Active"</span> }.into_any()
                                                    } else {
                                                        view! { <span class="badge badge--neutral">"Hidden"</span> }.into_any()
                                                    }}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(dto.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_row(slug.clone())
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>

                {move || editing.get().map(|dto| view! {
                    <MainCategoryForm
                        dto=dto
                        on_close=move || editing.set(None)
                        on_saved=move || { editing.set(None); load_data(); }
                    />
                })}
            </div>
        </PageFrame>
    }
}

#[component]
fn MainCategoryForm<F1, F2>(dto: MainCategoryDto, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let title = match &dto.editing {
        Some(slug) => format!("Edit main category: {}", slug),
        None => "New main category".to_string(),
    };
    let editing_slug = dto.editing.clone();

    let slug = RwSignal::new(dto.slug);
    let title_en = RwSignal::new(dto.title_en);
    let title_ar = RwSignal::new(dto.title_ar);
    let description_en = RwSignal::new(dto.description_en);
    let description_ar = RwSignal::new(dto.description_ar);
    let sort_order = RwSignal::new(dto.sort_order);
    let active = RwSignal::new(dto.active);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = MainCategoryDto {
            editing: editing_slug.clone(),
            slug: slug.get(),
            title_en: title_en.get(),
            title_ar: title_ar.get(),
            description_en: description_en.get(),
            description_ar: description_ar.get(),
            sort_order: sort_order.get(),
            active: active.get(),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::save_main_category(&dto).await {
                Ok(()) => on_saved(),
                Err(e) => {
                    log::error!("Failed to save main category {}: {}", dto.slug, e);
                    set_error.set(Some(format!("Save failed: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    let disabled = Signal::derive(move || saving.get());

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="form__group">
                        <Label>"Slug"</Label>
                        <Input value=slug placeholder="single" disabled=disabled />
                    </div>
                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Title (EN)"</Label>
                            <Input value=title_en disabled=disabled />
                        </div>
                        <div class="form__group">
                            <Label>"Title (AR)"</Label>
                            <Input value=title_ar disabled=disabled attr:dir="rtl" />
                        </div>
                    </div>
                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Description (EN)"</Label>
                            <Textarea value=description_en disabled=disabled />
                        </div>
                        <div class="form__group">
                            <Label>"Description (AR)"</Label>
                            <Textarea value=description_ar disabled=disabled attr:dir="rtl" />
                        </div>
                    </div>
                    <div class="form__group">
                        <Label>"Sort order"</Label>
                        <Input value=sort_order input_type=InputType::Number disabled=disabled />
                    </div>
                    <div class="form__group">
                        <Checkbox checked=active label="Active" />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_close()
                        disabled=disabled
                    >
                        "Cancel"
                    </Button>
                    <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=disabled>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}
