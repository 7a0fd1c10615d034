use contracts::domain::a002_subcategory::aggregate::{Subcategory, SubcategoryDto};
use contracts::shared::media::UploadFolder;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_subcategory::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::shared::image::{FallbackImage, ImageUploadField};
use crate::shared::list_utils::confirm_delete;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// Rows of `main_type`, every row when it is empty
fn filter_by_type(rows: &[Subcategory], main_type: &str) -> Vec<Subcategory> {
    rows.iter()
        .filter(|s| main_type.is_empty() || s.category_type == main_type)
        .cloned()
        .collect()
}

#[component]
pub fn SubcategoryList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let all_items: RwSignal<Vec<Subcategory>> = RwSignal::new(Vec::new());
    let type_filter = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing: RwSignal<Option<SubcategoryDto>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_subcategories().await {
                Ok(data) => all_items.set(data),
                Err(e) => {
                    log::error!("Failed to load subcategories: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    load_data();

    let items = Memo::new(move |_| {
        let main_type = type_filter.get();
        all_items.with(|rows| filter_by_type(rows, &main_type))
    });

    let delete_row = move |slug: String| {
        if !confirm_delete(&format!("subcategory '{}'", slug)) {
            return;
        }
        spawn_local(async move {
            match api::delete_subcategory(&slug).await {
                Ok(()) => load_data(),
                Err(e) => {
                    log::error!("Failed to delete subcategory {}: {}", slug, e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a002_subcategory--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Subcategories"</h1>
                    <Badge>{move || items.with(|i| i.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(SubcategoryDto::new()))
                    >
                        {icon("plus")}
                        " New"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| ctx.open_tab("u501_import_defaults", tab_label_for_key("u501_import_defaults"))
                    >
                        {icon("import")}
                        " Import defaults"
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

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Label>"Main category"</Label>
                        <Select value=type_filter>
                            <option value="">"All"</option>
                            <option value="single">"Single"</option>
                            <option value="bulk">"Bulk"</option>
                        </Select>
                    </Flex>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=80.0>"Banner"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Slug"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Type"</TableHeaderCell>
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
                                key=|s| format!("{}:{}:{}:{}", s.slug, s.title_en, s.sort_order, s.active)
                                children=move |row: Subcategory| {
                                    let dto = SubcategoryDto::from_row(&row);
                                    let slug = row.slug.clone();
                                    let banner = row.banner_image_url.clone().unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                {(!banner.is_empty()).then(|| view! {
                                                    <FallbackImage src=banner.clone() alt="" class="table__thumb" />
                                                })}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <code>{row.slug.clone()}</code>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.category_type.clone()}</TableCellLayout>
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
                    <SubcategoryForm
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
fn SubcategoryForm<F1, F2>(dto: SubcategoryDto, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let title = match &dto.editing {
        Some(slug) => format!("Edit subcategory: {}", slug),
        None => "New subcategory".to_string(),
    };
    let editing_slug = dto.editing.clone();

    let slug = RwSignal::new(dto.slug);
    let category_type = RwSignal::new(dto.category_type);
    let title_en = RwSignal::new(dto.title_en);
    let title_ar = RwSignal::new(dto.title_ar);
    let banner_image_url = RwSignal::new(dto.banner_image_url);
    let sort_order = RwSignal::new(dto.sort_order);
    let active = RwSignal::new(dto.active);
    let uploading = RwSignal::new(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = SubcategoryDto {
            editing: editing_slug.clone(),
            slug: slug.get(),
            category_type: category_type.get(),
            title_en: title_en.get(),
            title_ar: title_ar.get(),
            banner_image_url: banner_image_url.get(),
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
            match api::save_subcategory(&dto).await {
                Ok(()) => on_saved(),
                Err(e) => {
                    log::error!("Failed to save subcategory {}: {}", dto.slug, e);
                    set_error.set(Some(format!("Save failed: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    let disabled = Signal::derive(move || saving.get());
    let save_disabled = Signal::derive(move || saving.get() || uploading.get());

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

                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Slug"</Label>
                            <Input value=slug placeholder="olive-oil" disabled=disabled />
                        </div>
                        <div class="form__group">
                            <Label>"Main category"</Label>
                            <Select value=category_type>
                                <option value="single">"Single"</option>
                                <option value="bulk">"Bulk"</option>
                            </Select>
                        </div>
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
                    <div class="form__group">
                        <Label>"Banner image"</Label>
                        <ImageUploadField
                            value=banner_image_url
                            folder=UploadFolder::Banners
                            uploading=uploading
                        />
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
                    <Button appearance=ButtonAppearance::Primary on_click=on_save disabled=save_disabled>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_type() {
        let rows = vec![
            Subcategory::new("olives", "single", "Olives", "", 1),
            Subcategory::new("olives-bulk", "bulk", "Olives", "", 1),
        ];
        assert_eq!(filter_by_type(&rows, "").len(), 2);
        let bulk = filter_by_type(&rows, "bulk");
        assert_eq!(bulk.len(), 1);
        assert_eq!(bulk[0].slug, "olives-bulk");
    }
}
