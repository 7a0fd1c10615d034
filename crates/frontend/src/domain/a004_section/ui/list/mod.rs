use contracts::domain::a004_section::aggregate::{Section, SectionDto};
use contracts::shared::catalog::sections::is_reserved;
use contracts::shared::media::UploadFolder;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_section::api;
use crate::shared::date_utils::format_optional;
use crate::shared::icons::icon;
use crate::shared::image::ImageUploadField;
use crate::shared::list_utils::confirm_delete;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut short: String = text.chars().take(max).collect();
    short.push('…');
    short
}

#[component]
pub fn SectionList() -> impl IntoView {
    let items: RwSignal<Vec<Section>> = RwSignal::new(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let editing: RwSignal<Option<SectionDto>> = RwSignal::new(None);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_sections().await {
                Ok(data) => items.set(data),
                Err(e) => {
                    log::error!("Failed to load sections: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    load_data();

    let delete_row = move |key: String| {
        if !confirm_delete(&format!("section '{}'", key)) {
            return;
        }
        spawn_local(async move {
            match api::delete_section(&key).await {
                Ok(()) => load_data(),
                Err(e) => {
                    log::error!("Failed to delete section {}: {}", key, e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a004_section--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Sections"</h1>
                    <Badge>{move || items.with(|i| i.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(SectionDto::default()))
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

                <p class="page__hint">
                    "Page sections (hero, about) patch the storefront; any other key titles the region of products tagged with it."
                </p>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=120.0>"Key"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Title (EN)"</TableHeaderCell>
                                <TableHeaderCell min_width=220.0>"Body (EN)"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Order"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Updated"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|s| format!("{}:{:?}:{:?}", s.key, s.updated_at, s.title_en)
                                children=move |row: Section| {
                                    let dto = SectionDto::from_row(&row);
                                    let key = row.key.clone();
                                    let kind = if is_reserved(&row.key) { "badge badge--neutral" } else { "badge badge--success" };
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span class=kind>{row.key.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {row.title_en.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {truncate_chars(row.body_en.as_deref().unwrap_or(""), 80)}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {row.sort_order.map(|v| v.to_string()).unwrap_or_else(|| "-".into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_optional(row.updated_at.as_deref())}</TableCellLayout>
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
                                                    on_click=move |_| delete_row(key.clone())
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
                    <SectionForm
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
fn SectionForm<F1, F2>(dto: SectionDto, on_close: F1, on_saved: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let title = match &dto.editing {
        Some(key) => format!("Edit section: {}", key),
        None => "New section".to_string(),
    };
    let editing_key = dto.editing.clone();

    let key = RwSignal::new(dto.key);
    let title_en = RwSignal::new(dto.title_en);
    let title_ar = RwSignal::new(dto.title_ar);
    let body_en = RwSignal::new(dto.body_en);
    let body_ar = RwSignal::new(dto.body_ar);
    let image_url = RwSignal::new(dto.image_url);
    let sort_order = RwSignal::new(dto.sort_order);
    let overlay_color = RwSignal::new(dto.overlay_color);
    let overlay_opacity = RwSignal::new(dto.overlay_opacity);
    let uploading = RwSignal::new(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = SectionDto {
            editing: editing_key.clone(),
            key: key.get(),
            title_en: title_en.get(),
            title_ar: title_ar.get(),
            body_en: body_en.get(),
            body_ar: body_ar.get(),
            image_url: image_url.get(),
            sort_order: sort_order.get(),
            overlay_color: overlay_color.get(),
            overlay_opacity: overlay_opacity.get(),
        };
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::save_section(&dto).await {
                Ok(()) => on_saved(),
                Err(e) => {
                    log::error!("Failed to save section {}: {}", dto.key, e);
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
            <div class="modal modal--wide" on:click=move |ev| ev.stop_propagation()>
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
                            <Label>"Key"</Label>
                            <Input value=key placeholder="holiday-special" disabled=disabled />
                        </div>
                        <div class="form__group">
                            <Label>"Sort order"</Label>
                            <Input value=sort_order input_type=InputType::Number disabled=disabled />
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
                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Body (EN)"</Label>
                            <Textarea value=body_en disabled=disabled />
                        </div>
                        <div class="form__group">
                            <Label>"Body (AR)"</Label>
                            <Textarea value=body_ar disabled=disabled attr:dir="rtl" />
                        </div>
                    </div>
                    <div class="form__group">
                        <Label>"Image"</Label>
                        <ImageUploadField
                            value=image_url
                            folder=UploadFolder::Sections
                            uploading=uploading
                        />
                    </div>
                    <div class="form__row">
                        <div class="form__group">
                            <Label>"Overlay color"</Label>
                            <Input value=overlay_color placeholder="#000000" disabled=disabled />
                        </div>
                        <div class="form__group">
                            <Label>"Overlay opacity (0-1)"</Label>
                            <Input value=overlay_opacity placeholder="0.5" disabled=disabled />
                        </div>
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
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("abcdef", 3), "abc…");
        assert_eq!(truncate_chars("مرحبا بكم", 5), "مرحبا…");
    }
}
