use contracts::domain::a003_product::aggregate::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_product::api;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{detail_tab_label, product_detail_key, tab_label_for_key};
use crate::layout::tabs::tab_labels::PRODUCT_NEW_KEY;
use crate::shared::icons::icon;
use crate::shared::image::FallbackImage;
use crate::shared::list_utils::{confirm_delete, highlight_matches, SearchInput};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

const LIST_TAB_KEY: &str = "a003_product";

fn row_label(row: &Product) -> String {
    if row.name_en.trim().is_empty() {
        row.id.clone()
    } else {
        row.name_en.clone()
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let items: RwSignal<Vec<Product>> = RwSignal::new(Vec::new());
    let search = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        let term = search.get_untracked();
        spawn_local(async move {
            match api::fetch_products(&term).await {
                Ok(data) => items.set(data),
                Err(e) => {
                    log::error!("Failed to load products: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    // Reload whenever the list tab comes back to front (after a detail tab saves)
    Effect::new(move |_| {
        if ctx.active.get().as_deref() == Some(LIST_TAB_KEY) {
            load_data();
        }
    });

    let open_details = move |row: &Product| {
        let key = product_detail_key(&row.id);
        let title = detail_tab_label("Product", &row_label(row));
        ctx.open_tab(&key, &title);
    };

    let delete_row = move |id: String, label: String| {
        if !confirm_delete(&format!("product '{}'", label)) {
            return;
        }
        spawn_local(async move {
            match api::delete_product(&id).await {
                Ok(()) => load_data(),
                Err(e) => {
                    log::error!("Failed to delete product {}: {}", id, e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    view! {
        <PageFrame page_id="a003_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Products"</h1>
                    <Badge>{move || items.with(|i| i.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || search.get())
                        on_change=Callback::new(move |text: String| {
                            search.set(text);
                            load_data();
                        })
                        placeholder="Search by name"
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| ctx.open_tab(PRODUCT_NEW_KEY, tab_label_for_key(PRODUCT_NEW_KEY))
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
                                <TableHeaderCell min_width=70.0>"Image"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Type"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Subcategory"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Sections"</TableHeaderCell>
                                <TableHeaderCell min_width=70.0>"Order"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0></TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || items.get()
                                key=|p| format!("{}:{:?}", p.id, p.updated_at)
                                children=move |row: Product| {
                                    let id = row.id.clone();
                                    let label = row_label(&row);
                                    let name_en = row.name_en.clone();
                                    let name_ar = row.name_ar.clone().unwrap_or_default();
                                    let image = row.image_url.clone().unwrap_or_default();
                                    let sections = row.section_keys().join(", ");
                                    let row_for_open = row.clone();
                                    let row_for_edit = row.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                {(!image.is_empty()).then(|| view! {
                                                    <FallbackImage src=image.clone() alt="" class="table__thumb" />
                                                })}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a href="#" class="table__link" on:click=move |ev| {
                                                        ev.prevent_default();
                                                        open_details(&row_for_open);
                                                    }>
                                                        {move || highlight_matches(&name_en, &search.get())}
                                                    </a>
                                                    <div class="table__secondary" dir="rtl">
                                                        {move || highlight_matches(&name_ar, &search.get())}
                                                    </div>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{row.main_type.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {row.sub_slug.clone().unwrap_or_default()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{sections}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {row.sort_order.map(|v| v.to_string()).unwrap_or_else(|| "-".into())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {row.featured.then(|| view! { <span class="badge badge--warning">"Featured"</span> })}
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
                                                    on_click=move |_| open_details(&row_for_edit)
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_row(id.clone(), label.clone())
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
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_label_falls_back_to_id() {
        let mut row: Product = serde_json::from_str(r#"{"id": "p-1", "name_en": "Fig Jam"}"#).unwrap();
        assert_eq!(row_label(&row), "Fig Jam");
        row.name_en = "  ".into();
        assert_eq!(row_label(&row), "p-1");
    }
}
