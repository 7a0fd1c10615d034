//! Tab content registry: the one place that maps `tab.key` to a view

use super::tab_labels::{PRODUCT_DETAIL_PREFIX, PRODUCT_NEW_KEY};
use crate::dashboards::OverviewDashboard;
use crate::domain::a001_main_category::ui::list::MainCategoryList;
use crate::domain::a002_subcategory::ui::list::SubcategoryList;
use crate::domain::a003_product::ui::details::ProductDetails;
use crate::domain::a003_product::ui::list::ProductList;
use crate::domain::a004_section::ui::list::SectionList;
use crate::layout::global_context::AppGlobalContext;
use crate::usecases::u501_import_defaults::ImportDefaultsPage;
use crate::usecases::u502_media_library::MediaLibraryPage;
use crate::usecases::u503_export_json::ExportJsonPage;
use leptos::prelude::*;

fn product_details(id: Option<String>, key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let key_for_saved = key.to_string();
    let key_for_cancel = key.to_string();
    view! {
        <ProductDetails
            id=id
            on_saved=Callback::new(move |_| {
                tabs_store.close_tab(&key_for_saved);
                tabs_store.activate_tab("a003_product");
            })
            on_cancel=Callback::new(move |_| tabs_store.close_tab(&key_for_cancel))
        />
    }
    .into_any()
}

/// Content of the tab with `key`, or a placeholder for an unknown key
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Dashboards
        // ═══════════════════════════════════════════════════════════════════
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Tables (a001-a004)
        // ═══════════════════════════════════════════════════════════════════
        "a001_main_category" => view! { <MainCategoryList /> }.into_any(),
        "a002_subcategory" => view! { <SubcategoryList /> }.into_any(),
        "a003_product" => view! { <ProductList /> }.into_any(),
        PRODUCT_NEW_KEY => product_details(None, key, tabs_store),
        k if k.starts_with(PRODUCT_DETAIL_PREFIX) => {
            let id = k.trim_start_matches(PRODUCT_DETAIL_PREFIX).to_string();
            product_details(Some(id), key, tabs_store)
        }
        "a004_section" => view! { <SectionList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Use cases (u501-u503)
        // ═══════════════════════════════════════════════════════════════════
        "u501_import_defaults" => view! { <ImportDefaultsPage /> }.into_any(),
        "u502_media_library" => view! { <MediaLibraryPage /> }.into_any(),
        "u503_export_json" => view! { <ExportJsonPage /> }.into_any(),

        _ => {
            log::warn!("Unknown tab key: {}", key);
            view! {
                <div class="placeholder">
                    <h2>"Not implemented yet"</h2>
                    <p>{format!("Screen '{}' does not exist", key)}</p>
                </div>
            }
            .into_any()
        }
    }
}
