use contracts::domain::a001_main_category::aggregate::MainCategory;
use contracts::domain::a002_subcategory::aggregate::Subcategory;
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::a004_section::aggregate::Section;
use contracts::shared::catalog::{assemble, CatalogCollections};
use leptos::prelude::*;

use super::state::StorefrontContext;
use crate::shared::config::config;
use crate::shared::supabase;

fn keep<T>(collection: &str, result: Result<Vec<T>, String>) -> Option<Vec<T>> {
    match result {
        Ok(rows) => {
            log::debug!("Loaded {} {}", rows.len(), collection);
            Some(rows)
        }
        Err(e) => {
            log::warn!("Failed to load {}: {}", collection, e);
            None
        }
    }
}

/// Fetches the four collections and replaces the catalog.
///
/// A failed collection falls back to the base catalog's version; a load
/// overtaken by a newer one is dropped.
pub async fn load_catalog(ctx: StorefrontContext) {
    if !config().is_configured() {
        log::info!("Backend not configured, showing built-in catalog");
        return;
    }

    let ticket = ctx.loads.try_update_value(|c| c.advance());
    let Some(ticket) = ticket else { return };
    ctx.loading.set(true);

    let (main_categories, subcategories, products, sections) = futures::join!(
        supabase::fetch_active::<MainCategory>("sort_order"),
        supabase::fetch_active::<Subcategory>("sort_order"),
        supabase::fetch_active::<Product>("sort_order"),
        supabase::fetch_all::<Section>("key"),
    );

    let collections = CatalogCollections {
        main_categories: keep("main categories", main_categories),
        subcategories: keep("subcategories", subcategories),
        products: keep("products", products),
        sections: keep("sections", sections),
    };

    let current = ctx
        .loads
        .try_with_value(|c| c.is_current(ticket))
        .unwrap_or(false);
    if !current {
        log::debug!("Discarding stale catalog load {:?}", ticket);
        return;
    }

    let failed = collections.failed();
    if !failed.is_empty() {
        log::error!("Catalog load failed for: {}", failed.join(", "));
    }
    ctx.load_failures.set(failed);

    let Some((catalog, report)) = ctx.base.try_with_value(|base| assemble(base, &collections)) else {
        ctx.loading.set(false);
        return;
    };
    if !report.any_remote() {
        log::warn!("No remote collection loaded, keeping built-in catalog");
    }
    log::info!(
        "Catalog ready: {} products, {} sections",
        catalog.products.len(),
        catalog.sections.len()
    );
    ctx.replace_catalog(catalog);
    ctx.loading.set(false);
}
