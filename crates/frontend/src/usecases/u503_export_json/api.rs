use contracts::domain::a002_subcategory::aggregate::Subcategory;
use contracts::domain::a003_product::aggregate::Product;

use crate::shared::export::{export_to_json, PRODUCTS_EXPORT_FILE, SUBCATEGORIES_EXPORT_FILE};
use crate::shared::supabase;

/// Downloads every product; returns how many rows were written
pub async fn export_products() -> Result<usize, String> {
    let rows = supabase::fetch_all::<Product>("sort_order").await?;
    export_to_json(&rows, PRODUCTS_EXPORT_FILE)?;
    Ok(rows.len())
}

pub async fn export_subcategories() -> Result<usize, String> {
    let rows = supabase::fetch_all::<Subcategory>("sort_order").await?;
    export_to_json(&rows, SUBCATEGORIES_EXPORT_FILE)?;
    Ok(rows.len())
}
