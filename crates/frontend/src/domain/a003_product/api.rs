use contracts::domain::a003_product::aggregate::{Product, ProductDto, ProductSectionTag};
use contracts::domain::common::TableRow;

use crate::shared::api_utils::RestQuery;
use crate::shared::supabase;

const SECTIONS_TABLE: &str = "product_sections";
const SEARCH_COLUMNS: [&str; 2] = ["name_en", "name_ar"];

/// Products with their section tags; `term` narrows by English or Arabic name
pub async fn fetch_products(term: &str) -> Result<Vec<Product>, String> {
    supabase::select(
        RestQuery::table(Product::table_name())
            .select(Product::select_columns())
            .search(&SEARCH_COLUMNS, term)
            .order("sort_order", true),
    )
    .await
}

pub async fn fetch_product(id: &str) -> Result<Product, String> {
    let rows: Vec<Product> = supabase::select(
        RestQuery::table(Product::table_name())
            .select(Product::select_columns())
            .eq(Product::key_column(), id)
            .limit(1),
    )
    .await?;
    rows.into_iter()
        .next()
        .ok_or_else(|| format!("Product {} not found", id))
}

/// Writes the product row, then replaces its section tags.
/// Returns the id (generated for new products).
pub async fn save_product(dto: &ProductDto) -> Result<String, String> {
    let payload = dto.to_payload()?;
    let id = payload.id.clone();

    if dto.is_edit_mode() {
        supabase::update::<Product, _>(&id, &payload).await?;
    } else {
        supabase::insert::<Product, _>(&payload).await?;
    }

    supabase::delete_where(SECTIONS_TABLE, "product_id", &id).await?;
    let rows: Vec<ProductSectionTag> = dto.section_rows(&id);
    if !rows.is_empty() {
        supabase::insert_into(SECTIONS_TABLE, &rows).await?;
    }
    log::info!("Saved product {} with {} section tag(s)", id, rows.len());
    Ok(id)
}

/// Removes the tags first so no join rows point at a missing product
pub async fn delete_product(id: &str) -> Result<(), String> {
    supabase::delete_where(SECTIONS_TABLE, "product_id", id).await?;
    supabase::delete::<Product>(id).await
}
