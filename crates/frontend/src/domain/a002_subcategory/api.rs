use contracts::domain::a002_subcategory::aggregate::{Subcategory, SubcategoryDto};

use crate::shared::supabase;

pub async fn fetch_subcategories() -> Result<Vec<Subcategory>, String> {
    supabase::fetch_all::<Subcategory>("sort_order").await
}

/// Upserts by slug; a renamed slug updates the original row instead
pub async fn save_subcategory(dto: &SubcategoryDto) -> Result<(), String> {
    let row = dto.to_row()?;
    match &dto.editing {
        Some(original) if *original != row.slug => {
            supabase::update::<Subcategory, _>(original, &row).await
        }
        _ => supabase::upsert::<Subcategory, _>(&[row]).await,
    }
}

pub async fn delete_subcategory(slug: &str) -> Result<(), String> {
    supabase::delete::<Subcategory>(slug).await
}
