use contracts::domain::a001_main_category::aggregate::{MainCategory, MainCategoryDto};

use crate::shared::supabase;

pub async fn fetch_main_categories() -> Result<Vec<MainCategory>, String> {
    supabase::fetch_all::<MainCategory>("sort_order").await
}

/// Inserts a new category or updates the one being edited (its slug may change)
pub async fn save_main_category(dto: &MainCategoryDto) -> Result<(), String> {
    let row = dto.to_row()?;
    match &dto.editing {
        Some(original) => supabase::update::<MainCategory, _>(original, &row).await,
        None => supabase::insert::<MainCategory, _>(&row).await,
    }
}

pub async fn delete_main_category(slug: &str) -> Result<(), String> {
    supabase::delete::<MainCategory>(slug).await
}
