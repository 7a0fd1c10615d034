use contracts::domain::a004_section::aggregate::{Section, SectionDto};

use crate::shared::supabase;

pub async fn fetch_sections() -> Result<Vec<Section>, String> {
    supabase::fetch_all::<Section>("key").await
}

/// Upserts by key; a renamed key updates the original row instead
pub async fn save_section(dto: &SectionDto) -> Result<(), String> {
    let row = dto.to_row()?;
    match &dto.editing {
        Some(original) if *original != row.key => supabase::update::<Section, _>(original, &row).await,
        _ => supabase::upsert::<Section, _>(&[row]).await,
    }
}

pub async fn delete_section(key: &str) -> Result<(), String> {
    supabase::delete::<Section>(key).await
}
