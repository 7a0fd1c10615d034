use contracts::domain::a001_main_category::aggregate::MainCategory;
use contracts::domain::a002_subcategory::aggregate::Subcategory;
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::a004_section::aggregate::Section;
use contracts::domain::common::TableRow;
use contracts::shared::dashboard::{DashboardStats, StatusCheck};
use contracts::shared::sample_data::default_sections;

use crate::shared::supabase;

/// Counters over all four tables, fetched concurrently
pub async fn fetch_stats() -> Result<DashboardStats, String> {
    let (products, subcategories, sections, main_categories) = futures::join!(
        supabase::fetch_all::<Product>("sort_order"),
        supabase::fetch_all::<Subcategory>("sort_order"),
        supabase::fetch_all::<Section>("key"),
        supabase::fetch_all::<MainCategory>("sort_order"),
    );
    Ok(DashboardStats::from_rows(
        &products?,
        &subcategories?,
        &sections?,
        &main_categories?,
    ))
}

/// One check per table plus one for the storage bucket
pub async fn run_status_checks() -> Vec<StatusCheck> {
    let (products, subcategories, sections, main_categories, bucket) = futures::join!(
        supabase::ping_table::<Product>(),
        supabase::ping_table::<Subcategory>(),
        supabase::ping_table::<Section>(),
        supabase::ping_table::<MainCategory>(),
        supabase::list("", 1),
    );
    vec![
        StatusCheck::table(Product::table_name(), products),
        StatusCheck::table(Subcategory::table_name(), subcategories),
        StatusCheck::table(Section::table_name(), sections),
        StatusCheck::table(MainCategory::table_name(), main_categories),
        StatusCheck::bucket(bucket.map(|_| ())),
    ]
}

/// Creates the hero and about rows that do not exist yet; returns how many
pub async fn ensure_default_sections() -> Result<usize, String> {
    let existing = supabase::fetch_all::<Section>("key").await?;
    let missing: Vec<Section> = default_sections()
        .into_iter()
        .filter(|d| !existing.iter().any(|s| s.key == d.key))
        .collect();
    if missing.is_empty() {
        return Ok(0);
    }
    supabase::upsert::<Section, _>(&missing).await?;
    log::info!("Created {} default section(s)", missing.len());
    Ok(missing.len())
}
