use contracts::domain::a002_subcategory::aggregate::Subcategory;
use contracts::shared::dashboard::ImportReport;
use contracts::shared::sample_data::default_subcategories;

use crate::shared::supabase;

pub async fn fetch_existing_slugs() -> Result<Vec<String>, String> {
    let rows = supabase::fetch_all::<Subcategory>("sort_order").await?;
    Ok(rows.into_iter().map(|s| s.slug).collect())
}

/// Splits the defaults by whether their slug already exists
pub fn classify(defaults: &[Subcategory], existing: &[String]) -> ImportReport {
    let updated = defaults
        .iter()
        .filter(|d| existing.iter().any(|slug| slug == &d.slug))
        .count();
    ImportReport {
        created: defaults.len() - updated,
        updated,
        failed: 0,
    }
}

/// Upserts the default subcategories one main type at a time so a failing
/// batch does not hide the rest
pub async fn import_defaults() -> Result<ImportReport, String> {
    let existing = fetch_existing_slugs().await?;
    let defaults = default_subcategories();
    let mut report = ImportReport::default();

    for main_type in ["single", "bulk"] {
        let batch: Vec<Subcategory> = defaults
            .iter()
            .filter(|d| d.category_type == main_type)
            .cloned()
            .collect();
        if batch.is_empty() {
            continue;
        }
        match supabase::upsert::<Subcategory, _>(&batch).await {
            Ok(()) => {
                let counted = classify(&batch, &existing);
                report.created += counted.created;
                report.updated += counted.updated;
            }
            Err(e) => {
                log::error!("Import of {} subcategories failed: {}", main_type, e);
                report.failed += batch.len();
            }
        }
    }
    log::info!("{}", report.summary());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_counts_new_and_existing() {
        let defaults = vec![
            Subcategory::new("olives", "single", "Olives", "", 1),
            Subcategory::new("pickles", "single", "Pickles", "", 2),
            Subcategory::new("olives-bulk", "bulk", "Olives", "", 1),
        ];
        let report = classify(&defaults, &["olives".to_string()]);
        assert_eq!(report.created, 2);
        assert_eq!(report.updated, 1);
        assert_eq!(report.failed, 0);
    }
}
