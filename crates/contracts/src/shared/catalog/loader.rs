//! Assembling a catalog from independently fetched collections
//!
//! Each collection arrives as `Some(rows)` when its fetch succeeded and
//! `None` when it failed. A failed or empty collection keeps the base
//! catalog's version of that part; the others still apply.

use super::model::{normalize_slug, Catalog, CatalogProduct, MainCategoryEntry, SectionEntry, DEFAULT_BANNER_KEY};
use super::registry::SubcategoryRegistry;
use crate::domain::a001_main_category::aggregate::MainCategory;
use crate::domain::a002_subcategory::aggregate::Subcategory;
use crate::domain::a003_product::aggregate::Product;
use crate::domain::a004_section::aggregate::Section;
use crate::shared::sample_data::default_main_categories;

/// Raw results of one load
#[derive(Debug, Clone, Default)]
pub struct CatalogCollections {
    pub main_categories: Option<Vec<MainCategory>>,
    pub subcategories: Option<Vec<Subcategory>>,
    pub products: Option<Vec<Product>>,
    pub sections: Option<Vec<Section>>,
}

impl CatalogCollections {
    /// Names of the collections whose fetch failed, in load order
    pub fn failed(&self) -> Vec<&'static str> {
        [
            ("main_categories", self.main_categories.is_none()),
            ("subcategories", self.subcategories.is_none()),
            ("products", self.products.is_none()),
            ("sections", self.sections.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, failed)| failed.then_some(name))
        .collect()
    }
}

/// Which collections replaced the base catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub main_categories: bool,
    pub subcategories: bool,
    pub products: bool,
    pub sections: bool,
}

impl LoadReport {
    pub fn any_remote(&self) -> bool {
        self.main_categories || self.subcategories || self.products || self.sections
    }
}

fn active_non_empty<T>(rows: &Option<Vec<T>>, is_active: impl Fn(&T) -> bool) -> Option<Vec<&T>> {
    let active: Vec<&T> = rows.as_ref()?.iter().filter(|r| is_active(r)).collect();
    (!active.is_empty()).then_some(active)
}

/// New catalog built from `base` and whatever `collections` delivered
pub fn assemble(base: &Catalog, collections: &CatalogCollections) -> (Catalog, LoadReport) {
    let mut catalog = base.clone();
    let mut report = LoadReport::default();

    match active_non_empty(&collections.main_categories, |m| m.active) {
        Some(mut rows) => {
            rows.sort_by_key(|m| m.sort_order);
            catalog.main_categories = rows.into_iter().map(MainCategoryEntry::from).collect();
            report.main_categories = true;
        }
        None if catalog.main_categories.is_empty() => {
            catalog.main_categories = default_main_categories()
                .iter()
                .map(MainCategoryEntry::from)
                .collect();
        }
        None => {}
    }

    if let Some(rows) = active_non_empty(&collections.subcategories, |s| s.active) {
        let owned: Vec<Subcategory> = rows.iter().map(|r| (*r).clone()).collect();
        catalog.registry = SubcategoryRegistry::from_rows(&owned);
        for row in rows {
            if let Some(url) = row
                .banner_image_url
                .as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
            {
                catalog.banners.insert(normalize_slug(&row.slug), url.to_string());
            }
        }
        report.subcategories = true;
    }
    if !catalog.banners.contains_key(DEFAULT_BANNER_KEY) {
        catalog.banners.insert(
            DEFAULT_BANNER_KEY.to_string(),
            super::model::DEFAULT_BANNER.to_string(),
        );
    }

    if let Some(rows) = active_non_empty(&collections.products, |p| p.active) {
        catalog.products = rows.into_iter().map(CatalogProduct::from).collect();
        report.products = true;
    }

    if let Some(rows) = collections.sections.as_ref().filter(|r| !r.is_empty()) {
        for row in rows {
            if row.key.trim().is_empty() {
                continue;
            }
            catalog.upsert_section(SectionEntry::from(row));
        }
        report.sections = true;
    }

    (catalog, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Language;
    use crate::shared::catalog::filter::{visible_products, FilterState};
    use crate::shared::sample_data::sample_catalog;

    fn product(json: &str) -> Product {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_failed_collections_keep_base() {
        let base = sample_catalog();
        let collections = CatalogCollections {
            products: Some(vec![product(
                r#"{"id": 1, "name_en": "Olives", "name_ar": "", "main_type": "single", "sub_slug": "olives"}"#,
            )]),
            ..Default::default()
        };
        let (catalog, report) = assemble(&base, &collections);

        assert!(report.products);
        assert!(!report.subcategories);
        assert_eq!(catalog.products.len(), 1);
        assert_eq!(catalog.products[0].name.get(Language::Ar), "Olives");
        assert_eq!(catalog.registry, base.registry);
        assert_eq!(catalog.main_categories, base.main_categories);
    }

    #[test]
    fn test_empty_main_categories_default_to_single_and_bulk() {
        let base = Catalog::default();
        let collections = CatalogCollections {
            main_categories: Some(vec![]),
            ..Default::default()
        };
        let (catalog, _) = assemble(&base, &collections);
        let slugs: Vec<&str> = catalog.main_categories.iter().map(|m| m.slug.as_str()).collect();
        assert_eq!(slugs, vec!["single", "bulk"]);
    }

    #[test]
    fn test_inactive_rows_skipped() {
        let collections = CatalogCollections {
            products: Some(vec![
                product(r#"{"id": 1, "name_en": "A", "main_type": "single", "sub_slug": "olives", "active": false}"#),
                product(r#"{"id": 2, "name_en": "B", "main_type": "single", "sub_slug": "olives"}"#),
            ]),
            ..Default::default()
        };
        let (catalog, _) = assemble(&sample_catalog(), &collections);
        assert_eq!(catalog.products.len(), 1);
        assert_eq!(catalog.products[0].id, "2");
    }

    #[test]
    fn test_subcategories_replace_registry_and_banners() {
        let mut olives = Subcategory::new("green-olives", "single", "Green Olives", "", 1);
        olives.banner_image_url = Some("https://cdn.example/olives.png".into());
        let collections = CatalogCollections {
            subcategories: Some(vec![olives]),
            ..Default::default()
        };
        let (catalog, report) = assemble(&sample_catalog(), &collections);
        assert!(report.subcategories);
        assert_eq!(catalog.registry.keys("single"), vec!["all", "green olives"]);
        assert_eq!(catalog.banner_for("green olives"), "https://cdn.example/olives.png");
    }

    #[test]
    fn test_failed_lists_missing_collections() {
        let collections = CatalogCollections {
            main_categories: Some(vec![]),
            products: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(collections.failed(), vec!["subcategories", "sections"]);

        let (_, report) = assemble(&sample_catalog(), &collections);
        assert!(!report.any_remote());
    }

    #[test]
    fn test_load_is_idempotent() {
        let collections = CatalogCollections {
            products: Some(vec![product(
                r#"{"id": 5, "name_en": "Tahini", "main_type": "single", "sub_slug": "tahhene", "sort_order": 3}"#,
            )]),
            sections: Some(vec![Section::new("hero", "Hello", "", "", "")]),
            ..Default::default()
        };
        let base = sample_catalog();
        let (first, _) = assemble(&base, &collections);
        let (second, _) = assemble(&first, &collections);
        assert_eq!(first, second);

        let state = FilterState::initial(&second, Language::En);
        assert_eq!(visible_products(&second, &state).len(), 1);
    }
}
