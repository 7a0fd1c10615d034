//! Tab titles, the one place that maps a tab key to its label.
//!
//! Table screens take their list name from the row type in contracts.

use contracts::domain::a001_main_category::aggregate::MainCategory;
use contracts::domain::a002_subcategory::aggregate::Subcategory;
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::a004_section::aggregate::Section;
use contracts::domain::common::TableRow;

/// Key prefix of a product details tab; the product id follows it
pub const PRODUCT_DETAIL_PREFIX: &str = "a003_product_detail_";
/// Details tab of a product that is not saved yet
pub const PRODUCT_NEW_KEY: &str = "a003_product_new";

/// Readable title of the tab with `key`; empty for an unknown key
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        // ── Tables (a00x) ─────────────────────────────────────────────────
        "a001_main_category" => MainCategory::list_name(),
        "a002_subcategory" => Subcategory::list_name(),
        "a003_product" => Product::list_name(),
        "a004_section" => Section::list_name(),
        PRODUCT_NEW_KEY => "New product",

        // ── Use cases (u5xx) ──────────────────────────────────────────────
        "u501_import_defaults" => "Import defaults",
        "u502_media_library" => "Media library",
        "u503_export_json" => "Export JSON",

        // ── Dashboards (d4xx) ─────────────────────────────────────────────
        "d400_overview" => "Dashboard",

        _ => "",
    }
}

/// `<entity> · <identifier>`
///
/// Example: `detail_tab_label("Product", "Fig Jam")` -> `"Product · Fig Jam"`
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

pub fn product_detail_key(id: &str) -> String {
    format!("{}{}", PRODUCT_DETAIL_PREFIX, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_have_labels() {
        for key in [
            "a001_main_category",
            "a002_subcategory",
            "a003_product",
            "a004_section",
            "u501_import_defaults",
            "u502_media_library",
            "u503_export_json",
            "d400_overview",
        ] {
            assert!(!tab_label_for_key(key).is_empty(), "no label for {}", key);
        }
        assert_eq!(tab_label_for_key("x999_unknown"), "");
    }

    #[test]
    fn test_detail_keys() {
        assert_eq!(product_detail_key("42"), "a003_product_detail_42");
        assert_eq!(detail_tab_label("Product", "Fig Jam"), "Product · Fig Jam");
    }
}
