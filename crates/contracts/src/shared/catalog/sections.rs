//! Derived catalog sections
//!
//! Featured, bestsellers, new-arrivals and seasonal are fixed regions; any
//! other section tag carried by a product opens a custom region on demand.

use super::filter::sort_by_order;
use super::model::{Catalog, CatalogProduct};
use super::registry::capitalize_words;
use crate::enums::Language;
use crate::shared::i18n;
use serde::{Deserialize, Serialize};

pub const FEATURED: &str = "featured";
pub const BESTSELLERS: &str = "bestsellers";
pub const NEW_ARRIVALS: &str = "new-arrivals";
pub const SEASONAL: &str = "seasonal";

/// Keys that never open a custom region: derived regions and page regions
pub const RESERVED_SECTION_KEYS: [&str; 8] = [
    FEATURED,
    BESTSELLERS,
    NEW_ARRIVALS,
    SEASONAL,
    "hero",
    "about",
    "products",
    "contact",
];

/// Fixed derived regions in page order, with the UI string of their default title
pub const FIXED_REGIONS: [(&str, &str); 4] = [
    (FEATURED, "sections.featured"),
    (BESTSELLERS, "sections.bestsellers"),
    (NEW_ARRIVALS, "sections.newArrivals"),
    (SEASONAL, "sections.seasonal"),
];

pub fn is_reserved(key: &str) -> bool {
    RESERVED_SECTION_KEYS.contains(&key)
}

/// `holiday_special-box` -> `Holiday Special Box`
pub fn humanize_key(key: &str) -> String {
    let spaced: String = key
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();
    let words: Vec<&str> = spaced.split_whitespace().collect();
    capitalize_words(&words.join(" "))
}

/// Membership rule of a derived region
pub fn in_region(product: &CatalogProduct, key: &str) -> bool {
    if key == FEATURED {
        product.featured
    } else {
        product.has_section(key)
    }
}

/// Products of one derived region, sorted like the grid
pub fn region_products<'a>(catalog: &'a Catalog, key: &str) -> Vec<&'a CatalogProduct> {
    let mut items: Vec<&CatalogProduct> =
        catalog.products.iter().filter(|p| in_region(p, key)).collect();
    sort_by_order(&mut items);
    items
}

/// Region title: the localized section record title, else `default`
pub fn region_title(catalog: &Catalog, key: &str, default: &str, lang: Language) -> String {
    catalog
        .section(key)
        .and_then(|s| s.title_for(lang))
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

/// Heading and intro of a fixed page region such as `contact` or `products`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionHeader {
    pub title: String,
    /// Empty when neither the record nor the UI strings provide one
    pub intro: String,
}

/// Header of page region `key`: the section record's localized title and
/// body, each falling back to its UI string when blank
pub fn region_header(
    catalog: &Catalog,
    key: &str,
    title_key: &'static str,
    intro_key: Option<&'static str>,
    lang: Language,
) -> RegionHeader {
    let entry = catalog.section(key);
    let title = region_title(catalog, key, i18n::t(title_key, lang), lang);
    let intro = entry
        .map(|s| s.body.get(lang).trim())
        .filter(|b| !b.is_empty())
        .or_else(|| intro_key.map(|k| i18n::t(k, lang)))
        .unwrap_or_default()
        .to_string();
    RegionHeader { title, intro }
}

/// One rendered derived region; `products` is never empty
#[derive(Debug, Clone, PartialEq)]
pub struct RegionView<'a> {
    pub key: String,
    pub title: String,
    pub custom: bool,
    pub products: Vec<&'a CatalogProduct>,
}

/// Custom section keys in first-appearance order across the collection
pub fn custom_keys_in_appearance_order(catalog: &Catalog) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for product in &catalog.products {
        for key in &product.sections {
            if !is_reserved(key) && !keys.contains(key) {
                keys.push(key.clone());
            }
        }
    }
    keys
}

/// Registry of custom regions keyed by section key.
///
/// Syncing appends keys it has not seen; existing regions are reused, so
/// repeated syncs over the same catalog are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionRegistry {
    keys: Vec<String>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers missing custom keys; returns how many were created
    pub fn sync(&mut self, catalog: &Catalog) -> usize {
        let mut created = 0;
        for key in custom_keys_in_appearance_order(catalog) {
            if !self.keys.contains(&key) {
                self.keys.push(key);
                created += 1;
            }
        }
        created
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Registered keys ordered by section `sort_order` (missing last), then registration
    pub fn ordered_keys(&self, catalog: &Catalog) -> Vec<String> {
        let mut keys: Vec<&String> = self.keys.iter().collect();
        keys.sort_by_key(|k| {
            catalog
                .section(k)
                .and_then(|s| s.sort_order)
                .map(i64::from)
                .unwrap_or(i64::MAX)
        });
        keys.into_iter().cloned().collect()
    }
}

/// Every non-empty derived region: fixed ones first, then custom
pub fn derived_regions<'a>(
    catalog: &'a Catalog,
    registry: &RegionRegistry,
    lang: Language,
) -> Vec<RegionView<'a>> {
    let mut regions = Vec::new();
    for (key, title_key) in FIXED_REGIONS {
        let products = region_products(catalog, key);
        if products.is_empty() {
            continue;
        }
        regions.push(RegionView {
            key: key.to_string(),
            title: region_title(catalog, key, i18n::t(title_key, lang), lang),
            custom: false,
            products,
        });
    }
    for key in registry.ordered_keys(catalog) {
        let products = region_products(catalog, &key);
        if products.is_empty() {
            continue;
        }
        regions.push(RegionView {
            title: region_title(catalog, &key, &humanize_key(&key), lang),
            key,
            custom: true,
            products,
        });
    }
    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_section::aggregate::Section;
    use crate::shared::catalog::localization::{LocalizedList, LocalizedText};
    use crate::shared::catalog::model::SectionEntry;

    fn product(id: &str, sections: &[&str], featured: bool, order: Option<i32>) -> CatalogProduct {
        CatalogProduct {
            id: id.to_string(),
            name: LocalizedText::same(id),
            description: LocalizedText::default(),
            main_type: "single".into(),
            sub: "olives".into(),
            image: String::new(),
            ingredients: LocalizedList::default(),
            variants: LocalizedList::default(),
            tags: LocalizedList::default(),
            featured,
            sort_order: order,
            sections: sections.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn catalog(products: Vec<CatalogProduct>) -> Catalog {
        Catalog {
            products,
            ..Default::default()
        }
    }

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("holiday-special"), "Holiday Special");
        assert_eq!(humanize_key("gift_box-deluxe"), "Gift Box Deluxe");
    }

    #[test]
    fn test_custom_tag_creates_single_titled_region() {
        let c = catalog(vec![
            product("x", &["holiday-special"], false, None),
            product("y", &[], false, None),
        ]);
        let mut registry = RegionRegistry::new();
        assert_eq!(registry.sync(&c), 1);

        let regions = derived_regions(&c, &registry, Language::En);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].title, "Holiday Special");
        assert!(regions[0].custom);
        let ids: Vec<&str> = regions[0].products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["x"]);
    }

    #[test]
    fn test_region_creation_is_idempotent() {
        let c = catalog(vec![
            product("x", &["holiday-special", "gift-boxes"], false, None),
            product("y", &["holiday-special"], false, None),
        ]);
        let mut registry = RegionRegistry::new();
        assert_eq!(registry.sync(&c), 2);
        assert_eq!(registry.sync(&c), 0);
        assert_eq!(registry.len(), 2);
        assert_eq!(derived_regions(&c, &registry, Language::En).len(), 2);
    }

    #[test]
    fn test_reserved_tags_never_create_regions() {
        let c = catalog(vec![product("x", &["hero", "bestsellers", "contact"], false, None)]);
        let mut registry = RegionRegistry::new();
        registry.sync(&c);
        assert!(registry.is_empty());
        let regions = derived_regions(&c, &registry, Language::En);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].key, BESTSELLERS);
    }

    #[test]
    fn test_empty_fixed_regions_hidden_and_featured_by_flag() {
        let c = catalog(vec![
            product("a", &[], true, Some(3)),
            product("b", &["featured"], false, None),
            product("c", &[], true, Some(1)),
        ]);
        let regions = derived_regions(&c, &RegionRegistry::new(), Language::En);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].title, "Featured Products");
        let ids: Vec<&str> = regions[0].products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn test_contact_record_overrides_header() {
        let mut c = Catalog::default();
        let header = region_header(&c, "contact", "contact.title", None, Language::En);
        assert_eq!(header.title, "Contact Us");
        assert_eq!(header.intro, "");

        c.upsert_section(SectionEntry::from(&Section::new(
            "contact",
            "Write to us",
            "راسلنا",
            "We answer within a day.",
            "",
        )));
        let header = region_header(&c, "contact", "contact.title", None, Language::En);
        assert_eq!(header.title, "Write to us");
        assert_eq!(header.intro, "We answer within a day.");
        let header = region_header(&c, "contact", "contact.title", None, Language::Ar);
        assert_eq!(header.title, "راسلنا");
        assert_eq!(header.intro, "We answer within a day.");
    }

    #[test]
    fn test_blank_products_record_keeps_ui_strings() {
        let mut c = Catalog::default();
        c.upsert_section(SectionEntry::from(&Section::new("products", "", "", "  ", "")));
        let header = region_header(&c, "products", "products.title", Some("products.intro"), Language::En);
        assert_eq!(header.title, "Our Products");
        assert!(header.intro.starts_with("Browse our Lebanese"));
    }

    #[test]
    fn test_custom_title_and_order_from_section_record() {
        let mut c = catalog(vec![
            product("x", &["gift-boxes"], false, None),
            product("y", &["ramadan"], false, None),
        ]);
        let mut ramadan = Section::new("ramadan", "Ramadan Specials", "عروض رمضان", "", "");
        ramadan.sort_order = Some(1);
        c.upsert_section(SectionEntry::from(&ramadan));

        let mut registry = RegionRegistry::new();
        registry.sync(&c);
        assert_eq!(registry.ordered_keys(&c), vec!["ramadan", "gift-boxes"]);

        let regions = derived_regions(&c, &registry, Language::Ar);
        assert_eq!(regions[0].title, "عروض رمضان");
        assert_eq!(regions[1].title, "Gift Boxes");
    }
}
