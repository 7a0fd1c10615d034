use super::localization::{ListField, Localize, LocalizedList, LocalizedText, TextField};
use super::registry::SubcategoryRegistry;
use crate::domain::a001_main_category::aggregate::MainCategory;
use crate::domain::a003_product::aggregate::Product;
use crate::domain::a004_section::aggregate::Section;
use crate::enums::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shown when a product has no image or its image fails to load
pub const FALLBACK_IMAGE: &str = "https://placehold.co/400x300?text=Image+Unavailable";

/// Banner used when a subcategory has none of its own
pub const DEFAULT_BANNER: &str = "images/hero.png";

/// Key of the default entry in the banner map
pub const DEFAULT_BANNER_KEY: &str = "default";

/// Display key of a subcategory slug: hyphens become spaces.
///
/// Applied to both the registry and each product's `sub` so the filter's
/// equality comparison sees the same spelling.
pub fn normalize_slug(slug: &str) -> String {
    slug.trim().replace('-', " ")
}

/// Image reference with the placeholder substituted for a missing one
pub fn resolve_image(url: Option<&str>) -> String {
    url.map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or(FALLBACK_IMAGE)
        .to_string()
}

// ============================================================================
// Normalized records
// ============================================================================

/// Product record as the storefront renders it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub id: String,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub main_type: String,
    /// Normalized subcategory display key
    pub sub: String,
    pub image: String,
    pub ingredients: LocalizedList,
    pub variants: LocalizedList,
    pub tags: LocalizedList,
    pub featured: bool,
    pub sort_order: Option<i32>,
    /// Distinct section tags, order of first appearance
    pub sections: Vec<String>,
}

impl CatalogProduct {
    pub fn has_section(&self, key: &str) -> bool {
        self.sections.iter().any(|s| s == key)
    }
}

impl From<&Product> for CatalogProduct {
    fn from(row: &Product) -> Self {
        let name_en = if row.name_en.trim().is_empty() {
            "Unnamed"
        } else {
            row.name_en.as_str()
        };
        let mut sections: Vec<String> = Vec::new();
        for key in row.section_keys() {
            let key = key.trim().to_string();
            if !key.is_empty() && !sections.contains(&key) {
                sections.push(key);
            }
        }
        Self {
            id: row.id.clone(),
            name: LocalizedText::new(name_en, row.name_ar.as_deref()),
            description: LocalizedText::new(
                row.description_en.as_deref().unwrap_or(""),
                row.description_ar.as_deref(),
            ),
            main_type: row.main_type.trim().to_string(),
            sub: normalize_slug(row.sub_slug.as_deref().unwrap_or("")),
            image: resolve_image(row.image_url.as_deref()),
            ingredients: LocalizedList::new(&row.ingredients_en, &row.ingredients_ar),
            variants: LocalizedList::new(&row.variants_en, &row.variants_ar),
            tags: LocalizedList::new(&row.tags_en, &row.tags_ar),
            featured: row.featured,
            sort_order: row.sort_order,
            sections,
        }
    }
}

impl Localize for CatalogProduct {
    fn text_pair(&self, field: TextField) -> (Option<&str>, Option<&str>) {
        let text = match field {
            TextField::Name => &self.name,
            TextField::Description => &self.description,
        };
        (Some(text.en.as_str()), Some(text.ar.as_str()))
    }

    fn list_pair(&self, field: ListField) -> (&[String], &[String]) {
        let list = match field {
            ListField::Ingredients => &self.ingredients,
            ListField::Variants => &self.variants,
            ListField::Tags => &self.tags,
        };
        (&list.en, &list.ar)
    }
}

impl Localize for Product {
    fn text_pair(&self, field: TextField) -> (Option<&str>, Option<&str>) {
        match field {
            TextField::Name => (Some(self.name_en.as_str()), self.name_ar.as_deref()),
            TextField::Description => (self.description_en.as_deref(), self.description_ar.as_deref()),
        }
    }

    fn list_pair(&self, field: ListField) -> (&[String], &[String]) {
        match field {
            ListField::Ingredients => (&self.ingredients_en, &self.ingredients_ar),
            ListField::Variants => (&self.variants_en, &self.variants_ar),
            ListField::Tags => (&self.tags_en, &self.tags_ar),
        }
    }
}

/// Entry of the main-category tab bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainCategoryEntry {
    pub slug: String,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub sort_order: i32,
}

impl From<&MainCategory> for MainCategoryEntry {
    fn from(row: &MainCategory) -> Self {
        let title_en = if row.title_en.trim().is_empty() {
            row.slug.as_str()
        } else {
            row.title_en.as_str()
        };
        Self {
            slug: row.slug.trim().to_string(),
            title: LocalizedText::new(title_en, row.title_ar.as_deref()),
            description: LocalizedText::new(
                row.description_en.as_deref().unwrap_or(""),
                row.description_ar.as_deref(),
            ),
            sort_order: row.sort_order,
        }
    }
}

/// Visual overlay drawn over a section's background image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overlay {
    pub color: String,
    pub opacity: f32,
}

/// Section record in the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub key: String,
    pub title: LocalizedText,
    pub body: LocalizedText,
    pub image: Option<String>,
    pub sort_order: Option<i32>,
    pub overlay: Option<Overlay>,
}

impl From<&Section> for SectionEntry {
    fn from(row: &Section) -> Self {
        let overlay = row.overlay_color.as_ref().map(|color| Overlay {
            color: color.clone(),
            opacity: row.overlay_opacity.unwrap_or(0.5),
        });
        Self {
            key: row.key.trim().to_string(),
            title: LocalizedText::new(
                row.title_en.as_deref().unwrap_or(""),
                row.title_ar.as_deref(),
            ),
            body: LocalizedText::new(row.body_en.as_deref().unwrap_or(""), row.body_ar.as_deref()),
            image: row
                .image_url
                .as_deref()
                .map(str::trim)
                .filter(|u| !u.is_empty())
                .map(str::to_string),
            sort_order: row.sort_order,
            overlay,
        }
    }
}

impl SectionEntry {
    /// Localized title, `None` when the record leaves it blank
    pub fn title_for(&self, lang: Language) -> Option<&str> {
        let title = self.title.get(lang);
        (!title.is_empty()).then_some(title)
    }

    /// `background-image` declaration, empty when the URL could break out of `url('...')`
    pub fn background_style(&self) -> String {
        match self.image.as_deref().filter(|u| is_css_safe_url(u)) {
            Some(url) => format!("background-image: url('{}');", url),
            None => String::new(),
        }
    }

    /// Overlay declarations, empty without an overlay or with an unsafe color
    pub fn overlay_style(&self) -> String {
        match &self.overlay {
            Some(o) if is_css_color(&o.color) => format!(
                "background-color: {}; opacity: {};",
                o.color.trim(),
                o.opacity.clamp(0.0, 1.0)
            ),
            _ => String::new(),
        }
    }
}

/// URL that can sit inside a single-quoted `url()` without escaping
pub fn is_css_safe_url(url: &str) -> bool {
    !url.is_empty()
        && !url
            .chars()
            .any(|c| matches!(c, '\'' | '"' | '(' | ')' | ';' | '\\' | '<' | '>') || c.is_control())
}

/// Hex (`#rgb` to `#rrggbbaa`), a plain color name, or an `rgb()`/`rgba()` of numbers
pub fn is_css_color(color: &str) -> bool {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        return matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }
    if !color.is_empty() && color.chars().all(|c| c.is_ascii_alphabetic()) {
        return true;
    }
    let args = color
        .strip_prefix("rgba(")
        .or_else(|| color.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'));
    match args {
        Some(args) => {
            !args.trim().is_empty()
                && args
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '%' | ' ' | '/'))
        }
        None => false,
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Everything the storefront renders; replaced wholesale on every load
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub main_categories: Vec<MainCategoryEntry>,
    pub registry: SubcategoryRegistry,
    pub products: Vec<CatalogProduct>,
    pub sections: Vec<SectionEntry>,
    /// Subcategory display key (or `default`) -> banner image
    pub banners: BTreeMap<String, String>,
}

impl Catalog {
    pub fn section(&self, key: &str) -> Option<&SectionEntry> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Inserts or replaces the section with the same key
    pub fn upsert_section(&mut self, entry: SectionEntry) {
        match self.sections.iter_mut().find(|s| s.key == entry.key) {
            Some(existing) => *existing = entry,
            None => self.sections.push(entry),
        }
    }

    pub fn main_category(&self, slug: &str) -> Option<&MainCategoryEntry> {
        self.main_categories.iter().find(|m| m.slug == slug)
    }

    /// First tab; the initial main type of the filter state
    pub fn default_main_type(&self) -> String {
        self.main_categories
            .first()
            .map(|m| m.slug.clone())
            .unwrap_or_else(|| "single".to_string())
    }

    pub fn banner_for(&self, sub_key: &str) -> &str {
        self.banners
            .get(sub_key)
            .or_else(|| self.banners.get(DEFAULT_BANNER_KEY))
            .map(String::as_str)
            .unwrap_or(DEFAULT_BANNER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product_json(extra: &str) -> Product {
        let json = format!(
            r#"{{"id": 1, "name_en": "Fig Jam", "main_type": "single", "sub_slug": "olive-oil"{}}}"#,
            extra
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug("fresh-veges"), "fresh veges");
        assert_eq!(normalize_slug(" kamar-el-din "), "kamar el din");
        assert_eq!(normalize_slug("olives"), "olives");
    }

    #[test]
    fn test_product_normalization() {
        let row = product_json(
            r#", "name_ar": "", "image_url": null, "product_sections": [{"section_key": "seasonal"}, {"section_key": "seasonal"}]"#,
        );
        let product = CatalogProduct::from(&row);
        assert_eq!(product.sub, "olive oil");
        assert_eq!(product.image, FALLBACK_IMAGE);
        assert_eq!(product.name.get(Language::Ar), "Fig Jam");
        assert_eq!(product.sections, vec!["seasonal"]);
    }

    #[test]
    fn test_unnamed_product() {
        let row: Product = serde_json::from_str(r#"{"id": "x", "main_type": "bulk"}"#).unwrap();
        let product = CatalogProduct::from(&row);
        assert_eq!(product.name.en, "Unnamed");
        assert_eq!(product.sub, "");
    }

    #[test]
    fn test_banner_fallbacks() {
        let mut catalog = Catalog::default();
        assert_eq!(catalog.banner_for("olives"), DEFAULT_BANNER);
        catalog
            .banners
            .insert(DEFAULT_BANNER_KEY.into(), "images/default.png".into());
        catalog.banners.insert("olives".into(), "images/olives.png".into());
        assert_eq!(catalog.banner_for("olives"), "images/olives.png");
        assert_eq!(catalog.banner_for("vinegar"), "images/default.png");
    }

    #[test]
    fn test_section_styles_reject_injection() {
        let mut row = Section::new("hero", "Hi", "", "", "");
        row.image_url = Some("https://cdn.example/hero.png".into());
        row.overlay_color = Some("rgba(0, 0, 0, 0.4)".into());
        row.overlay_opacity = Some(2.0);
        let entry = SectionEntry::from(&row);
        assert_eq!(
            entry.background_style(),
            "background-image: url('https://cdn.example/hero.png');"
        );
        assert_eq!(
            entry.overlay_style(),
            "background-color: rgba(0, 0, 0, 0.4); opacity: 1;"
        );

        row.image_url = Some("x.png'); background: url('https://evil.example/".into());
        row.overlay_color = Some("red; position: fixed".into());
        let entry = SectionEntry::from(&row);
        assert_eq!(entry.background_style(), "");
        assert_eq!(entry.overlay_style(), "");
    }

    #[test]
    fn test_css_color_forms() {
        assert!(is_css_color("#1a2b3c"));
        assert!(is_css_color(" black "));
        assert!(is_css_color("rgb(10 20 30 / 50%)"));
        assert!(!is_css_color("#12"));
        assert!(!is_css_color("rgb(1,2,3)) url(x"));
        assert!(!is_css_color("expression(alert)"));
    }

    #[test]
    fn test_upsert_section_replaces_by_key() {
        let mut catalog = Catalog::default();
        catalog.upsert_section(SectionEntry::from(&Section::new("hero", "A", "", "", "")));
        catalog.upsert_section(SectionEntry::from(&Section::new("hero", "B", "", "", "")));
        assert_eq!(catalog.sections.len(), 1);
        assert_eq!(catalog.section("hero").unwrap().title.en, "B");
    }
}
