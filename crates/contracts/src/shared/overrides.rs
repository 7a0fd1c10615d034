//! Locally persisted site overrides
//!
//! The admin of the static build used to write a JSON blob under the
//! `siteOverrides` storage key. It replaces parts of the built-in sample
//! content before any remote data arrives.

use crate::domain::common::serde_helpers::{flexible_id, null_as_default};
use crate::shared::catalog::localization::{LocalizedList, LocalizedText};
use crate::shared::catalog::model::{normalize_slug, resolve_image, Catalog, CatalogProduct, SectionEntry};
use crate::shared::catalog::registry::SubcategoryRegistry;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storage key of the blob
pub const OVERRIDES_STORAGE_KEY: &str = "siteOverrides";

/// Product in the legacy camelCase shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyProduct {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, alias = "name_ar")]
    pub name_ar: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, alias = "description_ar")]
    pub description_ar: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub main_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sub: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default, alias = "sort_order")]
    pub sort_order: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<String>,
}

impl From<&LegacyProduct> for CatalogProduct {
    fn from(p: &LegacyProduct) -> Self {
        let name = if p.name.trim().is_empty() {
            "Unnamed"
        } else {
            p.name.as_str()
        };
        let mut sections: Vec<String> = Vec::new();
        for key in &p.sections {
            let key = key.trim().to_string();
            if !key.is_empty() && !sections.contains(&key) {
                sections.push(key);
            }
        }
        Self {
            id: p.id.clone(),
            name: LocalizedText::new(name, p.name_ar.as_deref()),
            description: LocalizedText::new(&p.description, p.description_ar.as_deref()),
            main_type: p.main_type.trim().to_string(),
            sub: normalize_slug(&p.sub),
            image: resolve_image(p.image.as_deref()),
            ingredients: LocalizedList::new(&p.ingredients, &[]),
            variants: LocalizedList::default(),
            tags: LocalizedList::default(),
            featured: p.featured,
            sort_order: p.sort_order,
            sections,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroOverride {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub lead: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutOverride {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub text: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// The whole blob; every part is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverrideBlob {
    #[serde(default)]
    pub products: Option<Vec<LegacyProduct>>,
    /// Main type -> subcategory keys (`all` included or not)
    #[serde(default)]
    pub subcats: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub banners: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub hero: Option<HeroOverride>,
    #[serde(default)]
    pub about: Option<AboutOverride>,
}

impl OverrideBlob {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("Failed to parse site overrides")
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Applies the blob on top of `catalog`; absent parts leave it untouched
    pub fn apply(&self, catalog: &mut Catalog) {
        if let Some(products) = &self.products {
            catalog.products = products.iter().map(CatalogProduct::from).collect();
        }

        if let Some(subcats) = &self.subcats {
            // Main types the blob leaves out keep their current lists
            let mut lists: BTreeMap<String, Vec<String>> = catalog
                .registry
                .main_types()
                .map(|m| (m.to_string(), catalog.registry.keys(m)))
                .collect();
            for (main_type, keys) in subcats {
                lists.insert(main_type.clone(), keys.clone());
            }
            catalog.registry = SubcategoryRegistry::from_keys(&lists);
        }

        if let Some(banners) = &self.banners {
            for (key, url) in banners {
                catalog.banners.insert(normalize_slug(key), url.clone());
            }
        }

        if let Some(hero) = &self.hero {
            let mut entry = catalog
                .section("hero")
                .cloned()
                .unwrap_or_else(|| empty_section("hero"));
            if let Some(title) = hero.title.as_deref().filter(|t| !t.trim().is_empty()) {
                entry.title = LocalizedText::same(title);
            }
            if let Some(lead) = hero.lead.as_deref().filter(|t| !t.trim().is_empty()) {
                entry.body = LocalizedText::same(lead);
            }
            if let Some(image) = hero.image.as_deref().filter(|t| !t.trim().is_empty()) {
                entry.image = Some(image.to_string());
            }
            catalog.upsert_section(entry);
        }

        if let Some(about) = &self.about {
            let mut entry = catalog
                .section("about")
                .cloned()
                .unwrap_or_else(|| empty_section("about"));
            if let Some(heading) = about.heading.as_deref().filter(|t| !t.trim().is_empty()) {
                entry.title = LocalizedText::same(heading);
            }
            if !about.text.is_empty() {
                entry.body = LocalizedText::same(&about.text.join("\n\n"));
            }
            if let Some(image) = about.image.as_deref().filter(|t| !t.trim().is_empty()) {
                entry.image = Some(image.to_string());
            }
            catalog.upsert_section(entry);
        }
    }
}

fn empty_section(key: &str) -> SectionEntry {
    SectionEntry {
        key: key.to_string(),
        title: LocalizedText::default(),
        body: LocalizedText::default(),
        image: None,
        sort_order: None,
        overlay: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Language;
    use crate::shared::sample_data::sample_catalog;

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(OverrideBlob::parse("{not json").is_err());
        assert!(OverrideBlob::parse("{}").unwrap().is_empty());
    }

    #[test]
    fn test_products_replace_sample() {
        let raw = r#"{
            "products": [
                {"id": 99, "name": "Fig Jam", "mainType": "single", "sub": "fresh-veges",
                 "featured": true, "image": "", "ingredients": ["Figs"], "sections": ["ramadan"]}
            ]
        }"#;
        let blob = OverrideBlob::parse(raw).unwrap();
        let mut catalog = sample_catalog();
        blob.apply(&mut catalog);

        assert_eq!(catalog.products.len(), 1);
        let product = &catalog.products[0];
        assert_eq!(product.id, "99");
        assert_eq!(product.sub, "fresh veges");
        assert_eq!(product.image, crate::shared::catalog::model::FALLBACK_IMAGE);
        assert_eq!(product.name.get(Language::Ar), "Fig Jam");
        assert_eq!(product.sections, vec!["ramadan"]);
    }

    #[test]
    fn test_subcats_banners_and_text() {
        let raw = r#"{
            "subcats": {"bulk": ["all", "olives"]},
            "banners": {"olive-oil": "images/oil.png"},
            "hero": {"title": "Taste of Lebanon", "lead": ""},
            "about": {"heading": "Who we are", "text": ["First.", "Second."]}
        }"#;
        let blob = OverrideBlob::parse(raw).unwrap();
        let mut catalog = sample_catalog();
        let single_before = catalog.registry.keys("single");
        let hero_body_before = catalog.section("hero").unwrap().body.clone();
        blob.apply(&mut catalog);

        assert_eq!(catalog.registry.keys("bulk"), vec!["all", "olives"]);
        assert_eq!(catalog.registry.keys("single"), single_before);
        assert_eq!(catalog.banner_for("olive oil"), "images/oil.png");

        let hero = catalog.section("hero").unwrap();
        assert_eq!(hero.title.en, "Taste of Lebanon");
        assert_eq!(hero.body, hero_body_before);

        let about = catalog.section("about").unwrap();
        assert_eq!(about.title.en, "Who we are");
        assert_eq!(about.body.en, "First.\n\nSecond.");
    }
}
