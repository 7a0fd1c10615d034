use super::localization::LocalizedText;
use super::model::normalize_slug;
use crate::domain::a002_subcategory::aggregate::Subcategory;
use crate::enums::Language;
use crate::shared::i18n;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Synthetic subcategory matching every product of a main type
pub const ALL_SUBCATEGORY: &str = "all";

/// Subcategory button of a main type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryEntry {
    /// Normalized display key (hyphens replaced by spaces)
    pub key: String,
    pub title: LocalizedText,
}

impl SubcategoryEntry {
    pub fn label(&self, lang: Language) -> String {
        if self.key == ALL_SUBCATEGORY {
            return i18n::t("filters.all", lang).to_string();
        }
        let title = self.title.get(lang);
        if title.is_empty() {
            capitalize_words(&self.key)
        } else {
            title.to_string()
        }
    }
}

/// Main type -> ordered subcategory list, `all` always first.
///
/// Built in one go from a full collection; there is no incremental merge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryRegistry {
    lists: BTreeMap<String, Vec<SubcategoryEntry>>,
}

impl SubcategoryRegistry {
    /// Registry from active subcategory rows; rows keep `sort_order`, ties keep input order
    pub fn from_rows(rows: &[Subcategory]) -> Self {
        let mut active: Vec<&Subcategory> = rows.iter().filter(|r| r.active).collect();
        active.sort_by_key(|r| r.sort_order);

        let mut registry = Self::default();
        for row in active {
            let title = LocalizedText::new(&row.title_en, row.title_ar.as_deref());
            registry.push(row.category_type.trim(), &normalize_slug(&row.slug), title);
        }
        registry
    }

    /// Registry from plain key lists (sample data, override blob)
    pub fn from_keys(lists: &BTreeMap<String, Vec<String>>) -> Self {
        let mut registry = Self::default();
        for (main_type, keys) in lists {
            registry.ensure_main_type(main_type);
            for key in keys {
                let key = normalize_slug(key);
                let title = LocalizedText::same(&capitalize_words(&key));
                registry.push(main_type, &key, title);
            }
        }
        registry
    }

    fn ensure_main_type(&mut self, main_type: &str) -> &mut Vec<SubcategoryEntry> {
        self.lists.entry(main_type.to_string()).or_insert_with(|| {
            vec![SubcategoryEntry {
                key: ALL_SUBCATEGORY.to_string(),
                title: LocalizedText::same("All"),
            }]
        })
    }

    fn push(&mut self, main_type: &str, key: &str, title: LocalizedText) {
        let list = self.ensure_main_type(main_type);
        if key.is_empty() || list.iter().any(|e| e.key == key) {
            return;
        }
        list.push(SubcategoryEntry {
            key: key.to_string(),
            title,
        });
    }

    /// Subcategories of a main type; just the sentinel for unknown types
    pub fn entries(&self, main_type: &str) -> Vec<SubcategoryEntry> {
        self.lists.get(main_type).cloned().unwrap_or_else(|| {
            vec![SubcategoryEntry {
                key: ALL_SUBCATEGORY.to_string(),
                title: LocalizedText::same("All"),
            }]
        })
    }

    pub fn keys(&self, main_type: &str) -> Vec<String> {
        self.entries(main_type).into_iter().map(|e| e.key).collect()
    }

    pub fn find(&self, main_type: &str, key: &str) -> Option<&SubcategoryEntry> {
        self.lists.get(main_type)?.iter().find(|e| e.key == key)
    }

    pub fn contains(&self, main_type: &str, key: &str) -> bool {
        key == ALL_SUBCATEGORY || self.find(main_type, key).is_some()
    }

    pub fn main_types(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

/// Upper-cases the first letter of every word
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinel_first_and_slugs_normalized() {
        let rows = vec![
            Subcategory::new("olive-oil", "single", "Olive Oil", "", 5),
            Subcategory::new("fresh-veges", "single", "Fresh Vegetables", "خضار طازجة", 1),
            Subcategory::new("sunflower-oil", "bulk", "Sunflower Oil", "", 6),
        ];
        let registry = SubcategoryRegistry::from_rows(&rows);
        assert_eq!(registry.keys("single"), vec!["all", "fresh veges", "olive oil"]);
        assert_eq!(registry.keys("bulk"), vec!["all", "sunflower oil"]);
        assert_eq!(registry.keys("unknown"), vec!["all"]);
    }

    #[test]
    fn test_inactive_and_duplicate_rows_skipped() {
        let mut hidden = Subcategory::new("vinegar", "single", "Vinegar", "", 2);
        hidden.active = false;
        let rows = vec![
            Subcategory::new("all", "single", "All Products", "", 0),
            hidden,
            Subcategory::new("olives", "single", "Olives", "", 3),
            Subcategory::new("olives", "single", "Olives again", "", 4),
        ];
        let registry = SubcategoryRegistry::from_rows(&rows);
        assert_eq!(registry.keys("single"), vec!["all", "olives"]);
        assert_eq!(registry.find("single", "olives").unwrap().title.en, "Olives");
    }

    #[test]
    fn test_labels() {
        let rows = vec![Subcategory::new("fresh-veges", "single", "Fresh Vegetables", "خضار طازجة", 1)];
        let registry = SubcategoryRegistry::from_rows(&rows);
        let entry = registry.find("single", "fresh veges").unwrap();
        assert_eq!(entry.label(Language::Ar), "خضار طازجة");
        assert_eq!(entry.label(Language::En), "Fresh Vegetables");
    }

    #[test]
    fn test_from_keys_capitalizes_titles() {
        let mut lists = BTreeMap::new();
        lists.insert("single".to_string(), vec!["all".to_string(), "labne & kishik".to_string()]);
        let registry = SubcategoryRegistry::from_keys(&lists);
        assert_eq!(registry.keys("single"), vec!["all", "labne & kishik"]);
        assert_eq!(
            registry.find("single", "labne & kishik").unwrap().title.en,
            "Labne & Kishik"
        );
    }

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("kamar el din"), "Kamar El Din");
        assert_eq!(capitalize_words("single products"), "Single Products");
    }
}
