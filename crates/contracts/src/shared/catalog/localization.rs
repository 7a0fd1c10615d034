//! Localization resolver
//!
//! A record carries English and Arabic variants of its text and list fields.
//! The Arabic variant wins when it is present and non-empty; otherwise the
//! English one is used, and an absent English value resolves to `""`.

use crate::enums::Language;
use serde::{Deserialize, Serialize};

/// Localized text fields of a catalog record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Name,
    Description,
}

/// Localized list fields of a catalog record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListField {
    Ingredients,
    Variants,
    Tags,
}

/// Records exposing their raw bilingual pairs
pub trait Localize {
    /// `(english, arabic)` for a text field
    fn text_pair(&self, field: TextField) -> (Option<&str>, Option<&str>);

    /// `(english, arabic)` for a list field
    fn list_pair(&self, field: ListField) -> (&[String], &[String]);
}

/// Resolves one text field of `record` for `lang`
pub fn localize<R: Localize + ?Sized>(record: &R, field: TextField, lang: Language) -> String {
    let (en, ar) = record.text_pair(field);
    pick_text(en, ar, lang).to_string()
}

/// Resolves one list field of `record` for `lang`
pub fn localize_list<R: Localize + ?Sized>(
    record: &R,
    field: ListField,
    lang: Language,
) -> Vec<String> {
    let (en, ar) = record.list_pair(field);
    pick_list(en, ar, lang).to_vec()
}

/// Language-specific value when non-empty, else English, else `""`
pub fn pick_text<'a>(en: Option<&'a str>, ar: Option<&'a str>, lang: Language) -> &'a str {
    let specific = match lang {
        Language::En => en,
        Language::Ar => ar,
    };
    specific
        .filter(|s| !s.trim().is_empty())
        .or(en)
        .unwrap_or("")
}

fn pick_list<'a>(en: &'a [String], ar: &'a [String], lang: Language) -> &'a [String] {
    match lang {
        Language::Ar if ar.iter().any(|s| !s.trim().is_empty()) => ar,
        _ => en,
    }
}

/// Normalized bilingual text; `ar` already holds the English fallback
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: &str, ar: Option<&str>) -> Self {
        let en = en.trim().to_string();
        let ar = ar
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| en.clone());
        Self { en, ar }
    }

    pub fn same(text: &str) -> Self {
        Self::new(text, None)
    }

    pub fn get(&self, lang: Language) -> &str {
        pick_text(Some(&self.en), Some(&self.ar), lang)
    }

    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.ar.is_empty()
    }
}

/// Normalized bilingual list; `ar` already holds the English fallback
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedList {
    pub en: Vec<String>,
    pub ar: Vec<String>,
}

impl LocalizedList {
    pub fn new(en: &[String], ar: &[String]) -> Self {
        let clean = |items: &[String]| -> Vec<String> {
            items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        };
        let en = clean(en);
        let ar = clean(ar);
        let ar = if ar.is_empty() { en.clone() } else { ar };
        Self { en, ar }
    }

    pub fn get(&self, lang: Language) -> &[String] {
        pick_list(&self.en, &self.ar, lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Raw {
        name_en: Option<String>,
        name_ar: Option<String>,
        tags_en: Vec<String>,
        tags_ar: Vec<String>,
    }

    impl Localize for Raw {
        fn text_pair(&self, _field: TextField) -> (Option<&str>, Option<&str>) {
            (self.name_en.as_deref(), self.name_ar.as_deref())
        }

        fn list_pair(&self, _field: ListField) -> (&[String], &[String]) {
            (&self.tags_en, &self.tags_ar)
        }
    }

    #[test]
    fn test_empty_arabic_falls_back_to_english() {
        let raw = Raw {
            name_en: Some("Olives".into()),
            name_ar: Some("".into()),
            tags_en: vec![],
            tags_ar: vec![],
        };
        assert_eq!(localize(&raw, TextField::Name, Language::Ar), "Olives");
    }

    #[test]
    fn test_missing_everything_is_empty_string() {
        let raw = Raw {
            name_en: None,
            name_ar: None,
            tags_en: vec![],
            tags_ar: vec![],
        };
        assert_eq!(localize(&raw, TextField::Name, Language::Ar), "");
        assert_eq!(localize(&raw, TextField::Name, Language::En), "");
    }

    #[test]
    fn test_arabic_used_when_present() {
        let raw = Raw {
            name_en: Some("Olives".into()),
            name_ar: Some("زيتون".into()),
            tags_en: vec!["Vegan".into()],
            tags_ar: vec!["نباتي".into()],
        };
        assert_eq!(localize(&raw, TextField::Name, Language::Ar), "زيتون");
        assert_eq!(localize(&raw, TextField::Name, Language::En), "Olives");
        assert_eq!(localize_list(&raw, ListField::Tags, Language::Ar), vec!["نباتي"]);
    }

    #[test]
    fn test_blank_arabic_list_falls_back() {
        let list = LocalizedList::new(&["Figs".to_string()], &[" ".to_string()]);
        assert_eq!(list.get(Language::Ar), ["Figs".to_string()]);
    }

    #[test]
    fn test_localized_text_normalizes_fallback() {
        let text = LocalizedText::new(" Olives ", Some("  "));
        assert_eq!(text.ar, "Olives");
        assert_eq!(text.get(Language::Ar), "Olives");
    }
}
