use super::filter::{fold_case, FilterState};
use super::model::{Catalog, CatalogProduct, FALLBACK_IMAGE};
use super::registry::{capitalize_words, ALL_SUBCATEGORY};
use super::sections::FEATURED;
use crate::enums::Language;
use crate::shared::i18n;
use serde::{Deserialize, Serialize};

/// Run of text, marked when it matches the search term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    pub text: String,
    pub highlighted: bool,
}

impl TextSegment {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            highlighted: false,
        }
    }
}

/// Splits `text` into plain and highlighted runs of case-insensitive matches of `term`.
///
/// Matching runs on the same folding as the filter. A char whose lower case
/// expands to several chars is highlighted whole when any part of it matches.
/// A blank term yields the whole text as one plain segment.
pub fn highlight_segments(text: &str, term: &str) -> Vec<TextSegment> {
    let needle: Vec<char> = fold_case(term.trim()).chars().collect();
    if needle.is_empty() || text.is_empty() {
        return vec![TextSegment::plain(text)];
    }

    let chars: Vec<char> = text.chars().collect();
    // Folded chars, each with the index of the source char it came from
    let folded: Vec<(char, usize)> = chars
        .iter()
        .enumerate()
        .flat_map(|(idx, c)| c.to_lowercase().map(move |l| (l, idx)))
        .collect();

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;
    while i + needle.len() <= folded.len() {
        let window = &folded[i..i + needle.len()];
        let start = window[0].1;
        let hit = start >= plain_start && window.iter().map(|(c, _)| *c).eq(needle.iter().copied());
        if !hit {
            i += 1;
            continue;
        }
        let end = window[window.len() - 1].1 + 1;
        if plain_start < start {
            segments.push(TextSegment {
                text: chars[plain_start..start].iter().collect(),
                highlighted: false,
            });
        }
        segments.push(TextSegment {
            text: chars[start..end].iter().collect(),
            highlighted: true,
        });
        plain_start = end;
        i += needle.len();
    }
    if plain_start < chars.len() {
        segments.push(TextSegment {
            text: chars[plain_start..].iter().collect(),
            highlighted: false,
        });
    }
    segments
}

/// Everything one product card shows, already localized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    pub id: String,
    pub name: Vec<TextSegment>,
    pub description: Vec<TextSegment>,
    pub ingredients: Vec<String>,
    pub variants: Vec<String>,
    pub tags: Vec<String>,
    pub image: String,
    pub fallback_image: String,
    /// "Featured" badge; only cards of the featured region carry it
    pub badge: bool,
    pub subcategory_label: String,
}

impl ProductCard {
    pub fn build(catalog: &Catalog, product: &CatalogProduct, lang: Language, term: &str) -> Self {
        let subcategory_label = catalog
            .registry
            .find(&product.main_type, &product.sub)
            .map(|e| e.label(lang))
            .unwrap_or_else(|| capitalize_words(&product.sub));
        Self {
            id: product.id.clone(),
            name: highlight_segments(product.name.get(lang), term),
            description: highlight_segments(product.description.get(lang), term),
            ingredients: product.ingredients.get(lang).to_vec(),
            variants: product.variants.get(lang).to_vec(),
            tags: product.tags.get(lang).to_vec(),
            image: product.image.clone(),
            fallback_image: FALLBACK_IMAGE.to_string(),
            badge: false,
            subcategory_label,
        }
    }

    /// Card inside derived region `region_key`, without search highlighting
    pub fn for_region(catalog: &Catalog, product: &CatalogProduct, region_key: &str, lang: Language) -> Self {
        Self {
            badge: region_key == FEATURED && product.featured,
            ..Self::build(catalog, product, lang, "")
        }
    }

    pub fn plain_name(&self) -> String {
        self.name.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Banner above the grid for the current main type and subcategory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBanner {
    pub title: String,
    pub image: String,
}

impl CategoryBanner {
    pub fn build(catalog: &Catalog, state: &FilterState) -> Self {
        let lang = state.language;
        let title = if state.subcategory == ALL_SUBCATEGORY {
            match catalog.main_category(&state.main_type) {
                Some(main) if !main.title.is_empty() => main.title.get(lang).to_string(),
                _ => capitalize_words(&format!(
                    "{} {}",
                    state.main_type,
                    i18n::t("products.suffix", lang)
                )),
            }
        } else {
            catalog
                .registry
                .find(&state.main_type, &state.subcategory)
                .map(|e| e.label(lang))
                .unwrap_or_else(|| capitalize_words(&state.subcategory))
        };
        Self {
            title,
            image: catalog.banner_for(&state.subcategory).to_string(),
        }
    }
}

/// Fallback swap state of one rendered image.
///
/// The first load error switches to the fallback; later errors (including
/// one raised by the fallback itself) are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFallback {
    original: String,
    fallback: String,
    swapped: bool,
}

impl ImageFallback {
    pub fn new(original: &str) -> Self {
        Self::with_fallback(original, FALLBACK_IMAGE)
    }

    pub fn with_fallback(original: &str, fallback: &str) -> Self {
        Self {
            original: original.to_string(),
            fallback: fallback.to_string(),
            swapped: false,
        }
    }

    pub fn current(&self) -> &str {
        if self.swapped {
            &self.fallback
        } else {
            &self.original
        }
    }

    /// New source to apply after a load error, `None` once swapped
    pub fn on_error(&mut self) -> Option<String> {
        if self.swapped {
            return None;
        }
        self.swapped = true;
        Some(self.fallback.clone())
    }

    pub fn is_swapped(&self) -> bool {
        self.swapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::localization::{LocalizedList, LocalizedText};

    fn joined(segments: &[TextSegment]) -> String {
        segments
            .iter()
            .map(|s| {
                if s.highlighted {
                    format!("[{}]", s.text)
                } else {
                    s.text.clone()
                }
            })
            .collect()
    }

    #[test]
    fn test_highlight_case_insensitive() {
        let segments = highlight_segments("Olive oil and olives", "OLIVE");
        assert_eq!(joined(&segments), "[Olive] oil and [olive]s");
    }

    #[test]
    fn test_highlight_blank_term() {
        let segments = highlight_segments("Fig Jam", "  ");
        assert_eq!(segments, vec![TextSegment::plain("Fig Jam")]);
    }

    #[test]
    fn test_highlight_arabic() {
        let segments = highlight_segments("زيتون أخضر", "أخضر");
        assert_eq!(joined(&segments), "زيتون [أخضر]");
    }

    #[test]
    fn test_highlight_follows_filter_for_expanding_lowercase() {
        // `İ` lower-cases to `i` followed by U+0307
        let term = "i\u{307}zm";
        let product = CatalogProduct {
            id: "1".into(),
            name: LocalizedText::same("İzmir Figs"),
            description: LocalizedText::default(),
            main_type: "single".into(),
            sub: "figs".into(),
            image: FALLBACK_IMAGE.into(),
            ingredients: LocalizedList::default(),
            variants: LocalizedList::default(),
            tags: LocalizedList::default(),
            featured: false,
            sort_order: None,
            sections: vec![],
        };
        let mut state = FilterState::new("single", Language::En);
        state.search = term.to_string();
        assert!(crate::shared::catalog::filter::matches(&product, &state));

        let segments = highlight_segments("İzmir Figs", term);
        assert_eq!(joined(&segments), "[İzm]ir Figs");
    }

    #[test]
    fn test_fallback_swaps_exactly_once() {
        let mut image = ImageFallback::new("images/missing.png");
        assert_eq!(image.current(), "images/missing.png");
        assert_eq!(image.on_error().as_deref(), Some(FALLBACK_IMAGE));
        assert_eq!(image.on_error(), None);
        assert_eq!(image.on_error(), None);
        assert_eq!(image.current(), FALLBACK_IMAGE);
        assert!(image.is_swapped());
    }

    #[test]
    fn test_banner_for_all_uses_main_type() {
        let state = FilterState::new("bulk", Language::En);
        let banner = CategoryBanner::build(&Catalog::default(), &state);
        assert_eq!(banner.title, "Bulk Products");
        assert_eq!(banner.image, crate::shared::catalog::model::DEFAULT_BANNER);
    }

    #[test]
    fn test_banner_for_subcategory() {
        let mut state = FilterState::new("single", Language::En);
        state.select_subcategory("kamar el din");
        let mut catalog = Catalog::default();
        catalog
            .banners
            .insert("kamar el din".into(), "images/kamar.png".into());
        let banner = CategoryBanner::build(&catalog, &state);
        assert_eq!(banner.title, "Kamar El Din");
        assert_eq!(banner.image, "images/kamar.png");
    }

    #[test]
    fn test_card_localizes_and_labels() {
        let product = CatalogProduct {
            id: "7".into(),
            name: LocalizedText::new("Green Olives", Some("زيتون أخضر")),
            description: LocalizedText::same("Cracked and brined"),
            main_type: "single".into(),
            sub: "olives".into(),
            image: FALLBACK_IMAGE.into(),
            ingredients: LocalizedList::new(&["Olives".into(), "Salt".into()], &[]),
            variants: LocalizedList::default(),
            tags: LocalizedList::default(),
            featured: true,
            sort_order: None,
            sections: vec![],
        };
        let card = ProductCard::build(&Catalog::default(), &product, Language::Ar, "");
        assert_eq!(card.plain_name(), "زيتون أخضر");
        assert_eq!(card.ingredients, vec!["Olives", "Salt"]);
        assert_eq!(card.subcategory_label, "Olives");
        assert!(!card.badge);

        let catalog = Catalog::default();
        assert!(ProductCard::for_region(&catalog, &product, FEATURED, Language::En).badge);
        assert!(!ProductCard::for_region(&catalog, &product, "seasonal", Language::En).badge);
    }
}
