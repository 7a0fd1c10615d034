//! Filter & sort pipeline
//!
//! `visible_products` is the whole grid: a pure function of the catalog and
//! the filter state. It never mutates the collection.

use super::model::{Catalog, CatalogProduct};
use super::registry::ALL_SUBCATEGORY;
use crate::enums::Language;
use serde::{Deserialize, Serialize};

/// Sort key of a product without `sort_order`; places it after ordered ones
pub const UNORDERED_SORT_KEY: i64 = i64::MAX;

/// Case folding shared by filtering and highlighting: each char lower-cased
/// to its full mapping, so `İ` becomes `i` plus a combining dot
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Process-local filter state; mutated only by user interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub main_type: String,
    pub subcategory: String,
    pub search: String,
    pub language: Language,
}

impl FilterState {
    pub fn new(main_type: &str, language: Language) -> Self {
        Self {
            main_type: main_type.to_string(),
            subcategory: ALL_SUBCATEGORY.to_string(),
            search: String::new(),
            language,
        }
    }

    /// Defaults for a freshly loaded catalog
    pub fn initial(catalog: &Catalog, language: Language) -> Self {
        Self::new(&catalog.default_main_type(), language)
    }

    /// Switching the main type resets the subcategory to `all`
    pub fn select_main_type(&mut self, main_type: &str) {
        if self.main_type != main_type {
            self.main_type = main_type.to_string();
            self.subcategory = ALL_SUBCATEGORY.to_string();
        }
    }

    pub fn select_subcategory(&mut self, key: &str) {
        self.subcategory = key.to_string();
    }

    /// Normalized search term: trimmed and lower-cased, empty when blank
    pub fn search_term(&self) -> String {
        fold_case(self.search.trim())
    }
}

/// Whether `product` passes every predicate of the filter state
pub fn matches(product: &CatalogProduct, state: &FilterState) -> bool {
    if product.main_type != state.main_type {
        return false;
    }
    if state.subcategory != ALL_SUBCATEGORY && product.sub != state.subcategory {
        return false;
    }
    let term = state.search_term();
    if term.is_empty() {
        return true;
    }
    fold_case(product.name.get(state.language)).contains(&term)
        || fold_case(product.description.get(state.language)).contains(&term)
}

/// Ascending `sort_order`, missing last; equal keys keep collection order
pub fn sort_key(product: &CatalogProduct) -> i64 {
    product
        .sort_order
        .map(i64::from)
        .unwrap_or(UNORDERED_SORT_KEY)
}

/// Stable sort by [`sort_key`]
pub fn sort_by_order(items: &mut [&CatalogProduct]) {
    // slice::sort_by_key is stable; insertion order is the tie-breaker
    items.sort_by_key(|p| sort_key(p));
}

/// Products visible in the grid for `state`, in display order
pub fn visible_products<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a CatalogProduct> {
    let mut items: Vec<&CatalogProduct> = catalog
        .products
        .iter()
        .filter(|p| matches(p, state))
        .collect();
    sort_by_order(&mut items);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::catalog::localization::{LocalizedList, LocalizedText};

    pub(crate) fn product(id: &str, main: &str, sub: &str, order: Option<i32>) -> CatalogProduct {
        CatalogProduct {
            id: id.to_string(),
            name: LocalizedText::same(&format!("Product {}", id)),
            description: LocalizedText::default(),
            main_type: main.to_string(),
            sub: sub.to_string(),
            image: String::new(),
            ingredients: LocalizedList::default(),
            variants: LocalizedList::default(),
            tags: LocalizedList::default(),
            featured: false,
            sort_order: order,
            sections: vec![],
        }
    }

    fn catalog(products: Vec<CatalogProduct>) -> Catalog {
        Catalog {
            products,
            ..Default::default()
        }
    }

    fn ids(items: &[&CatalogProduct]) -> Vec<String> {
        items.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_lower_sort_order_first() {
        let c = catalog(vec![
            product("a", "single", "olives", Some(2)),
            product("b", "single", "olives", Some(1)),
        ]);
        let mut state = FilterState::new("single", Language::En);
        state.select_subcategory("olives");
        assert_eq!(ids(&visible_products(&c, &state)), vec!["b", "a"]);
    }

    #[test]
    fn test_sort_is_stable_and_unordered_last() {
        let c = catalog(vec![
            product("u1", "single", "olives", None),
            product("a", "single", "olives", Some(5)),
            product("b", "single", "pastes", Some(5)),
            product("u2", "single", "pastes", None),
            product("c", "single", "olives", Some(1)),
        ]);
        let state = FilterState::new("single", Language::En);
        assert_eq!(
            ids(&visible_products(&c, &state)),
            vec!["c", "a", "b", "u1", "u2"]
        );
    }

    #[test]
    fn test_rendered_set_equals_predicate() {
        let c = catalog(vec![
            product("1", "single", "olives", None),
            product("2", "bulk", "olives", None),
            product("3", "single", "pastes", None),
            product("4", "single", "olives", Some(0)),
        ]);
        let mut state = FilterState::new("single", Language::En);
        state.select_subcategory("olives");
        let visible = visible_products(&c, &state);
        let expected: Vec<&CatalogProduct> = c.products.iter().filter(|p| matches(p, &state)).collect();
        assert_eq!(visible.len(), expected.len());
        for p in &expected {
            assert!(visible.iter().any(|v| v.id == p.id));
        }
        assert_eq!(ids(&visible), vec!["4", "1"]);
    }

    #[test]
    fn test_search_is_case_insensitive_on_localized_fields() {
        let mut olives = product("1", "single", "olives", None);
        olives.name = LocalizedText::new("Spiced Olive Mix", Some("زيتون متبل"));
        olives.description = LocalizedText::same("Marinated with herbs");
        let c = catalog(vec![olives, product("2", "single", "pastes", None)]);

        let mut state = FilterState::new("single", Language::En);
        state.search = "  HERBS ".into();
        assert_eq!(ids(&visible_products(&c, &state)), vec!["1"]);

        state.language = Language::Ar;
        state.search = "زيتون".into();
        assert_eq!(ids(&visible_products(&c, &state)), vec!["1"]);

        state.search = "olive".into();
        assert!(visible_products(&c, &state).is_empty());
    }

    #[test]
    fn test_main_type_switch_resets_subcategory() {
        let mut state = FilterState::new("single", Language::En);
        state.select_subcategory("olives");
        state.select_main_type("single");
        assert_eq!(state.subcategory, "olives");
        state.select_main_type("bulk");
        assert_eq!(state.subcategory, ALL_SUBCATEGORY);
    }

    #[test]
    fn test_pipeline_does_not_mutate_collection() {
        let c = catalog(vec![
            product("a", "single", "olives", Some(2)),
            product("b", "single", "olives", Some(1)),
        ]);
        let before = c.clone();
        let _ = visible_products(&c, &FilterState::new("single", Language::En));
        assert_eq!(c, before);
    }
}
