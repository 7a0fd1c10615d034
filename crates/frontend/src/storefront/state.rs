//! Storefront state held in context.
//!
//! `filter` is what the user asked for; `applied` is what the grid renders.
//! Filter changes go through a short cancel-and-restart debounce so a burst
//! of clicks or keystrokes renders only the final state.

use contracts::enums::Language;
use contracts::shared::catalog::{Catalog, FilterState, RegionRegistry};
use contracts::shared::generation::{Debouncer, Generation, GenerationCounter};
use contracts::shared::sample_data::sample_catalog;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::local_storage;

/// Quiet period between a filter change and the grid re-render
pub const RENDER_DEBOUNCE_MS: u32 = 80;

#[derive(Clone, Copy)]
pub struct StorefrontContext {
    pub catalog: RwSignal<Catalog>,
    pub filter: RwSignal<FilterState>,
    pub applied: RwSignal<FilterState>,
    pub regions: RwSignal<RegionRegistry>,
    pub loading: RwSignal<bool>,
    /// Collections the last load could not fetch; shown as a status line
    pub load_failures: RwSignal<Vec<&'static str>>,
    /// Tickets of catalog loads; only the latest may replace the catalog
    pub loads: StoredValue<GenerationCounter>,
    /// Sample data with the local overrides applied
    pub base: StoredValue<Catalog>,
    renders: StoredValue<Debouncer<FilterState>>,
}

impl StorefrontContext {
    pub fn new() -> Self {
        let mut base = sample_catalog();
        if let Some(blob) = local_storage::load_overrides() {
            log::info!("Applying local site overrides");
            blob.apply(&mut base);
        }

        let language = local_storage::load_language();
        let initial = FilterState::initial(&base, language);
        let mut regions = RegionRegistry::new();
        regions.sync(&base);

        Self {
            catalog: RwSignal::new(base.clone()),
            filter: RwSignal::new(initial.clone()),
            applied: RwSignal::new(initial),
            regions: RwSignal::new(regions),
            loading: RwSignal::new(false),
            load_failures: RwSignal::new(Vec::new()),
            loads: StoredValue::new(GenerationCounter::new()),
            base: StoredValue::new(base),
            renders: StoredValue::new(Debouncer::new()),
        }
    }

    pub fn language(&self) -> Language {
        self.filter.with(|f| f.language)
    }

    /// Mirrors `filter` into `applied` after the render debounce
    pub fn init_render_debounce(&self) {
        let this = *self;
        Effect::new(move |_| {
            let requested = this.filter.get();
            let mut ticket = Generation::default();
            this.renders.update_value(|d| ticket = d.schedule(requested));

            spawn_local(async move {
                TimeoutFuture::new(RENDER_DEBOUNCE_MS).await;
                if let Some(state) = this.renders.try_update_value(|d| d.fire(ticket)).flatten() {
                    if this.applied.with_untracked(|a| *a != state) {
                        this.applied.set(state);
                    }
                }
            });
        });
    }

    pub fn select_main_type(&self, main_type: &str) {
        self.filter.update(|f| f.select_main_type(main_type));
    }

    pub fn select_subcategory(&self, key: &str) {
        self.filter.update(|f| f.select_subcategory(key));
    }

    pub fn set_search(&self, text: String) {
        self.filter.update(|f| f.search = text);
    }

    /// Switches language without refetching; applies immediately
    pub fn set_language(&self, lang: Language) {
        local_storage::save_language(lang);
        apply_document_language(lang);
        self.filter.update(|f| f.language = lang);
        self.applied.update(|f| f.language = lang);
    }

    pub fn toggle_language(&self) {
        self.set_language(self.language().toggled());
    }

    /// Replaces the whole catalog and resets the filter to its defaults
    pub fn replace_catalog(&self, catalog: Catalog) {
        let lang = self.filter.with_untracked(|f| f.language);
        let created = self.regions.try_update(|r| r.sync(&catalog)).unwrap_or(0);
        if created > 0 {
            log::debug!("Registered {} custom regions", created);
        }
        let initial = FilterState::initial(&catalog, lang);
        self.catalog.set(catalog);
        self.filter.set(initial.clone());
        self.applied.set(initial);
    }
}

impl Default for StorefrontContext {
    fn default() -> Self {
        Self::new()
    }
}

/// `dir` and `lang` on `<html>` for the chosen language
pub fn apply_document_language(lang: Language) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("dir", lang.dir());
        let _ = root.set_attribute("lang", lang.code());
    }
}

pub fn use_storefront() -> StorefrontContext {
    use_context::<StorefrontContext>().expect("StorefrontContext not found")
}
