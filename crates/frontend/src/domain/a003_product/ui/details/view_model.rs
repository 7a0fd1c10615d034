use super::model;
use contracts::domain::a002_subcategory::aggregate::Subcategory;
use contracts::domain::a003_product::aggregate::ProductDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Subcategories offered for `main_type`, keeping the current slug even if it
/// belongs elsewhere so an existing product never loses its value silently
pub fn subcategory_options(all: &[Subcategory], main_type: &str, current: &str) -> Vec<(String, String)> {
    let mut options: Vec<(String, String)> = all
        .iter()
        .filter(|s| s.category_type == main_type)
        .map(|s| (s.slug.clone(), s.title_en.clone()))
        .collect();
    if !current.is_empty() && !options.iter().any(|(slug, _)| slug == current) {
        options.push((current.to_string(), current.to_string()));
    }
    options
}

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub form: RwSignal<ProductDto>,
    /// Bound to the upload field; merged into the form on save
    pub image_url: RwSignal<String>,
    pub subcategories: RwSignal<Vec<Subcategory>>,
    pub error: RwSignal<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub uploading: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ProductDto::new()),
            image_url: RwSignal::new(String::new()),
            subcategories: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            uploading: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.is_edit_mode())
    }

    pub fn can_save(&self) -> bool {
        !self.saving.get() && !self.uploading.get() && !self.loading.get()
    }

    /// Loads the product when editing and the subcategory choices either way
    pub fn load_if_needed(&self, id: Option<String>) {
        let vm = *self;
        spawn_local(async move {
            match model::fetch_subcategories().await {
                Ok(rows) => vm.subcategories.set(rows),
                Err(e) => log::warn!("Subcategory options unavailable: {}", e),
            }
        });

        let Some(existing_id) = id else { return };
        vm.loading.set(true);
        spawn_local(async move {
            match model::fetch_by_id(existing_id).await {
                Ok(dto) => {
                    vm.image_url.set(dto.image_url.clone());
                    vm.form.set(dto);
                }
                Err(e) => {
                    log::error!("Failed to load product: {}", e);
                    vm.error.set(Some(format!("Load failed: {}", e)));
                }
            }
            vm.loading.set(false);
        });
    }

    /// Switching the main type drops a subcategory that no longer fits
    pub fn set_main_type(&self, main_type: String) {
        let fits = self.subcategories.with_untracked(|all| {
            let current = self.form.with_untracked(|f| f.sub_slug.clone());
            all.iter()
                .any(|s| s.slug == current && s.category_type == main_type)
        });
        self.form.update(|f| {
            f.main_type = main_type;
            if !fits {
                f.sub_slug.clear();
            }
        });
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        let mut current = self.form.get_untracked();
        current.image_url = self.image_url.get_untracked();

        if let Err(e) = current.validate() {
            self.error.set(Some(e));
            return;
        }

        let vm = *self;
        vm.saving.set(true);
        vm.error.set(None);
        spawn_local(async move {
            match model::save_form(&current).await {
                Ok(id) => {
                    log::debug!("Product {} saved", id);
                    vm.saving.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to save product: {}", e);
                    vm.error.set(Some(format!("Save failed: {}", e)));
                    vm.saving.set(false);
                }
            }
        });
    }
}

impl Default for ProductDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcategory_options_follow_main_type() {
        let all = vec![
            Subcategory::new("olives", "single", "Olives", "", 1),
            Subcategory::new("olives-bulk", "bulk", "Olives (bulk)", "", 1),
        ];
        let single = subcategory_options(&all, "single", "");
        assert_eq!(single, vec![("olives".to_string(), "Olives".to_string())]);

        let kept = subcategory_options(&all, "single", "legacy-slug");
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].0, "legacy-slug");
    }
}
