use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::BTreeMap;
use web_sys::window;

/// Query parameter selecting the admin panel
pub const VIEW_PARAM: &str = "view";
pub const ADMIN_VIEW: &str = "admin";
const ACTIVE_PARAM: &str = "active";

/// Screen opened when the URL names none
pub const DEFAULT_TAB: &str = "d400_overview";

pub fn parse_query(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// `?view=admin&active=<key>`
pub fn admin_query(active_key: &str) -> String {
    let params = BTreeMap::from([
        (ACTIVE_PARAM.to_string(), active_key.to_string()),
        (VIEW_PARAM.to_string(), ADMIN_VIEW.to_string()),
    ]);
    format!("?{}", serde_qs::to_string(&params).unwrap_or_default())
}

fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Admin panel opened by `?view=admin` or `#admin`
pub fn is_admin_location() -> bool {
    let hash = window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    hash == "#admin" || parse_query(&current_search()).get(VIEW_PARAM).map(String::as_str) == Some(ADMIN_VIEW)
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Opens the tab named in `?active=` and keeps the URL in sync afterwards
    pub fn init_router_integration(&self) {
        let params = parse_query(&current_search());
        let active_key = params
            .get(ACTIVE_PARAM)
            .cloned()
            .unwrap_or_else(|| DEFAULT_TAB.to_string());
        let title = super::tabs::tab_label_for_key(&active_key);
        self.open_tab(&active_key, title);

        let this = *self;
        Effect::new(move |_| {
            if let Some(active_key) = this.active.get() {
                let new_url = admin_query(&active_key);
                if current_search() != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log::debug!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            let tab = Tab {
                key: key.to_string(),
                title: title.to_string(),
            };
            self.opened.update(|tabs| tabs.push(tab));
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn update_tab_title(&self, key: &str, new_title: &str) {
        self.opened.update(|tabs| {
            if let Some(tab) = tabs.iter_mut().find(|t| t.key == key) {
                tab.title = new_title.to_string();
            }
        });
    }

    pub fn close_tab(&self, key: &str) {
        log::debug!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_query_round_trip() {
        let query = admin_query("a003_product");
        assert_eq!(query, "?active=a003_product&view=admin");
        let params = parse_query(&query);
        assert_eq!(params.get("active").map(String::as_str), Some("a003_product"));
        assert_eq!(params.get("view").map(String::as_str), Some("admin"));
    }

    #[test]
    fn test_parse_query_tolerates_garbage() {
        assert!(parse_query("").is_empty());
        assert_eq!(parse_query("?view=admin").len(), 1);
    }
}
