//! Storefront preferences and the override blob in `localStorage`

use contracts::enums::Language;
use contracts::shared::overrides::{OverrideBlob, OVERRIDES_STORAGE_KEY};
use web_sys::window;

const LANG_KEY: &str = "lang";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persisted language, English when unset or unknown
pub fn load_language() -> Language {
    get_local_storage()
        .and_then(|s| s.get_item(LANG_KEY).ok()?)
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

pub fn save_language(lang: Language) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(LANG_KEY, lang.code());
    }
}

/// Override blob saved by earlier admin tooling, if any parses
pub fn load_overrides() -> Option<OverrideBlob> {
    let raw = get_local_storage()?.get_item(OVERRIDES_STORAGE_KEY).ok()??;
    match OverrideBlob::parse(&raw) {
        Ok(blob) if !blob.is_empty() => Some(blob),
        Ok(_) => None,
        Err(e) => {
            log::warn!("Ignoring site overrides: {:#}", e);
            None
        }
    }
}
