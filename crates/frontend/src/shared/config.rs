//! Backend connection settings
//!
//! The host page may override any value with a `<meta name="supabase-*">`
//! tag; everything else comes from the embedded defaults below.

use contracts::shared::media::STORAGE_BUCKET;
use once_cell::sync::OnceCell;
use serde::Deserialize;

const DEFAULT_CONFIG: &str = r#"
[supabase]
url = "https://xbznaxiummganlidnmdd.supabase.co"
anon_key = ""
bucket = "karamlebnanbucket"
"#;

const META_URL: &str = "supabase-url";
const META_ANON_KEY: &str = "supabase-anon-key";
const META_BUCKET: &str = "supabase-bucket";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SupabaseConfig {
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
    #[serde(default = "default_bucket")]
    pub bucket: String,
}

fn default_bucket() -> String {
    STORAGE_BUCKET.to_string()
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    supabase: SupabaseConfig,
}

impl SupabaseConfig {
    /// Parses a `[supabase]` TOML document
    pub fn from_toml(raw: &str) -> Result<Self, String> {
        let file: ConfigFile =
            toml::from_str(raw).map_err(|e| format!("Invalid configuration: {}", e))?;
        let mut config = file.supabase;
        config.url = config.url.trim().trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Replaces every non-blank override
    pub fn with_overrides(mut self, url: Option<String>, anon_key: Option<String>, bucket: Option<String>) -> Self {
        let pick = |value: Option<String>| value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        if let Some(url) = pick(url) {
            self.url = url.trim_end_matches('/').to_string();
        }
        if let Some(key) = pick(anon_key) {
            self.anon_key = key;
        }
        if let Some(bucket) = pick(bucket) {
            self.bucket = bucket;
        }
        self
    }

    /// An empty anon key or url means the site runs on local data only
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.trim().is_empty()
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()??;
    element.get_attribute("content")
}

fn resolve() -> SupabaseConfig {
    let base = match SupabaseConfig::from_toml(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            SupabaseConfig {
                url: String::new(),
                anon_key: String::new(),
                bucket: default_bucket(),
            }
        }
    };
    base.with_overrides(
        meta_content(META_URL),
        meta_content(META_ANON_KEY),
        meta_content(META_BUCKET),
    )
}

static CONFIG: OnceCell<SupabaseConfig> = OnceCell::new();

/// Settings of this page load, resolved once
pub fn config() -> &'static SupabaseConfig {
    CONFIG.get_or_init(|| {
        let config = resolve();
        if config.is_configured() {
            log::info!("Backend configured at {}", config.url);
        } else {
            log::warn!("Backend not configured; using local catalog data");
        }
        config
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = SupabaseConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.bucket, "karamlebnanbucket");
        assert!(config.url.starts_with("https://"));
        assert!(!config.is_configured());
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let raw = "[supabase]\nurl = \"https://demo.supabase.co/\"\nanon_key = \"k\"\n";
        let config = SupabaseConfig::from_toml(raw).unwrap();
        assert_eq!(config.url, "https://demo.supabase.co");
        assert_eq!(config.bucket, "karamlebnanbucket");
        assert!(config.is_configured());
    }

    #[test]
    fn test_overrides_skip_blank_values() {
        let config = SupabaseConfig::from_toml(DEFAULT_CONFIG)
            .unwrap()
            .with_overrides(Some("  ".into()), Some("anon".into()), None);
        assert_eq!(config.url, "https://xbznaxiummganlidnmdd.supabase.co");
        assert_eq!(config.anon_key, "anon");
        assert!(config.is_configured());
    }

    #[test]
    fn test_missing_section_is_error() {
        assert!(SupabaseConfig::from_toml("[other]\nx = 1").is_err());
    }
}
