use crate::domain::common::serde_helpers::{non_blank, parse_optional_i32};
use crate::domain::common::TableRow;
use serde::{Deserialize, Serialize};

// ============================================================================
// Row
// ============================================================================

/// Content section: patches a fixed page region (hero, about, contact,
/// products) or titles a catalog section materialized from product tags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub key: String,
    #[serde(default)]
    pub title_en: Option<String>,
    #[serde(default)]
    pub title_ar: Option<String>,
    #[serde(default)]
    pub body_en: Option<String>,
    #[serde(default)]
    pub body_ar: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub overlay_color: Option<String>,
    #[serde(default)]
    pub overlay_opacity: Option<f32>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<String>,
}

impl Section {
    pub fn new(key: &str, title_en: &str, title_ar: &str, body_en: &str, body_ar: &str) -> Self {
        Self {
            key: key.to_string(),
            title_en: non_blank(title_en),
            title_ar: non_blank(title_ar),
            body_en: non_blank(body_en),
            body_ar: non_blank(body_ar),
            image_url: None,
            sort_order: None,
            overlay_color: None,
            overlay_opacity: None,
            updated_at: None,
        }
    }
}

impl TableRow for Section {
    fn key(&self) -> String {
        self.key.clone()
    }

    fn table_index() -> &'static str {
        "a004"
    }

    fn table_name() -> &'static str {
        "sections"
    }

    fn key_column() -> &'static str {
        "key"
    }

    fn element_name() -> &'static str {
        "Section"
    }

    fn list_name() -> &'static str {
        "Sections"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Admin form state for upserting a section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionDto {
    pub editing: Option<String>,
    pub key: String,
    pub title_en: String,
    pub title_ar: String,
    pub body_en: String,
    pub body_ar: String,
    pub image_url: String,
    pub sort_order: String,
    pub overlay_color: String,
    pub overlay_opacity: String,
}

impl SectionDto {
    pub fn from_row(row: &Section) -> Self {
        Self {
            editing: Some(row.key.clone()),
            key: row.key.clone(),
            title_en: row.title_en.clone().unwrap_or_default(),
            title_ar: row.title_ar.clone().unwrap_or_default(),
            body_en: row.body_en.clone().unwrap_or_default(),
            body_ar: row.body_ar.clone().unwrap_or_default(),
            image_url: row.image_url.clone().unwrap_or_default(),
            sort_order: row.sort_order.map(|v| v.to_string()).unwrap_or_default(),
            overlay_color: row.overlay_color.clone().unwrap_or_default(),
            overlay_opacity: row
                .overlay_opacity
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.key.trim().is_empty() {
            return Err("Key is required".into());
        }
        if self.key.trim().contains(char::is_whitespace) {
            return Err("Key must not contain spaces; use hyphens".into());
        }
        self.parse_opacity()?;
        Ok(())
    }

    fn parse_opacity(&self) -> Result<Option<f32>, String> {
        let raw = self.overlay_opacity.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.parse::<f32>() {
            Ok(v) if (0.0..=1.0).contains(&v) => Ok(Some(v)),
            _ => Err("Overlay opacity must be between 0 and 1".into()),
        }
    }

    pub fn to_row(&self) -> Result<Section, String> {
        self.validate()?;
        Ok(Section {
            key: self.key.trim().to_lowercase(),
            title_en: non_blank(&self.title_en),
            title_ar: non_blank(&self.title_ar),
            body_en: non_blank(&self.body_en),
            body_ar: non_blank(&self.body_ar),
            image_url: non_blank(&self.image_url),
            sort_order: parse_optional_i32(&self.sort_order, "Sort order")?,
            overlay_color: non_blank(&self.overlay_color),
            overlay_opacity: self.parse_opacity()?,
            updated_at: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_range() {
        let mut dto = SectionDto {
            key: "hero".into(),
            overlay_opacity: "0.4".into(),
            ..Default::default()
        };
        assert_eq!(dto.to_row().unwrap().overlay_opacity, Some(0.4));

        dto.overlay_opacity = "1.5".into();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_updated_at_not_written() {
        let mut row = Section::new("about", "Our Story", "", "", "");
        row.updated_at = Some("2025-08-15T10:00:00Z".into());
        let json = serde_json::to_value(&row).unwrap();
        assert!(json.get("updated_at").is_none());
        assert_eq!(json["title_ar"], serde_json::Value::Null);
    }
}
