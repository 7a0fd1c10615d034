use crate::domain::common::serde_helpers::{non_blank, null_as_default};
use crate::domain::common::TableRow;
use serde::{Deserialize, Serialize};

// ============================================================================
// Row
// ============================================================================

/// Top-level product grouping (e.g. single-serve vs bulk); drives the tab bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainCategory {
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_en: String,
    #[serde(default)]
    pub title_ar: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl MainCategory {
    pub fn new(slug: &str, title_en: &str, title_ar: &str, sort_order: i32) -> Self {
        Self {
            slug: slug.to_string(),
            title_en: title_en.to_string(),
            title_ar: non_blank(title_ar),
            description_en: None,
            description_ar: None,
            sort_order,
            active: true,
        }
    }
}

impl TableRow for MainCategory {
    fn key(&self) -> String {
        self.slug.clone()
    }

    fn table_index() -> &'static str {
        "a001"
    }

    fn table_name() -> &'static str {
        "main_categories"
    }

    fn key_column() -> &'static str {
        "slug"
    }

    fn element_name() -> &'static str {
        "Main category"
    }

    fn list_name() -> &'static str {
        "Main categories"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Admin form state for creating/updating a main category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MainCategoryDto {
    /// Slug of the record being edited; `None` for a new one
    pub editing: Option<String>,
    pub slug: String,
    pub title_en: String,
    pub title_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub sort_order: String,
    pub active: bool,
}

impl MainCategoryDto {
    pub fn new() -> Self {
        Self {
            active: true,
            ..Default::default()
        }
    }

    pub fn from_row(row: &MainCategory) -> Self {
        Self {
            editing: Some(row.slug.clone()),
            slug: row.slug.clone(),
            title_en: row.title_en.clone(),
            title_ar: row.title_ar.clone().unwrap_or_default(),
            description_en: row.description_en.clone().unwrap_or_default(),
            description_ar: row.description_ar.clone().unwrap_or_default(),
            sort_order: row.sort_order.to_string(),
            active: row.active,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.slug.trim().is_empty() {
            return Err("Slug is required".into());
        }
        if self.slug.trim().contains(char::is_whitespace) {
            return Err("Slug must not contain spaces".into());
        }
        if self.title_en.trim().is_empty() {
            return Err("English title is required".into());
        }
        Ok(())
    }

    /// Row to write; validates first
    pub fn to_row(&self) -> Result<MainCategory, String> {
        self.validate()?;
        let sort_order = crate::domain::common::serde_helpers::parse_optional_i32(
            &self.sort_order,
            "Sort order",
        )?
        .unwrap_or(0);
        Ok(MainCategory {
            slug: self.slug.trim().to_string(),
            title_en: self.title_en.trim().to_string(),
            title_ar: non_blank(&self.title_ar),
            description_en: non_blank(&self.description_en),
            description_ar: non_blank(&self.description_ar),
            sort_order,
            active: self.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_row_trims_and_defaults() {
        let dto = MainCategoryDto {
            slug: " bulk ".into(),
            title_en: "Bulk".into(),
            sort_order: "".into(),
            ..MainCategoryDto::new()
        };
        let row = dto.to_row().unwrap();
        assert_eq!(row.slug, "bulk");
        assert_eq!(row.sort_order, 0);
        assert_eq!(row.title_ar, None);
        assert!(row.active);
    }

    #[test]
    fn test_validate_rejects_blank_slug() {
        let dto = MainCategoryDto {
            title_en: "Bulk".into(),
            ..MainCategoryDto::new()
        };
        assert_eq!(dto.validate(), Err("Slug is required".to_string()));
    }
}
