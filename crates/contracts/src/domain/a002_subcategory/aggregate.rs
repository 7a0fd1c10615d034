use crate::domain::common::serde_helpers::{non_blank, null_as_default, parse_optional_i32};
use crate::domain::common::TableRow;
use serde::{Deserialize, Serialize};

// ============================================================================
// Row
// ============================================================================

/// Second-level grouping under a main type, identified by a slug
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub slug: String,
    /// Slug of the owning main category
    pub category_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title_en: String,
    #[serde(default)]
    pub title_ar: Option<String>,
    #[serde(default)]
    pub banner_image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort_order: i32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Subcategory {
    pub fn new(slug: &str, category_type: &str, title_en: &str, title_ar: &str, sort_order: i32) -> Self {
        Self {
            slug: slug.to_string(),
            category_type: category_type.to_string(),
            title_en: title_en.to_string(),
            title_ar: non_blank(title_ar),
            banner_image_url: None,
            sort_order,
            active: true,
        }
    }
}

impl TableRow for Subcategory {
    fn key(&self) -> String {
        self.slug.clone()
    }

    fn table_index() -> &'static str {
        "a002"
    }

    fn table_name() -> &'static str {
        "subcategories"
    }

    fn key_column() -> &'static str {
        "slug"
    }

    fn element_name() -> &'static str {
        "Subcategory"
    }

    fn list_name() -> &'static str {
        "Subcategories"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Admin form state for upserting a subcategory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryDto {
    pub editing: Option<String>,
    pub slug: String,
    pub category_type: String,
    pub title_en: String,
    pub title_ar: String,
    pub banner_image_url: String,
    pub sort_order: String,
    pub active: bool,
}

impl SubcategoryDto {
    pub fn new() -> Self {
        Self {
            category_type: "single".into(),
            active: true,
            ..Default::default()
        }
    }

    pub fn from_row(row: &Subcategory) -> Self {
        Self {
            editing: Some(row.slug.clone()),
            slug: row.slug.clone(),
            category_type: row.category_type.clone(),
            title_en: row.title_en.clone(),
            title_ar: row.title_ar.clone().unwrap_or_default(),
            banner_image_url: row.banner_image_url.clone().unwrap_or_default(),
            sort_order: row.sort_order.to_string(),
            active: row.active,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.slug.trim().is_empty() {
            return Err("Slug is required".into());
        }
        if self.slug.trim().contains(char::is_whitespace) {
            return Err("Slug must not contain spaces; use hyphens".into());
        }
        if self.category_type.trim().is_empty() {
            return Err("Main category is required".into());
        }
        if self.title_en.trim().is_empty() {
            return Err("English title is required".into());
        }
        Ok(())
    }

    pub fn to_row(&self) -> Result<Subcategory, String> {
        self.validate()?;
        Ok(Subcategory {
            slug: self.slug.trim().to_string(),
            category_type: self.category_type.trim().to_string(),
            title_en: self.title_en.trim().to_string(),
            title_ar: non_blank(&self.title_ar),
            banner_image_url: non_blank(&self.banner_image_url),
            sort_order: parse_optional_i32(&self.sort_order, "Sort order")?.unwrap_or(0),
            active: self.active,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_nulls() {
        let json = r#"{"slug":"olive-oil","category_type":"single","title_en":"Olive Oil","title_ar":null,"banner_image_url":null,"sort_order":null,"active":true}"#;
        let row: Subcategory = serde_json::from_str(json).unwrap();
        assert_eq!(row.sort_order, 0);
        assert_eq!(row.title_ar, None);
    }

    #[test]
    fn test_validate_rejects_spaces_in_slug() {
        let dto = SubcategoryDto {
            slug: "olive oil".into(),
            title_en: "Olive Oil".into(),
            ..SubcategoryDto::new()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_round_trip_through_form() {
        let row = Subcategory::new("olive-oil", "single", "Olive Oil", "زيت زيتون", 5);
        assert_eq!(SubcategoryDto::from_row(&row).to_row().unwrap(), row);
    }
}
