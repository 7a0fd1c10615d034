use crate::domain::common::serde_helpers::{
    flexible_id, join_list, non_blank, null_as_default, parse_optional_i32, split_list,
};
use crate::domain::common::TableRow;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Rows
// ============================================================================

/// Row of the `product_sections` join table embedded into product reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSectionTag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub section_key: String,
}

/// Product as read from the `products` table, with its section tags joined in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name_en: String,
    #[serde(default)]
    pub name_ar: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(default)]
    pub description_ar: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub main_type: String,
    #[serde(default)]
    pub sub_slug: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients_en: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients_ar: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variants_en: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variants_ar: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags_en: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags_ar: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_sections: Vec<ProductSectionTag>,
}

fn default_active() -> bool {
    true
}

impl Product {
    /// Section keys in join-table order
    pub fn section_keys(&self) -> Vec<String> {
        self.product_sections
            .iter()
            .map(|s| s.section_key.clone())
            .collect()
    }
}

impl TableRow for Product {
    fn key(&self) -> String {
        self.id.clone()
    }

    fn table_index() -> &'static str {
        "a003"
    }

    fn table_name() -> &'static str {
        "products"
    }

    fn key_column() -> &'static str {
        "id"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }

    fn select_columns() -> &'static str {
        "*,product_sections(section_key)"
    }
}

/// Body written to the `products` table (no join, no timestamps)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPayload {
    pub id: String,
    pub name_en: String,
    pub name_ar: Option<String>,
    pub description_en: Option<String>,
    pub description_ar: Option<String>,
    pub main_type: String,
    pub sub_slug: Option<String>,
    pub image_url: Option<String>,
    pub ingredients_en: Vec<String>,
    pub ingredients_ar: Vec<String>,
    pub variants_en: Vec<String>,
    pub variants_ar: Vec<String>,
    pub tags_en: Vec<String>,
    pub tags_ar: Vec<String>,
    pub featured: bool,
    pub active: bool,
    pub sort_order: Option<i32>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Admin form state for a product; list fields are comma separated text
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: Option<String>,
    pub name_en: String,
    pub name_ar: String,
    pub description_en: String,
    pub description_ar: String,
    pub main_type: String,
    pub sub_slug: String,
    pub image_url: String,
    pub ingredients_en: String,
    pub ingredients_ar: String,
    pub variants_en: String,
    pub variants_ar: String,
    pub tags_en: String,
    pub tags_ar: String,
    pub section_keys: String,
    pub featured: bool,
    pub active: bool,
    pub sort_order: String,
}

impl ProductDto {
    pub fn new() -> Self {
        Self {
            main_type: "single".into(),
            active: true,
            ..Default::default()
        }
    }

    pub fn from_row(row: &Product) -> Self {
        Self {
            id: Some(row.id.clone()),
            name_en: row.name_en.clone(),
            name_ar: row.name_ar.clone().unwrap_or_default(),
            description_en: row.description_en.clone().unwrap_or_default(),
            description_ar: row.description_ar.clone().unwrap_or_default(),
            main_type: row.main_type.clone(),
            sub_slug: row.sub_slug.clone().unwrap_or_default(),
            image_url: row.image_url.clone().unwrap_or_default(),
            ingredients_en: join_list(&row.ingredients_en),
            ingredients_ar: join_list(&row.ingredients_ar),
            variants_en: join_list(&row.variants_en),
            variants_ar: join_list(&row.variants_ar),
            tags_en: join_list(&row.tags_en),
            tags_ar: join_list(&row.tags_ar),
            section_keys: join_list(&row.section_keys()),
            featured: row.featured,
            active: row.active,
            sort_order: row.sort_order.map(|v| v.to_string()).unwrap_or_default(),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name_en.trim().is_empty() {
            return Err("English name is required".into());
        }
        if self.main_type.trim().is_empty() {
            return Err("Main category is required".into());
        }
        if self.sub_slug.trim().is_empty() {
            return Err("Subcategory is required".into());
        }
        parse_optional_i32(&self.sort_order, "Sort order")?;
        Ok(())
    }

    /// Distinct section keys, order of first appearance
    pub fn section_key_list(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::new();
        for key in split_list(&self.section_keys) {
            let key = key.to_lowercase();
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }

    /// Body for insert/update; new products get a client-side id so the
    /// section rows can be written right after
    pub fn to_payload(&self) -> Result<ProductPayload, String> {
        self.validate()?;
        Ok(ProductPayload {
            id: self
                .id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name_en: self.name_en.trim().to_string(),
            name_ar: non_blank(&self.name_ar),
            description_en: non_blank(&self.description_en),
            description_ar: non_blank(&self.description_ar),
            main_type: self.main_type.trim().to_string(),
            sub_slug: non_blank(&self.sub_slug),
            image_url: non_blank(&self.image_url),
            ingredients_en: split_list(&self.ingredients_en),
            ingredients_ar: split_list(&self.ingredients_ar),
            variants_en: split_list(&self.variants_en),
            variants_ar: split_list(&self.variants_ar),
            tags_en: split_list(&self.tags_en),
            tags_ar: split_list(&self.tags_ar),
            featured: self.featured,
            active: self.active,
            sort_order: parse_optional_i32(&self.sort_order, "Sort order")?,
        })
    }

    /// Join-table rows replacing the product's current section tags
    pub fn section_rows(&self, product_id: &str) -> Vec<ProductSectionTag> {
        self.section_key_list()
            .into_iter()
            .map(|section_key| ProductSectionTag {
                product_id: Some(product_id.to_string()),
                section_key,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_join_and_nulls() {
        let json = r#"{
            "id": 7,
            "name_en": "Pomegranate Molasses",
            "name_ar": null,
            "main_type": "single",
            "sub_slug": "molases",
            "ingredients_en": ["Pomegranate Juice"],
            "ingredients_ar": null,
            "featured": null,
            "sort_order": null,
            "product_sections": [{"section_key": "bestsellers"}, {"section_key": "holiday-special"}]
        }"#;
        let row: Product = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, "7");
        assert!(!row.featured);
        assert!(row.active);
        assert!(row.ingredients_ar.is_empty());
        assert_eq!(row.section_keys(), vec!["bestsellers", "holiday-special"]);
    }

    #[test]
    fn test_payload_keeps_existing_id_and_splits_lists() {
        let dto = ProductDto {
            id: Some("abc".into()),
            name_en: "Fig Jam".into(),
            sub_slug: "pastes".into(),
            ingredients_en: "Figs, Sugar, ".into(),
            sort_order: "3".into(),
            ..ProductDto::new()
        };
        let payload = dto.to_payload().unwrap();
        assert_eq!(payload.id, "abc");
        assert_eq!(payload.ingredients_en, vec!["Figs", "Sugar"]);
        assert_eq!(payload.sort_order, Some(3));
        assert_eq!(payload.name_ar, None);
    }

    #[test]
    fn test_new_product_gets_generated_id() {
        let dto = ProductDto {
            name_en: "Fig Jam".into(),
            sub_slug: "pastes".into(),
            ..ProductDto::new()
        };
        let payload = dto.to_payload().unwrap();
        assert!(Uuid::parse_str(&payload.id).is_ok());
    }

    #[test]
    fn test_section_rows_are_distinct_and_lowercased() {
        let dto = ProductDto {
            section_keys: "Bestsellers, holiday-special, bestsellers".into(),
            ..ProductDto::new()
        };
        let rows = dto.section_rows("p1");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].section_key, "bestsellers");
        assert_eq!(rows[1].product_id.as_deref(), Some("p1"));
    }

    #[test]
    fn test_validate_requires_subcategory() {
        let dto = ProductDto {
            name_en: "Fig Jam".into(),
            ..ProductDto::new()
        };
        assert_eq!(dto.validate(), Err("Subcategory is required".to_string()));
    }
}
