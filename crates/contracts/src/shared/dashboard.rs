use crate::domain::a001_main_category::aggregate::MainCategory;
use crate::domain::a002_subcategory::aggregate::Subcategory;
use crate::domain::a003_product::aggregate::Product;
use crate::domain::a004_section::aggregate::Section;
use crate::shared::media::STORAGE_BUCKET;
use serde::{Deserialize, Serialize};

/// Counters shown on the admin dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_products: usize,
    pub active_products: usize,
    pub featured_products: usize,
    pub total_subcategories: usize,
    pub active_subcategories: usize,
    pub total_sections: usize,
    pub total_main_categories: usize,
}

impl DashboardStats {
    pub fn from_rows(
        products: &[Product],
        subcategories: &[Subcategory],
        sections: &[Section],
        main_categories: &[MainCategory],
    ) -> Self {
        Self {
            total_products: products.len(),
            active_products: products.iter().filter(|p| p.active).count(),
            featured_products: products.iter().filter(|p| p.featured).count(),
            total_subcategories: subcategories.len(),
            active_subcategories: subcategories.iter().filter(|s| s.active).count(),
            total_sections: sections.len(),
            total_main_categories: main_categories.len(),
        }
    }
}

/// Result of probing one table or the bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub name: String,
    pub result: Result<(), String>,
}

impl StatusCheck {
    pub fn table(table: &str, result: Result<(), String>) -> Self {
        Self {
            name: format!("Table {}", table),
            result,
        }
    }

    pub fn bucket(result: Result<(), String>) -> Self {
        Self {
            name: format!("Bucket {}", STORAGE_BUCKET),
            result,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// `OK` or the error text
    pub fn label(&self) -> String {
        match &self.result {
            Ok(()) => "OK".to_string(),
            Err(e) => e.clone(),
        }
    }
}

/// Outcome of importing the default subcategories
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub created: usize,
    pub updated: usize,
    pub failed: usize,
}

impl ImportReport {
    pub fn summary(&self) -> String {
        let mut text = format!(
            "Import complete! {} new, {} updated",
            self.created, self.updated
        );
        if self.failed > 0 {
            text.push_str(&format!(", {} failed", self.failed));
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_count_flags() {
        let products: Vec<Product> = serde_json::from_str(
            r#"[
                {"id": 1, "name_en": "A", "main_type": "single", "featured": true},
                {"id": 2, "name_en": "B", "main_type": "single", "active": false},
                {"id": 3, "name_en": "C", "main_type": "bulk", "featured": true}
            ]"#,
        )
        .unwrap();
        let mut hidden = Subcategory::new("vinegar", "single", "Vinegar", "", 1);
        hidden.active = false;
        let subcategories = vec![Subcategory::new("olives", "single", "Olives", "", 0), hidden];

        let stats = DashboardStats::from_rows(&products, &subcategories, &[], &[]);
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.active_products, 2);
        assert_eq!(stats.featured_products, 2);
        assert_eq!(stats.total_subcategories, 2);
        assert_eq!(stats.active_subcategories, 1);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(StatusCheck::table("products", Ok(())).label(), "OK");
        let failed = StatusCheck::bucket(Err("Bucket not found".into()));
        assert_eq!(failed.label(), "Bucket not found");
        assert_eq!(failed.name, "Bucket karamlebnanbucket");
    }

    #[test]
    fn test_import_summary() {
        let report = ImportReport {
            created: 3,
            updated: 26,
            failed: 0,
        };
        assert_eq!(report.summary(), "Import complete! 3 new, 26 updated");
    }
}
