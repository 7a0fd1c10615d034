use contracts::domain::a002_subcategory::aggregate::Subcategory;
use contracts::domain::a003_product::aggregate::ProductDto;

use crate::domain::a002_subcategory::api as subcategory_api;
use crate::domain::a003_product::api;

pub async fn fetch_by_id(id: String) -> Result<ProductDto, String> {
    let row = api::fetch_product(&id).await?;
    Ok(ProductDto::from_row(&row))
}

pub async fn save_form(dto: &ProductDto) -> Result<String, String> {
    api::save_product(dto).await
}

/// Every subcategory; the view narrows them to the chosen main type
pub async fn fetch_subcategories() -> Result<Vec<Subcategory>, String> {
    subcategory_api::fetch_subcategories().await
}
