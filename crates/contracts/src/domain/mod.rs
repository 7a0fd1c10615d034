pub mod a001_main_category;
pub mod a002_subcategory;
pub mod a003_product;
pub mod a004_section;
pub mod common;
