pub mod card;
pub mod filter;
pub mod loader;
pub mod localization;
pub mod model;
pub mod registry;
pub mod sections;

pub use card::{highlight_segments, CategoryBanner, ImageFallback, ProductCard, TextSegment};
pub use filter::{visible_products, FilterState};
pub use loader::{assemble, CatalogCollections, LoadReport};
pub use localization::{localize, localize_list, ListField, LocalizedList, LocalizedText, TextField};
pub use model::{Catalog, CatalogProduct, FALLBACK_IMAGE};
pub use registry::{SubcategoryRegistry, ALL_SUBCATEGORY};
pub use sections::{derived_regions, region_header, RegionHeader, RegionRegistry, RegionView};
