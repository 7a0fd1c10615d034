//! Public storefront
//!
//! - `state` - catalog, filter and region registry in context
//! - `loader` - fetches the four collections and assembles the catalog
//! - the rest are the page regions

pub mod card;
pub mod catalog;
pub mod contact;
pub mod header;
pub mod hero;
pub mod loader;
pub mod page;
pub mod regions;
pub mod state;

pub use page::StorefrontPage;
