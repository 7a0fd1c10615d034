//! Product details tab
//!
//! - model.rs: API calls
//! - view_model.rs: form state and commands
//! - view.rs: the component

mod model;
mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
