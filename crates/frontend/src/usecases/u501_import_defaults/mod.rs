mod api;
mod view;

pub use view::ImportDefaultsPage;
