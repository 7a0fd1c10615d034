mod api;
mod view;

pub use view::ExportJsonPage;
