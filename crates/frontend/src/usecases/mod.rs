pub mod u501_import_defaults;
pub mod u502_media_library;
pub mod u503_export_json;
