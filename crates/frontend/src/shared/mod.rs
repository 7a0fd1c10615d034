pub mod api_utils;
pub mod config;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod image;
pub mod list_utils;
pub mod local_storage;
pub mod page_frame;
pub mod supabase;
