//! Common types and traits for all backend tables

pub mod aggregate_root;
pub mod serde_helpers;

// Re-exports
pub use aggregate_root::TableRow;
