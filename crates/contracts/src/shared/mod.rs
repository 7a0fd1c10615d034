pub mod catalog;
pub mod dashboard;
pub mod generation;
pub mod i18n;
pub mod media;
pub mod overrides;
pub mod sample_data;
pub mod validation;
