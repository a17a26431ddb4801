//! Data models: extraction records and pipeline configuration.

pub mod config;
pub mod record;

pub use config::{ApiConfig, BuletinConfig, OcrConfig, PreprocessConfig};
pub use record::{CardFields, ExtractionRecord};
