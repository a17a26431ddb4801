//! Core library for Romanian ID-card field extraction.
//!
//! This crate provides:
//! - Image preprocessing (contrast and sharpness enhancement)
//! - A text-recognition seam with a Tesseract-backed implementation
//! - Pattern-based extraction of the three card fields (nume, domiciliu, CNP)
//! - A remote vision-model extractor over a chat-completion API
//! - A sequential batch driver producing spreadsheet-ready records

pub mod api;
pub mod batch;
pub mod card;
pub mod error;
pub mod models;
pub mod ocr;

pub use api::VisionApiClient;
pub use batch::{BatchProgress, list_image_files, run_batch};
pub use card::{
    CardExtractor, LocalOcrExtractor, RemoteVisionExtractor, parse_model_reply, parse_ocr_text,
};
pub use error::{ApiError, BatchError, BuletinError, OcrError, Result};
pub use models::config::BuletinConfig;
pub use models::record::{CardFields, ExtractionRecord};
#[cfg(feature = "tesseract")]
pub use ocr::TesseractRecognizer;
pub use ocr::{ImagePreprocessor, TextRecognizer};
