//! Card field extraction: the strategy seam and its two implementations.

mod local;
mod parser;
mod remote;
pub mod rules;

pub use local::LocalOcrExtractor;
pub use parser::{parse_model_reply, parse_ocr_text};
pub use remote::RemoteVisionExtractor;

use std::path::Path;

use crate::error::Result;
use crate::models::record::CardFields;

/// One extraction strategy: image path in, three-field record out.
///
/// Both the local-OCR and the remote vision-model paths implement this
/// contract and are otherwise unrelated.
pub trait CardExtractor {
    /// Extract the card fields from one image file.
    fn extract(&self, image_path: &Path) -> Result<CardFields>;
}
