//! Local OCR: image preprocessing and the text-recognition seam.

mod preprocessing;
#[cfg(feature = "tesseract")]
mod tesseract;

pub use preprocessing::ImagePreprocessor;
#[cfg(feature = "tesseract")]
pub use tesseract::TesseractRecognizer;

use image::RgbImage;

use crate::error::OcrError;

/// Text recognition over a preprocessed card image.
///
/// The extraction pipeline only needs raw recognized text back; any OCR
/// engine with Romanian + English language support satisfies the contract.
pub trait TextRecognizer {
    /// Run recognition and return the raw recognized text.
    fn recognize(&self, image: &RgbImage) -> Result<String, OcrError>;
}
