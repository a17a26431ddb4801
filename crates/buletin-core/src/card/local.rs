//! Local extraction: preprocess, recognize, pattern-match.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::record::CardFields;
use crate::ocr::{ImagePreprocessor, TextRecognizer};

use super::{CardExtractor, parse_ocr_text};

/// Extractor running a local OCR engine over enhanced card images.
pub struct LocalOcrExtractor<R: TextRecognizer> {
    preprocessor: ImagePreprocessor,
    recognizer: R,
}

impl<R: TextRecognizer> LocalOcrExtractor<R> {
    /// Create an extractor with default preprocessing.
    pub fn new(recognizer: R) -> Self {
        Self {
            preprocessor: ImagePreprocessor::new(),
            recognizer,
        }
    }

    /// Replace the preprocessor.
    pub fn with_preprocessor(mut self, preprocessor: ImagePreprocessor) -> Self {
        self.preprocessor = preprocessor;
        self
    }
}

impl<R: TextRecognizer> CardExtractor for LocalOcrExtractor<R> {
    fn extract(&self, image_path: &Path) -> Result<CardFields> {
        let image = image::open(image_path)?;
        let prepared = self.preprocessor.prepare(&image);

        let text = self.recognizer.recognize(&prepared)?;
        debug!(
            "OCR produced {} characters for {}",
            text.len(),
            image_path.display()
        );

        Ok(parse_ocr_text(&text))
    }
}
