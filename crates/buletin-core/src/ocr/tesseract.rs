//! Tesseract-backed implementation of the recognition seam.

use std::io::{Cursor, Write};

use image::{ImageFormat, RgbImage};
use tempfile::NamedTempFile;
use tesseract::Tesseract;
use tracing::debug;

use crate::error::OcrError;
use crate::models::config::OcrConfig;

use super::TextRecognizer;

/// Recognizer driving a system Tesseract installation.
///
/// Each call initializes a fresh engine; Tesseract instances are not
/// reusable across images through the consuming builder API.
pub struct TesseractRecognizer {
    languages: String,
}

impl TesseractRecognizer {
    /// Create a recognizer with the default bilingual language packs.
    pub fn new() -> Self {
        Self::from_config(&OcrConfig::default())
    }

    pub fn from_config(config: &OcrConfig) -> Self {
        Self {
            languages: config.languages.clone(),
        }
    }

    /// Override the language packs (Tesseract `lang1+lang2` syntax).
    pub fn with_languages(mut self, languages: impl Into<String>) -> Self {
        self.languages = languages.into();
        self
    }

    pub fn languages(&self) -> &str {
        &self.languages
    }
}

impl Default for TesseractRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image: &RgbImage) -> Result<String, OcrError> {
        // Tesseract reads from a file path; hand it the image as a PNG in
        // a temporary file.
        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| OcrError::ImageEncoding(e.to_string()))?;

        let mut temp_file =
            NamedTempFile::new().map_err(|e| OcrError::ImageEncoding(e.to_string()))?;
        temp_file
            .write_all(&png)
            .map_err(|e| OcrError::ImageEncoding(e.to_string()))?;

        let image_path = temp_file
            .path()
            .to_str()
            .ok_or_else(|| OcrError::ImageEncoding("non-UTF-8 temp path".to_string()))?;

        let text = Tesseract::new(None, Some(&self.languages))
            .map_err(|e| OcrError::Init(e.to_string()))?
            .set_image(image_path)
            .map_err(|e| OcrError::Recognition(e.to_string()))?
            .get_text()
            .map_err(|e| OcrError::Recognition(e.to_string()))?;

        debug!("Recognized {} characters of text", text.len());

        Ok(text)
    }
}
