//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for the buletin pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuletinConfig {
    /// Local OCR configuration.
    pub ocr: OcrConfig,

    /// Image preprocessing configuration.
    pub preprocess: PreprocessConfig,

    /// Remote vision-model API configuration.
    pub api: ApiConfig,
}

/// Local OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Language packs handed to the OCR engine.
    ///
    /// Romanian plus English so both the printed bilingual labels and
    /// diacritic-bearing personal names are recognized.
    pub languages: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            languages: "ron+eng".to_string(),
        }
    }
}

/// Image enhancement applied before recognition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Contrast enhancement factor (1.0 = unchanged).
    pub contrast: f32,

    /// Sharpness enhancement factor (1.0 = unchanged).
    pub sharpness: f32,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            contrast: 1.5,
            sharpness: 1.5,
        }
    }
}

/// Remote vision-model API configuration.
///
/// The API key is deliberately not part of the configuration file; it is
/// supplied by the caller per run and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Chat-completion endpoint URL.
    pub endpoint: String,

    /// Model identifier sent with each request.
    pub model: String,

    /// Cap on the length of the generated reply.
    pub max_tokens: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 300,
        }
    }
}

impl BuletinConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
