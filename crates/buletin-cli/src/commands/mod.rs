//! CLI subcommands and shared extractor wiring.

pub mod batch;
pub mod config;
pub mod process;

use std::path::Path;

use buletin_core::{
    BuletinConfig, CardExtractor, ImagePreprocessor, LocalOcrExtractor, RemoteVisionExtractor,
    TesseractRecognizer, VisionApiClient,
};

/// Extraction method selection.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum Method {
    /// Local Tesseract OCR
    Tesseract,
    /// Remote vision model
    VisionModel,
}

/// Load the pipeline configuration, falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<BuletinConfig> {
    match config_path {
        Some(path) => Ok(BuletinConfig::from_file(Path::new(path))?),
        None => Ok(BuletinConfig::default()),
    }
}

/// Resolve the API key: explicit flag first, then `OPENAI_API_KEY`.
pub fn resolve_api_key(flag: Option<&str>) -> Option<String> {
    flag.map(str::to_string).or_else(|| {
        std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
    })
}

/// Build the selected extractor.
///
/// Method-specific configuration problems (a missing API key for the
/// remote method) are reported here, before any processing starts.
pub fn build_extractor(
    method: Method,
    api_key: Option<&str>,
    config: &BuletinConfig,
) -> anyhow::Result<Box<dyn CardExtractor + Send>> {
    match method {
        Method::Tesseract => {
            let recognizer = TesseractRecognizer::from_config(&config.ocr);
            let preprocessor = ImagePreprocessor::from_config(&config.preprocess);
            Ok(Box::new(
                LocalOcrExtractor::new(recognizer).with_preprocessor(preprocessor),
            ))
        }
        Method::VisionModel => {
            let key = resolve_api_key(api_key).ok_or_else(|| {
                anyhow::anyhow!(
                    "An API key is required for the vision-model method. \
                     Pass --api-key or set OPENAI_API_KEY."
                )
            })?;
            let client = VisionApiClient::from_config(&config.api, key);
            Ok(Box::new(RemoteVisionExtractor::new(client)))
        }
    }
}
