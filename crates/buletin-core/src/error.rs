//! Error types for the buletin-core library.

use thiserror::Error;

/// Main error type for the buletin library.
#[derive(Error, Debug)]
pub enum BuletinError {
    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Remote vision API error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Image decoding or processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to local OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to initialize the OCR engine.
    #[error("failed to initialize OCR engine: {0}")]
    Init(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Failed to hand the image over to the OCR engine.
    #[error("failed to encode image for OCR: {0}")]
    ImageEncoding(String),
}

/// Errors related to the remote vision-model API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The HTTP request could not be sent or the transport failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success HTTP status.
    ///
    /// Callers degrade this to an all-"Error" record instead of failing
    /// the batch.
    #[error("endpoint returned HTTP status {status}")]
    Status { status: u16 },

    /// The reply body did not contain a chat completion.
    #[error("malformed reply: {0}")]
    MalformedReply(String),
}

/// Errors produced by the batch driver.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The input directory contains no image files.
    ///
    /// Distinct from a processing error so the caller can present an
    /// informational notice instead of a failure.
    #[error("no image files found in the input directory")]
    EmptyInput,

    /// The input directory could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Processing one file failed; the remaining batch was aborted.
    #[error("failed to process {filename}: {source}")]
    File {
        filename: String,
        #[source]
        source: BuletinError,
    },
}

/// Result type for the buletin library.
pub type Result<T> = std::result::Result<T, BuletinError>;
