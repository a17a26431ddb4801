//! Remote vision-model chat-completion API.

mod client;

pub use client::VisionApiClient;

use serde::{Deserialize, Serialize};

/// Chat-completion request body.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,

    /// The single user message carrying instruction + image.
    pub messages: Vec<ChatMessage>,

    /// Cap on the generated reply length.
    pub max_tokens: u32,
}

/// One chat message with multimodal content parts.
#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: Vec<ContentPart>,
}

/// A single part of a multimodal message.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

/// Inline image reference (data URI).
#[derive(Debug, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Chat-completion response body.
///
/// The generated reply sits at `choices[0].message.content`.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
pub struct ReplyMessage {
    pub content: String,
}
