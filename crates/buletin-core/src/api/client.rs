//! Blocking HTTP client for the vision-model endpoint.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use tracing::debug;

use crate::error::ApiError;
use crate::models::config::ApiConfig;

use super::{ChatMessage, ChatRequest, ChatResponse, ContentPart, ImageUrl};

/// Fixed instruction sent with every card image.
const INSTRUCTION: &str = "This is a Romanian ID card. Make sure to give me the full name \
(both first and last name) and full address. Please extract and return ONLY these fields \
in this EXACT format: NUME: [value] ; DOMICILIU: [value] ; CNP: [value]";

/// Client for a hosted multimodal chat-completion endpoint.
///
/// One synchronous POST per image; the key is held only for the lifetime of
/// the client and sent as a bearer token.
pub struct VisionApiClient {
    http: reqwest::blocking::Client,
    endpoint: String,
    model: String,
    max_tokens: u32,
    api_key: String,
}

impl VisionApiClient {
    /// Create a client with the default endpoint and model.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_config(&ApiConfig::default(), api_key)
    }

    pub fn from_config(config: &ApiConfig, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            api_key: api_key.into(),
        }
    }

    /// Send one card image and return the model's reply text.
    ///
    /// The image bytes are embedded as an inline base64 data URI; the
    /// payload is labeled JPEG regardless of the actual encoding, which the
    /// endpoint accepts.
    pub fn describe_card(&self, image: &[u8]) -> Result<String, ApiError> {
        let encoded = BASE64_STANDARD.encode(image);

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text {
                        text: INSTRUCTION.to_string(),
                    },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: format!("data:image/jpeg;base64,{encoded}"),
                        },
                    },
                ],
            }],
            max_tokens: self.max_tokens,
        };

        debug!(
            "Sending {} image bytes to {} (model {})",
            image.len(),
            self.endpoint,
            self.model
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let body: ChatResponse = response
            .json()
            .map_err(|e| ApiError::MalformedReply(e.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ApiError::MalformedReply("reply contains no choices".to_string()))
    }
}
