//! Remote extraction through the vision-model API.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::api::VisionApiClient;
use crate::error::{ApiError, Result};
use crate::models::record::CardFields;

use super::{CardExtractor, parse_model_reply};

/// Extractor sending raw image bytes to a hosted vision model.
pub struct RemoteVisionExtractor {
    client: VisionApiClient,
}

impl RemoteVisionExtractor {
    pub fn new(client: VisionApiClient) -> Self {
        Self { client }
    }
}

impl CardExtractor for RemoteVisionExtractor {
    fn extract(&self, image_path: &Path) -> Result<CardFields> {
        let bytes = fs::read(image_path)?;

        match self.client.describe_card(&bytes) {
            Ok(reply) => Ok(parse_model_reply(&reply)),
            // A refused request degrades to an all-"Error" record so the
            // batch continues with the next file.
            Err(ApiError::Status { status }) => {
                warn!(
                    "Endpoint returned HTTP {} for {}, recording error sentinels",
                    status,
                    image_path.display()
                );
                Ok(CardFields::error())
            }
            // Transport failures and malformed replies abort the batch.
            Err(e) => Err(e.into()),
        }
    }
}
