//! HTTP implementation of [`RevisionClient`].
//!
//! Posts JSON to `{base_url}/edit_text` and expects a JSON array back.
//! No auth, no timeout: the request settles whenever the network stack
//! says it does.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::client::{RevisionClient, RevisionError};
use super::types::{EditRequest, SentenceRevision};

const EDIT_TEXT_PATH: &str = "/edit_text";

pub struct HttpRevisionClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpRevisionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let endpoint = format!("{}{}", base_url.trim_end_matches('/'), EDIT_TEXT_PATH);
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl RevisionClient for HttpRevisionClient {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn revise(&self, request: &EditRequest) -> Result<Vec<SentenceRevision>, RevisionError> {
        info!(
            "POST {}: text_len={}, instruction_len={}",
            self.endpoint,
            request.text.len(),
            request.instruction.len()
        );

        // `.json()` sets Content-Type: application/json
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| RevisionError::Network(e.to_string()))?;

        debug!("Revision response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Revision server error: {} - {}", status, message);
            return Err(RevisionError::Status { status, message });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RevisionError::Network(e.to_string()))?;

        let revisions: Vec<SentenceRevision> =
            serde_json::from_str(&body).map_err(|e| RevisionError::Parse(e.to_string()))?;

        info!("Received {} revisions", revisions.len());
        Ok(revisions)
    }
}
