use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{error, info};

use super::payload::GeneratePayload;
use crate::error::TranslateError;

/// Generation can take minutes on large local models; fail rather than
/// hang forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Backend that turns a generate payload into raw model text.
#[async_trait]
pub trait GenerateBackend: Send + Sync {
    async fn generate(&self, payload: &GeneratePayload) -> Result<String, TranslateError>;
}

/// Response body from Ollama `/api/generate`; fields other than the
/// generated text are ignored.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    generate_url: String,
}

impl OllamaClient {
    pub fn new(generate_url: String) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        info!("Initialized OllamaClient: url={}", generate_url);
        Ok(Self {
            client,
            generate_url,
        })
    }
}

#[async_trait]
impl GenerateBackend for OllamaClient {
    async fn generate(&self, payload: &GeneratePayload) -> Result<String, TranslateError> {
        info!("Calling Ollama: model={}", payload.model);

        let response = self
            .client
            .post(&self.generate_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                error!("Ollama request failed: {}", e);
                TranslateError::BackendUnavailable(e.to_string())
            })?
            .error_for_status()
            .map_err(|e| {
                error!("Ollama returned error status: {}", e);
                TranslateError::BackendUnavailable(e.to_string())
            })?;

        let body: GenerateResponse = response.json().await.map_err(|e| {
            error!("Ollama response body was unusable: {}", e);
            TranslateError::EmptyBackendResponse
        })?;

        let text = body.response.trim().to_string();
        if text.is_empty() {
            error!("Ollama response contained no text");
            return Err(TranslateError::EmptyBackendResponse);
        }

        info!("Ollama response: {}", text);
        Ok(text)
    }
}
