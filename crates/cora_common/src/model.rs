//! Client for the hosted model inference service.
//!
//! Sends the built prompt as a single user message with the configured
//! decoding parameters and extracts the first text segment of the reply.

use crate::config::Config;
use crate::error::GenerationError;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Version tag sent with every request envelope.
const SCHEMA_VERSION: &str = "2023-05-31";

/// Window for one full generation round trip.
const GENERATION_TIMEOUT_SECS: u64 = 120;

/// Text-generation backend seam.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// HTTP client for the hosted model runtime.
pub struct HttpModelClient {
    http: reqwest::Client,
    endpoint: String,
    model_id: String,
    max_tokens: u32,
    temperature: f64,
    api_key_id: String,
    api_secret: String,
}

impl HttpModelClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(GENERATION_TIMEOUT_SECS))
                .build()
                .unwrap_or_default(),
            endpoint: config.model_endpoint.clone(),
            model_id: config.model_id.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            api_key_id: config.api_key_id.clone(),
            api_secret: config.api_secret.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for HttpModelClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = serde_json::json!({
            "schema_version": SCHEMA_VERSION,
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
            "messages": [
                { "role": "user", "content": prompt }
            ],
        });

        let response = self
            .http
            .post(format!(
                "{}/v1/model/{}/invoke",
                self.endpoint, self.model_id
            ))
            .header("x-api-key-id", &self.api_key_id)
            .bearer_auth(&self.api_secret)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GenerationError::Status(response.status().as_u16()));
        }

        let json: Value = response
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(e.to_string()))?;

        let answer = extract_answer_text(&json)?;
        debug!("model returned {} chars", answer.len());
        Ok(answer)
    }
}

/// Pull the first text segment out of the response envelope.
pub fn extract_answer_text(json: &Value) -> Result<String, GenerationError> {
    let content = json
        .get("content")
        .and_then(|v| v.as_array())
        .ok_or_else(|| GenerationError::Malformed("missing content array".to_string()))?;

    content
        .iter()
        .find_map(|segment| segment.get("text").and_then(|t| t.as_str()))
        .map(|text| text.to_string())
        .ok_or(GenerationError::EmptyResponse)
}
