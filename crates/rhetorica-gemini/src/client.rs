//! Gemini HTTP client.

use crate::error::{GeminiError, GeminiResult};
use crate::types::*;
use rhetorica_config::GeminiConfig;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

/// Client for the Gemini REST API.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl GeminiClient {
    /// Create a new client from configuration.
    ///
    /// Fails when no API key can be resolved, so a misconfigured
    /// installation stops before any work is done.
    pub fn from_config(config: &GeminiConfig) -> GeminiResult<Self> {
        let api_key = config
            .resolve_api_key()
            .map_err(|e| GeminiError::InvalidConfig(e.to_string()))?;

        Self::new(&config.base_url, api_key, config.timeout_seconds)
    }

    /// Create a new client with explicit settings.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout_seconds: u64,
    ) -> GeminiResult<Self> {
        let timeout = Duration::from_secs(timeout_seconds);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GeminiError::Http)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url.into()),
            api_key: api_key.into(),
            timeout,
        })
    }

    /// List all models offered by the provider.
    pub async fn list_models(&self) -> GeminiResult<Vec<ModelInfo>> {
        let url = format!("{}/models", self.base_url);
        debug!("Listing models from {}", url);

        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GeminiError::ApiError {
                status: status.as_u16(),
                message: extract_api_message(&text),
            });
        }

        let list: ListModelsResponse = response.json().await?;
        debug!("Provider listed {} models", list.models.len());
        Ok(list.models)
    }

    /// Submit a prompt plus JPEG frames to a model and return the raw
    /// response text, unmodified.
    pub async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
        jpeg_frames: &[Vec<u8>],
    ) -> GeminiResult<String> {
        let url = format!(
            "{}/{}:generateContent",
            self.base_url,
            qualify_model_name(model)
        );
        debug!(
            "Generating with model {} ({} frames)",
            model,
            jpeg_frames.len()
        );

        let request = GenerateContentRequest::multimodal(prompt, jpeg_frames);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(GeminiError::ApiError {
                status: status.as_u16(),
                message: extract_api_message(&text),
            });
        }

        let generate_response: GenerateContentResponse = response.json().await?;
        let text = generate_response.text();

        if text.trim().is_empty() {
            return Err(GeminiError::EmptyResponse);
        }

        info!("Model {} returned {} characters", model, text.len());
        Ok(text)
    }

    fn map_transport_error(&self, e: reqwest::Error) -> GeminiError {
        if e.is_connect() {
            GeminiError::Unreachable {
                host: self.base_url.clone(),
            }
        } else if e.is_timeout() {
            GeminiError::Timeout {
                seconds: self.timeout.as_secs(),
            }
        } else {
            GeminiError::Http(e)
        }
    }
}

/// Accept the bare host or a host already carrying the API version.
fn normalize_base_url(base: String) -> String {
    let base = base.trim_end_matches('/').to_string();
    if base.ends_with("/v1beta") || base.ends_with("/v1") {
        base
    } else {
        format!("{}/v1beta", base)
    }
}

/// The API addresses models as `models/<name>`; config values and CLI
/// overrides may carry either form.
fn qualify_model_name(model: &str) -> String {
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{}", model)
    }
}

/// Pull the human-readable message out of an API error body, falling
/// back to the raw body when it is not the documented JSON shape.
fn extract_api_message(body: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(parsed) if !parsed.error.message.is_empty() => parsed.error.message,
        _ => body.chars().take(400).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://generativelanguage.googleapis.com".to_string()),
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(
            normalize_base_url("https://generativelanguage.googleapis.com/v1beta/".to_string()),
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(
            normalize_base_url("http://localhost:8080/v1".to_string()),
            "http://localhost:8080/v1"
        );
    }

    #[test]
    fn test_qualify_model_name() {
        assert_eq!(
            qualify_model_name("gemini-1.5-flash"),
            "models/gemini-1.5-flash"
        );
        assert_eq!(
            qualify_model_name("models/gemini-1.5-pro"),
            "models/gemini-1.5-pro"
        );
    }

    #[test]
    fn test_extract_api_message() {
        let body = r#"{"error": {"code": 404, "message": "model not found"}}"#;
        assert_eq!(extract_api_message(body), "model not found");

        assert_eq!(extract_api_message("plain text"), "plain text");
    }
}
