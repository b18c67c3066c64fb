//! Types for Gemini API requests and responses.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Information about an available model.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(default, rename = "displayName")]
    pub display_name: String,
    #[serde(default, rename = "supportedGenerationMethods")]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    /// Whether the model can serve generateContent calls.
    pub fn supports_generation(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == "generateContent")
    }
}

/// Response from the models listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListModelsResponse {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
}

/// Request body for the generateContent endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Build a single-turn user request from a prompt and JPEG frames.
    pub fn multimodal(prompt: impl Into<String>, jpeg_frames: &[Vec<u8>]) -> Self {
        let mut parts = vec![Part::text(prompt)];
        parts.extend(jpeg_frames.iter().map(|f| Part::jpeg(f)));

        Self {
            contents: vec![Content {
                role: "user".to_string(),
                parts,
            }],
        }
    }
}

/// One conversation turn.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

/// A single content part: text or inline image data.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    Inline {
        #[serde(rename = "inline_data")]
        inline_data: Blob,
    },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    /// Encode raw JPEG bytes as an inline data part.
    pub fn jpeg(bytes: &[u8]) -> Self {
        Part::Inline {
            inline_data: Blob {
                mime_type: "image/jpeg".to_string(),
                data: base64::engine::general_purpose::STANDARD.encode(bytes),
            },
        }
    }
}

/// Base64-encoded media payload.
#[derive(Debug, Clone, Serialize)]
pub struct Blob {
    #[serde(rename = "mime_type")]
    pub mime_type: String,
    /// Base64-encoded bytes.
    pub data: String,
}

/// Response from the generateContent endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts.
    pub fn text(&self) -> String {
        let mut out = String::new();
        if let Some(candidate) = self.candidates.first() {
            if let Some(content) = &candidate.content {
                for part in &content.parts {
                    if let Some(text) = &part.text {
                        out.push_str(text);
                    }
                }
            }
        }
        out
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

/// Error response body from the Gemini API.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_supports_generation() {
        let model = ModelInfo {
            name: "models/gemini-1.5-flash".to_string(),
            display_name: "Gemini 1.5 Flash".to_string(),
            supported_generation_methods: vec![
                "generateContent".to_string(),
                "countTokens".to_string(),
            ],
        };
        assert!(model.supports_generation());

        let embed_only = ModelInfo {
            name: "models/embedding-001".to_string(),
            display_name: String::new(),
            supported_generation_methods: vec!["embedContent".to_string()],
        };
        assert!(!embed_only.supports_generation());
    }

    #[test]
    fn test_list_models_deserialization() {
        let json = r#"{
            "models": [
                {
                    "name": "models/gemini-1.5-flash",
                    "displayName": "Gemini 1.5 Flash",
                    "supportedGenerationMethods": ["generateContent"]
                }
            ]
        }"#;
        let parsed: ListModelsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.models.len(), 1);
        assert!(parsed.models[0].supports_generation());
    }

    #[test]
    fn test_multimodal_request_shape() {
        let frames = vec![vec![0xFF, 0xD8, 0xFF]];
        let request = GenerateContentRequest::multimodal("analyze this", &frames);
        let json = serde_json::to_value(&request).unwrap();

        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "analyze this");
        assert_eq!(parts[1]["inline_data"]["mime_type"], "image/jpeg");
        assert!(parts[1]["inline_data"]["data"].as_str().is_some());
    }

    #[test]
    fn test_response_text_concatenation() {
        let json = r#"{
            "candidates": [
                {
                    "content": {
                        "parts": [
                            {"text": "SCORE: 85\n"},
                            {"text": "ANALYSIS: Solid delivery."}
                        ]
                    }
                }
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.text(), "SCORE: 85\nANALYSIS: Solid delivery.");
    }

    #[test]
    fn test_empty_response_text() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.text(), "");
    }
}
