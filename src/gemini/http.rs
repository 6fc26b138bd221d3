//! Blocking HTTP client for the Gemini generateContent API.
//!
//! Wire shapes follow the v1beta REST API:
//!
//! ```text
//! POST {base}/models/{model}:generateContent?key={key}
//! {"contents": [{"parts": [{"text": "..."}]}]}
//! ```
//!
//! The response text lives at `candidates[0].content.parts[0].text`.
//! `list_models` (GET `{base}/models?key={key}`) exists for the `doctor`
//! command and, unlike `generate`, returns a real `Result` because it is
//! operator-facing rather than a pipeline stage.

use super::{API_ERROR_PREFIX, TextGenerator};
use crate::config::Config;
use crate::error::{Result, SparkError};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

/// One entry from the models listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    /// Fully qualified model name (e.g., "models/gemini-1.5-flash").
    pub name: String,

    /// Generation methods this model supports.
    #[serde(default, rename = "supportedGenerationMethods")]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    /// Whether this model can serve `generateContent` calls.
    pub fn supports_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == "generateContent")
    }
}

/// Blocking Gemini API client.
///
/// One client is built per invocation and reused for every call in the
/// session. All requests carry the configured timeout.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Build a client from the loaded config and a caller-supplied key.
    pub fn new(config: &Config, api_key: String) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SparkError::ApiError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key,
            model: config.model.clone(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    fn models_url(&self) -> String {
        format!("{}/models?key={}", self.base_url, self.api_key)
    }

    /// List models available to the configured key.
    pub fn list_models(&self) -> Result<Vec<ModelInfo>> {
        let resp: ListModelsResponse = self
            .http
            .get(self.models_url())
            .send()
            .map_err(|e| SparkError::ApiError(e.without_url().to_string()))?
            .error_for_status()
            .map_err(|e| SparkError::ApiError(e.without_url().to_string()))?
            .json()
            .map_err(|e| SparkError::ApiError(e.without_url().to_string()))?;

        Ok(resp.models)
    }

    // Errors are stripped of the request URL before display; the URL
    // carries the API key as a query parameter.
    fn try_generate(&self, prompt: &str) -> std::result::Result<String, String> {
        let req = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let resp = self
            .http
            .post(self.generate_url())
            .json(&req)
            .send()
            .map_err(|e| e.without_url().to_string())?
            .error_for_status()
            .map_err(|e| e.without_url().to_string())?
            .json::<GenerateContentResponse>()
            .map_err(|e| e.without_url().to_string())?;

        extract_text(resp).ok_or_else(|| "response contained no generated text".to_string())
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> String {
        match self.try_generate(prompt) {
            Ok(text) => text,
            Err(cause) => format!("{}{}", API_ERROR_PREFIX, cause),
        }
    }
}

/// Pull the first candidate's first text part out of a response body.
fn extract_text(resp: GenerateContentResponse) -> Option<String> {
    resp.candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()
        .map(|p| p.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_matches_wire_format() {
        let req = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hello".to_string(),
                }],
            }],
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]})
        );
    }

    #[test]
    fn extract_text_from_well_formed_response() {
        let body = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "a writing prompt"}], "role": "model"}}
            ]
        }"#;
        let resp: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(extract_text(resp), Some("a writing prompt".to_string()));
    }

    #[test]
    fn extract_text_handles_missing_candidates() {
        let resp: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(extract_text(resp), None);
    }

    #[test]
    fn extract_text_handles_empty_parts() {
        let body = r#"{"candidates": [{"content": {"parts": []}}]}"#;
        let resp: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(extract_text(resp), None);
    }

    #[test]
    fn model_info_reports_generation_support() {
        let body = r#"{
            "models": [
                {"name": "models/gemini-1.5-flash",
                 "supportedGenerationMethods": ["generateContent", "countTokens"]},
                {"name": "models/embedding-001",
                 "supportedGenerationMethods": ["embedContent"]}
            ]
        }"#;
        let resp: ListModelsResponse = serde_json::from_str(body).unwrap();
        assert!(resp.models[0].supports_generate_content());
        assert!(!resp.models[1].supports_generate_content());
    }

    #[test]
    fn client_urls_include_model_and_key() {
        let config = Config::default();
        let client = GeminiClient::new(&config, "test-key".to_string()).unwrap();

        assert_eq!(
            client.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent?key=test-key"
        );
        assert_eq!(
            client.models_url(),
            "https://generativelanguage.googleapis.com/v1beta/models?key=test-key"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_normalized() {
        let config = Config {
            api_base_url: "https://example.test/v1beta/".to_string(),
            ..Config::default()
        };
        let client = GeminiClient::new(&config, "k".to_string()).unwrap();
        assert_eq!(
            client.generate_url(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent?key=k"
        );
    }
}
