use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use serde_json::json;

use crate::{
    advisory::{AdvisoryClient, AdvisoryError},
    config::AdvisoryConfig,
};

/// Error body returned by the Generative Language API.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: Option<u16>,
    message: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated.
    fn text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

/// Non-streaming `generateContent` client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key_env: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Creates a client, reading the API key from the configured variable.
    pub fn new(config: &AdvisoryConfig) -> anyhow::Result<Self> {
        Self::with_api_key(config, config.api_key())
    }

    pub fn with_api_key(config: &AdvisoryConfig, api_key: Option<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        if api_key.is_none() {
            tracing::warn!(var = %config.api_key_env, "no advisory API key configured");
        }
        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key_env: config.api_key_env.clone(),
            api_key,
        })
    }

    fn url(&self) -> String {
        format!("{}/{}:generateContent", self.endpoint, self.model)
    }

    async fn generate(&self, prompt: &str) -> Result<String, AdvisoryError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AdvisoryError::MissingApiKey(self.api_key_env.clone()))?;

        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }]
        });
        tracing::debug!(model = %self.model, "sending generateContent request");
        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&error_text) {
                return Err(AdvisoryError::Api {
                    status: error_response.error.code.unwrap_or(status.as_u16()),
                    message: error_response.error.message,
                });
            }
            return Err(AdvisoryError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        Ok(parsed.text())
    }
}

impl AdvisoryClient for GeminiClient {
    fn complete(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, AdvisoryError>> + Send {
        self.generate(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_text_joins_parts_of_first_candidate() {
        let parsed: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Hello " }, { "text": "there" }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        }))
        .unwrap();
        assert_eq!(parsed.text(), "Hello there");
    }

    #[test]
    fn response_without_candidates_is_empty() {
        let parsed: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(parsed.text(), "");
    }

    #[tokio::test]
    async fn missing_key_fails_without_request() {
        let config = AdvisoryConfig {
            endpoint: "http://127.0.0.1:9".into(),
            ..Default::default()
        };
        let client = GeminiClient::with_api_key(&config, None).unwrap();
        let err = client.complete("prompt").await.unwrap_err();
        assert!(matches!(err, AdvisoryError::MissingApiKey(var) if var == "GEMINI_API_KEY"));
    }
}
