use anyhow::{Context, Result};
use async_trait::async_trait;
use fitness_coach::models::{DailyPlan, User};
use fitness_coach::prompt::build_prompt;
use fitness_coach::{CoachError, PlanGenerator};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{Config, GeminiConfig};

mod error;

pub use error::ApiError;

/// Gemini generateContent request payload
#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

/// Gemini generateContent response
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Client for the Gemini text generation API
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.api_key().ok_or(ApiError::MissingApiKey)?;
        Self::with_api_key(&config.gemini, api_key)
    }

    /// Create a client with an explicit API key
    pub fn with_api_key(config: &GeminiConfig, api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a single-turn prompt and return the first candidate's text
    pub async fn generate_text(&self, prompt: &str) -> Result<String, ApiError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let request = GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        };

        tracing::debug!(model = %self.model, "Requesting plan from Gemini");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "Gemini request failed");
            return Err(ApiError::from_status(status, error_text));
        }

        let body: GenerateResponse = response.json().await?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .unwrap_or_default();

        tracing::debug!(chars = text.len(), "Received plan text");
        Ok(text)
    }
}

#[async_trait]
impl PlanGenerator for GeminiClient {
    async fn generate(&self, user: &User, history: &[DailyPlan]) -> fitness_coach::Result<String> {
        let prompt = build_prompt(user, history);

        self.generate_text(&prompt).await.map_err(|e| {
            tracing::error!("Plan generation failed: {}", e);
            CoachError::Generation(e.to_string())
        })
    }
}
