use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{SummarizeError, Summarizer, build_prompt};
use crate::consts::DEFAULT_MODEL;

const API_BASE: &str = "https://generativelanguage.googleapis.com";

/// A summarizer backed by the Gemini `generateContent` endpoint.
pub struct GeminiSummarizer {
    model: String,
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiSummarizer {
    /// A missing key is not an error here; every call then fails with
    /// [`SummarizeError::MissingApiKey`].
    pub fn new(
        api_key: Option<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> Result<Self, SummarizeError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: api_key.filter(|k| !k.is_empty()),
            base_url: API_BASE.to_string(),
            client,
        })
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn build_request(prompt: &str) -> GenerateRequest<'_> {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        }
    }

    fn parse_response(body: &str) -> Result<String, SummarizeError> {
        let resp: GenerateResponse = serde_json::from_str(body)?;

        if let Some(reason) = resp.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(SummarizeError::Blocked { reason });
        }

        let text: String = resp
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(SummarizeError::EmptyResponse);
        }
        Ok(text)
    }

    /// Prefer the API's own `error.message`; fall back to the raw body.
    fn parse_error(status: u16, body: &str) -> SummarizeError {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|e| e.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        SummarizeError::Api { status, message }
    }
}

#[async_trait]
impl Summarizer for GeminiSummarizer {
    fn model(&self) -> &str {
        &self.model
    }

    async fn summarize(&self, content: &str) -> Result<String, SummarizeError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(SummarizeError::MissingApiKey)?;

        let prompt = build_prompt(content);
        let body = Self::build_request(&prompt);

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "requesting summary");

        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(Self::parse_error(status.as_u16(), &text));
        }

        Self::parse_response(&text)
    }
}

// --- API types ---

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}
