pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

use crate::consts::SUMMARY_PROMPT_PREFIX;

/// Everything that can go wrong while asking the model for a summary.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("no Gemini API key configured (set GEMINI_API_KEY or pass --gemini-api-key)")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("prompt was blocked by the model ({reason})")]
    Blocked { reason: String },

    #[error("Gemini API returned an empty response")]
    EmptyResponse,

    #[error("failed to decode Gemini response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Turns article content into summary text. One call, one remote request.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Model identifier, for display.
    fn model(&self) -> &str;

    async fn summarize(&self, content: &str) -> Result<String, SummarizeError>;
}

/// The instruction prefix followed by the raw article content.
pub fn build_prompt(content: &str) -> String {
    format!("{SUMMARY_PROMPT_PREFIX}{content}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_prefixes_content_verbatim() {
        assert_eq!(
            build_prompt("hello"),
            "Professionally summarize the following content: hello"
        );
    }

    #[test]
    fn prompt_for_empty_content_is_just_prefix() {
        assert_eq!(build_prompt(""), SUMMARY_PROMPT_PREFIX);
    }

    #[test]
    fn api_error_message_includes_status() {
        let err = SummarizeError::Api {
            status: 403,
            message: "API key not valid".to_string(),
        };
        assert_eq!(err.to_string(), "Gemini API error (403): API key not valid");
    }
}
