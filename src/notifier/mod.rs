pub mod mock;
pub mod telegram;

use async_trait::async_trait;
use thiserror::Error;

/// Why a message did not reach its destination.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Telegram is not configured (set TELEGRAM_TOKEN and TELEGRAM_CHAT_ID)")]
    NotConfigured,

    /// Rejected by the Bot API itself: bad token, unknown chat, rate limit.
    #[error(
        "{description}{}",
        .retry_after.map(|s| format!(" (retry after {s}s)")).unwrap_or_default()
    )]
    Telegram {
        code: Option<i64>,
        description: String,
        retry_after: Option<u64>,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode Telegram response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NotifyError {
    /// True when the messaging API answered and refused the message.
    pub fn is_api_error(&self) -> bool {
        matches!(self, Self::Telegram { .. })
    }
}

/// Delivers one text message to one fixed destination.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Human-readable destination, for display.
    fn destination(&self) -> &str;

    async fn notify(&self, text: &str) -> Result<(), NotifyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telegram_error_shows_description() {
        let err = NotifyError::Telegram {
            code: Some(401),
            description: "Unauthorized".to_string(),
            retry_after: None,
        };
        assert_eq!(err.to_string(), "Unauthorized");
        assert!(err.is_api_error());
    }

    #[test]
    fn rate_limit_mentions_retry_after() {
        let err = NotifyError::Telegram {
            code: Some(429),
            description: "Too Many Requests: retry after 7".to_string(),
            retry_after: Some(7),
        };
        assert_eq!(
            err.to_string(),
            "Too Many Requests: retry after 7 (retry after 7s)"
        );
    }

    #[test]
    fn not_configured_is_not_an_api_error() {
        assert!(!NotifyError::NotConfigured.is_api_error());
    }
}
