//! Static process configuration.
//!
//! Read once at startup from flags, falling back to environment variables.
//! Missing credentials do not stop the REPL from starting; the action that
//! needs them reports the problem instead.

use std::fmt;
use std::time::Duration;

use clap::Args;

use crate::consts::{DEFAULT_TIMEOUT, GEMINI_API_KEY_ENV, TELEGRAM_CHAT_ID_ENV, TELEGRAM_TOKEN_ENV};
use crate::notifier::NotifyError;
use crate::notifier::telegram::TelegramNotifier;
use crate::summarizer::SummarizeError;
use crate::summarizer::gemini::GeminiSummarizer;

#[derive(Args, Clone, Default)]
pub struct Settings {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_TOKEN", hide_env_values = true)]
    pub telegram_token: Option<String>,

    /// Telegram chat that receives the summaries
    #[arg(long, env = "TELEGRAM_CHAT_ID", allow_hyphen_values = true)]
    pub telegram_chat_id: Option<String>,

    /// Gemini model name
    #[arg(short, long, env = "TRUEVISION_MODEL")]
    pub model: Option<String>,

    /// Timeout for each outbound request, in seconds
    #[arg(
        long = "timeout",
        env = "TRUEVISION_TIMEOUT_SECS",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: Option<u64>,
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        self.timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub fn has_gemini_key(&self) -> bool {
        self.gemini_api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    pub fn has_telegram(&self) -> bool {
        self.telegram_token.as_deref().is_some_and(|t| !t.is_empty())
            && self.telegram_chat_id.as_deref().is_some_and(|c| !c.is_empty())
    }

    /// Banner line for the Gemini credentials.
    pub fn gemini_status(&self) -> String {
        if self.has_gemini_key() {
            "API key ✓".to_string()
        } else {
            format!("not configured (set {GEMINI_API_KEY_ENV})")
        }
    }

    /// Banner line for the Telegram destination.
    pub fn telegram_status(&self) -> String {
        match (self.has_telegram(), self.telegram_chat_id.as_deref()) {
            (true, Some(chat)) => format!("chat {chat} ✓"),
            _ => format!("not configured (set {TELEGRAM_TOKEN_ENV} and {TELEGRAM_CHAT_ID_ENV})"),
        }
    }

    pub fn summarizer(&self) -> Result<GeminiSummarizer, SummarizeError> {
        GeminiSummarizer::new(
            self.gemini_api_key.clone(),
            self.model.clone(),
            self.timeout(),
        )
    }

    pub fn notifier(&self) -> Result<TelegramNotifier, NotifyError> {
        TelegramNotifier::new(
            self.telegram_token.clone(),
            self.telegram_chat_id.clone(),
            self.timeout(),
        )
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
        f.debug_struct("Settings")
            .field("gemini_api_key", &redact(&self.gemini_api_key))
            .field("telegram_token", &redact(&self.telegram_token))
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("model", &self.model)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
