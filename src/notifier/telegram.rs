use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{NotifyError, Notifier};

const API_BASE: &str = "https://api.telegram.org";

/// Sends messages through the Telegram Bot API `sendMessage` method.
pub struct TelegramNotifier {
    token: Option<String>,
    chat_id: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl TelegramNotifier {
    /// Both settings are optional at construction so the REPL can start
    /// without them; sending then fails with [`NotifyError::NotConfigured`].
    pub fn new(
        token: Option<String>,
        chat_id: Option<String>,
        timeout: Duration,
    ) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            token: token.filter(|t| !t.is_empty()),
            chat_id: chat_id.filter(|c| !c.is_empty()),
            base_url: API_BASE.to_string(),
            client,
        })
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, token: &str) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, token)
    }

    /// Map a Bot API reply onto `Ok` or the matching error.
    fn parse_response(status: u16, body: &str) -> Result<(), NotifyError> {
        let resp: BotResponse = match serde_json::from_str(body) {
            Ok(resp) => resp,
            // Non-JSON error bodies come from proxies in front of the API
            Err(_) if !(200..300).contains(&status) => {
                return Err(NotifyError::Telegram {
                    code: Some(i64::from(status)),
                    description: body.trim().to_string(),
                    retry_after: None,
                });
            }
            Err(e) => return Err(NotifyError::Decode(e)),
        };

        if resp.ok {
            return Ok(());
        }

        Err(NotifyError::Telegram {
            code: resp.error_code.or(Some(i64::from(status))),
            description: resp
                .description
                .unwrap_or_else(|| format!("request rejected with status {status}")),
            retry_after: resp.parameters.and_then(|p| p.retry_after),
        })
    }
}

impl fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("chat_id", &self.chat_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn destination(&self) -> &str {
        self.chat_id.as_deref().unwrap_or("not configured")
    }

    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        let (Some(token), Some(chat_id)) = (self.token.as_deref(), self.chat_id.as_deref()) else {
            return Err(NotifyError::NotConfigured);
        };

        tracing::debug!(chat_id, len = text.len(), "sending telegram message");

        let resp = self
            .client
            .post(self.endpoint(token))
            .json(&SendMessage { chat_id, text })
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(transport)?;
        Self::parse_response(status, &body)
    }
}

/// The request URL carries the bot token, so it is dropped from the error.
fn transport(e: reqwest::Error) -> NotifyError {
    NotifyError::Http(e.without_url())
}

// --- API types ---

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct BotResponse {
    ok: bool,
    description: Option<String>,
    error_code: Option<i64>,
    parameters: Option<ResponseParameters>,
}

#[derive(Deserialize)]
struct ResponseParameters {
    retry_after: Option<u64>,
}
