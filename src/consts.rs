//! Project-wide constants.

use std::time::Duration;

pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

/// Default Gemini model when none is specified.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Instruction placed in front of every article before it is sent to the model.
pub const SUMMARY_PROMPT_PREFIX: &str = "Professionally summarize the following content: ";

/// Column holding the article title.
pub const NAME_COLUMN: &str = "Article Name";

/// Column holding the article body.
pub const CONTENT_COLUMN: &str = "Article Content";

/// Request timeout for both outbound HTTP clients.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

/// Pluralize a count for display (e.g. `1 summary`, `3 summaries`).
pub fn pluralize(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}
