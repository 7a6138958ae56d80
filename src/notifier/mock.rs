use std::sync::Mutex;

use async_trait::async_trait;

use super::{NotifyError, Notifier};

/// A notifier for tests that keeps every message it is asked to send.
pub struct RecordingNotifier {
    sent: Mutex<Vec<String>>,
    reject: Option<(i64, String)>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject: None,
        }
    }

    /// Refuse every message as the Bot API would, with `code` and `description`.
    pub fn rejecting(code: i64, description: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            reject: Some((code, description.to_string())),
        }
    }

    /// Messages delivered so far. Rejected messages are not recorded.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }
}

impl Default for RecordingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn destination(&self) -> &str {
        "recorder"
    }

    async fn notify(&self, text: &str) -> Result<(), NotifyError> {
        if let Some((code, description)) = &self.reject {
            return Err(NotifyError::Telegram {
                code: Some(*code),
                description: description.clone(),
                retry_after: None,
            });
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
