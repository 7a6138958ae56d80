use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{SummarizeError, Summarizer, build_prompt};

/// A scripted summarizer for tests.
///
/// Scripted replies are returned in order; once they run out it falls back
/// to answering `summary of: <content>` (or failing, for [`MockSummarizer::failing`]).
/// Every prompt it receives is recorded.
pub struct MockSummarizer {
    replies: Mutex<VecDeque<Result<String, String>>>,
    fail_with: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockSummarizer {
    /// Always succeeds with `summary of: <content>`.
    pub fn echo() -> Self {
        Self::scripted(Vec::new())
    }

    /// `Err(message)` replies surface as a 500 API error carrying `message`.
    pub fn scripted(replies: Vec<Result<String, String>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            fail_with: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Fails every call with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::echo()
        }
    }

    /// Full prompts sent so far, prefix included.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    fn model(&self) -> &str {
        "mock"
    }

    async fn summarize(&self, content: &str) -> Result<String, SummarizeError> {
        self.prompts.lock().unwrap().push(build_prompt(content));
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .or_else(|| self.fail_with.clone().map(Err));
        match reply {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(SummarizeError::Api {
                status: 500,
                message,
            }),
            None => Ok(format!("summary of: {content}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echo_reflects_content() {
        let mock = MockSummarizer::echo();
        assert_eq!(mock.summarize("hello").await.unwrap(), "summary of: hello");
        assert_eq!(
            mock.prompts(),
            vec!["Professionally summarize the following content: hello".to_string()]
        );
    }

    #[tokio::test]
    async fn scripted_then_echo() {
        let mock = MockSummarizer::scripted(vec![Ok("first".to_string()), Err("boom".to_string())]);
        assert_eq!(mock.summarize("a").await.unwrap(), "first");
        assert!(mock.summarize("b").await.unwrap_err().to_string().contains("boom"));
        assert_eq!(mock.summarize("c").await.unwrap(), "summary of: c");
        assert_eq!(mock.prompts().len(), 3);
    }

    #[tokio::test]
    async fn failing_never_recovers() {
        let mock = MockSummarizer::failing("quota exceeded");
        for _ in 0..3 {
            let err = mock.summarize("x").await.unwrap_err();
            assert_eq!(err.to_string(), "Gemini API error (500): quota exceeded");
        }
    }
}
