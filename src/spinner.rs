//! A minimal terminal spinner shown while a remote call is in flight.

use std::future::Future;
use std::io::{IsTerminal, Write};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Braille spinner frames.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Frame interval.
const INTERVAL: Duration = Duration::from_millis(80);

pub const SUMMARIZING: &str = "Generating AI summary... please wait";
pub const SENDING: &str = "Sending summaries to Telegram...";

/// A terminal spinner that runs in a background task.
///
/// It writes to stderr so rendered summaries on stdout stay clean, and
/// draws nothing at all when stderr is not a terminal.
pub struct Spinner {
    handle: Option<JoinHandle<()>>,
    cancel: tokio::sync::watch::Sender<bool>,
}

impl Spinner {
    /// Start a spinner with the given message.
    pub fn start(message: &str) -> Self {
        let (cancel_tx, mut cancel_rx) = tokio::sync::watch::channel(false);

        if !std::io::stderr().is_terminal() {
            return Self {
                handle: None,
                cancel: cancel_tx,
            };
        }

        let message = message.to_string();
        let handle = tokio::spawn(async move {
            let mut i = 0;
            loop {
                let frame = FRAMES[i % FRAMES.len()];
                // \r moves to start of line, \x1b[2K clears the line
                eprint!("\x1b[2K\r{frame} {message}");
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = cancel_rx.changed() => break,
                }
                i += 1;
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            handle: Some(handle),
            cancel: cancel_tx,
        }
    }

    /// Stop the spinner and clear its line.
    pub async fn stop(self) {
        let _ = self.cancel.send(true);
        if let Some(handle) = self.handle {
            let _ = handle.await;
        }
    }

    /// Show a spinner for exactly as long as `fut` takes.
    pub async fn during<F: Future>(message: &str, fut: F) -> F::Output {
        let spinner = Self::start(message);
        let out = fut.await;
        spinner.stop().await;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_single_braille_chars() {
        assert!(!FRAMES.is_empty());
        for frame in FRAMES {
            assert_eq!(frame.chars().count(), 1);
        }
    }

    #[tokio::test]
    async fn spinner_starts_and_stops_without_panic() {
        let spinner = Spinner::start("testing");
        tokio::time::sleep(Duration::from_millis(200)).await;
        spinner.stop().await;
    }

    #[tokio::test]
    async fn spinner_immediate_stop() {
        Spinner::start("quick").stop().await;
    }

    #[tokio::test]
    async fn during_returns_future_output() {
        let out = Spinner::during(SUMMARIZING, async { 41 + 1 }).await;
        assert_eq!(out, 42);
    }
}
