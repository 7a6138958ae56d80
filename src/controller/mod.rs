//! The user-facing actions: load a CSV, pick a row, summarize it, send
//! everything to the messaging bot, clear.
//!
//! [`Controller`] owns all session state. Actions take `&mut self`, so only
//! one of them can run at a time and nothing else can touch the store.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::dataset::{Dataset, DatasetError};
use crate::notifier::{NotifyError, Notifier};
use crate::session::{SessionStore, SummaryRecord};
use crate::summarizer::Summarizer;

/// Where the interaction currently is. Only user actions move it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing loaded, or the last load was rejected.
    Idle,
    /// A CSV is loaded; the default row (0) is implied.
    Uploaded,
    /// The user picked a row explicitly.
    RowSelected,
    /// A summary request is in flight.
    Summarizing,
    /// A send is in flight.
    Notifying,
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("no CSV loaded (use /load <path>)")]
    NoDataset,

    #[error("the loaded CSV has no articles")]
    NoRows,

    #[error("index {index} is out of range (available: 0 to {})", .rows - 1)]
    IndexOutOfRange { index: usize, rows: usize },

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("there are no summaries to send")]
    NothingToSend,

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub rows: usize,
}

/// The record a summarize action stored, and whether the model produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    Summary(SummaryRecord),
    /// The request failed; the stored text is the failure message.
    Failed {
        record: SummaryRecord,
        reason: String,
    },
}

impl Generated {
    pub fn record(&self) -> &SummaryRecord {
        match self {
            Self::Summary(record) | Self::Failed { record, .. } => record,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

pub struct Controller {
    summarizer: Arc<dyn Summarizer>,
    notifier: Arc<dyn Notifier>,
    dataset: Option<Dataset>,
    selected: Option<usize>,
    store: SessionStore,
    phase: Phase,
}

impl Controller {
    pub fn new(summarizer: Arc<dyn Summarizer>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            summarizer,
            notifier,
            dataset: None,
            selected: None,
            store: SessionStore::new(),
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// The row the next summary will be generated for. Defaults to 0.
    pub fn selected(&self) -> Option<usize> {
        let dataset = self.dataset.as_ref()?;
        if dataset.is_empty() {
            return None;
        }
        Some(self.selected.unwrap_or(0))
    }

    pub fn summaries(&self) -> &[SummaryRecord] {
        self.store.records()
    }

    pub fn model(&self) -> &str {
        self.summarizer.model()
    }

    pub fn destination(&self) -> &str {
        self.notifier.destination()
    }

    /// Load a CSV file, replacing the current dataset.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<LoadReport, ControllerError> {
        let result = Dataset::from_path(path);
        self.accept(result)
    }

    /// Load CSV data from a reader, replacing the current dataset.
    pub fn load_reader<R: Read>(&mut self, reader: R) -> Result<LoadReport, ControllerError> {
        let result = Dataset::from_reader(reader);
        self.accept(result)
    }

    /// A rejected load leaves nothing selectable. Summaries are never touched.
    fn accept(&mut self, result: Result<Dataset, DatasetError>) -> Result<LoadReport, ControllerError> {
        self.selected = None;
        match result {
            Ok(dataset) => {
                let rows = dataset.len();
                self.dataset = Some(dataset);
                self.set_phase(Phase::Uploaded);
                tracing::info!(rows, "csv loaded");
                Ok(LoadReport { rows })
            }
            Err(e) => {
                self.dataset = None;
                self.set_phase(Phase::Idle);
                tracing::warn!(error = %e, "csv rejected");
                Err(e.into())
            }
        }
    }

    /// Pick the row the next summary is generated for.
    pub fn select(&mut self, index: usize) -> Result<(), ControllerError> {
        self.check_index(index)?;
        self.selected = Some(index);
        self.set_phase(Phase::RowSelected);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), ControllerError> {
        let dataset = self.dataset.as_ref().ok_or(ControllerError::NoDataset)?;
        let rows = dataset.len();
        if rows == 0 {
            return Err(ControllerError::NoRows);
        }
        if index >= rows {
            return Err(ControllerError::IndexOutOfRange { index, rows });
        }
        Ok(())
    }

    /// Select `index`, then summarize it.
    pub async fn generate_summary_for(&mut self, index: usize) -> Result<Generated, ControllerError> {
        self.select(index)?;
        self.generate_summary().await
    }

    /// Summarize the selected row and append exactly one record.
    ///
    /// A failed request is not an error here: its message is stored as the
    /// summary text and reported through [`Generated::Failed`].
    pub async fn generate_summary(&mut self) -> Result<Generated, ControllerError> {
        let index = match self.selected() {
            Some(i) => i,
            None if self.dataset.is_none() => return Err(ControllerError::NoDataset),
            None => return Err(ControllerError::NoRows),
        };
        self.check_index(index)?;
        let row = self
            .dataset
            .as_ref()
            .and_then(|d| d.row(index))
            .ok_or(ControllerError::NoDataset)?;

        self.selected = Some(index);
        let summarizer = Arc::clone(&self.summarizer);
        let result = {
            let _phase = PhaseGuard::enter(&mut self.phase, Phase::Summarizing, Phase::RowSelected);
            summarizer.summarize(&row.content).await
        };

        let generated = match result {
            Ok(text) => Generated::Summary(SummaryRecord::new(row.name, text)),
            Err(e) => {
                tracing::warn!(index, article = %row.name, error = %e, "summary generation failed");
                Generated::Failed {
                    record: SummaryRecord::new(row.name, format!("Summary generation failed: {e}")),
                    reason: e.to_string(),
                }
            }
        };

        self.store.append(generated.record().clone());
        Ok(generated)
    }

    /// Send every stored summary as one message. All or nothing.
    pub async fn send_all(&mut self) -> Result<(), ControllerError> {
        if self.store.is_empty() {
            return Err(ControllerError::NothingToSend);
        }
        let text = self.store.digest();

        let previous = self.phase;
        let notifier = Arc::clone(&self.notifier);
        let result = {
            let _phase = PhaseGuard::enter(&mut self.phase, Phase::Notifying, previous);
            notifier.notify(&text).await
        };

        match result {
            Ok(()) => {
                tracing::info!(
                    summaries = self.store.len(),
                    destination = self.notifier.destination(),
                    "summaries sent"
                );
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "send failed");
                Err(e.into())
            }
        }
    }

    /// Drop all stored summaries. Safe to call on an empty store.
    pub fn clear(&mut self) {
        self.store.clear();
        if self.dataset.is_some() {
            self.set_phase(Phase::Uploaded);
        }
    }

    fn set_phase(&mut self, next: Phase) {
        transition(&mut self.phase, next);
    }
}

fn transition(phase: &mut Phase, next: Phase) {
    if *phase != next {
        tracing::debug!(from = ?*phase, to = ?next, "phase change");
        *phase = next;
    }
}

/// Holds an in-flight phase for the lifetime of a remote call.
///
/// The exit phase is restored on drop, so an abandoned call (Ctrl+C drops
/// the future) does not leave the controller stuck mid-action.
struct PhaseGuard<'a> {
    phase: &'a mut Phase,
    exit: Phase,
}

impl<'a> PhaseGuard<'a> {
    fn enter(phase: &'a mut Phase, during: Phase, exit: Phase) -> Self {
        transition(phase, during);
        Self { phase, exit }
    }
}

impl Drop for PhaseGuard<'_> {
    fn drop(&mut self) {
        transition(self.phase, self.exit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::notifier::mock::RecordingNotifier;
    use crate::summarizer::SummarizeError;
    use crate::summarizer::mock::MockSummarizer;

    const TWO_ROWS: &str = "Article Name,Article Content\nX,hello\nY,world\n";

    /// Remote calls that never answer.
    struct Stalled;

    #[async_trait]
    impl Summarizer for Stalled {
        fn model(&self) -> &str {
            "stalled"
        }

        async fn summarize(&self, _content: &str) -> Result<String, SummarizeError> {
            std::future::pending().await
        }
    }

    #[async_trait]
    impl Notifier for Stalled {
        fn destination(&self) -> &str {
            "stalled"
        }

        async fn notify(&self, _text: &str) -> Result<(), NotifyError> {
            std::future::pending().await
        }
    }

    fn controller() -> Controller {
        Controller::new(
            Arc::new(MockSummarizer::echo()),
            Arc::new(RecordingNotifier::new()),
        )
    }

    #[test]
    fn starts_idle_and_empty() {
        let c = controller();
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.summaries().is_empty());
        assert!(c.selected().is_none());
    }

    #[test]
    fn load_defaults_selection_to_zero() {
        let mut c = controller();
        let report = c.load_reader(TWO_ROWS.as_bytes()).unwrap();
        assert_eq!(report.rows, 2);
        assert_eq!(c.phase(), Phase::Uploaded);
        assert_eq!(c.selected(), Some(0));
    }

    #[test]
    fn select_moves_to_row_selected() {
        let mut c = controller();
        c.load_reader(TWO_ROWS.as_bytes()).unwrap();
        c.select(1).unwrap();
        assert_eq!(c.phase(), Phase::RowSelected);
        assert_eq!(c.selected(), Some(1));
    }

    #[test]
    fn select_out_of_range_keeps_previous() {
        let mut c = controller();
        c.load_reader(TWO_ROWS.as_bytes()).unwrap();
        c.select(1).unwrap();
        let err = c.select(2).unwrap_err();
        assert!(matches!(err, ControllerError::IndexOutOfRange { index: 2, rows: 2 }));
        assert_eq!(err.to_string(), "index 2 is out of range (available: 0 to 1)");
        assert_eq!(c.selected(), Some(1));
    }

    #[test]
    fn select_without_dataset() {
        let mut c = controller();
        assert!(matches!(c.select(0), Err(ControllerError::NoDataset)));
    }

    #[test]
    fn rejected_load_drops_dataset() {
        let mut c = controller();
        c.load_reader(TWO_ROWS.as_bytes()).unwrap();
        assert!(c.load_reader("Title,Body\na,b\n".as_bytes()).is_err());
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.dataset().is_none());
        assert!(matches!(c.select(0), Err(ControllerError::NoDataset)));
    }

    #[tokio::test]
    async fn header_only_csv_refuses_summaries() {
        let mut c = controller();
        let report = c.load_reader("Article Name,Article Content\n".as_bytes()).unwrap();
        assert_eq!(report.rows, 0);
        assert_eq!(c.phase(), Phase::Uploaded);
        assert!(c.selected().is_none());
        assert!(matches!(c.select(0), Err(ControllerError::NoRows)));
        assert!(matches!(
            c.generate_summary().await,
            Err(ControllerError::NoRows)
        ));
        assert!(c.summaries().is_empty());
    }

    #[tokio::test]
    async fn generate_without_dataset() {
        let mut c = controller();
        assert!(matches!(
            c.generate_summary().await,
            Err(ControllerError::NoDataset)
        ));
    }

    #[tokio::test]
    async fn generate_uses_default_row() {
        let mut c = controller();
        c.load_reader(TWO_ROWS.as_bytes()).unwrap();
        let generated = c.generate_summary().await.unwrap();
        assert!(!generated.is_failure());
        assert_eq!(generated.record().article_name, "X");
        assert_eq!(generated.record().summary_text, "summary of: hello");
        assert_eq!(c.phase(), Phase::RowSelected);
    }

    #[tokio::test]
    async fn failed_summary_is_stored_as_text() {
        let mut c = Controller::new(
            Arc::new(MockSummarizer::failing("quota exceeded")),
            Arc::new(RecordingNotifier::new()),
        );
        c.load_reader(TWO_ROWS.as_bytes()).unwrap();
        let generated = c.generate_summary_for(1).await.unwrap();
        match &generated {
            Generated::Failed { record, reason } => {
                assert_eq!(record.article_name, "Y");
                assert!(record.summary_text.starts_with("Summary generation failed: "));
                assert!(record.summary_text.contains("quota exceeded"));
                assert!(reason.contains("quota exceeded"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert_eq!(c.summaries().len(), 1);
    }

    #[tokio::test]
    async fn send_with_empty_store_is_refused() {
        let notifier = Arc::new(RecordingNotifier::new());
        let mut c = Controller::new(Arc::new(MockSummarizer::echo()), notifier.clone());
        assert!(matches!(c.send_all().await, Err(ControllerError::NothingToSend)));
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn send_restores_phase() {
        let mut c = controller();
        c.load_reader(TWO_ROWS.as_bytes()).unwrap();
        c.generate_summary().await.unwrap();
        c.send_all().await.unwrap();
        assert_eq!(c.phase(), Phase::RowSelected);
    }

    #[tokio::test]
    async fn rejected_send_keeps_summaries() {
        let mut c = Controller::new(
            Arc::new(MockSummarizer::echo()),
            Arc::new(RecordingNotifier::rejecting(400, "Bad Request: chat not found")),
        );
        c.load_reader(TWO_ROWS.as_bytes()).unwrap();
        c.generate_summary().await.unwrap();
        let err = c.send_all().await.unwrap_err();
        assert!(matches!(err, ControllerError::Notify(ref e) if e.is_api_error()));
        assert_eq!(c.summaries().len(), 1);
    }

    #[tokio::test]
    async fn clear_returns_to_uploaded() {
        let mut c = controller();
        c.load_reader(TWO_ROWS.as_bytes()).unwrap();
        c.generate_summary_for(1).await.unwrap();
        c.clear();
        assert!(c.summaries().is_empty());
        assert_eq!(c.phase(), Phase::Uploaded);
    }

    #[test]
    fn clear_without_dataset_stays_idle() {
        let mut c = controller();
        c.clear();
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn abandoned_summary_restores_phase() {
        let mut c = Controller::new(Arc::new(Stalled), Arc::new(RecordingNotifier::new()));
        c.load_reader(TWO_ROWS.as_bytes()).unwrap();

        let timed_out = tokio::time::timeout(Duration::from_millis(50), c.generate_summary()).await;
        assert!(timed_out.is_err());
        assert_eq!(c.phase(), Phase::RowSelected);
        assert!(c.summaries().is_empty());
    }

    #[tokio::test]
    async fn abandoned_send_restores_phase() {
        let mut c = Controller::new(Arc::new(MockSummarizer::echo()), Arc::new(Stalled));
        c.load_reader(TWO_ROWS.as_bytes()).unwrap();
        c.generate_summary().await.unwrap();

        for _ in 0..2 {
            let timed_out = tokio::time::timeout(Duration::from_millis(50), c.send_all()).await;
            assert!(timed_out.is_err());
            assert_eq!(c.phase(), Phase::RowSelected);
        }
        assert_eq!(c.summaries().len(), 1);
    }
}
