//! In-memory summaries for the current session.

/// One generated summary, kept in the order it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRecord {
    pub article_name: String,
    pub summary_text: String,
}

impl SummaryRecord {
    pub fn new(article_name: impl Into<String>, summary_text: impl Into<String>) -> Self {
        Self {
            article_name: article_name.into(),
            summary_text: summary_text.into(),
        }
    }
}

/// The ordered list of summaries. Lives as long as the process.
#[derive(Debug, Default)]
pub struct SessionStore {
    records: Vec<SummaryRecord>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: SummaryRecord) {
        self.records.push(record);
    }

    /// Drop every record. Clearing an empty store is a no-op.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[SummaryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The text forwarded to the messaging bot: every record as
    /// `Article: ..\n\nSummary: ..`, separated by a blank line.
    pub fn digest(&self) -> String {
        self.records
            .iter()
            .map(|r| format!("Article: {}\n\nSummary: {}", r.article_name, r.summary_text))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
