//! Text rendering for the REPL: the summaries list and action messages.

use crate::dataset::Dataset;
use crate::notifier::NotifyError;
use crate::session::SummaryRecord;

pub const SEND_SUCCESS: &str = "Summary sent successfully to Telegram!";

/// The "Generated Summaries" list, in insertion order.
pub fn summaries(records: &[SummaryRecord]) -> String {
    if records.is_empty() {
        return "  no summaries yet\n".to_string();
    }

    let mut out = String::from("\nGenerated Summaries\n");
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!("\n  [{}] Article: {}\n", i + 1, record.article_name));
        out.push_str(&format!("      Summary: {}\n", indent(&record.summary_text, 15)));
    }
    out
}

/// The row range a user may pick from.
pub fn available(dataset: &Dataset) -> String {
    match dataset.index_range() {
        Some(range) => format!("Available articles: {} to {}", range.start(), range.end()),
        None => "No articles in this CSV; nothing to summarize".to_string(),
    }
}

/// API refusals keep their own message; everything else gets the generic prefix.
pub fn notify_failure(error: &NotifyError) -> String {
    if error.is_api_error() {
        format!("Telegram Error: {error}")
    } else {
        format!("Failed to send summary: {error}")
    }
}

/// Indent every line after the first so wrapped summaries line up.
fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.trim_end().lines().collect::<Vec<_>>().join(&format!("\n{pad}"))
}
