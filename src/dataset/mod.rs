//! CSV loading and column validation.
//!
//! A [`Dataset`] only exists once both required columns have been found,
//! so everything downstream can look rows up by index without re-checking
//! the shape of the file.

use std::fs::File;
use std::io::Read;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::consts::{CONTENT_COLUMN, NAME_COLUMN};

/// One article read from the dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRow {
    pub name: String,
    pub content: String,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(
        "CSV must contain 'Article Name' and 'Article Content' columns (missing: {})",
        .missing.join(", ")
    )]
    MissingColumns { missing: Vec<String> },

    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// A validated table of articles.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<ArticleRow>,
}

impl Dataset {
    /// Read and validate a CSV file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Read and validate CSV data from any reader. The first record is the header.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = csv.headers()?.clone();
        let name_idx = headers.iter().position(|h| h == NAME_COLUMN);
        let content_idx = headers.iter().position(|h| h == CONTENT_COLUMN);

        let (name_idx, content_idx) = match (name_idx, content_idx) {
            (Some(n), Some(c)) => (n, c),
            (n, c) => {
                let mut missing = Vec::new();
                if n.is_none() {
                    missing.push(NAME_COLUMN.to_string());
                }
                if c.is_none() {
                    missing.push(CONTENT_COLUMN.to_string());
                }
                return Err(DatasetError::MissingColumns { missing });
            }
        };

        let mut rows = Vec::new();
        for record in csv.records() {
            let record = record?;
            rows.push(ArticleRow {
                name: record.get(name_idx).unwrap_or_default().to_string(),
                content: record.get(content_idx).unwrap_or_default().to_string(),
            });
        }

        tracing::debug!(rows = rows.len(), "dataset loaded");
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Valid selection indices, or `None` when the table has no data rows.
    pub fn index_range(&self) -> Option<RangeInclusive<usize>> {
        if self.rows.is_empty() {
            None
        } else {
            Some(0..=self.rows.len() - 1)
        }
    }

    /// Look up a row by zero-based index.
    pub fn row(&self, index: usize) -> Option<ArticleRow> {
        self.rows.get(index).cloned()
    }
}
