//! CSV-file-backed history store.
//!
//! Implements the `HistoryStore` trait from `daylift-core` over one flat
//! file. A header row is written when the file is created; each append adds
//! one quoted row; every read reloads the whole file. Malformed rows are
//! skipped silently on load, and reset deletes the file wholesale. There is
//! no locking and no indexing -- single-user local deployment.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::io::AsyncWriteExt;

use daylift_core::history::HistoryStore;
use daylift_types::error::HistoryError;
use daylift_types::record::MotivationRecord;

/// CSV-file history store.
pub struct CsvHistoryStore {
    path: PathBuf,
}

impl CsvHistoryStore {
    /// Create a store backed by the given file path. The file and its
    /// parent directories are created lazily on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn header_row() -> String {
        MotivationRecord::COLUMNS.join(",")
    }

    fn record_row(record: &MotivationRecord) -> String {
        [
            record.recorded_at.to_rfc3339(),
            record.name.clone(),
            record.mood.clone(),
            record.mode.clone(),
            record.insight.clone(),
            record.micro_challenge.clone(),
            record.affirmation.clone(),
        ]
        .iter()
        .map(|field| csv_escape(field))
        .collect::<Vec<_>>()
        .join(",")
    }

    fn parse_record(row: &str) -> Option<MotivationRecord> {
        let fields = parse_fields(row);
        if fields.len() != MotivationRecord::COLUMNS.len() {
            return None;
        }

        let recorded_at = DateTime::parse_from_rfc3339(&fields[0])
            .ok()?
            .with_timezone(&Utc);

        Some(MotivationRecord {
            recorded_at,
            name: fields[1].clone(),
            mood: fields[2].clone(),
            mode: fields[3].clone(),
            insight: fields[4].clone(),
            micro_challenge: fields[5].clone(),
            affirmation: fields[6].clone(),
        })
    }
}

impl HistoryStore for CsvHistoryStore {
    async fn append(&self, record: &MotivationRecord) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let is_new = !tokio::fs::try_exists(&self.path).await.unwrap_or(false);

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let mut buffer = String::new();
        if is_new {
            buffer.push_str(&Self::header_row());
            buffer.push('\n');
        }
        buffer.push_str(&Self::record_row(record));
        buffer.push('\n');

        file.write_all(buffer.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn load(&self) -> Result<Vec<MotivationRecord>, HistoryError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut records = Vec::new();
        for (index, row) in split_rows(&content).into_iter().enumerate() {
            if index == 0 && row == Self::header_row() {
                continue;
            }
            match Self::parse_record(&row) {
                Some(record) => records.push(record),
                None => {
                    tracing::debug!(row_index = index, "skipping malformed history row");
                }
            }
        }
        Ok(records)
    }

    async fn reset(&self) -> Result<(), HistoryError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Quote a field when it contains a comma, quote, or newline.
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Split file content into logical rows, honoring quoted newlines.
fn split_rows(content: &str) -> Vec<String> {
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut in_quotes = false;

    for c in content.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                row.push(c);
            }
            '\n' if !in_quotes => {
                let trimmed = row.trim_end_matches('\r');
                if !trimmed.is_empty() {
                    rows.push(trimmed.to_string());
                }
                row.clear();
            }
            _ => row.push(c),
        }
    }

    let trimmed = row.trim_end_matches('\r');
    if !trimmed.is_empty() {
        rows.push(trimmed.to_string());
    }
    rows
}

/// Split one logical row into unescaped fields.
fn parse_fields(row: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = row.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }
    fields.push(field);
    fields
}
