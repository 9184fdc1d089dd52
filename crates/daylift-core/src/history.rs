//! History store port and pure aggregation helpers.

use std::collections::BTreeMap;

use daylift_types::error::HistoryError;
use daylift_types::record::MotivationRecord;

/// Persistence port for motivation records.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in daylift-infra (e.g., `CsvHistoryStore`).
pub trait HistoryStore: Send + Sync {
    /// Append one record.
    fn append(
        &self,
        record: &MotivationRecord,
    ) -> impl std::future::Future<Output = Result<(), HistoryError>> + Send;

    /// Load every record, in file order. Malformed rows are skipped.
    fn load(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<MotivationRecord>, HistoryError>> + Send;

    /// Wipe the entire history.
    fn reset(&self) -> impl std::future::Future<Output = Result<(), HistoryError>> + Send;
}

/// Mood frequency over a record set, sorted by count descending then
/// mood name ascending. Empty moods are grouped under `(none)`.
pub fn mood_frequency(records: &[MotivationRecord]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        let mood = if record.mood.is_empty() {
            "(none)".to_string()
        } else {
            record.mood.clone()
        };
        *counts.entry(mood).or_insert(0) += 1;
    }

    let mut frequency: Vec<(String, usize)> = counts.into_iter().collect();
    frequency.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    frequency
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use daylift_types::advice::Advice;

    fn record(mood: &str) -> MotivationRecord {
        MotivationRecord::from_advice(Utc::now(), "Ada", mood, "daily_boost", &Advice::default())
    }

    #[test]
    fn frequency_counts_and_sorts() {
        let records = vec![
            record("Happy"),
            record("Stressed"),
            record("Happy"),
            record("Calm"),
            record("Happy"),
            record("Stressed"),
        ];
        let frequency = mood_frequency(&records);
        assert_eq!(
            frequency,
            vec![
                ("Happy".to_string(), 3),
                ("Stressed".to_string(), 2),
                ("Calm".to_string(), 1),
            ]
        );
    }

    #[test]
    fn ties_break_alphabetically() {
        let records = vec![record("Tired"), record("Calm")];
        let frequency = mood_frequency(&records);
        assert_eq!(frequency[0].0, "Calm");
        assert_eq!(frequency[1].0, "Tired");
    }

    #[test]
    fn empty_mood_is_grouped() {
        let records = vec![record(""), record("")];
        let frequency = mood_frequency(&records);
        assert_eq!(frequency, vec![("(none)".to_string(), 2)]);
    }

    #[test]
    fn empty_records_yield_empty_frequency() {
        assert!(mood_frequency(&[]).is_empty());
    }
}
