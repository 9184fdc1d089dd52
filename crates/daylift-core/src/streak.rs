//! Consecutive-day activity streak.

use chrono::{DateTime, NaiveDate, Utc};

/// Length of the most recent run of consecutive UTC calendar days.
///
/// Timestamps collapse to dates and duplicates within a day count once.
/// The run ends at the most recent recorded date; it does not have to
/// reach today. Empty input yields zero.
pub fn current_streak<I>(timestamps: I) -> u32
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let mut days: Vec<NaiveDate> = timestamps
        .into_iter()
        .map(|timestamp| timestamp.date_naive())
        .collect();
    days.sort_unstable();
    days.dedup();

    let mut streak = 0;
    let mut previous: Option<NaiveDate> = None;

    for day in days.into_iter().rev() {
        match previous {
            None => streak = 1,
            Some(p) if day.succ_opt() == Some(p) => streak += 1,
            Some(_) => break,
        }
        previous = Some(day);
    }

    streak
}
