//! Motivation record: one logged coaching interaction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::advice::Advice;

/// One logged interaction: who asked, how they felt, and what came back.
///
/// Records are append-only. They are never mutated or deleted individually;
/// the only destructive operation is a wholesale history reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotivationRecord {
    /// UTC timestamp of the interaction.
    pub recorded_at: DateTime<Utc>,
    pub name: String,
    pub mood: String,
    pub mode: String,
    pub insight: String,
    pub micro_challenge: String,
    pub affirmation: String,
}

impl MotivationRecord {
    /// Column names, in on-disk order.
    pub const COLUMNS: [&'static str; 7] = [
        "recorded_at",
        "name",
        "mood",
        "mode",
        "insight",
        "micro_challenge",
        "affirmation",
    ];

    /// Assemble a record from an advice result at the given timestamp.
    pub fn from_advice(
        recorded_at: DateTime<Utc>,
        name: &str,
        mood: &str,
        mode: &str,
        advice: &Advice,
    ) -> Self {
        Self {
            recorded_at,
            name: name.to_string(),
            mood: mood.to_string(),
            mode: mode.to_string(),
            insight: advice.insight.clone(),
            micro_challenge: advice.micro_challenge.clone(),
            affirmation: advice.affirmation.clone(),
        }
    }
}
