//! Advice request and result types.
//!
//! An [`AdviceRequest`] carries the user-supplied form fields into the coach
//! service; an [`Advice`] is the normalized triple extracted from the
//! provider's free-text reply. Any advice field may be empty -- callers must
//! tolerate partial results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coaching mode selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachMode {
    DailyBoost,
    FocusCoach,
    CalmReset,
    ConfidenceBoost,
}

impl CoachMode {
    /// Human-readable label used in prompts and display.
    pub fn label(&self) -> &'static str {
        match self {
            CoachMode::DailyBoost => "Daily Boost",
            CoachMode::FocusCoach => "Focus Coach",
            CoachMode::CalmReset => "Calm & Reset",
            CoachMode::ConfidenceBoost => "Confidence Boost",
        }
    }
}

impl Default for CoachMode {
    fn default() -> Self {
        CoachMode::DailyBoost
    }
}

impl fmt::Display for CoachMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoachMode::DailyBoost => write!(f, "daily_boost"),
            CoachMode::FocusCoach => write!(f, "focus_coach"),
            CoachMode::CalmReset => write!(f, "calm_reset"),
            CoachMode::ConfidenceBoost => write!(f, "confidence_boost"),
        }
    }
}

impl FromStr for CoachMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily_boost" | "daily boost" => Ok(CoachMode::DailyBoost),
            "focus_coach" | "focus coach" => Ok(CoachMode::FocusCoach),
            "calm_reset" | "calm & reset" => Ok(CoachMode::CalmReset),
            "confidence_boost" | "confidence boost" => Ok(CoachMode::ConfidenceBoost),
            other => Err(format!("invalid coach mode: '{other}'")),
        }
    }
}

/// Tone requested for the generated advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Empathetic,
    Direct,
    Encouraging,
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Empathetic
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Empathetic => write!(f, "empathetic"),
            Tone::Direct => write!(f, "direct"),
            Tone::Encouraging => write!(f, "encouraging"),
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "empathetic" => Ok(Tone::Empathetic),
            "direct" => Ok(Tone::Direct),
            "encouraging" => Ok(Tone::Encouraging),
            other => Err(format!("invalid tone: '{other}'")),
        }
    }
}

/// Requested length of the generated advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceLength {
    Short,
    Detailed,
}

impl Default for AdviceLength {
    fn default() -> Self {
        AdviceLength::Short
    }
}

impl fmt::Display for AdviceLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdviceLength::Short => write!(f, "short"),
            AdviceLength::Detailed => write!(f, "detailed"),
        }
    }
}

impl FromStr for AdviceLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(AdviceLength::Short),
            "detailed" => Ok(AdviceLength::Detailed),
            other => Err(format!("invalid advice length: '{other}'")),
        }
    }
}

/// User-supplied fields for one coaching interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceRequest {
    /// User's name; the only required field.
    pub name: String,

    /// Current mood (free text, e.g. "Stressed").
    #[serde(default)]
    pub mood: String,

    /// Optional free-text topic/context ("what's bothering you?").
    #[serde(default)]
    pub topic: String,

    #[serde(default)]
    pub mode: CoachMode,

    #[serde(default)]
    pub tone: Tone,

    #[serde(default)]
    pub length: AdviceLength,
}

/// The normalized advice triple.
///
/// Produced by the response normalizer; any field may be empty when the
/// provider's reply did not yield that section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub insight: String,
    pub micro_challenge: String,
    pub affirmation: String,
}

impl Advice {
    /// True when no field was extracted at all.
    pub fn is_empty(&self) -> bool {
        self.insight.is_empty() && self.micro_challenge.is_empty() && self.affirmation.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coach_mode_roundtrip() {
        for mode in [
            CoachMode::DailyBoost,
            CoachMode::FocusCoach,
            CoachMode::CalmReset,
            CoachMode::ConfidenceBoost,
        ] {
            let s = mode.to_string();
            let parsed: CoachMode = s.parse().unwrap();
            assert_eq!(mode, parsed);
        }
    }

    #[test]
    fn test_coach_mode_parses_display_labels() {
        let parsed: CoachMode = "Calm & Reset".parse().unwrap();
        assert_eq!(parsed, CoachMode::CalmReset);
    }

    #[test]
    fn test_tone_serde() {
        let json = serde_json::to_string(&Tone::Direct).unwrap();
        assert_eq!(json, "\"direct\"");
        let parsed: Tone = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Tone::Direct);
    }

    #[test]
    fn test_advice_request_defaults() {
        let req: AdviceRequest = serde_json::from_str(r#"{"name":"Ada"}"#).unwrap();
        assert_eq!(req.name, "Ada");
        assert!(req.mood.is_empty());
        assert_eq!(req.mode, CoachMode::DailyBoost);
        assert_eq!(req.tone, Tone::Empathetic);
        assert_eq!(req.length, AdviceLength::Short);
    }

    #[test]
    fn test_advice_is_empty() {
        assert!(Advice::default().is_empty());
        let advice = Advice {
            affirmation: "I can do this.".to_string(),
            ..Default::default()
        };
        assert!(!advice.is_empty());
    }
}
