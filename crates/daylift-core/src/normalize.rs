//! Best-effort normalization of provider replies into an [`Advice`] triple.
//!
//! Generative APIs return the three coaching sections in whatever shape the
//! model felt like that day: a JSON object, `Label: value` lines, or plain
//! paragraphs. [`normalize_advice`] tries each shape in priority order and
//! degrades to partially empty fields rather than failing. It is a pure
//! function: same input, same output, no error path.

use serde_json::{Map, Value};

use daylift_types::advice::Advice;

/// A trailing line longer than this is not a plausible affirmation.
const AFFIRMATION_MAX_LEN: usize = 200;

/// Normalize an arbitrary reply blob into an [`Advice`].
///
/// Strategies, in priority order:
/// 1. Whole-text JSON object: read each field through its alias list
///    (first non-empty string wins) and return immediately.
/// 2. Labeled lines: case-insensitive `insight:` / `micro-challenge:` /
///    `affirmation:` matching, value taken after the first colon. A line
///    feeds at most one field; later matches overwrite earlier ones.
/// 3. Paragraph fallback for `insight` and `micro_challenge`: first and
///    second blank-line-separated paragraphs.
/// 4. Last-line fallback for `affirmation`, when short enough.
pub fn normalize_advice(text: &str) -> Advice {
    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(text) {
        return from_json_object(&object);
    }

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut advice = Advice::default();

    for line in &lines {
        let lower = line.to_lowercase();
        let has_colon = line.contains(':');
        // Value is everything after the first colon; the whole line when
        // no colon is present.
        let value = line
            .split_once(':')
            .map(|(_, rest)| rest)
            .unwrap_or(line)
            .trim();

        if lower.starts_with("insight:") || (lower.contains("insight") && has_colon) {
            advice.insight = value.to_string();
        } else if lower.starts_with("micro-challenge:")
            || (lower.contains("micro") && lower.contains("challenge"))
            || (lower.contains("challenge") && has_colon)
        {
            advice.micro_challenge = value.to_string();
        } else if lower.starts_with("affirmation:") || (lower.contains("affirm") && has_colon) {
            advice.affirmation = value.to_string();
        }
    }

    if advice.insight.is_empty() || advice.micro_challenge.is_empty() {
        let paragraphs: Vec<&str> = text
            .split("\n\n")
            .map(str::trim)
            .filter(|paragraph| !paragraph.is_empty())
            .collect();

        if advice.insight.is_empty()
            && let Some(first) = paragraphs.first()
        {
            advice.insight = (*first).to_string();
        }
        if advice.micro_challenge.is_empty()
            && let Some(second) = paragraphs.get(1)
        {
            advice.micro_challenge = (*second).to_string();
        }
    }

    if advice.affirmation.is_empty()
        && let Some(last) = lines.last()
        && last.len() < AFFIRMATION_MAX_LEN
    {
        advice.affirmation = (*last).to_string();
    }

    advice
}

/// Extract the advice fields from a JSON object through per-field alias
/// lists. Only non-empty string values count; anything else leaves the
/// field empty.
fn from_json_object(object: &Map<String, Value>) -> Advice {
    Advice {
        insight: first_string(object, &["insight", "insight_text", "Insight"]),
        micro_challenge: first_string(object, &["micro_challenge", "challenge", "task"]),
        affirmation: first_string(object, &["affirmation", "affirm", "aff"]),
    }
}

fn first_string(object: &Map<String, Value>, aliases: &[&str]) -> String {
    for alias in aliases {
        if let Some(Value::String(s)) = object.get(*alias) {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_object_returns_exact_triple() {
        let advice = normalize_advice(
            r#"{"insight":"A","micro_challenge":"B","affirmation":"C"}"#,
        );
        assert_eq!(advice.insight, "A");
        assert_eq!(advice.micro_challenge, "B");
        assert_eq!(advice.affirmation, "C");
    }

    #[test]
    fn json_object_alias_keys() {
        let advice = normalize_advice(r#"{"Insight":"A","task":"B","aff":"C"}"#);
        assert_eq!(advice.insight, "A");
        assert_eq!(advice.micro_challenge, "B");
        assert_eq!(advice.affirmation, "C");
    }

    #[test]
    fn json_object_returns_immediately_even_when_partial() {
        // The object parses, so later strategies must not run on its text.
        let advice = normalize_advice(r#"{"insight":"Only this"}"#);
        assert_eq!(advice.insight, "Only this");
        assert!(advice.micro_challenge.is_empty());
        assert!(advice.affirmation.is_empty());
    }

    #[test]
    fn json_non_string_values_leave_fields_empty() {
        let advice = normalize_advice(r#"{"insight":42,"challenge":["a"],"affirmation":"C"}"#);
        assert!(advice.insight.is_empty());
        assert!(advice.micro_challenge.is_empty());
        assert_eq!(advice.affirmation, "C");
    }

    #[test]
    fn json_array_is_not_an_object() {
        // A JSON array falls through to the line/paragraph strategies.
        let advice = normalize_advice("[1, 2, 3]");
        assert_eq!(advice.insight, "[1, 2, 3]");
    }

    #[test]
    fn labeled_lines_extract_each_field() {
        let advice = normalize_advice(
            "Insight: Keep going.\nMicro-Challenge: Walk for 2 minutes.\nAffirmation: I can do this.",
        );
        assert_eq!(advice.insight, "Keep going.");
        assert_eq!(advice.micro_challenge, "Walk for 2 minutes.");
        assert_eq!(advice.affirmation, "I can do this.");
    }

    #[test]
    fn labels_match_case_insensitively() {
        let advice = normalize_advice("INSIGHT: a\nCHALLENGE: b\nAFFIRM: c");
        assert_eq!(advice.insight, "a");
        assert_eq!(advice.micro_challenge, "b");
        assert_eq!(advice.affirmation, "c");
    }

    #[test]
    fn later_matching_line_overwrites_earlier() {
        let advice = normalize_advice("Insight: first\nInsight: second");
        assert_eq!(advice.insight, "second");
    }

    #[test]
    fn value_taken_after_first_colon_only() {
        let advice = normalize_advice("Insight: note: nested colon");
        assert_eq!(advice.insight, "note: nested colon");
    }

    #[test]
    fn line_feeds_at_most_one_field() {
        // "insight" wins over the challenge branch on the same line.
        let advice = normalize_advice("Insight challenge: both words");
        assert_eq!(advice.insight, "both words");
        assert!(advice.micro_challenge.is_empty());
    }

    #[test]
    fn micro_challenge_matches_without_colon() {
        let advice = normalize_advice("Try this micro challenge today");
        assert_eq!(advice.micro_challenge, "Try this micro challenge today");
    }

    #[test]
    fn paragraphs_fill_insight_and_challenge() {
        let advice = normalize_advice(
            "You are doing better than you think.\n\nStand up and stretch for one minute.",
        );
        assert_eq!(advice.insight, "You are doing better than you think.");
        assert_eq!(advice.micro_challenge, "Stand up and stretch for one minute.");
    }

    #[test]
    fn last_line_becomes_affirmation_when_short() {
        let advice = normalize_advice("Some insight here.\n\nDo a thing.\nI am enough.");
        assert_eq!(advice.affirmation, "I am enough.");
    }

    #[test]
    fn long_last_line_is_not_an_affirmation() {
        let long_line = "x".repeat(AFFIRMATION_MAX_LEN);
        let advice = normalize_advice(&format!("First paragraph.\n\n{long_line}"));
        assert!(advice.affirmation.is_empty());
    }

    #[test]
    fn never_panics_on_empty_or_odd_input() {
        for input in ["", "   \n\n  ", ":", "::::", "\u{0}weird\u{7f}", "只是文字"] {
            let _ = normalize_advice(input);
        }
        assert!(normalize_advice("").is_empty());
    }

    #[test]
    fn labeled_single_field_still_gets_paragraph_fill() {
        // Affirmation was labeled; insight and challenge come from paragraphs.
        let advice = normalize_advice("A thought.\n\nA task.\n\nAffirmation: I persist.");
        assert_eq!(advice.insight, "A thought.");
        assert_eq!(advice.micro_challenge, "A task.");
        assert_eq!(advice.affirmation, "I persist.");
    }
}
