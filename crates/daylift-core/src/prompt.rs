//! Coaching prompt assembly.
//!
//! Builds the user prompt from the advice request fields plus the fixed
//! system prompt. The closing instruction asks the model for labeled
//! `Insight:` / `Micro-Challenge:` / `Affirmation:` output so the
//! normalizer's line strategy has something to grab.

use daylift_types::advice::AdviceRequest;

/// Fixed system prompt sent with every completion.
pub const SYSTEM_PROMPT: &str = "You are a helpful and motivational life coach.";

/// Builds the user prompt for one coaching interaction.
pub struct CoachPromptBuilder;

impl CoachPromptBuilder {
    /// Assemble the complete prompt.
    ///
    /// Layout:
    /// ```text
    /// You are Daylift, a friendly coach.
    /// Mode: ...
    /// Name: ...
    /// Mood: ...
    /// Tone: ...
    /// Length: ...
    ///
    /// Context: ...
    ///
    /// Return: Insight:, Micro-Challenge:, Affirmation:
    /// ```
    ///
    /// The context section is skipped when the user gave none.
    pub fn build(request: &AdviceRequest) -> String {
        let mut sections = Vec::with_capacity(3);

        sections.push(format!(
            "You are Daylift, a friendly coach.\n\
             Mode: {}\n\
             Name: {}\n\
             Mood: {}\n\
             Tone: {}\n\
             Length: {}",
            request.mode.label(),
            request.name.trim(),
            request.mood.trim(),
            request.tone,
            request.length,
        ));

        let topic = request.topic.trim();
        if !topic.is_empty() {
            sections.push(format!("Context: {topic}"));
        }

        sections.push("Return: Insight:, Micro-Challenge:, Affirmation:".to_string());

        sections.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daylift_types::advice::{AdviceLength, CoachMode, Tone};

    fn request() -> AdviceRequest {
        AdviceRequest {
            name: "Ada".to_string(),
            mood: "Stressed".to_string(),
            topic: String::new(),
            mode: CoachMode::CalmReset,
            tone: Tone::Direct,
            length: AdviceLength::Detailed,
        }
    }

    #[test]
    fn prompt_contains_all_fields() {
        let prompt = CoachPromptBuilder::build(&request());
        assert!(prompt.contains("Mode: Calm & Reset"));
        assert!(prompt.contains("Name: Ada"));
        assert!(prompt.contains("Mood: Stressed"));
        assert!(prompt.contains("Tone: direct"));
        assert!(prompt.contains("Length: detailed"));
        assert!(prompt.ends_with("Return: Insight:, Micro-Challenge:, Affirmation:"));
    }

    #[test]
    fn empty_topic_is_skipped() {
        let prompt = CoachPromptBuilder::build(&request());
        assert!(!prompt.contains("Context:"));
    }

    #[test]
    fn topic_is_included_when_present() {
        let mut req = request();
        req.topic = "deadline tomorrow".to_string();
        let prompt = CoachPromptBuilder::build(&req);
        assert!(prompt.contains("Context: deadline tomorrow"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let req = request();
        assert_eq!(
            CoachPromptBuilder::build(&req),
            CoachPromptBuilder::build(&req)
        );
    }
}
