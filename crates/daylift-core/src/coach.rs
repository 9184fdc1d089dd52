//! Coach service: orchestrates one coaching interaction.
//!
//! Build prompt -> complete -> normalize -> record. Provider failures are
//! either surfaced as [`CoachError`] or, in demo mode, papered over with a
//! canned response that is still recorded. No retry, no backoff.

use chrono::Utc;

use daylift_types::advice::{Advice, AdviceRequest};
use daylift_types::error::CoachError;
use daylift_types::llm::{CompletionRequest, Message, MessageRole};
use daylift_types::record::MotivationRecord;

use crate::history::{mood_frequency, HistoryStore};
use crate::llm::LlmProvider;
use crate::normalize::normalize_advice;
use crate::prompt::{CoachPromptBuilder, SYSTEM_PROMPT};
use crate::streak::current_streak;

/// Completion parameters for the coach service.
#[derive(Debug, Clone)]
pub struct CoachSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub demo_mode: bool,
}

/// Aggregate view over the history for display.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HistorySummary {
    pub total_records: usize,
    pub mood_frequency: Vec<(String, usize)>,
    pub streak_days: u32,
}

/// The canned response served when demo mode papers over a provider failure.
pub fn demo_advice() -> Advice {
    Advice {
        insight: "Small step.".to_string(),
        micro_challenge: "2 minutes action.".to_string(),
        affirmation: "I move forward.".to_string(),
    }
}

/// Orchestrates coaching interactions over a provider and a history store.
pub struct CoachService<P, H> {
    provider: P,
    history: H,
    settings: CoachSettings,
}

impl<P, H> CoachService<P, H>
where
    P: LlmProvider,
    H: HistoryStore,
{
    pub fn new(provider: P, history: H, settings: CoachSettings) -> Self {
        Self {
            provider,
            history,
            settings,
        }
    }

    /// Run one coaching interaction and append the result to history.
    ///
    /// Returns the normalized advice; any field may be empty when the
    /// provider's reply did not yield that section.
    #[tracing::instrument(skip(self, request), fields(provider = self.provider.name()))]
    pub async fn advise(&self, request: &AdviceRequest) -> Result<Advice, CoachError> {
        if request.name.trim().is_empty() {
            return Err(CoachError::MissingName);
        }

        let completion = self.build_request(request);

        if let Ok(count) = self.provider.count_tokens(&completion).await {
            tracing::debug!(input_tokens = count.input_tokens, "estimated prompt size");
        }

        let advice = match self.provider.complete(&completion).await {
            Ok(response) => {
                tracing::debug!(
                    output_tokens = response.usage.output_tokens,
                    stop_reason = %response.stop_reason,
                    "completion received"
                );
                normalize_advice(&response.content)
            }
            Err(error) if self.settings.demo_mode => {
                tracing::warn!(%error, "provider failed, serving demo advice");
                demo_advice()
            }
            Err(error) => return Err(error.into()),
        };

        let record = MotivationRecord::from_advice(
            Utc::now(),
            request.name.trim(),
            request.mood.trim(),
            &request.mode.to_string(),
            &advice,
        );
        self.history.append(&record).await?;

        Ok(advice)
    }

    /// Forward a raw conversation to the provider and return its reply text.
    pub async fn chat(&self, messages: Vec<Message>) -> Result<String, CoachError> {
        let completion = CompletionRequest {
            model: self.settings.model.clone(),
            messages,
            system: None,
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
        };
        let response = self.provider.complete(&completion).await?;
        Ok(response.content)
    }

    /// Every record, in file order.
    pub async fn history(&self) -> Result<Vec<MotivationRecord>, CoachError> {
        Ok(self.history.load().await?)
    }

    /// Wipe the entire history.
    pub async fn reset(&self) -> Result<(), CoachError> {
        tracing::info!("resetting history");
        Ok(self.history.reset().await?)
    }

    /// Record count, mood frequency, and current streak.
    pub async fn summary(&self) -> Result<HistorySummary, CoachError> {
        let records = self.history.load().await?;
        let streak_days = current_streak(records.iter().map(|record| record.recorded_at));
        Ok(HistorySummary {
            total_records: records.len(),
            mood_frequency: mood_frequency(&records),
            streak_days,
        })
    }

    fn build_request(&self, request: &AdviceRequest) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![Message {
                role: MessageRole::User,
                content: CoachPromptBuilder::build(request),
            }],
            system: Some(SYSTEM_PROMPT.to_string()),
            max_tokens: self.settings.max_tokens,
            temperature: Some(self.settings.temperature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use daylift_types::error::HistoryError;
    use daylift_types::llm::{
        CompletionResponse, LlmError, ProviderCapabilities, StopReason, TokenCount, Usage,
    };

    /// Provider that replays a fixed reply or always fails.
    struct ScriptedProvider {
        reply: Option<String>,
        capabilities: ProviderCapabilities,
    }

    impl ScriptedProvider {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                capabilities: ProviderCapabilities {
                    max_context_tokens: 128_000,
                    max_output_tokens: 16_384,
                },
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                capabilities: ProviderCapabilities {
                    max_context_tokens: 128_000,
                    max_output_tokens: 16_384,
                },
            }
        }
    }

    impl LlmProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        fn capabilities(&self) -> &ProviderCapabilities {
            &self.capabilities
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            match &self.reply {
                Some(content) => Ok(CompletionResponse {
                    id: "test".to_string(),
                    content: content.clone(),
                    model: request.model.clone(),
                    stop_reason: StopReason::EndTurn,
                    usage: Usage::default(),
                }),
                None => Err(LlmError::Provider {
                    message: "scripted failure".to_string(),
                }),
            }
        }

        async fn count_tokens(
            &self,
            _request: &CompletionRequest,
        ) -> Result<TokenCount, LlmError> {
            Ok(TokenCount { input_tokens: 42 })
        }
    }

    /// In-memory history store for service tests.
    #[derive(Default)]
    struct MemoryHistoryStore {
        records: Mutex<Vec<MotivationRecord>>,
    }

    impl HistoryStore for MemoryHistoryStore {
        async fn append(&self, record: &MotivationRecord) -> Result<(), HistoryError> {
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }

        async fn load(&self) -> Result<Vec<MotivationRecord>, HistoryError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn reset(&self) -> Result<(), HistoryError> {
            self.records.lock().unwrap().clear();
            Ok(())
        }
    }

    fn settings(demo_mode: bool) -> CoachSettings {
        CoachSettings {
            model: "gpt-4o-mini".to_string(),
            max_tokens: 300,
            temperature: 0.7,
            demo_mode,
        }
    }

    fn request() -> AdviceRequest {
        AdviceRequest {
            name: "Ada".to_string(),
            mood: "Focused".to_string(),
            topic: String::new(),
            mode: Default::default(),
            tone: Default::default(),
            length: Default::default(),
        }
    }

    #[tokio::test]
    async fn advise_normalizes_and_records() {
        let service = CoachService::new(
            ScriptedProvider::replying(
                "Insight: Keep going.\nMicro-Challenge: Walk.\nAffirmation: I can.",
            ),
            MemoryHistoryStore::default(),
            settings(false),
        );

        let advice = service.advise(&request()).await.unwrap();
        assert_eq!(advice.insight, "Keep going.");
        assert_eq!(advice.micro_challenge, "Walk.");
        assert_eq!(advice.affirmation, "I can.");

        let records = service.history().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Ada");
        assert_eq!(records[0].insight, "Keep going.");
    }

    #[tokio::test]
    async fn advise_rejects_empty_name() {
        let service = CoachService::new(
            ScriptedProvider::replying("Insight: x"),
            MemoryHistoryStore::default(),
            settings(false),
        );
        let mut req = request();
        req.name = "   ".to_string();

        let err = service.advise(&req).await.unwrap_err();
        assert!(matches!(err, CoachError::MissingName));
        assert!(service.history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn provider_failure_surfaces_without_demo_mode() {
        let service = CoachService::new(
            ScriptedProvider::failing(),
            MemoryHistoryStore::default(),
            settings(false),
        );

        let err = service.advise(&request()).await.unwrap_err();
        assert!(matches!(err, CoachError::Llm(_)));
        // Failed interactions leave no record behind.
        assert!(service.history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn demo_mode_papers_over_provider_failure() {
        let service = CoachService::new(
            ScriptedProvider::failing(),
            MemoryHistoryStore::default(),
            settings(true),
        );

        let advice = service.advise(&request()).await.unwrap();
        assert_eq!(advice, demo_advice());

        // The canned response is still recorded.
        let records = service.history().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].insight, "Small step.");
    }

    #[tokio::test]
    async fn chat_returns_raw_reply() {
        let service = CoachService::new(
            ScriptedProvider::replying("hello back"),
            MemoryHistoryStore::default(),
            settings(false),
        );

        let reply = service
            .chat(vec![Message {
                role: MessageRole::User,
                content: "hello".to_string(),
            }])
            .await
            .unwrap();
        assert_eq!(reply, "hello back");
        // Chat does not touch history.
        assert!(service.history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn summary_aggregates_history() {
        let service = CoachService::new(
            ScriptedProvider::replying("Insight: a\nChallenge: b\nAffirmation: c"),
            MemoryHistoryStore::default(),
            settings(false),
        );

        service.advise(&request()).await.unwrap();
        service.advise(&request()).await.unwrap();

        let summary = service.summary().await.unwrap();
        assert_eq!(summary.total_records, 2);
        assert_eq!(summary.streak_days, 1);
        assert_eq!(summary.mood_frequency, vec![("Focused".to_string(), 2)]);
    }

    #[tokio::test]
    async fn reset_clears_history() {
        let service = CoachService::new(
            ScriptedProvider::replying("Insight: a"),
            MemoryHistoryStore::default(),
            settings(false),
        );

        service.advise(&request()).await.unwrap();
        service.reset().await.unwrap();
        assert!(service.history().await.unwrap().is_empty());
    }
}
