//! GeminiProvider -- concrete [`LlmProvider`] implementation for the native
//! Gemini `generateContent` REST API.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use daylift_core::llm::provider::LlmProvider;
use daylift_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, MessageRole, ProviderCapabilities,
    StopReason, TokenCount, Usage,
};

use super::types::{
    GeminiContent, GeminiErrorResponse, GeminiGenerationConfig, GeminiRequest, GeminiResponse,
};

/// Native Gemini LLM provider.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// constructing the `x-goog-api-key` request header. It never appears in
/// Debug output, Display output, or tracing logs.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    timeout_secs: u64,
    capabilities: ProviderCapabilities,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key wrapped in SecretString
    /// * `model` - Model identifier (e.g., "gemini-2.0-flash")
    /// * `timeout_secs` - Outbound request timeout
    pub fn new(api_key: SecretString, model: String, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model,
            timeout_secs,
            capabilities: ProviderCapabilities {
                max_context_tokens: 1_000_000,
                max_output_tokens: 65_536,
            },
        }
    }

    /// The default model for this provider.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full `generateContent` URL for a model.
    fn url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, model
        )
    }

    /// Convert a generic [`CompletionRequest`] into a [`GeminiRequest`].
    ///
    /// System messages go to `systemInstruction`; the assistant role maps
    /// to Gemini's "model" role.
    fn to_gemini_request(&self, request: &CompletionRequest) -> GeminiRequest {
        let mut system_parts: Vec<String> = Vec::new();
        if let Some(ref system) = request.system {
            system_parts.push(system.clone());
        }

        let mut contents = Vec::with_capacity(request.messages.len());
        for msg in &request.messages {
            match msg.role {
                MessageRole::System => system_parts.push(msg.content.clone()),
                MessageRole::User => contents.push(GeminiContent::new(Some("user"), &msg.content)),
                MessageRole::Assistant => {
                    contents.push(GeminiContent::new(Some("model"), &msg.content));
                }
            }
        }

        let system_instruction = if system_parts.is_empty() {
            None
        } else {
            Some(GeminiContent::new(None, &system_parts.join("\n\n")))
        };

        GeminiRequest {
            contents,
            system_instruction,
            generation_config: Some(GeminiGenerationConfig {
                max_output_tokens: Some(request.max_tokens),
                temperature: request.temperature,
            }),
        }
    }
}

// GeminiProvider intentionally does NOT derive Debug to prevent accidental
// exposure of internal state. The SecretString field ensures the API key is
// never printed, but we also omit Debug entirely for defense-in-depth.

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn capabilities(&self) -> &ProviderCapabilities {
        &self.capabilities
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let model = if request.model.is_empty() {
            self.model.as_str()
        } else {
            request.model.as_str()
        };
        let body = self.to_gemini_request(request);
        let url = self.url(model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout(self.timeout_secs)
                } else {
                    LlmError::Provider {
                        message: format!("HTTP request failed: {e}"),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GeminiErrorResponse>(&error_body)
                .map(|e| e.error.message)
                .unwrap_or(error_body);
            return Err(match status.as_u16() {
                401 | 403 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited {
                    retry_after_ms: None,
                },
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {message}"),
                },
            });
        }

        let gemini_resp: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let content = gemini_resp.first_candidate_text();

        let stop_reason = match gemini_resp
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
        {
            Some("STOP") | None => StopReason::EndTurn,
            Some("MAX_TOKENS") => StopReason::MaxTokens,
            Some(_) => StopReason::Other,
        };

        let usage = gemini_resp
            .usage_metadata
            .map(|u| Usage {
                input_tokens: u.prompt_token_count,
                output_tokens: u.candidates_token_count,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: gemini_resp.response_id.unwrap_or_default(),
            content,
            model: gemini_resp.model_version.unwrap_or_else(|| model.to_string()),
            stop_reason,
            usage,
        })
    }

    async fn count_tokens(&self, request: &CompletionRequest) -> Result<TokenCount, LlmError> {
        // Character-based estimation: ~4 chars per token.
        let mut total_chars: usize = 0;

        if let Some(system) = &request.system {
            total_chars += system.len();
        }

        for msg in &request.messages {
            total_chars += msg.content.len();
            // Overhead for role and message structure
            total_chars += 10;
        }

        let estimated_tokens = (total_chars as f64 / 4.0).ceil() as u32;

        Ok(TokenCount {
            input_tokens: estimated_tokens,
        })
    }
}
