//! LlmProvider trait definition.
//!
//! This is the abstraction the coach service talks to; concrete backends
//! (OpenAI-compatible, native Gemini) live in daylift-infra.

use daylift_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities, TokenCount,
};

/// Trait for generative-text provider backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). The service
/// model is strictly synchronous request/response, so there is no streaming
/// method.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai", "gemini").
    fn name(&self) -> &str;

    /// Context/output limits for this provider.
    fn capabilities(&self) -> &ProviderCapabilities;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;

    /// Count the tokens in a request without sending it to the LLM.
    fn count_tokens(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<TokenCount, LlmError>> + Send;
}
