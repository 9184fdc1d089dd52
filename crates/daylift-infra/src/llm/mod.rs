//! LLM provider implementations.
//!
//! Two backends cover the supported APIs:
//! - [`openai_compat::OpenAiCompatibleProvider`] -- any OpenAI
//!   chat-completions endpoint, including Gemini's compatibility layer.
//! - [`gemini::GeminiProvider`] -- the native Gemini `generateContent` API.
//!
//! [`AnyProvider`] wraps both behind one concrete type so the application
//! can pick a backend from configuration at startup.

pub mod gemini;
pub mod openai_compat;

use daylift_core::llm::provider::LlmProvider;
use daylift_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, ProviderCapabilities, TokenCount,
};

use gemini::GeminiProvider;
use openai_compat::OpenAiCompatibleProvider;

/// Enum dispatch over the concrete providers.
///
/// The `LlmProvider` trait uses RPITIT and is therefore not object-safe;
/// this enum is the concrete type the service generics pin to.
pub enum AnyProvider {
    OpenAiCompatible(OpenAiCompatibleProvider),
    GeminiNative(GeminiProvider),
}

// Manual Debug impl: the inner providers intentionally do not derive Debug
// (to avoid leaking API keys), so print only the active variant name.
impl std::fmt::Debug for AnyProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnyProvider::OpenAiCompatible(_) => f.write_str("AnyProvider::OpenAiCompatible"),
            AnyProvider::GeminiNative(_) => f.write_str("AnyProvider::GeminiNative"),
        }
    }
}

impl LlmProvider for AnyProvider {
    fn name(&self) -> &str {
        match self {
            AnyProvider::OpenAiCompatible(provider) => provider.name(),
            AnyProvider::GeminiNative(provider) => provider.name(),
        }
    }

    fn capabilities(&self) -> &ProviderCapabilities {
        match self {
            AnyProvider::OpenAiCompatible(provider) => provider.capabilities(),
            AnyProvider::GeminiNative(provider) => provider.capabilities(),
        }
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        match self {
            AnyProvider::OpenAiCompatible(provider) => provider.complete(request).await,
            AnyProvider::GeminiNative(provider) => provider.complete(request).await,
        }
    }

    async fn count_tokens(&self, request: &CompletionRequest) -> Result<TokenCount, LlmError> {
        match self {
            AnyProvider::OpenAiCompatible(provider) => provider.count_tokens(request).await,
            AnyProvider::GeminiNative(provider) => provider.count_tokens(request).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn any_provider_delegates_name() {
        let openai = AnyProvider::OpenAiCompatible(OpenAiCompatibleProvider::openai(
            "sk-test",
            "gpt-4o-mini",
        ));
        assert_eq!(openai.name(), "openai");

        let gemini = AnyProvider::GeminiNative(GeminiProvider::new(
            SecretString::from("test-key"),
            "gemini-2.0-flash".to_string(),
            15,
        ));
        assert_eq!(gemini.name(), "gemini");
    }
}
