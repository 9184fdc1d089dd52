//! Application state wiring all services together.
//!
//! AppState holds the concrete service instance used by both CLI and REST
//! API. The coach service is generic over provider/history traits, but
//! AppState pins it to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use daylift_core::coach::{CoachService, CoachSettings};
use daylift_infra::config::{history_path, load_config, resolve_data_dir};
use daylift_infra::history::CsvHistoryStore;
use daylift_infra::llm::gemini::GeminiProvider;
use daylift_infra::llm::openai_compat::{
    gemini_defaults, openai_defaults, OpenAiCompatibleProvider,
};
use daylift_infra::llm::AnyProvider;
use daylift_infra::secret::{provider_key_var, resolve_api_key};
use daylift_types::config::{AppConfig, ProviderKind};

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteCoachService = CoachService<AnyProvider, CsvHistoryStore>;

/// Shared application state.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub coach: Arc<ConcreteCoachService>,
    pub config: Arc<AppConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: load config, wire the provider,
    /// the history store, and the coach service.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_config(&data_dir).await;
        let provider = build_provider(&config)?;
        let history = CsvHistoryStore::new(history_path(&data_dir, &config));

        let settings = CoachSettings {
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            demo_mode: config.demo_mode,
        };
        let coach = CoachService::new(provider, history, settings);

        Ok(Self {
            coach: Arc::new(coach),
            config: Arc::new(config),
            data_dir,
        })
    }
}

/// Construct the configured provider backend.
///
/// A missing API key is fatal unless demo mode is on; demo mode gets a
/// placeholder key so the call-time failure falls through to the canned
/// response.
fn build_provider(config: &AppConfig) -> anyhow::Result<AnyProvider> {
    let api_key = match resolve_api_key(config.provider) {
        Some(key) => key,
        None if config.demo_mode => SecretString::from("demo-placeholder"),
        None => anyhow::bail!(
            "missing API key: set {} or DAYLIFT_API_KEY, or enable demo_mode",
            provider_key_var(config.provider)
        ),
    };

    let provider = match config.provider {
        ProviderKind::Openai => {
            let mut compat = openai_defaults(api_key.expose_secret(), &config.model);
            if let Some(ref base_url) = config.base_url {
                compat.base_url = base_url.clone();
            }
            compat.timeout_secs = config.timeout_secs;
            AnyProvider::OpenAiCompatible(OpenAiCompatibleProvider::new(compat))
        }
        ProviderKind::Gemini => {
            let mut compat = gemini_defaults(api_key.expose_secret(), &config.model);
            if let Some(ref base_url) = config.base_url {
                compat.base_url = base_url.clone();
            }
            compat.timeout_secs = config.timeout_secs;
            AnyProvider::OpenAiCompatible(OpenAiCompatibleProvider::new(compat))
        }
        ProviderKind::GeminiNative => {
            let mut provider =
                GeminiProvider::new(api_key, config.model.clone(), config.timeout_secs);
            if let Some(ref base_url) = config.base_url {
                provider = provider.with_base_url(base_url.clone());
            }
            AnyProvider::GeminiNative(provider)
        }
    };

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use daylift_core::llm::LlmProvider;

    fn config_with(provider: ProviderKind, demo_mode: bool) -> AppConfig {
        AppConfig {
            provider,
            demo_mode,
            ..Default::default()
        }
    }

    #[test]
    fn demo_mode_builds_provider_without_key() {
        // SAFETY: serial test; clearing unset vars is harmless.
        unsafe {
            std::env::remove_var("DAYLIFT_API_KEY");
            std::env::remove_var("OPENAI_API_KEY");
        }
        let provider = build_provider(&config_with(ProviderKind::Openai, true)).unwrap();
        assert_eq!(provider.name(), "openai");
    }

    #[test]
    fn missing_key_without_demo_mode_is_fatal() {
        // SAFETY: serial test; clearing unset vars is harmless.
        unsafe {
            std::env::remove_var("DAYLIFT_API_KEY");
            std::env::remove_var("GEMINI_API_KEY");
        }
        let err = build_provider(&config_with(ProviderKind::GeminiNative, false)).unwrap_err();
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }
}
