//! Application configuration types.
//!
//! [`AppConfig`] is deserialized from `{data_dir}/config.toml` by
//! `daylift-infra`; every field has a serde default so a missing or partial
//! file still yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which generative-text backend to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// OpenAI chat completions.
    Openai,
    /// Google Gemini via its OpenAI-compatible beta endpoint.
    Gemini,
    /// Google Gemini via the native `generateContent` REST API.
    GeminiNative,
}

impl Default for ProviderKind {
    fn default() -> Self {
        ProviderKind::Openai
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderKind::Openai => write!(f, "openai"),
            ProviderKind::Gemini => write!(f, "gemini"),
            ProviderKind::GeminiNative => write!(f, "gemini_native"),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::Openai),
            "gemini" => Ok(ProviderKind::Gemini),
            "gemini_native" => Ok(ProviderKind::GeminiNative),
            other => Err(format!("invalid provider kind: '{other}'")),
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend to use for completions.
    #[serde(default)]
    pub provider: ProviderKind,

    /// Model identifier passed to the provider.
    #[serde(default = "default_model")]
    pub model: String,

    /// Override the provider's default base URL (testing, proxies).
    #[serde(default)]
    pub base_url: Option<String>,

    /// Outbound request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum tokens requested per completion.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// When true, provider failures fall back to a canned response
    /// instead of surfacing an error.
    #[serde(default)]
    pub demo_mode: bool,

    /// History CSV filename, relative to the data directory unless absolute.
    #[serde(default = "default_history_file")]
    pub history_file: String,

    /// Optional static service token for the HTTP API. Unset = open API.
    #[serde(default)]
    pub token: Option<String>,
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_max_tokens() -> u32 {
    300
}

fn default_temperature() -> f64 {
    0.7
}

fn default_history_file() -> String {
    "mood_history.csv".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::default(),
            model: default_model(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            demo_mode: false,
            history_file: default_history_file(),
            token: None,
        }
    }
}
