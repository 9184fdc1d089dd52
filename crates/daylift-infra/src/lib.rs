//! Infrastructure layer for Daylift.
//!
//! Contains implementations of the port traits defined in `daylift-core`:
//! LLM provider clients (OpenAI-compatible and native Gemini), the CSV
//! history store, configuration loading, and env-var API-key resolution.

pub mod config;
pub mod history;
pub mod llm;
pub mod secret;
