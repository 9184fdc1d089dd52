//! Shared domain types for Daylift.
//!
//! This crate contains the core domain types used across the Daylift
//! service: advice requests and results, motivation records, LLM
//! request/response shapes, configuration, and their error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod advice;
pub mod config;
pub mod error;
pub mod llm;
pub mod record;
