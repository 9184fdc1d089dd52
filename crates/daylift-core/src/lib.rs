//! Business logic and port trait definitions for Daylift.
//!
//! This crate defines the "ports" (provider and history traits) that the
//! infrastructure layer implements, plus the pure logic: the response text
//! normalizer, the streak counter, the prompt builder, and the coach
//! service orchestrating one interaction. It depends only on
//! `daylift-types` -- never on `daylift-infra` or any HTTP/IO crate.

pub mod coach;
pub mod history;
pub mod llm;
pub mod normalize;
pub mod prompt;
pub mod streak;
