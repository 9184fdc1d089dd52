//! HTTP request handlers.

pub mod advice;
pub mod chat;
pub mod history;
pub mod validate;
