use thiserror::Error;

use crate::llm::LlmError;

/// Errors related to history persistence.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("io error: {0}")]
    Io(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for HistoryError {
    fn from(e: std::io::Error) -> Self {
        HistoryError::Io(e.to_string())
    }
}

/// Errors from one coaching interaction.
#[derive(Debug, Error)]
pub enum CoachError {
    #[error("name must not be empty")]
    MissingName,

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    History(#[from] HistoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_error_display() {
        let err = HistoryError::Storage("bad row".to_string());
        assert_eq!(err.to_string(), "storage error: bad row");
    }

    #[test]
    fn test_coach_error_wraps_llm_error() {
        let err: CoachError = LlmError::AuthenticationFailed.into();
        assert_eq!(err.to_string(), "authentication failed");
    }
}
