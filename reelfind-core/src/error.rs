//! Error types for reelfind operations

use serde::Serialize;

/// Structured error payload printed by the CLI in `--json` mode.
#[derive(Debug, Clone, Serialize, serde::Deserialize)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl From<&ReelfindError> for ErrorEnvelope {
    fn from(err: &ReelfindError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReelfindError {
    #[error("Unknown search mode '{0}' (expected one of: title, rating, budget, country, language)")]
    UnknownMode(String),

    #[error("Invalid rating '{0}': expected a number between 0 and 10")]
    InvalidRating(String),

    #[error("Search failed: could not reach service: {message}")]
    Transport { message: String },

    #[error("Search failed: service returned HTTP {status}")]
    Status { status: u16, body: String },

    #[error("Search failed: unexpected response body: {message}")]
    MalformedBody { message: String },

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error returned by a search invocation.
///
/// Network failures and input errors share one type; use
/// [`ReelfindError::is_search_failure`] to tell them apart.
pub type SearchError = ReelfindError;

impl ReelfindError {
    /// True for the three ways the outbound request itself can fail.
    pub fn is_search_failure(&self) -> bool {
        matches!(
            self,
            ReelfindError::Transport { .. }
                | ReelfindError::Status { .. }
                | ReelfindError::MalformedBody { .. }
        )
    }

    /// Short machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ReelfindError::UnknownMode(_) => "unknown_mode",
            ReelfindError::InvalidRating(_) => "invalid_rating",
            ReelfindError::Transport { .. } => "connection_error",
            ReelfindError::Status { .. } => "http_status",
            ReelfindError::MalformedBody { .. } => "parse_error",
            ReelfindError::ConfigParse(_) => "config_error",
            ReelfindError::Io(_) => "io_error",
            ReelfindError::Serialization(_) => "serialization_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_failure_kinds() {
        assert!(ReelfindError::Transport {
            message: "refused".into()
        }
        .is_search_failure());
        assert!(ReelfindError::Status {
            status: 500,
            body: String::new()
        }
        .is_search_failure());
        assert!(ReelfindError::MalformedBody {
            message: "not an array".into()
        }
        .is_search_failure());
        assert!(!ReelfindError::UnknownMode("genre".into()).is_search_failure());
        assert!(!ReelfindError::InvalidRating("abc".into()).is_search_failure());
    }

    #[test]
    fn test_envelope_from_error() {
        let err = ReelfindError::Status {
            status: 404,
            body: "not found".into(),
        };
        let envelope = ErrorEnvelope::from(&err);
        assert_eq!(envelope.code, "http_status");
        assert_eq!(envelope.message, "Search failed: service returned HTTP 404");
    }
}
