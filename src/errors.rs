use thiserror::Error;

/// Error type that captures currency catalog and configuration failures.
///
/// Formatting never produces one of these; an unresolvable currency degrades
/// the output instead.
#[derive(Debug, Error)]
pub enum CurrencyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid currency record `{code}`: {reason}")]
    InvalidRecord { code: String, reason: String },
}

impl CurrencyError {
    pub(crate) fn invalid(code: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            code: code.to_string(),
            reason: reason.into(),
        }
    }
}
