//! Error types for the Freesound API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Freesound API.
#[derive(Debug, Error)]
pub enum FreesoundError {
    /// HTTP transport error (connection refused, DNS failure, timeout, TLS
    /// failure, etc.) — no HTTP response was obtained.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API rejected the call with its own error envelope
    /// (`{"status_code": …, "explanation": …}`).
    ///
    /// Common codes:
    /// - `401` — missing or invalid API key
    /// - `404` — no such sound/user/pack
    /// - `429` — request quota exceeded
    #[error("API error (code {code}): {message}")]
    Api {
        /// Status code reported by the service (may differ from the HTTP
        /// status).
        code: i64,
        /// Human-readable explanation from the service.
        message: String,
    },

    /// Non-200 HTTP response whose body is not the expected error envelope.
    /// Carries the raw HTTP status and body text.
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// A 200 response whose body failed to parse as JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Invalid client configuration (bad header name/value, bad proxy URL).
    #[error("invalid client configuration: {0}")]
    Config(String),
}

/// Convenience alias for `Result<T, FreesoundError>`.
pub type Result<T> = std::result::Result<T, FreesoundError>;

/// Diagnostic record of the most recent failed call.
///
/// Retrieved from [`FreesoundClient::last_error`](crate::FreesoundClient::last_error).
/// For [`FreesoundError::Api`] this is the service's own code and
/// explanation; for a non-envelope HTTP failure the HTTP status and raw
/// body. Transport and decode failures record code `0` (no service status
/// was obtained) with the error's display text as the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastError {
    /// Error code (service status code, HTTP status, or `0`).
    pub code: i64,
    /// Human-readable diagnostic.
    pub message: String,
}

impl From<&FreesoundError> for LastError {
    fn from(err: &FreesoundError) -> Self {
        match err {
            FreesoundError::Api { code, message } => Self {
                code: *code,
                message: message.clone(),
            },
            FreesoundError::Status { status, body } => Self {
                code: i64::from(*status),
                message: body.clone(),
            },
            _ => Self {
                code: 0,
                message: err.to_string(),
            },
        }
    }
}
