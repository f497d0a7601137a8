/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/11/25
******************************************************************************/

//! Error types for the Trading212 client
//!
//! A single flat [`AppError`] enum covers every failure path in the crate.
//! Validation errors are produced by the request builders before any network
//! I/O; the remaining variants are terminal outcomes of the gateway transport.

use reqwest::StatusCode;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// A domain request failed local validation and never reached the network
    Validation {
        /// The offending field, named as it appears on the wire
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
    /// The remote API permanently refused the request (4xx other than 429)
    Rejected {
        /// HTTP status returned by the remote API
        status: StatusCode,
        /// Error message extracted from the remote response body
        message: String,
    },
    /// A 2xx response body did not match the expected shape
    Deserialization(String),
    /// Transient failures (timeout, 5xx, 429) persisted through the retry budget
    TransientExhausted {
        /// Status of the last failed attempt, if a response was received at all
        last_status: Option<StatusCode>,
        /// Number of dispatch attempts made
        attempts: u32,
    },
    /// Required configuration is missing or malformed at startup
    Config(String),
    /// Transport-level error from the HTTP client
    Http(reqwest::Error),
    /// JSON serialization or deserialization error
    Json(serde_json::Error),
    /// I/O error
    Io(std::io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation { field, reason } => {
                write!(f, "validation error: {field}: {reason}")
            }
            AppError::Rejected { status, message } => {
                write!(f, "request rejected ({}): {message}", status.as_u16())
            }
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::TransientExhausted {
                last_status,
                attempts,
            } => match last_status {
                Some(status) => write!(
                    f,
                    "transient failure exhausted after {attempts} attempts (last status {})",
                    status.as_u16()
                ),
                None => write!(
                    f,
                    "transient failure exhausted after {attempts} attempts (no response)"
                ),
            },
            AppError::Config(msg) => write!(f, "configuration error: {msg}"),
            AppError::Http(e) => write!(f, "http error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Http(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Http(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl AppError {
    /// Convenience constructor for validation failures
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Returns true if this error was resolved before any network call
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation { .. })
    }
}
