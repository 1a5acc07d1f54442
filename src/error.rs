//! Error types for the contactkit library.
//!
//! The text transformations are total and never construct errors; everything
//! here exists for the address-verification collaborator, categorized by
//! source with enough context to report and recover.

use std::fmt;

/// Result type alias for contactkit operations.
pub type ContactResult<T> = Result<T, ContactError>;

/// Error type for operations that can fail.
///
/// Transport and decoding failures from the geocoding service keep their
/// underlying source where one exists. Precondition failures never reach
/// this type: an unroutable query resolves to no result, not an error.
#[derive(Debug)]
pub enum ContactError {
    /// HTTP transport failure while contacting the geocoding service
    Http {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The geocoding service answered with a body we could not interpret
    MalformedResponse { reason: String },
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { message, .. } => {
                write!(f, "HTTP error: {}", message)
            }
            Self::MalformedResponse { reason } => {
                write!(f, "Malformed geocoding response: {}", reason)
            }
        }
    }
}

impl std::error::Error for ContactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn std::error::Error + 'static)),
            _ => None,
        }
    }
}

// Conversion implementations for common error types
impl From<reqwest::Error> for ContactError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for ContactError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse {
            reason: err.to_string(),
        }
    }
}
