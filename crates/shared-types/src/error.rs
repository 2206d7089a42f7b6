use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of failures from the remote property service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceErrorKind {
    /// The request never completed (DNS, connect, timeout).
    Network,
    /// The response body could not be decoded into the expected shape.
    Decode,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    /// Any 5xx from the service.
    ServerError,
    /// Anything else (unexpected status codes).
    Unexpected,
}

impl fmt::Display for ServiceErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceErrorKind::Network => write!(f, "Network"),
            ServiceErrorKind::Decode => write!(f, "Decode"),
            ServiceErrorKind::BadRequest => write!(f, "BadRequest"),
            ServiceErrorKind::Unauthorized => write!(f, "Unauthorized"),
            ServiceErrorKind::Forbidden => write!(f, "Forbidden"),
            ServiceErrorKind::NotFound => write!(f, "NotFound"),
            ServiceErrorKind::ServerError => write!(f, "ServerError"),
            ServiceErrorKind::Unexpected => write!(f, "Unexpected"),
        }
    }
}

/// Structured error surfaced by every client operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceError {
    pub kind: ServiceErrorKind,
    pub message: String,
}

impl ServiceError {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: ServiceErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: ServiceErrorKind::Decode,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: ServiceErrorKind::BadRequest,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: ServiceErrorKind::Unauthorized,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: ServiceErrorKind::NotFound,
            message: message.into(),
        }
    }

    /// Map an HTTP status code to an error with the given message.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let kind = match status {
            400 => ServiceErrorKind::BadRequest,
            401 => ServiceErrorKind::Unauthorized,
            403 => ServiceErrorKind::Forbidden,
            404 => ServiceErrorKind::NotFound,
            500..=599 => ServiceErrorKind::ServerError,
            _ => ServiceErrorKind::Unexpected,
        };
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether a retry could plausibly succeed. Only transient failures
    /// (network errors and 5xx) qualify; 4xx are terminal.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            ServiceErrorKind::Network | ServiceErrorKind::ServerError
        )
    }

    /// Whether the caller's session is missing or expired.
    pub fn is_unauthorized(&self) -> bool {
        self.kind == ServiceErrorKind::Unauthorized
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ServiceError {}
