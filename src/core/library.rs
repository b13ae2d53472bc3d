use std::fmt;
use std::fmt::{Display, Formatter};

// reason codes attached to validation errors
pub const MALFORMED_IDENTIFIER: &str = "MalformedIdentifier";
pub const EMPTY_TITLE: &str = "EmptyTitle";

#[derive(Debug)]
pub enum LibraryError {
    Storage {
        message: String,
        reason_code: Option<String>,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // The bibliographic service could not be reached or answered with something
    // unusable. Distinct from NotFound: the record may well exist upstream.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
}

impl LibraryError {
    pub fn storage(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Storage { message: message.to_string(), reason_code }
    }

    pub fn duplicate_key(message: &str) -> LibraryError {
        LibraryError::DuplicateKey { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn malformed_identifier(isbn: &str) -> LibraryError {
        LibraryError::validation(
            format!("malformed isbn {:?}", isbn).as_str(), Some(MALFORMED_IDENTIFIER.to_string()))
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    // Maps an upstream http status to an error, 404 being the only status that
    // means the record does not exist.
    pub fn from_upstream_status(message: &str, status: u16) -> LibraryError {
        if status == 404 {
            LibraryError::not_found(
                format!("not found upstream {:?} {}", message, status).as_str())
        } else {
            LibraryError::unavailable(
                format!("upstream error {:?} {}", message, status).as_str(), Some(status.to_string()))
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LibraryError::NotFound { .. })
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::storage(
            format!("file io {:?}", err).as_str(), Some(format!("{:?}", err.kind())))
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return LibraryError::from_upstream_status(format!("{}", err).as_str(), status.as_u16());
        }
        let reason = if err.is_timeout() {
            "Timeout"
        } else if err.is_connect() {
            "Connect"
        } else if err.is_decode() {
            "Decode"
        } else {
            "Request"
        };
        LibraryError::unavailable(format!("{}", err).as_str(), Some(reason.to_string()))
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Storage { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::DuplicateKey { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::CurrentlyUnavailable { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog.
pub type LibraryResult<T> = Result<T, LibraryError>;
