//! Error types for rolodeck.
//!
//! This module defines all error types used throughout the rolodeck crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for rolodeck operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// No contact with the requested identifier exists.
    #[error("contact {id} not found")]
    ContactNotFound {
        /// The identifier that was looked up.
        id: String,
    },

    /// Failed to read the contact document.
    #[error("failed to read contact document at {path}: {source}")]
    DocumentRead {
        /// Path to the document file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the contact document.
    #[error("failed to write contact document at {path}: {source}")]
    DocumentWrite {
        /// Path to the document file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The contact document is not valid JSON.
    #[error("contact document at {path} is not valid JSON: {source}")]
    DocumentParse {
        /// Path to the document file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Server Errors ===
    /// The HTTP listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The address that could not be bound.
        addr: SocketAddr,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for rolodeck operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a not-found error for the given contact identifier.
    #[must_use]
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::ContactNotFound { id: id.into() }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }

    /// Check if this error means the requested contact does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContactNotFound { .. })
    }

    /// Check if this error originated in the contact document on disk.
    #[must_use]
    pub fn is_document_error(&self) -> bool {
        matches!(
            self,
            Self::DocumentRead { .. } | Self::DocumentWrite { .. } | Self::DocumentParse { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::not_found("42");
        assert_eq!(err.to_string(), "contact 42 not found");

        let err = Error::config_validation("bad port");
        assert_eq!(err.to_string(), "invalid configuration: bad port");
    }

    #[test]
    fn test_error_is_not_found() {
        assert!(Error::not_found("1").is_not_found());
        assert!(!Error::config_validation("oops").is_not_found());
    }

    #[test]
    fn test_error_is_document_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DocumentRead {
            path: PathBuf::from("/data/contacts.json"),
            source: io_err,
        };
        assert!(err.is_document_error());
        assert!(!Error::not_found("1").is_document_error());
    }

    #[test]
    fn test_document_read_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DocumentRead {
            path: PathBuf::from("/data/contacts.json"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/contacts.json"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_document_write_error_display() {
        let io_err = std::io::Error::other("disk full");
        let err = Error::DocumentWrite {
            path: PathBuf::from("/data/contacts.json"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/contacts.json"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn test_document_parse_error_display() {
        let json_err = serde_json::from_str::<Vec<i32>>("{ nope").unwrap_err();
        let err = Error::DocumentParse {
            path: PathBuf::from("/data/contacts.json"),
            source: json_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/contacts.json"));
        assert!(msg.contains("not valid JSON"));
    }

    #[test]
    fn test_bind_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let err = Error::Bind {
            addr: "127.0.0.1:3000".parse().unwrap(),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("127.0.0.1:3000"));
        assert!(msg.contains("address in use"));
    }

    #[test]
    fn test_directory_create_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DirectoryCreate {
            path: PathBuf::from("/root/forbidden"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/root/forbidden"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_from_figment_error() {
        let figment_err = figment::Error::from("missing field".to_string());
        let err: Error = figment_err.into();
        assert!(matches!(err, Error::ConfigLoad(_)));
    }

    #[test]
    fn test_config_validation_error_display() {
        let err = Error::ConfigValidation {
            message: "server.bind must specify a non-zero port".to_string(),
        };
        assert!(err.to_string().contains("non-zero port"));
    }
}
