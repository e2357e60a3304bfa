//! Error types and handling infrastructure for touchdash.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types and `anyhow` for application-level error handling with context.
//!
//! ## Design Principles
//!
//! - **User-friendly messages**: Errors should provide actionable feedback
//! - **Non-fatal by default**: poll and export failures surface as notifications,
//!   never crash the dashboard or stop the polling loop
//! - **Consistency**: Standardized Result type across all modules

use thiserror::Error;

/// The main error type for touchdash operations.
///
/// This enum covers all possible error conditions that can occur while
/// polling the device, exporting logs, and driving the terminal UI.
#[derive(Error, Debug)]
pub enum TouchdashError {
    /// Transport error or non-parseable response from the device endpoint
    #[error("Request failed: {message}")]
    Network { message: String },

    /// Export attempted while the event log is empty
    #[error("No data to export")]
    NoData,

    /// CSV serialization or file write failure during export
    #[error("Export failed: {message}")]
    Export { message: String },

    /// Generic I/O errors (terminal setup, file creation, etc.)
    #[error("I/O operation failed: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    Ui { message: String },

    /// Invalid command line arguments
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for touchdash operations.
///
/// This type alias provides a consistent error handling interface across
/// all modules in the touchdash codebase.
pub type Result<T> = std::result::Result<T, TouchdashError>;

impl TouchdashError {
    /// Create a Network error with a descriptive message
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create an Export error with a descriptive message
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    /// Create an Io error from an io::Error with additional context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a Ui error with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::Ui {
            message: message.into(),
        }
    }

    /// Create an InvalidArgument error with a descriptive message
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

// Automatic conversion from io::Error to TouchdashError
impl From<std::io::Error> for TouchdashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: "IO operation failed".to_string(),
            source: err,
        }
    }
}

// Transport and body-decoding errors both collapse into the Network kind;
// the dashboard treats them identically (notify, keep polling).
impl From<reqwest::Error> for TouchdashError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for TouchdashError {
    fn from(err: csv::Error) -> Self {
        Self::Export {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let network = TouchdashError::network("connection refused");
        assert_eq!(network.to_string(), "Request failed: connection refused");

        let no_data = TouchdashError::NoData;
        assert_eq!(no_data.to_string(), "No data to export");

        let export = TouchdashError::export("disk full");
        assert_eq!(export.to_string(), "Export failed: disk full");
    }

    #[test]
    fn test_error_constructors() {
        let network_err = TouchdashError::network("timed out");
        assert!(matches!(network_err, TouchdashError::Network { .. }));

        let ui_err = TouchdashError::ui("Terminal resize failed");
        assert!(matches!(ui_err, TouchdashError::Ui { .. }));

        let other_err = TouchdashError::other("Unknown error");
        assert!(matches!(other_err, TouchdashError::Other { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let dash_err: TouchdashError = io_err.into();

        match dash_err {
            TouchdashError::Io { message, .. } => {
                assert_eq!(message, "IO operation failed");
            }
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        let result = returns_result();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "success");
    }
}
