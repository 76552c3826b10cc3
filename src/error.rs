//! Error handling.
//!
//! This module provides a custom error type for the project.

use colored::*;
use std::fmt;

/// Result type alias for the filter application.
pub type Result<T> = std::result::Result<T, FilterError>;

/// Main error type for the filter application.
#[derive(Debug)]
pub enum FilterError {
    /// Invalid command line arguments.
    /// This allows you to store a more detailed message explaining why the arguments were invalid.
    InvalidArguments(String),

    /// IO error.
    IoError(std::io::Error),

    /// TUI rendering error.
    TuiError(String),

    /// Input validation error.
    InvalidInput(String),

    /// A markup pattern failed to compile.
    InvalidPattern { pattern: String, reason: String },

    /// Terminal related error.
    TerminalError(String),

    /// File access error.
    FileAccessError { path: String, reason: String },

    /// No `<table>` with the requested id in the document.
    TableNotFound { id: String },

    /// Config file could not be read or parsed.
    ConfigError { path: String, reason: String },

    /// Bootstrap URL could not be parsed.
    InvalidUrl { url: String, reason: String },
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let warn_msg = match self {
            FilterError::InvalidArguments(msg) => format!("Invalid arguments: {}", msg),
            FilterError::IoError(err) => format!("IO error: {}", err),
            FilterError::TuiError(err) => format!("TUI error: {}", err),
            FilterError::InvalidInput(err) => format!("Invalid input: {}", err),
            FilterError::InvalidPattern { pattern, reason } => {
                format!("Invalid markup pattern: {}\n reason: {}", pattern, reason)
            }
            FilterError::TerminalError(err) => format!(
                "Terminal error: {}\n Try running in a proper terminal.",
                err
            ),
            FilterError::FileAccessError { path, reason } => {
                format!("File access error: Path: {}\n Reason: {}", path, reason)
            }
            FilterError::TableNotFound { id } => {
                format!("Table not found: no <table id=\"{}\"> in document", id)
            }
            FilterError::ConfigError { path, reason } => {
                format!("Config error: Path: {}\n Reason: {}", path, reason)
            }
            FilterError::InvalidUrl { url, reason } => {
                format!("Invalid URL: {}\n reason: {}", url, reason)
            }
        };
        write!(f, "{}", warn_msg.red().bold())
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilterError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FilterError {
    fn from(err: std::io::Error) -> Self {
        FilterError::IoError(err)
    }
}

impl FilterError {
    /// Create a terminal error with context
    pub fn terminal_error(err: &str) -> Self {
        FilterError::TerminalError(err.to_string())
    }

    /// Create a file access error with context
    pub fn file_access_error(path: &str, reason: &str) -> Self {
        FilterError::FileAccessError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a invalid pattern error
    pub fn invalid_pattern(pattern: &str, reason: &str) -> Self {
        FilterError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a config error with context
    pub fn config_error(path: &str, reason: &str) -> Self {
        FilterError::ConfigError {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get user-friendly recovery suggestion
    pub fn get_recovery_suggestion(&self) -> Option<String> {
        match self {
            FilterError::InvalidInput(..) => {
                Some("Shorten the phrase or raise query.max_phrase_length.".to_string())
            }
            FilterError::InvalidUrl { .. } => {
                Some("Pass the page URL quoted, or use --phrase instead.".to_string())
            }
            FilterError::FileAccessError { .. } => {
                Some("Check file permissions and try again.".to_string())
            }
            FilterError::TableNotFound { .. } => {
                Some("Pass the table's id attribute with --table-id.".to_string())
            }
            FilterError::ConfigError { .. } => {
                Some("Fix or remove the config file; defaults apply without one.".to_string())
            }
            _ => None,
        }
    }
}
