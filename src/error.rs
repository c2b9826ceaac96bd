//! Error types and handling infrastructure for wardview.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. The binary layers `anyhow` on top for context at the CLI boundary.
//!
//! ## Design Principles
//!
//! - **User-friendly messages**: Errors should provide actionable feedback
//! - **Context preservation**: Include the offending path, record or field
//! - **Consistency**: Standardized Result type across all modules
//!
//! Engine operations (filtering, column layout, detail selection) are total and never
//! produce these errors; they only arise while loading data, reading configuration or
//! driving the terminal.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for wardview operations.
#[derive(Error, Debug)]
pub enum WardviewError {
    /// File system related errors (permission denied, read failures, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found specifically (common case for user feedback)
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Path exists but is not a regular file
    #[error("Path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// The record file is not valid JSON or does not match the record layout
    #[error("Failed to parse records from {path}: {source}")]
    RecordParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A record parsed but carries a value the model rejects
    #[error("Invalid record {record_id}: {field} {message}")]
    InvalidRecord {
        record_id: String,
        field: &'static str,
        message: String,
    },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Configuration file or value errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

}

/// Standard Result type for wardview operations.
pub type Result<T> = std::result::Result<T, WardviewError>;

impl WardviewError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create an InvalidRecord error for a specific record field
    pub fn invalid_record(
        record_id: impl Into<String>,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidRecord {
            record_id: record_id.into(),
            field,
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }
}
