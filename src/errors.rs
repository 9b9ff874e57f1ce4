//! # Error Handling Module
//!
//! ## Purpose
//! Centralized error handling for the legal QA engine, providing structured
//! error types and conversion utilities for all system components.
//!
//! ## Input/Output Specification
//! - **Input**: Error conditions from various system components
//! - **Output**: Structured error types with context
//! - **Error Categories**: Configuration, Knowledge, Validation, Generic
//!
//! ## Key Features
//! - Error types with detailed context
//! - Automatic error conversion and chaining
//! - Structured logging integration via error categories
//!
//! ## Usage
//! ```rust
//! use legal_qa_engine::errors::{Result, QaError};
//!
//! fn load_operation() -> Result<Vec<String>> {
//!     Err(QaError::KnowledgeLoad {
//!         path: "knowledge_base.json".to_string(),
//!         details: "file not found".to_string(),
//!     })
//! }
//! ```

use thiserror::Error;

/// Result type used throughout the application
pub type Result<T> = std::result::Result<T, QaError>;

/// Error types for the legal QA engine
#[derive(Debug, Error)]
pub enum QaError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Knowledge base file could not be read
    #[error("Failed to load knowledge base from {path}: {details}")]
    KnowledgeLoad { path: String, details: String },

    /// Knowledge base file could not be parsed
    #[error("Failed to parse knowledge base data: {details}")]
    DataParsing { details: String },

    /// Validation errors
    #[error("Validation failed for field '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    /// Generic I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Internal system errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl QaError {
    /// Get error category for metrics and logging
    pub fn category(&self) -> &'static str {
        match self {
            QaError::Config { .. } | QaError::Toml(_) => "configuration",
            QaError::KnowledgeLoad { .. }
            | QaError::DataParsing { .. }
            | QaError::Json(_) => "knowledge",
            QaError::ValidationFailed { .. } => "validation",
            QaError::Io(_) => "io",
            QaError::Internal { .. } => "generic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = QaError::KnowledgeLoad {
            path: "kb.json".to_string(),
            details: "missing".to_string(),
        };
        assert_eq!(err.category(), "knowledge");

        let err = QaError::Config {
            message: "bad port".to_string(),
        };
        assert_eq!(err.category(), "configuration");
    }

    #[test]
    fn test_error_display_includes_context() {
        let err = QaError::KnowledgeLoad {
            path: "kb.json".to_string(),
            details: "file not found".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("kb.json"));
        assert!(rendered.contains("file not found"));
    }
}
