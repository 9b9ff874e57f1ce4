//! # Legal Question Answering Engine
//!
//! ## Overview
//! This library implements a lightweight question-answering engine for legal
//! questions. Free-text queries are scored against a small in-memory knowledge
//! base of short legal documents using additive keyword overlap, and the best
//! match is returned as a formatted markdown response.
//!
//! ## Architecture
//! The system is composed of several key modules:
//! - `knowledge`: Knowledge store loading and the built-in fallback documents
//! - `text`: Case folding and whitespace tokenization
//! - `scoring`: Keyword/title/content overlap scoring and top-k selection
//! - `responder`: Query orchestration and response formatting
//! - `api`: REST API endpoints
//! - `config`: Configuration management and settings
//! - `errors`: Centralized error handling and types
//!
//! ## Input/Output Specification
//! - **Input**: Knowledge base documents (JSON), legal questions (text)
//! - **Output**: Structured query results with confidence and quality grading
//! - **Performance**: Single-pass linear scan, deterministic results
//!
//! ## Usage
//! ```rust,no_run
//! use legal_qa_engine::{Config, KnowledgeStore, QueryResponder};
//! use std::sync::Arc;
//!
//! let config = Config::from_file("config.toml")?;
//! let store = Arc::new(KnowledgeStore::load(&config.knowledge.path));
//! let responder = QueryResponder::new(store, &config.responder);
//! let result = responder.answer("What is Section 302 IPC?");
//! println!("{} ({})", result.quality_grade, result.confidence);
//! # Ok::<(), legal_qa_engine::QaError>(())
//! ```

// Core modules
pub mod config;
pub mod errors;
pub mod knowledge;
pub mod text;
pub mod scoring;
pub mod responder;
pub mod api;

// Utilities
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use errors::{QaError, Result};
pub use knowledge::KnowledgeStore;
pub use responder::{QueryResponder, QueryResult};

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Version string stamped into every query result
pub const SYSTEM_VERSION: &str = "2.0";

/// A single legal document in the knowledge base
///
/// Every field defaults when absent from the source JSON, so partially
/// specified records resolve deterministically at load time instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable document identifier (uniqueness expected, not enforced)
    #[serde(default)]
    pub id: String,
    /// Document title, shown as the response heading
    #[serde(default)]
    pub title: String,
    /// Full document text
    #[serde(default)]
    pub content: String,
    /// Keywords matched as substrings of the folded query
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Static expert-assigned accuracy score (0-100)
    #[serde(default)]
    pub accuracy_score: u32,
}

/// Application state shared across API handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Config>,
    pub store: Arc<knowledge::KnowledgeStore>,
    pub responder: Arc<responder::QueryResponder>,
}
