//! # Knowledge Store Module
//!
//! ## Purpose
//! Loads the legal document knowledge base from a JSON file at startup and
//! holds it as immutable, insertion-ordered reference data for the lifetime
//! of the process.
//!
//! ## Input/Output Specification
//! - **Input**: JSON file with a `knowledge_base` array of documents
//! - **Output**: Read-only document sequence shared across request handlers
//! - **Recovery**: Missing or unparseable files fall back to built-in documents
//!
//! ## Key Features
//! - One-time load, no write path
//! - Deterministic field defaults for partially specified records
//! - Built-in three-document fallback set so answering always works

use crate::errors::{QaError, Result};
use crate::Document;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// On-disk knowledge base layout
#[derive(Debug, Default, Serialize, Deserialize)]
struct KnowledgeFile {
    #[serde(default)]
    knowledge_base: Vec<Document>,
}

/// Immutable, insertion-ordered collection of legal documents
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    documents: Vec<Document>,
}

impl KnowledgeStore {
    /// Load the knowledge base from a JSON file.
    ///
    /// A missing, unreadable, or malformed file is not fatal: the built-in
    /// document set is substituted so the responder stays callable. A file
    /// that parses but lacks the `knowledge_base` field yields an empty store.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::read_file(path) {
            Ok(documents) => {
                info!("Loaded {} legal documents from {:?}", documents.len(), path);
                Self { documents }
            }
            Err(e) => {
                warn!(
                    category = e.category(),
                    "Knowledge base unavailable ({}), using built-in documents", e
                );
                Self::builtin()
            }
        }
    }

    /// Construct a store from documents already in memory.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// The built-in fallback document set.
    pub fn builtin() -> Self {
        Self {
            documents: builtin_documents(),
        }
    }

    fn read_file(path: &Path) -> Result<Vec<Document>> {
        let raw = std::fs::read_to_string(path).map_err(|e| QaError::KnowledgeLoad {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;

        let file: KnowledgeFile =
            serde_json::from_str(&raw).map_err(|e| QaError::DataParsing {
                details: e.to_string(),
            })?;

        Ok(file.knowledge_base)
    }

    /// Number of documents in the store
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// All documents in insertion order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Total word count across all document contents
    pub fn total_words(&self) -> usize {
        self.documents
            .iter()
            .map(|doc| doc.content.split_whitespace().count())
            .sum()
    }

    /// Serialize the store back to the on-disk JSON layout
    pub fn to_json(&self) -> Result<String> {
        let file = KnowledgeFile {
            knowledge_base: self.documents.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

/// The three documents every deployment can answer from, even with no
/// knowledge base file present.
fn builtin_documents() -> Vec<Document> {
    vec![
        Document {
            id: "ipc_302".to_string(),
            title: "Section 302 IPC - Murder".to_string(),
            content: "Section 302 IPC deals with punishment for murder. Whoever commits \
                      murder shall be punished with death, or imprisonment for life, and \
                      shall also be liable to fine."
                .to_string(),
            keywords: vec![
                "murder".to_string(),
                "section 302".to_string(),
                "ipc".to_string(),
                "death penalty".to_string(),
                "life imprisonment".to_string(),
            ],
            accuracy_score: 100,
        },
        Document {
            id: "crpc_154".to_string(),
            title: "Section 154 CrPC - FIR Registration".to_string(),
            content: "Section 154 CrPC mandates registration of FIR for cognizable \
                      offenses. Every information relating to the commission of a \
                      cognizable offense must be reduced to writing."
                .to_string(),
            keywords: vec![
                "fir".to_string(),
                "section 154".to_string(),
                "crpc".to_string(),
                "police".to_string(),
                "cognizable".to_string(),
            ],
            accuracy_score: 100,
        },
        Document {
            id: "article_21".to_string(),
            title: "Article 21 - Right to Life and Personal Liberty".to_string(),
            content: "Article 21 of the Constitution states that no person shall be \
                      deprived of his life or personal liberty except according to \
                      procedure established by law."
                .to_string(),
            keywords: vec![
                "article 21".to_string(),
                "constitution".to_string(),
                "right to life".to_string(),
                "personal liberty".to_string(),
            ],
            accuracy_score: 100,
        },
    ]
}
