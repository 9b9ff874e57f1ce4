//! # Configuration Management Module
//!
//! ## Purpose
//! Centralized configuration management for the legal QA engine, supporting
//! configuration files and environment variables with validation and
//! type-safe access to all system settings.
//!
//! ## Input/Output Specification
//! - **Input**: Configuration files (TOML), environment variables, CLI arguments
//! - **Output**: Validated configuration structs with defaults and overrides
//! - **Validation**: Type checking, range validation
//!
//! ## Configuration Sources (in order of precedence)
//! 1. Command line arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration files
//! 4. Default values (lowest priority)
//!
//! ## Usage
//! ```rust,no_run
//! use legal_qa_engine::config::Config;
//!
//! let config = Config::from_file("config.toml")?;
//! println!("Server port: {}", config.server.port);
//! # Ok::<(), legal_qa_engine::QaError>(())
//! ```

use crate::errors::{QaError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure containing all system settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Server and API configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Knowledge base settings
    #[serde(default)]
    pub knowledge: KnowledgeConfig,
    /// Query responder behavior
    #[serde(default)]
    pub responder: ResponderConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server and API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server bind address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Enable permissive CORS for web frontends
    pub enable_cors: bool,
    /// Number of HTTP worker threads
    pub workers: usize,
}

/// Knowledge base configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeConfig {
    /// Path to the knowledge base JSON file
    pub path: PathBuf,
}

/// Query responder configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponderConfig {
    /// Maximum number of scored matches retained per query
    pub max_results: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Enable structured JSON logging
    pub json_format: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            enable_cors: true,
            workers: num_cpus::get(),
        }
    }
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./data/knowledge_base.json"),
        }
    }
}

impl Default for ResponderConfig {
    fn default() -> Self {
        Self { max_results: 3 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::from_file("config.toml")
    }

    /// Load configuration from a specific file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Configuration file not found: {:?}, using defaults", path);
            let mut config = Self::default();
            config.apply_env_overrides()?;
            config.validate()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(path).map_err(|e| QaError::Config {
            message: format!("Failed to read config file {:?}: {}", path, e),
        })?;

        let mut config: Config = toml::from_str(&content).map_err(|e| QaError::Config {
            message: format!("Failed to parse config file {:?}: {}", path, e),
        })?;

        // Apply environment variable overrides
        config.apply_env_overrides()?;

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("LEGAL_QA_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("LEGAL_QA_PORT") {
            self.server.port = port.parse().map_err(|_| QaError::Config {
                message: "Invalid port number in LEGAL_QA_PORT".to_string(),
            })?;
        }
        if let Ok(kb_path) = std::env::var("LEGAL_QA_KNOWLEDGE_PATH") {
            self.knowledge.path = PathBuf::from(kb_path);
        }

        Ok(())
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(QaError::ValidationFailed {
                field: "server.port".to_string(),
                reason: "Port cannot be zero".to_string(),
            });
        }

        if self.server.workers == 0 {
            return Err(QaError::ValidationFailed {
                field: "server.workers".to_string(),
                reason: "Worker count cannot be zero".to_string(),
            });
        }

        if self.responder.max_results == 0 {
            return Err(QaError::ValidationFailed {
                field: "responder.max_results".to_string(),
                reason: "Result limit cannot be zero".to_string(),
            });
        }

        Ok(())
    }

    /// Get configuration as TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| QaError::Config {
            message: format!("Failed to serialize config to TOML: {}", e),
        })
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
