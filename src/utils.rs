//! # Utilities Module
//!
//! ## Purpose
//! Common utility helpers used throughout the legal QA engine for timing
//! and log-friendly text handling.
//!
//! ## Input/Output Specification
//! - **Input**: Various data types requiring common operations
//! - **Output**: Elapsed durations, truncated previews, word counts
//! - **Functions**: Performance helpers, text utilities

use std::time::Instant;

/// Performance timer for measuring operation duration
pub struct Timer {
    start: Instant,
    name: String,
}

/// Text processing utilities
pub struct TextUtils;

impl Timer {
    /// Start a new timer with a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            name: name.into(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Get elapsed time in fractional seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Stop timer, log the duration, and return elapsed fractional seconds
    pub fn stop(self) -> f64 {
        let elapsed = self.elapsed_secs();
        tracing::debug!("Timer '{}' completed in {:.6}s", self.name, elapsed);
        elapsed
    }
}

impl TextUtils {
    /// Truncate text to at most `max_length` characters with ellipsis
    pub fn truncate(text: &str, max_length: usize) -> String {
        if text.chars().count() <= max_length {
            text.to_string()
        } else {
            let kept: String = text
                .chars()
                .take(max_length.saturating_sub(3))
                .collect();
            format!("{}...", kept)
        }
    }

    /// Count whitespace-delimited words in text
    pub fn word_count(text: &str) -> usize {
        text.split_whitespace().count()
    }
}
