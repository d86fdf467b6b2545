//! # Error Types
//!
//! Structured error types for beam_core. These errors carry enough context
//! to understand and fix issues programmatically, and they serialize to JSON
//! so front ends can surface them verbatim.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{EngineError, EngineResult};
//!
//! fn validate_span(span_m: f64) -> EngineResult<()> {
//!     if span_m <= 0.0 {
//!         return Err(EngineError::InvalidInput {
//!             field: "spans".to_string(),
//!             value: span_m.to_string(),
//!             reason: "Span length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Structured error type for the analysis engine.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic handling by the consuming layer.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EngineError {
    /// An input value is invalid (out of range, inconsistent, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Section designation not found in the database
    #[error("Section not found: {designation}")]
    SectionNotFound { designation: String },

    /// Analysis failed (unstable model, singular system, etc.)
    #[error("Analysis failed: {stage} - {reason}")]
    AnalysisFailed { stage: String, reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl EngineError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SectionNotFound error
    pub fn section_not_found(designation: impl Into<String>) -> Self {
        EngineError::SectionNotFound {
            designation: designation.into(),
        }
    }

    /// Create an AnalysisFailed error
    pub fn analysis_failed(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        EngineError::AnalysisFailed {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EngineError::InvalidInput { .. } => "INVALID_INPUT",
            EngineError::SectionNotFound { .. } => "SECTION_NOT_FOUND",
            EngineError::AnalysisFailed { .. } => "ANALYSIS_FAILED",
            EngineError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = EngineError::invalid_input("spans", "-5.0", "Span length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: EngineError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            EngineError::section_not_found("H-900x300").error_code(),
            "SECTION_NOT_FOUND"
        );
        assert_eq!(
            EngineError::analysis_failed("system", "singular matrix").error_code(),
            "ANALYSIS_FAILED"
        );
    }
}
