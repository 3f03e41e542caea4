//! # Pipeline Errors
//!
//! Error types for the transform pipeline.
//!
//! Exactly two kinds exist: [`PipelineError::InvalidParameter`] for
//! precondition violations caught before any geometry is touched, and
//! [`PipelineError::PipelineFailure`] for failures during or after dispatch.
//! Both are terminal for the current invocation; nothing is retried and no
//! partial mesh is ever returned.

use thiserror::Error;

/// Errors that can occur during pipeline validation or dispatch.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// A precondition on the inputs was violated.
    #[error("invalid parameter {field}: {message}")]
    InvalidParameter {
        /// Name of the offending parameter field.
        field: &'static str,
        /// Human-readable description of the violated rule.
        message: String,
    },

    /// Something failed during or after dispatch: unsupported mode,
    /// empty-seed multicenter invocation, or a broken result mesh.
    #[error("pipeline failure: {message}")]
    PipelineFailure { message: String },
}

impl PipelineError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            message: message.into(),
        }
    }

    /// Creates a pipeline failure error.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::PipelineFailure {
            message: message.into(),
        }
    }

    /// Returns the offending field name for parameter errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { field, .. } => Some(field),
            Self::PipelineFailure { .. } => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
