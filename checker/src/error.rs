//! Error types for the resume checker workflow.
//!
//! - [`SelectionError`] - a file candidate was refused at the input boundary
//! - [`AnalysisError`] - the analyzer could not produce a result
//! - [`WorkflowError`] - top-level error returned by [`crate::Workflow`]
//!
//! Conversion is automatic via `From` implementations, so `?` works across
//! error boundaries.

use thiserror::Error;

use crate::models::WorkflowState;

// =============================================================================
// Selection Errors
// =============================================================================

/// Errors raised when a user picks or drops a file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// Declared content type is neither PDF nor DOCX.
    #[error("Invalid file type '{content_type}': please upload a PDF or DOCX file")]
    InvalidFileType { content_type: String },

    /// File exceeds the limit of an explicit [`crate::UploadPolicy`].
    #[error("File is too large ({size} bytes, limit is {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },
}

// =============================================================================
// Analysis Errors
// =============================================================================

/// Errors from an [`crate::Analyzer`].
///
/// The mock analyzer never fails; this exists for a real backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The analysis service could not be reached or refused the request.
    #[error("Analysis service unavailable: {0}")]
    Unavailable(String),

    /// The service answered with something that is not an analysis.
    #[error("Invalid analysis response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Workflow Errors (top-level)
// =============================================================================

/// Errors returned by workflow operations.
///
/// None of these change the workflow state, except [`WorkflowError::Analysis`]
/// which sends an analyzing workflow back to [`WorkflowState::FileSelected`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    /// File candidate refused.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Analyzer failure.
    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),

    /// Operation is not valid in the current state.
    #[error("Cannot {operation} while {state}")]
    InvalidTransition {
        operation: &'static str,
        state: WorkflowState,
    },
}

impl WorkflowError {
    /// Whether this is the user-facing invalid file type rejection.
    pub fn is_invalid_file_type(&self) -> bool {
        matches!(
            self,
            WorkflowError::Selection(SelectionError::InvalidFileType { .. })
        )
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for file selection.
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Result type for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;
