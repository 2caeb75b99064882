//! # PrepFoundry - resume checker core
//!
//! Platform-independent core of the PrepFoundry resume checker: file
//! validation, the upload-and-analyze workflow, and the (mock) analysis.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ FileCandidate │────▶│ Validation  │────▶│  Workflow   │────▶│   Report    │
//! │ (name, size,  │     │ (PDF/DOCX)  │     │ (Analyzer + │     │ (clipboard  │
//! │  MIME type)   │     │             │     │ generation) │     │    text)    │
//! └───────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use prepfoundry::{FileCandidate, MockAnalyzer, NoDelay, Workflow, WorkflowState};
//!
//! # async fn demo() {
//! let mut workflow = Workflow::new();
//! workflow
//!     .select_file(&FileCandidate::new("resume.pdf", 120_000, "application/pdf"))
//!     .unwrap();
//! workflow.start_analysis(&MockAnalyzer::new(NoDelay)).await.unwrap();
//! assert_eq!(workflow.state(), WorkflowState::Complete);
//! assert_eq!(workflow.analysis().unwrap().overall_score, 78);
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Constants (delay, accepted types, advertised size limit)
//! - [`error`] - Error hierarchy
//! - [`models`] - Files, analysis result, score bands
//! - [`validation`] - Content type and optional size checks
//! - [`analysis`] - Analyzer boundary and the canned analysis
//! - [`workflow`] - State machine
//! - [`report`] - Clipboard text and acknowledgments

pub mod config;
pub mod error;
pub mod models;

pub mod validation;

pub mod analysis;

pub mod workflow;

pub mod report;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{
    AnalysisError,
    SelectionError,
    SelectionResult,
    WorkflowError,
    WorkflowResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    AnalysisResult,
    DocumentKind,
    FileCandidate,
    ScoreBand,
    SectionKind,
    SectionScore,
    SelectedFile,
    WorkflowState,
};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{validate_candidate, UploadPolicy};

// =============================================================================
// Re-exports - Analysis
// =============================================================================

pub use analysis::{sample_analysis, Analyzer, Delay, MockAnalyzer, NoDelay};

// =============================================================================
// Re-exports - Workflow
// =============================================================================

pub use workflow::{
    AnalysisTicket,
    CompletedAnalysis,
    Completion,
    PendingAnalysis,
    Workflow,
};

// =============================================================================
// Re-exports - Report
// =============================================================================

pub use report::{
    recommendations_text,
    Acknowledgment,
    RECOMMENDATIONS_COPIED,
    RESULTS_SHARED,
};
