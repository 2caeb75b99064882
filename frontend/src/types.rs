//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Notice Types** - Toast notifications
//! - **Result Types** - Tabs and score styling for the results screen
//! - **Roadmap Types** - Future feature status badges
//! - **Error Types** - Frontend error handling

use prepfoundry::{Acknowledgment, ScoreBand, SectionKind, SelectionError, WorkflowError};
use thiserror::Error;

// =============================================================================
// Notice Types
// =============================================================================

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Confirmation of an action
    Info,
    /// Something the user must fix
    Destructive,
}

impl NoticeLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Info => "toast-info",
            NoticeLevel::Destructive => "toast-destructive",
        }
    }
}

/// A transient, dismissible notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Assigned by the notice board, 0 until pushed
    pub id: u64,
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            level,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn from_ack(ack: Acknowledgment) -> Self {
        Self::new(NoticeLevel::Info, ack.title, ack.description)
    }

    /// The notice to show for an error, if the user should see one.
    ///
    /// Wrong-state calls and clipboard failures are only logged.
    pub fn from_error(err: &AppError) -> Option<Self> {
        let AppError::Workflow(err) = err else {
            return None;
        };
        match err {
            WorkflowError::Selection(SelectionError::InvalidFileType { .. }) => Some(Self::new(
                NoticeLevel::Destructive,
                "Invalid file type",
                "Please upload a PDF or DOCX file.",
            )),
            WorkflowError::Selection(e @ SelectionError::FileTooLarge { .. }) => Some(Self::new(
                NoticeLevel::Destructive,
                "File too large",
                e.to_string(),
            )),
            WorkflowError::Analysis(e) => Some(Self::new(
                NoticeLevel::Destructive,
                "Analysis failed",
                e.to_string(),
            )),
            WorkflowError::InvalidTransition { .. } => None,
        }
    }
}

// =============================================================================
// Result Types
// =============================================================================

/// Tabs of the results screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultTab {
    Scores,
    Strengths,
    Keywords,
}

impl ResultTab {
    pub const ALL: [ResultTab; 3] = [ResultTab::Scores, ResultTab::Strengths, ResultTab::Keywords];

    pub fn label(&self) -> &'static str {
        match self {
            ResultTab::Scores => "Section Scores",
            ResultTab::Strengths => "Strengths & Weaknesses",
            ResultTab::Keywords => "Keywords",
        }
    }
}

/// Text colour for a score.
pub fn score_text_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Strong => "text-green",
        ScoreBand::Fair => "text-amber",
        ScoreBand::Weak => "text-red",
    }
}

/// Fill colour for a score progress bar.
pub fn score_bar_class(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Strong => "bar-green",
        ScoreBand::Fair => "bar-amber",
        ScoreBand::Weak => "bar-red",
    }
}

/// Emoji icon for a resume section.
pub fn section_icon(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Contact => "👤",
        SectionKind::Summary => "📝",
        SectionKind::Experience => "💼",
        SectionKind::Education => "🎓",
        SectionKind::Skills => "🏆",
        SectionKind::Formatting => "📄",
    }
}

// =============================================================================
// Roadmap Types
// =============================================================================

/// Delivery status of an upcoming feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureStatus {
    ComingSoon,
    InDevelopment,
    Planned,
}

impl FeatureStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FeatureStatus::ComingSoon => "Coming Soon",
            FeatureStatus::InDevelopment => "In Development",
            FeatureStatus::Planned => "Planned",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            FeatureStatus::ComingSoon => "badge badge-amber",
            FeatureStatus::InDevelopment => "badge badge-green",
            FeatureStatus::Planned => "badge badge-blue",
        }
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// Workflow refused an operation.
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// Clipboard API missing or write rejected.
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
