//! Domain models for the resume checker.
//!
//! - [`WorkflowState`] - Observable state of the upload-and-analyze workflow
//! - [`DocumentKind`] - Accepted resume formats (PDF, DOCX)
//! - [`FileCandidate`] - Raw file metadata from the input boundary
//! - [`SelectedFile`] - A candidate that passed validation
//! - [`AnalysisResult`] - Overall score, section scores and keyword lists
//! - [`ScoreBand`] - Strong / fair / weak classification of a score

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{DOCX_CONTENT_TYPE, FAIR_SCORE, PDF_CONTENT_TYPE, STRONG_SCORE};

// =============================================================================
// Workflow State
// =============================================================================

/// Observable state of the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkflowState {
    /// No file chosen.
    Idle,
    /// File chosen, not yet analyzed.
    FileSelected,
    /// Simulated analysis in progress.
    Analyzing,
    /// Result available.
    Complete,
}

impl fmt::Display for WorkflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkflowState::Idle => "idle",
            WorkflowState::FileSelected => "a file is selected",
            WorkflowState::Analyzing => "analyzing",
            WorkflowState::Complete => "complete",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Files
// =============================================================================

/// Resume formats accepted by the checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Match a declared MIME type exactly.
    ///
    /// No trimming, case folding or parameter stripping: `application/PDF`
    /// and `application/pdf; charset=binary` are both refused.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type {
            PDF_CONTENT_TYPE => Some(Self::Pdf),
            DOCX_CONTENT_TYPE => Some(Self::Docx),
            _ => None,
        }
    }

    /// The MIME type this kind was matched from.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Pdf => PDF_CONTENT_TYPE,
            Self::Docx => DOCX_CONTENT_TYPE,
        }
    }

    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
        }
    }
}

/// File metadata as read from a file input or drop event.
///
/// Contents are never read; only these three attributes cross the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Declared MIME type (may be empty)
    pub content_type: String,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size: u64, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            content_type: content_type.into(),
        }
    }
}

/// A file that passed type validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    size: u64,
    kind: DocumentKind,
}

impl SelectedFile {
    pub(crate) fn new(name: String, size: u64, kind: DocumentKind) -> Self {
        Self { name, size, kind }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn content_type(&self) -> &'static str {
        self.kind.content_type()
    }

    /// Size in megabytes with two decimals, e.g. `0.11 MB`.
    pub fn display_size(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }
}

// =============================================================================
// Analysis
// =============================================================================

/// Resume section a score belongs to.
///
/// Lets the presentation layer pick an icon per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Contact,
    Summary,
    Experience,
    Education,
    Skills,
    Formatting,
}

/// Score and feedback for one resume section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionScore {
    /// Display name, e.g. "Work Experience"
    pub name: String,
    /// Section kind
    pub kind: SectionKind,
    /// Score out of 100
    pub score: u8,
    /// One-sentence assessment
    pub feedback: String,
    /// Ordered improvement suggestions
    pub recommendations: Vec<String>,
}

impl SectionScore {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

/// Full analysis of a resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Overall ATS compatibility score out of 100
    pub overall_score: u8,
    /// Section scores in display order
    pub sections: Vec<SectionScore>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub keywords: Vec<String>,
}

impl AnalysisResult {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_score(self.overall_score)
    }

    /// Total number of recommendations across sections.
    pub fn recommendation_count(&self) -> usize {
        self.sections.iter().map(|s| s.recommendations.len()).sum()
    }
}

/// Coarse classification of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreBand {
    /// 85 and above
    Strong,
    /// 70 to 84
    Fair,
    /// Below 70
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        if score >= STRONG_SCORE {
            Self::Strong
        } else if score >= FAIR_SCORE {
            Self::Fair
        } else {
            Self::Weak
        }
    }

    /// Headline shown next to the overall score.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Strong => "Excellent! Your resume is well-optimized for ATS systems.",
            Self::Fair => "Good start, but there's room for improvement.",
            Self::Weak => "Your resume needs significant improvements for ATS systems.",
        }
    }
}
