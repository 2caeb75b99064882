//! Validation of file candidates at the upload boundary.
//!
//! # Rules
//!
//! - The declared content type must be exactly `application/pdf` or the DOCX
//!   MIME type. The file name extension is not consulted.
//! - Size is not checked unless the [`UploadPolicy`] sets a limit. The 5 MB
//!   figure in the upload copy is advertised only.
//!
//! # Example
//!
//! ```rust
//! use prepfoundry::{validate_candidate, FileCandidate, UploadPolicy};
//!
//! let candidate = FileCandidate::new("resume.pdf", 120_000, "application/pdf");
//! let file = validate_candidate(&candidate, &UploadPolicy::default()).unwrap();
//! assert_eq!(file.name(), "resume.pdf");
//!
//! let png = FileCandidate::new("photo.png", 2_000, "image/png");
//! assert!(validate_candidate(&png, &UploadPolicy::default()).is_err());
//! ```

use crate::error::{SelectionError, SelectionResult};
use crate::models::{DocumentKind, FileCandidate, SelectedFile};

/// Upload constraints applied on top of the type check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Reject files larger than this many bytes. `None` disables the check.
    pub max_size: Option<u64>,
}

impl UploadPolicy {
    /// Policy that enforces a size limit.
    pub fn with_max_size(limit: u64) -> Self {
        Self {
            max_size: Some(limit),
        }
    }
}

/// Turn a candidate into a [`SelectedFile`] or explain why it was refused.
///
/// Name and size are carried over unchanged.
pub fn validate_candidate(
    candidate: &FileCandidate,
    policy: &UploadPolicy,
) -> SelectionResult<SelectedFile> {
    let kind = DocumentKind::from_content_type(&candidate.content_type).ok_or_else(|| {
        SelectionError::InvalidFileType {
            content_type: candidate.content_type.clone(),
        }
    })?;

    if let Some(limit) = policy.max_size {
        if candidate.size > limit {
            return Err(SelectionError::FileTooLarge {
                size: candidate.size,
                limit,
            });
        }
    }

    Ok(SelectedFile::new(candidate.name.clone(), candidate.size, kind))
}
