//! Checker configuration.
//!
//! Compile-time constants shared by the workflow and the frontend.

use std::time::Duration;

/// Product name, used in report headers and page titles.
pub const APP_NAME: &str = "PrepFoundry";

/// Simulated analysis latency.
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(3000);

/// Size limit shown in the upload copy.
///
/// 5 MB. Only enforced when an [`crate::UploadPolicy`] asks for it.
pub const ADVERTISED_MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

/// Value of the file input `accept` attribute.
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.docx";

/// MIME type of a PDF document.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// MIME type of an Office Open XML word processing document.
pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Score at or above which a section counts as strong.
pub const STRONG_SCORE: u8 = 85;

/// Score at or above which a section counts as fair.
pub const FAIR_SCORE: u8 = 70;
