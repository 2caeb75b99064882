//! UI Components for the PrepFoundry site.
//!
//! # Layout Components
//! - [`Navbar`] - Navigation bar with mobile menu
//! - [`Hero`] - Landing page headline
//! - [`Footer`] - Page footer
//! - [`Toaster`] - Transient notices
//!
//! # Resume Checker Components
//! - [`UploadZone`] - Drag & drop file picker
//! - [`SelectedFileCard`] - Chosen file, analyze / cancel
//! - [`AnalyzingCard`] - Analysis in progress
//! - [`ResultsView`] - Scores, strengths, keywords and tips

mod navbar;
mod hero;
mod footer;
mod toast;
mod upload;
mod file_card;
mod progress;
mod results;

pub use navbar::*;
pub use hero::*;
pub use footer::*;
pub use toast::*;
pub use upload::*;
pub use file_card::*;
pub use progress::*;
pub use results::*;
