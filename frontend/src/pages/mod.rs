//! Routed pages.
//!
//! - [`HomePage`] - `/`
//! - [`ResumeCheckerPage`] - `/resume-checker`
//! - [`FutureFeaturesPage`] - `/future-features`

mod home;
mod resume_checker;
mod future_features;

pub use home::*;
pub use resume_checker::*;
pub use future_features::*;
