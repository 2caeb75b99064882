//! Browser services.
//!
//! # Services
//!
//! - [`analyzer`] - Mock analyzer on a `setTimeout` delay
//! - [`clipboard`] - `navigator.clipboard` access
//! - [`files`] - `File` to [`prepfoundry::FileCandidate`] conversion
//! - [`notices`] - Toast notices in the Leptos context

pub mod analyzer;
pub mod clipboard;
pub mod files;
pub mod notices;

pub use analyzer::*;
pub use files::*;
pub use notices::*;
