//! Application configuration.
//!
//! Route paths and UI timings for the PrepFoundry frontend. Workflow
//! constants (analysis delay, accepted types) live in
//! [`prepfoundry::config`].

use std::time::Duration;

/// Landing page.
pub const HOME_PATH: &str = "/";

/// Resume checker screen.
pub const CHECKER_PATH: &str = "/resume-checker";

/// Roadmap of upcoming features.
pub const FUTURE_FEATURES_PATH: &str = "/future-features";

/// How long a toast stays up before dismissing itself.
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Progress shown while the (simulated) analysis runs.
///
/// Static, the mock reports no intermediate progress.
pub const ANALYZING_PROGRESS: u8 = 45;

/// Upload copy. Advertised only, see [`prepfoundry::UploadPolicy`].
pub const SUPPORTED_FORMATS_HINT: &str = "Supports PDF, DOCX (Max 5MB)";

/// Brand mark shown in the navbar.
pub const BRAND_INITIALS: &str = "PF";

#[cfg(test)]
mod tests {
    use super::*;
    use prepfoundry::config::ADVERTISED_MAX_FILE_SIZE;

    #[test]
    fn test_hint_matches_advertised_limit() {
        let mb = ADVERTISED_MAX_FILE_SIZE / 1024 / 1024;
        assert!(SUPPORTED_FORMATS_HINT.contains(&format!("(Max {mb}MB)")));
    }
}
