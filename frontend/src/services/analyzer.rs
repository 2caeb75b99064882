//! Browser-side analyzer: the mock analysis driven by a `gloo-timers` sleep.

use std::time::Duration;

use prepfoundry::{Delay, MockAnalyzer};

/// [`Delay`] backed by `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDelay;

impl Delay for BrowserDelay {
    async fn wait(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// Analyzer used by the resume checker page.
pub type BrowserAnalyzer = MockAnalyzer<BrowserDelay>;

pub fn browser_analyzer() -> BrowserAnalyzer {
    MockAnalyzer::new(BrowserDelay)
}
