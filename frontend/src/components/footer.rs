//! Footer component

use leptos::*;

use crate::{CHECKER_PATH, FUTURE_FEATURES_PATH, HOME_PATH};
use prepfoundry::config::APP_NAME;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>
                {format!("Copyright © 2025 {APP_NAME} • Powered by ")}
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
            <div class="footer-links">
                <a href=HOME_PATH class="footer-link">"Home"</a>
                <a href=CHECKER_PATH class="footer-link">"Resume Checker"</a>
                <a href=FUTURE_FEATURES_PATH class="footer-link">"Future Features"</a>
            </div>
        </footer>
    }
}
