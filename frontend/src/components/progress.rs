use leptos::*;

use crate::ANALYZING_PROGRESS;

/// Shown while the analysis runs. The upload surface is not rendered.
#[component]
pub fn AnalyzingCard() -> impl IntoView {
    view! {
        <div class="card card-narrow fade-in analyzing">
            <div class="spinner" aria-hidden="true"></div>
            <h3>"Analyzing your resume..."</h3>
            <p class="muted small">
                "Our AI is reviewing your resume for ATS compatibility and optimization opportunities"
            </p>
            <div class="progress-bar">
                <div class="progress-fill" style=format!("width: {}%;", ANALYZING_PROGRESS)></div>
            </div>
            <p class="muted tiny">"This will take just a few moments"</p>
        </div>
    }
}
