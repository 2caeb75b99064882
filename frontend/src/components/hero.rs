//! Hero section of the landing page

use leptos::*;

use crate::{CHECKER_PATH, HOME_PATH};
use prepfoundry::config::APP_NAME;

const SELLING_POINTS: [&str; 4] = [
    "100% Free",
    "No Sign-up Required",
    "AI-Powered Analysis",
    "Detailed Feedback",
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-inner">
                <div class="pill">
                    <span class="pill-badge">"NEW"</span>
                    <span>{format!("Launching {APP_NAME} for Students")}</span>
                </div>

                <h1>
                    <span class="gradient-heading">"Optimize your resume"</span>
                    " for job and internship success"
                </h1>

                <p class="subtitle">
                    {format!("{APP_NAME} helps college students create ATS-friendly resumes that stand out to employers. ")}
                    "Upload your resume and get instant feedback to land more interviews."
                </p>

                <div class="button-row centered">
                    <a href=CHECKER_PATH class="btn btn-primary btn-lg">"Try Resume Checker →"</a>
                    <a href=HOME_PATH class="btn btn-outline btn-lg">"Learn More"</a>
                </div>

                <div class="selling-points">
                    {SELLING_POINTS
                        .iter()
                        .map(|point| view! { <span class="selling-point">"✓ " {*point}</span> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
