//! Landing page.

use leptos::*;
use leptos_meta::Title;

use crate::components::Hero;
use crate::CHECKER_PATH;
use prepfoundry::config::APP_NAME;

const STEPS: [(&str, &str, &str); 3] = [
    (
        "📤",
        "Upload Your Resume",
        "Upload your current resume in PDF or DOCX format for analysis.",
    ),
    (
        "📊",
        "Get Instant Analysis",
        "Our AI analyzes your resume against ATS requirements and industry standards.",
    ),
    (
        "🎯",
        "Improve & Apply",
        "Follow our actionable recommendations to create an optimized resume.",
    ),
];

const FEATURES: [(&str, &str, &str); 6] = [
    (
        "ℹ️",
        "ATS Compatibility Score",
        "Get a numerical score showing how well your resume will perform with Applicant Tracking Systems.",
    ),
    (
        "➕",
        "Section Analysis",
        "Detailed feedback on each section of your resume: header, skills, work experience, education, and more.",
    ),
    (
        "›",
        "Actionable Improvements",
        "Specific recommendations to improve each section for maximum impact with recruiters.",
    ),
    (
        "✔️",
        "Keyword Optimization",
        "Suggestions for industry-specific keywords to include for better job match rates.",
    ),
    (
        "▤",
        "Format Analysis",
        "Feedback on formatting, readability, and visual structure to ensure clean presentation.",
    ),
    (
        "⤴",
        "Shareable Results",
        "Share your analysis results with mentors, career advisors, or friends for additional help.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=format!("{APP_NAME} | Resume Checker for Students")/>
        <Hero/>

        <section class="section">
            <div class="container">
                <div class="section-intro">
                    <h2>{format!("How {APP_NAME} Works")}</h2>
                    <p class="subtitle">"Get your resume optimized in three simple steps"</p>
                </div>
                <div class="grid three">
                    {STEPS
                        .iter()
                        .map(|&(icon, title, body)| view! {
                            <div class="card feature-card centered">
                                <div class="icon-circle">{icon}</div>
                                <h3>{title}</h3>
                                <p class="muted">{body}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section tinted">
            <div class="container">
                <div class="section-intro">
                    <h2>"Key Features"</h2>
                    <p class="subtitle">"Everything you need to create an outstanding resume"</p>
                </div>
                <div class="grid three">
                    {FEATURES
                        .iter()
                        .map(|&(icon, title, body)| view! {
                            <div class="card">
                                <div class="icon-circle small">{icon}</div>
                                <h3>{title}</h3>
                                <p class="muted">{body}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>

        <section class="section">
            <div class="container">
                <div class="cta">
                    <h2>"Ready to land more interviews?"</h2>
                    <p>
                        "Don't let your resume hold you back. Optimize it now and start getting more callbacks."
                    </p>
                    <a href=CHECKER_PATH class="btn btn-secondary btn-lg">"Analyze My Resume 🚀"</a>
                </div>
            </div>
        </section>
    }
}
