//! Roadmap page listing upcoming features.

use leptos::*;
use leptos_meta::Title;

use crate::types::FeatureStatus;
use crate::CHECKER_PATH;
use prepfoundry::config::APP_NAME;

struct FutureFeature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    status: FeatureStatus,
}

const FEATURES: [FutureFeature; 9] = [
    FutureFeature {
        icon: "🔎",
        title: "Job Match Analyzer",
        description: "Upload a job description and your resume to get a compatibility score and personalized recommendations to tailor your resume for that specific job.",
        status: FeatureStatus::ComingSoon,
    },
    FutureFeature {
        icon: "📄",
        title: "AI Resume Builder",
        description: "Build a professional resume from scratch with AI guidance to create an optimized, ATS-friendly document based on your experience and skills.",
        status: FeatureStatus::InDevelopment,
    },
    FutureFeature {
        icon: "💬",
        title: "Mock Interview Preparation",
        description: "Practice for interviews with AI-powered mock interviews based on your resume content and targeted job roles.",
        status: FeatureStatus::Planned,
    },
    FutureFeature {
        icon: "💼",
        title: "Industry-Specific Templates",
        description: "Access a library of professionally designed resume templates optimized for specific industries and job functions.",
        status: FeatureStatus::InDevelopment,
    },
    FutureFeature {
        icon: "📚",
        title: "Resume Learning Center",
        description: "Educational resources with best practices, examples, and guides for creating standout resumes in your field.",
        status: FeatureStatus::ComingSoon,
    },
    FutureFeature {
        icon: "🎨",
        title: "Resume Design Studio",
        description: "Customize the visual appearance of your resume with professional design tools while maintaining ATS compatibility.",
        status: FeatureStatus::Planned,
    },
    FutureFeature {
        icon: "📊",
        title: "Application Tracker",
        description: "Track your job applications, interview status, and follow-ups in one organized dashboard.",
        status: FeatureStatus::Planned,
    },
    FutureFeature {
        icon: "⚡",
        title: "Premium Resume Analysis",
        description: "Advanced resume analysis with deeper insights, industry comparisons, and personalized coaching recommendations.",
        status: FeatureStatus::Planned,
    },
    FutureFeature {
        icon: "⭐",
        title: "Personal Branding Guide",
        description: "Develop a consistent personal brand across your resume, LinkedIn, and other professional profiles.",
        status: FeatureStatus::Planned,
    },
];

#[component]
pub fn FutureFeaturesPage() -> impl IntoView {
    view! {
        <Title text=format!("Future Features | {APP_NAME}")/>
        <div class="container page">
            <div class="page-intro">
                <h1>"Future Features"</h1>
                <p class="subtitle">
                    "We're continuously working to help students optimize their job search process. "
                    {format!("Here's what's coming to {APP_NAME}.")}
                </p>
            </div>

            <div class="grid three">
                {FEATURES
                    .iter()
                    .map(|feature| view! {
                        <div class="card roadmap-card">
                            <div class="icon-square">{feature.icon}</div>
                            <h3>
                                {feature.title}
                                <span class=feature.status.badge_class()>{feature.status.label()}</span>
                            </h3>
                            <p class="muted">{feature.description}</p>
                            <button class="btn btn-outline btn-block" disabled=true>"Coming Soon"</button>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="page-outro">
                <h2>"Want to try our current feature?"</h2>
                <p class="muted">"Our Resume Checker is ready to help you improve your resume right now."</p>
                <a href=CHECKER_PATH class="btn btn-primary">"Try Resume Checker"</a>
            </div>
        </div>
    }
}
