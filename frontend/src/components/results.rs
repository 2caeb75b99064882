//! Results screen: overall score, tabbed details and the tips sidebar.

use leptos::*;

use crate::types::{score_bar_class, score_text_class, section_icon, ResultTab};
use prepfoundry::{AnalysisResult, ScoreBand, SectionScore};

#[component]
pub fn ResultsView(
    file_name: String,
    analysis: AnalysisResult,
    #[prop(into)] on_reset: Callback<()>,
    #[prop(into)] on_share: Callback<()>,
    #[prop(into)] on_copy: Callback<()>,
) -> impl IntoView {
    let (active_tab, set_active_tab) = create_signal(ResultTab::Scores);

    let AnalysisResult {
        overall_score,
        sections,
        strengths,
        weaknesses,
        keywords,
    } = analysis;
    let verdict = ScoreBand::from_score(overall_score).verdict();

    let tab_buttons = ResultTab::ALL
        .iter()
        .map(move |&tab| {
            view! {
                <button
                    class="tab-trigger"
                    class:active=move || active_tab.get() == tab
                    on:click=move |_| set_active_tab.set(tab)
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="fade-in">
            <div class="results-header">
                <div class="file-info">
                    <span>"📄"</span>
                    <span class="file-name">{file_name}</span>
                </div>
                <button class="btn btn-outline btn-sm" on:click=move |_| on_reset.call(())>
                    "🔄 Check Another Resume"
                </button>
            </div>

            <div class="results-grid">
                <div class="card span-all">
                    <div class="score-overview">
                        <div class="score-summary">
                            <div class="score-ring">
                                <div class="score-value">{overall_score}</div>
                                <div class="score-caption">"out of 100"</div>
                            </div>
                            <div>
                                <h3>"ATS Compatibility Score"</h3>
                                <p class="muted">{verdict}</p>
                            </div>
                        </div>
                        <div class="button-row">
                            <button class="btn btn-outline btn-sm" on:click=move |_| on_share.call(())>
                                "🔗 Share Results"
                            </button>
                            <button class="btn btn-primary btn-sm" on:click=move |_| on_copy.call(())>
                                "📋 Copy Recommendations"
                            </button>
                        </div>
                    </div>
                </div>

                <div class="span-two">
                    <div class="tab-list">{tab_buttons}</div>

                    <Show when=move || active_tab.get() == ResultTab::Scores fallback=|| view! {}>
                        <SectionScores sections=sections.clone()/>
                    </Show>
                    <Show when=move || active_tab.get() == ResultTab::Strengths fallback=|| view! {}>
                        <StrengthsWeaknesses strengths=strengths.clone() weaknesses=weaknesses.clone()/>
                    </Show>
                    <Show when=move || active_tab.get() == ResultTab::Keywords fallback=|| view! {}>
                        <Keywords keywords=keywords.clone()/>
                    </Show>
                </div>

                <ResumeTips/>
            </div>
        </div>
    }
}

#[component]
fn SectionScores(sections: Vec<SectionScore>) -> impl IntoView {
    sections
        .into_iter()
        .map(|section| {
            let band = section.band();
            view! {
                <div class="card section-card">
                    <div class="section-header">
                        <div class="section-title">
                            <span>{section_icon(section.kind)}</span>
                            <h4>{section.name}</h4>
                        </div>
                        <div class=format!("section-score {}", score_text_class(band))>
                            {format!("{}/100", section.score)}
                        </div>
                    </div>
                    <div class="progress-bar thin">
                        <div
                            class=format!("progress-fill {}", score_bar_class(band))
                            style=format!("width: {}%;", section.score)
                        ></div>
                    </div>
                    <p class="small">{section.feedback}</p>
                    <h5>"Recommendations:"</h5>
                    <ul class="recommendations">
                        {section
                            .recommendations
                            .into_iter()
                            .map(|rec| view! { <li><span class="bullet">"•"</span>{rec}</li> })
                            .collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn StrengthsWeaknesses(strengths: Vec<String>, weaknesses: Vec<String>) -> impl IntoView {
    view! {
        <div class="two-columns">
            <div class="card">
                <h4>"✅ Strengths"</h4>
                <ul class="check-list">
                    {strengths
                        .into_iter()
                        .map(|s| view! { <li class="text-green-marker">{s}</li> })
                        .collect_view()}
                </ul>
            </div>
            <div class="card">
                <h4>"❌ Areas for Improvement"</h4>
                <ul class="check-list">
                    {weaknesses
                        .into_iter()
                        .map(|w| view! { <li class="text-red-marker">{w}</li> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn Keywords(keywords: Vec<String>) -> impl IntoView {
    view! {
        <div class="card">
            <h4>"Relevant Keywords"</h4>
            <p class="muted small">
                "These keywords are relevant to your field and should be incorporated in your resume"
            </p>
            <div class="keyword-list">
                {keywords
                    .into_iter()
                    .map(|k| view! { <span class="keyword-chip">{k}</span> })
                    .collect_view()}
            </div>
            <div class="card-footer muted small">
                "Tip: Include these keywords naturally throughout your resume, especially in your skills and experience sections."
            </div>
        </div>
    }
}

const TIPS: [(&str, &str); 4] = [
    (
        "Quantify Achievements",
        "Use numbers and percentages to demonstrate your impact (e.g., \"Increased sales by 20%\").",
    ),
    (
        "Be Concise",
        "Keep your resume to 1-2 pages maximum. Use bullet points and avoid lengthy paragraphs.",
    ),
    (
        "Tailor for Each Job",
        "Customize your resume for each position by matching keywords from the job description.",
    ),
    (
        "Use Action Verbs",
        "Start bullet points with strong action verbs like \"Implemented,\" \"Developed,\" or \"Led.\"",
    ),
];

#[component]
fn ResumeTips() -> impl IntoView {
    view! {
        <div class="card tips">
            <h4>"Resume Tips"</h4>
            {TIPS
                .iter()
                .map(|&(title, body)| view! {
                    <div class="tip">
                        <h5>{title}</h5>
                        <p class="muted small">{body}</p>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
