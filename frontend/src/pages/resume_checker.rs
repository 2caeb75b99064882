//! Resume checker screen.
//!
//! Owns the [`Workflow`] in a signal and renders one view per state. The
//! simulated analysis runs in a `spawn_local` task; its completion goes
//! through [`Workflow::finish`], which drops it if the user reset meanwhile.

use leptos::*;
use leptos_meta::Title;

use crate::components::{AnalyzingCard, ResultsView, SelectedFileCard, UploadZone};
use crate::services::{browser_analyzer, clipboard, NoticeBoard};
use prepfoundry::config::APP_NAME;
use prepfoundry::{
    AnalysisResult, FileCandidate, SelectedFile, Workflow, WorkflowState, RECOMMENDATIONS_COPIED,
};

/// What the page shows; changes only on state transitions.
#[derive(Clone, Debug, PartialEq)]
enum Screen {
    Upload,
    Selected(SelectedFile),
    Analyzing,
    Results(SelectedFile, AnalysisResult),
}

impl Screen {
    fn of(workflow: &Workflow) -> Self {
        match (workflow.state(), workflow.selected_file(), workflow.analysis()) {
            (WorkflowState::FileSelected, Some(file), _) => Screen::Selected(file.clone()),
            (WorkflowState::Analyzing, _, _) => Screen::Analyzing,
            (WorkflowState::Complete, Some(file), Some(analysis)) => {
                Screen::Results(file.clone(), analysis.clone())
            }
            _ => Screen::Upload,
        }
    }
}

#[component]
pub fn ResumeCheckerPage() -> impl IntoView {
    let workflow = create_rw_signal(Workflow::new());
    let screen = create_memo(move |_| workflow.with(Screen::of));
    let notices = NoticeBoard::use_board();

    let select_file = move |candidate: FileCandidate| {
        match workflow.try_update(|w| w.select_file(&candidate)) {
            Some(Ok(file)) => log::info!("📄 Selected '{}' ({})", file.name(), file.display_size()),
            Some(Err(e)) => notices.report(&e.into()),
            None => {}
        }
    };

    let analyze = move |_: ()| {
        let pending = match workflow.try_update(|w| w.begin_analysis()) {
            Some(Ok(pending)) => pending,
            Some(Err(e)) => return notices.report(&e.into()),
            None => return,
        };
        log::info!("🔍 Analyzing '{}'...", pending.file().name());

        spawn_local(async move {
            let analyzer = browser_analyzer();
            let completed = pending.run(&analyzer).await;
            // `None` when the page was left before the analysis finished.
            if let Some(Err(e)) = workflow.try_update(|w| w.finish(completed)) {
                notices.report(&e.into());
            }
        });
    };

    let reset = move |_: ()| workflow.update(|w| w.reset());

    let share = move |_: ()| match workflow.with(|w| w.share_results()) {
        Ok(ack) => notices.acknowledge(ack),
        Err(e) => notices.report(&e.into()),
    };

    let copy = move |_: ()| {
        let text = match workflow.with(|w| w.copy_recommendations()) {
            Ok(text) => text,
            Err(e) => return notices.report(&e.into()),
        };
        spawn_local(async move {
            if let Err(e) = clipboard::write_text(&text).await {
                notices.report(&e);
            }
            notices.acknowledge(RECOMMENDATIONS_COPIED);
        });
    };

    view! {
        <Title text=format!("Resume Checker | {APP_NAME}")/>
        <div class="container checker">
            <div class="page-intro">
                <h1>"Resume Checker"</h1>
                <p class="subtitle">
                    "Upload your resume to get an instant ATS compatibility score and detailed feedback"
                </p>
            </div>

            {move || match screen.get() {
                Screen::Upload => view! { <UploadZone on_file=select_file/> }.into_view(),
                Screen::Selected(file) => view! {
                    <SelectedFileCard file=file on_analyze=analyze on_reset=reset/>
                }
                .into_view(),
                Screen::Analyzing => view! { <AnalyzingCard/> }.into_view(),
                Screen::Results(file, analysis) => view! {
                    <ResultsView
                        file_name=file.name().to_string()
                        analysis=analysis
                        on_reset=reset
                        on_share=share
                        on_copy=copy
                    />
                }
                .into_view(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use prepfoundry::{MockAnalyzer, NoDelay};

    fn pdf() -> FileCandidate {
        FileCandidate::new("resume.pdf", 120_000, "application/pdf")
    }

    #[test]
    fn test_screen_per_state() {
        let mut workflow = Workflow::new();
        assert_eq!(Screen::of(&workflow), Screen::Upload);

        workflow.select_file(&pdf()).unwrap();
        assert!(matches!(Screen::of(&workflow), Screen::Selected(f) if f.name() == "resume.pdf"));

        let pending = workflow.begin_analysis().unwrap();
        assert_eq!(Screen::of(&workflow), Screen::Analyzing);

        let completed = block_on(pending.run(&MockAnalyzer::new(NoDelay)));
        workflow.finish(completed).unwrap();
        assert!(matches!(Screen::of(&workflow), Screen::Results(_, a) if a.overall_score == 78));

        workflow.reset();
        assert_eq!(Screen::of(&workflow), Screen::Upload);
    }

    #[test]
    fn test_rejected_file_keeps_upload_screen() {
        let mut workflow = Workflow::new();
        let before = Screen::of(&workflow);
        assert!(workflow
            .select_file(&FileCandidate::new("photo.png", 10, "image/png"))
            .is_err());
        assert_eq!(Screen::of(&workflow), before);
    }
}
