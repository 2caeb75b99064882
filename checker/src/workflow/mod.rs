//! Upload-and-analyze state machine.
//!
//! ```text
//!            select_file              begin_analysis            finish
//!   Idle ───────────────▶ FileSelected ─────────────▶ Analyzing ───────▶ Complete
//!    ▲                         │  ▲                        │                │
//!    │                         │  └──── analyzer error ────┘                │
//!    └──────────────────── reset (from any state) ──────────────────────────┘
//! ```
//!
//! The analysis is split at its suspension point so the workflow never has
//! to be borrowed across an `await`: [`Workflow::begin_analysis`] hands out a
//! [`PendingAnalysis`], the caller runs it on whatever executor it has, and
//! [`Workflow::finish`] applies the [`CompletedAnalysis`].
//!
//! Every `select_file`, `begin_analysis` and `reset` advances a generation
//! counter.
//! A completion carrying an older generation is discarded, so a result that
//! lands after a reset cannot overwrite the new state.

use crate::analysis::Analyzer;
use crate::error::{AnalysisError, WorkflowError, WorkflowResult};
use crate::models::{AnalysisResult, FileCandidate, SelectedFile, WorkflowState};
use crate::report::{self, Acknowledgment};
use crate::validation::{validate_candidate, UploadPolicy};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Stage {
    Idle,
    FileSelected(SelectedFile),
    Analyzing(SelectedFile),
    Complete {
        file: SelectedFile,
        analysis: AnalysisResult,
    },
}

/// Identifies the analysis run a completion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnalysisTicket {
    generation: u64,
}

/// An analysis that has been started but not yet run.
#[derive(Debug, Clone)]
pub struct PendingAnalysis {
    ticket: AnalysisTicket,
    file: SelectedFile,
}

impl PendingAnalysis {
    pub fn ticket(&self) -> AnalysisTicket {
        self.ticket
    }

    pub fn file(&self) -> &SelectedFile {
        &self.file
    }

    /// Run the analyzer. The result still has to be passed to
    /// [`Workflow::finish`].
    pub async fn run<A: Analyzer>(self, analyzer: &A) -> CompletedAnalysis {
        let result = analyzer.analyze(&self.file).await;
        CompletedAnalysis {
            ticket: self.ticket,
            result,
        }
    }
}

/// Outcome of an analyzer run, tagged with its ticket.
#[derive(Debug, Clone)]
pub struct CompletedAnalysis {
    ticket: AnalysisTicket,
    result: Result<AnalysisResult, AnalysisError>,
}

impl CompletedAnalysis {
    /// Wrap a result produced outside [`PendingAnalysis::run`].
    pub fn new(ticket: AnalysisTicket, result: Result<AnalysisResult, AnalysisError>) -> Self {
        Self { ticket, result }
    }

    pub fn ticket(&self) -> AnalysisTicket {
        self.ticket
    }
}

/// What [`Workflow::finish`] did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// Result stored, workflow is now complete.
    Applied,
    /// Completion belonged to an earlier run and was dropped.
    Discarded,
}

/// The resume checker workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    stage: Stage,
    generation: u64,
    policy: UploadPolicy,
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}

impl Workflow {
    /// Idle workflow without a size limit.
    pub fn new() -> Self {
        Self::with_policy(UploadPolicy::default())
    }

    pub fn with_policy(policy: UploadPolicy) -> Self {
        Self {
            stage: Stage::Idle,
            generation: 0,
            policy,
        }
    }

    pub fn state(&self) -> WorkflowState {
        match self.stage {
            Stage::Idle => WorkflowState::Idle,
            Stage::FileSelected(_) => WorkflowState::FileSelected,
            Stage::Analyzing(_) => WorkflowState::Analyzing,
            Stage::Complete { .. } => WorkflowState::Complete,
        }
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match &self.stage {
            Stage::Idle => None,
            Stage::FileSelected(file) | Stage::Analyzing(file) => Some(file),
            Stage::Complete { file, .. } => Some(file),
        }
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        match &self.stage {
            Stage::Complete { analysis, .. } => Some(analysis),
            _ => None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.stage, Stage::Analyzing(_))
    }

    fn invalid(&self, operation: &'static str) -> WorkflowError {
        WorkflowError::InvalidTransition {
            operation,
            state: self.state(),
        }
    }

    /// Choose a file to analyze.
    ///
    /// Valid unless an analysis is running. A refused candidate leaves the
    /// workflow exactly as it was.
    pub fn select_file(&mut self, candidate: &FileCandidate) -> WorkflowResult<SelectedFile> {
        if self.is_analyzing() {
            return Err(self.invalid("select a file"));
        }

        let file = validate_candidate(candidate, &self.policy).map_err(|e| {
            log::warn!("Rejected '{}': {}", candidate.name, e);
            e
        })?;

        log::debug!(
            "{} -> file selected: '{}' ({})",
            self.state(),
            file.name(),
            file.display_size()
        );
        self.generation += 1;
        self.stage = Stage::FileSelected(file.clone());
        Ok(file)
    }

    /// Move to `Analyzing` and hand out the run to perform.
    pub fn begin_analysis(&mut self) -> WorkflowResult<PendingAnalysis> {
        let file = match &self.stage {
            Stage::FileSelected(file) => file.clone(),
            _ => return Err(self.invalid("start an analysis")),
        };

        self.generation += 1;
        let ticket = AnalysisTicket {
            generation: self.generation,
        };
        log::debug!("Analyzing '{}' (generation {})", file.name(), ticket.generation);
        self.stage = Stage::Analyzing(file.clone());

        Ok(PendingAnalysis { ticket, file })
    }

    /// Apply the outcome of a run started by [`Workflow::begin_analysis`].
    ///
    /// An analyzer error returns the workflow to `FileSelected` and is passed
    /// back to the caller.
    pub fn finish(&mut self, completed: CompletedAnalysis) -> WorkflowResult<Completion> {
        let current = completed.ticket.generation == self.generation;
        let file = match &self.stage {
            Stage::Analyzing(file) if current => file.clone(),
            _ => {
                log::debug!(
                    "Discarding stale analysis (generation {}, now {} while {})",
                    completed.ticket.generation,
                    self.generation,
                    self.state()
                );
                return Ok(Completion::Discarded);
            }
        };

        match completed.result {
            Ok(analysis) => {
                log::debug!(
                    "Analysis complete for '{}': {}/100",
                    file.name(),
                    analysis.overall_score
                );
                self.stage = Stage::Complete { file, analysis };
                Ok(Completion::Applied)
            }
            Err(e) => {
                log::warn!("Analysis of '{}' failed: {}", file.name(), e);
                self.stage = Stage::FileSelected(file);
                Err(e.into())
            }
        }
    }

    /// Begin, run and finish an analysis in one call.
    ///
    /// Holds the workflow for the whole run; drivers that need to reset while
    /// an analysis is in flight use the split API instead.
    pub async fn start_analysis<A: Analyzer>(
        &mut self,
        analyzer: &A,
    ) -> WorkflowResult<Completion> {
        let pending = self.begin_analysis()?;
        let completed = pending.run(analyzer).await;
        self.finish(completed)
    }

    /// Drop the file and any result, back to `Idle`.
    pub fn reset(&mut self) {
        self.generation += 1;
        if self.stage != Stage::Idle {
            log::debug!("{} -> idle", self.state());
        }
        self.stage = Stage::Idle;
    }

    /// Text block with every section's score, feedback and recommendations.
    pub fn copy_recommendations(&self) -> WorkflowResult<String> {
        self.analysis()
            .map(report::recommendations_text)
            .ok_or_else(|| self.invalid("copy recommendations"))
    }

    /// Acknowledge a share request. No artifact is produced.
    pub fn share_results(&self) -> WorkflowResult<Acknowledgment> {
        match self.stage {
            Stage::Complete { .. } => Ok(report::RESULTS_SHARED),
            _ => Err(self.invalid("share results")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{sample_analysis, Delay, MockAnalyzer, NoDelay};
    use crate::config::{ADVERTISED_MAX_FILE_SIZE, DOCX_CONTENT_TYPE};
    use crate::error::SelectionError;
    use std::time::Duration;
    use tokio::time::Instant;

    struct TokioDelay;

    impl Delay for TokioDelay {
        async fn wait(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }
    }

    struct FailingAnalyzer;

    impl Analyzer for FailingAnalyzer {
        async fn analyze(&self, _file: &SelectedFile) -> Result<AnalysisResult, AnalysisError> {
            Err(AnalysisError::Unavailable("backend offline".into()))
        }
    }

    fn pdf(name: &str, size: u64) -> FileCandidate {
        FileCandidate::new(name, size, "application/pdf")
    }

    async fn completed_workflow() -> Workflow {
        let mut workflow = Workflow::new();
        workflow.select_file(&pdf("resume.pdf", 120_000)).unwrap();
        workflow
            .start_analysis(&MockAnalyzer::new(NoDelay))
            .await
            .unwrap();
        workflow
    }

    const REJECTED_TYPES: [&str; 5] = [
        "image/png",
        "text/plain",
        "application/msword",
        "",
        "application/pdf;charset=binary",
    ];

    #[test]
    fn test_invalid_type_leaves_idle_unchanged() {
        let mut workflow = Workflow::new();
        let before = workflow.clone();

        for content_type in REJECTED_TYPES {
            let err = workflow
                .select_file(&FileCandidate::new("resume.pdf", 1_000, content_type))
                .unwrap_err();
            assert!(err.is_invalid_file_type());
            assert_eq!(workflow, before);
        }
        assert_eq!(workflow.state(), WorkflowState::Idle);
    }

    #[tokio::test]
    async fn test_invalid_type_leaves_complete_unchanged() {
        let mut workflow = completed_workflow().await;
        let before = workflow.clone();

        for content_type in REJECTED_TYPES {
            let err = workflow
                .select_file(&FileCandidate::new("photo.png", 1_000, content_type))
                .unwrap_err();
            assert!(err.is_invalid_file_type());
            assert_eq!(workflow, before);
        }
        assert_eq!(workflow.state(), WorkflowState::Complete);
        assert_eq!(workflow.selected_file().unwrap().name(), "resume.pdf");
    }

    #[test]
    fn test_accepted_types_record_name_and_size() {
        let candidates = [
            FileCandidate::new("resume.pdf", 120_000, "application/pdf"),
            FileCandidate::new("My Resume (final).docx", 0, DOCX_CONTENT_TYPE),
            FileCandidate::new("big.pdf", 40 * 1024 * 1024, "application/pdf"),
        ];

        for candidate in candidates {
            let mut workflow = Workflow::new();
            let file = workflow.select_file(&candidate).unwrap();
            assert_eq!(file.name(), candidate.name);
            assert_eq!(file.size(), candidate.size);
            assert_eq!(file.content_type(), candidate.content_type);
            assert_eq!(workflow.state(), WorkflowState::FileSelected);
            assert!(workflow.analysis().is_none());
        }
    }

    #[test]
    fn test_selecting_again_replaces_file() {
        let mut workflow = Workflow::new();
        workflow.select_file(&pdf("first.pdf", 10)).unwrap();
        workflow.select_file(&pdf("second.pdf", 20)).unwrap();
        assert_eq!(workflow.selected_file().unwrap().name(), "second.pdf");
        assert_eq!(workflow.state(), WorkflowState::FileSelected);
    }

    #[test]
    fn test_replacing_file_advances_generation() {
        let mut workflow = Workflow::new();
        workflow.select_file(&pdf("a.pdf", 1)).unwrap();
        let first = workflow.generation();

        workflow.select_file(&pdf("b.pdf", 2)).unwrap();
        assert!(workflow.generation() > first);

        let before = workflow.generation();
        assert!(workflow
            .select_file(&FileCandidate::new("c.png", 3, "image/png"))
            .is_err());
        assert_eq!(workflow.generation(), before);
    }

    #[tokio::test]
    async fn test_selecting_after_complete_clears_result() {
        let mut workflow = completed_workflow().await;
        workflow.select_file(&pdf("next.pdf", 99)).unwrap();
        assert_eq!(workflow.state(), WorkflowState::FileSelected);
        assert!(workflow.analysis().is_none());
    }

    #[test]
    fn test_size_limit_only_with_policy() {
        let oversized = pdf("huge.pdf", ADVERTISED_MAX_FILE_SIZE * 2);

        let mut workflow = Workflow::new();
        assert!(workflow.select_file(&oversized).is_ok());

        let mut strict = Workflow::with_policy(UploadPolicy::with_max_size(ADVERTISED_MAX_FILE_SIZE));
        let err = strict.select_file(&oversized).unwrap_err();
        assert!(matches!(
            err,
            WorkflowError::Selection(SelectionError::FileTooLarge { .. })
        ));
        assert_eq!(strict.state(), WorkflowState::Idle);
    }

    #[test]
    fn test_operations_outside_their_state() {
        let mut workflow = Workflow::new();
        assert!(matches!(
            workflow.begin_analysis(),
            Err(WorkflowError::InvalidTransition {
                state: WorkflowState::Idle,
                ..
            })
        ));
        assert!(workflow.copy_recommendations().is_err());
        assert!(workflow.share_results().is_err());

        workflow.select_file(&pdf("resume.pdf", 1)).unwrap();
        assert!(workflow.copy_recommendations().is_err());
        assert!(workflow.share_results().is_err());

        let _pending = workflow.begin_analysis().unwrap();
        assert_eq!(workflow.state(), WorkflowState::Analyzing);
        assert!(workflow.begin_analysis().is_err());
        assert!(matches!(
            workflow.select_file(&pdf("other.pdf", 1)),
            Err(WorkflowError::InvalidTransition {
                state: WorkflowState::Analyzing,
                ..
            })
        ));
        assert_eq!(workflow.selected_file().unwrap().name(), "resume.pdf");
        assert!(workflow.copy_recommendations().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_upload_analyze_reset_scenario() {
        let mut workflow = Workflow::new();

        let file = workflow.select_file(&pdf("resume.pdf", 120_000)).unwrap();
        assert_eq!(file.display_size(), "0.11 MB");
        assert_eq!(workflow.state(), WorkflowState::FileSelected);

        let start = Instant::now();
        let outcome = workflow
            .start_analysis(&MockAnalyzer::new(TokioDelay))
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(3000));
        assert_eq!(outcome, Completion::Applied);
        assert_eq!(workflow.state(), WorkflowState::Complete);
        assert_eq!(workflow.analysis().unwrap().overall_score, 78);
        assert_eq!(workflow.analysis().unwrap(), sample_analysis());

        workflow.reset();
        assert_eq!(workflow.state(), WorkflowState::Idle);
        assert!(workflow.selected_file().is_none());
        assert!(workflow.analysis().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_still_analyzing_before_delay_elapses() {
        let mut workflow = Workflow::new();
        workflow.select_file(&pdf("resume.pdf", 120_000)).unwrap();

        let pending = workflow.begin_analysis().unwrap();
        let analyzer = MockAnalyzer::new(TokioDelay);
        let run = tokio::time::timeout(Duration::from_millis(2999), pending.clone().run(&analyzer));
        assert!(run.await.is_err());
        assert_eq!(workflow.state(), WorkflowState::Analyzing);

        let completed = pending.run(&analyzer).await;
        assert_eq!(workflow.finish(completed).unwrap(), Completion::Applied);
        assert_eq!(workflow.state(), WorkflowState::Complete);
    }

    #[tokio::test]
    async fn test_reset_from_every_state() {
        let mut idle = Workflow::new();
        idle.reset();

        let mut selected = Workflow::new();
        selected.select_file(&pdf("a.pdf", 1)).unwrap();
        selected.reset();

        let mut analyzing = Workflow::new();
        analyzing.select_file(&pdf("a.pdf", 1)).unwrap();
        let _pending = analyzing.begin_analysis().unwrap();
        analyzing.reset();

        let mut complete = completed_workflow().await;
        complete.reset();

        for workflow in [idle, selected, analyzing, complete] {
            assert_eq!(workflow.state(), WorkflowState::Idle);
            assert!(workflow.selected_file().is_none());
            assert!(workflow.analysis().is_none());
        }
    }

    #[tokio::test]
    async fn test_late_completion_after_reset_is_discarded() {
        let analyzer = MockAnalyzer::new(NoDelay);
        let mut workflow = Workflow::new();
        workflow.select_file(&pdf("resume.pdf", 120_000)).unwrap();

        let pending = workflow.begin_analysis().unwrap();
        workflow.reset();

        let late = pending.run(&analyzer).await;
        assert_eq!(workflow.finish(late).unwrap(), Completion::Discarded);
        assert_eq!(workflow.state(), WorkflowState::Idle);
        assert!(workflow.analysis().is_none());
    }

    #[tokio::test]
    async fn test_late_completion_does_not_finish_newer_run() {
        let analyzer = MockAnalyzer::new(NoDelay);
        let mut workflow = Workflow::new();

        workflow.select_file(&pdf("old.pdf", 1)).unwrap();
        let stale = workflow.begin_analysis().unwrap();
        workflow.reset();

        workflow.select_file(&pdf("new.pdf", 2)).unwrap();
        let current = workflow.begin_analysis().unwrap();
        assert_ne!(stale.ticket(), current.ticket());

        let late = stale.run(&analyzer).await;
        assert_eq!(workflow.finish(late).unwrap(), Completion::Discarded);
        assert_eq!(workflow.state(), WorkflowState::Analyzing);

        let done = current.run(&analyzer).await;
        assert_eq!(workflow.finish(done).unwrap(), Completion::Applied);
        assert_eq!(workflow.selected_file().unwrap().name(), "new.pdf");
    }

    #[test]
    fn test_completion_from_external_runner() {
        let mut workflow = Workflow::new();
        workflow.select_file(&pdf("resume.pdf", 120_000)).unwrap();
        let pending = workflow.begin_analysis().unwrap();

        let completed = CompletedAnalysis::new(
            pending.ticket(),
            Err(AnalysisError::InvalidResponse("truncated body".into())),
        );
        assert_eq!(completed.ticket(), pending.ticket());

        let err = workflow.finish(completed).unwrap_err();
        assert!(matches!(err, WorkflowError::Analysis(AnalysisError::InvalidResponse(_))));
        assert_eq!(workflow.state(), WorkflowState::FileSelected);

        let pending = workflow.begin_analysis().unwrap();
        let done = CompletedAnalysis::new(pending.ticket(), Ok(sample_analysis().clone()));
        assert_eq!(workflow.finish(done).unwrap(), Completion::Applied);
        assert_eq!(workflow.analysis().unwrap().overall_score, 78);
    }

    #[tokio::test]
    async fn test_analyzer_error_returns_to_file_selected() {
        let mut workflow = Workflow::new();
        workflow.select_file(&pdf("resume.pdf", 120_000)).unwrap();

        let err = workflow.start_analysis(&FailingAnalyzer).await.unwrap_err();
        assert!(matches!(err, WorkflowError::Analysis(AnalysisError::Unavailable(_))));
        assert_eq!(workflow.state(), WorkflowState::FileSelected);
        assert_eq!(workflow.selected_file().unwrap().name(), "resume.pdf");

        let retry = workflow.start_analysis(&MockAnalyzer::new(NoDelay)).await;
        assert_eq!(retry.unwrap(), Completion::Applied);
    }

    #[tokio::test]
    async fn test_copy_and_share_when_complete() {
        let workflow = completed_workflow().await;

        let text = workflow.copy_recommendations().unwrap();
        assert!(text.starts_with("PrepFoundry Resume Analysis Recommendations:\n\n"));
        assert!(text.contains("Contact Information (Score: 90/100):\n"));
        assert!(text.contains("4. Ensure adequate white space to avoid a cluttered appearance\n"));

        let ack = workflow.share_results().unwrap();
        assert_eq!(ack.title, "Share link generated!");
    }
}
