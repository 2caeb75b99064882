//! Resume analysis boundary.
//!
//! [`Analyzer`] is the request/response seam a real scoring backend would
//! plug into. The shipped implementation is [`MockAnalyzer`], which waits a
//! fixed [`ANALYSIS_DELAY`] and answers with [`sample_analysis`] whatever the
//! file.
//!
//! Timers are runtime specific, so the wait goes through [`Delay`]: the
//! browser build passes a `gloo-timers` sleep, tests pass a tokio sleep.

use once_cell::sync::Lazy;
use std::future::Future;
use std::time::Duration;

use crate::config::ANALYSIS_DELAY;
use crate::error::AnalysisError;
use crate::models::{AnalysisResult, SectionKind, SectionScore, SelectedFile};

/// Produces an analysis for a selected file.
pub trait Analyzer {
    fn analyze(
        &self,
        file: &SelectedFile,
    ) -> impl Future<Output = Result<AnalysisResult, AnalysisError>>;
}

/// An asynchronous sleep.
pub trait Delay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Delay that completes immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}

/// Canned analyzer standing in for a backend call.
#[derive(Debug, Clone)]
pub struct MockAnalyzer<D> {
    delay: D,
    latency: Duration,
}

impl<D: Delay> MockAnalyzer<D> {
    /// Analyzer with the standard 3 second latency.
    pub fn new(delay: D) -> Self {
        Self::with_latency(delay, ANALYSIS_DELAY)
    }

    pub fn with_latency(delay: D, latency: Duration) -> Self {
        Self { delay, latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl<D: Delay> Analyzer for MockAnalyzer<D> {
    async fn analyze(&self, file: &SelectedFile) -> Result<AnalysisResult, AnalysisError> {
        log::debug!(
            "Simulating analysis of '{}' ({} bytes) for {:?}",
            file.name(),
            file.size(),
            self.latency
        );
        self.delay.wait(self.latency).await;
        Ok(sample_analysis().clone())
    }
}

/// The fixed analysis every mock run returns.
pub fn sample_analysis() -> &'static AnalysisResult {
    &SAMPLE_ANALYSIS
}

fn section(
    name: &str,
    kind: SectionKind,
    score: u8,
    feedback: &str,
    recommendations: &[&str],
) -> SectionScore {
    SectionScore {
        name: name.to_string(),
        kind,
        score,
        feedback: feedback.to_string(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static SAMPLE_ANALYSIS: Lazy<AnalysisResult> = Lazy::new(|| AnalysisResult {
    overall_score: 78,
    sections: vec![
        section(
            "Contact Information",
            SectionKind::Contact,
            90,
            "Your contact information is well-structured and complete.",
            &[
                "Consider adding your LinkedIn profile URL",
                "Make sure your email is professional (firstname.lastname@domain.com)",
            ],
        ),
        section(
            "Summary/Objective",
            SectionKind::Summary,
            70,
            "Your summary is good but could be more impactful and targeted.",
            &[
                "Tailor your summary to match the specific job description",
                "Include 2-3 key accomplishments with measurable results",
                "Keep it concise (3-4 lines maximum)",
            ],
        ),
        section(
            "Work Experience",
            SectionKind::Experience,
            75,
            "Your work experience section is informative but lacks quantifiable achievements.",
            &[
                "Add metrics and numbers to showcase your impact (e.g., 'Increased sales by 20%')",
                "Use strong action verbs at the beginning of each bullet point",
                "Focus on achievements rather than responsibilities",
                "Ensure chronological order (most recent first)",
            ],
        ),
        section(
            "Education",
            SectionKind::Education,
            85,
            "Your education section is well-formatted and includes relevant information.",
            &[
                "Include your GPA if it's above 3.5",
                "Add relevant coursework if you're a recent graduate",
                "Consider listing academic achievements or honors",
            ],
        ),
        section(
            "Skills",
            SectionKind::Skills,
            65,
            "Your skills section needs better organization and more relevant technical skills.",
            &[
                "Organize skills by category (technical, soft, languages, etc.)",
                "Prioritize skills mentioned in the job descriptions you're targeting",
                "Remove outdated or irrelevant skills",
                "Consider adding proficiency levels for certain skills",
            ],
        ),
        section(
            "Formatting",
            SectionKind::Formatting,
            80,
            "Your resume has good formatting but could be more consistent.",
            &[
                "Ensure consistent font sizes and styles throughout",
                "Limit your resume to 1 page (2 pages maximum for experienced professionals)",
                "Use bullet points for better readability",
                "Ensure adequate white space to avoid a cluttered appearance",
            ],
        ),
    ],
    strengths: strings(&[
        "Clear organization of information",
        "Good use of action verbs",
        "Appropriate length for your experience level",
        "Relevant education credentials highlighted",
    ]),
    weaknesses: strings(&[
        "Lack of quantifiable achievements",
        "Generic summary that doesn't showcase unique value",
        "Some formatting inconsistencies",
        "Skills section needs better categorization",
    ]),
    keywords: strings(&[
        "project management",
        "data analysis",
        "team leadership",
        "JavaScript",
        "React",
        "customer service",
        "problem-solving",
        "communication",
    ]),
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentKind, ScoreBand};
    use tokio::time::Instant;

    struct TokioDelay;

    impl Delay for TokioDelay {
        async fn wait(&self, duration: Duration) {
            tokio::time::sleep(duration).await;
        }
    }

    fn file(name: &str, size: u64, kind: DocumentKind) -> SelectedFile {
        SelectedFile::new(name.to_string(), size, kind)
    }

    #[test]
    fn test_sample_analysis_shape() {
        let analysis = sample_analysis();
        assert_eq!(analysis.overall_score, 78);
        assert_eq!(analysis.band(), ScoreBand::Fair);

        let names: Vec<&str> = analysis.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Contact Information",
                "Summary/Objective",
                "Work Experience",
                "Education",
                "Skills",
                "Formatting",
            ]
        );
        let scores: Vec<u8> = analysis.sections.iter().map(|s| s.score).collect();
        assert_eq!(scores, vec![90, 70, 75, 85, 65, 80]);

        assert_eq!(analysis.strengths.len(), 4);
        assert_eq!(analysis.weaknesses.len(), 4);
        assert_eq!(analysis.keywords.len(), 8);
        assert_eq!(analysis.recommendation_count(), 20);
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_waits_three_seconds() {
        let analyzer = MockAnalyzer::new(TokioDelay);
        assert_eq!(analyzer.latency(), Duration::from_millis(3000));

        let start = Instant::now();
        let result = analyzer
            .analyze(&file("resume.pdf", 120_000, DocumentKind::Pdf))
            .await
            .unwrap();

        assert!(start.elapsed() >= Duration::from_millis(3000));
        assert_eq!(result.overall_score, 78);
    }

    #[tokio::test]
    async fn test_result_independent_of_file() {
        let analyzer = MockAnalyzer::new(NoDelay);

        let a = analyzer
            .analyze(&file("resume.pdf", 120_000, DocumentKind::Pdf))
            .await
            .unwrap();
        let b = analyzer
            .analyze(&file("other.docx", 1, DocumentKind::Docx))
            .await
            .unwrap();

        assert_eq!(a, b);
        assert_eq!(&a, sample_analysis());
    }
}
