//! Plain-text report and user acknowledgments for a finished analysis.

use crate::config::APP_NAME;
use crate::models::AnalysisResult;

/// Short confirmation shown to the user after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acknowledgment {
    pub title: &'static str,
    pub description: &'static str,
}

/// Shown after the recommendations are copied.
pub const RECOMMENDATIONS_COPIED: Acknowledgment = Acknowledgment {
    title: "Recommendations copied!",
    description: "All recommendations have been copied to your clipboard.",
};

/// Shown after "Share Results". No link is actually produced.
pub const RESULTS_SHARED: Acknowledgment = Acknowledgment {
    title: "Share link generated!",
    description: "Link copied to clipboard. You can now share your results.",
};

/// Flatten every section into the clipboard text block.
///
/// Sections keep their order; recommendations are numbered from 1.
pub fn recommendations_text(analysis: &AnalysisResult) -> String {
    let mut text = format!("{APP_NAME} Resume Analysis Recommendations:\n\n");

    for section in &analysis.sections {
        text.push_str(&format!(
            "{} (Score: {}/100):\n{}\nRecommendations:\n",
            section.name, section.score, section.feedback
        ));
        for (index, rec) in section.recommendations.iter().enumerate() {
            text.push_str(&format!("{}. {}\n", index + 1, rec));
        }
        text.push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sample_analysis;
    use crate::models::{SectionKind, SectionScore};

    #[test]
    fn test_every_name_and_recommendation_once_in_order() {
        let analysis = sample_analysis();
        let text = recommendations_text(analysis);

        let mut cursor = 0;
        for section in &analysis.sections {
            assert_eq!(text.matches(section.name.as_str()).count(), 1, "{}", section.name);
            let at = text[cursor..].find(section.name.as_str()).unwrap() + cursor;
            cursor = at;

            for rec in &section.recommendations {
                assert_eq!(text.matches(rec.as_str()).count(), 1, "{rec}");
                let at = text[cursor..].find(rec.as_str()).unwrap() + cursor;
                cursor = at;
            }
        }
    }

    #[test]
    fn test_block_layout() {
        let analysis = AnalysisResult {
            overall_score: 50,
            sections: vec![SectionScore {
                name: "Skills".into(),
                kind: SectionKind::Skills,
                score: 50,
                feedback: "Needs work.".into(),
                recommendations: vec!["Group by category".into(), "Drop stale tools".into()],
            }],
            strengths: vec![],
            weaknesses: vec![],
            keywords: vec![],
        };

        assert_eq!(
            recommendations_text(&analysis),
            "PrepFoundry Resume Analysis Recommendations:\n\n\
             Skills (Score: 50/100):\n\
             Needs work.\n\
             Recommendations:\n\
             1. Group by category\n\
             2. Drop stale tools\n\
             \n"
        );
    }

    #[test]
    fn test_header_only_without_sections() {
        let analysis = AnalysisResult {
            overall_score: 0,
            sections: vec![],
            strengths: vec![],
            weaknesses: vec![],
            keywords: vec![],
        };
        assert_eq!(
            recommendations_text(&analysis),
            "PrepFoundry Resume Analysis Recommendations:\n\n"
        );
    }
}
