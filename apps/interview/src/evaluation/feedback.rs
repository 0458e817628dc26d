//! Feedback text shown to the candidate after each answer.

use crate::evaluation::scorer::SimilarityReport;
use crate::evaluation::terms::display_term;

pub const PERSONAL_FEEDBACK: &str =
    "Thank you for sharing! Personal responses help us understand you better.";

pub const TOO_SHORT_FEEDBACK: &str =
    "Your answer is too short. Please provide a more detailed response.";

/// At or above this similarity a correct answer is called strong.
pub const STRONG_THRESHOLD: f64 = 0.8;

/// Uncovered key terms named in feedback for an incorrect answer.
const MAX_HINT_TERMS: usize = 3;

pub fn correct_feedback(report: &SimilarityReport) -> String {
    let mut feedback = format!(
        "Good answer! You covered {}% of the key concepts. ",
        report.percent()
    );
    if report.similarity < STRONG_THRESHOLD {
        feedback.push_str("Consider elaborating further with more specific technical details.");
    } else {
        feedback.push_str("Excellent! You demonstrated a strong understanding of the topic.");
    }
    feedback
}

pub fn incorrect_feedback(report: &SimilarityReport) -> String {
    let hints: Vec<&str> = report
        .missing_terms
        .iter()
        .take(MAX_HINT_TERMS)
        .map(|t| display_term(t))
        .collect();

    let mut feedback = "Your answer needs improvement. ".to_string();
    if !hints.is_empty() {
        feedback.push_str(&format!(
            "Try to cover key concepts such as: {}. ",
            hints.join(", ")
        ));
    }
    feedback.push_str("Review the correct answer to understand the expected depth.");
    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(similarity: f64, missing: &[&str]) -> SimilarityReport {
        SimilarityReport {
            key_terms: vec![],
            matched_terms: vec![],
            missing_terms: missing.iter().map(|s| s.to_string()).collect(),
            similarity,
            scorer_backend: "keyword".to_string(),
        }
    }

    #[test]
    fn test_correct_below_strong_suggests_elaborating() {
        let fb = correct_feedback(&report(0.6, &[]));
        assert!(fb.contains("60%"), "got {fb}");
        assert!(fb.contains("elaborating"));
    }

    #[test]
    fn test_correct_at_strong_threshold_affirms() {
        let fb = correct_feedback(&report(0.8, &[]));
        assert!(fb.contains("80%"));
        assert!(fb.contains("strong understanding"));
    }

    #[test]
    fn test_incorrect_names_first_three_missing_terms() {
        let fb = incorrect_feedback(&report(0.2, &["ssl/tls", "secure,", "transmission", "plain"]));
        assert!(fb.contains("ssl/tls, secure, transmission."), "got {fb}");
        assert!(!fb.contains("plain"));
        assert!(fb.contains("Review the correct answer"));
    }

    #[test]
    fn test_incorrect_without_missing_terms_still_points_to_reference() {
        let fb = incorrect_feedback(&report(0.0, &[]));
        assert!(!fb.contains("such as"));
        assert!(fb.contains("Review the correct answer"));
    }
}
