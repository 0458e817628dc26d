//! Practice session: question set, concurrent batch grading, results summary.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::info;
use uuid::Uuid;

use crate::errors::EngineError;
use crate::models::question::{DifficultyTag, Question, RoleTag};
use crate::models::result::AnswerResult;
use crate::state::EngineState;

// ────────────────────────────────────────────────────────────────────────────
// Session
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewSession {
    pub id: Uuid,
    /// Tags as requested; an unknown role or difficulty still yields a session.
    pub role: String,
    pub difficulty: String,
    pub questions: Vec<Question>,
    pub started_at: DateTime<Utc>,
}

impl InterviewSession {
    pub fn start<R: Rng + ?Sized>(
        state: &EngineState,
        role: &str,
        difficulty: &str,
        count: usize,
        rng: &mut R,
    ) -> Self {
        let questions = state.select(role, difficulty, count, rng);
        let session = Self {
            id: Uuid::new_v4(),
            role: role.to_string(),
            difficulty: difficulty.to_string(),
            questions,
            started_at: Utc::now(),
        };
        info!(
            session_id = %session.id,
            role,
            difficulty,
            questions = session.questions.len(),
            "Interview session started"
        );
        session
    }

    /// Display heading, e.g. "Backend Developer · Easy". Falls back to the raw tags.
    pub fn heading(&self) -> String {
        let role = RoleTag::parse(&self.role)
            .map(|r| r.label().to_string())
            .unwrap_or_else(|| self.role.clone());
        let difficulty = DifficultyTag::parse(&self.difficulty)
            .map(|d| d.label().to_string())
            .unwrap_or_else(|| self.difficulty.clone());
        format!("{role} · {difficulty}")
    }
}

/// One question paired with the candidate's answer, in the order it was asked.
#[derive(Debug, Clone)]
pub struct Submission {
    pub question: Question,
    pub answer: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Grading
// ────────────────────────────────────────────────────────────────────────────

/// Grades every submission on the blocking pool. Results come back in submission
/// order regardless of completion order.
pub async fn grade_session(
    state: &EngineState,
    submissions: Vec<Submission>,
) -> Result<Vec<AnswerResult>, EngineError> {
    let handles: Vec<JoinHandle<AnswerResult>> = submissions
        .into_iter()
        .map(|submission| {
            let state = state.clone();
            tokio::task::spawn_blocking(move || {
                let evaluation = state.evaluate(&submission.question, &submission.answer);
                AnswerResult::new(&submission.question, submission.answer, evaluation)
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        let result = handle
            .await
            .map_err(|e| EngineError::Internal(anyhow::Error::from(e)))?;
        results.push(result);
    }
    Ok(results)
}

// ────────────────────────────────────────────────────────────────────────────
// Summary
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceTier {
    Strong,
    Moderate,
    Weak,
}

impl PerformanceTier {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            PerformanceTier::Strong
        } else if score >= 60 {
            PerformanceTier::Moderate
        } else {
            PerformanceTier::Weak
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub total_questions: usize,
    pub correct_answers: usize,
    pub incorrect_answers: usize,
    pub score: u32, // 0 – 100
    pub tier: PerformanceTier,
    pub message: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub elapsed_secs: i64,
}

impl SessionSummary {
    pub fn from_results(results: &[AnswerResult], started_at: DateTime<Utc>) -> Self {
        let total_questions = results.len();
        let correct_answers = results.iter().filter(|r| r.is_correct).count();
        let score = if total_questions == 0 {
            0
        } else {
            ((correct_answers as f64 / total_questions as f64) * 100.0).round() as u32
        };
        let completed_at = Utc::now();

        Self {
            total_questions,
            correct_answers,
            incorrect_answers: total_questions - correct_answers,
            score,
            tier: PerformanceTier::from_score(score),
            message: score_message(score).to_string(),
            started_at,
            completed_at,
            elapsed_secs: (completed_at - started_at).num_seconds().max(0),
        }
    }
}

fn score_message(score: u32) -> &'static str {
    if score >= 90 {
        "Outstanding! You're ready for any interview!"
    } else if score >= 80 {
        "Excellent performance! You're well-prepared!"
    } else if score >= 70 {
        "Good job! A little more practice will perfect your skills!"
    } else if score >= 60 {
        "Not bad! Focus on improving your weak areas!"
    } else {
        "Keep practicing! Every expert was once a beginner!"
    }
}

/// Full session output written by the binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub session_id: Uuid,
    pub role: String,
    pub difficulty: String,
    pub results: Vec<AnswerResult>,
    pub summary: SessionSummary,
}

impl SessionReport {
    pub fn new(session: &InterviewSession, results: Vec<AnswerResult>) -> Self {
        let summary = SessionSummary::from_results(&results, session.started_at);
        info!(
            session_id = %session.id,
            score = summary.score,
            correct = summary.correct_answers,
            total = summary.total_questions,
            "Interview session completed"
        );
        Self {
            session_id: session.id,
            role: session.role.clone(),
            difficulty: session.difficulty.clone(),
            results,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::corpus::QuestionCorpus;
    use crate::evaluation::feedback::{PERSONAL_FEEDBACK, TOO_SHORT_FEEDBACK};
    use crate::evaluation::scorer::KeywordOverlapScorer;
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn test_state() -> EngineState {
        EngineState {
            corpus: Arc::new(QuestionCorpus::embedded().unwrap()),
            scorer: Arc::new(KeywordOverlapScorer),
            config: Config {
                role: "backend".to_string(),
                difficulty: "easy".to_string(),
                question_count: 3,
                shuffle_seed: None,
                rust_log: "info".to_string(),
            },
        }
    }

    fn result(is_correct: bool) -> AnswerResult {
        AnswerResult {
            question: "q".to_string(),
            user_answer: "a".to_string(),
            correct_answer: "c".to_string(),
            is_correct,
            feedback: String::new(),
        }
    }

    #[test]
    fn test_session_start_includes_personal_questions() {
        let state = test_state();
        let session =
            InterviewSession::start(&state, "devops", "hard", 4, &mut StdRng::seed_from_u64(5));
        assert_eq!(session.questions.len(), 6);
        assert!(session.questions[0].is_personal);
        assert_eq!(session.heading(), "DevOps Engineer · Hard");
    }

    #[test]
    fn test_heading_falls_back_to_raw_tags() {
        let state = test_state();
        let session =
            InterviewSession::start(&state, "astronaut", "medium", 4, &mut StdRng::seed_from_u64(5));
        assert_eq!(session.questions.len(), 2);
        assert_eq!(session.heading(), "astronaut · Intermediate");
    }

    #[tokio::test]
    async fn test_grade_session_preserves_submission_order() {
        let state = test_state();
        let session =
            InterviewSession::start(&state, "backend", "easy", 10, &mut StdRng::seed_from_u64(11));

        let submissions: Vec<Submission> = session
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| Submission {
                question: q.clone(),
                // alternate between the reference answer and an empty answer
                answer: if i % 2 == 0 {
                    q.reference_answer.clone()
                } else {
                    String::new()
                },
            })
            .collect();

        let results = grade_session(&state, submissions.clone()).await.unwrap();
        assert_eq!(results.len(), submissions.len());
        for (result, submission) in results.iter().zip(&submissions) {
            assert_eq!(result.question, submission.question.text);
            assert_eq!(result.user_answer, submission.answer);
            assert_eq!(result.correct_answer, submission.question.reference_answer);
        }

        // personal questions pass regardless of content
        assert_eq!(results[0].feedback, PERSONAL_FEEDBACK);
        assert_eq!(results[1].feedback, PERSONAL_FEEDBACK);
        assert!(results[1].is_correct);
        // index 3 is technical with an empty answer
        assert!(!results[3].is_correct);
        assert_eq!(results[3].feedback, TOO_SHORT_FEEDBACK);
        assert!(results[2].is_correct);
    }

    #[tokio::test]
    async fn test_grade_empty_session() {
        let state = test_state();
        let results = grade_session(&state, Vec::new()).await.unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_summary_score_rounds_percentage() {
        let results = vec![result(true), result(true), result(false)];
        let summary = SessionSummary::from_results(&results, Utc::now());
        assert_eq!(summary.total_questions, 3);
        assert_eq!(summary.correct_answers, 2);
        assert_eq!(summary.incorrect_answers, 1);
        assert_eq!(summary.score, 67);
        assert_eq!(summary.tier, PerformanceTier::Moderate);
        assert_eq!(summary.message, "Not bad! Focus on improving your weak areas!");
    }

    #[test]
    fn test_summary_empty_session_scores_zero() {
        let summary = SessionSummary::from_results(&[], Utc::now());
        assert_eq!(summary.score, 0);
        assert_eq!(summary.tier, PerformanceTier::Weak);
    }

    #[test]
    fn test_summary_elapsed_time() {
        let started = Utc::now() - Duration::seconds(90);
        let summary = SessionSummary::from_results(&[result(true)], started);
        assert!(summary.elapsed_secs >= 90);
        assert_eq!(summary.score, 100);
        assert_eq!(summary.tier, PerformanceTier::Strong);
    }

    #[test]
    fn test_score_message_tiers() {
        assert!(score_message(95).starts_with("Outstanding"));
        assert!(score_message(80).starts_with("Excellent"));
        assert!(score_message(79).starts_with("Good job"));
        assert!(score_message(60).starts_with("Not bad"));
        assert!(score_message(0).starts_with("Keep practicing"));
    }

    #[test]
    fn test_report_serializes_snake_case_tier() {
        let state = test_state();
        let session =
            InterviewSession::start(&state, "mobile", "easy", 1, &mut StdRng::seed_from_u64(2));
        let report = SessionReport::new(&session, vec![result(true)]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["summary"]["tier"], "strong");
        assert_eq!(json["role"], "mobile");
    }
}
