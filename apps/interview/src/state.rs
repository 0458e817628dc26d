use std::sync::Arc;

use rand::Rng;

use crate::config::Config;
use crate::corpus::QuestionCorpus;
use crate::evaluation::evaluator::{evaluate_answer, evaluate_by_text};
use crate::evaluation::scorer::AnswerScorer;
use crate::models::question::Question;
use crate::models::result::Evaluation;
use crate::selection::select_questions;

/// Shared engine state: immutable corpus plus the scoring backend.
/// Cheap to clone; handed to every grading task.
#[derive(Clone)]
pub struct EngineState {
    pub corpus: Arc<QuestionCorpus>,
    /// Pluggable answer scorer. Default: KeywordOverlapScorer.
    pub scorer: Arc<dyn AnswerScorer>,
    pub config: Config,
}

impl EngineState {
    pub fn select<R: Rng + ?Sized>(
        &self,
        role: &str,
        difficulty: &str,
        count: usize,
        rng: &mut R,
    ) -> Vec<Question> {
        select_questions(&self.corpus, role, difficulty, count, rng)
    }

    pub fn evaluate(&self, question: &Question, user_answer: &str) -> Evaluation {
        evaluate_answer(self.scorer.as_ref(), question, user_answer)
    }

    /// Evaluation keyed by role, difficulty and question text rather than a selected
    /// `Question`.
    #[allow(dead_code)]
    pub fn evaluate_text(
        &self,
        role: &str,
        difficulty: &str,
        question_text: &str,
        user_answer: &str,
    ) -> Evaluation {
        evaluate_by_text(
            &self.corpus,
            self.scorer.as_ref(),
            role,
            difficulty,
            question_text,
            user_answer,
        )
    }
}
