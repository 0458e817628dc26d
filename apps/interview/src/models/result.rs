use serde::{Deserialize, Serialize};

use crate::models::question::Question;

/// Verdict for a single answer, as returned by the evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub is_correct: bool,
    pub feedback: String,
    /// Reference text from the corpus, returned regardless of verdict.
    pub correct_answer: String,
}

/// One answered question in a session. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub feedback: String,
}

impl AnswerResult {
    pub fn new(question: &Question, user_answer: impl Into<String>, evaluation: Evaluation) -> Self {
        Self {
            question: question.text.clone(),
            user_answer: user_answer.into(),
            correct_answer: evaluation.correct_answer,
            is_correct: evaluation.is_correct,
            feedback: evaluation.feedback,
        }
    }
}
