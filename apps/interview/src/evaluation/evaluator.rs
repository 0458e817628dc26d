//! Answer evaluation: personal short-circuit, length guard, lexical scoring, feedback.

use tracing::debug;

use crate::corpus::{resolve_tags, QuestionCorpus, FALLBACK_REFERENCE_ANSWER};
use crate::evaluation::feedback::{
    correct_feedback, incorrect_feedback, PERSONAL_FEEDBACK, TOO_SHORT_FEEDBACK,
};
use crate::evaluation::scorer::AnswerScorer;
use crate::models::question::Question;
use crate::models::result::Evaluation;

/// Answers shorter than this (after trimming) are rejected without scoring.
pub const MIN_ANSWER_CHARS: usize = 10;

/// Similarity at or above this passes.
pub const PASS_THRESHOLD: f64 = 0.5;

/// Evaluates an answer to a selected question. Never fails.
pub fn evaluate_answer(
    scorer: &dyn AnswerScorer,
    question: &Question,
    user_answer: &str,
) -> Evaluation {
    if question.is_personal {
        return Evaluation {
            is_correct: true,
            feedback: PERSONAL_FEEDBACK.to_string(),
            correct_answer: question.reference_answer.clone(),
        };
    }

    let evaluation = grade_against_reference(scorer, &question.reference_answer, user_answer);
    debug!(
        question_id = %question.id,
        is_correct = evaluation.is_correct,
        "Answer evaluated"
    );
    evaluation
}

/// Evaluates an answer identified by role, difficulty and question text instead of a
/// `Question` value. Unknown tags or text grade against `FALLBACK_REFERENCE_ANSWER`.
pub fn evaluate_by_text(
    corpus: &QuestionCorpus,
    scorer: &dyn AnswerScorer,
    role: &str,
    difficulty: &str,
    question_text: &str,
    user_answer: &str,
) -> Evaluation {
    if let Some(personal) = corpus
        .personal_questions()
        .iter()
        .find(|q| q.text == question_text.trim())
    {
        return evaluate_answer(scorer, personal, user_answer);
    }

    let reference = resolve_tags(role, difficulty)
        .and_then(|(r, d)| corpus.position_of(r, d, question_text))
        .map(|index| corpus.reference_answer_for(role, difficulty, index))
        .unwrap_or(FALLBACK_REFERENCE_ANSWER);

    if reference == FALLBACK_REFERENCE_ANSWER {
        debug!(role, difficulty, "No reference answer found, grading against fallback");
    }

    grade_against_reference(scorer, reference, user_answer)
}

fn grade_against_reference(
    scorer: &dyn AnswerScorer,
    reference: &str,
    user_answer: &str,
) -> Evaluation {
    if user_answer.trim().chars().count() < MIN_ANSWER_CHARS {
        return Evaluation {
            is_correct: false,
            feedback: TOO_SHORT_FEEDBACK.to_string(),
            correct_answer: reference.to_string(),
        };
    }

    let report = scorer.score(reference, user_answer);
    let is_correct = report.similarity >= PASS_THRESHOLD;
    let feedback = if is_correct {
        correct_feedback(&report)
    } else {
        incorrect_feedback(&report)
    };

    debug!(
        similarity = report.similarity,
        matched = report.matched_terms.len(),
        key_terms = report.key_terms.len(),
        backend = %report.scorer_backend,
        "Answer scored"
    );

    Evaluation {
        is_correct,
        feedback,
        correct_answer: reference.to_string(),
    }
}
