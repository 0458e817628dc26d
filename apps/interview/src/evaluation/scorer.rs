//! Answer scoring: pluggable, trait-based scorer that measures a candidate answer
//! against a reference answer.
//!
//! Default: `KeywordOverlapScorer` (pure-Rust, deterministic, no external calls).
//!
//! `EngineState` holds an `Arc<dyn AnswerScorer>`, chosen at startup.

use serde::{Deserialize, Serialize};

use crate::evaluation::terms::{content_tokens, extract_key_terms, term_matches};

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Lexical comparison of one answer against one reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityReport {
    pub key_terms: Vec<String>,
    pub matched_terms: Vec<String>,
    /// Key terms not found in the answer, in reading order.
    pub missing_terms: Vec<String>,
    pub similarity: f64, // 0.0 – 1.0
    pub scorer_backend: String,
}

impl SimilarityReport {
    pub fn percent(&self) -> u32 {
        (self.similarity * 100.0).round() as u32
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching the evaluator or the
/// session grader. Scoring must be pure: same inputs, same report.
pub trait AnswerScorer: Send + Sync {
    fn score(&self, reference: &str, answer: &str) -> SimilarityReport;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordOverlapScorer (default)
// ────────────────────────────────────────────────────────────────────────────

/// Keyword-overlap scorer.
///
/// Algorithm:
/// 1. key terms = first 10 distinct reference tokens longer than 3 chars, stop words removed
/// 2. a key term matches if any answer token (also > 3 chars) contains it or is contained in it
/// 3. similarity = matched / max(key_terms, 1)
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordOverlapScorer;

impl AnswerScorer for KeywordOverlapScorer {
    fn score(&self, reference: &str, answer: &str) -> SimilarityReport {
        compute_keyword_overlap(reference, answer)
    }
}

fn compute_keyword_overlap(reference: &str, answer: &str) -> SimilarityReport {
    let key_terms = extract_key_terms(reference);
    let answer_tokens = content_tokens(answer);

    let (matched_terms, missing_terms): (Vec<String>, Vec<String>) = key_terms
        .iter()
        .cloned()
        .partition(|term| answer_tokens.iter().any(|tok| term_matches(term, tok)));

    let similarity = matched_terms.len() as f64 / key_terms.len().max(1) as f64;

    SimilarityReport {
        key_terms,
        matched_terms,
        missing_terms,
        similarity,
        scorer_backend: "keyword".to_string(),
    }
}
