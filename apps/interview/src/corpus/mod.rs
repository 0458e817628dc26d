#![allow(dead_code)]

//! Question corpus: embedded role × difficulty question banks with index-aligned
//! reference answers.
//!
//! The corpus is built once at startup from `data/question_bank.json` (compiled into
//! the binary) and shared read-only afterwards. All lookups are total: unknown roles,
//! difficulties or indices resolve to empty banks or `FALLBACK_REFERENCE_ANSWER`.

pub mod personal;

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{debug, info};

use crate::errors::EngineError;
use crate::models::question::{DifficultyTag, Question, RoleTag};

pub const FALLBACK_REFERENCE_ANSWER: &str =
    "This is a technical question that requires specific knowledge.";

const EMBEDDED_QUESTION_BANK: &str = include_str!("../../data/question_bank.json");

// ────────────────────────────────────────────────────────────────────────────
// Asset schema
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CorpusAsset {
    version: u32,
    banks: Vec<BankAsset>,
}

#[derive(Debug, Deserialize)]
struct BankAsset {
    role: RoleTag,
    difficulty: DifficultyTag,
    questions: Vec<String>,
    answers: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Corpus
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
struct Bank {
    questions: Vec<String>,
    answers: Vec<String>,
}

/// Immutable question corpus keyed by `(role, difficulty)`.
#[derive(Debug, Clone)]
pub struct QuestionCorpus {
    version: u32,
    banks: HashMap<(RoleTag, DifficultyTag), Bank>,
    personal: Vec<Question>,
}

impl QuestionCorpus {
    /// Builds the corpus compiled into the binary.
    pub fn embedded() -> Result<Self, EngineError> {
        Self::from_json(EMBEDDED_QUESTION_BANK)
    }

    /// Parses and validates a corpus asset.
    ///
    /// Fails if any bank has a different number of questions and answers, or if a
    /// `(role, difficulty)` pair appears twice.
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let asset: CorpusAsset = serde_json::from_str(raw)?;
        let mut banks = HashMap::with_capacity(asset.banks.len());

        for bank in asset.banks {
            if bank.questions.len() != bank.answers.len() {
                return Err(EngineError::CorpusMisaligned {
                    role: bank.role,
                    difficulty: bank.difficulty,
                    questions: bank.questions.len(),
                    answers: bank.answers.len(),
                });
            }

            let key = (bank.role, bank.difficulty);
            if banks.contains_key(&key) {
                return Err(EngineError::DuplicateBank {
                    role: bank.role,
                    difficulty: bank.difficulty,
                });
            }

            debug!(
                role = %bank.role,
                difficulty = %bank.difficulty,
                questions = bank.questions.len(),
                "Loaded question bank"
            );
            banks.insert(
                key,
                Bank {
                    questions: bank.questions,
                    answers: bank.answers,
                },
            );
        }

        info!(
            version = asset.version,
            banks = banks.len(),
            "Question corpus ready"
        );

        Ok(Self {
            version: asset.version,
            banks,
            personal: personal::personal_questions(),
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    /// Roles with at least one bank, in declaration order.
    pub fn roles(&self) -> Vec<RoleTag> {
        RoleTag::ALL
            .into_iter()
            .filter(|role| {
                DifficultyTag::ALL
                    .iter()
                    .any(|d| self.banks.contains_key(&(*role, *d)))
            })
            .collect()
    }

    pub fn personal_questions(&self) -> &[Question] {
        &self.personal
    }

    /// Question texts for a role/difficulty pair given as free-form tags.
    /// Empty for an unrecognised role or difficulty.
    pub fn questions_for(&self, role: &str, difficulty: &str) -> Vec<&str> {
        match resolve_tags(role, difficulty) {
            Some((role, difficulty)) => self
                .questions(role, difficulty)
                .iter()
                .map(String::as_str)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Reference answer at `index`, or `FALLBACK_REFERENCE_ANSWER` when anything is
    /// out of range.
    pub fn reference_answer_for(&self, role: &str, difficulty: &str, index: usize) -> &str {
        resolve_tags(role, difficulty)
            .and_then(|(role, difficulty)| self.reference_answers(role, difficulty).get(index))
            .map(String::as_str)
            .unwrap_or(FALLBACK_REFERENCE_ANSWER)
    }

    pub fn questions(&self, role: RoleTag, difficulty: DifficultyTag) -> &[String] {
        self.banks
            .get(&(role, difficulty))
            .map(|b| b.questions.as_slice())
            .unwrap_or(&[])
    }

    pub fn reference_answers(&self, role: RoleTag, difficulty: DifficultyTag) -> &[String] {
        self.banks
            .get(&(role, difficulty))
            .map(|b| b.answers.as_slice())
            .unwrap_or(&[])
    }

    /// Builds full `Question` values for a bank, ids assigned by position.
    pub fn technical_questions(&self, role: RoleTag, difficulty: DifficultyTag) -> Vec<Question> {
        let answers = self.reference_answers(role, difficulty);
        self.questions(role, difficulty)
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let reference = answers
                    .get(index)
                    .map(String::as_str)
                    .unwrap_or(FALLBACK_REFERENCE_ANSWER);
                Question::technical(role, difficulty, index, text.as_str(), reference)
            })
            .collect()
    }

    /// Position of a question text inside its bank. Exact match after trimming.
    pub fn position_of(&self, role: RoleTag, difficulty: DifficultyTag, text: &str) -> Option<usize> {
        let needle = text.trim();
        self.questions(role, difficulty)
            .iter()
            .position(|q| q.as_str() == needle)
    }
}

/// Parses both tags; `None` if either is unrecognised.
pub fn resolve_tags(role: &str, difficulty: &str) -> Option<(RoleTag, DifficultyTag)> {
    Some((RoleTag::parse(role)?, DifficultyTag::parse(difficulty)?))
}
