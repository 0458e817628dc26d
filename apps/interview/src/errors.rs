use thiserror::Error;

use crate::models::question::{DifficultyTag, RoleTag};

/// Engine-level error type.
///
/// Evaluation and selection are total and never produce one of these; only corpus
/// construction and session grading can fail.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Corpus parse error: {0}")]
    CorpusParse(#[from] serde_json::Error),

    #[error(
        "Corpus misaligned for {role}/{difficulty}: {questions} questions but {answers} reference answers"
    )]
    CorpusMisaligned {
        role: RoleTag,
        difficulty: DifficultyTag,
        questions: usize,
        answers: usize,
    },

    #[error("Duplicate corpus bank: {role}/{difficulty}")]
    DuplicateBank {
        role: RoleTag,
        difficulty: DifficultyTag,
    },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl EngineError {
    /// Stable machine-readable code, logged alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::CorpusParse(_) => "CORPUS_PARSE_ERROR",
            EngineError::CorpusMisaligned { .. } => "CORPUS_MISALIGNED",
            EngineError::DuplicateBank { .. } => "CORPUS_DUPLICATE_BANK",
            EngineError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}
