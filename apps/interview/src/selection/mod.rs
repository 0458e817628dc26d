//! Question selection: personal opener plus a shuffled sample of technical questions.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::corpus::{resolve_tags, QuestionCorpus};
use crate::models::question::Question;

/// Personal questions first (fixed order), then up to `count` technical questions for
/// the role/difficulty in uniformly shuffled order.
///
/// Unknown tags yield only the personal questions. Randomness comes from `rng` so
/// callers can seed it.
pub fn select_questions<R: Rng + ?Sized>(
    corpus: &QuestionCorpus,
    role: &str,
    difficulty: &str,
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    let mut selected = corpus.personal_questions().to_vec();

    let Some((role_tag, difficulty_tag)) = resolve_tags(role, difficulty) else {
        warn!(role, difficulty, "Unrecognised role or difficulty, personal questions only");
        return selected;
    };

    let mut technical = corpus.technical_questions(role_tag, difficulty_tag);
    let available = technical.len();
    technical.shuffle(rng);
    technical.truncate(count);

    debug!(
        role = %role_tag,
        difficulty = %difficulty_tag,
        requested = count,
        available,
        selected = technical.len(),
        "Technical questions selected"
    );

    selected.extend(technical);
    selected
}
