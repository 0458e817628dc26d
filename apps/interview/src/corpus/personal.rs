//! Role-independent opening questions. Every session starts with these, in this order.

use crate::models::question::{DifficultyTag, Question};

pub const PERSONAL_REFERENCE_ANSWER: &str = "This is a personal question where any response is considered correct as it varies for each individual.";

const PERSONAL_PROMPTS: [(&str, &str); 2] = [
    (
        "personal_1",
        "Please introduce yourself and tell us about your background.",
    ),
    (
        "personal_2",
        "What are your career goals and where do you see yourself in the next 5 years?",
    ),
];

pub fn personal_questions() -> Vec<Question> {
    PERSONAL_PROMPTS
        .iter()
        .map(|(id, text)| Question {
            id: id.to_string(),
            text: text.to_string(),
            role: None,
            difficulty: DifficultyTag::Easy,
            is_personal: true,
            reference_answer: PERSONAL_REFERENCE_ANSWER.to_string(),
        })
        .collect()
}
