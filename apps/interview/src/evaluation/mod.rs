// Question evaluation engine
// Implements: key-term extraction, pluggable similarity scoring, verdicts and feedback.

pub mod evaluator;
pub mod feedback;
pub mod scorer;
pub mod terms;
