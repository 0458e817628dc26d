//! Tokenisation and key-term extraction for lexical answer scoring.

/// Tokens must be strictly longer than this many characters to count, on both the
/// reference and the answer side.
pub const MIN_TERM_CHARS: usize = 3;

/// Only the first N distinct key terms of a reference answer are scored.
pub const MAX_KEY_TERMS: usize = 10;

/// Articles, pronouns, auxiliaries and connectives that never become key terms.
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "but", "not", "are", "you", "your", "yours", "with", "this",
    "that", "these", "those", "they", "them", "their", "there", "what", "which", "whom",
    "whose", "when", "where", "while", "have", "has", "had", "having", "been", "being",
    "were", "was", "will", "would", "shall", "should", "could", "might", "must", "does",
    "did", "from", "into", "than", "then", "also", "such", "each", "about", "itself",
];

/// Lowercase, whitespace-delimited tokens. Punctuation stays attached.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Answer tokens long enough to take part in matching.
pub fn content_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| is_long_enough(t))
        .collect()
}

/// Key terms of a reference answer: long, non-stop-word tokens, deduplicated,
/// first `MAX_KEY_TERMS` in reading order.
pub fn extract_key_terms(reference: &str) -> Vec<String> {
    let mut terms: Vec<String> = Vec::with_capacity(MAX_KEY_TERMS);

    for token in tokenize(reference) {
        if terms.len() == MAX_KEY_TERMS {
            break;
        }
        if !is_long_enough(&token) || is_stop_word(&token) {
            continue;
        }
        if !terms.contains(&token) {
            terms.push(token);
        }
    }

    terms
}

/// Bidirectional containment: either string contains the other.
pub fn term_matches(key_term: &str, token: &str) -> bool {
    token.contains(key_term) || key_term.contains(token)
}

/// Term without surrounding punctuation, for feedback text.
pub fn display_term(term: &str) -> &str {
    let trimmed = term.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        term
    } else {
        trimmed
    }
}

fn is_long_enough(token: &str) -> bool {
    token.chars().count() > MIN_TERM_CHARS
}

// Punctuation is ignored here so "while," is still a stop word.
fn is_stop_word(token: &str) -> bool {
    let bare = token.trim_matches(|c: char| !c.is_alphanumeric());
    STOP_WORDS.contains(&bare)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTTPS_REFERENCE: &str = "HTTPS uses SSL/TLS encryption for secure data transmission, while HTTP sends data in plain text. HTTPS is essential for protecting sensitive information.";

    #[test]
    fn test_tokenize_lowercases_and_splits_on_whitespace() {
        assert_eq!(
            tokenize("  Hello\tWORLD,\nagain "),
            vec!["hello", "world,", "again"]
        );
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_key_terms_for_https_reference() {
        let terms = extract_key_terms(HTTPS_REFERENCE);
        assert_eq!(
            terms,
            vec![
                "https",
                "uses",
                "ssl/tls",
                "encryption",
                "secure",
                "data",
                "transmission,",
                "http",
                "sends",
                "plain",
            ]
        );
    }

    #[test]
    fn test_key_terms_capped_at_ten() {
        let text = "alpha bravo charlie delta echoes foxtrot golfer hotel india juliet kilos limas";
        let terms = extract_key_terms(text);
        assert_eq!(terms.len(), MAX_KEY_TERMS);
        assert_eq!(terms[0], "alpha");
        assert_eq!(terms[9], "juliet");
    }

    #[test]
    fn test_key_terms_skip_short_and_stop_words() {
        let terms = extract_key_terms("The cat would have been there, while data flows.");
        assert_eq!(terms, vec!["data", "flows."]);
    }

    #[test]
    fn test_key_terms_deduplicated_in_reading_order() {
        let terms = extract_key_terms("cache Cache CACHE layer cache");
        assert_eq!(terms, vec!["cache", "layer"]);
    }

    #[test]
    fn test_content_tokens_drop_short_words() {
        assert_eq!(content_tokens("it is an API call"), vec!["call"]);
    }

    #[test]
    fn test_term_matches_both_directions() {
        assert!(term_matches("database", "databases"));
        assert!(term_matches("databases", "database"));
        assert!(!term_matches("cache", "queue"));
    }

    #[test]
    fn test_display_term_strips_punctuation() {
        assert_eq!(display_term("transmission,"), "transmission");
        assert_eq!(display_term("(representational"), "representational");
        assert_eq!(display_term("ssl/tls"), "ssl/tls");
        assert_eq!(display_term("..."), "...");
    }
}
