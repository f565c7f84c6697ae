//! Text canonicalization shared by queries and corpus fields

/// Lowercase, trim and collapse every whitespace run to a single space.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split normalized text into words.
/// Leading and trailing ASCII punctuation is stripped, so "care," yields "care"
/// while inner punctuation such as "x-ray" survives.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .map(|word| word.trim_matches(|c: char| c.is_ascii_punctuation()))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether `phrase` occurs in `tokens` as a run of whole words
pub fn contains_phrase(tokens: &[String], phrase: &str) -> bool {
    let words: Vec<&str> = phrase.split(' ').filter(|w| !w.is_empty()).collect();
    if words.is_empty() || words.len() > tokens.len() {
        return false;
    }
    tokens
        .windows(words.len())
        .any(|window| window.iter().zip(&words).all(|(t, w)| t == w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Dr   Jane\tSmith \n"), "dr jane smith");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for s in ["Cardiology", "  Heart   CARE ", "", "x-ray  imaging"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_tokenize_strips_edge_punctuation() {
        let tokens = tokenize("Heart care, cardiac (surgery) and X-ray.");
        assert_eq!(tokens, vec!["heart", "care", "cardiac", "surgery", "and", "x-ray"]);
    }

    #[test]
    fn test_contains_phrase_whole_words() {
        let tokens = tokenize("Diagnostic imaging and ultrasound");
        assert!(contains_phrase(&tokens, "imaging"));
        assert!(contains_phrase(&tokens, "imaging and ultrasound"));
        // "aging" is inside "imaging" but not a word of its own
        assert!(!contains_phrase(&tokens, "aging"));
        assert!(!contains_phrase(&tokens, ""));
    }
}
