//! Bigram similarity for short strings

use std::collections::HashMap;

use super::normalize::normalize;

/// Dice coefficient over the character bigrams of both normalized strings.
///
/// Whitespace is ignored, identical strings score 1.0 and anything shorter
/// than two characters scores 0.0 against a different string. An empty
/// string scores 0.0 against any non-empty one, even one that is only
/// whitespace. Symmetric.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() != b.is_empty() {
        return 0.0;
    }

    let a = compact(a);
    let b = compact(b);
    if a == b {
        return 1.0;
    }
    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }

    let mut counts: HashMap<(char, char), usize> = HashMap::new();
    for pair in a.windows(2) {
        *counts.entry((pair[0], pair[1])).or_insert(0) += 1;
    }

    // Multiset intersection: each bigram of `a` is consumed at most once
    let mut shared = 0usize;
    for pair in b.windows(2) {
        if let Some(count) = counts.get_mut(&(pair[0], pair[1])) {
            if *count > 0 {
                *count -= 1;
                shared += 1;
            }
        }
    }

    (2 * shared) as f64 / (a.len() + b.len() - 2) as f64
}

/// Normalized characters with all whitespace removed
fn compact(text: &str) -> Vec<char> {
    normalize(text).chars().filter(|c| !c.is_whitespace()).collect()
}
