//! Normalized edit-distance similarity.

/// Similarity of two strings in `[0, 1]`.
///
/// Both sides are lowercased and trimmed. An empty side scores 0 (even
/// against another empty side), equal strings score 1, and everything else
/// scores `1 - levenshtein / max_len` counted in characters.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let distance = strsim::levenshtein(&a, &b);
    let max_len = a.chars().count().max(b.chars().count());
    1.0 - distance as f64 / max_len as f64
}
