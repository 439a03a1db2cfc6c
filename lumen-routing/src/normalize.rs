//! Query normalization for keyword matching.

/// Lowercase, replace punctuation with spaces, collapse runs of whitespace.
///
/// Multi-word keywords ("big picture") still match because inner spaces are
/// preserved as single separators.
pub fn normalize(query: &str) -> String {
    let lowered: String = query
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}
