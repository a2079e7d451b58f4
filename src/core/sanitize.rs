// src/core/sanitize.rs
use unicode_normalization::UnicodeNormalization;

/// Collapse whitespace runs (ideographic space included) into one ASCII space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// NFKC first (half-width katakana → full-width, compatibility spaces → ' '),
/// then [`normalize_ws`].
pub fn normalize_reading(s: &str) -> String {
    let folded: String = s.nfkc().collect();
    normalize_ws(&folded)
}
