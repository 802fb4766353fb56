// src/normalize.rs
//! Text normalizer shared by scoring, evidence and word counts.
//!
//! Output alphabet is `[a-z ]`: anything that is not an ASCII letter or
//! whitespace is dropped, whitespace runs fold to a single space, letters
//! are lowercased. Leading/trailing spaces are kept (no trim).

/// Normalize raw document text for lexical matching.
///
/// Dropping happens before folding, so `"rate - hike"` becomes `"rate hike"`
/// and the function is idempotent.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_space = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else if ch.is_ascii_alphabetic() {
            out.push(ch.to_ascii_lowercase());
            last_space = false;
        }
        // everything else is removed and does not break a whitespace run
    }
    out
}
