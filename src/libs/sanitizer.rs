//! Normalization of user-supplied, comma-separated tag and descriptor lists.
//!
//! ```rust
//! use dewit::libs::sanitizer::{deduplicate_tags, sanitize_tags};
//!
//! assert_eq!(sanitize_tags("Work, Testing!"), "work,testing");
//! assert_eq!(deduplicate_tags("a,b,a"), "a,b");
//! ```

use std::collections::HashSet;

/// Keeps ASCII letters, digits, `_` and `,`, lowercases the result and drops
/// a single trailing comma.
///
/// Consecutive commas in the middle of the input are left alone; they are
/// collapsed by [`deduplicate_tags`].
pub fn sanitize_tags(input: &str) -> String {
    let mut output: String = input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == ',')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if output.ends_with(',') {
        output.pop();
    }
    output
}

/// Splits on commas and rejoins without duplicate or empty tokens, keeping
/// the order in which tokens were first seen.
pub fn deduplicate_tags(input: &str) -> String {
    let mut seen = HashSet::new();
    input
        .split(',')
        .filter(|tag| !tag.is_empty() && seen.insert(*tag))
        .collect::<Vec<_>>()
        .join(",")
}

/// Trims each token and drops empty and repeated ones. Unlike tags, the
/// characters of a descriptor are kept as typed.
pub fn normalize_descriptors(input: &str) -> String {
    deduplicate_tags(&input.split(',').map(str::trim).collect::<Vec<_>>().join(","))
}
