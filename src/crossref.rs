//! Cross-reference list parsing
//!
//! Cross-reference lookups return a block of commentary markup in which
//! each related passage sits inside a `<scripRef>` tag, tags separated by
//! `<br>` markers. One tag may carry several citations separated by
//! semicolons. The parser flattens all of it into one ordered list of
//! citation strings; duplicates are meaningful (each maps to its own
//! clickable entry) and are preserved.

use once_cell::sync::Lazy;
use regex::Regex;

/// A `<scripRef>` tag and its inner text, which may span line breaks
static SCRIP_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<scripRef>(.*?)</scripRef>").unwrap());

/// Extract every citation from a cross-reference markup block
///
/// Returns trimmed citation strings in document order; an input without
/// any tag yields an empty list, not an error.
pub fn parse_cross_references(raw: &str) -> Vec<String> {
    SCRIP_REF
        .captures_iter(raw)
        .flat_map(|captures| {
            captures
                .get(1)
                .map(|inner| {
                    inner
                        .as_str()
                        .split(';')
                        .map(str::trim)
                        .filter(|piece| !piece.is_empty())
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
        .collect()
}
