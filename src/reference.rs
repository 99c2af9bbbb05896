//! Scripture reference extraction and canonicalization
//!
//! Two jobs: scan free prose (search-result payloads) for substrings
//! shaped like citations, and canonicalize a single reference string into
//! the lookup key the cross-reference module expects. Extraction is
//! purely syntactic; nothing checks that a book name is a real book.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Citation shape in free prose: optional ordinal 1-3, one book word,
/// chapter, colon, verse. One word keeps the matcher from swallowing the
/// prose preceding a real citation.
static CITATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[1-3]?\s?[A-Za-z]+\s+[0-9]+:[0-9]+").unwrap());

/// Whitespace-flexible colon, collapsed during key canonicalization
static COLON_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*:\s*").unwrap());

/// Full-string reference: ordinal + book words + chapter + optional verse
static REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([1-3]?\s?[A-Za-z]+(?:\s+[A-Za-z]+)*)\s+([0-9]+)(?:\s*:\s*([0-9]+))?\s*$")
        .unwrap()
});

/// Chapter title tail: "<book words> <chapter>"
static CHAPTER_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*?)\s*([0-9]+)$").unwrap());

/// A structured scripture reference
///
/// `book` is free text and may include a leading ordinal ("1 John").
/// Identity is structural equality of the canonical `Display` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ScriptureReference {
    pub book: String,
    pub chapter: u32,
    pub verse: Option<u32>,
}

impl ScriptureReference {
    /// Parse one citation string ("1 John 3:16", "Psalms 23")
    ///
    /// Unlike [`extract_citations`], this sees a single reference rather
    /// than prose, so multi-word book names are accepted. Internal
    /// whitespace in the book name is collapsed for canonical identity.
    pub fn parse(text: &str) -> Option<Self> {
        let captures = REFERENCE.captures(text)?;
        let book = captures[1].split_whitespace().collect::<Vec<_>>().join(" ");
        let chapter = captures[2].parse::<u32>().ok()?;
        let verse = match captures.get(3) {
            Some(m) => Some(m.as_str().parse::<u32>().ok()?),
            None => None,
        };
        Some(Self {
            book,
            chapter,
            verse,
        })
    }

    /// Build a verse reference from a chapter title like "Genesis 1"
    pub fn from_chapter_title(title: &str, verse: u32) -> Option<Self> {
        let captures = CHAPTER_TITLE.captures(title.trim())?;
        let book = captures[1].trim().to_string();
        if book.is_empty() {
            return None;
        }
        let chapter = captures[2].parse::<u32>().ok()?;
        Some(Self {
            book,
            chapter,
            verse: Some(verse),
        })
    }
}

impl fmt::Display for ScriptureReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)?;
        if let Some(verse) = self.verse {
            write!(f, ":{}", verse)?;
        }
        Ok(())
    }
}

/// Scan free text for citation-shaped substrings
///
/// Returns trimmed literal substrings in order of first occurrence;
/// duplicates are preserved.
pub fn extract_citations(text: &str) -> Vec<String> {
    CITATION
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Canonicalize a reference string into a cross-reference lookup key
///
/// Trims, collapses whitespace around colons, and ensures exactly one
/// trailing colon. Idempotent: applying it to its own output is a no-op.
pub fn lookup_key(reference: &str) -> String {
    let key = COLON_WS.replace_all(reference.trim(), ":");
    if key.ends_with(':') {
        key.into_owned()
    } else {
        format!("{}:", key)
    }
}
