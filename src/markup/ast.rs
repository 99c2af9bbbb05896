//! Document structure produced by the markup parser
//!
//! A parsed document is an ordered sequence of nodes: at most one chapter
//! header followed by zero or more verses. Verse text is display-safe and
//! carries its lexical annotations as byte-range spans, so a rendering
//! collaborator can tag the annotated stretches without re-scanning.

use crate::reference::ScriptureReference;
use crate::strongs::{Lexicon, StrongsCode};
use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A Strong's number annotation: the namespace module it came from, verbatim,
/// plus the normalized code
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrongsRef {
    pub module: String,
    pub code: StrongsCode,
}

impl StrongsRef {
    pub fn new(module: impl Into<String>, code: StrongsCode) -> Self {
        Self {
            module: module.into(),
            code,
        }
    }

    /// The namespace, when the module is one of the two reserved names
    pub fn lexicon(&self) -> Option<Lexicon> {
        Lexicon::from_module(&self.module)
    }

    /// Display label: single-letter prefix plus the unpadded code ("H430")
    ///
    /// Reserved modules map to `H`/`G`; anything else falls back to its
    /// first letter uppercased. The label is display-only, never identity.
    pub fn label(&self) -> String {
        let prefix = match self.lexicon() {
            Some(lexicon) => lexicon.prefix(),
            None => self
                .module
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('?'),
        };
        format!("{}{}", prefix, self.code)
    }
}

/// What an annotated span denotes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AnnotationKind {
    /// A clickable Strong's number reference
    Strongs(StrongsRef),
    /// A divine name requiring distinct styling
    DivineName,
}

/// One annotation attached to a contiguous byte range of verse text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationSpan {
    pub range: Range<usize>,
    pub kind: AnnotationKind,
}

/// Display-safe text with zero or more annotation spans
///
/// Spans are non-overlapping, ordered by start, and always index valid
/// char boundaries of `text`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AnnotatedText {
    pub text: String,
    pub annotations: Vec<AnnotationSpan>,
}

impl AnnotatedText {
    /// Wrap plain text with no annotations
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotations: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The text slice an annotation covers
    pub fn span_text(&self, span: &AnnotationSpan) -> &str {
        &self.text[span.range.clone()]
    }
}

impl fmt::Display for AnnotatedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Chapter header: canonical identifier plus display title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterHeader {
    /// Canonical id, e.g. "Gen.1"
    pub osis: String,
    /// Human title, e.g. "Genesis 1"
    pub title: String,
}

impl ChapterHeader {
    pub fn new(osis: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            osis: osis.into(),
            title: title.into(),
        }
    }

    /// Title with a trailing ":N" verse fragment stripped, for headings
    pub fn display_title(&self) -> &str {
        match self.title.rfind(':') {
            Some(idx)
                if idx + 1 < self.title.len()
                    && self.title[idx + 1..].bytes().all(|b| b.is_ascii_digit()) =>
            {
                &self.title[..idx]
            }
            _ => &self.title,
        }
    }
}

/// A single verse; `number` is `None` for the synthetic fallback verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verse {
    pub number: Option<u32>,
    pub text: AnnotatedText,
}

impl Verse {
    pub fn new(number: u32, text: AnnotatedText) -> Self {
        Self {
            number: Some(number),
            text,
        }
    }

    /// The unnumbered verse produced by the whole-input fallback
    pub fn unnumbered(text: AnnotatedText) -> Self {
        Self { number: None, text }
    }
}

/// One structural node of a parsed document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DocumentNode {
    Chapter(ChapterHeader),
    Verse(Verse),
}

/// An ordered parse of one markup document
///
/// At most one chapter node, always preceding all verse nodes. A document
/// with zero nodes is a valid "not found" result for empty input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ParsedDocument {
    pub nodes: Vec<DocumentNode>,
}

impl ParsedDocument {
    pub fn new(nodes: Vec<DocumentNode>) -> Self {
        Self { nodes }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The chapter header, if the document carried one
    pub fn chapter(&self) -> Option<&ChapterHeader> {
        self.nodes.iter().find_map(|node| match node {
            DocumentNode::Chapter(header) => Some(header),
            _ => None,
        })
    }

    /// All verse nodes in source order
    pub fn verses(&self) -> impl Iterator<Item = &Verse> {
        self.nodes.iter().filter_map(|node| match node {
            DocumentNode::Verse(verse) => Some(verse),
            _ => None,
        })
    }

    /// Scripture reference for a numbered verse, derived from the chapter title
    ///
    /// Returns `None` when the document has no chapter header, the header
    /// title does not end in a chapter number, or the verse is unnumbered.
    pub fn verse_reference(&self, verse: &Verse) -> Option<ScriptureReference> {
        let header = self.chapter()?;
        ScriptureReference::from_chapter_title(header.display_title(), verse.number?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_strips_verse_fragment() {
        let header = ChapterHeader::new("Gen.1", "Genesis 1:1");
        assert_eq!(header.display_title(), "Genesis 1");

        let header = ChapterHeader::new("Gen.1", "Genesis 1");
        assert_eq!(header.display_title(), "Genesis 1");
    }

    #[test]
    fn test_display_title_keeps_non_numeric_tail() {
        let header = ChapterHeader::new("x", "Notes: introduction");
        assert_eq!(header.display_title(), "Notes: introduction");
    }

    #[test]
    fn test_strongs_label() {
        let code = StrongsCode::parse("00430").unwrap();
        assert_eq!(StrongsRef::new("Hebrew", code).label(), "H430");
        assert_eq!(StrongsRef::new("Greek", code).label(), "G430");
        assert_eq!(StrongsRef::new("Aramaic", code).label(), "A430");
    }

    #[test]
    fn test_chapter_always_findable() {
        let doc = ParsedDocument::new(vec![
            DocumentNode::Chapter(ChapterHeader::new("Gen.1", "Genesis 1")),
            DocumentNode::Verse(Verse::new(1, AnnotatedText::plain("In the beginning"))),
        ]);
        assert_eq!(doc.chapter().unwrap().osis, "Gen.1");
        assert_eq!(doc.verses().count(), 1);
    }

    #[test]
    fn test_verse_reference_from_chapter() {
        let verse = Verse::new(5, AnnotatedText::plain("text"));
        let doc = ParsedDocument::new(vec![
            DocumentNode::Chapter(ChapterHeader::new("Gen.1", "Genesis 1")),
            DocumentNode::Verse(verse.clone()),
        ]);
        let reference = doc.verse_reference(&verse).unwrap();
        assert_eq!(reference.to_string(), "Genesis 1:5");
    }

    #[test]
    fn test_verse_reference_requires_number_and_chapter() {
        let verse = Verse::unnumbered(AnnotatedText::plain("text"));
        let doc = ParsedDocument::new(vec![DocumentNode::Verse(verse.clone())]);
        assert!(doc.verse_reference(&verse).is_none());
    }
}
