//! Test support utilities
//!
//! Fluent assertions for verifying parsed document structure in tests.
//! Assertions verify content, not just counts: prefer
//! `assert_doc(&doc).verse(0, |v| v.number(1).text("..."))` over counting
//! nodes.

use crate::markup::ast::{AnnotationKind, ParsedDocument, Verse};

/// Entry point for fluent document assertions
pub fn assert_doc(doc: &ParsedDocument) -> DocAssert<'_> {
    DocAssert { doc }
}

pub struct DocAssert<'a> {
    doc: &'a ParsedDocument,
}

impl<'a> DocAssert<'a> {
    pub fn node_count(self, expected: usize) -> Self {
        assert_eq!(
            self.doc.nodes.len(),
            expected,
            "node count mismatch: {:?}",
            self.doc
        );
        self
    }

    pub fn has_chapter(self, osis: &str, title: &str) -> Self {
        let header = self
            .doc
            .chapter()
            .unwrap_or_else(|| panic!("expected a chapter header in {:?}", self.doc));
        assert_eq!(header.osis, osis, "chapter osis mismatch");
        assert_eq!(header.title, title, "chapter title mismatch");
        self
    }

    pub fn no_chapter(self) -> Self {
        assert!(
            self.doc.chapter().is_none(),
            "expected no chapter header in {:?}",
            self.doc
        );
        self
    }

    pub fn verse_count(self, expected: usize) -> Self {
        assert_eq!(
            self.doc.verses().count(),
            expected,
            "verse count mismatch: {:?}",
            self.doc
        );
        self
    }

    pub fn verse(self, index: usize, check: impl FnOnce(VerseAssert<'a>)) -> Self {
        let verse = self
            .doc
            .verses()
            .nth(index)
            .unwrap_or_else(|| panic!("no verse at index {} in {:?}", index, self.doc));
        check(VerseAssert { verse, index });
        self
    }
}

pub struct VerseAssert<'a> {
    verse: &'a Verse,
    index: usize,
}

impl VerseAssert<'_> {
    pub fn number(self, expected: u32) -> Self {
        assert_eq!(
            self.verse.number,
            Some(expected),
            "verse {} number mismatch",
            self.index
        );
        self
    }

    pub fn unnumbered(self) -> Self {
        assert_eq!(
            self.verse.number, None,
            "verse {} should be unnumbered",
            self.index
        );
        self
    }

    pub fn text(self, expected: &str) -> Self {
        assert_eq!(self.verse.text.text, expected, "verse {} text", self.index);
        self
    }

    pub fn text_contains(self, needle: &str) -> Self {
        assert!(
            self.verse.text.text.contains(needle),
            "verse {} text {:?} does not contain {:?}",
            self.index,
            self.verse.text.text,
            needle
        );
        self
    }

    pub fn annotation_count(self, expected: usize) -> Self {
        assert_eq!(
            self.verse.text.annotations.len(),
            expected,
            "verse {} annotation count: {:?}",
            self.index,
            self.verse.text.annotations
        );
        self
    }

    /// Assert the annotation at `index` is a Strong's reference with the
    /// given module and canonical code
    pub fn strongs(self, index: usize, module: &str, code: u32) -> Self {
        let span = &self.verse.text.annotations[index];
        match &span.kind {
            AnnotationKind::Strongs(annotation) => {
                assert_eq!(annotation.module, module, "annotation {} module", index);
                assert_eq!(annotation.code.value(), code, "annotation {} code", index);
            }
            other => panic!("annotation {} is not Strongs: {:?}", index, other),
        }
        self
    }

    /// Assert the annotation at `index` is a divine-name marker
    pub fn divine_name(self, index: usize) -> Self {
        let span = &self.verse.text.annotations[index];
        assert_eq!(
            span.kind,
            AnnotationKind::DivineName,
            "annotation {} kind",
            index
        );
        self
    }
}
