//! Integration tests for whole markup documents
//!
//! Exercises the parser end to end with assert_doc for deep structure
//! verification: chapter/verse ordering, annotation resolution inside
//! verse bodies, and the single-verse fallback for payloads that omit
//! the verse-wrapping command.

use swordtex::markup::parser::parse_document;
use swordtex::testing::assert_doc;

#[test]
fn test_chapter_with_two_verses() {
    let doc = parse_document(
        r"\swordchapter{Gen.1}{Genesis 1}{0}\swordverse{a}{b}{1}In the beginning\swordverse{a}{b}{2}And the earth",
    );

    assert_doc(&doc)
        .node_count(3)
        .has_chapter("Gen.1", "Genesis 1")
        .verse(0, |v| {
            v.number(1).text("In the beginning");
        })
        .verse(1, |v| {
            v.number(2).text("And the earth");
        });
}

#[test]
fn test_full_chapter_payload() {
    let doc = parse_document(concat!(
        r"\documentclass{book}\begin{document}",
        r"\swordchapter{Ps.23}{Psalms 23}{0}",
        r"\swordverse{KJV}{Ps.23}{1}The \sworddivinename{LORD} is my shepherd H7462; I shall not want.",
        r"\swordverse{KJV}{Ps.23}{2}He maketh me to lie down in green pastures \swordstrong{Hebrew}{01877}.",
        r"\end{document}",
    ));

    assert_doc(&doc)
        .has_chapter("Ps.23", "Psalms 23")
        .verse_count(2)
        .verse(0, |v| {
            v.number(1)
                .text("The LORD is my shepherd H7462; I shall not want.")
                .annotation_count(2)
                .divine_name(0)
                .strongs(1, "Hebrew", 7462);
        })
        .verse(1, |v| {
            v.number(2)
                .text_contains("green pastures H1877")
                .annotation_count(1)
                .strongs(0, "Hebrew", 1877);
        });
}

#[test]
fn test_single_verse_payload_without_chapter() {
    let doc = parse_document(r"\swordverse{KJV}{John.3}{16}For God so loved the world");

    assert_doc(&doc).no_chapter().verse_count(1).verse(0, |v| {
        v.number(16).text("For God so loved the world");
    });
}

#[test]
fn test_bare_body_becomes_one_unnumbered_verse() {
    let doc = parse_document("H0430 said");

    assert_doc(&doc).no_chapter().verse_count(1).verse(0, |v| {
        v.unnumbered()
            .text("H430 said")
            .annotation_count(1)
            .strongs(0, "Hebrew", 430);
    });
}

#[test]
fn test_empty_input_yields_empty_document() {
    assert_doc(&parse_document("")).node_count(0);
}

#[test]
fn test_chapter_node_always_precedes_verses() {
    // a header that occurs late in the source still leads the node order
    let doc = parse_document(
        r"\swordverse{a}{b}{1}first \swordchapter{Gen.1}{Genesis 1}{0}\end{document}",
    );

    assert_doc(&doc).has_chapter("Gen.1", "Genesis 1");
    assert!(matches!(
        doc.nodes[0],
        swordtex::markup::ast::DocumentNode::Chapter(_)
    ));
}

#[test]
fn test_unrecognized_commands_never_fail_the_parse() {
    let doc = parse_document(
        r"\swordverse{a}{b}{1}Jesus \swordmorph{robinson:V-2ADA-3S}{G3756} wept\end{document}",
    );

    assert_doc(&doc).verse(0, |v| {
        v.number(1).text("Jesus wept").annotation_count(0);
    });
}

#[test]
fn test_verse_reference_derived_from_chapter_title() {
    let doc = parse_document(
        r"\swordchapter{John.3}{John 3}{0}\swordverse{a}{b}{16}For God so loved\end{document}",
    );
    let verse = doc.verses().next().expect("one verse");
    let reference = doc.verse_reference(verse).expect("derivable reference");
    assert_eq!(reference.to_string(), "John 3:16");
}
