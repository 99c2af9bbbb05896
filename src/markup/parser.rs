//! Document parser for the SWORD LaTeX dialect
//!
//! Walks the token stream with an explicit cursor, in two passes over the
//! same tokens: one to find the chapter header (which may sit anywhere,
//! including inside a verse body), one to collect verse spans. Verse
//! bodies run from the end of the verse command's arguments to the next
//! `\swordverse`, an `\end{document}` marker, or end of input, and are
//! cleaned through the annotation extractor.
//!
//! The parser never fails: malformed commands degrade to stripped text,
//! and a non-empty document without any verse command becomes a single
//! unnumbered verse so callers always get something to render.

use crate::markup::annotations::{self, braced_args};
use crate::markup::ast::{ChapterHeader, DocumentNode, ParsedDocument, Verse};
use crate::markup::lexer::tokenize_with_spans;
use crate::markup::tokens::Token;
use std::ops::Range;

type SpannedTokens = Vec<(Token, logos::Span)>;

/// Parse one markup document into an ordered node sequence
pub fn parse_document(source: &str) -> ParsedDocument {
    let tokens = tokenize_with_spans(source);
    let mut nodes = Vec::new();

    if let Some(header) = find_chapter(source, &tokens) {
        nodes.push(DocumentNode::Chapter(header));
    }

    let verses = collect_verses(source, &tokens);
    if verses.is_empty() {
        // no verse command anywhere: the whole input is one verse body
        if !source.is_empty() {
            nodes.push(DocumentNode::Verse(Verse::unnumbered(annotations::extract(
                source,
            ))));
        }
    } else {
        for (number, body) in verses {
            nodes.push(DocumentNode::Verse(Verse::new(
                number,
                annotations::extract(&source[body]),
            )));
        }
    }

    ParsedDocument::new(nodes)
}

fn command_name<'a>(source: &'a str, span: &logos::Span) -> &'a str {
    &source[span.start + 1..span.end]
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// First `\swordchapter{id}{title}{n}` with non-empty labels and a numeric
/// third argument; absence is not an error
fn find_chapter(source: &str, tokens: &SpannedTokens) -> Option<ChapterHeader> {
    let mut i = 0;
    while i < tokens.len() {
        let (token, span) = &tokens[i];
        if *token == Token::Command && command_name(source, span) == "swordchapter" {
            let (args, next) = braced_args(tokens, i + 1, 3);
            if args.len() == 3
                && !args[0].is_empty()
                && !args[1].is_empty()
                && all_digits(&source[args[2].clone()])
            {
                return Some(ChapterHeader::new(
                    &source[args[0].clone()],
                    &source[args[1].clone()],
                ));
            }
            i = next.max(i + 1);
        } else {
            i += 1;
        }
    }
    None
}

/// Collect `(number, body byte range)` for every well-formed verse command
///
/// Any `\swordverse` occurrence terminates the body of the verse before
/// it, well-formed or not; `\end{document}` terminates collection.
fn collect_verses(source: &str, tokens: &SpannedTokens) -> Vec<(u32, Range<usize>)> {
    let mut verses = Vec::new();
    let mut current: Option<(u32, usize)> = None;
    let mut i = 0;

    while i < tokens.len() {
        let (token, span) = &tokens[i];
        if *token != Token::Command {
            i += 1;
            continue;
        }
        match command_name(source, span) {
            "swordverse" => {
                if let Some((number, start)) = current.take() {
                    verses.push((number, start..span.start));
                }
                let (args, next) = braced_args(tokens, i + 1, 3);
                let number = if args.len() == 3 && all_digits(&source[args[2].clone()]) {
                    source[args[2].clone()].parse::<u32>().ok()
                } else {
                    None
                };
                match number {
                    Some(number) => {
                        let body_start = tokens
                            .get(next)
                            .map(|(_, span)| span.start)
                            .unwrap_or(source.len());
                        current = Some((number, body_start));
                        i = next;
                    }
                    None => {
                        // malformed verse command: its stretch belongs to no verse
                        tracing::debug!("dropping malformed verse command");
                        i += 1;
                    }
                }
            }
            "end" => {
                let (args, _) = braced_args(tokens, i + 1, 1);
                if args.len() == 1 && &source[args[0].clone()] == "document" {
                    if let Some((number, start)) = current.take() {
                        verses.push((number, start..span.start));
                    }
                    break;
                }
                // some other \end{...}: ordinary body text, stripped later
                i += 1;
            }
            _ => {
                i += 1;
            }
        }
    }

    if let Some((number, start)) = current.take() {
        verses.push((number, start..source.len()));
    }

    verses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::ast::AnnotationKind;

    #[test]
    fn test_chapter_and_verses_in_order() {
        let doc = parse_document(
            r"\swordchapter{Gen.1}{Genesis 1}{0}\swordverse{a}{b}{1}In the beginning\swordverse{a}{b}{2}And the earth\end{document}",
        );

        assert_eq!(doc.nodes.len(), 3);
        let header = doc.chapter().expect("chapter header");
        assert_eq!(header.osis, "Gen.1");
        assert_eq!(header.title, "Genesis 1");

        let verses: Vec<_> = doc.verses().collect();
        assert_eq!(verses[0].number, Some(1));
        assert_eq!(verses[0].text.text, "In the beginning");
        assert_eq!(verses[1].number, Some(2));
        assert_eq!(verses[1].text.text, "And the earth");
    }

    #[test]
    fn test_chapter_is_optional() {
        let doc = parse_document(r"\swordverse{a}{b}{3}text here\end{document}");
        assert!(doc.chapter().is_none());
        let verses: Vec<_> = doc.verses().collect();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].number, Some(3));
    }

    #[test]
    fn test_bare_body_falls_back_to_single_verse() {
        let doc = parse_document("H0430 said");
        let verses: Vec<_> = doc.verses().collect();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].number, None);
        assert_eq!(verses[0].text.text, "H430 said");
        assert_eq!(verses[0].text.annotations.len(), 1);
        match &verses[0].text.annotations[0].kind {
            AnnotationKind::Strongs(annotation) => {
                assert_eq!(annotation.module, "Hebrew");
                assert_eq!(annotation.code.value(), 430);
            }
            other => panic!("expected Strongs annotation, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_is_empty_document() {
        let doc = parse_document("");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_last_verse_without_end_marker_is_kept() {
        let doc = parse_document(r"\swordverse{a}{b}{1}first\swordverse{a}{b}{2}second");
        let verses: Vec<_> = doc.verses().collect();
        assert_eq!(verses.len(), 2);
        assert_eq!(verses[1].text.text, "second");
    }

    #[test]
    fn test_back_to_back_verses_yield_empty_body() {
        let doc = parse_document(r"\swordverse{a}{b}{1}\swordverse{a}{b}{2}x\end{document}");
        let verses: Vec<_> = doc.verses().collect();
        assert_eq!(verses[0].text.text, "");
        assert_eq!(verses[1].text.text, "x");
    }

    #[test]
    fn test_annotations_resolved_inside_verse_bodies() {
        let doc = parse_document(
            r"\swordverse{a}{b}{1}\swordstrong{Hebrew}{07225} created \sworddivinename{God}\end{document}",
        );
        let verses: Vec<_> = doc.verses().collect();
        assert_eq!(verses[0].text.text, "H7225 created God");
        assert_eq!(verses[0].text.annotations.len(), 2);
    }

    #[test]
    fn test_text_after_end_marker_is_ignored() {
        let doc = parse_document(r"\swordverse{a}{b}{1}body\end{document}\swordverse{a}{b}{2}late");
        let verses: Vec<_> = doc.verses().collect();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].text.text, "body");
    }

    #[test]
    fn test_chapter_found_inside_verse_body() {
        let doc =
            parse_document(r"\swordverse{a}{b}{1}x \swordchapter{Gen.1}{Genesis 1}{0} y\end{document}");
        assert_eq!(doc.chapter().unwrap().title, "Genesis 1");
        let verses: Vec<_> = doc.verses().collect();
        // the header command is stripped from the body text
        assert_eq!(verses[0].text.text, "x y");
    }

    #[test]
    fn test_malformed_chapter_is_not_a_header() {
        let doc = parse_document(r"\swordchapter{Gen.1}{Genesis 1}{x}body\end{document}");
        assert!(doc.chapter().is_none());
        // still non-empty: the whole input degrades to one unnumbered verse
        let verses: Vec<_> = doc.verses().collect();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].number, None);
        assert_eq!(verses[0].text.text, "body");
    }

    #[test]
    fn test_non_numeric_verse_number_is_dropped() {
        let doc = parse_document(r"\swordverse{a}{b}{1}one\swordverse{a}{b}{x}lost\end{document}");
        let verses: Vec<_> = doc.verses().collect();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].text.text, "one");
    }
}
