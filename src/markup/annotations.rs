//! Lexical annotation extraction from verse markup
//!
//! Takes the raw markup body of one verse and produces display-safe text
//! plus annotation spans, in two passes:
//!
//! 1. An explicit-markup pass over the token stream: `\swordstrong` and
//!    `\sworddivinename` commands become annotated spans; every other
//!    command is stripped together with its brace arguments; stray braces
//!    and backslashes are dropped; whitespace collapses to single spaces.
//! 2. A bare-token pass over the resulting text: residual `H####` /
//!    `G####` tokens are promoted to Strong's annotations with the
//!    namespace inferred from the letter, skipping anything already
//!    inside a span from pass 1.
//!
//! The second pass rewrites matched tokens to their normalized label
//! ("H0430" becomes "H430"), so the output text is a fixed point: running
//! the extractor on its own output changes nothing.

use crate::markup::ast::{AnnotatedText, AnnotationKind, AnnotationSpan, StrongsRef};
use crate::markup::lexer::tokenize_with_spans;
use crate::markup::tokens::Token;
use crate::strongs::{Lexicon, StrongsCode};
use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::Range;

/// Bare Strong's token: letter prefix, at most one leading zero, 1-5 digits
static BARE_STRONGS: Lazy<Regex> = Lazy::new(|| Regex::new(r"([HG])0?([0-9]{1,5})").unwrap());

/// Read consecutive `{...}` argument groups starting at token index `i`.
///
/// Returns the inner source ranges and the index of the first token past
/// the groups. Groups are flat: the first closing brace ends a group. An
/// unterminated group runs to the end of input.
pub(crate) fn braced_args(
    tokens: &[(Token, logos::Span)],
    mut i: usize,
    max: usize,
) -> (Vec<Range<usize>>, usize) {
    let mut args = Vec::new();
    while args.len() < max && i < tokens.len() && tokens[i].0 == Token::OpenBrace {
        let start = tokens[i].1.end;
        let mut end = start;
        i += 1;
        while i < tokens.len() {
            if tokens[i].0 == Token::CloseBrace {
                i += 1;
                break;
            }
            end = tokens[i].1.end;
            i += 1;
        }
        args.push(start..end);
    }
    (args, i)
}

/// Whitespace-collapsing text builder that tracks annotation spans
struct Emitter {
    text: String,
    annotations: Vec<AnnotationSpan>,
}

impl Emitter {
    fn new() -> Self {
        Self {
            text: String::new(),
            annotations: Vec::new(),
        }
    }

    /// Append text, collapsing whitespace runs to single spaces and
    /// suppressing leading whitespace
    fn push_text(&mut self, s: &str) {
        for ch in s.chars() {
            if ch.is_whitespace() {
                if !self.text.is_empty() && !self.text.ends_with(' ') {
                    self.text.push(' ');
                }
            } else {
                self.text.push(ch);
            }
        }
    }

    /// Append text and record an annotation span over what was emitted
    fn push_annotated(&mut self, s: &str, kind: AnnotationKind) {
        let start = self.text.len();
        self.push_text(s);
        let end = self.text.len();
        if end > start {
            self.annotations.push(AnnotationSpan {
                range: start..end,
                kind,
            });
        }
    }

    fn finish(mut self) -> AnnotatedText {
        if self.text.ends_with(' ') {
            self.text.pop();
        }
        AnnotatedText {
            text: self.text,
            annotations: self.annotations,
        }
    }
}

/// Extract lexical annotations from one verse's markup body
pub fn extract(source: &str) -> AnnotatedText {
    let tokens = tokenize_with_spans(source);
    let mut out = Emitter::new();
    let mut i = 0;

    while i < tokens.len() {
        let (token, span) = &tokens[i];
        match token {
            Token::Text => {
                out.push_text(&source[span.clone()]);
                i += 1;
            }
            Token::Command => {
                let name = &source[span.start + 1..span.end];
                i = handle_command(source, &tokens, i + 1, name, &mut out);
            }
            // stray markup syntax carries no payload
            Token::OpenBrace | Token::CloseBrace | Token::Backslash => {
                i += 1;
            }
        }
    }

    bare_token_pass(out.finish())
}

/// Process one command starting at the token after its name.
/// Returns the index of the first token past everything consumed.
fn handle_command(
    source: &str,
    tokens: &[(Token, logos::Span)],
    i: usize,
    name: &str,
    out: &mut Emitter,
) -> usize {
    match name {
        "swordstrong" => {
            let (args, next) = braced_args(tokens, i, 2);
            if args.len() == 2 && !args[0].is_empty() && !args[1].is_empty() {
                let module = &source[args[0].clone()];
                let raw = &source[args[1].clone()];
                match StrongsCode::parse(raw) {
                    Ok(code) => {
                        let annotation = StrongsRef::new(module, code);
                        let label = annotation.label();
                        out.push_annotated(&label, AnnotationKind::Strongs(annotation));
                    }
                    Err(_) => {
                        // invalid code: keep the text, skip the annotation
                        tracing::debug!(code = raw, "invalid Strong's code in markup");
                        out.push_text(raw);
                    }
                }
                return next;
            }
            strip_command(tokens, i, name)
        }
        "sworddivinename" => {
            let (args, next) = braced_args(tokens, i, 1);
            if args.len() == 1 && !args[0].is_empty() {
                out.push_annotated(&source[args[0].clone()], AnnotationKind::DivineName);
                return next;
            }
            strip_command(tokens, i, name)
        }
        _ => strip_command(tokens, i, name),
    }
}

/// Drop an unrecognized command and all its argument groups
fn strip_command(tokens: &[(Token, logos::Span)], i: usize, name: &str) -> usize {
    let (_, next) = braced_args(tokens, i, usize::MAX);
    tracing::trace!(command = name, "stripping markup command");
    next
}

/// Promote residual bare `H####` / `G####` tokens to annotations
fn bare_token_pass(input: AnnotatedText) -> AnnotatedText {
    let text = &input.text;
    let mut found: Vec<(Range<usize>, Lexicon, StrongsCode)> = Vec::new();

    for caps in BARE_STRONGS.captures_iter(text) {
        let whole = caps.get(0).expect("match has a full capture");
        // token boundary: not glued to a preceding word, not a truncated
        // digit run, not inside an existing annotation
        let glued_before = text[..whole.start()]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_');
        let truncated_after = text[whole.end()..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit());
        let inside_span = input
            .annotations
            .iter()
            .any(|a| a.range.start < whole.end() && whole.start() < a.range.end);
        if glued_before || truncated_after || inside_span {
            continue;
        }
        let code = match StrongsCode::parse(&caps[2]) {
            Ok(code) => code,
            // value zero ("H0") stays plain text
            Err(_) => continue,
        };
        let letter = caps[1].chars().next().expect("prefix capture is one char");
        let lexicon = Lexicon::from_prefix(letter).expect("regex only matches H or G");
        found.push((whole.range(), lexicon, code));
    }

    if found.is_empty() {
        return input;
    }

    // rebuild the text with normalized labels
    let mut result = String::with_capacity(text.len());
    let mut promoted = Vec::with_capacity(found.len());
    let mut old_pos = 0;
    for (range, lexicon, code) in &found {
        result.push_str(&text[old_pos..range.start]);
        let start = result.len();
        let annotation = StrongsRef::new(lexicon.module_name(), *code);
        result.push_str(&annotation.label());
        promoted.push(AnnotationSpan {
            range: start..result.len(),
            kind: AnnotationKind::Strongs(annotation),
        });
        old_pos = range.end;
    }
    result.push_str(&text[old_pos..]);

    // shift pass-1 spans past the rewrites; spans never overlap a rewrite
    let shift = |p: usize| -> usize {
        let delta: isize = found
            .iter()
            .zip(&promoted)
            .filter(|((old, _, _), _)| old.end <= p)
            .map(|((old, _, _), new)| new.range.len() as isize - old.len() as isize)
            .sum();
        (p as isize + delta) as usize
    };
    let mut annotations: Vec<AnnotationSpan> = input
        .annotations
        .iter()
        .map(|span| AnnotationSpan {
            range: shift(span.range.start)..shift(span.range.end),
            kind: span.kind.clone(),
        })
        .collect();
    annotations.extend(promoted);
    annotations.sort_by_key(|span| span.range.start);

    AnnotatedText {
        text: result,
        annotations,
    }
}
