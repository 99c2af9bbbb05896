//! JSON payload boundary
//!
//! The network collaborator answers every request with a small JSON
//! envelope; the parsers in this crate only ever see one string field of
//! it. Pulling that field out is the one place where "input is not the
//! expected textual type" can happen, so it is the home of
//! [`InvalidInputError`].
//!
//! Search and verse fetches answer `{"result": "..."}`; commentary
//! fetches (cross-references, lexicon pair dumps) answer
//! `{"raw_html": "..."}` and lexicon entry lookups additionally carry an
//! optional pre-parsed `{"parsed": {...}}` object.

use crate::error::InvalidInputError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

/// Embedded HTML tags dropped from lexicon entry words
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());

/// One lexicon dictionary entry from the commentary payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconEntry {
    pub entry: String,
    pub word: String,
    pub transliteration: String,
    pub definition: String,
}

/// Extract a named string field from a payload
pub fn text_field<'a>(payload: &'a Value, field: &str) -> Result<&'a str, InvalidInputError> {
    match payload.get(field) {
        None => Err(InvalidInputError::MissingField(field.to_string())),
        Some(value) => value
            .as_str()
            .ok_or_else(|| InvalidInputError::NotText(field.to_string())),
    }
}

/// The text body of a search or verse-fetch payload
pub fn search_text(payload: &Value) -> Result<&str, InvalidInputError> {
    text_field(payload, "result")
}

/// The markup body of a commentary payload
pub fn commentary_html(payload: &Value) -> Result<&str, InvalidInputError> {
    text_field(payload, "raw_html")
}

/// The pre-parsed lexicon entry of a commentary payload, when present
///
/// `word` and `transliteration` arrive with stray HTML tags which are
/// stripped here; `definition` is kept verbatim (it is rendered as rich
/// text). Absent fields default to empty strings.
pub fn lexicon_entry(payload: &Value) -> Option<LexiconEntry> {
    let parsed = payload.get("parsed")?.as_object()?;
    let field = |name: &str| {
        parsed
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    Some(LexiconEntry {
        entry: field("entry"),
        word: strip_tags(&field("word")),
        transliteration: strip_tags(&field("transliteration")),
        definition: field("definition"),
    })
}

fn strip_tags(text: &str) -> String {
    TAG.replace_all(text, "").into_owned()
}
