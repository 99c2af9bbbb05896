//! Bilingual lexicon pair parsing
//!
//! The HebrewGreek / GreekHebrew modules answer a wire-form code with a
//! line-oriented dump of word-to-word mappings:
//!
//! ```text
//! elohim                2316 theos
//! agapao 	00157	ahab
//! 00430: elohiym        2316 theos
//! (HebrewGreek)
//! ```
//!
//! Lines are `<br>`-separated, a row is source word / code / target word
//! with loose whitespace, an optional `NNNNN:` echo of the queried key
//! prefixes some rows, and a parenthesized footer names the module. Rows
//! that match none of this are dropped rather than failing the block.

use crate::strongs::{Lexicon, StrongsCode};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Line separators: `<br>` markers in API payloads, real newlines in files
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>|\r?\n").unwrap());

/// Trailing metadata line, e.g. "(HebrewGreek)"
static FOOTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\(.*\)$").unwrap());

/// Optional echo of the queried wire code, e.g. "00430: "
static KEY_ECHO: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{1,5}:\s*").unwrap());

/// Row shape: source word, code with at most one leading zero, target word
static PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*?)\s+0?([0-9]{1,5})\s+(.+)$").unwrap());

/// One row of a bilingual mapping table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LexiconPair {
    pub source_word: String,
    pub code: StrongsCode,
    pub target_word: String,
}

/// An ordered word-pair table between the two lexicon namespaces
///
/// Order preserves the source dump; duplicate codes are allowed in both
/// directions (one word may map to several entries).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairTable {
    pub source: Lexicon,
    pub pairs: Vec<LexiconPair>,
}

impl PairTable {
    /// The namespace the target words and codes belong to
    pub fn target(&self) -> Lexicon {
        self.source.companion()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }
}

/// Parse a lexicon cross-link dump for the given source namespace
pub fn parse_pairs(raw: &str, source: Lexicon) -> PairTable {
    let mut pairs = Vec::new();

    for line in LINE_BREAK.split(raw) {
        let line = line.trim();
        if line.is_empty() || FOOTER.is_match(line) {
            continue;
        }
        let line = KEY_ECHO.replace(line, "");
        match PAIR.captures(&line) {
            Some(captures) => match StrongsCode::parse(&captures[2]) {
                Ok(code) => pairs.push(LexiconPair {
                    source_word: captures[1].trim().to_string(),
                    code,
                    target_word: captures[3].trim().to_string(),
                }),
                Err(_) => {
                    tracing::debug!(line = %line, "dropping pair row with invalid code");
                }
            },
            None => {
                tracing::debug!(line = %line, "dropping unparseable pair row");
            }
        }
    }

    PairTable { source, pairs }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_delimited_row() {
        let table = parse_pairs("elohim    2316    theos", Lexicon::Hebrew);
        assert_eq!(table.len(), 1);
        assert_eq!(table.pairs[0].source_word, "elohim");
        assert_eq!(table.pairs[0].code.value(), 2316);
        assert_eq!(table.pairs[0].target_word, "theos");
        assert_eq!(table.target(), Lexicon::Greek);
    }

    #[test]
    fn test_tab_delimited_row_with_padded_code() {
        let table = parse_pairs("agapao \t00157\tahab", Lexicon::Greek);
        assert_eq!(table.len(), 1);
        assert_eq!(table.pairs[0].source_word, "agapao");
        assert_eq!(table.pairs[0].code.value(), 157);
        assert_eq!(table.pairs[0].target_word, "ahab");
        assert_eq!(table.target(), Lexicon::Hebrew);
    }

    #[test]
    fn test_key_echo_is_stripped() {
        let table = parse_pairs("00430: elohiym  2316 theos", Lexicon::Hebrew);
        assert_eq!(table.len(), 1);
        assert_eq!(table.pairs[0].source_word, "elohiym");
    }

    #[test]
    fn test_footer_and_blank_lines_dropped() {
        let raw = "elohim 2316 theos<br><br>(HebrewGreek)";
        let table = parse_pairs(raw, Lexicon::Hebrew);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_malformed_rows_do_not_abort_the_block() {
        let raw = "justoneword<br>elohim 2316 theos<br>###";
        let table = parse_pairs(raw, Lexicon::Hebrew);
        assert_eq!(table.len(), 1);
        assert_eq!(table.pairs[0].code.value(), 2316);
    }

    #[test]
    fn test_br_variants_and_newlines_split_lines() {
        let raw = "a 1 b<BR/>c 2 d\ne 3 f<br />g 4 h";
        let table = parse_pairs(raw, Lexicon::Hebrew);
        let codes: Vec<u32> = table.pairs.iter().map(|p| p.code.value()).collect();
        assert_eq!(codes, [1, 2, 3, 4]);
    }

    #[test]
    fn test_source_word_may_contain_spaces() {
        let table = parse_pairs("bar enash  0444 anthropos", Lexicon::Hebrew);
        assert_eq!(table.pairs[0].source_word, "bar enash");
        assert_eq!(table.pairs[0].code.value(), 444);
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let raw = "a 10 x<br>b 10 y<br>a 10 x";
        let table = parse_pairs(raw, Lexicon::Greek);
        assert_eq!(table.len(), 3);
        assert_eq!(table.pairs[0], table.pairs[2]);
    }

    #[test]
    fn test_empty_input_is_empty_table() {
        let table = parse_pairs("", Lexicon::Hebrew);
        assert!(table.is_empty());
    }
}
