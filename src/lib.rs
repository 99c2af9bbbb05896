//! # swordtex
//!
//! A parser for the SWORD project's LaTeX-flavored scripture markup and
//! the companion study-aid text formats served by the text-search API:
//! free-text search results, `<scripRef>` cross-reference dumps, and
//! Hebrew↔Greek lexicon pair dumps.
//!
//! Every parser here is a synchronous pure function over an input string:
//! same input, same structured result, safe to call from concurrent
//! fetch/retry paths without coordination. Irregular upstream markup
//! degrades tolerantly (stripped or defaulted) instead of failing; the
//! only hard errors are a payload without the expected text field
//! ([`error::InvalidInputError`]) and a lexicon code outside the valid
//! range ([`error::InvalidCodeError`]).

pub mod config;
pub mod crosslinks;
pub mod crossref;
pub mod error;
pub mod markup;
pub mod payload;
pub mod reference;
pub mod strongs;
pub mod testing;
