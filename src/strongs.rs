//! Strong's lexicon codes and namespaces
//!
//! A Strong's code identifies one word-root entry in one of the two
//! lexicon namespaces (Hebrew or Greek). The code has two textual forms:
//! the canonical unpadded form used in memory and in display labels
//! ("430"), and the wire form zero-padded to five digits ("00430") used
//! as the lookup key by the lexicon modules. Conversion between the two
//! is lossless over the valid range 1..=99999.

use crate::error::InvalidCodeError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the two lexicon namespaces a Strong's code is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Lexicon {
    Hebrew,
    Greek,
}

impl Lexicon {
    /// Resolve a module name ("Hebrew" / "Greek") to its namespace
    pub fn from_module(name: &str) -> Option<Self> {
        match name {
            "Hebrew" => Some(Lexicon::Hebrew),
            "Greek" => Some(Lexicon::Greek),
            _ => None,
        }
    }

    /// Resolve a bare-token letter prefix ('H' / 'G') to its namespace
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'H' => Some(Lexicon::Hebrew),
            'G' => Some(Lexicon::Greek),
            _ => None,
        }
    }

    /// Single-letter display prefix for code labels
    pub fn prefix(self) -> char {
        match self {
            Lexicon::Hebrew => 'H',
            Lexicon::Greek => 'G',
        }
    }

    /// Module name used by the lexicon lookup collaborator
    pub fn module_name(self) -> &'static str {
        match self {
            Lexicon::Hebrew => "Hebrew",
            Lexicon::Greek => "Greek",
        }
    }

    /// The other namespace, the target side of a bilingual pair table
    pub fn companion(self) -> Self {
        match self {
            Lexicon::Hebrew => Lexicon::Greek,
            Lexicon::Greek => Lexicon::Hebrew,
        }
    }
}

impl fmt::Display for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.module_name())
    }
}

/// A Strong's number in canonical form, always in 1..=99999
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StrongsCode(u32);

impl StrongsCode {
    /// Smallest valid code
    pub const MIN: u32 = 1;
    /// Largest valid code (five decimal digits)
    pub const MAX: u32 = 99999;

    /// Construct from an already-numeric value, range-checked
    pub fn new(value: u32) -> Result<Self, InvalidCodeError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(StrongsCode(value))
        } else {
            Err(InvalidCodeError::OutOfRange(value.to_string()))
        }
    }

    /// Normalize a raw textual code to canonical form
    ///
    /// Trims surrounding whitespace and strips leading zeros; what remains
    /// must be 1-5 decimal digits and nonzero. "00430" and "430" both
    /// normalize to 430.
    pub fn parse(raw: &str) -> Result<Self, InvalidCodeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidCodeError::NotNumeric(raw.to_string()));
        }
        let stripped = trimmed.trim_start_matches('0');
        if stripped.is_empty() || stripped.len() > 5 {
            return Err(InvalidCodeError::OutOfRange(raw.to_string()));
        }
        // 1-5 digits always fit a u32
        let value = stripped
            .parse::<u32>()
            .map_err(|_| InvalidCodeError::NotNumeric(raw.to_string()))?;
        Ok(StrongsCode(value))
    }

    /// The canonical numeric value
    pub fn value(self) -> u32 {
        self.0
    }

    /// Wire form: zero-padded to exactly five digits
    pub fn wire(self) -> String {
        format!("{:05}", self.0)
    }
}

impl fmt::Display for StrongsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for StrongsCode {
    type Err = InvalidCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrongsCode::parse(s)
    }
}
