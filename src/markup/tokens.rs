//! Token definitions for the SWORD LaTeX dialect
//!
//! The tokens are defined using the logos derive macro. The token set is
//! deliberately small: commands, brace delimiters, and runs of plain
//! text. Command names and argument contents are recovered from the
//! source via token spans.

use logos::Logos;

/// All possible tokens in a SWORD LaTeX document
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A backslash command, e.g. `\swordverse` or `\end`
    #[regex(r"\\[a-zA-Z]+")]
    Command,

    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    /// A backslash not followed by letters; stray markup, dropped on output
    #[token("\\")]
    Backslash,

    /// Everything else, including whitespace
    #[regex(r"[^\\{}]+")]
    Text,
}

impl Token {
    /// Check if this token opens a brace-delimited argument group
    pub fn is_open_brace(&self) -> bool {
        matches!(self, Token::OpenBrace)
    }

    /// Check if this token is a command
    pub fn is_command(&self) -> bool {
        matches!(self, Token::Command)
    }
}
