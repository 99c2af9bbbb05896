//! SWORD LaTeX markup parsing
//!
//! The text-search API returns scripture in a LaTeX-flavored dialect:
//! brace-argument commands for chapter headers (`\swordchapter`), verse
//! boundaries (`\swordverse`), Strong's number annotations
//! (`\swordstrong`) and divine-name styling (`\sworddivinename`), with an
//! `\end{document}` trailer. This module tokenizes that dialect and
//! parses it into an ordered document of chapter/verse nodes with inline
//! lexical annotations resolved.

pub mod annotations;
pub mod ast;
pub mod lexer;
pub mod parser;
pub mod tokens;
