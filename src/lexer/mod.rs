//! Lexical analysis.
//!
//! Converts source text into a stream of tokens. It handles:
//!
//! - Keywords and identifiers
//! - Integer literals with an optional attached sign
//! - Quoted string literals, passed through without unescaping
//! - Operators and punctuation, matched longest-first
//! - Comments, blanks and line/column tracking

pub mod lexer;
pub mod tokens;
