//! Lexical error types.
//!
//! Every failure the scanner can hit is a single `Error` carrying the position of the
//! fault and an `ErrorImpl` variant describing what went wrong.

pub mod errors;
