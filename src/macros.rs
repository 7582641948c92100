//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ERROR!` - Creates a lexical Error at a position

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The matched source text
/// * `$position` - Where the token starts
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Integer, "42".to_string(), position);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $position:expr) => {
        Token {
            kind: $kind,
            value: $value,
            position: $position,
        }
    };
}

/// Creates a lexical Error from an `ErrorImpl` variant and a position.
///
/// # Example
///
/// ```ignore
/// return Err(MK_ERROR!(ErrorImpl::AdjacentNumbers { token: lexeme }, self.here()));
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($kind:expr, $position:expr) => {
        Error::new($kind, $position)
    };
}
