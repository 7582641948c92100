use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A lexical error. Scanning stops at the first one.
///
/// Renders as `>>> Error léxico(linea:L,posicion:C)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_line(&self) -> usize {
        self.position.line
    }

    pub fn get_column(&self) -> usize {
        self.position.column
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::NewlineInString { .. } => "NewlineInString",
            ErrorImpl::AdjacentNumbers { .. } => "AdjacentNumbers",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString { quote } => ErrorTip::Suggestion(format!(
                "String literal is never closed, did you forget a closing `{}`?",
                quote
            )),
            ErrorImpl::NewlineInString { quote } => ErrorTip::Suggestion(format!(
                "String literals cannot span lines, close it with `{}` or escape the newline",
                quote
            )),
            ErrorImpl::AdjacentNumbers { token } => ErrorTip::Suggestion(format!(
                "Number `{}` directly follows another number, did you mean to separate them with a space?",
                token
            )),
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            ">>> Error léxico(linea:{},posicion:{})",
            self.position.line, self.position.column
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unterminated string literal opened with {quote:?}")]
    UnterminatedString { quote: char },
    #[error("newline inside string literal opened with {quote:?}")]
    NewlineInString { quote: char },
    #[error("number {token:?} directly follows another number")]
    AdjacentNumbers { token: String },
    #[error("unrecognised character {character:?}")]
    UnrecognisedCharacter { character: char },
}
