use std::iter::FusedIterator;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_ERROR, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP, SYMBOLS};

/// Characters counted as digits: decimal digits plus the superscript, subscript, circled
/// and parenthesized digit forms that also carry a digit value.
const DIGIT: &str = concat!(
    r"\d\x{B2}\x{B3}\x{B9}\x{2070}\x{2074}-\x{2079}\x{2080}-\x{2089}",
    r"\x{1369}-\x{1371}\x{2460}-\x{2468}\x{2474}-\x{247C}\x{2488}-\x{2490}",
    r"\x{24EA}\x{24F5}-\x{24FD}\x{24FF}\x{2776}-\x{277E}\x{2780}-\x{2788}\x{278A}-\x{2792}",
);

lazy_static! {
    static ref INTEGER: Regex = Regex::new(&format!(r"^[+-]?[{DIGIT}]+")).unwrap();
    static ref IDENTIFIER: Regex =
        Regex::new(&format!(r"^[\p{{L}}_][\p{{L}}{DIGIT}_]*")).unwrap();
}

/// Pull-based scanner over a borrowed source buffer.
///
/// Each call to [`Lexer::next_token`] yields the next token, or `EOF` once the input is
/// exhausted. The first lexical error is terminal: every later call returns it again.
#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    column: usize,
    pub(super) last_was_number: bool,
    error: Option<Error>,
    done: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 1,
            last_was_number: false,
            error: None,
            done: false,
        }
    }

    pub fn here(&self) -> Position {
        Position {
            offset: self.pos,
            line: self.line,
            column: self.column,
        }
    }

    pub fn current(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn peek(&self, offset: usize) -> Option<char> {
        self.remainder().chars().nth(offset)
    }

    pub fn advance(&mut self) {
        if let Some(ch) = self.current() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.pos += ch.len_utf8();
        }
    }

    /// Advances over `text`, which must be what the source holds at the current position.
    fn advance_over(&mut self, text: &str) {
        for _ in text.chars() {
            self.advance();
        }
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Skips spaces and tabs. A run of blanks separates two numbers.
    pub fn skip_blank(&mut self) {
        let mut skipped = false;

        while let Some(' ' | '\t') = self.current() {
            self.advance();
            skipped = true;
        }

        if skipped {
            self.last_was_number = false;
        }
    }

    /// Skips a `#` comment up to, not including, the end of the line.
    pub fn skip_comment(&mut self) -> bool {
        if self.current() != Some('#') {
            return false;
        }

        while let Some(ch) = self.current() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }

        true
    }

    fn read_string(&mut self, quote: char) -> Result<Token, Error> {
        let start = self.here();
        let mut lexeme = String::from(quote);
        self.advance();

        while let Some(ch) = self.current() {
            if ch == '\n' {
                return Err(MK_ERROR!(ErrorImpl::NewlineInString { quote }, start));
            }

            lexeme.push(ch);

            if ch == quote {
                self.advance();
                self.last_was_number = false;
                return Ok(MK_TOKEN!(TokenKind::String, lexeme, start));
            }

            // Escapes are kept verbatim, including an escaped newline.
            if ch == '\\' {
                if let Some(escaped) = self.peek(1) {
                    self.advance();
                    lexeme.push(escaped);
                }
            }

            self.advance();
        }

        Err(MK_ERROR!(ErrorImpl::UnterminatedString { quote }, start))
    }

    pub(super) fn read_number(&mut self) -> Result<Option<Token>, Error> {
        let Some(matched) = INTEGER.find(self.remainder()) else {
            return Ok(None);
        };

        let start = self.here();
        let lexeme = matched.as_str().to_string();

        if self.last_was_number {
            return Err(MK_ERROR!(ErrorImpl::AdjacentNumbers { token: lexeme }, start));
        }

        self.advance_over(&lexeme);
        self.last_was_number = true;

        Ok(Some(MK_TOKEN!(TokenKind::Integer, lexeme, start)))
    }

    fn read_identifier(&mut self) -> Option<Token> {
        let matched = IDENTIFIER.find(self.remainder())?;

        let start = self.here();
        let lexeme = matched.as_str().to_string();
        self.advance_over(&lexeme);
        self.last_was_number = false;

        let kind = if RESERVED_LOOKUP.contains(lexeme.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        Some(MK_TOKEN!(kind, lexeme, start))
    }

    fn read_operator(&mut self) -> Option<Token> {
        let rest = self.remainder();
        let (symbol, kind) = SYMBOLS.iter().find(|(symbol, _)| rest.starts_with(symbol))?;

        let start = self.here();
        self.advance_over(symbol);
        self.last_was_number = false;

        Some(MK_TOKEN!(*kind, String::from(*symbol), start))
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        let result = self.scan_token();
        if let Err(error) = &result {
            self.error = Some(error.clone());
        }

        result
    }

    fn scan_token(&mut self) -> Result<Token, Error> {
        loop {
            self.skip_blank();

            let Some(ch) = self.current() else {
                return Ok(MK_TOKEN!(TokenKind::EOF, String::new(), self.here()));
            };

            if ch == '\n' {
                self.last_was_number = false;
                self.advance();
                continue;
            }

            if self.skip_comment() {
                continue;
            }

            if ch == '\'' || ch == '"' {
                return self.read_string(ch);
            }

            if let Some(token) = self.read_number()? {
                return Ok(token);
            }

            if let Some(token) = self.read_identifier() {
                return Ok(token);
            }

            if let Some(token) = self.read_operator() {
                return Ok(token);
            }

            return Err(MK_ERROR!(
                ErrorImpl::UnrecognisedCharacter { character: ch },
                self.here()
            ));
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.done = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Scans the whole of `source`.
///
/// Returns every token produced, ending with `EOF` on success, and the lexical error that
/// stopped the scan, if any. Tokens produced before an error are kept.
pub fn tokenize(source: &str) -> (Vec<Token>, Option<Error>) {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        match lex.next_token() {
            Ok(token) => {
                token.debug();

                let eof = token.is_eof();
                tokens.push(token);

                if eof {
                    break;
                }
            }
            Err(error) => {
                log::debug!(
                    "scan stopped after {} tokens: {} at {}",
                    tokens.len(),
                    error.get_impl(),
                    error.get_position()
                );
                return (tokens, Some(error));
            }
        }
    }

    log::debug!("tokenized {} tokens", tokens.len());
    (tokens, None)
}
