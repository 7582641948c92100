use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        for word in [
            "False", "None", "True", "__init__", "and", "as", "assert", "break", "class",
            "continue", "def", "del", "elif", "else", "except", "finally", "for", "from",
            "global", "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass",
            "raise", "return", "try", "while", "with", "yield", "print", "bool", "int",
            "float", "str", "list", "dict", "tuple", "set", "object", "self",
        ] {
            set.insert(word);
        }
        set
    };

    /// Fixed-text symbols in match priority order. Every two-character symbol comes
    /// before the one-character symbol that prefixes it.
    pub static ref SYMBOLS: Vec<(&'static str, TokenKind)> = vec![
        ("!=", TokenKind::NotEquals),
        ("==", TokenKind::Equals),
        ("<=", TokenKind::LessEquals),
        (">=", TokenKind::GreaterEquals),
        ("+=", TokenKind::PlusEquals),
        ("-=", TokenKind::MinusEquals),
        ("*=", TokenKind::StarEquals),
        ("/=", TokenKind::SlashEquals),
        ("//", TokenKind::SlashSlash),
        ("**", TokenKind::StarStar),
        ("->", TokenKind::Arrow),

        ("+", TokenKind::Plus),
        ("-", TokenKind::Dash),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("%", TokenKind::Percent),
        ("=", TokenKind::Assignment),
        ("<", TokenKind::Less),
        (">", TokenKind::Greater),

        ("(", TokenKind::OpenParen),
        (")", TokenKind::CloseParen),
        ("[", TokenKind::OpenBracket),
        ("]", TokenKind::CloseBracket),
        ("{", TokenKind::OpenCurly),
        ("}", TokenKind::CloseCurly),

        (",", TokenKind::Comma),
        (":", TokenKind::Colon),
        (";", TokenKind::Semicolon),
        (".", TokenKind::Dot),

        ("@", TokenKind::At),
        ("&", TokenKind::Ampersand),
        ("|", TokenKind::Pipe),
        ("^", TokenKind::Caret),
        ("~", TokenKind::Tilde),
        ("?", TokenKind::Question),
    ];
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Keyword,
    Identifier,
    Integer,
    String,

    NotEquals,     // !=
    Equals,        // ==
    LessEquals,    // <=
    GreaterEquals, // >=
    PlusEquals,    // +=
    MinusEquals,   // -=
    StarEquals,    // *=
    SlashEquals,   // /=
    SlashSlash,    // //
    StarStar,      // **
    Arrow,         // ->

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Assignment,
    Less,
    Greater,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    Comma,
    Colon,
    Semicolon,
    Dot,

    At,
    Ampersand,
    Pipe,
    Caret,
    Tilde,
    Question,
}

impl TokenKind {
    /// The tag used when a token of this kind is written out.
    pub fn tag(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "id",
            TokenKind::Integer => "tk_entero",
            TokenKind::String => "tk_cadena",

            TokenKind::NotEquals => "tk_distinto",
            TokenKind::Equals => "tk_igual",
            TokenKind::LessEquals => "tk_menor_igual",
            TokenKind::GreaterEquals => "tk_mayor_igual",
            TokenKind::PlusEquals => "tk_mas_igual",
            TokenKind::MinusEquals => "tk_menos_igual",
            TokenKind::StarEquals => "tk_por_igual",
            TokenKind::SlashEquals => "tk_div_igual",
            TokenKind::SlashSlash => "tk_div_entera",
            TokenKind::StarStar => "tk_pot",
            TokenKind::Arrow => "tk_ejecuta",

            TokenKind::Plus => "tk_suma",
            TokenKind::Dash => "tk_resta",
            TokenKind::Star => "tk_mult",
            TokenKind::Slash => "tk_div",
            TokenKind::Percent => "tk_mod",
            TokenKind::Assignment => "tk_asig",
            TokenKind::Less => "tk_menor",
            TokenKind::Greater => "tk_mayor",

            TokenKind::OpenParen => "tk_par_izq",
            TokenKind::CloseParen => "tk_par_der",
            TokenKind::OpenBracket => "tk_cor_izq",
            TokenKind::CloseBracket => "tk_cor_der",
            TokenKind::OpenCurly => "tk_llave_izq",
            TokenKind::CloseCurly => "tk_llave_der",

            TokenKind::Comma => "tk_coma",
            TokenKind::Colon => "tk_dos_puntos",
            TokenKind::Semicolon => "tk_punto_y_coma",
            TokenKind::Dot => "tk_punto",

            TokenKind::At => "tk_arroba",
            TokenKind::Ampersand => "tk_and_bit",
            TokenKind::Pipe => "tk_or_bit",
            TokenKind::Caret => "tk_xor",
            TokenKind::Tilde => "tk_not_bit",
            TokenKind::Question => "tk_interrogacion",
        }
    }

    /// Whether tokens of this kind come from the fixed symbol table.
    pub fn is_symbol(&self) -> bool {
        !matches!(
            self,
            TokenKind::EOF
                | TokenKind::Keyword
                | TokenKind::Identifier
                | TokenKind::Integer
                | TokenKind::String
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Position { line, column, .. } = self.position;

        match self.kind {
            TokenKind::Keyword => write!(f, "<{},{},{}>", self.value, line, column),
            TokenKind::Identifier | TokenKind::Integer | TokenKind::String => {
                write!(f, "<{},{},{},{}>", self.kind, self.value, line, column)
            }
            _ => write!(f, "<{},{},{}>", self.kind, line, column),
        }
    }
}

impl Token {
    fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|kind| *kind == self.kind)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    pub fn debug(&self) {
        if self.is_one_of_many(&[
            TokenKind::Keyword,
            TokenKind::String,
            TokenKind::Identifier,
            TokenKind::Integer,
        ]) {
            log::trace!("{} ({}) at {}", self.kind, self.value, self.position);
        } else {
            log::trace!("{} () at {}", self.kind, self.position);
        }
    }
}
