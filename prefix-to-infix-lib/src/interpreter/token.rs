use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression, together with the byte offset it starts at.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// The source spelling of a number literal, e.g. `-1.5e3`.
    Number(String),
    Identifier(String),
    LeftParenthesis,
    RightParenthesis,
    Comma,
    Error(LexicalError),
    EndOfInput,
}

/// Why a run of characters could not be turned into a token.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LexicalError {
    MissingDigits,
    MissingExponentDigits,
    UnrecognizedCharacter(char),
}

impl Token {
    pub fn new(kind: TokenKind, position: usize) -> Token {
        Token { kind, position }
    }

    pub fn is_end_of_input(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfInput)
    }

    pub fn is_right_parenthesis(&self) -> bool {
        matches!(self.kind, TokenKind::RightParenthesis)
    }

    /// The owned text of number and identifier tokens.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Number(text) | TokenKind::Identifier(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.kind, self.position)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(text) => write!(f, "{}", text),
            TokenKind::Identifier(name) => write!(f, "{}", name),
            TokenKind::LeftParenthesis => write!(f, "("),
            TokenKind::RightParenthesis => write!(f, ")"),
            TokenKind::Comma => write!(f, ","),
            TokenKind::Error(error) => write!(f, "<{}>", error),
            TokenKind::EndOfInput => write!(f, "<end of input>"),
        }
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LexicalError::MissingDigits => write!(f, "number literal has no digits"),
            LexicalError::MissingExponentDigits => write!(f, "number exponent has no digits"),
            LexicalError::UnrecognizedCharacter(character) => {
                write!(f, "unrecognized character '{}'", character)
            }
        }
    }
}
