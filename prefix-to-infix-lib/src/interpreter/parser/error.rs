use crate::interpreter::token::LexicalError;
use std::fmt;

/// The first problem found while parsing, and the byte offset it was found at.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    kind: ParseErrorKind,
    position: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// A malformed number or a character no token starts with.
    Lexical(LexicalError),
    ExpectedPrimary,
    ExpectedOpenParenthesis,
    ExpectedCommaOrCloseParenthesis,
    ExpectedCloseParenthesis,
    UnknownFunction(String),
    BinaryArity { found: usize },
    TernaryArity { found: usize },
    UnexpectedTrailingToken,
    NestingTooDeep { limit: usize },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize) -> ParseError {
        ParseError { kind, position }
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::Lexical(error) => write!(f, "{}", error),
            ParseErrorKind::ExpectedPrimary => write!(f, "expected number or function call"),
            ParseErrorKind::ExpectedOpenParenthesis => write!(f, "expected '(' after identifier"),
            ParseErrorKind::ExpectedCommaOrCloseParenthesis => write!(f, "expected ',' or ')'"),
            ParseErrorKind::ExpectedCloseParenthesis => write!(f, "expected ')'"),
            ParseErrorKind::UnknownFunction(name) => write!(f, "unknown function '{}'", name),
            ParseErrorKind::BinaryArity { .. } => {
                write!(f, "binary operator requires 2 arguments")
            }
            ParseErrorKind::TernaryArity { .. } => {
                write!(f, "ternary operator requires 3 arguments")
            }
            ParseErrorKind::UnexpectedTrailingToken => {
                write!(f, "unexpected token after expression")
            }
            ParseErrorKind::NestingTooDeep { limit } => {
                write!(f, "expression nested deeper than {} levels", limit)
            }
        }
    }
}
