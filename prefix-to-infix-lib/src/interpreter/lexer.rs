use crate::interpreter::token::{LexicalError, Token, TokenKind};
use itertools::Itertools;
use std::iter::Peekable;
use std::str::CharIndices;

/// Scans an expression one token at a time.
///
/// Whitespace and `/* ... */` comments between tokens are skipped. A comment that is never
/// closed swallows the rest of the input.
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    /// Returns the next token, or an end-of-input token once the source is exhausted.
    ///
    /// The scan position always moves forward on anything but end of input, so repeatedly
    /// calling this on garbage terminates.
    pub fn next_token(&mut self) -> Token {
        self.skip_trivia();

        let (position, character) = match self.chars.peek() {
            Some(&next) => next,
            None => return Token::new(TokenKind::EndOfInput, self.source.len()),
        };

        let kind = if character.is_ascii_alphabetic() {
            self.identifier()
        } else if starts_number(character) {
            self.number(position)
        } else {
            self.chars.next();
            match character {
                '(' => TokenKind::LeftParenthesis,
                ')' => TokenKind::RightParenthesis,
                ',' => TokenKind::Comma,
                other => TokenKind::Error(LexicalError::UnrecognizedCharacter(other)),
            }
        };

        Token::new(kind, position)
    }

    fn position(&mut self) -> usize {
        self.chars
            .peek()
            .map_or(self.source.len(), |&(position, _)| position)
    }

    fn skip_trivia(&mut self) {
        loop {
            self.chars
                .peeking_take_while(|&(_, c)| is_space(c))
                .for_each(drop);

            let position = self.position();
            if !self.source[position..].starts_with("/*") {
                break;
            }
            self.skip_comment();
        }
    }

    fn skip_comment(&mut self) {
        // Consume the opening "/*".
        self.chars.nth(1);

        let mut previous = None;
        for (_, character) in self.chars.by_ref() {
            if previous == Some('*') && character == '/' {
                return;
            }
            previous = Some(character);
        }
    }

    fn identifier(&mut self) -> TokenKind {
        let name = self
            .chars
            .peeking_take_while(|&(_, c)| c.is_ascii_alphabetic())
            .map(|(_, c)| c)
            .collect();
        TokenKind::Identifier(name)
    }

    /// Scans `[+-]digits[.digits][(e|E)[+-]digits]`. At least one digit has to appear before
    /// the exponent, and an exponent needs digits of its own.
    fn number(&mut self, start: usize) -> TokenKind {
        self.eat_if(is_sign);

        let mut digits = self.eat_digits();
        if self.eat_if(|c| c == '.') {
            digits += self.eat_digits();
        }

        if self.eat_if(|c| c == 'e' || c == 'E') {
            self.eat_if(is_sign);
            if self.eat_digits() == 0 {
                return TokenKind::Error(LexicalError::MissingExponentDigits);
            }
        }

        if digits == 0 {
            return TokenKind::Error(LexicalError::MissingDigits);
        }

        let end = self.position();
        TokenKind::Number(self.source[start..end].to_string())
    }

    fn eat_if(&mut self, predicate: impl Fn(char) -> bool) -> bool {
        self.chars.next_if(|&(_, c)| predicate(c)).is_some()
    }

    fn eat_digits(&mut self) -> usize {
        self.chars
            .peeking_take_while(|&(_, c)| c.is_ascii_digit())
            .count()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields tokens up to, but not including, the end of input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_end_of_input() {
            None
        } else {
            Some(token)
        }
    }
}

/// Splits the whole expression into tokens.
///
/// # Arguments
///
/// * `expression`: The text to scan.
///
/// returns: Every token in the expression, without the trailing end-of-input token.
///
/// # Examples
///
/// ```
/// use prefix_to_infix::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("add(1, 2)");
/// assert_eq!(tokens.len(), 6);
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    Lexer::new(expression).collect()
}

fn starts_number(character: char) -> bool {
    character.is_ascii_digit() || is_sign(character) || character == '.'
}

/// ASCII whitespace including vertical tab.
fn is_space(character: char) -> bool {
    character.is_ascii_whitespace() || character == '\x0B'
}

fn is_sign(character: char) -> bool {
    character == '+' || character == '-'
}
