mod error;

pub use crate::interpreter::parser::error::{ParseError, ParseErrorKind};

use crate::interpreter::lexer::Lexer;
use crate::interpreter::operator::Operator;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::{Token, TokenKind};
use log::{debug, trace};

/// How deeply expressions may nest before the parser gives up.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// No function takes more arguments than this.
const MAX_ARGUMENTS: usize = 3;

/// A recursive-descent parser over the grammar
///
/// ```text
/// expr    := primary
/// primary := NUMBER
///          | IDENT '(' [ expr (',' expr)* ] ')'
/// ```
///
/// It keeps one token of lookahead and remembers the first error it runs into.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
    error: Option<ParseError>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Parser<'a> {
        Self::with_max_depth(input, DEFAULT_MAX_DEPTH)
    }

    /// Creates a parser that rejects expressions nested more than `max_depth` levels deep.
    pub fn with_max_depth(input: &'a str, max_depth: usize) -> Parser<'a> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        trace!("token {}", current);
        Parser {
            lexer,
            current,
            error: None,
            depth: 0,
            max_depth,
        }
    }

    /// Parses one expression, which has to span the whole input.
    ///
    /// returns: The expression tree, or the first error found. No partial tree is returned, and
    /// once a parse has failed every later call returns the same error.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_to_infix::interpreter::parser::Parser;
    ///
    /// let mut parser = Parser::new("add(1, mul(2, 3))");
    /// let tree = parser.parse().unwrap();
    /// assert_eq!(tree.to_infix(), "1 + 2 * 3");
    /// ```
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        if let Some(error) = &self.error {
            return Err(error.clone());
        }

        let tree = self.parse_expression()?;

        if !self.current.is_end_of_input() {
            return Err(self.fail(ParseErrorKind::UnexpectedTrailingToken));
        }

        debug!(
            "parsed {} nodes, {} levels deep",
            tree.node_count(),
            tree.depth()
        );
        Ok(tree)
    }

    /// The first error the parser ran into, if any.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Moves to the next token and hands back the one that was current.
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        trace!("token {}", next);
        std::mem::replace(&mut self.current, next)
    }

    fn fail(&mut self, kind: ParseErrorKind) -> ParseError {
        let position = self.current.position;
        self.fail_at(kind, position)
    }

    /// Records the error unless an earlier one is already recorded, and returns the recorded one.
    fn fail_at(&mut self, kind: ParseErrorKind, position: usize) -> ParseError {
        let error = self.error.get_or_insert_with(|| {
            let error = ParseError::new(kind, position);
            debug!("parse failed at offset {}: {}", error.position(), error);
            error
        });
        error.clone()
    }

    fn parse_expression(&mut self) -> Result<Node, ParseError> {
        if self.depth >= self.max_depth {
            let limit = self.max_depth;
            return Err(self.fail(ParseErrorKind::NestingTooDeep { limit }));
        }

        self.depth += 1;
        let expression = self.parse_primary();
        self.depth -= 1;
        expression
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        match self.current.kind {
            TokenKind::Number(_) | TokenKind::Identifier(_) => {}
            TokenKind::Error(error) => {
                return Err(self.fail(ParseErrorKind::Lexical(error)));
            }
            _ => return Err(self.fail(ParseErrorKind::ExpectedPrimary)),
        }

        let token = self.advance();
        match token.kind {
            TokenKind::Identifier(name) => self.parse_call(name, token.position),
            TokenKind::Number(text) => Ok(Node::new_number(text)),
            _ => Err(self.fail_at(ParseErrorKind::ExpectedPrimary, token.position)),
        }
    }

    fn parse_call(&mut self, name: String, position: usize) -> Result<Node, ParseError> {
        if !matches!(self.current.kind, TokenKind::LeftParenthesis) {
            return Err(self.fail(ParseErrorKind::ExpectedOpenParenthesis));
        }
        self.advance();

        let arguments = self.parse_arguments()?;

        let operator = match Operator::from_function_name(&name) {
            Some(operator) => operator,
            None => return Err(self.fail_at(ParseErrorKind::UnknownFunction(name), position)),
        };

        match operator {
            Operator::Binary(operator) => match <[Node; 2]>::try_from(arguments) {
                Ok([left_operand, right_operand]) => {
                    Ok(Node::new_binary(operator, left_operand, right_operand))
                }
                Err(arguments) => {
                    let found = arguments.len();
                    Err(self.fail_at(ParseErrorKind::BinaryArity { found }, position))
                }
            },
            Operator::Conditional => match <[Node; 3]>::try_from(arguments) {
                Ok([condition, if_true, if_false]) => {
                    Ok(Node::new_conditional(condition, if_true, if_false))
                }
                Err(arguments) => {
                    let found = arguments.len();
                    Err(self.fail_at(ParseErrorKind::TernaryArity { found }, position))
                }
            },
        }
    }

    /// Parses the comma-separated arguments after `(` up to and including the closing `)`.
    ///
    /// Collection stops after the third argument; whatever follows it has to be `)`.
    fn parse_arguments(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut arguments = Vec::with_capacity(MAX_ARGUMENTS);

        while !self.current.is_right_parenthesis() && arguments.len() < MAX_ARGUMENTS {
            arguments.push(self.parse_expression()?);

            match self.current.kind {
                TokenKind::Comma => {
                    self.advance();
                }
                TokenKind::RightParenthesis => {}
                _ => return Err(self.fail(ParseErrorKind::ExpectedCommaOrCloseParenthesis)),
            }
        }

        if !self.current.is_right_parenthesis() {
            return Err(self.fail(ParseErrorKind::ExpectedCloseParenthesis));
        }
        self.advance();

        Ok(arguments)
    }
}

/// Parses the given input string into an equivalent expression tree.
///
/// # Arguments
///
/// * `expression`: The text of a single expression in prefix function-call notation.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # fn main() -> Result<(), prefix_to_infix::interpreter::parser::ParseError> {
/// use prefix_to_infix::interpreter::parser::parse;
///
/// let tree = parse("pow(2, 8)")?;
/// assert_eq!(tree.to_infix(), "2^8");
/// # Ok(()) }
/// ```
pub fn parse(expression: &str) -> Result<Node, ParseError> {
    Parser::new(expression).parse()
}
