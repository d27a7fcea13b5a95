pub mod lexer;
pub mod operator;
pub mod parser;
pub mod printer;
pub mod syntax;
pub mod token;

use crate::interpreter::parser::Parser;
use anyhow::Result;
use syntax::expression_tree::Node;

/// Translates an expression in prefix function-call notation into infix notation.
///
/// # Arguments
///
/// * `expression`: A single expression such as `mul(add(1, 2), 3)`.
///
/// returns: The infix text, with only the parentheses precedence and associativity require.
///
/// # Examples
///
/// ```
/// use prefix_to_infix::interpreter::translate;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let infix = translate("mul(add(1, 2), 3)")?;
/// assert_eq!(infix, "(1 + 2) * 3");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn translate(expression: &str) -> Result<String> {
    let expression_tree = convert(expression)?;
    Ok(expression_tree.to_infix())
}

/// Converts the given input string into an equivalent expression tree.
///
/// The error, if any, is a [`parser::ParseError`] and can be recovered with
/// `downcast_ref`.
///
/// # Arguments
///
/// * `expression`: The text-representation of the prefix expression.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// use prefix_to_infix::interpreter::convert;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tree = convert("pow(2, 3)")?;
/// let regenerated = tree.to_infix();
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Node> {
    let mut parser = Parser::new(expression);
    let expression_tree = parser.parse()?;
    Ok(expression_tree)
}
