use crate::interpreter::operator::Associativity;
use crate::interpreter::syntax::expression_tree::Node;
use std::cmp::Ordering;

/// Context the root is printed in. Lower than any operator, so the root is never wrapped.
const ROOT_PRECEDENCE: u8 = 0;

/// Which operand of its parent a node is printed as.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum OperandSlot {
    Left,
    Middle,
    Right,
}

impl Node {
    /// Renders the tree as an infix expression with as few parentheses as precedence and
    /// associativity allow.
    ///
    /// returns: The infix text, e.g. `(1 + 2) * 3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use prefix_to_infix::interpreter::operator::BinaryOperator;
    /// use prefix_to_infix::interpreter::syntax::expression_tree::Node;
    ///
    /// let tree = Node::new_binary(
    ///     BinaryOperator::Exponentiate,
    ///     Node::new_number("2"),
    ///     Node::new_number("10"),
    /// );
    /// assert_eq!(tree.to_infix(), "2^10");
    /// ```
    pub fn to_infix(&self) -> String {
        let mut output = String::new();
        self.build_expression(&mut output, ROOT_PRECEDENCE, OperandSlot::Left);
        output
    }

    fn build_expression(&self, output: &mut String, parent_precedence: u8, slot: OperandSlot) {
        let precedence = self.precedence();
        let parenthesize = self.needs_parentheses(parent_precedence, slot);

        match self {
            Node::Number { text, .. } => output.push_str(text),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => parenthesize_if(output, parenthesize, |output| {
                left_operand.build_expression(output, precedence, OperandSlot::Left);
                if operator.is_spaced() {
                    output.push(' ');
                    output.push_str(operator.symbol());
                    output.push(' ');
                } else {
                    output.push_str(operator.symbol());
                }
                right_operand.build_expression(output, precedence, OperandSlot::Right);
            }),
            Node::Conditional {
                condition,
                if_true,
                if_false,
            } => parenthesize_if(output, parenthesize, |output| {
                condition.build_expression(output, precedence, OperandSlot::Left);
                output.push('?');
                if_true.build_expression(output, precedence, OperandSlot::Middle);
                output.push(':');
                if_false.build_expression(output, precedence, OperandSlot::Right);
            }),
        }
    }

    /// A node needs parentheses when it binds looser than its parent, or equally loose on the
    /// side its associativity does not group towards. The middle operand groups like a left one.
    fn needs_parentheses(&self, parent_precedence: u8, slot: OperandSlot) -> bool {
        match self.precedence().cmp(&parent_precedence) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => match self.associativity() {
                Associativity::Left => slot == OperandSlot::Right,
                Associativity::Right => slot != OperandSlot::Right,
            },
        }
    }
}

fn parenthesize_if(
    output: &mut String,
    predicate: bool,
    build_interior: impl FnOnce(&mut String),
) {
    if predicate {
        output.push('(');
    }

    build_interior(output);

    if predicate {
        output.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::operator::BinaryOperator;
    use parameterized_macro::parameterized;

    fn number(text: &str) -> Node {
        Node::new_number(text)
    }

    fn binary(operator: BinaryOperator, left: Node, right: Node) -> Node {
        Node::new_binary(operator, left, right)
    }

    fn add(left: Node, right: Node) -> Node {
        binary(BinaryOperator::Add, left, right)
    }

    fn sub(left: Node, right: Node) -> Node {
        binary(BinaryOperator::Subtract, left, right)
    }

    fn mul(left: Node, right: Node) -> Node {
        binary(BinaryOperator::Multiply, left, right)
    }

    fn pow(left: Node, right: Node) -> Node {
        binary(BinaryOperator::Exponentiate, left, right)
    }

    fn tern(condition: Node, if_true: Node, if_false: Node) -> Node {
        Node::new_conditional(condition, if_true, if_false)
    }

    #[test]
    fn leaf_prints_its_literal_verbatim() {
        assert_eq!(number("-0.50E+03").to_infix(), "-0.50E+03");
    }

    #[test]
    fn lower_precedence_child_is_wrapped() {
        let tree = mul(add(number("1"), number("2")), number("3"));

        assert_eq!(tree.to_infix(), "(1 + 2) * 3");
    }

    #[test]
    fn higher_precedence_child_is_not_wrapped() {
        let tree = add(number("1"), mul(number("2"), number("3")));

        assert_eq!(tree.to_infix(), "1 + 2 * 3");
    }

    #[test]
    fn left_associative_chain_only_wraps_right_nesting() {
        let left_nested = sub(sub(number("1"), number("2")), number("3"));
        let right_nested = sub(number("1"), sub(number("2"), number("3")));

        assert_eq!(left_nested.to_infix(), "1 - 2 - 3");
        assert_eq!(right_nested.to_infix(), "1 - (2 - 3)");
    }

    #[test]
    fn same_precedence_on_the_right_is_wrapped_even_for_different_operators() {
        let tree = binary(
            BinaryOperator::Divide,
            number("8"),
            binary(BinaryOperator::Modulo, number("5"), number("3")),
        );

        assert_eq!(tree.to_infix(), "8 / (5 % 3)");
    }

    #[test]
    fn right_associative_chain_only_wraps_left_nesting() {
        let right_nested = pow(number("2"), pow(number("3"), number("4")));
        let left_nested = pow(pow(number("2"), number("3")), number("4"));

        assert_eq!(right_nested.to_infix(), "2^3^4");
        assert_eq!(left_nested.to_infix(), "(2^3)^4");
    }

    #[test]
    fn conditional_has_no_spaces() {
        let tree = tern(number("1"), number("2"), number("3"));

        assert_eq!(tree.to_infix(), "1?2:3");
    }

    #[test]
    fn nested_conditional_is_wrapped_except_as_last_operand() {
        let inner = || tern(number("2"), number("3"), number("4"));

        let as_condition = tern(inner(), number("4"), number("5"));
        let as_if_true = tern(number("1"), inner(), number("5"));
        let as_if_false = tern(number("1"), number("2"), inner());

        assert_eq!(as_condition.to_infix(), "(2?3:4)?4:5");
        assert_eq!(as_if_true.to_infix(), "1?(2?3:4):5");
        assert_eq!(as_if_false.to_infix(), "1?2:2?3:4");
    }

    #[test]
    fn binary_operands_of_conditional_are_not_wrapped() {
        let tree = tern(
            sub(number("1"), number("2")),
            mul(number("3"), number("4")),
            pow(number("5"), number("6")),
        );

        assert_eq!(tree.to_infix(), "1 - 2?3 * 4:5^6");
    }

    #[test]
    fn conditional_inside_binary_is_wrapped() {
        let tree = add(tern(number("1"), number("2"), number("3")), number("4"));

        assert_eq!(tree.to_infix(), "(1?2:3) + 4");
    }

    #[parameterized(
        operator = {
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
            BinaryOperator::Modulo,
            BinaryOperator::Exponentiate,
        },
        expected = { "7 + 8", "7 - 8", "7 * 8", "7 / 8", "7 % 8", "7^8" }
    )]
    fn binary_operator_spacing(operator: BinaryOperator, expected: &str) {
        let tree = binary(operator, number("7"), number("8"));

        assert_eq!(tree.to_infix(), expected);
    }

    #[test]
    fn printing_does_not_change_the_tree() {
        let tree = mul(add(number("1"), number("2")), number("3"));
        let copy = tree.clone();

        let _ = tree.to_infix();

        assert_eq!(tree, copy);
    }
}
