use crate::interpreter::operator::{Associativity, BinaryOperator, Operator, LEAF_PRECEDENCE};
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_conditional, SyntaxVisitor,
};
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

/// An expression tree. Every operation owns its operands, so dropping the root releases the
/// whole tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Terminal symbols (leaves)
    Number {
        /// The literal exactly as it was written in the input.
        text: String,
        value: f64,
    },
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
    Conditional {
        condition: Box<Node>,
        if_true: Box<Node>,
        if_false: Box<Node>,
    },
}

impl Node {
    /// Creates a leaf from the source spelling of a number literal.
    ///
    /// Spellings the float parser rejects keep their text and get a NaN value.
    pub fn new_number(text: impl Into<String>) -> Node {
        let text = text.into();
        let value = text.parse().unwrap_or(f64::NAN);
        Node::Number { text, value }
    }

    pub fn new_binary(operator: BinaryOperator, left_operand: Node, right_operand: Node) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_conditional(condition: Node, if_true: Node, if_false: Node) -> Node {
        Node::Conditional {
            condition: Box::new(condition),
            if_true: Box::new(if_true),
            if_false: Box::new(if_false),
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Node::Number { .. })
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Node::Number { .. } => None,
            Node::BinaryOperation { operator, .. } => Some(Operator::Binary(*operator)),
            Node::Conditional { .. } => Some(Operator::Conditional),
        }
    }

    /// How tightly the node binds. Leaves bind tighter than any operator.
    pub fn precedence(&self) -> u8 {
        self.operator()
            .map_or(LEAF_PRECEDENCE, |operator| operator.precedence())
    }

    pub fn associativity(&self) -> Associativity {
        self.operator()
            .map_or(Associativity::Left, |operator| operator.associativity())
    }

    /// Number of nodes in the tree, leaves included.
    pub fn node_count(&self) -> usize {
        let mut visitor = NodeCounter { count: 0 };
        self.accept(&mut visitor);
        visitor.count
    }

    /// Length of the longest path from this node down to a leaf, counted in nodes.
    pub fn depth(&self) -> usize {
        let mut visitor = DepthMeter {
            current: 0,
            deepest: 0,
        };
        self.accept(&mut visitor);
        visitor.deepest
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Number { text, value } => visitor.visit_number(text, *value),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
            Node::Conditional {
                condition,
                if_true,
                if_false,
            } => visitor.visit_conditional(condition, if_true, if_false),
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_number(&mut self, text: &str, _value: f64) {
        self.builder.add_empty_child(text.to_string());
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
    fn visit_conditional(&mut self, condition: &Node, if_true: &Node, if_false: &Node) {
        self.builder.begin_child(format!("{}", Operator::Conditional));
        walk_conditional(self, condition, if_true, if_false);
        self.builder.end_child();
    }
}

struct NodeCounter {
    count: usize,
}

impl SyntaxVisitor for NodeCounter {
    fn visit_number(&mut self, _text: &str, _value: f64) {
        self.count += 1;
    }
    fn visit_binary_operation(
        &mut self,
        _operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.count += 1;
        walk_binary_operation(self, left_operand, right_operand);
    }
    fn visit_conditional(&mut self, condition: &Node, if_true: &Node, if_false: &Node) {
        self.count += 1;
        walk_conditional(self, condition, if_true, if_false);
    }
}

struct DepthMeter {
    current: usize,
    deepest: usize,
}

impl DepthMeter {
    fn descend(&mut self, walk: impl FnOnce(&mut Self)) {
        self.current += 1;
        self.deepest = self.deepest.max(self.current);
        walk(self);
        self.current -= 1;
    }
}

impl SyntaxVisitor for DepthMeter {
    fn visit_number(&mut self, _text: &str, _value: f64) {
        self.descend(|_| {});
    }
    fn visit_binary_operation(
        &mut self,
        _operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.descend(|meter| walk_binary_operation(meter, left_operand, right_operand));
    }
    fn visit_conditional(&mut self, condition: &Node, if_true: &Node, if_false: &Node) {
        self.descend(|meter| walk_conditional(meter, condition, if_true, if_false));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_simple_tree() -> Node {
        Node::new_binary(
            BinaryOperator::Add,
            Node::new_number("1"),
            Node::new_number("2"),
        )
    }

    fn create_complex_tree() -> Node {
        // tern(pow(2, sub(3, 4)), 5, mod(6, 7))
        let difference = Node::new_binary(
            BinaryOperator::Subtract,
            Node::new_number("3"),
            Node::new_number("4"),
        );
        let power = Node::new_binary(
            BinaryOperator::Exponentiate,
            Node::new_number("2"),
            difference,
        );
        let remainder = Node::new_binary(
            BinaryOperator::Modulo,
            Node::new_number("6"),
            Node::new_number("7"),
        );
        Node::new_conditional(power, Node::new_number("5"), remainder)
    }

    #[test]
    fn number_keeps_text_and_parses_value() {
        let node = Node::new_number("-2.5e1");

        assert_eq!(
            node,
            Node::Number {
                text: "-2.5e1".to_string(),
                value: -25.0
            }
        );
    }

    #[test]
    fn number_with_leading_sign_and_dot_parses() {
        match Node::new_number("+.5") {
            Node::Number { value, .. } => assert_eq!(value, 0.5),
            other => panic!("expected a number, got {:?}", other),
        }
    }

    #[test]
    fn leaf_has_highest_precedence() {
        let leaf = Node::new_number("1");

        assert_eq!(leaf.precedence(), LEAF_PRECEDENCE);
        assert_eq!(leaf.operator(), None);
        assert!(leaf.is_number());
    }

    #[test]
    fn operation_precedence_comes_from_its_operator() {
        let tree = create_complex_tree();

        assert_eq!(tree.operator(), Some(Operator::Conditional));
        assert_eq!(tree.precedence(), 1);
        assert_eq!(tree.associativity(), Associativity::Right);
        assert_eq!(create_simple_tree().precedence(), 2);
        assert_eq!(create_simple_tree().associativity(), Associativity::Left);
    }

    #[test]
    fn node_count_includes_every_node() {
        assert_eq!(Node::new_number("1").node_count(), 1);
        assert_eq!(create_simple_tree().node_count(), 3);
        assert_eq!(create_complex_tree().node_count(), 10);
    }

    #[test]
    fn depth_counts_longest_path() {
        assert_eq!(Node::new_number("1").depth(), 1);
        assert_eq!(create_simple_tree().depth(), 2);
        assert_eq!(create_complex_tree().depth(), 4);
    }

    #[test]
    fn print_succeeds() {
        let tree = create_complex_tree();

        print!("{}", tree);
    }

    #[test]
    fn printed_tree_lists_operators_and_literals() {
        let printed = create_simple_tree().to_string();

        assert!(printed.starts_with("expression"));
        assert!(printed.contains('+'));
        assert!(printed.contains('1'));
        assert!(printed.contains('2'));
    }
}
