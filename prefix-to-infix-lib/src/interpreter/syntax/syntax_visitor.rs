use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::expression_tree::Node;

/// If a method is not implemented, the default implementation will continue in a pre-order
/// traversal of the tree.
pub(crate) trait SyntaxVisitor: Sized {
    fn visit_number(&mut self, _text: &str, _value: f64) {}
    fn visit_binary_operation(
        &mut self,
        _operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        walk_binary_operation(self, left_operand, right_operand)
    }
    fn visit_conditional(&mut self, condition: &Node, if_true: &Node, if_false: &Node) {
        walk_conditional(self, condition, if_true, if_false)
    }
}

pub(crate) fn walk_binary_operation(
    visitor: &mut impl SyntaxVisitor,
    left_operand: &Node,
    right_operand: &Node,
) {
    left_operand.accept(visitor);
    right_operand.accept(visitor);
}

pub(crate) fn walk_conditional(
    visitor: &mut impl SyntaxVisitor,
    condition: &Node,
    if_true: &Node,
    if_false: &Node,
) {
    condition.accept(visitor);
    if_true.accept(visitor);
    if_false.accept(visitor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_complex_tree() -> Node {
        // tern(add(1, 2), mul(3, 4), 5)
        let sum = Node::new_binary(
            BinaryOperator::Add,
            Node::new_number("1"),
            Node::new_number("2"),
        );
        let product = Node::new_binary(
            BinaryOperator::Multiply,
            Node::new_number("3"),
            Node::new_number("4"),
        );
        Node::new_conditional(sum, product, Node::new_number("5"))
    }

    struct PrePostPrintVisitor {
        prints: Vec<String>,
    }

    impl SyntaxVisitor for PrePostPrintVisitor {
        fn visit_number(&mut self, text: &str, _value: f64) {
            self.prints.push(text.to_string())
        }
        fn visit_binary_operation(
            &mut self,
            operator: &BinaryOperator,
            left_operand: &Node,
            right_operand: &Node,
        ) {
            self.prints.push(format!("{:?}", operator));
            walk_binary_operation(self, left_operand, right_operand);
            self.prints.push(format!("exit {:?}", operator));
        }
        fn visit_conditional(&mut self, condition: &Node, if_true: &Node, if_false: &Node) {
            self.prints.push("Conditional".to_string());
            walk_conditional(self, condition, if_true, if_false);
            self.prints.push("exit Conditional".to_string());
        }
    }

    #[test]
    fn walk_tree_prints_all_nodes_in_tree_in_pre_and_post_orders() {
        let root = create_complex_tree();
        let mut visitor = PrePostPrintVisitor { prints: vec![] };
        root.accept(&mut visitor);
        assert_eq!(
            visitor.prints,
            [
                "Conditional",
                "Add",
                "1",
                "2",
                "exit Add",
                "Multiply",
                "3",
                "4",
                "exit Multiply",
                "5",
                "exit Conditional",
            ]
        )
    }

    struct LeafCollector {
        leaves: Vec<f64>,
    }

    impl SyntaxVisitor for LeafCollector {
        fn visit_number(&mut self, _text: &str, value: f64) {
            self.leaves.push(value)
        }
    }

    #[test]
    fn default_methods_walk_into_every_operand() {
        let root = create_complex_tree();
        let mut visitor = LeafCollector { leaves: vec![] };
        root.accept(&mut visitor);
        assert_eq!(visitor.leaves, vec![1.0, 2.0, 3.0, 4.0, 5.0])
    }
}
