use std::fmt;
use std::fmt::Formatter;

/// Precedence of a numeric leaf, which binds tighter than any operator.
pub const LEAF_PRECEDENCE: u8 = 5;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Exponentiate,
}

/// Anything a function call in the input can name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Binary(BinaryOperator),
    /// `condition ? if_true : if_false`
    Conditional,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl BinaryOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Exponentiate => "^",
        }
    }

    /// Whether the symbol is written with a space on either side.
    pub fn is_spaced(&self) -> bool {
        !matches!(self, BinaryOperator::Exponentiate)
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide
            | BinaryOperator::Modulo => Associativity::Left,
            BinaryOperator::Exponentiate => Associativity::Right,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 2,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => 3,
            BinaryOperator::Exponentiate => 4,
        }
    }
}

impl Operator {
    /// Looks up the operator behind a function name such as `add` or `tern`.
    pub fn from_function_name(name: &str) -> Option<Operator> {
        let operator = match name {
            "add" => Operator::Binary(BinaryOperator::Add),
            "sub" => Operator::Binary(BinaryOperator::Subtract),
            "mul" => Operator::Binary(BinaryOperator::Multiply),
            "div" => Operator::Binary(BinaryOperator::Divide),
            "mod" => Operator::Binary(BinaryOperator::Modulo),
            "pow" => Operator::Binary(BinaryOperator::Exponentiate),
            "tern" => Operator::Conditional,
            _ => return None,
        };
        Some(operator)
    }

    pub fn function_name(&self) -> &'static str {
        match self {
            Operator::Binary(BinaryOperator::Add) => "add",
            Operator::Binary(BinaryOperator::Subtract) => "sub",
            Operator::Binary(BinaryOperator::Multiply) => "mul",
            Operator::Binary(BinaryOperator::Divide) => "div",
            Operator::Binary(BinaryOperator::Modulo) => "mod",
            Operator::Binary(BinaryOperator::Exponentiate) => "pow",
            Operator::Conditional => "tern",
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Operator::Binary(_) => 2,
            Operator::Conditional => 3,
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            Operator::Binary(operator) => operator.associativity(),
            Operator::Conditional => Associativity::Right,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Binary(operator) => operator.precedence(),
            Operator::Conditional => 1,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Operator::Binary(operator) => write!(f, "{}", operator),
            Operator::Conditional => write!(f, "?:"),
        }
    }
}
