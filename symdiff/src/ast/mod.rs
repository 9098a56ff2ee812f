//! The expression tree.
//!
//! Expressions are immutable and reference-counted: [`Node`] is an [`Arc<Expr>`], and every
//! transformation builds a new tree, sharing the subtrees it did not touch. Differentiation and
//! simplification in particular lean on this; the derivative of `f ^ g` holds several handles
//! to the same `f`.

pub mod display;

use crate::ctxt::Ctxt;
use crate::error::ErrorNode;
use crate::funcs::Func;
use std::ops::Range;
use std::sync::Arc;

/// A shared handle to an expression.
pub type Node = Arc<Expr>;

/// A binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Addition: `+`.
    Add,

    /// Subtraction: `-`.
    Sub,

    /// Multiplication: `*`.
    Mul,

    /// Division: `/`.
    Div,

    /// Exponentiation: `^`.
    Exp,
}

impl BinOp {
    /// The operator's source representation.
    pub fn as_str(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Exp => "^",
        }
    }

    /// Parses an operator from its source representation.
    pub fn from_lexeme(lexeme: &str) -> Option<BinOp> {
        Some(match lexeme {
            "+" => BinOp::Add,
            "-" => BinOp::Sub,
            "*" => BinOp::Mul,
            "/" => BinOp::Div,
            "^" => BinOp::Exp,
            _ => return None,
        })
    }
}

/// A named constant, resolved to its numeric value at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant {
    /// The constant's name, e.g. `pi`.
    pub name: String,

    /// The constant's value.
    pub value: f64,
}

/// A binary operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    /// The operator.
    pub op: BinOp,

    /// The left operand.
    pub lhs: Node,

    /// The right operand.
    pub rhs: Node,
}

/// An equality between two expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Equals {
    /// The left-hand side.
    pub lhs: Node,

    /// The right-hand side.
    pub rhs: Node,
}

/// A pending derivative of one variable with respect to another, such as `dy/dx`. Produced when
/// differentiating a variable other than the differentiation variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Differential {
    /// The differentiated variable.
    pub var: String,

    /// The variable the derivative is taken with respect to.
    pub respect_to: String,

    /// The order of the derivative, starting at 1.
    pub order: u32,
}

/// A call to a built-in function.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    /// The called function.
    pub func: Func,

    /// The function's argument.
    pub arg: Node,
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A parse or transformation failure, carried in-band. Error nodes are contagious: every
    /// pass returns them unchanged instead of transforming the surrounding tree.
    Error(ErrorNode),

    /// A numeric literal.
    Number(f64),

    /// A free variable.
    Variable(String),

    /// A named constant.
    Constant(Constant),

    /// A binary operation.
    Operator(Operator),

    /// An equality.
    Equals(Equals),

    /// A pending derivative, such as `dy/dx`.
    Differential(Differential),

    /// A function call.
    Function(Call),
}

impl Expr {
    /// Creates a number node.
    pub fn number(value: f64) -> Node {
        Arc::new(Expr::Number(value))
    }

    /// Creates a variable node.
    pub fn variable(name: impl Into<String>) -> Node {
        Arc::new(Expr::Variable(name.into()))
    }

    /// Creates a constant node, resolving its value through the context. Unregistered names get
    /// the value NaN.
    pub fn constant(name: impl Into<String>, ctxt: &Ctxt) -> Node {
        let name = name.into();
        let value = ctxt.get_constant(&name).unwrap_or(f64::NAN);
        Expr::constant_value(name, value)
    }

    /// Creates a constant node with an explicit value.
    pub fn constant_value(name: impl Into<String>, value: f64) -> Node {
        Arc::new(Expr::Constant(Constant {
            name: name.into(),
            value,
        }))
    }

    /// Creates a binary operation node.
    pub fn binary(op: BinOp, lhs: Node, rhs: Node) -> Node {
        Arc::new(Expr::Operator(Operator { op, lhs, rhs }))
    }

    /// Creates an equality node.
    pub fn equals(lhs: Node, rhs: Node) -> Node {
        Arc::new(Expr::Equals(Equals { lhs, rhs }))
    }

    /// Creates a differential node.
    pub fn differential(
        var: impl Into<String>,
        respect_to: impl Into<String>,
        order: u32,
    ) -> Node {
        Arc::new(Expr::Differential(Differential {
            var: var.into(),
            respect_to: respect_to.into(),
            order,
        }))
    }

    /// Creates a function call node.
    pub fn call(func: Func, arg: Node) -> Node {
        Arc::new(Expr::Function(Call { func, arg }))
    }

    /// Creates an error node with no source region.
    pub fn error(message: impl Into<String>) -> Node {
        Arc::new(Expr::Error(ErrorNode::new(message)))
    }

    /// Creates an error node pointing at a source region.
    pub fn error_at(message: impl Into<String>, span: Range<usize>) -> Node {
        Arc::new(Expr::Error(ErrorNode::with_span(message, span)))
    }

    /// Returns true if this is an error node.
    pub fn is_error(&self) -> bool {
        matches!(self, Expr::Error(_))
    }

    /// Returns the error payload, if this is an error node.
    pub fn as_error(&self) -> Option<&ErrorNode> {
        match self {
            Expr::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the value of this node, if it is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Expr::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the name of this node, if it is a variable.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Expr::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the constant payload, if this is a constant node.
    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Expr::Constant(constant) => Some(constant),
            _ => None,
        }
    }

    /// Returns the operation payload, if this is an operator node.
    pub fn as_operator(&self) -> Option<&Operator> {
        match self {
            Expr::Operator(op) => Some(op),
            _ => None,
        }
    }
}
