//! Rules for multiplication, excluding distribution (see
//! [`distribute`](super::distribute)).

use crate::ast::{BinOp, Expr, Node};

/// `2 * 3 = 6`
pub fn fold_numbers(lhs: &Node, rhs: &Node) -> Option<Node> {
    Some(Expr::number(lhs.as_number()? * rhs.as_number()?))
}

/// `1 * a = a`; `a * 1 = a`
pub fn multiply_one(lhs: &Node, rhs: &Node) -> Option<Node> {
    if lhs.as_number() == Some(1.0) {
        return Some(rhs.clone());
    }
    if rhs.as_number() == Some(1.0) {
        return Some(lhs.clone());
    }
    None
}

/// `0 * a = 0`; `a * 0 = 0`
pub fn multiply_zero(lhs: &Node, rhs: &Node) -> Option<Node> {
    if lhs.as_number() == Some(0.0) || rhs.as_number() == Some(0.0) {
        return Some(Expr::number(0.0));
    }
    None
}

/// `x * x = x^2` for a repeated variable or constant
pub fn square_repeated(lhs: &Node, rhs: &Node) -> Option<Node> {
    let repeated = match (&**lhs, &**rhs) {
        (Expr::Variable(a), Expr::Variable(b)) => a == b,
        (Expr::Constant(a), Expr::Constant(b)) => a.name == b.name,
        _ => false,
    };
    repeated.then(|| Expr::binary(BinOp::Exp, lhs.clone(), Expr::number(2.0)))
}

/// All multiplication rules, applied in order.
pub fn all(lhs: &Node, rhs: &Node) -> Option<Node> {
    fold_numbers(lhs, rhs)
        .or_else(|| multiply_one(lhs, rhs))
        .or_else(|| multiply_zero(lhs, rhs))
        .or_else(|| square_repeated(lhs, rhs))
}
