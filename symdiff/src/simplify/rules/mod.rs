//! The simplification rules.
//!
//! Each rule takes a pair of already-simplified operands and returns `Some` with a plainer
//! replacement node, or `None` if it does not apply. Rules never recurse; the driving pass in
//! [`simplify`](crate::ast::Expr::simplify) owns the traversal.

pub mod add;
pub mod distribute;
pub mod divide;
pub mod multiply;
pub mod power;

use crate::ast::{BinOp, Node};

/// Tries every rule applicable to the operator, in order, returning the first rewrite.
pub fn all(op: BinOp, lhs: &Node, rhs: &Node) -> Option<Node> {
    match op {
        BinOp::Add | BinOp::Sub => add::all(op, lhs, rhs),
        BinOp::Mul => multiply::all(lhs, rhs).or_else(|| distribute::all(lhs, rhs)),
        BinOp::Div => divide::all(lhs, rhs),
        BinOp::Exp => power::all(lhs, rhs),
    }
}
