//! Distribution of multiplication over sums.
//!
//! The rewrites here trade depth for breadth: the products they create are fresh nodes that
//! this pass will not revisit, so repeated simplification flattens them further.

use crate::ast::{BinOp, Expr, Node, Operator};

/// The operand shapes that distribute over a sum.
fn is_scalar(node: &Node) -> bool {
    matches!(
        &**node,
        Expr::Number(_) | Expr::Constant(_) | Expr::Function(_)
    )
}

fn as_sum(node: &Node) -> Option<&Operator> {
    match &**node {
        Expr::Operator(op) if matches!(op.op, BinOp::Add | BinOp::Sub) => Some(op),
        _ => None,
    }
}

fn product(lhs: &Node, rhs: &Node) -> Node {
    Expr::binary(BinOp::Mul, lhs.clone(), rhs.clone())
}

/// `(a ± b)(c ± d)`, expanded term by term with the signs propagated.
pub fn expand(lhs: &Node, rhs: &Node) -> Option<Node> {
    let l = as_sum(lhs)?;
    let r = as_sum(rhs)?;
    let node = match (l.op, r.op) {
        (BinOp::Add, BinOp::Add) => Expr::binary(
            BinOp::Add,
            Expr::binary(
                BinOp::Add,
                product(&l.lhs, &r.lhs),
                product(&l.lhs, &r.rhs),
            ),
            Expr::binary(
                BinOp::Add,
                product(&l.rhs, &r.lhs),
                product(&l.rhs, &r.rhs),
            ),
        ),
        (BinOp::Add, BinOp::Sub) => Expr::binary(
            BinOp::Add,
            Expr::binary(
                BinOp::Sub,
                product(&l.lhs, &r.lhs),
                product(&l.lhs, &r.rhs),
            ),
            Expr::binary(
                BinOp::Sub,
                product(&l.rhs, &r.lhs),
                product(&l.rhs, &r.rhs),
            ),
        ),
        (BinOp::Sub, BinOp::Add) => Expr::binary(
            BinOp::Add,
            Expr::binary(
                BinOp::Sub,
                product(&l.lhs, &r.lhs),
                product(&l.rhs, &r.lhs),
            ),
            Expr::binary(
                BinOp::Sub,
                product(&l.lhs, &r.rhs),
                product(&l.rhs, &r.rhs),
            ),
        ),
        (BinOp::Sub, BinOp::Sub) => Expr::binary(
            BinOp::Add,
            Expr::binary(
                BinOp::Sub,
                product(&l.lhs, &r.lhs),
                product(&l.lhs, &r.rhs),
            ),
            Expr::binary(
                BinOp::Sub,
                product(&l.rhs, &r.rhs),
                product(&l.rhs, &r.lhs),
            ),
        ),
        _ => return None,
    };
    Some(node)
}

/// `a(b ± c) = ab ± ac` when `a` is a number, constant, or function call, on either side.
pub fn scalar(lhs: &Node, rhs: &Node) -> Option<Node> {
    if is_scalar(lhs) {
        if let Some(sum) = as_sum(rhs) {
            return Some(Expr::binary(
                sum.op,
                product(lhs, &sum.lhs),
                product(lhs, &sum.rhs),
            ));
        }
    }
    if is_scalar(rhs) {
        if let Some(sum) = as_sum(lhs) {
            return Some(Expr::binary(
                sum.op,
                product(rhs, &sum.lhs),
                product(rhs, &sum.rhs),
            ));
        }
    }
    None
}

/// All distribution rules, applied in order. Two sums expand before either is treated as a
/// plain factor.
pub fn all(lhs: &Node, rhs: &Node) -> Option<Node> {
    expand(lhs, rhs).or_else(|| scalar(lhs, rhs))
}
