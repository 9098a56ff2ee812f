//! Rules for addition and subtraction.

use crate::ast::{BinOp, Expr, Node};

/// `0 + a = a`; `0 - a = -1 * a`
pub fn zero_lhs(op: BinOp, lhs: &Node, rhs: &Node) -> Option<Node> {
    if lhs.as_number()? != 0.0 {
        return None;
    }
    match op {
        BinOp::Add => Some(rhs.clone()),
        BinOp::Sub => Some(Expr::binary(
            BinOp::Mul,
            Expr::number(-1.0),
            rhs.clone(),
        )),
        _ => None,
    }
}

/// `a + 0 = a`; `a - 0 = a`
pub fn zero_rhs(lhs: &Node, rhs: &Node) -> Option<Node> {
    (rhs.as_number()? == 0.0).then(|| lhs.clone())
}

/// `2 + 3 = 5`; `5 - 3 = 2`
pub fn fold_numbers(op: BinOp, lhs: &Node, rhs: &Node) -> Option<Node> {
    let (lhs, rhs) = (lhs.as_number()?, rhs.as_number()?);
    match op {
        BinOp::Add => Some(Expr::number(lhs + rhs)),
        BinOp::Sub => Some(Expr::number(lhs - rhs)),
        _ => None,
    }
}

/// All addition and subtraction rules, applied in order.
pub fn all(op: BinOp, lhs: &Node, rhs: &Node) -> Option<Node> {
    zero_lhs(op, lhs, rhs)
        .or_else(|| fold_numbers(op, lhs, rhs))
        .or_else(|| zero_rhs(lhs, rhs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_minus_negates() {
        let node = zero_lhs(BinOp::Sub, &Expr::number(0.0), &Expr::variable("x")).unwrap();
        let op = node.as_operator().unwrap();
        assert_eq!(op.op, BinOp::Mul);
        assert_eq!(op.lhs.as_number(), Some(-1.0));
    }

    #[test]
    fn nonzero_lhs_does_not_apply() {
        assert!(zero_lhs(BinOp::Add, &Expr::variable("x"), &Expr::number(0.0)).is_none());
        assert!(zero_lhs(BinOp::Add, &Expr::number(2.0), &Expr::number(3.0)).is_none());
    }

    #[test]
    fn folds_literal_arithmetic() {
        let node = fold_numbers(BinOp::Sub, &Expr::number(5.0), &Expr::number(3.0)).unwrap();
        assert_eq!(node.as_number(), Some(2.0));
    }
}
