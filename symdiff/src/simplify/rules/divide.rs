//! Rules for division.

use crate::ast::{Expr, Node};

/// `a / 1 = a`
pub fn divide_one(lhs: &Node, rhs: &Node) -> Option<Node> {
    (rhs.as_number()? == 1.0).then(|| lhs.clone())
}

/// `0 / a = 0`
pub fn zero_dividend(lhs: &Node, _rhs: &Node) -> Option<Node> {
    (lhs.as_number()? == 0.0).then(|| Expr::number(0.0))
}

/// All division rules, applied in order.
pub fn all(lhs: &Node, rhs: &Node) -> Option<Node> {
    divide_one(lhs, rhs).or_else(|| zero_dividend(lhs, rhs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_divisor_disappears() {
        let node = divide_one(&Expr::variable("x"), &Expr::number(1.0)).unwrap();
        assert_eq!(node.as_variable(), Some("x"));
    }

    #[test]
    fn zero_dividend_folds_regardless_of_divisor() {
        let node = zero_dividend(&Expr::number(0.0), &Expr::variable("x")).unwrap();
        assert_eq!(node.as_number(), Some(0.0));
    }

    #[test]
    fn other_divisions_left_alone() {
        assert!(all(&Expr::number(6.0), &Expr::number(2.0)).is_none());
    }
}
