//! Rules for exponentiation.

use crate::ast::{Expr, Node};

/// `0 ^ a = 0` for any exponent other than a literal zero. `0 ^ 0` falls through to
/// [`exponent_zero`], which folds it to 1.
pub fn zero_base(lhs: &Node, rhs: &Node) -> Option<Node> {
    if lhs.as_number()? != 0.0 {
        return None;
    }
    match rhs.as_number() {
        Some(exponent) if exponent != 0.0 => Some(Expr::number(0.0)),
        Some(_) => None,
        None => Some(Expr::number(0.0)),
    }
}

/// `1 ^ a = 1`
pub fn one_base(lhs: &Node, _rhs: &Node) -> Option<Node> {
    (lhs.as_number()? == 1.0).then(|| Expr::number(1.0))
}

/// `a ^ 1 = a`
pub fn exponent_one(lhs: &Node, rhs: &Node) -> Option<Node> {
    (rhs.as_number()? == 1.0).then(|| lhs.clone())
}

/// `a ^ 0 = 1`
pub fn exponent_zero(_lhs: &Node, rhs: &Node) -> Option<Node> {
    (rhs.as_number()? == 0.0).then(|| Expr::number(1.0))
}

/// All exponentiation rules, applied in order.
pub fn all(lhs: &Node, rhs: &Node) -> Option<Node> {
    zero_base(lhs, rhs)
        .or_else(|| one_base(lhs, rhs))
        .or_else(|| exponent_one(lhs, rhs))
        .or_else(|| exponent_zero(lhs, rhs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_base_with_symbolic_exponent() {
        let node = all(&Expr::number(0.0), &Expr::variable("x")).unwrap();
        assert_eq!(node.as_number(), Some(0.0));
    }

    #[test]
    fn zero_to_the_zero_is_one() {
        let node = all(&Expr::number(0.0), &Expr::number(0.0)).unwrap();
        assert_eq!(node.as_number(), Some(1.0));
    }

    #[test]
    fn unit_exponent_disappears() {
        let node = all(&Expr::variable("x"), &Expr::number(1.0)).unwrap();
        assert_eq!(node.as_variable(), Some("x"));
    }

    #[test]
    fn symbolic_powers_left_alone() {
        assert!(all(&Expr::variable("x"), &Expr::variable("y")).is_none());
    }
}
