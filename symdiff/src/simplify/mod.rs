//! Algebraic simplification.
//!
//! Simplification is a single bottom-up pass: children are simplified first, then the rules in
//! [`rules`] get one shot at the rebuilt node. The pass is best-effort rather than canonical;
//! running it again can simplify further, since rules like distribution produce fresh nodes no
//! rule has looked at. It is stable on its fixed points, so a fully-folded tree comes back
//! unchanged.

pub mod rules;

use crate::ast::{Expr, Node};
use std::sync::Arc;

impl Expr {
    /// Simplifies the expression from the leaves up.
    pub fn simplify(&self) -> Node {
        match self {
            Expr::Error(_)
            | Expr::Number(_)
            | Expr::Variable(_)
            | Expr::Constant(_)
            | Expr::Differential(_) => Arc::new(self.clone()),
            Expr::Equals(eq) => {
                let lhs = eq.lhs.simplify();
                if lhs.is_error() {
                    return lhs;
                }
                let rhs = eq.rhs.simplify();
                if rhs.is_error() {
                    return rhs;
                }
                Expr::equals(lhs, rhs)
            }
            Expr::Function(call) => {
                let arg = call.arg.simplify();
                if arg.is_error() {
                    return arg;
                }
                call.func.simplify(arg)
            }
            Expr::Operator(op) => {
                let lhs = op.lhs.simplify();
                if lhs.is_error() {
                    return lhs;
                }
                let rhs = op.rhs.simplify();
                if rhs.is_error() {
                    return rhs;
                }
                rules::all(op.op, &lhs, &rhs).unwrap_or_else(|| Expr::binary(op.op, lhs, rhs))
            }
        }
    }
}
