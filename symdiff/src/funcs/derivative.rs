//! Derivative rules for the built-in functions.
//!
//! Each rule applies the chain rule: the derivative of the argument is computed once and
//! multiplied into the outer derivative, sharing the argument subtree wherever it reappears.

use super::Func;
use crate::ast::{BinOp, Expr, Node};

impl Func {
    /// Differentiates a call to this function with respect to `var`.
    pub(crate) fn differentiate(self, var: &str, arg: &Node) -> Node {
        let inner = arg.differentiate(var);
        if inner.is_error() {
            return inner;
        }
        match self {
            // `sin(f)' = f' cos(f)`
            Func::Sin => mul(inner, Expr::call(Func::Cos, arg.clone())),

            // `cos(f)' = -f' sin(f)`
            Func::Cos => neg(mul(inner, Expr::call(Func::Sin, arg.clone()))),

            // `tan(f)' = f' sec(f)^2`
            Func::Tan => mul(inner, squared(Func::Sec, arg)),

            // `cot(f)' = -f' csc(f)^2`
            Func::Cot => neg(mul(inner, squared(Func::Csc, arg))),

            // `sec(f)' = f' tan(f) sec(f)`
            Func::Sec => mul(
                inner,
                mul(
                    Expr::call(Func::Tan, arg.clone()),
                    Expr::call(Func::Sec, arg.clone()),
                ),
            ),

            // `csc(f)' = -f' cot(f) csc(f)`
            Func::Csc => neg(mul(
                inner,
                mul(
                    Expr::call(Func::Cot, arg.clone()),
                    Expr::call(Func::Csc, arg.clone()),
                ),
            )),

            // `sinh(f)' = f' cosh(f)`
            Func::Sinh => mul(inner, Expr::call(Func::Cosh, arg.clone())),

            // `cosh(f)' = f' sinh(f)`
            Func::Cosh => mul(inner, Expr::call(Func::Sinh, arg.clone())),

            // `tanh(f)' = f' sech(f)^2`
            Func::Tanh => mul(inner, squared(Func::Sech, arg)),

            // `coth(f)' = -f' csch(f)^2`
            Func::Coth => neg(mul(inner, squared(Func::Csch, arg))),

            // `sech(f)' = -f' tanh(f) sech(f)`
            Func::Sech => neg(mul(
                inner,
                mul(
                    Expr::call(Func::Tanh, arg.clone()),
                    Expr::call(Func::Sech, arg.clone()),
                ),
            )),

            // `csch(f)' = -f' coth(f) csch(f)`
            Func::Csch => neg(mul(
                inner,
                mul(
                    Expr::call(Func::Coth, arg.clone()),
                    Expr::call(Func::Csch, arg.clone()),
                ),
            )),

            // `log(f)' = f' / (ln(10) f)`
            Func::Log => div(
                inner,
                mul(Expr::call(Func::Ln, Expr::number(10.0)), arg.clone()),
            ),

            // `ln(f)' = f' / f`
            Func::Ln => div(inner, arg.clone()),

            // `exp(f)' = f' exp(f)`
            Func::Exp => mul(inner, Expr::call(Func::Exp, arg.clone())),

            // `sqrt(f)' = f' / (2 sqrt(f))`
            Func::Sqrt => div(
                inner,
                mul(Expr::number(2.0), Expr::call(Func::Sqrt, arg.clone())),
            ),

            // `abs(f)' = f f' / abs(f)`
            Func::Abs => div(
                mul(arg.clone(), inner),
                Expr::call(Func::Abs, arg.clone()),
            ),
        }
    }
}

fn mul(lhs: Node, rhs: Node) -> Node {
    Expr::binary(BinOp::Mul, lhs, rhs)
}

fn div(lhs: Node, rhs: Node) -> Node {
    Expr::binary(BinOp::Div, lhs, rhs)
}

fn neg(node: Node) -> Node {
    mul(Expr::number(-1.0), node)
}

fn squared(func: Func, arg: &Node) -> Node {
    Expr::binary(BinOp::Exp, Expr::call(func, arg.clone()), Expr::number(2.0))
}
