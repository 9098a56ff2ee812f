//! Text rendering of expressions.
//!
//! The renderer is shape-driven rather than precedence-driven: multiplication decides between
//! `lr`, `l(r)`, `r(l)`, and `(l)(r)` purely from whether each operand is itself an operator
//! node, division always parenthesizes itself, and `+`/`-`/`^` never add parentheses. An error
//! node anywhere renders as its message, displacing the surrounding expression.

use super::{BinOp, Expr, Operator};
use std::fmt;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Error(err) => f.write_str(&err.message),
            Expr::Number(value) => write!(f, "{value}"),
            Expr::Variable(name) => f.write_str(name),
            Expr::Constant(constant) => f.write_str(&constant.name),
            Expr::Operator(op) => fmt_operator(op, f),
            Expr::Equals(eq) => {
                if let Some(err) = eq.lhs.as_error().or_else(|| eq.rhs.as_error()) {
                    return f.write_str(&err.message);
                }
                write!(f, "{} = {}", eq.lhs, eq.rhs)
            }
            Expr::Differential(d) => {
                if d.order == 1 {
                    write!(f, "d{}/d{}", d.var, d.respect_to)
                } else {
                    write!(f, "d^{}{}/d{}^{}", d.order, d.var, d.respect_to, d.order)
                }
            }
            Expr::Function(call) => {
                if let Some(err) = call.arg.as_error() {
                    return f.write_str(&err.message);
                }
                write!(f, "{}({})", call.func.name(), call.arg)
            }
        }
    }
}

fn fmt_operator(op: &Operator, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(err) = op.lhs.as_error().or_else(|| op.rhs.as_error()) {
        return f.write_str(&err.message);
    }
    match op.op {
        BinOp::Add | BinOp::Sub => write!(f, "{} {} {}", op.lhs, op.op.as_str(), op.rhs),
        BinOp::Div => write!(f, "({} / {})", op.lhs, op.rhs),
        BinOp::Exp => write!(f, "{}^{}", op.lhs, op.rhs),
        BinOp::Mul => {
            let lhs_is_op = matches!(&*op.lhs, Expr::Operator(_));
            let rhs_is_op = matches!(&*op.rhs, Expr::Operator(_));
            match (lhs_is_op, rhs_is_op) {
                (true, true) => write!(f, "({})({})", op.lhs, op.rhs),
                // an operator on the left moves behind its partner, as in `2(x + 1)`
                (true, false) => write!(f, "{}({})", op.rhs, op.lhs),
                (false, true) => write!(f, "{}({})", op.lhs, op.rhs),
                (false, false) => write!(f, "{}{}", op.lhs, op.rhs),
            }
        }
    }
}
