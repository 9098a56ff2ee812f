//! Folding rules for calls to the built-in functions.

use super::Func;
use crate::ast::{Expr, Node};
use crate::consts;

impl Func {
    /// Simplifies a call to this function with an already-simplified argument, folding the call
    /// into a plainer node when the argument makes its value apparent.
    pub(crate) fn simplify(self, arg: Node) -> Node {
        fold(self, &arg).unwrap_or_else(|| Expr::call(self, arg))
    }
}

fn fold(func: Func, arg: &Node) -> Option<Node> {
    match func {
        // `sin(0) = 0`, and likewise for the odd functions
        Func::Sin | Func::Tan | Func::Sinh | Func::Tanh => {
            (arg.as_number()? == 0.0).then(|| Expr::number(0.0))
        }

        // `cos(0) = 1`, and likewise for the even functions
        Func::Cos | Func::Sec | Func::Cosh | Func::Sech => {
            (arg.as_number()? == 0.0).then(|| Expr::number(1.0))
        }

        // undefined at zero; nothing safe to fold
        Func::Cot | Func::Csc | Func::Coth | Func::Csch => None,

        Func::Log => match arg.as_number()? {
            value if value == 1.0 => Some(Expr::number(0.0)),
            value if value == 10.0 => Some(Expr::number(1.0)),
            _ => None,
        },

        Func::Ln => match &**arg {
            Expr::Number(value) if *value == 1.0 => Some(Expr::number(0.0)),
            Expr::Number(value) if *value == consts::E => Some(Expr::number(1.0)),
            Expr::Constant(constant) if constant.name == "e" => Some(Expr::number(1.0)),
            _ => None,
        },

        Func::Exp => match arg.as_number()? {
            value if value == 0.0 => Some(Expr::number(1.0)),
            value if value == 1.0 => Some(Expr::constant_value("e", consts::E)),
            _ => None,
        },

        // folds only when the root comes out whole
        Func::Sqrt => {
            let root = arg.as_number()?.sqrt();
            (root.fract() == 0.0).then(|| Expr::number(root))
        }

        Func::Abs => Some(Expr::number(arg.as_number()?.abs())),
    }
}
