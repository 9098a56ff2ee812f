//! The built-in unary functions.
//!
//! Each function knows how to differentiate a call to itself (see [`derivative`]), how to fold a
//! call with a known argument into a simpler node (see [`simplify`]), and how to execute itself
//! numerically with [`Func::exec`].

pub(crate) mod derivative;
pub(crate) mod simplify;

use once_cell::sync::Lazy;
use std::collections::HashMap;

static BY_NAME: Lazy<HashMap<&'static str, Func>> = Lazy::new(|| {
    Func::all()
        .into_iter()
        .map(|func| (func.name(), func))
        .collect()
});

/// The closed set of built-in unary functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
    Sinh,
    Cosh,
    Tanh,
    Coth,
    Sech,
    Csch,
    Log,
    Ln,
    Exp,
    Sqrt,
    Abs,
}

impl Func {
    /// All built-in functions, in registration order.
    pub fn all() -> [Func; 17] {
        [
            Func::Sin,
            Func::Cos,
            Func::Tan,
            Func::Cot,
            Func::Sec,
            Func::Csc,
            Func::Sinh,
            Func::Cosh,
            Func::Tanh,
            Func::Coth,
            Func::Sech,
            Func::Csch,
            Func::Log,
            Func::Ln,
            Func::Exp,
            Func::Sqrt,
            Func::Abs,
        ]
    }

    /// The identifier the tokenizer, parser, and renderer use for this function.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Cot => "cot",
            Func::Sec => "sec",
            Func::Csc => "csc",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Coth => "coth",
            Func::Sech => "sech",
            Func::Csch => "csch",
            Func::Log => "log",
            Func::Ln => "ln",
            Func::Exp => "exp",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
        }
    }

    /// Looks up a built-in function by identifier.
    pub fn from_name(name: &str) -> Option<Func> {
        BY_NAME.get(name).copied()
    }

    /// Executes the function numerically. `log` is base 10.
    pub fn exec(self, x: f64) -> f64 {
        match self {
            Func::Sin => x.sin(),
            Func::Cos => x.cos(),
            Func::Tan => x.tan(),
            Func::Cot => x.cos() / x.sin(),
            Func::Sec => x.cos().recip(),
            Func::Csc => x.sin().recip(),
            Func::Sinh => x.sinh(),
            Func::Cosh => x.cosh(),
            Func::Tanh => x.tanh(),
            Func::Coth => x.cosh() / x.sinh(),
            Func::Sech => x.cosh().recip(),
            Func::Csch => x.sinh().recip(),
            Func::Log => x.log10(),
            Func::Ln => x.ln(),
            Func::Exp => x.exp(),
            Func::Sqrt => x.sqrt(),
            Func::Abs => x.abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::{
        afe_abs,
        afe_absolute_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };

    #[test]
    fn lookup_by_name() {
        assert_eq!(Func::from_name("sin"), Some(Func::Sin));
        assert_eq!(Func::from_name("csch"), Some(Func::Csch));
        assert_eq!(Func::from_name("arcsin"), None);
    }

    #[test]
    fn exec_reciprocal_trig() {
        assert_float_absolute_eq!(Func::Sec.exec(0.0), 1.0);
        assert_float_absolute_eq!(Func::Csc.exec(std::f64::consts::FRAC_PI_2), 1.0);
        assert_float_absolute_eq!(Func::Cot.exec(std::f64::consts::FRAC_PI_4), 1.0);
    }

    #[test]
    fn exec_log_is_base_ten() {
        assert_float_absolute_eq!(Func::Log.exec(1000.0), 3.0);
    }
}
