//! Numeric evaluation.

use crate::ast::{BinOp, Expr};
use std::collections::HashMap;

impl Expr {
    /// Evaluates the expression numerically, reading variable values from `bindings`.
    ///
    /// Evaluation is total: anything without a numeric value, whether an unbound variable, an
    /// equality, a pending differential, or an error node, comes out as NaN, and NaN then
    /// propagates through the arithmetic above it.
    pub fn evaluate(&self, bindings: &HashMap<String, f64>) -> f64 {
        match self {
            Expr::Error(_) | Expr::Equals(_) | Expr::Differential(_) => f64::NAN,
            Expr::Number(value) => *value,
            Expr::Variable(name) => bindings.get(name).copied().unwrap_or(f64::NAN),
            Expr::Constant(constant) => constant.value,
            Expr::Operator(op) => {
                let lhs = op.lhs.evaluate(bindings);
                let rhs = op.rhs.evaluate(bindings);
                match op.op {
                    BinOp::Add => lhs + rhs,
                    BinOp::Sub => lhs - rhs,
                    BinOp::Mul => lhs * rhs,
                    BinOp::Div => lhs / rhs,
                    BinOp::Exp => lhs.powf(rhs),
                }
            }
            Expr::Function(call) => call.func.exec(call.arg.evaluate(bindings)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::Node;
    use crate::ctxt::Ctxt;
    use crate::parser::Parser;
    use assert_float_eq::{
        afe_abs,
        afe_absolute_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use std::collections::HashMap;
    use std::f64::consts::PI;

    fn parse(input: &str) -> Node {
        let ctxt = Ctxt::default();
        Parser::from_source(input, &ctxt).parse_full()
    }

    #[test]
    fn arithmetic() {
        let bindings = HashMap::new();
        assert_float_absolute_eq!(parse("2 + 3 * 4").evaluate(&bindings), 14.0);
        assert_float_absolute_eq!(parse("2 ^ 10").evaluate(&bindings), 1024.0);
        assert_float_absolute_eq!(parse("7 / 2").evaluate(&bindings), 3.5);
    }

    #[test]
    fn constants_carry_their_value() {
        let bindings = HashMap::new();
        assert_float_absolute_eq!(parse("pi").evaluate(&bindings), PI);
        assert_float_absolute_eq!(parse("2 * pi").evaluate(&bindings), 2.0 * PI);
    }

    #[test]
    fn bound_variables_resolve() {
        let bindings = HashMap::from([("x".to_string(), 3.0), ("y".to_string(), 4.0)]);
        assert_float_absolute_eq!(parse("x * y + 1").evaluate(&bindings), 13.0);
    }

    #[test]
    fn unbound_variables_poison_the_result() {
        let bindings = HashMap::from([("x".to_string(), 3.0)]);
        assert!(parse("x + y").evaluate(&bindings).is_nan());
    }

    #[test]
    fn equalities_and_errors_are_nan() {
        let bindings = HashMap::new();
        assert!(parse("x = y").evaluate(&bindings).is_nan());
        assert!(parse("(x + 1").evaluate(&bindings).is_nan());
    }

    #[test]
    fn differentials_are_nan() {
        let bindings = HashMap::from([("x".to_string(), 1.0)]);
        let dy_dx = parse("y").differentiate("x");
        assert!(dy_dx.evaluate(&bindings).is_nan());
    }

    #[test]
    fn division_by_zero_follows_ieee() {
        let bindings = HashMap::new();
        assert_eq!(parse("1 / 0").evaluate(&bindings), f64::INFINITY);
        assert!(parse("0 / 0").evaluate(&bindings).is_nan());
    }

    #[test]
    fn functions_execute() {
        let bindings = HashMap::from([("x".to_string(), PI / 6.0)]);
        assert_float_absolute_eq!(parse("sin(x)").evaluate(&bindings), 0.5);
        assert_float_absolute_eq!(parse("|0 - 7|").evaluate(&bindings), 7.0);
    }
}
