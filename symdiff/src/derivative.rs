//! Symbolic differentiation.
//!
//! [`Expr::differentiate`] builds the derivative tree without simplifying it; feeding the
//! result through [`Expr::simplify`](crate::ast::Expr::simplify) is the caller's job. Error
//! nodes anywhere in the tree are returned unchanged.

use crate::ast::{BinOp, Differential, Expr, Node, Operator};
use crate::funcs::Func;
use std::sync::Arc;

impl Expr {
    /// Differentiates the expression with respect to `var`.
    ///
    /// Variables other than `var` become [`Differential`] nodes rather than zero, so `y`
    /// differentiated with respect to `x` is `dy/dx`.
    pub fn differentiate(&self, var: &str) -> Node {
        match self {
            Expr::Error(_) => Arc::new(self.clone()),
            Expr::Number(_) | Expr::Constant(_) => Expr::number(0.0),
            Expr::Variable(name) => {
                if name == var {
                    Expr::number(1.0)
                } else {
                    Expr::differential(name.clone(), var, 1)
                }
            }
            Expr::Differential(d) => differential_rule(d, var),
            Expr::Equals(eq) => {
                let lhs = eq.lhs.differentiate(var);
                if lhs.is_error() {
                    return lhs;
                }
                let rhs = eq.rhs.differentiate(var);
                if rhs.is_error() {
                    return rhs;
                }
                Expr::equals(lhs, rhs)
            }
            Expr::Operator(op) => operator_rule(op, var),
            Expr::Function(call) => {
                if call.arg.is_error() {
                    return call.arg.clone();
                }
                call.func.differentiate(var, &call.arg)
            }
        }
    }
}

/// Differentiating `dy/dx` with respect to `x` raises the order; with respect to anything else
/// it chains through `x`.
fn differential_rule(d: &Differential, var: &str) -> Node {
    let raised = Expr::differential(d.var.clone(), d.respect_to.clone(), d.order + 1);
    if d.respect_to == var {
        raised
    } else {
        Expr::binary(
            BinOp::Mul,
            raised,
            Expr::differential(d.respect_to.clone(), var, 1),
        )
    }
}

fn operator_rule(op: &Operator, var: &str) -> Node {
    let dl = op.lhs.differentiate(var);
    if dl.is_error() {
        return dl;
    }
    let dr = op.rhs.differentiate(var);
    if dr.is_error() {
        return dr;
    }
    match op.op {
        // `(f + g)' = f' + g'`
        BinOp::Add | BinOp::Sub => Expr::binary(op.op, dl, dr),
        BinOp::Mul => product_rule(op, dl, dr),
        BinOp::Div => quotient_rule(op, dl, dr),
        BinOp::Exp => power_rule(op, dl, dr),
    }
}

/// `(fg)' = f'g + fg'`
fn product_rule(op: &Operator, dl: Node, dr: Node) -> Node {
    Expr::binary(
        BinOp::Add,
        Expr::binary(BinOp::Mul, dl, op.rhs.clone()),
        Expr::binary(BinOp::Mul, op.lhs.clone(), dr),
    )
}

fn quotient_rule(op: &Operator, dl: Node, dr: Node) -> Node {
    // `(c / g)' = -1 * (c * (g' / g^2))` for a literal or constant numerator
    if matches!(&*op.lhs, Expr::Number(_) | Expr::Constant(_)) {
        let squared = Expr::binary(BinOp::Exp, op.rhs.clone(), Expr::number(2.0));
        return Expr::binary(
            BinOp::Mul,
            Expr::number(-1.0),
            Expr::binary(
                BinOp::Mul,
                op.lhs.clone(),
                Expr::binary(BinOp::Div, dr, squared),
            ),
        );
    }

    // `(f / c)' = f' / c` for a literal or constant denominator
    if matches!(&*op.rhs, Expr::Number(_) | Expr::Constant(_)) {
        return Expr::binary(BinOp::Div, dl, op.rhs.clone());
    }

    // `(f / g)' = (g f' - f g') / g^2`
    let squared = Expr::binary(BinOp::Exp, op.rhs.clone(), Expr::number(2.0));
    Expr::binary(
        BinOp::Div,
        Expr::binary(
            BinOp::Sub,
            Expr::binary(BinOp::Mul, op.rhs.clone(), dl),
            Expr::binary(BinOp::Mul, op.lhs.clone(), dr),
        ),
        squared,
    )
}

fn power_rule(op: &Operator, dl: Node, dr: Node) -> Node {
    if matches!(&*op.lhs, Expr::Variable(_)) {
        // `(x^n)' = n x^(n-1)`
        if let Some(n) = op.rhs.as_number() {
            if n == 1.0 {
                return Expr::number(1.0);
            }
            if n == 0.0 {
                return Expr::number(0.0);
            }
            return Expr::binary(
                BinOp::Mul,
                Expr::number(n),
                Expr::binary(BinOp::Exp, op.lhs.clone(), Expr::number(n - 1.0)),
            );
        }
        if matches!(&*op.rhs, Expr::Constant(_)) {
            return Expr::binary(
                BinOp::Mul,
                op.rhs.clone(),
                Expr::binary(
                    BinOp::Exp,
                    op.lhs.clone(),
                    Expr::binary(BinOp::Sub, op.rhs.clone(), Expr::number(1.0)),
                ),
            );
        }
    }

    // `(c^g)' = ln(c) * (c^g * g')`
    if matches!(&*op.lhs, Expr::Number(_) | Expr::Constant(_)) {
        return Expr::binary(
            BinOp::Mul,
            Expr::call(Func::Ln, op.lhs.clone()),
            Expr::binary(
                BinOp::Mul,
                Expr::binary(BinOp::Exp, op.lhs.clone(), op.rhs.clone()),
                dr,
            ),
        );
    }

    // `(f^g)' = f^g * (g * (f' / f) + ln(f) * g')`
    let whole = Expr::binary(BinOp::Exp, op.lhs.clone(), op.rhs.clone());
    let logarithmic = Expr::binary(
        BinOp::Add,
        Expr::binary(
            BinOp::Mul,
            op.rhs.clone(),
            Expr::binary(BinOp::Div, dl, op.lhs.clone()),
        ),
        Expr::binary(
            BinOp::Mul,
            Expr::call(Func::Ln, op.lhs.clone()),
            dr,
        ),
    );
    Expr::binary(BinOp::Mul, whole, logarithmic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctxt::Ctxt;
    use assert_float_eq::{
        afe_abs,
        afe_absolute_error_msg,
        afe_is_absolute_eq,
        assert_float_absolute_eq,
    };
    use std::collections::HashMap;
    use std::f64::consts::{E, FRAC_PI_2, LN_2, PI};

    fn derivative(input: &str) -> Node {
        let ctxt = Ctxt::default();
        crate::parser::Parser::from_source(input, &ctxt)
            .parse_full()
            .differentiate("x")
            .simplify()
    }

    fn eval_at(node: &Node, x: f64) -> f64 {
        let bindings = HashMap::from([("x".to_string(), x)]);
        node.evaluate(&bindings)
    }

    #[test]
    fn constants_vanish() {
        assert_eq!(derivative("3").as_number(), Some(0.0));
        assert_eq!(derivative("pi").as_number(), Some(0.0));
        assert_eq!(derivative("x").as_number(), Some(1.0));
    }

    #[test]
    fn power_rule_with_numeric_exponent() {
        let d = derivative("x^3");
        assert_eq!(d.to_string(), "3(x^2)");
        assert_float_absolute_eq!(eval_at(&d, 2.0), 12.0);

        assert_eq!(derivative("x^1").as_number(), Some(1.0));
        assert_eq!(derivative("x^0").as_number(), Some(0.0));
    }

    #[test]
    fn power_rule_with_constant_exponent() {
        // (x^pi)' = pi * x^(pi - 1)
        let d = derivative("x^pi");
        assert_float_absolute_eq!(eval_at(&d, 2.0), PI * 2f64.powf(PI - 1.0));
    }

    #[test]
    fn exponential_with_numeric_base() {
        // (2^x)' = ln(2) * 2^x
        let d = derivative("2^x");
        assert_float_absolute_eq!(eval_at(&d, 3.0), LN_2 * 8.0);
    }

    #[test]
    fn exponential_with_constant_base() {
        // (e^x)' = e^x
        let d = derivative("e^x");
        assert_float_absolute_eq!(eval_at(&d, 1.0), E);
    }

    #[test]
    fn general_power() {
        // (x^x)' = x^x (ln(x) + 1)
        let d = derivative("x^x");
        assert_float_absolute_eq!(eval_at(&d, 2.0), 4.0 * (LN_2 + 1.0));
    }

    #[test]
    fn product_rule() {
        // (x sin(x))' = sin(x) + x cos(x)
        let d = derivative("x * sin(x)");
        assert_float_absolute_eq!(eval_at(&d, FRAC_PI_2), 1.0);
    }

    #[test]
    fn quotient_rule_general() {
        // (sin(x)/x)' = (x cos(x) - sin(x)) / x^2
        let d = derivative("sin(x) / x");
        assert_float_absolute_eq!(eval_at(&d, PI), -1.0 / PI);
    }

    #[test]
    fn quotient_rule_constant_numerator() {
        // (2/x)' = -2/x^2
        let d = derivative("2 / x");
        assert_float_absolute_eq!(eval_at(&d, 2.0), -0.5);
    }

    #[test]
    fn quotient_rule_constant_denominator() {
        // (x^2/2)' = x
        let d = derivative("x^2 / 2");
        assert_float_absolute_eq!(eval_at(&d, 3.0), 3.0);
    }

    #[test]
    fn chain_rule_through_function_argument() {
        // (sin(x^2))' = 2x cos(x^2)
        let d = derivative("sin(x^2)");
        assert_float_absolute_eq!(eval_at(&d, 1.0), 2.0 * 1f64.cos());
    }

    #[test]
    fn trig_derivatives() {
        assert_float_absolute_eq!(eval_at(&derivative("sin(x)"), 0.0), 1.0);
        assert_float_absolute_eq!(eval_at(&derivative("cos(x)"), FRAC_PI_2), -1.0);
        // tan' = sec^2
        assert_float_absolute_eq!(eval_at(&derivative("tan(x)"), 0.0), 1.0);
        // sec' = tan * sec
        assert_float_absolute_eq!(eval_at(&derivative("sec(x)"), 0.0), 0.0);
    }

    #[test]
    fn hyperbolic_derivatives() {
        assert_float_absolute_eq!(eval_at(&derivative("sinh(x)"), 0.0), 1.0);
        assert_float_absolute_eq!(eval_at(&derivative("cosh(x)"), 0.0), 0.0);
        assert_float_absolute_eq!(eval_at(&derivative("tanh(x)"), 0.0), 1.0);
    }

    #[test]
    fn logarithm_derivatives() {
        assert_float_absolute_eq!(eval_at(&derivative("ln(x)"), 2.0), 0.5);
        assert_float_absolute_eq!(eval_at(&derivative("log(x)"), 10.0), 1.0 / (10.0 * 10f64.ln()));
    }

    #[test]
    fn sqrt_and_abs_derivatives() {
        assert_float_absolute_eq!(eval_at(&derivative("sqrt(x)"), 4.0), 0.25);
        // |x|' = x/|x|
        assert_float_absolute_eq!(eval_at(&derivative("|x|"), -3.0), -1.0);
        assert_float_absolute_eq!(eval_at(&derivative("|x|"), 3.0), 1.0);
    }

    #[test]
    fn exp_derivative() {
        let d = derivative("exp(x^2)");
        assert_float_absolute_eq!(eval_at(&d, 1.0), 2.0 * E);
    }

    #[test]
    fn foreign_variables_become_differentials() {
        let ctxt = Ctxt::default();
        let node = crate::parser::Parser::from_source("y", &ctxt)
            .parse_full()
            .differentiate("x");
        assert_eq!(
            &*node,
            &Expr::Differential(Differential {
                var: "y".into(),
                respect_to: "x".into(),
                order: 1,
            })
        );
    }

    #[test]
    fn repeated_differentiation_raises_order() {
        let ctxt = Ctxt::default();
        let second = crate::parser::Parser::from_source("y", &ctxt)
            .parse_full()
            .differentiate("x")
            .differentiate("x");
        assert_eq!(second.to_string(), "d^2y/dx^2");
    }

    #[test]
    fn differential_chains_through_other_variables() {
        // d/dt (dy/dx) = d^2y/dx^2 * dx/dt
        let node = Expr::differential("y", "x", 1).differentiate("t");
        let Expr::Operator(op) = &*node else {
            panic!("expected a product, got {node:?}");
        };
        assert_eq!(op.op, BinOp::Mul);
        assert_eq!(op.lhs.to_string(), "d^2y/dx^2");
        assert_eq!(op.rhs.to_string(), "dx/dt");
    }

    #[test]
    fn equality_differentiates_both_sides() {
        // x^2 = x differentiated: 2x = 1
        let d = derivative("x^2 = x");
        let Expr::Equals(eq) = &*d else {
            panic!("expected an equality, got {d:?}");
        };
        assert_float_absolute_eq!(eval_at(&eq.lhs, 3.0), 6.0);
        assert_eq!(eq.rhs.as_number(), Some(1.0));
    }

    #[test]
    fn errors_propagate_unchanged() {
        let ctxt = Ctxt::default();
        let node = crate::parser::Parser::from_source("sin(x", &ctxt).parse_full();
        let d = node.differentiate("x");
        assert_eq!(d.as_error(), node.as_error());
    }
}
