// Copyright 2025 MathLab Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Symbolic differentiation and integration.
//!
//! Differentiation covers the whole AST. Integration covers a practical
//! subset — constants, the power rule, sums, constant multiples, `c/u`,
//! `u^n` and the named functions applied to linear arguments `a*x + b` —
//! and reports [`ExprError::CannotIntegrate`] for anything else. Both
//! return raw trees; callers run [`crate::simplify`] before display.

use crate::ast::{Expr, Function};
use crate::error::{ExprError, Result};

/// Differentiate `expr` with respect to `var`.
pub fn differentiate(expr: &Expr, var: &str) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Constant(_) => Expr::number(0.0),
        Expr::Variable(name) => {
            if name == var {
                Expr::number(1.0)
            } else {
                Expr::number(0.0)
            }
        }
        Expr::Add(lhs, rhs) => Expr::add(differentiate(lhs, var), differentiate(rhs, var)),
        Expr::Sub(lhs, rhs) => Expr::sub(differentiate(lhs, var), differentiate(rhs, var)),
        Expr::Mul(lhs, rhs) => Expr::add(
            Expr::mul(differentiate(lhs, var), (**rhs).clone()),
            Expr::mul((**lhs).clone(), differentiate(rhs, var)),
        ),
        Expr::Div(lhs, rhs) => Expr::div(
            Expr::sub(
                Expr::mul(differentiate(lhs, var), (**rhs).clone()),
                Expr::mul((**lhs).clone(), differentiate(rhs, var)),
            ),
            Expr::pow((**rhs).clone(), Expr::number(2.0)),
        ),
        Expr::Pow(base, exponent) => differentiate_power(base, exponent, var),
        Expr::Neg(inner) => Expr::neg(differentiate(inner, var)),
        Expr::Call(function, argument) => {
            // Chain rule: outer'(u) * u'
            let outer = differentiate_function(*function, argument);
            Expr::mul(outer, differentiate(argument, var))
        }
    }
}

fn differentiate_power(base: &Expr, exponent: &Expr, var: &str) -> Expr {
    let base_varies = base.depends_on(var);
    let exponent_varies = exponent.depends_on(var);

    match (base_varies, exponent_varies) {
        // Constant altogether
        (false, false) => Expr::number(0.0),
        // Power rule: (f^n)' = n * f^(n-1) * f'
        (true, false) => Expr::mul(
            Expr::mul(
                exponent.clone(),
                Expr::pow(
                    base.clone(),
                    Expr::sub(exponent.clone(), Expr::number(1.0)),
                ),
            ),
            differentiate(base, var),
        ),
        // Exponential rule: (a^g)' = a^g * ln(a) * g'
        (false, true) => Expr::mul(
            Expr::mul(
                Expr::pow(base.clone(), exponent.clone()),
                Expr::call(Function::Log, base.clone()),
            ),
            differentiate(exponent, var),
        ),
        // General case: f^g * (g' * ln(f) + g * f' / f)
        (true, true) => Expr::mul(
            Expr::pow(base.clone(), exponent.clone()),
            Expr::add(
                Expr::mul(
                    differentiate(exponent, var),
                    Expr::call(Function::Log, base.clone()),
                ),
                Expr::div(
                    Expr::mul(exponent.clone(), differentiate(base, var)),
                    base.clone(),
                ),
            ),
        ),
    }
}

/// Derivative of `function(u)` with respect to `u`.
fn differentiate_function(function: Function, u: &Expr) -> Expr {
    let u = u.clone();
    match function {
        Function::Sin => Expr::call(Function::Cos, u),
        Function::Cos => Expr::neg(Expr::call(Function::Sin, u)),
        Function::Tan => Expr::div(
            Expr::number(1.0),
            Expr::pow(Expr::call(Function::Cos, u), Expr::number(2.0)),
        ),
        Function::Asin => Expr::div(
            Expr::number(1.0),
            Expr::call(
                Function::Sqrt,
                Expr::sub(Expr::number(1.0), Expr::pow(u, Expr::number(2.0))),
            ),
        ),
        Function::Acos => Expr::neg(Expr::div(
            Expr::number(1.0),
            Expr::call(
                Function::Sqrt,
                Expr::sub(Expr::number(1.0), Expr::pow(u, Expr::number(2.0))),
            ),
        )),
        Function::Atan => Expr::div(
            Expr::number(1.0),
            Expr::add(Expr::number(1.0), Expr::pow(u, Expr::number(2.0))),
        ),
        Function::Exp => Expr::call(Function::Exp, u),
        Function::Log => Expr::div(Expr::number(1.0), u),
        Function::Sqrt => Expr::div(
            Expr::number(1.0),
            Expr::mul(Expr::number(2.0), Expr::call(Function::Sqrt, u)),
        ),
    }
}

/// Integrate `expr` with respect to `var` (no constant of integration).
pub fn integrate(expr: &Expr, var: &str) -> Result<Expr> {
    match expr {
        // ∫ c dx = c*x
        e if !e.depends_on(var) => Ok(Expr::mul(e.clone(), Expr::variable(var))),
        // ∫ x dx = x^2/2
        Expr::Variable(_) => Ok(Expr::div(
            Expr::pow(Expr::variable(var), Expr::number(2.0)),
            Expr::number(2.0),
        )),
        Expr::Add(lhs, rhs) => Ok(Expr::add(integrate(lhs, var)?, integrate(rhs, var)?)),
        Expr::Sub(lhs, rhs) => Ok(Expr::sub(integrate(lhs, var)?, integrate(rhs, var)?)),
        Expr::Neg(inner) => Ok(Expr::neg(integrate(inner, var)?)),
        // Constant multiples
        Expr::Mul(lhs, rhs) if !lhs.depends_on(var) => {
            Ok(Expr::mul((**lhs).clone(), integrate(rhs, var)?))
        }
        Expr::Mul(lhs, rhs) if !rhs.depends_on(var) => {
            Ok(Expr::mul(integrate(lhs, var)?, (**rhs).clone()))
        }
        Expr::Div(lhs, rhs) if !rhs.depends_on(var) => {
            Ok(Expr::div(integrate(lhs, var)?, (**rhs).clone()))
        }
        // ∫ c/(a*x + b) dx = (c/a) * ln(a*x + b)
        Expr::Div(lhs, rhs) if !lhs.depends_on(var) => {
            let (slope, _) = linear_coefficients(rhs, var)
                .filter(|(slope, _)| *slope != 0.0)
                .ok_or_else(|| cannot_integrate(expr))?;
            Ok(Expr::div(
                Expr::mul((**lhs).clone(), Expr::call(Function::Log, (**rhs).clone())),
                Expr::number(slope),
            ))
        }
        Expr::Pow(base, exponent) => integrate_power(expr, base, exponent, var),
        Expr::Call(function, argument) => {
            let (slope, _) = linear_coefficients(argument, var)
                .filter(|(slope, _)| *slope != 0.0)
                .ok_or_else(|| cannot_integrate(expr))?;
            let primitive = integrate_function(*function, argument);
            Ok(Expr::div(primitive, Expr::number(slope)))
        }
        _ => Err(cannot_integrate(expr)),
    }
}

fn integrate_power(whole: &Expr, base: &Expr, exponent: &Expr, var: &str) -> Result<Expr> {
    // u^n with linear u and constant n. The exponent is folded through
    // linear_coefficients so `x^-1` and `x^(1 + 1)` work like their
    // literal forms.
    let constant_exponent = linear_coefficients(exponent, var)
        .and_then(|(slope, value)| (slope == 0.0).then_some(value));
    if let Some(n) = constant_exponent {
        let (slope, _) = linear_coefficients(base, var)
            .filter(|(slope, _)| *slope != 0.0)
            .ok_or_else(|| cannot_integrate(whole))?;
        if n == -1.0 {
            return Ok(Expr::div(
                Expr::call(Function::Log, base.clone()),
                Expr::number(slope),
            ));
        }
        return Ok(Expr::div(
            Expr::pow(base.clone(), Expr::number(n + 1.0)),
            Expr::number((n + 1.0) * slope),
        ));
    }
    // a^u with constant a and linear u: a^u / (slope * ln(a))
    if !base.depends_on(var) {
        let (slope, _) = linear_coefficients(exponent, var)
            .filter(|(slope, _)| *slope != 0.0)
            .ok_or_else(|| cannot_integrate(whole))?;
        return Ok(Expr::div(
            Expr::pow(base.clone(), exponent.clone()),
            Expr::mul(
                Expr::number(slope),
                Expr::call(Function::Log, base.clone()),
            ),
        ));
    }
    Err(cannot_integrate(whole))
}

/// Antiderivative of `function(u)` in `u`; the caller divides by the slope
/// of the linear argument.
fn integrate_function(function: Function, argument: &Expr) -> Expr {
    let u = argument.clone();
    match function {
        Function::Sin => Expr::neg(Expr::call(Function::Cos, u)),
        Function::Cos => Expr::call(Function::Sin, u),
        Function::Tan => Expr::neg(Expr::call(Function::Log, Expr::call(Function::Cos, u))),
        Function::Exp => Expr::call(Function::Exp, u),
        // ∫ ln(u) du = u*ln(u) - u
        Function::Log => Expr::sub(
            Expr::mul(u.clone(), Expr::call(Function::Log, u.clone())),
            u,
        ),
        // ∫ sqrt(u) du = 2*u^(3/2)/3
        Function::Sqrt => Expr::div(
            Expr::mul(Expr::number(2.0), Expr::pow(u, Expr::number(1.5))),
            Expr::number(3.0),
        ),
        // ∫ asin(u) du = u*asin(u) + sqrt(1 - u^2)
        Function::Asin => Expr::add(
            Expr::mul(u.clone(), Expr::call(Function::Asin, u.clone())),
            Expr::call(
                Function::Sqrt,
                Expr::sub(Expr::number(1.0), Expr::pow(u, Expr::number(2.0))),
            ),
        ),
        // ∫ acos(u) du = u*acos(u) - sqrt(1 - u^2)
        Function::Acos => Expr::sub(
            Expr::mul(u.clone(), Expr::call(Function::Acos, u.clone())),
            Expr::call(
                Function::Sqrt,
                Expr::sub(Expr::number(1.0), Expr::pow(u, Expr::number(2.0))),
            ),
        ),
        // ∫ atan(u) du = u*atan(u) - ln(1 + u^2)/2
        Function::Atan => Expr::sub(
            Expr::mul(u.clone(), Expr::call(Function::Atan, u.clone())),
            Expr::div(
                Expr::call(
                    Function::Log,
                    Expr::add(Expr::number(1.0), Expr::pow(u, Expr::number(2.0))),
                ),
                Expr::number(2.0),
            ),
        ),
    }
}

fn cannot_integrate(expr: &Expr) -> ExprError {
    ExprError::CannotIntegrate {
        expression: expr.to_string(),
    }
}

/// If `expr` is linear in `var`, return `(slope, intercept)` such that
/// `expr == slope*var + intercept`. Constant subtrees fold numerically
/// (with named constants taking their values), so `pi*x + sin(1)` counts
/// as linear.
pub(crate) fn linear_coefficients(expr: &Expr, var: &str) -> Option<(f64, f64)> {
    match expr {
        Expr::Number(n) => Some((0.0, *n)),
        Expr::Constant(c) => Some((0.0, c.value())),
        Expr::Variable(name) => {
            if name == var {
                Some((1.0, 0.0))
            } else {
                None
            }
        }
        Expr::Add(lhs, rhs) => {
            let (s1, i1) = linear_coefficients(lhs, var)?;
            let (s2, i2) = linear_coefficients(rhs, var)?;
            Some((s1 + s2, i1 + i2))
        }
        Expr::Sub(lhs, rhs) => {
            let (s1, i1) = linear_coefficients(lhs, var)?;
            let (s2, i2) = linear_coefficients(rhs, var)?;
            Some((s1 - s2, i1 - i2))
        }
        Expr::Neg(inner) => {
            let (slope, intercept) = linear_coefficients(inner, var)?;
            Some((-slope, -intercept))
        }
        Expr::Mul(lhs, rhs) => {
            let (s1, i1) = linear_coefficients(lhs, var)?;
            let (s2, i2) = linear_coefficients(rhs, var)?;
            match (s1 == 0.0, s2 == 0.0) {
                (true, _) => Some((i1 * s2, i1 * i2)),
                (_, true) => Some((s1 * i2, i1 * i2)),
                _ => None,
            }
        }
        Expr::Div(lhs, rhs) => {
            let (s1, i1) = linear_coefficients(lhs, var)?;
            let (s2, i2) = linear_coefficients(rhs, var)?;
            if s2 == 0.0 && i2 != 0.0 {
                Some((s1 / i2, i1 / i2))
            } else {
                None
            }
        }
        Expr::Pow(base, exponent) => {
            let (s1, i1) = linear_coefficients(base, var)?;
            let (s2, i2) = linear_coefficients(exponent, var)?;
            if s1 == 0.0 && s2 == 0.0 {
                Some((0.0, i1.powf(i2)))
            } else {
                None
            }
        }
        Expr::Call(function, argument) => {
            let (slope, intercept) = linear_coefficients(argument, var)?;
            if slope == 0.0 {
                Some((0.0, function.apply(intercept)))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{Vocabulary, parse_expression};
    use crate::simplify::simplify;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn derivative(input: &str) -> String {
        let expr = parse_expression(input, "x", Vocabulary::Calculus).expect("parses");
        simplify(&differentiate(&expr, "x")).to_string()
    }

    fn antiderivative(input: &str) -> String {
        let expr = parse_expression(input, "x", Vocabulary::Calculus).expect("parses");
        simplify(&integrate(&expr, "x").expect("integrates")).to_string()
    }

    #[test]
    fn differentiates_polynomials() {
        assert_eq!(derivative("x^2"), "2*x");
        assert_eq!(derivative("x^3 + 2*x"), "3*x^2 + 2");
        assert_eq!(derivative("7"), "0");
    }

    #[test]
    fn differentiates_named_functions() {
        assert_eq!(derivative("sin(x)"), "cos(x)");
        assert_eq!(derivative("cos(x)"), "-sin(x)");
        assert_eq!(derivative("exp(x)"), "exp(x)");
        assert_eq!(derivative("log(x)"), "1/x");
    }

    #[test]
    fn applies_the_chain_rule() {
        assert_eq!(derivative("sin(2*x)"), "cos(2*x)*2");
    }

    #[test]
    fn differentiates_quotients_numerically() {
        let expr = parse_expression("x/(x + 1)", "x", Vocabulary::Calculus).unwrap();
        let d = simplify(&differentiate(&expr, "x"));
        // d/dx x/(x+1) = 1/(x+1)^2
        for x in [0.0_f64, 1.0, 2.5, -0.5] {
            assert_relative_eq!(
                d.evaluate("x", x),
                1.0 / ((x + 1.0) * (x + 1.0)),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn differentiates_variable_exponents() {
        // d/dx 2^x = 2^x * ln 2
        let expr = parse_expression("2^x", "x", Vocabulary::Calculus).unwrap();
        let d = simplify(&differentiate(&expr, "x"));
        assert_relative_eq!(
            d.evaluate("x", 3.0),
            8.0 * 2.0_f64.ln(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn integrates_with_the_power_rule() {
        assert_eq!(antiderivative("x^2"), "x^3/3");
        assert_eq!(antiderivative("5"), "5*x");
        assert_eq!(antiderivative("x"), "x^2/2");
    }

    #[test]
    fn integrates_reciprocals_to_logs() {
        assert_eq!(antiderivative("1/x"), "log(x)");
        assert_eq!(antiderivative("3/(2*x + 1)"), "3*log(2*x + 1)/2");
    }

    #[test]
    fn integrates_negated_and_folded_exponents() {
        assert_eq!(antiderivative("x^-1"), "log(x)");
        assert_eq!(antiderivative("x**-1"), "log(x)");
        assert_eq!(antiderivative("x^(1 + 1)"), "x^3/3");
        // x^-2 integrates to -x^-1; check by differentiating back
        let expr = parse_expression("x^-2", "x", Vocabulary::Calculus).unwrap();
        let primitive = integrate(&expr, "x").expect("integrates");
        let recovered = simplify(&differentiate(&primitive, "x"));
        for x in [0.5_f64, 1.0, 2.0] {
            assert_relative_eq!(
                recovered.evaluate("x", x),
                x.powi(-2),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn integrates_functions_of_linear_arguments() {
        assert_eq!(antiderivative("sin(x)"), "-cos(x)");
        assert_eq!(antiderivative("cos(2*x)"), "sin(2*x)/2");
        assert_eq!(antiderivative("exp(3*x)"), "exp(3*x)/3");
    }

    #[test]
    fn rejects_unsupported_integrands() {
        let expr = parse_expression("sin(x^2)", "x", Vocabulary::Calculus).unwrap();
        assert!(matches!(
            integrate(&expr, "x"),
            Err(ExprError::CannotIntegrate { .. })
        ));
        let expr = parse_expression("x*sin(x)", "x", Vocabulary::Calculus).unwrap();
        assert!(integrate(&expr, "x").is_err());
    }

    #[test]
    fn derivative_of_antiderivative_matches_numerically() {
        for input in ["x^2", "sin(2*x)", "exp(x) + 1/x", "cos(x) - 3*x"] {
            let expr = parse_expression(input, "x", Vocabulary::Calculus).unwrap();
            let primitive = integrate(&expr, "x").expect("integrates");
            let recovered = simplify(&differentiate(&primitive, "x"));
            for x in [0.5_f64, 1.0, 1.7, 2.9] {
                assert_relative_eq!(
                    recovered.evaluate("x", x),
                    expr.evaluate("x", x),
                    max_relative = 1e-9
                );
            }
        }
    }

    #[test]
    fn recognizes_linear_subexpressions() {
        let expr = parse_expression("2*x + 1", "x", Vocabulary::Calculus).unwrap();
        assert_eq!(linear_coefficients(&expr, "x"), Some((2.0, 1.0)));
        let expr = parse_expression("(4 - x)/2", "x", Vocabulary::Calculus).unwrap();
        assert_eq!(linear_coefficients(&expr, "x"), Some((-0.5, 2.0)));
        let expr = parse_expression("x^2", "x", Vocabulary::Calculus).unwrap();
        assert_eq!(linear_coefficients(&expr, "x"), None);
    }
}
