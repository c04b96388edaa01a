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

//! Numeric evaluation of expression trees.
//!
//! Evaluation is total over f64: division by zero, overflow and domain
//! failures flow through as infinities and NaN instead of errors, so the
//! plotting layer can decide how to present them.

use crate::ast::Expr;

impl Expr {
    /// Evaluate with `var` bound to `value`.
    pub fn evaluate(&self, var: &str, value: f64) -> f64 {
        match self {
            Expr::Number(n) => *n,
            Expr::Constant(c) => c.value(),
            Expr::Variable(name) => {
                if name == var {
                    value
                } else {
                    f64::NAN
                }
            }
            Expr::Add(lhs, rhs) => lhs.evaluate(var, value) + rhs.evaluate(var, value),
            Expr::Sub(lhs, rhs) => lhs.evaluate(var, value) - rhs.evaluate(var, value),
            Expr::Mul(lhs, rhs) => lhs.evaluate(var, value) * rhs.evaluate(var, value),
            Expr::Div(lhs, rhs) => lhs.evaluate(var, value) / rhs.evaluate(var, value),
            Expr::Pow(base, exponent) => {
                base.evaluate(var, value).powf(exponent.evaluate(var, value))
            }
            Expr::Neg(inner) => -inner.evaluate(var, value),
            Expr::Call(function, argument) => function.apply(argument.evaluate(var, value)),
        }
    }

    /// Bind the expression to a variable, producing a plain `f64 -> f64`
    /// closure suitable for sampling.
    pub fn bind<'a>(&'a self, var: &'a str) -> impl Fn(f64) -> f64 + 'a {
        move |x| self.evaluate(var, x)
    }

    /// Evaluate an expression with no free variable, e.g. a parsed range
    /// bound like `2*pi`. Any stray variable evaluates to NaN, but
    /// [`crate::parser::parse_constant`] rejects those up front.
    pub fn constant_value(&self) -> f64 {
        self.evaluate("", f64::NAN)
    }
}
