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

//! Constant folding and identity cleanup.
//!
//! This is display-oriented simplification, not canonicalization: it folds
//! numeric subtrees and removes arithmetic identities so derivative and
//! antiderivative output reads naturally. Named constants (`pi`, `e`) stay
//! symbolic.

use crate::ast::Expr;

/// Simplify to a fixpoint.
pub fn simplify(expr: &Expr) -> Expr {
    let mut current = expr.clone();
    loop {
        let next = simplify_once(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn simplify_once(expr: &Expr) -> Expr {
    match expr {
        Expr::Number(_) | Expr::Constant(_) | Expr::Variable(_) => expr.clone(),
        Expr::Add(lhs, rhs) => {
            let lhs = simplify_once(lhs);
            let rhs = simplify_once(rhs);
            match (&lhs, &rhs) {
                (Expr::Number(a), Expr::Number(b)) => Expr::Number(a + b),
                (Expr::Number(0.0), _) => rhs,
                (_, Expr::Number(0.0)) => lhs,
                // x + -y reads better as x - y
                (_, Expr::Neg(inner)) => Expr::sub(lhs.clone(), (**inner).clone()),
                (_, Expr::Number(b)) if *b < 0.0 => Expr::sub(lhs.clone(), Expr::Number(-b)),
                _ => Expr::add(lhs, rhs),
            }
        }
        Expr::Sub(lhs, rhs) => {
            let lhs = simplify_once(lhs);
            let rhs = simplify_once(rhs);
            match (&lhs, &rhs) {
                (Expr::Number(a), Expr::Number(b)) => Expr::Number(a - b),
                (_, Expr::Number(0.0)) => lhs,
                (Expr::Number(0.0), _) => Expr::neg(rhs),
                _ if lhs == rhs => Expr::Number(0.0),
                _ => Expr::sub(lhs, rhs),
            }
        }
        Expr::Mul(lhs, rhs) => {
            let lhs = simplify_once(lhs);
            let rhs = simplify_once(rhs);
            match (&lhs, &rhs) {
                (Expr::Number(a), Expr::Number(b)) => Expr::Number(a * b),
                (Expr::Number(0.0), _) | (_, Expr::Number(0.0)) => Expr::Number(0.0),
                (Expr::Number(1.0), _) => rhs,
                (_, Expr::Number(1.0)) => lhs,
                (Expr::Number(-1.0), _) => Expr::neg(rhs),
                (_, Expr::Number(-1.0)) => Expr::neg(lhs),
                _ => Expr::mul(lhs, rhs),
            }
        }
        Expr::Div(lhs, rhs) => {
            let lhs = simplify_once(lhs);
            let rhs = simplify_once(rhs);
            match (&lhs, &rhs) {
                (Expr::Number(a), Expr::Number(b)) if *b != 0.0 => Expr::Number(a / b),
                (Expr::Number(0.0), _) => Expr::Number(0.0),
                (_, Expr::Number(1.0)) => lhs,
                (_, Expr::Number(-1.0)) => Expr::neg(lhs),
                _ => Expr::div(lhs, rhs),
            }
        }
        Expr::Pow(base, exponent) => {
            let base = simplify_once(base);
            let exponent = simplify_once(exponent);
            match (&base, &exponent) {
                (Expr::Number(a), Expr::Number(b)) => Expr::Number(a.powf(*b)),
                (_, Expr::Number(0.0)) => Expr::Number(1.0),
                (_, Expr::Number(1.0)) => base,
                (Expr::Number(1.0), _) => Expr::Number(1.0),
                _ => Expr::pow(base, exponent),
            }
        }
        Expr::Neg(inner) => {
            let inner = simplify_once(inner);
            match inner {
                Expr::Number(n) => Expr::Number(-n),
                Expr::Neg(nested) => *nested,
                _ => Expr::neg(inner),
            }
        }
        Expr::Call(function, argument) => {
            let argument = simplify_once(argument);
            if let Expr::Number(n) = argument {
                let value = function.apply(n);
                // Keep domain failures symbolic rather than baking in NaN
                if value.is_finite() {
                    return Expr::Number(value);
                }
                return Expr::call(*function, Expr::Number(n));
            }
            Expr::call(*function, argument)
        }
    }
}
