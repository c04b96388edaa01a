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

//! AST node definitions for symbolic expressions.

use std::fmt;

/// The named functions the engine understands. This enumeration is the
/// complete vocabulary: a parsed expression can never invoke anything
/// outside this set, whatever the input string contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Exp,
    /// Natural logarithm (`log` in the input syntax)
    Log,
    Sqrt,
}

impl Function {
    /// Every supported function, in display order.
    pub const ALL: [Function; 9] = [
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Asin,
        Function::Acos,
        Function::Atan,
        Function::Exp,
        Function::Log,
        Function::Sqrt,
    ];

    /// The name used in expression syntax.
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Exp => "exp",
            Function::Log => "log",
            Function::Sqrt => "sqrt",
        }
    }

    /// Look a function up by name.
    pub fn from_name(name: &str) -> Option<Function> {
        Function::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Apply the function numerically. Domain failures (e.g. `log(-1)`,
    /// `sqrt(-1)`) produce NaN per IEEE semantics.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Tan => x.tan(),
            Function::Asin => x.asin(),
            Function::Acos => x.acos(),
            Function::Atan => x.atan(),
            Function::Exp => x.exp(),
            Function::Log => x.ln(),
            Function::Sqrt => x.sqrt(),
        }
    }
}

/// Named mathematical constants recognized in every vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    /// The name used in expression syntax.
    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }

    /// Look a constant up by name.
    pub fn from_name(name: &str) -> Option<Constant> {
        match name {
            "pi" => Some(Constant::Pi),
            "e" => Some(Constant::E),
            _ => None,
        }
    }

    /// Numeric value of the constant.
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }
}

/// Symbolic expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal
    Number(f64),
    /// Named constant (`pi`, `e`)
    Constant(Constant),
    /// The bound variable
    Variable(String),
    /// Addition
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication
    Mul(Box<Expr>, Box<Expr>),
    /// Division
    Div(Box<Expr>, Box<Expr>),
    /// Exponentiation
    Pow(Box<Expr>, Box<Expr>),
    /// Unary negation
    Neg(Box<Expr>),
    /// Function application
    Call(Function, Box<Expr>),
}

impl Expr {
    pub fn number(value: f64) -> Expr {
        Expr::Number(value)
    }

    pub fn variable(name: impl Into<String>) -> Expr {
        Expr::Variable(name.into())
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Add(Box::new(lhs), Box::new(rhs))
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Sub(Box::new(lhs), Box::new(rhs))
    }

    pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Mul(Box::new(lhs), Box::new(rhs))
    }

    pub fn div(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Div(Box::new(lhs), Box::new(rhs))
    }

    pub fn pow(base: Expr, exponent: Expr) -> Expr {
        Expr::Pow(Box::new(base), Box::new(exponent))
    }

    pub fn neg(inner: Expr) -> Expr {
        Expr::Neg(Box::new(inner))
    }

    pub fn call(function: Function, argument: Expr) -> Expr {
        Expr::Call(function, Box::new(argument))
    }

    /// True if the expression mentions `var` anywhere.
    pub fn depends_on(&self, var: &str) -> bool {
        match self {
            Expr::Number(_) | Expr::Constant(_) => false,
            Expr::Variable(name) => name == var,
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs) => lhs.depends_on(var) || rhs.depends_on(var),
            Expr::Neg(inner) | Expr::Call(_, inner) => inner.depends_on(var),
        }
    }

    /// Binding strength for display purposes. Higher binds tighter.
    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(..) | Expr::Sub(..) => 1,
            Expr::Mul(..) | Expr::Div(..) => 2,
            Expr::Neg(..) => 3,
            // A negative literal prints with a leading minus, so treat it
            // like a negation when deciding on parentheses.
            Expr::Number(n) if *n < 0.0 => 3,
            Expr::Pow(..) => 4,
            Expr::Number(_) | Expr::Constant(_) | Expr::Variable(_) | Expr::Call(..) => 5,
        }
    }
}

fn write_child(f: &mut fmt::Formatter<'_>, child: &Expr, needs_parens: bool) -> fmt::Result {
    if needs_parens {
        write!(f, "({child})")
    } else {
        write!(f, "{child}")
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n == n.trunc() && n.abs() < 1e15 {
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{n}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write_number(f, *n),
            Expr::Constant(c) => write!(f, "{}", c.name()),
            Expr::Variable(name) => write!(f, "{name}"),
            Expr::Add(lhs, rhs) => {
                write_child(f, lhs, lhs.precedence() < 1)?;
                write!(f, " + ")?;
                write_child(f, rhs, rhs.precedence() < 1)
            }
            Expr::Sub(lhs, rhs) => {
                write_child(f, lhs, lhs.precedence() < 1)?;
                write!(f, " - ")?;
                write_child(f, rhs, rhs.precedence() <= 1)
            }
            Expr::Mul(lhs, rhs) => {
                write_child(f, lhs, lhs.precedence() < 2)?;
                write!(f, "*")?;
                write_child(f, rhs, rhs.precedence() < 2)
            }
            Expr::Div(lhs, rhs) => {
                write_child(f, lhs, lhs.precedence() < 2)?;
                write!(f, "/")?;
                write_child(f, rhs, rhs.precedence() <= 2)
            }
            Expr::Neg(inner) => {
                write!(f, "-")?;
                write_child(f, inner, inner.precedence() < 3)
            }
            Expr::Pow(base, exponent) => {
                write_child(f, base, base.precedence() <= 4)?;
                write!(f, "^")?;
                write_child(f, exponent, exponent.precedence() < 4)
            }
            Expr::Call(function, argument) => write!(f, "{}({argument})", function.name()),
        }
    }
}
