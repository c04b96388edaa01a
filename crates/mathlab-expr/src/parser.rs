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

//! Pratt parser for expression syntax.
//!
//! Identifiers are resolved against an explicit allow-list: the bound
//! variable, the named constants, and the functions of the active
//! [`Vocabulary`]. Everything else is rejected at parse time, so a
//! user-supplied string can never reach vocabulary beyond the enumerated
//! function set.

use crate::ast::{Constant, Expr, Function};
use crate::error::{ExprError, Result};
use crate::tokenizer::{SpannedToken, Token, tokenize};

/// Which named functions an expression may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    /// Calculus endpoints: every supported function.
    Calculus,
    /// General plotting: every supported function.
    Plotting,
    /// Parametric plotting: trigonometric/exp/log/sqrt, no inverse trig.
    Parametric,
}

impl Vocabulary {
    /// Whether `function` may appear under this vocabulary.
    pub fn allows(self, function: Function) -> bool {
        match self {
            Vocabulary::Calculus | Vocabulary::Plotting => true,
            Vocabulary::Parametric => !matches!(
                function,
                Function::Asin | Function::Acos | Function::Atan
            ),
        }
    }
}

/// Operator precedence levels (higher = tighter binding).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    /// `+` and `-`
    Additive = 1,
    /// `*` and `/`
    Multiplicative = 2,
    /// Unary minus
    Unary = 3,
    /// `^` (right associative)
    Power = 4,
}

/// Parse `input` with `variable` as the single free variable.
pub fn parse_expression(input: &str, variable: &str, vocabulary: Vocabulary) -> Result<Expr> {
    Parser::new(input, Some(variable), vocabulary)?.parse()
}

/// Parse `input` as a constant expression: any free variable is rejected
/// as an unknown identifier. Used for parametric range bounds like `2*pi`.
pub fn parse_constant(input: &str, vocabulary: Vocabulary) -> Result<Expr> {
    Parser::new(input, None, vocabulary)?.parse()
}

struct Parser<'a> {
    tokens: Vec<SpannedToken>,
    pos: usize,
    input_len: usize,
    variable: Option<&'a str>,
    vocabulary: Vocabulary,
}

impl<'a> Parser<'a> {
    fn new(input: &str, variable: Option<&'a str>, vocabulary: Vocabulary) -> Result<Self> {
        Ok(Parser {
            tokens: tokenize(input)?,
            pos: 0,
            input_len: input.len(),
            variable,
            vocabulary,
        })
    }

    fn parse(mut self) -> Result<Expr> {
        if self.tokens.is_empty() {
            return Err(ExprError::parse(0, "empty expression"));
        }
        let expr = self.parse_binary(Precedence::Additive as u8)?;
        if let Some((token, position)) = self.peek() {
            return Err(ExprError::parse(
                position,
                format!("unexpected {}", describe(token)),
            ));
        }
        Ok(expr)
    }

    fn peek(&self) -> Option<(&Token, usize)> {
        self.tokens.get(self.pos).map(|(token, at)| (token, *at))
    }

    fn advance(&mut self) -> Option<SpannedToken> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn parse_binary(&mut self, min_precedence: u8) -> Result<Expr> {
        let mut lhs = self.parse_unary()?;

        while let Some((token, _)) = self.peek() {
            let (precedence, right_associative) = match token {
                Token::Plus | Token::Minus => (Precedence::Additive as u8, false),
                Token::Star | Token::Slash => (Precedence::Multiplicative as u8, false),
                Token::Caret => (Precedence::Power as u8, true),
                _ => break,
            };
            if precedence < min_precedence {
                break;
            }

            let (operator, _) = self.advance().expect("peeked token exists");
            let next_min = if right_associative {
                precedence
            } else {
                precedence + 1
            };
            let rhs = self.parse_binary(next_min)?;
            lhs = match operator {
                Token::Plus => Expr::add(lhs, rhs),
                Token::Minus => Expr::sub(lhs, rhs),
                Token::Star => Expr::mul(lhs, rhs),
                Token::Slash => Expr::div(lhs, rhs),
                Token::Caret => Expr::pow(lhs, rhs),
                _ => unreachable!(),
            };
        }

        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        match self.peek() {
            Some((Token::Minus, _)) => {
                self.advance();
                // The operand may still bind a power: `-x^2` is `-(x^2)`.
                let operand = self.parse_binary(Precedence::Power as u8)?;
                Ok(Expr::neg(operand))
            }
            Some((Token::Plus, _)) => {
                self.advance();
                self.parse_binary(Precedence::Power as u8)
            }
            _ => self.parse_atom(),
        }
    }

    fn parse_atom(&mut self) -> Result<Expr> {
        let Some((token, position)) = self.advance() else {
            return Err(ExprError::parse(self.input_len, "unexpected end of input"));
        };

        match token {
            Token::Number(value) => Ok(Expr::Number(value)),
            Token::LeftParen => {
                let inner = self.parse_binary(Precedence::Additive as u8)?;
                self.expect_right_paren()?;
                Ok(inner)
            }
            Token::Ident(name) => self.resolve_identifier(name, position),
            other => Err(ExprError::parse(
                position,
                format!("unexpected {}", describe(&other)),
            )),
        }
    }

    fn resolve_identifier(&mut self, name: String, position: usize) -> Result<Expr> {
        if self.variable == Some(name.as_str()) {
            return Ok(Expr::Variable(name));
        }
        if let Some(constant) = Constant::from_name(&name) {
            return Ok(Expr::Constant(constant));
        }
        if let Some(function) = Function::from_name(&name) {
            if !self.vocabulary.allows(function) {
                return Err(ExprError::FunctionNotAllowed { name });
            }
            match self.advance() {
                Some((Token::LeftParen, _)) => {}
                _ => {
                    return Err(ExprError::parse(
                        position,
                        format!("expected '(' after function '{name}'"),
                    ));
                }
            }
            let argument = self.parse_binary(Precedence::Additive as u8)?;
            self.expect_right_paren()?;
            return Ok(Expr::call(function, argument));
        }
        Err(ExprError::UnknownIdentifier { name })
    }

    fn expect_right_paren(&mut self) -> Result<()> {
        match self.advance() {
            Some((Token::RightParen, _)) => Ok(()),
            Some((token, position)) => Err(ExprError::parse(
                position,
                format!("expected ')', found {}", describe(&token)),
            )),
            None => Err(ExprError::parse(self.input_len, "missing ')'")),
        }
    }
}

fn describe(token: &Token) -> String {
    match token {
        Token::Number(value) => format!("number '{value}'"),
        Token::Ident(name) => format!("identifier '{name}'"),
        Token::Plus => "'+'".to_string(),
        Token::Minus => "'-'".to_string(),
        Token::Star => "'*'".to_string(),
        Token::Slash => "'/'".to_string(),
        Token::Caret => "'^'".to_string(),
        Token::LeftParen => "'('".to_string(),
        Token::RightParen => "')'".to_string(),
    }
}
