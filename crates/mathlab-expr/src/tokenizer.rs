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

//! Tokenizer for expression syntax.
//!
//! Accepts numbers (with optional fraction and exponent), identifiers,
//! the operators `+ - * / ^` (with `**` as an alias for `^`) and
//! parentheses. Anything else is a parse error.

use crate::error::{ExprError, Result};

/// A single lexical token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal
    Number(f64),
    /// Identifier (variable, constant or function name)
    Ident(String),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^` or `**`
    Caret,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

/// Token together with its byte offset in the input, for error reporting.
pub type SpannedToken = (Token, usize);

/// Tokenize the whole input eagerly.
pub fn tokenize(input: &str) -> Result<Vec<SpannedToken>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let start = pos;
        match bytes[pos] {
            b' ' | b'\t' | b'\r' | b'\n' => {
                pos += 1;
            }
            b'+' => {
                tokens.push((Token::Plus, start));
                pos += 1;
            }
            b'-' => {
                tokens.push((Token::Minus, start));
                pos += 1;
            }
            b'*' => {
                // `**` is the Python-style power operator
                if bytes.get(pos + 1) == Some(&b'*') {
                    tokens.push((Token::Caret, start));
                    pos += 2;
                } else {
                    tokens.push((Token::Star, start));
                    pos += 1;
                }
            }
            b'/' => {
                tokens.push((Token::Slash, start));
                pos += 1;
            }
            b'^' => {
                tokens.push((Token::Caret, start));
                pos += 1;
            }
            b'(' => {
                tokens.push((Token::LeftParen, start));
                pos += 1;
            }
            b')' => {
                tokens.push((Token::RightParen, start));
                pos += 1;
            }
            b'0'..=b'9' | b'.' => {
                let (value, next) = scan_number(input, pos)?;
                tokens.push((Token::Number(value), start));
                pos = next;
            }
            c if c.is_ascii_alphabetic() || c == b'_' => {
                let mut end = pos + 1;
                while end < bytes.len()
                    && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_')
                {
                    end += 1;
                }
                tokens.push((Token::Ident(input[pos..end].to_string()), start));
                pos = end;
            }
            other => {
                return Err(ExprError::parse(
                    start,
                    format!("unexpected character '{}'", other as char),
                ));
            }
        }
    }

    Ok(tokens)
}

/// Scan a numeric literal starting at `start`. Returns the parsed value and
/// the offset just past the literal. An exponent suffix is consumed only
/// when it is actually followed by digits, so `2e` lexes as `2` then the
/// identifier `e` (Euler's constant).
fn scan_number(input: &str, start: usize) -> Result<(f64, usize)> {
    let bytes = input.as_bytes();
    let mut end = start;

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        if exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            end = exp_end;
        }
    }

    let text = &input[start..end];
    text.parse::<f64>()
        .map(|value| (value, end))
        .map_err(|_| ExprError::parse(start, format!("invalid number '{text}'")))
}
