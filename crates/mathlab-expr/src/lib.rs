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

//! Symbolic expression engine for the MathLab service.
//!
//! The engine is deliberately small: a tokenizer, a Pratt parser with an
//! explicit function allow-list, an AST with recursive differentiation and
//! a practical subset of symbolic integration, plus total numeric
//! evaluation (math-domain failures surface as IEEE NaN/inf, never as
//! errors, so batch sampling can not be aborted by a single bad point).

pub mod ast;
pub mod calculus;
pub mod error;
pub mod eval;
pub mod parser;
pub mod simplify;
pub mod tokenizer;

pub use ast::{Constant, Expr, Function};
pub use calculus::{differentiate, integrate};
pub use error::{ExprError, Result};
pub use parser::{Vocabulary, parse_constant, parse_expression};
pub use simplify::simplify;
