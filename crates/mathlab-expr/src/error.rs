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

//! Error types for expression parsing and symbolic manipulation.

use thiserror::Error;

/// Result type alias for expression operations
pub type Result<T> = std::result::Result<T, ExprError>;

/// Errors produced by the expression engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExprError {
    /// Tokenizer or parser failure
    #[error("Parse error at position {position}: {message}")]
    Parse {
        /// Byte offset in the input where the error occurred
        position: usize,
        /// Human-readable error message
        message: String,
    },

    /// Identifier that is neither the bound variable, a known constant,
    /// nor an allowed function name
    #[error("Unknown identifier '{name}'")]
    UnknownIdentifier {
        /// The offending identifier
        name: String,
    },

    /// Function name exists but is outside the active vocabulary
    #[error("Function '{name}' is not permitted in this expression")]
    FunctionNotAllowed {
        /// The rejected function name
        name: String,
    },

    /// No symbolic antiderivative in the supported subset
    #[error("No symbolic antiderivative found for '{expression}'")]
    CannotIntegrate {
        /// Display form of the subexpression that could not be integrated
        expression: String,
    },
}

impl ExprError {
    pub(crate) fn parse(position: usize, message: impl Into<String>) -> Self {
        ExprError::Parse {
            position,
            message: message.into(),
        }
    }
}
