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

//! Error types for the numeric layer. Display strings double as the
//! client-facing error messages, so they are phrased for end users.

use thiserror::Error;

/// Errors from polynomial and matrix operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("A list of at least two coefficients is required.")]
    NotEnoughCoefficients,

    #[error("The leading coefficient cannot be zero.")]
    ZeroLeadingCoefficient,

    #[error("Matrices must have the same dimensions for {operation}.")]
    ShapeMismatch { operation: &'static str },

    #[error(
        "Number of columns in Matrix A must equal number of rows in Matrix B for multiplication."
    )]
    IncompatibleProduct,

    #[error("{message}")]
    InvalidMatrix { message: String },
}

pub type Result<T> = std::result::Result<T, NumericError>;
