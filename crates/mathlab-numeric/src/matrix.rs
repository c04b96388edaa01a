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

//! Matrix arithmetic over row-major nested lists.

use nalgebra::DMatrix;

use crate::error::{NumericError, Result};

/// The supported binary matrix operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixOp {
    Add,
    Subtract,
    Multiply,
}

impl MatrixOp {
    /// Look an operation up by its wire name.
    pub fn from_name(name: &str) -> Option<MatrixOp> {
        match name {
            "add" => Some(MatrixOp::Add),
            "subtract" => Some(MatrixOp::Subtract),
            "multiply" => Some(MatrixOp::Multiply),
            _ => None,
        }
    }

    /// Noun used in shape mismatch messages.
    fn noun(self) -> &'static str {
        match self {
            MatrixOp::Add => "addition",
            MatrixOp::Subtract => "subtraction",
            MatrixOp::Multiply => "multiplication",
        }
    }
}

/// Build a matrix from row-major nested lists, validating that the input
/// is non-empty and rectangular.
pub fn matrix_from_rows(rows: &[Vec<f64>], name: &str) -> Result<DMatrix<f64>> {
    if rows.is_empty() || rows[0].is_empty() {
        return Err(NumericError::InvalidMatrix {
            message: format!("Matrix {name} must not be empty."),
        });
    }
    let width = rows[0].len();
    if rows.iter().any(|row| row.len() != width) {
        return Err(NumericError::InvalidMatrix {
            message: format!("Matrix {name} rows must all have the same length."),
        });
    }
    Ok(DMatrix::from_fn(rows.len(), width, |r, c| rows[r][c]))
}

/// Convert a matrix back to row-major nested lists for serialization.
pub fn matrix_rows(matrix: &DMatrix<f64>) -> Vec<Vec<f64>> {
    (0..matrix.nrows())
        .map(|r| matrix.row(r).iter().copied().collect())
        .collect()
}

/// Apply `op` to two matrices, enforcing shape compatibility.
pub fn apply_matrix_op(
    op: MatrixOp,
    a: &DMatrix<f64>,
    b: &DMatrix<f64>,
) -> Result<DMatrix<f64>> {
    match op {
        MatrixOp::Add | MatrixOp::Subtract => {
            if a.shape() != b.shape() {
                return Err(NumericError::ShapeMismatch {
                    operation: op.noun(),
                });
            }
            Ok(if op == MatrixOp::Add { a + b } else { a - b })
        }
        MatrixOp::Multiply => {
            if a.ncols() != b.nrows() {
                return Err(NumericError::IncompatibleProduct);
            }
            Ok(a * b)
        }
    }
}
