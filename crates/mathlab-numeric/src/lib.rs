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

//! Numeric algorithms for the MathLab service: polynomial root finding
//! via the companion matrix and elementwise/product matrix arithmetic.

pub mod error;
pub mod matrix;
pub mod roots;
pub mod round;

pub use error::{NumericError, Result};
pub use matrix::{MatrixOp, apply_matrix_op, matrix_from_rows, matrix_rows};
pub use roots::{RootValue, polynomial_roots};
pub use round::{display_rounded, round_to};
