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

//! Polynomial root finding.
//!
//! Roots of `c[0]*x^n + c[1]*x^(n-1) + ... + c[n]` are computed as the
//! eigenvalues of the monic companion matrix, so a degree-n polynomial
//! always reports exactly n roots, repeated roots included.

use nalgebra::{Complex, DMatrix};
use serde::Serialize;

use crate::error::{NumericError, Result};
use crate::round::{display_rounded, round_to};

/// Imaginary parts below this magnitude are treated as numeric noise and
/// the root is reported as real.
const IMAGINARY_EPSILON: f64 = 1e-9;

/// Number of decimal places in reported roots.
const ROOT_DECIMALS: u32 = 4;

/// A single reported root: a number when real, a formatted
/// `"re + imi"` string when complex.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RootValue {
    Real(f64),
    Complex(String),
}

/// Find all roots of the polynomial with `coefficients` given from the
/// highest power down to the constant term.
pub fn polynomial_roots(coefficients: &[f64]) -> Result<Vec<RootValue>> {
    if coefficients.len() < 2 {
        return Err(NumericError::NotEnoughCoefficients);
    }
    let leading = coefficients[0];
    if leading == 0.0 {
        return Err(NumericError::ZeroLeadingCoefficient);
    }

    let n = coefficients.len() - 1;
    let mut companion = DMatrix::<f64>::zeros(n, n);
    for (i, &c) in coefficients[1..].iter().enumerate() {
        companion[(0, i)] = -c / leading;
    }
    for i in 1..n {
        companion[(i, i - 1)] = 1.0;
    }

    let eigenvalues = companion.complex_eigenvalues();
    Ok(eigenvalues.iter().map(|z| format_root(*z)).collect())
}

fn format_root(z: Complex<f64>) -> RootValue {
    if z.im.abs() < IMAGINARY_EPSILON {
        RootValue::Real(round_to(z.re, ROOT_DECIMALS))
    } else {
        let re = display_rounded(round_to(z.re, ROOT_DECIMALS));
        let im = display_rounded(round_to(z.im.abs(), ROOT_DECIMALS));
        let sign = if z.im >= 0.0 { '+' } else { '-' };
        RootValue::Complex(format!("{re} {sign} {im}i"))
    }
}
