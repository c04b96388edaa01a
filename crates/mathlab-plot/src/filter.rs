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

//! Discontinuity masking for sampled curves.
//!
//! A sample is treated as sitting on a discontinuity when the curve both
//! changes sign and jumps by more than [`JUMP_THRESHOLD`] between the
//! previous sample and it. Such samples, and any non-finite samples, are
//! masked to `None` so the client draws a gap instead of a vertical
//! connecting line.

/// Minimum jump magnitude between adjacent samples for a sign change to
/// count as a discontinuity.
pub const JUMP_THRESHOLD: f64 = 1000.0;

/// Sign as 1 for positive, -1 for negative, 0 for zero and NaN for NaN.
/// Returning f64 keeps NaN contagious: `!=` against a NaN sign is true,
/// but the matching jump `|NaN| > threshold` is false, so a NaN neighbor
/// never masks a finite sample on its own.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else if x == 0.0 {
        0.0
    } else {
        f64::NAN
    }
}

/// Mask discontinuities and non-finite samples.
///
/// Sample `i` (for `i >= 1`) is masked when `sign(y[i]) != sign(y[i-1])`
/// and `|y[i] - y[i-1]| > JUMP_THRESHOLD`. Every non-finite sample is
/// masked regardless.
pub fn mask_discontinuities(ys: &[f64]) -> Vec<Option<f64>> {
    let mut masked: Vec<Option<f64>> = ys
        .iter()
        .map(|&y| if y.is_finite() { Some(y) } else { None })
        .collect();

    for i in 1..ys.len() {
        let prev = ys[i - 1];
        let curr = ys[i];
        let sign_change = sign(curr) != sign(prev);
        // A NaN difference never exceeds the threshold, matching the
        // sign rule's NaN behavior.
        let huge_jump = (curr - prev).abs() > JUMP_THRESHOLD;
        if sign_change && huge_jump {
            masked[i] = None;
        }
    }

    masked
}
