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

//! Decimal rounding and display helpers for reported results.

/// Round to `decimals` decimal places with ties to even. A `-0.0` result
/// is normalized to `0.0` so it never reaches the client.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round_ties_even() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Format a rounded value the way a dynamic-language `str()` would:
/// integral values keep a single trailing `.1` digit (`"1.0"`, `"-3.0"`)
/// and everything else prints its shortest representation.
pub fn display_rounded(value: f64) -> String {
    if value == value.trunc() && value.is_finite() {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
