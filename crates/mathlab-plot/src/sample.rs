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

//! Evenly spaced sampling grids.

/// `count` evenly spaced values over the inclusive interval `[min, max]`.
///
/// Both endpoints are included; the last value is exactly `max` rather
/// than `min + (count - 1)*step`, so accumulated floating point error can
/// not push the grid past the interval.
pub fn linspace(min: f64, max: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count - 1)
                .map(|i| min + step * i as f64)
                .collect();
            values.push(max);
            values
        }
    }
}

/// Evaluate `f` at every grid point.
pub fn sample_values(f: impl Fn(f64) -> f64, xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| f(x)).collect()
}
