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

//! Serialized plot point types.

use serde::Serialize;

/// A point on a `y = f(x)` curve. A masked sample serializes as
/// `{"x": ..., "y": null}` so the client draws a gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: Option<f64>,
}

impl PlotPoint {
    pub fn new(x: f64, y: Option<f64>) -> PlotPoint {
        PlotPoint { x, y }
    }

    /// A point kept only when `y` is finite.
    pub fn finite(x: f64, y: f64) -> Option<PlotPoint> {
        y.is_finite().then_some(PlotPoint { x, y: Some(y) })
    }
}

/// A point on a parametric curve. Both coordinates are masked together:
/// if either is non-finite the pair serializes as `{"x": null, "y": null}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParametricPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

impl ParametricPoint {
    /// Build a point, masking the whole pair when either coordinate is
    /// non-finite.
    pub fn masked(x: f64, y: f64) -> ParametricPoint {
        if x.is_finite() && y.is_finite() {
            ParametricPoint {
                x: Some(x),
                y: Some(y),
            }
        } else {
            ParametricPoint { x: None, y: None }
        }
    }
}
