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

//! Plot data preparation: evenly spaced sampling grids, discontinuity
//! masking and the serialized point types the HTTP layer returns.

pub mod filter;
pub mod point;
pub mod sample;

pub use filter::{JUMP_THRESHOLD, mask_discontinuities};
pub use point::{ParametricPoint, PlotPoint};
pub use sample::{linspace, sample_values};

/// Sample count for the general plotting endpoint.
pub const GENERAL_SAMPLES: usize = 500;

/// Sample count for the calculus plotting endpoints.
pub const CALCULUS_SAMPLES: usize = 200;
