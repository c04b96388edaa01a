//! Request and response bodies.
//!
//! Optional request fields are modeled as `Option` and validated in the
//! handlers so that missing-field errors carry the API's own messages
//! instead of serde's.

use serde::{Deserialize, Serialize};

use mathlab_numeric::RootValue;
use mathlab_plot::{ParametricPoint, PlotPoint};

/// `POST /api/solve`
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    /// `"quadratic"` or `"cubic"`
    #[serde(rename = "type")]
    pub equation_type: Option<String>,
    #[serde(default)]
    pub a: f64,
    #[serde(default)]
    pub b: f64,
    #[serde(default)]
    pub c: f64,
    #[serde(default)]
    pub d: f64,
}

/// `POST /api/solve-polynomial`
#[derive(Debug, Deserialize)]
pub struct PolynomialRequest {
    /// Coefficients from the highest power down to the constant term
    pub coefficients: Option<Vec<f64>>,
}

#[derive(Debug, Serialize)]
pub struct RootsResponse {
    pub roots: Vec<RootValue>,
}

/// `POST /api/matrix-operation`
#[derive(Debug, Deserialize)]
pub struct MatrixRequest {
    /// `"add"`, `"subtract"` or `"multiply"`
    pub operation: Option<String>,
    #[serde(rename = "matrixA")]
    pub matrix_a: Option<Vec<Vec<f64>>>,
    #[serde(rename = "matrixB")]
    pub matrix_b: Option<Vec<Vec<f64>>>,
}

#[derive(Debug, Serialize)]
pub struct MatrixResponse {
    pub result: Vec<Vec<f64>>,
}

/// Inclusive x-axis interval, defaulting to `[-10, 10]`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DomainRange {
    #[serde(default = "DomainRange::default_min")]
    pub min: f64,
    #[serde(default = "DomainRange::default_max")]
    pub max: f64,
}

impl DomainRange {
    fn default_min() -> f64 {
        -10.0
    }

    fn default_max() -> f64 {
        10.0
    }
}

impl Default for DomainRange {
    fn default() -> Self {
        DomainRange {
            min: Self::default_min(),
            max: Self::default_max(),
        }
    }
}

/// `POST /api/calculus`
#[derive(Debug, Deserialize)]
pub struct CalculusRequest {
    pub expression: Option<String>,
    /// `"differentiate"` or `"integrate"`
    pub operation: Option<String>,
    #[serde(default)]
    pub x_range: DomainRange,
}

#[derive(Debug, Serialize)]
pub struct CalculusPlotData {
    pub original: Vec<PlotPoint>,
    pub result: Vec<PlotPoint>,
}

#[derive(Debug, Serialize)]
pub struct CalculusResponse {
    pub result_expression: String,
    pub plot_data: CalculusPlotData,
}

/// `POST /api/plot-general`
#[derive(Debug, Deserialize)]
pub struct PlotRequest {
    pub expression: Option<String>,
    #[serde(default)]
    pub x_range: DomainRange,
}

#[derive(Debug, Serialize)]
pub struct PlotResponse {
    pub plot_data: Vec<PlotPoint>,
}

/// Parameter interval given as constant expressions, defaulting to
/// `[0, 2*pi]`.
#[derive(Debug, Clone, Deserialize)]
pub struct ParametricRange {
    #[serde(default = "ParametricRange::default_min")]
    pub min: String,
    #[serde(default = "ParametricRange::default_max")]
    pub max: String,
}

impl ParametricRange {
    fn default_min() -> String {
        "0".to_string()
    }

    fn default_max() -> String {
        "2*pi".to_string()
    }
}

impl Default for ParametricRange {
    fn default() -> Self {
        ParametricRange {
            min: Self::default_min(),
            max: Self::default_max(),
        }
    }
}

/// `POST /api/plot-parametric`
#[derive(Debug, Deserialize)]
pub struct ParametricRequest {
    pub x_expr: Option<String>,
    pub y_expr: Option<String>,
    #[serde(default)]
    pub t_range: ParametricRange,
}

#[derive(Debug, Serialize)]
pub struct ParametricResponse {
    pub plot_data: Vec<ParametricPoint>,
}

/// Error body shared by every failing response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            error: error.into(),
        }
    }
}
