//! API endpoint handlers.

use axum::Json;
use serde_json::{Value, json};

use mathlab_expr::{Vocabulary, differentiate, integrate, parse_constant, parse_expression, simplify};
use mathlab_numeric::{MatrixOp, apply_matrix_op, matrix_from_rows, matrix_rows, polynomial_roots};
use mathlab_plot::{
    CALCULUS_SAMPLES, GENERAL_SAMPLES, ParametricPoint, PlotPoint, linspace, mask_discontinuities,
    sample_values,
};

use super::error::{ServerError, ServerResult};
use super::extract::ApiJson;
use super::models::{
    CalculusPlotData, CalculusRequest, CalculusResponse, MatrixRequest, MatrixResponse,
    ParametricRequest, ParametricResponse, PlotRequest, PlotResponse, PolynomialRequest,
    RootsResponse, SolveRequest,
};

/// Treat `None` and `""` alike, mirroring a falsy presence check.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn validate_range(min: f64, max: f64, name: &str) -> ServerResult<()> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ServerError::bad_request(format!(
            "{name} bounds must be finite numbers."
        )));
    }
    if min >= max {
        return Err(ServerError::bad_request(format!(
            "{name} min must be less than max."
        )));
    }
    Ok(())
}

/// `POST /api/solve`: quadratic and cubic equations by named coefficient.
pub async fn solve(
    ApiJson(request): ApiJson<SolveRequest>,
) -> ServerResult<Json<RootsResponse>> {
    let equation_type = present(&request.equation_type)
        .ok_or_else(|| ServerError::bad_request("Equation type not specified"))?;

    let coefficients = match equation_type {
        "quadratic" => {
            if request.a == 0.0 {
                return Err(ServerError::bad_request(
                    "Coefficient 'a' cannot be zero for a quadratic equation.",
                ));
            }
            vec![request.a, request.b, request.c]
        }
        "cubic" => {
            if request.a == 0.0 {
                return Err(ServerError::bad_request(
                    "Coefficient 'a' cannot be zero for a cubic equation.",
                ));
            }
            vec![request.a, request.b, request.c, request.d]
        }
        _ => return Err(ServerError::bad_request("Invalid equation type provided")),
    };

    let roots = polynomial_roots(&coefficients)?;
    Ok(Json(RootsResponse { roots }))
}

/// `POST /api/solve-polynomial`: arbitrary-degree polynomials.
pub async fn solve_polynomial(
    ApiJson(request): ApiJson<PolynomialRequest>,
) -> ServerResult<Json<RootsResponse>> {
    let coefficients = request.coefficients.unwrap_or_default();
    let roots = polynomial_roots(&coefficients)?;
    Ok(Json(RootsResponse { roots }))
}

/// `POST /api/matrix-operation`: elementwise add/subtract and the matrix
/// product.
pub async fn matrix_operation(
    ApiJson(request): ApiJson<MatrixRequest>,
) -> ServerResult<Json<MatrixResponse>> {
    let (Some(operation), Some(rows_a), Some(rows_b)) = (
        present(&request.operation),
        request.matrix_a.as_ref(),
        request.matrix_b.as_ref(),
    ) else {
        return Err(ServerError::bad_request("Missing operation or matrices."));
    };

    let op = MatrixOp::from_name(operation)
        .ok_or_else(|| ServerError::bad_request("Invalid operation specified."))?;
    let a = matrix_from_rows(rows_a, "A")?;
    let b = matrix_from_rows(rows_b, "B")?;
    let result = apply_matrix_op(op, &a, &b)?;

    Ok(Json(MatrixResponse {
        result: matrix_rows(&result),
    }))
}

/// `POST /api/calculus`: symbolic differentiation or integration plus
/// sampled curves of both the input and the result.
pub async fn calculus(
    ApiJson(request): ApiJson<CalculusRequest>,
) -> ServerResult<Json<CalculusResponse>> {
    let (Some(expression), Some(operation)) =
        (present(&request.expression), present(&request.operation))
    else {
        return Err(ServerError::bad_request("Missing expression or operation."));
    };
    validate_range(request.x_range.min, request.x_range.max, "x_range")?;

    let expr = parse_expression(expression, "x", Vocabulary::Calculus)?;
    let result = match operation {
        "differentiate" => differentiate(&expr, "x"),
        "integrate" => integrate(&expr, "x")?,
        _ => return Err(ServerError::bad_request("Invalid operation.")),
    };
    let result = simplify(&result);

    let xs = linspace(request.x_range.min, request.x_range.max, CALCULUS_SAMPLES);
    let original = finite_curve(&xs, |x| expr.evaluate("x", x));
    let result_curve = finite_curve(&xs, |x| result.evaluate("x", x));

    Ok(Json(CalculusResponse {
        result_expression: result.to_string(),
        plot_data: CalculusPlotData {
            original,
            result: result_curve,
        },
    }))
}

/// Sample a curve, dropping points where the value is not finite.
fn finite_curve(xs: &[f64], f: impl Fn(f64) -> f64) -> Vec<PlotPoint> {
    xs.iter()
        .filter_map(|&x| PlotPoint::finite(x, f(x)))
        .collect()
}

/// `POST /api/plot-general`: sample `y = f(x)` with discontinuity
/// masking.
pub async fn plot_general(
    ApiJson(request): ApiJson<PlotRequest>,
) -> ServerResult<Json<PlotResponse>> {
    let expression =
        present(&request.expression).ok_or_else(|| ServerError::bad_request("Missing expression."))?;
    validate_range(request.x_range.min, request.x_range.max, "x_range")?;

    let expr = parse_expression(expression, "x", Vocabulary::Plotting)?;
    let xs = linspace(request.x_range.min, request.x_range.max, GENERAL_SAMPLES);
    let ys = sample_values(expr.bind("x"), &xs);
    let masked = mask_discontinuities(&ys);

    let plot_data = xs
        .iter()
        .zip(masked)
        .map(|(&x, y)| PlotPoint::new(x, y))
        .collect();

    Ok(Json(PlotResponse { plot_data }))
}

/// `POST /api/plot-parametric`: sample `(x(t), y(t))` with pairwise
/// masking of non-finite points.
pub async fn plot_parametric(
    ApiJson(request): ApiJson<ParametricRequest>,
) -> ServerResult<Json<ParametricResponse>> {
    let (Some(x_input), Some(y_input)) = (present(&request.x_expr), present(&request.y_expr))
    else {
        return Err(ServerError::bad_request("Missing X(t) or Y(t) expression."));
    };

    let t_min = parse_constant(&request.t_range.min, Vocabulary::Parametric)?.constant_value();
    let t_max = parse_constant(&request.t_range.max, Vocabulary::Parametric)?.constant_value();
    validate_range(t_min, t_max, "t_range")?;

    let x_expr = parse_expression(x_input, "t", Vocabulary::Parametric)?;
    let y_expr = parse_expression(y_input, "t", Vocabulary::Parametric)?;

    let ts = linspace(t_min, t_max, GENERAL_SAMPLES);
    let plot_data = ts
        .iter()
        .map(|&t| ParametricPoint::masked(x_expr.evaluate("t", t), y_expr.evaluate("t", t)))
        .collect();

    Ok(Json(ParametricResponse { plot_data }))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
    }))
}

/// `GET /version`
pub async fn version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
