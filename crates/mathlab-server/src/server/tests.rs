//! In-process integration tests for the HTTP API.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

use super::ServerConfig;
use super::create_app;

fn app() -> Router {
    create_app(&ServerConfig::default()).expect("router builds")
}

async fn post_json(path: &str, body: Value) -> (StatusCode, Value) {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn error_message(body: &Value) -> &str {
    body["error"].as_str().expect("error field")
}

#[tokio::test]
async fn solves_a_quadratic_with_real_roots() {
    let (status, body) = post_json("/api/solve", json!({"type": "quadratic", "a": 1, "b": -3, "c": 2})).await;
    assert_eq!(status, StatusCode::OK);
    let mut roots: Vec<f64> = body["roots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_f64().expect("real root"))
        .collect();
    roots.sort_by(f64::total_cmp);
    assert_eq!(roots, vec![1.0, 2.0]);
}

#[tokio::test]
async fn reports_complex_roots_as_strings() {
    let (status, body) = post_json("/api/solve", json!({"type": "quadratic", "a": 1, "b": 0, "c": 1})).await;
    assert_eq!(status, StatusCode::OK);
    let mut roots: Vec<&str> = body["roots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r.as_str().expect("complex root"))
        .collect();
    roots.sort_unstable();
    assert_eq!(roots, vec!["0.0 + 1.0i", "0.0 - 1.0i"]);
}

#[tokio::test]
async fn rejects_a_zero_leading_quadratic_coefficient() {
    let (status, body) = post_json("/api/solve", json!({"type": "quadratic", "a": 0, "b": 1, "c": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&body),
        "Coefficient 'a' cannot be zero for a quadratic equation."
    );

    let (status, body) = post_json("/api/solve", json!({"type": "cubic", "b": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&body),
        "Coefficient 'a' cannot be zero for a cubic equation."
    );
}

#[tokio::test]
async fn rejects_missing_or_unknown_equation_types() {
    let (status, body) = post_json("/api/solve", json!({"a": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Equation type not specified");

    let (status, body) = post_json("/api/solve", json!({"type": "quartic", "a": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Invalid equation type provided");
}

#[tokio::test]
async fn solves_polynomials_of_arbitrary_degree() {
    let (status, body) =
        post_json("/api/solve-polynomial", json!({"coefficients": [1, 0, 0, 0, 1, 1]})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roots"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn polynomial_endpoint_validates_coefficients() {
    let (status, body) = post_json("/api/solve-polynomial", json!({"coefficients": [1]})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&body),
        "A list of at least two coefficients is required."
    );

    let (status, body) = post_json("/api/solve-polynomial", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&body),
        "A list of at least two coefficients is required."
    );

    let (status, body) =
        post_json("/api/solve-polynomial", json!({"coefficients": [0, 1, 2]})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "The leading coefficient cannot be zero.");
}

#[tokio::test]
async fn multiplies_matrices() {
    let (status, body) = post_json(
        "/api/matrix-operation",
        json!({
            "operation": "multiply",
            "matrixA": [[1, 2, 3], [4, 5, 6]],
            "matrixB": [[7, 8], [9, 10], [11, 12]],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!([[58.0, 64.0], [139.0, 154.0]]));
}

#[tokio::test]
async fn adds_matrices_elementwise() {
    let (status, body) = post_json(
        "/api/matrix-operation",
        json!({
            "operation": "add",
            "matrixA": [[1, 2], [3, 4]],
            "matrixB": [[10, 20], [30, 40]],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], json!([[11.0, 22.0], [33.0, 44.0]]));
}

#[tokio::test]
async fn rejects_incompatible_matrix_shapes() {
    let (status, body) = post_json(
        "/api/matrix-operation",
        json!({
            "operation": "multiply",
            "matrixA": [[1, 2], [3, 4]],
            "matrixB": [[1, 2], [3, 4], [5, 6]],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&body),
        "Number of columns in Matrix A must equal number of rows in Matrix B for multiplication."
    );

    let (status, body) = post_json(
        "/api/matrix-operation",
        json!({
            "operation": "subtract",
            "matrixA": [[1, 2]],
            "matrixB": [[1], [2]],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_message(&body),
        "Matrices must have the same dimensions for subtraction."
    );
}

#[tokio::test]
async fn rejects_missing_or_unknown_matrix_operations() {
    let (status, body) =
        post_json("/api/matrix-operation", json!({"operation": "add"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Missing operation or matrices.");

    let (status, body) = post_json(
        "/api/matrix-operation",
        json!({"operation": "divide", "matrixA": [[1]], "matrixB": [[1]]}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Invalid operation specified.");
}

#[tokio::test]
async fn differentiates_and_samples_both_curves() {
    let (status, body) = post_json(
        "/api/calculus",
        json!({"expression": "x^2", "operation": "differentiate"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result_expression"], "2*x");
    let original = body["plot_data"]["original"].as_array().unwrap();
    let result = body["plot_data"]["result"].as_array().unwrap();
    assert_eq!(original.len(), 200);
    assert_eq!(result.len(), 200);
    assert_eq!(original[0]["x"].as_f64().unwrap(), -10.0);
    assert_eq!(original[0]["y"].as_f64().unwrap(), 100.0);
}

#[tokio::test]
async fn integrates_symbolically() {
    let (status, body) = post_json(
        "/api/calculus",
        json!({"expression": "cos(x)", "operation": "integrate"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result_expression"], "sin(x)");
}

#[tokio::test]
async fn drops_non_finite_calculus_samples() {
    // log(x) is NaN for x < 0, so only about half the default grid
    // survives the finite filter.
    let (status, body) = post_json(
        "/api/calculus",
        json!({"expression": "log(x)", "operation": "differentiate"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let original = body["plot_data"]["original"].as_array().unwrap();
    assert!(!original.is_empty());
    assert!(original.len() < 200);
    assert!(original.iter().all(|p| p["y"].is_f64()));
}

#[tokio::test]
async fn reports_unintegrable_expressions() {
    let (status, body) = post_json(
        "/api/calculus",
        json!({"expression": "x*sin(x)", "operation": "integrate"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).starts_with("No symbolic antiderivative found"));
}

#[tokio::test]
async fn rejects_unknown_calculus_operations() {
    let (status, body) = post_json(
        "/api/calculus",
        json!({"expression": "x", "operation": "laplace"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Invalid operation.");

    let (status, body) = post_json("/api/calculus", json!({"expression": "x"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Missing expression or operation.");
}

#[tokio::test]
async fn plots_a_general_function() {
    let (status, body) = post_json("/api/plot-general", json!({"expression": "x^2"})).await;
    assert_eq!(status, StatusCode::OK);
    let points = body["plot_data"].as_array().unwrap();
    assert_eq!(points.len(), 500);
    assert_eq!(points[0]["x"].as_f64().unwrap(), -10.0);
    assert_eq!(points[0]["y"].as_f64().unwrap(), 100.0);
    assert_eq!(points[499]["x"].as_f64().unwrap(), 10.0);
}

#[tokio::test]
async fn marks_domain_gaps_with_nulls() {
    // log(x) is undefined on the negative half of the default range.
    let (status, body) = post_json("/api/plot-general", json!({"expression": "log(x)"})).await;
    assert_eq!(status, StatusCode::OK);
    let points = body["plot_data"].as_array().unwrap();
    assert_eq!(points.len(), 500);
    assert!(points[0]["y"].is_null());
    assert!(points[499]["y"].is_f64());
}

#[tokio::test]
async fn masks_an_asymptote_crossing() {
    // On [-0.5, 0.5] the samples adjacent to zero are near +-1000, so
    // the pole of 1/x trips both the sign-change and jump rules.
    let (status, body) = post_json(
        "/api/plot-general",
        json!({"expression": "1/x", "x_range": {"min": -0.5, "max": 0.5}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let points = body["plot_data"].as_array().unwrap();
    assert!(points.iter().any(|p| p["y"].is_null()));
    assert!(points[0]["y"].is_f64());
    assert!(points[499]["y"].is_f64());
}

#[tokio::test]
async fn rejects_invalid_plot_expressions() {
    let (status, body) = post_json("/api/plot-general", json!({"expression": "x +"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Invalid mathematical expression.");

    let (status, body) = post_json("/api/plot-general", json!({"expression": "foo(x)"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Invalid mathematical expression.");

    let (status, body) = post_json("/api/plot-general", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Missing expression.");
}

#[tokio::test]
async fn validates_plot_ranges() {
    let (status, body) = post_json(
        "/api/plot-general",
        json!({"expression": "x", "x_range": {"min": 5, "max": -5}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "x_range min must be less than max.");
}

#[tokio::test]
async fn plots_a_parametric_circle() {
    let (status, body) = post_json(
        "/api/plot-parametric",
        json!({"x_expr": "cos(t)", "y_expr": "sin(t)"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let points = body["plot_data"].as_array().unwrap();
    assert_eq!(points.len(), 500);
    assert_eq!(points[0]["x"].as_f64().unwrap(), 1.0);
    assert_eq!(points[0]["y"].as_f64().unwrap(), 0.0);
    assert!(points.iter().all(|p| p["x"].is_f64() && p["y"].is_f64()));
}

#[tokio::test]
async fn masks_parametric_points_as_pairs() {
    // log(0) is -inf at t = 0, so the first pair is fully null.
    let (status, body) = post_json(
        "/api/plot-parametric",
        json!({"x_expr": "log(t)", "y_expr": "t"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let points = body["plot_data"].as_array().unwrap();
    assert!(points[0]["x"].is_null());
    assert!(points[0]["y"].is_null());
    assert!(points[499]["x"].is_f64());
}

#[tokio::test]
async fn parametric_bounds_accept_constant_expressions() {
    let (status, body) = post_json(
        "/api/plot-parametric",
        json!({
            "x_expr": "t",
            "y_expr": "t",
            "t_range": {"min": "pi", "max": "2*pi"},
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let points = body["plot_data"].as_array().unwrap();
    let first_x = points[0]["x"].as_f64().unwrap();
    assert!((first_x - std::f64::consts::PI).abs() < 1e-12);
}

#[tokio::test]
async fn parametric_vocabulary_excludes_inverse_trig() {
    let (status, body) = post_json(
        "/api/plot-parametric",
        json!({"x_expr": "asin(t)", "y_expr": "t"}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Invalid mathematical expression.");

    let (status, body) = post_json("/api/plot-parametric", json!({"x_expr": "cos(t)"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Missing X(t) or Y(t) expression.");
}

#[tokio::test]
async fn requires_a_json_content_type() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/solve")
                .body(Body::from(r#"{"type": "quadratic", "a": 1}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        error_message(&body),
        "Invalid request: Content-Type must be application/json"
    );
}

#[tokio::test]
async fn rejects_malformed_json_bodies() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/solve")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_and_version_respond() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app()
        .oneshot(Request::builder().uri("/version").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
