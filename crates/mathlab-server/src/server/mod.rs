//! Stateless HTTP API for polynomial, matrix and symbolic calculus
//! evaluation.
//!
//! The router is built by [`create_app`] so tests can drive it in-process
//! through `tower::ServiceExt` without binding a socket; [`start_server`]
//! binds and serves it.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;

#[cfg(test)]
mod tests;

use anyhow::Context;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};

/// Build the application router.
pub fn create_app(config: &ServerConfig) -> anyhow::Result<Router> {
    let cors = cors_layer(config)?;

    let app = Router::new()
        .route("/api/solve", post(handlers::solve))
        .route("/api/solve-polynomial", post(handlers::solve_polynomial))
        .route("/api/matrix-operation", post(handlers::matrix_operation))
        .route("/api/calculus", post(handlers::calculus))
        .route("/api/plot-general", post(handlers::plot_general))
        .route("/api/plot-parametric", post(handlers::plot_parametric))
        .route("/health", get(handlers::health))
        .route("/version", get(handlers::version))
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(CatchPanicLayer::new());

    Ok(app)
}

/// CORS policy: the configured origin, or any origin in development
/// mode, with the POST + preflight surface this API needs.
fn cors_layer(config: &ServerConfig) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if config.cors_all {
        return Ok(layer.allow_origin(Any));
    }
    if let Some(origin) = &config.origin {
        let origin: HeaderValue = origin
            .parse()
            .with_context(|| format!("invalid CORS origin '{origin}'"))?;
        return Ok(layer.allow_origin(origin));
    }
    Ok(layer)
}

/// Bind and serve until the process is stopped.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let app = create_app(&config)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "mathlab server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
