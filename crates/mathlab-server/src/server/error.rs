//! Error handling for the HTTP API.
//!
//! Every handler returns [`ServerResult`]; the [`IntoResponse`] impl maps
//! each error to its status code and a `{"error": "..."}` body. Internal
//! errors keep their detail in the logs and send a generic message to the
//! client.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use mathlab_expr::ExprError;
use mathlab_numeric::NumericError;

use super::models::ErrorResponse;

/// Errors surfaced by API handlers.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Expression parsing or symbolic manipulation failed
    #[error(transparent)]
    Expression(#[from] ExprError),

    /// Polynomial or matrix operation failed
    #[error(transparent)]
    Numeric(#[from] NumericError),

    /// Request is structurally valid JSON but semantically wrong
    #[error("{message}")]
    BadRequest { message: String },

    /// Request body was not sent as `application/json`
    #[error("Invalid request: Content-Type must be application/json")]
    UnsupportedMediaType,

    /// Unexpected failure; the detail stays in the logs
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type ServerResult<T> = std::result::Result<T, ServerError>;

impl ServerError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ServerError::BadRequest {
            message: message.into(),
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ServerError::Expression(_) | ServerError::Numeric(_) | ServerError::BadRequest { .. } => {
                StatusCode::BAD_REQUEST
            }
            ServerError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message sent to the client. Expression errors collapse to a
    /// single generic message except for failed integration, whose detail
    /// is useful to the user.
    fn client_message(&self) -> String {
        match self {
            ServerError::Expression(err @ ExprError::CannotIntegrate { .. }) => err.to_string(),
            ServerError::Expression(_) => "Invalid mathematical expression.".to_string(),
            ServerError::Internal(_) => {
                "An unexpected error occurred during calculation.".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }
        (status, Json(ErrorResponse::new(self.client_message()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_collapse_to_a_generic_message() {
        let err = ServerError::from(ExprError::UnknownIdentifier {
            name: "foo".to_string(),
        });
        assert_eq!(err.client_message(), "Invalid mathematical expression.");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn integration_failures_keep_their_detail() {
        let err = ServerError::from(ExprError::CannotIntegrate {
            expression: "x*sin(x)".to_string(),
        });
        assert_eq!(
            err.client_message(),
            "No symbolic antiderivative found for 'x*sin(x)'"
        );
    }

    #[test]
    fn numeric_errors_use_their_display_string() {
        let err = ServerError::from(NumericError::ZeroLeadingCoefficient);
        assert_eq!(
            err.client_message(),
            "The leading coefficient cannot be zero."
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_errors_hide_their_detail() {
        let err = ServerError::from(anyhow::anyhow!("database on fire"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.client_message(),
            "An unexpected error occurred during calculation."
        );
    }
}
