use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use planboard_core::PlanError;

/// Unified error type for HTTP responses.
///
/// Responses always carry one of the fixed messages from the `PlanError`
/// taxonomy; anything outside it (I/O, serialization, task join failures)
/// becomes a generic 500 and the underlying error only goes to the log.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0.downcast_ref::<PlanError>() {
            Some(PlanError::PlanNotFound) => (StatusCode::NOT_FOUND, "plan not found"),
            Some(PlanError::InvalidFormat) => (StatusCode::BAD_REQUEST, "invalid data format"),
            Some(PlanError::InvalidBody) => (StatusCode::BAD_REQUEST, "invalid request body"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {:#}", self.0);
        }

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
