use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

pub const SUBMIT_FAILED: &str = "Failed to submit data";
pub const FETCH_FAILED: &str = "Failed to fetch data";

/// The only failure clients ever see: 500 with a generic `{ "error" }` body.
/// The underlying cause is logged, never returned.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    OperationFailed {
        message: &'static str,
        #[source]
        source: ServiceError,
    },
}

impl ApiError {
    pub fn submit(source: ServiceError) -> Self { Self::OperationFailed { message: SUBMIT_FAILED, source } }
    pub fn fetch(source: ServiceError) -> Self { Self::OperationFailed { message: FETCH_FAILED, source } }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::OperationFailed { message, source } => {
                error!(error = %source, message, "record store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(message))).into_response()
            }
        }
    }
}
