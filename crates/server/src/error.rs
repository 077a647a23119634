use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;
use tripmap_core::PlanError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    InvalidPlan(#[from] PlanError),

    #[error("Internal error: {0}")]
    Internal(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidPlan(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(ref e) => {
                error!("request failed: {e}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
