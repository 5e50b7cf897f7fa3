use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::DetectError;

/// Message returned to clients when detection fails
pub const DETECTION_FAILED: &str = "Failed to detect deployment environment";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Detection error: {0}")]
    Detection(#[from] DetectError),

    #[error("Background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Detection(e) => {
                tracing::error!("Error detecting deployment: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, DETECTION_FAILED.to_string())
            }
            AppError::Join(e) => {
                tracing::error!("Detection task failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, DETECTION_FAILED.to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
