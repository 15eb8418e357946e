//! Request handlers and the error-to-response mapping

use crate::{
    core::{add, parse_operand},
    error::CalcError,
};
use axum::{
    Json,
    extract::{Path, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Body returned by `GET /add/{a}/{b}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddResponse {
    #[serde(rename = "A")]
    pub a: i64,
    #[serde(rename = "B")]
    pub b: i64,
    #[serde(rename = "Result")]
    pub result: i64,
}

/// Body of every error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `GET /add/{a}/{b}`
pub async fn add_handler(
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<AddResponse>, CalcError> {
    let Path((a, b)) = path.map_err(|rejection| CalcError::invalid_path(rejection.body_text()))?;
    let a = parse_operand(&a)?;
    let b = parse_operand(&b)?;

    Ok(Json(AddResponse {
        a,
        b,
        result: add(a, b),
    }))
}

/// Fallback for unknown routes
pub async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not Found")
}

/// Build a JSON error response
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

impl IntoResponse for CalcError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidOperand { .. } | Self::InvalidPath { .. } => {
                debug!("Rejecting request: {self}");
                error_response(StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::Config { .. } | Self::Server { .. } => {
                error!("Request failed: {self}");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}
