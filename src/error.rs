// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use crate::services::catalog::CatalogError;
use crate::services::ungfritid::UngfritidError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Message returned to clients when the Ungfritid call fails.
pub const UNGFRITID_FAILURE_MESSAGE: &str = "Failed to fetch activities from Ungfritid";

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error(transparent)]
    Ungfritid(#[from] UngfritidError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// JSON error response body.
///
/// `success` is only set for Ungfritid failures.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    success: Option<bool>,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    success: None,
                    error: msg.clone(),
                    details: None,
                },
            ),
            AppError::CityNotFound(_) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    success: None,
                    error: "City not found".to_string(),
                    details: None,
                },
            ),
            AppError::Ungfritid(err) => {
                tracing::error!(error = %err, "Ungfritid request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        success: Some(false),
                        error: UNGFRITID_FAILURE_MESSAGE.to_string(),
                        details: Some(err.to_string()),
                    },
                )
            }
            AppError::Catalog(err) => {
                tracing::error!(error = %err, "City catalog error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        success: None,
                        error: "Failed to load activities".to_string(),
                        details: Some(err.to_string()),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
