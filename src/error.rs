//! Application error type and its HTTP mapping.
//!
//! Every failure reaching the HTTP boundary is rendered as
//! `{"status": "error", "message": "..."}`. Server-side failures are logged
//! with their cause and answered with a generic message.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::repositories::StoreError;

/// Message sent to clients for every 5xx response.
const INTERNAL_MESSAGE: &str = "Internal server error";

/// JSON body shared by all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// The request carried no URL to shorten.
    #[error("URL is required")]
    MissingUrl,

    /// The submitted value is not an absolute URL.
    #[error("Invalid URL format")]
    InvalidUrl { url: String, reason: String },

    /// The request body could not be read.
    #[error("{0}")]
    BadRequest(String),

    /// No record exists for the short id.
    #[error("URL not found")]
    NotFound { short_id: String },

    /// Every generated short id collided with an existing one.
    #[error("Failed to allocate a unique short id after {attempts} attempts")]
    StorageConflict { attempts: usize },

    /// The store failed or is unreachable.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn not_found(short_id: impl Into<String>) -> Self {
        Self::NotFound {
            short_id: short_id.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingUrl | AppError::InvalidUrl { .. } | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::StorageConflict { .. } | AppError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(short_id) => AppError::NotFound { short_id },
            StoreError::DuplicateKey(_) => AppError::StorageConflict { attempts: 1 },
            StoreError::Backend(message) => AppError::Storage(message),
        }
    }
}

/// Validation code used by request DTOs for an absent or empty URL.
pub const URL_REQUIRED_CODE: &str = "url_required";

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let all: Vec<_> = field_errors.values().flat_map(|errs| errs.iter()).collect();

        if all.iter().any(|e| e.code == URL_REQUIRED_CODE) {
            return AppError::MissingUrl;
        }

        let message = all
            .iter()
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::BadRequest(message)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            INTERNAL_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}
