//! Error responses.

use std::sync::Arc;

use askama_axum::IntoResponse;
use axum::{http::StatusCode, response::Response};
use tracing::warn;

use crate::domain::ValidationError;
use crate::provider::ProviderError;

use super::templates::ErrorTemplate;

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    Internal { message: String },
}

impl From<ProviderError> for AppError {
    fn from(e: ProviderError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

/// A refresh result shared between the requests that waited on it.
impl From<Arc<ProviderError>> for AppError {
    fn from(e: Arc<ProviderError>) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        match e {
            // Bad request input: the page doesn't exist.
            ValidationError::RegionPath(_) | ValidationError::PostalCode(_) => {
                AppError::NotFound {
                    message: e.to_string(),
                }
            }
            // Bad provider data: our fault as far as the visitor is concerned.
            ValidationError::DayOutOfRange(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, "Not Found", message),
            AppError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                message,
            ),
        };

        warn!(status = status.as_u16(), %message, "request failed");

        // Internal details stay in the log.
        let shown = if status == StatusCode::NOT_FOUND {
            message
        } else {
            "The pollen data could not be loaded. Please try again later.".to_string()
        };

        let page = ErrorTemplate {
            title: title.to_string(),
            message: shown,
        };
        (status, page).into_response()
    }
}
