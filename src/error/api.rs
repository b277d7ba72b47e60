use super::{GenerateError, ProviderError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Errors surfaced by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("Website not found")]
    WebsiteNotFound(String),

    #[error("Provider {0} not available or not configured")]
    ProviderUnavailable(String),

    #[error("Provider test failed: {0}")]
    ProviderTest(ProviderError),

    #[error("Invalid request body")]
    BadRequest { debug_message: String },
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            debug_message: rejection.body_text(),
        }
    }
}

/// Error payload: `{ "error": "...", "details": "..." }`.
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiErrorBody {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Generate(GenerateError::Validation) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody::new(GenerateError::Validation.to_string()),
            ),

            ApiError::Generate(err) => {
                tracing::error!(error = %err, "Website generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody::with_details("Failed to generate website", err.to_string()),
                )
            }

            ApiError::WebsiteNotFound(id) => {
                tracing::debug!(website_id = %id, "Website lookup missed");
                (
                    StatusCode::NOT_FOUND,
                    ApiErrorBody::new("Website not found"),
                )
            }

            err @ ApiError::ProviderUnavailable(_) => {
                (StatusCode::BAD_REQUEST, ApiErrorBody::new(err.to_string()))
            }

            err @ ApiError::ProviderTest(_) => {
                tracing::warn!(error = %err, "Provider connectivity test failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody::new(err.to_string()),
                )
            }

            ApiError::BadRequest { debug_message } => {
                tracing::warn!(debug_message = %debug_message, "Request body rejected");
                (
                    StatusCode::BAD_REQUEST,
                    ApiErrorBody::with_details("Invalid request body", debug_message),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
