use crate::error::ApiError;
use crate::utils::logging::with_pretty_json_debug;
use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

/// JSON body extractor whose rejection is an [`ApiError`].
///
/// A body that is empty or not sent as JSON yields `T::default()`, so handlers
/// report the missing field themselves (e.g. "Prompt is required"). Malformed
/// JSON and schema mismatches (e.g. an unknown `provider` value) become
/// `400 {"error": "Invalid request body", "details": ...}`.
pub(super) struct ApiJson<T>(pub(super) T);

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Serialize + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_string();
        let is_json = is_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(JsonRejection::from)?;

        let body = if !is_json || bytes.is_empty() {
            debug!(path = %path, is_json, len = bytes.len(), "No JSON body, using defaults");
            T::default()
        } else {
            let Json(body) = Json::<T>::from_bytes(&bytes)?;
            body
        };

        with_pretty_json_debug(&body, |pretty_body| {
            debug!(path = %path, body = %pretty_body, "Extracted request body");
        });

        Ok(Self(body))
    }
}
