use crate::error::ProviderError;
use crate::utils::logging::with_pretty_json_debug;
use pagewright_schema::{GeminiErrorBody, OpenaiErrorBody, ProviderKind};
use serde::{Serialize, de::DeserializeOwned};

pub const UPSTREAM_BODY_PREVIEW_CHARS: usize = 300;

/// A provider's structured error envelope.
pub(crate) trait UpstreamErrorBody: std::fmt::Debug + DeserializeOwned + Serialize {
    /// One-line cause suitable for surfacing to the caller.
    fn summary(&self) -> Option<String>;
}

impl UpstreamErrorBody for OpenaiErrorBody {
    fn summary(&self) -> Option<String> {
        OpenaiErrorBody::summary(self)
    }
}

impl UpstreamErrorBody for GeminiErrorBody {
    fn summary(&self) -> Option<String> {
        GeminiErrorBody::summary(self)
    }
}

/// Turns a non-success upstream response into a `ProviderError::Rejected`.
///
/// The structured message is used when the body parses; otherwise the cause is a
/// truncated preview of the raw body, or the status reason when the body is empty.
pub(crate) async fn classify_upstream_error<E>(
    provider: ProviderKind,
    resp: reqwest::Response,
) -> ProviderError
where
    E: UpstreamErrorBody,
{
    let status = resp.status();
    let bytes = resp.bytes().await.unwrap_or_default();

    if let Ok(error) = serde_json::from_slice::<E>(&bytes) {
        with_pretty_json_debug(&error, |pretty_error| {
            tracing::debug!(
                %provider,
                %status,
                body = %pretty_error,
                "Upstream structured error"
            );
        });

        if let Some(message) = error.summary() {
            return ProviderError::Rejected { status, message };
        }
    }

    let raw_body = String::from_utf8_lossy(&bytes);
    let preview = format!("{:.len$}", raw_body.trim(), len = UPSTREAM_BODY_PREVIEW_CHARS);

    tracing::debug!(
        %provider,
        %status,
        body = %preview,
        "Upstream unstructured error"
    );

    let message = if preview.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        preview
    };

    ProviderError::Rejected { status, message }
}

/// Reads a success body as JSON.
pub(crate) async fn read_json<T>(resp: reqwest::Response) -> Result<T, ProviderError>
where
    T: DeserializeOwned,
{
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
