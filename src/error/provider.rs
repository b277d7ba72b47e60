use pagewright_schema::ProviderKind;
use reqwest::StatusCode;
use thiserror::Error as ThisError;

/// Failure of a single adapter call.
#[derive(Debug, ThisError)]
pub enum ProviderError {
    /// No API key is configured for this provider.
    #[error("{} API key is not configured", .provider.display_name())]
    MissingCredential { provider: ProviderKind },

    /// Transport-level failure (DNS, connect, TLS, timeouts, etc).
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status (auth, quota, bad input).
    #[error("upstream returned {status}: {message}")]
    Rejected { status: StatusCode, message: String },

    /// Success status but the body did not match the expected schema.
    #[error("failed to decode upstream response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Well-formed response without any generated text.
    #[error("upstream returned no text (reason: {reason})")]
    EmptyCompletion { reason: String },

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

impl ProviderError {
    pub fn missing_credential(provider: ProviderKind) -> Self {
        ProviderError::MissingCredential { provider }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cause() {
        assert_eq!(
            ProviderError::missing_credential(ProviderKind::Openai).to_string(),
            "OpenAI API key is not configured"
        );
        assert_eq!(
            ProviderError::Rejected {
                status: StatusCode::TOO_MANY_REQUESTS,
                message: "RESOURCE_EXHAUSTED: quota".to_string(),
            }
            .to_string(),
            "upstream returned 429 Too Many Requests: RESOURCE_EXHAUSTED: quota"
        );
    }
}
