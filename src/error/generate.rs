use super::ProviderError;
use pagewright_schema::ProviderKind;
use thiserror::Error as ThisError;

/// One failed attempt during auto-mode fallback.
#[derive(Debug)]
pub struct ProviderFailure {
    pub provider: ProviderKind,
    pub error: ProviderError,
}

#[derive(Debug, ThisError)]
pub enum GenerateError {
    /// Missing, empty, or whitespace-only prompt. Raised before any provider call.
    #[error("Prompt is required")]
    Validation,

    /// Auto mode with no provider credential configured at all.
    #[error("No LLM provider is configured (set OPENAI_API_KEY or GEMINI_API_KEY)")]
    Configuration,

    /// The explicitly requested provider failed; no fallback is attempted.
    #[error("{provider}: {source}")]
    Provider {
        provider: ProviderKind,
        #[source]
        source: ProviderError,
    },

    /// Every auto-mode candidate failed.
    #[error(
        "No available LLM provider could generate the website ({})",
        summarize(.0)
    )]
    Exhausted(Vec<ProviderFailure>),
}

fn summarize(failures: &[ProviderFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{}: {}", f.provider, f.error))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_lists_every_cause_in_order() {
        let err = GenerateError::Exhausted(vec![
            ProviderFailure {
                provider: ProviderKind::Openai,
                error: ProviderError::EmptyCompletion {
                    reason: "length".to_string(),
                },
            },
            ProviderFailure {
                provider: ProviderKind::Gemini,
                error: ProviderError::missing_credential(ProviderKind::Gemini),
            },
        ]);

        assert_eq!(
            err.to_string(),
            "No available LLM provider could generate the website \
             (openai: upstream returned no text (reason: length); \
             gemini: Gemini API key is not configured)"
        );
    }
}
