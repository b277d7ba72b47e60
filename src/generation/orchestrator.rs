use super::normalize::normalize;
use super::prompt::SYSTEM_INSTRUCTION;
use super::selector::Selection;
use crate::error::{GenerateError, ProviderFailure};
use crate::providers::Providers;
use crate::store::{ArtifactStore, GeneratedArtifact};
use pagewright_schema::site::GenerateWebsiteRequest;
use pagewright_schema::{ProviderKind, ProviderPreference};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Validated-on-use generation input.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub prompt: String,
    pub provider: ProviderPreference,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, provider: ProviderPreference) -> Self {
        Self {
            prompt: prompt.into(),
            provider,
        }
    }
}

impl From<GenerateWebsiteRequest> for GenerationRequest {
    fn from(body: GenerateWebsiteRequest) -> Self {
        Self {
            prompt: body.prompt.unwrap_or_default(),
            provider: body.provider,
        }
    }
}

/// Outcome of a successful generation.
#[derive(Debug, Clone)]
pub struct Generation {
    pub artifact: Arc<GeneratedArtifact>,
    /// Backend that actually produced the text (may differ from the first candidate).
    pub provider: ProviderKind,
}

/// Runs selection, adapter calls with auto fallback, normalization, and storage.
#[derive(Clone)]
pub struct Generator {
    providers: Providers,
    store: ArtifactStore,
}

impl Generator {
    pub fn new(providers: Providers, store: ArtifactStore) -> Self {
        Self { providers, store }
    }

    pub fn providers(&self) -> &Providers {
        &self.providers
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    pub async fn generate_website(
        &self,
        request: GenerationRequest,
    ) -> Result<Generation, GenerateError> {
        if request.prompt.trim().is_empty() {
            return Err(GenerateError::Validation);
        }

        let availability = self.providers.availability();
        let selection = Selection::choose(request.provider, availability)?;
        debug!(
            preference = ?request.provider,
            ?availability,
            candidates = ?selection.candidates(),
            "Provider selection"
        );

        let (provider, raw) = self.run_candidates(&selection, &request.prompt).await?;

        let code = normalize(&raw);
        let artifact = self
            .store
            .put(GeneratedArtifact::new(request.prompt, code, provider));

        info!(
            website_id = %artifact.id,
            %provider,
            raw_len = raw.len(),
            code_len = artifact.code.len(),
            "Website generated"
        );

        Ok(Generation { artifact, provider })
    }

    /// Tries each candidate once, in order, until one returns text.
    async fn run_candidates(
        &self,
        selection: &Selection,
        prompt: &str,
    ) -> Result<(ProviderKind, String), GenerateError> {
        let mut failures = Vec::new();

        for &kind in selection.candidates() {
            let start = Instant::now();
            match self
                .providers
                .get(kind)
                .generate(SYSTEM_INSTRUCTION, prompt)
                .await
            {
                Ok(text) => return Ok((kind, text)),
                Err(error) if !selection.is_auto() => {
                    return Err(GenerateError::Provider {
                        provider: kind,
                        source: error,
                    });
                }
                Err(error) => {
                    warn!(
                        provider = %kind,
                        error = %error,
                        "[{}] Generation failed after {:?}, trying next provider",
                        kind,
                        start.elapsed()
                    );
                    failures.push(ProviderFailure {
                        provider: kind,
                        error,
                    });
                }
            }
        }

        Err(GenerateError::Exhausted(failures))
    }
}
