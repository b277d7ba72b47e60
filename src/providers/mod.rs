//! Text-generation backends behind one async interface.

pub mod gemini;
pub mod openai;

mod bootstrap;
mod http;
mod policy;

pub use bootstrap::Providers;
pub use policy::UPSTREAM_BODY_PREVIEW_CHARS;

use crate::error::ProviderError;
use async_trait::async_trait;
use pagewright_schema::ProviderKind;

/// Uniform adapter over one backend.
///
/// Adapters never retry; fallback between providers is the generator's job.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Whether a credential is configured. Checked on every request.
    fn is_configured(&self) -> bool;

    /// One completion of `prompt` under the given system instruction, returning raw text.
    async fn generate(&self, system: &str, prompt: &str) -> Result<String, ProviderError>;

    /// Minimal round trip used to verify connectivity and credentials.
    async fn probe(&self) -> Result<(), ProviderError>;
}
