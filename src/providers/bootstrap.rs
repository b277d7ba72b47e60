use super::TextGenerator;
use super::gemini::GeminiClient;
use super::http::build_client;
use super::openai::OpenaiClient;
use crate::config::Config;
use pagewright_schema::{AvailableProviders, ProviderKind};
use std::sync::Arc;
use tracing::info;

/// Aggregates the adapters for both backends.
///
/// Kept as a plain struct with one slot per provider; tests swap in stubs through
/// [`Providers::new`].
#[derive(Clone)]
pub struct Providers {
    openai: Arc<dyn TextGenerator>,
    gemini: Arc<dyn TextGenerator>,
}

impl Providers {
    pub fn new(openai: Arc<dyn TextGenerator>, gemini: Arc<dyn TextGenerator>) -> Self {
        Self { openai, gemini }
    }

    /// Builds the real HTTP adapters from configuration.
    pub fn from_config(cfg: &Config) -> Result<Self, reqwest::Error> {
        let provider_defaults = &cfg.providers.defaults;
        let openai_cfg = cfg.openai();
        let gemini_cfg = cfg.gemini();

        // Log resolved provider configs here so `main` stays wiring-only.
        info!(
            providers_defaults_proxy = %provider_defaults.proxy.as_ref().map(|u| u.as_str()).unwrap_or("<none>"),
            providers_defaults_enable_multiplexing = provider_defaults.enable_multiplexing,
            providers_defaults_timeout_secs = provider_defaults.timeout_secs,
            "Provider defaults loaded"
        );
        info!(
            openai_configured = openai_cfg.api_key.is_some(),
            openai_base_url = %openai_cfg.base_url,
            openai_model = %openai_cfg.model,
            openai_max_tokens = openai_cfg.max_tokens,
            openai_temperature = openai_cfg.temperature,
            openai_proxy = %openai_cfg.proxy.as_ref().map(|u| u.as_str()).unwrap_or("<none>"),
            openai_timeout_secs = openai_cfg.timeout_secs,
            "OpenAI config (effective)"
        );
        info!(
            gemini_configured = gemini_cfg.api_key.is_some(),
            gemini_base_url = %gemini_cfg.base_url,
            gemini_model = %gemini_cfg.model,
            gemini_proxy = %gemini_cfg.proxy.as_ref().map(|u| u.as_str()).unwrap_or("<none>"),
            gemini_timeout_secs = gemini_cfg.timeout_secs,
            "Gemini config (effective)"
        );

        let openai_http = build_client(
            openai_cfg.proxy.as_ref(),
            openai_cfg.enable_multiplexing,
            openai_cfg.timeout_secs,
        )?;
        let gemini_http = build_client(
            gemini_cfg.proxy.as_ref(),
            gemini_cfg.enable_multiplexing,
            gemini_cfg.timeout_secs,
        )?;

        Ok(Self::new(
            Arc::new(OpenaiClient::new(openai_cfg, openai_http)),
            Arc::new(GeminiClient::new(gemini_cfg, gemini_http)),
        ))
    }

    pub fn get(&self, kind: ProviderKind) -> &Arc<dyn TextGenerator> {
        match kind {
            ProviderKind::Openai => &self.openai,
            ProviderKind::Gemini => &self.gemini,
        }
    }

    /// Current credential availability, read from the adapters on every call.
    pub fn availability(&self) -> AvailableProviders {
        AvailableProviders {
            openai: self.openai.is_configured(),
            gemini: self.gemini.is_configured(),
        }
    }
}
