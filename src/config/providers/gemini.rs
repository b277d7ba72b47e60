use serde::{Deserialize, Serialize};
use url::Url;

use super::{ProviderDefaults, deserialize_api_key_lax};

/// Gemini provider configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// API key. Its presence makes the provider available.
    /// TOML: `providers.gemini.api_key`. Env: `GEMINI_API_KEY`.
    #[serde(default, deserialize_with = "deserialize_api_key_lax")]
    pub api_key: Option<String>,

    /// API origin; `/v1beta/models/{model}:generateContent` is appended.
    /// TOML: `providers.gemini.base_url`. Default: `https://generativelanguage.googleapis.com`.
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// TOML: `providers.gemini.model`. Default: `gemini-1.5-flash`.
    #[serde(default = "default_model")]
    pub model: String,

    /// Unset leaves the upstream default in place.
    #[serde(default)]
    pub temperature: Option<f64>,

    /// Unset leaves the upstream default in place.
    #[serde(default)]
    pub max_output_tokens: Option<u32>,

    /// Falls back to `providers.defaults.proxy`.
    #[serde(default)]
    pub proxy: Option<Url>,

    /// Falls back to `providers.defaults.enable_multiplexing`.
    #[serde(default)]
    pub enable_multiplexing: Option<bool>,

    /// Falls back to `providers.defaults.timeout_secs`.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct GeminiResolvedConfig {
    pub api_key: Option<String>,
    pub base_url: Url,
    pub model: String,
    pub temperature: Option<f64>,
    pub max_output_tokens: Option<u32>,
    pub proxy: Option<Url>,
    pub enable_multiplexing: bool,
    pub timeout_secs: u64,
}

impl GeminiConfig {
    pub fn resolve(&self, defaults: &ProviderDefaults) -> GeminiResolvedConfig {
        GeminiResolvedConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
            proxy: self.proxy.clone().or_else(|| defaults.proxy.clone()),
            enable_multiplexing: self
                .enable_multiplexing
                .unwrap_or(defaults.enable_multiplexing),
            timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout_secs),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            temperature: None,
            max_output_tokens: None,
            proxy: None,
            enable_multiplexing: None,
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com")
        .expect("invalid fixed Gemini base URL")
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}
