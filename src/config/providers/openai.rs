use serde::{Deserialize, Serialize};
use url::Url;

use super::{ProviderDefaults, deserialize_api_key_lax};

/// OpenAI provider configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OpenaiConfig {
    /// API key. Its presence makes the provider available.
    /// TOML: `providers.openai.api_key`. Env: `OPENAI_API_KEY`.
    #[serde(default, deserialize_with = "deserialize_api_key_lax")]
    pub api_key: Option<String>,

    /// API origin; `/v1/chat/completions` is appended.
    /// TOML: `providers.openai.base_url`. Default: `https://api.openai.com`.
    #[serde(default = "default_base_url")]
    pub base_url: Url,

    /// TOML: `providers.openai.model`. Default: `gpt-3.5-turbo`.
    #[serde(default = "default_model")]
    pub model: String,

    /// TOML: `providers.openai.max_tokens`. Default: `3000`.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// TOML: `providers.openai.temperature`. Default: `0.7`.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Optional upstream HTTP proxy.
    /// Falls back to `providers.defaults.proxy` when unset.
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
pub struct OpenaiResolvedConfig {
    pub api_key: Option<String>,
    pub base_url: Url,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub proxy: Option<Url>,
    pub enable_multiplexing: bool,
    pub timeout_secs: u64,
}

impl OpenaiConfig {
    pub fn resolve(&self, defaults: &ProviderDefaults) -> OpenaiResolvedConfig {
        OpenaiResolvedConfig {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            proxy: self.proxy.clone().or_else(|| defaults.proxy.clone()),
            enable_multiplexing: self
                .enable_multiplexing
                .unwrap_or(defaults.enable_multiplexing),
            timeout_secs: self.timeout_secs.unwrap_or(defaults.timeout_secs),
        }
    }
}

impl Default for OpenaiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            proxy: None,
            enable_multiplexing: None,
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> Url {
    Url::parse("https://api.openai.com").expect("invalid fixed OpenAI base URL")
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_max_tokens() -> u32 {
    3000
}

fn default_temperature() -> f64 {
    0.7
}
