mod gemini;
mod openai;

pub use gemini::{GeminiConfig, GeminiResolvedConfig};
pub use openai::{OpenaiConfig, OpenaiResolvedConfig};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use url::Url;

/// Global provider defaults (used when provider-level config is unset).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderDefaults {
    /// Optional upstream HTTP proxy. If set, used for reqwest clients.
    /// TOML: `providers.defaults.proxy`. Example: `http://127.0.0.1:1080`.
    #[serde(default)]
    pub proxy: Option<Url>,

    /// Allow HTTP/2 multiplexing for reqwest clients; disabled forces HTTP/1.
    /// TOML: `providers.defaults.enable_multiplexing`. Default: `false`.
    #[serde(default = "default_enable_multiplexing")]
    pub enable_multiplexing: bool,

    /// Total timeout for one upstream completion call, in seconds.
    /// TOML: `providers.defaults.timeout_secs`. Default: `120`.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderDefaults {
    fn default() -> Self {
        Self {
            proxy: None,
            enable_multiplexing: default_enable_multiplexing(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// All provider configurations.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ProvidersConfig {
    /// Global defaults for providers (overridden per provider if set).
    #[serde(default)]
    pub defaults: ProviderDefaults,

    /// OpenAI chat-completions provider configuration.
    #[serde(default)]
    pub openai: OpenaiConfig,

    /// Gemini generate-content provider configuration.
    #[serde(default)]
    pub gemini: GeminiConfig,
}

fn default_enable_multiplexing() -> bool {
    false
}

fn default_timeout_secs() -> u64 {
    120
}

/// Accepts a string, number, or bool for an API key; blank values count as unset.
///
/// Environment values are type-sniffed by Figment, so a purely numeric key would
/// otherwise fail to deserialize.
fn deserialize_api_key_lax<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;

    let key = match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => {
            return Err(serde::de::Error::custom(
                "expected a string or a number for api_key",
            ));
        }
    };

    Ok(key.filter(|k| !k.trim().is_empty()))
}
