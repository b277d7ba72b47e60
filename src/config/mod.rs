mod basic;
mod providers;

pub use basic::BasicConfig;
pub use providers::{
    GeminiConfig, GeminiResolvedConfig, OpenaiConfig, OpenaiResolvedConfig, ProviderDefaults,
    ProvidersConfig,
};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration managed by Figment.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Core server configuration (see `basic` table in config.toml).
    #[serde(default)]
    pub basic: BasicConfig,

    /// Provider and upstream settings (see `providers` table in config.toml).
    #[serde(default)]
    pub providers: ProvidersConfig,
}

const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Environment variables honored on top of `config.toml`, with the key each one sets.
static ENV_KEYS: &[(&str, &str)] = &[
    ("OPENAI_API_KEY", "providers.openai.api_key"),
    ("GEMINI_API_KEY", "providers.gemini.api_key"),
    ("PORT", "basic.listen_port"),
    ("LISTEN_ADDR", "basic.listen_addr"),
    ("LOGLEVEL", "basic.loglevel"),
];

impl Config {
    /// Builds a Figment that merges defaults, an optional config TOML file, and the
    /// environment (highest precedence).
    pub fn figment() -> Figment {
        let figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let figment = if PathBuf::from(DEFAULT_CONFIG_FILE).is_file() {
            figment.merge(Toml::file(DEFAULT_CONFIG_FILE))
        } else {
            figment
        };

        ENV_KEYS.iter().fold(figment, |figment, &(var, key)| {
            figment.merge(Env::raw().only(&[var]).map(move |_| key.into()))
        })
    }

    /// Loads configuration from defaults, `config.toml` if present, and the environment.
    ///
    /// Missing provider keys are not an error: availability is reported per provider
    /// and requests fail at generation time instead.
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn openai(&self) -> OpenaiResolvedConfig {
        self.providers.openai.resolve(&self.providers.defaults)
    }

    pub fn gemini(&self) -> GeminiResolvedConfig {
        self.providers.gemini.resolve(&self.providers.defaults)
    }
}
