use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a text-generation backend, as reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Openai,
    Gemini,
}

impl ProviderKind {
    /// Fixed auto-mode preference order.
    pub const PREFERENCE: [ProviderKind; 2] = [ProviderKind::Openai, ProviderKind::Gemini];

    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::Openai => "openai",
            ProviderKind::Gemini => "gemini",
        }
    }

    /// Vendor spelling used in user-facing messages.
    pub fn display_name(self) -> &'static str {
        match self {
            ProviderKind::Openai => "OpenAI",
            ProviderKind::Gemini => "Gemini",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownProvider(pub String);

impl fmt::Display for UnknownProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown provider `{}`", self.0)
    }
}

impl std::error::Error for UnknownProvider {}

impl FromStr for ProviderKind {
    type Err = UnknownProvider;

    /// Exact, case-sensitive match on the wire identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "openai" => Ok(ProviderKind::Openai),
            "gemini" => Ok(ProviderKind::Gemini),
            other => Err(UnknownProvider(other.to_string())),
        }
    }
}

/// Caller's provider choice on `POST /api/generate-website`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderPreference {
    #[default]
    Auto,
    Openai,
    Gemini,
}

impl ProviderPreference {
    /// The named provider, or `None` for auto mode.
    pub fn explicit(self) -> Option<ProviderKind> {
        match self {
            ProviderPreference::Auto => None,
            ProviderPreference::Openai => Some(ProviderKind::Openai),
            ProviderPreference::Gemini => Some(ProviderKind::Gemini),
        }
    }
}

/// Which providers have a usable credential right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AvailableProviders {
    pub openai: bool,
    pub gemini: bool,
}

impl AvailableProviders {
    pub fn is_available(&self, kind: ProviderKind) -> bool {
        match kind {
            ProviderKind::Openai => self.openai,
            ProviderKind::Gemini => self.gemini,
        }
    }

    /// Configured providers in auto-mode preference order.
    pub fn configured(&self) -> impl Iterator<Item = ProviderKind> + '_ {
        ProviderKind::PREFERENCE
            .into_iter()
            .filter(move |kind| self.is_available(*kind))
    }

    /// Provider the UI should preselect: Gemini whenever it is configured.
    pub fn default_provider(&self) -> ProviderKind {
        if self.gemini {
            ProviderKind::Gemini
        } else {
            ProviderKind::Openai
        }
    }
}
