use crate::error::GenerateError;
use pagewright_schema::{AvailableProviders, ProviderKind, ProviderPreference};

/// Candidate providers for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Caller named a provider: try it alone, surface its error as-is.
    Explicit(ProviderKind),
    /// Auto mode: configured providers in preference order, each tried once.
    Auto(Vec<ProviderKind>),
}

impl Selection {
    /// Picks candidates from the caller's preference and current availability.
    ///
    /// An explicit choice is honored even without a credential so the failure is
    /// reported for that provider instead of silently switching.
    pub fn choose(
        preference: ProviderPreference,
        availability: AvailableProviders,
    ) -> Result<Self, GenerateError> {
        if let Some(kind) = preference.explicit() {
            return Ok(Selection::Explicit(kind));
        }

        let candidates: Vec<ProviderKind> = availability.configured().collect();
        if candidates.is_empty() {
            return Err(GenerateError::Configuration);
        }
        Ok(Selection::Auto(candidates))
    }

    pub fn candidates(&self) -> &[ProviderKind] {
        match self {
            Selection::Explicit(kind) => std::slice::from_ref(kind),
            Selection::Auto(kinds) => kinds,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Selection::Auto(_))
    }
}
