//! In-memory artifact storage.
//!
//! Entries live for the process lifetime: there is no eviction, expiry, or size
//! bound, so memory grows with every successful generation.

use ahash::AHashMap;
use chrono::{DateTime, Utc};
use pagewright_schema::ProviderKind;
use pagewright_schema::site::timestamp_millis;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};

/// A generated HTML document plus its metadata. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArtifact {
    pub id: String,
    pub prompt: String,
    pub code: String,
    #[serde(rename = "timestamp", with = "timestamp_millis")]
    pub created_at: DateTime<Utc>,
    pub provider: ProviderKind,
}

impl GeneratedArtifact {
    /// Stamps a new artifact with the current time.
    ///
    /// The id is the creation time in Unix milliseconds, so two artifacts created
    /// in the same millisecond share an id and the later `put` wins.
    pub fn new(prompt: impl Into<String>, code: impl Into<String>, provider: ProviderKind) -> Self {
        let now = Utc::now();
        let millis = now.timestamp_millis();
        let created_at = DateTime::from_timestamp_millis(millis).unwrap_or(now);

        Self {
            id: millis.to_string(),
            prompt: prompt.into(),
            code: code.into(),
            created_at,
            provider,
        }
    }
}

/// Shared id → artifact map. Cloning shares the same storage.
#[derive(Clone, Default)]
pub struct ArtifactStore {
    inner: Arc<RwLock<AHashMap<String, Arc<GeneratedArtifact>>>>,
}

impl ArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `artifact` under its id, replacing any entry with the same id.
    pub fn put(&self, artifact: GeneratedArtifact) -> Arc<GeneratedArtifact> {
        let artifact = Arc::new(artifact);
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(artifact.id.clone(), artifact.clone());
        artifact
    }

    pub fn get(&self, id: &str) -> Option<Arc<GeneratedArtifact>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
