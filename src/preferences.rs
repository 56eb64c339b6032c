use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::translate::AUTO_SOURCE;

/// Per-user auto-translation settings.
///
/// Written by the preference API, read once per inbound message by the
/// event gate. The gate treats the record as read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreference {
    pub user_id: String,
    #[serde(default)]
    pub activated: bool,
    pub source_language: String,
    pub target_language: String,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl UserPreference {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.user_id.is_empty() {
            anyhow::bail!("user_id is required");
        }
        if self.source_language != AUTO_SOURCE && !is_language_code(&self.source_language) {
            anyhow::bail!("invalid source language: {}", self.source_language);
        }
        if !is_language_code(&self.target_language) || self.target_language == AUTO_SOURCE {
            anyhow::bail!("invalid target language: {}", self.target_language);
        }
        if self.source_language == self.target_language {
            anyhow::bail!("source and target language must differ");
        }
        Ok(())
    }
}

/// Language codes are 2-5 characters ("ko", "zh-TW", "es-MX").
pub fn is_language_code(code: &str) -> bool {
    (2..=5).contains(&code.len())
}

/// Key-value store of user preferences, keyed by user id.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, user_id: &str) -> Option<UserPreference>;
    fn set(&self, preference: UserPreference);
}

/// Concurrent in-memory store. Each entry is replaced wholesale on set.
#[derive(Default)]
pub struct InMemoryPreferenceStore {
    entries: DashMap<String, UserPreference>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn get(&self, user_id: &str) -> Option<UserPreference> {
        self.entries.get(user_id).map(|entry| entry.value().clone())
    }

    fn set(&self, preference: UserPreference) {
        self.entries.insert(preference.user_id.clone(), preference);
    }
}
