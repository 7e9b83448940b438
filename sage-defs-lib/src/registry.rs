//! [`PlatformPathResolver`] implementations.

use std::collections::HashMap;

use sage_defs_core::PlatformPathResolver;

use crate::settings::Settings;

/// A resolver for machines where no game is registered.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRegistry;

impl PlatformPathResolver for NoRegistry {
    fn resolve(&self, _key: &str, _value: &str) -> Option<String> {
        None
    }
}

/// An in-memory registry of key/value pairs.
///
/// Backs registry lookups with the `[registry]` table of the settings file,
/// or with entries supplied directly.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    entries: HashMap<(String, String), String>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        self.insert(key, value, data);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>, data: impl Into<String>) {
        self.entries
            .insert((normalize_key(&key.into()), value.into()), data.into());
    }

    /// Build from the `[registry]` settings table, whose keys are
    /// `<key>\<value>`. Entries without a backslash are skipped.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut registry = Self::new();
        for (path, data) in &settings.registry {
            match path.rsplit_once('\\') {
                Some((key, value)) => registry.insert(key, value, data.as_str()),
                None => log::warn!("Ignoring registry setting without a value name: {path}"),
            }
        }
        registry
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PlatformPathResolver for StaticRegistry {
    fn resolve(&self, key: &str, value: &str) -> Option<String> {
        self.entries
            .get(&(normalize_key(key), value.to_string()))
            .cloned()
    }
}

/// Registry key paths are case-insensitive and tolerate stray separators.
fn normalize_key(key: &str) -> String {
    key.trim_matches('\\').to_lowercase()
}
