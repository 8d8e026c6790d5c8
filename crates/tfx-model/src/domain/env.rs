use serde::{Deserialize, Serialize};

/// Ordered environment variables passed to the provisioning process.
///
/// Stored as a list of pairs and serialized as a transparent array, so
/// insertion order is preserved and later entries override earlier ones.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvVars(pub Vec<(String, String)>);

impl EnvVars {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an environment containing a single pair.
    pub fn single<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(vec![(key.into(), value.into())])
    }

    /// Number of entries, overrides included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the environment is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a pair to the environment.
    ///
    /// Later entries override earlier ones when queried via [`EnvVars::get`].
    pub fn push<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.push((key.into(), value.into()));
    }

    /// Get the value for a key, returning the last matching entry.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over all pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Merge two environments, where entries from `other` override earlier ones.
    ///
    /// Combined by concatenation, so [`EnvVars::get`] resolves overrides
    /// naturally by scanning from the end.
    pub fn merged(&self, other: &EnvVars) -> EnvVars {
        let mut out = self.0.clone();
        out.extend(other.0.clone());
        EnvVars(out)
    }
}
