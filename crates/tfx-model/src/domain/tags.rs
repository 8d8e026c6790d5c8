use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tag set attached to a cloud resource, keyed by tag name.
///
/// Used both for the tags observed on a deployed resource and for the
/// required subset an assertion checks against.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(pub BTreeMap<String, String>);

impl TagSet {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns `true` if no tags are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert or overwrite a tag.
    ///
    /// Returns `self` for chaining.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into());
        self
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Iterate through all tags as `(&str, &str)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` iff every tag in `required` is present in `self`
    /// with exactly the required value.
    ///
    /// Tags in `self` that `required` does not mention are ignored, so
    /// adding unrelated tags to a resource never flips the result.
    pub fn contains_all(&self, required: &TagSet) -> bool {
        required.iter().all(|(key, value)| self.get(key) == Some(value))
    }
}

impl<K, V> FromIterator<(K, V)> for TagSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
