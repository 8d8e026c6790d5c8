use std::fmt;

use serde::{Deserialize, Serialize};

/// Deployment environment label (e.g. `"staging"`, `"ci"`, `"prod"`).
///
/// The label is a free-form string; only `"prod"` changes module
/// behavior, selecting the highly-available network topology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Environment(String);

impl Environment {
    /// Create an environment from a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Get the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` only for the exact label `"prod"`.
    pub fn is_production(&self) -> bool {
        self.0 == "prod"
    }

    /// NAT gateways the network module provisions for this environment:
    /// one per availability zone in production, a single shared one
    /// everywhere else.
    pub fn nat_gateway_count(&self) -> usize {
        if self.is_production() { 3 } else { 1 }
    }
}

impl From<&str> for Environment {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
