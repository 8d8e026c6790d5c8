use std::collections::BTreeMap;

use serde_json::Value as Json;

use crate::TerraformError;

/// Decoded `terraform output -json` document.
///
/// Identifiers coming out of a module (VPC id, subnet ids, ARNs) are
/// opaque strings; the only validation applied here is shape and
/// non-emptiness, with errors naming the offending output.
#[derive(Debug, Clone, Default)]
pub struct Outputs(serde_json::Map<String, Json>);

impl Outputs {
    /// Decode the top-level output document.
    ///
    /// Terraform wraps each output as `{"sensitive": …, "type": …,
    /// "value": …}`; only `value` is kept.
    pub fn from_json(doc: Json) -> Result<Self, TerraformError> {
        let Json::Object(entries) = doc else {
            return Err(TerraformError::OutputType {
                name: "<document>".into(),
                expected: "object",
            });
        };

        let mut values = serde_json::Map::new();
        for (name, entry) in entries {
            let value = match entry {
                Json::Object(mut wrapped) => {
                    wrapped
                        .remove("value")
                        .ok_or_else(|| TerraformError::OutputMissing { name: name.clone() })?
                }
                // Already-unwrapped documents are accepted as-is.
                direct => direct,
            };
            values.insert(name, value);
        }
        Ok(Self(values))
    }

    /// A scalar string output; empty strings are an error.
    pub fn scalar(&self, name: &str) -> Result<String, TerraformError> {
        let value = self.require(name)?;
        let s = value.as_str().ok_or_else(|| TerraformError::OutputType {
            name: name.into(),
            expected: "string",
        })?;
        if s.is_empty() {
            return Err(TerraformError::OutputEmpty { name: name.into() });
        }
        Ok(s.to_string())
    }

    /// A list-of-strings output.
    pub fn list(&self, name: &str) -> Result<Vec<String>, TerraformError> {
        let value = self.require(name)?;
        let items = value.as_array().ok_or_else(|| TerraformError::OutputType {
            name: name.into(),
            expected: "list of strings",
        })?;
        items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| TerraformError::OutputType {
                        name: name.into(),
                        expected: "list of strings",
                    })
            })
            .collect()
    }

    /// A map-of-strings output (e.g. app name to target group ARN).
    pub fn map(&self, name: &str) -> Result<BTreeMap<String, String>, TerraformError> {
        let value = self.require(name)?;
        let entries = value.as_object().ok_or_else(|| TerraformError::OutputType {
            name: name.into(),
            expected: "map of strings",
        })?;
        entries
            .iter()
            .map(|(key, item)| {
                item.as_str()
                    .map(|s| (key.clone(), s.to_string()))
                    .ok_or_else(|| TerraformError::OutputType {
                        name: name.into(),
                        expected: "map of strings",
                    })
            })
            .collect()
    }

    fn require(&self, name: &str) -> Result<&Json, TerraformError> {
        self.0
            .get(name)
            .ok_or_else(|| TerraformError::OutputMissing { name: name.into() })
    }
}
