use serde_json::Value as Json;

/// A single Terraform variable value.
///
/// Maps are kept as ordered pair lists so a bag renders in the order it
/// was built, which keeps CLI invocations reproducible.
#[derive(Debug, Clone, PartialEq)]
pub enum VarValue {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<VarValue>),
    Map(Vec<(String, VarValue)>),
}

impl VarValue {
    /// Render the value for use on the command line after `key=`.
    ///
    /// Top-level strings are passed raw (the variable's declared type
    /// does the interpretation). Everything else is rendered as JSON,
    /// which HCL2 accepts as expression syntax for `-var`.
    pub fn render(&self) -> String {
        match self {
            VarValue::Str(s) => s.clone(),
            other => other.to_json().to_string(),
        }
    }

    fn to_json(&self) -> Json {
        match self {
            VarValue::Str(s) => Json::String(s.clone()),
            VarValue::Int(i) => Json::Number((*i).into()),
            VarValue::Bool(b) => Json::Bool(*b),
            VarValue::List(items) => Json::Array(items.iter().map(VarValue::to_json).collect()),
            VarValue::Map(entries) => Json::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for VarValue {
    fn from(value: &str) -> Self {
        VarValue::Str(value.to_string())
    }
}

impl From<String> for VarValue {
    fn from(value: String) -> Self {
        VarValue::Str(value)
    }
}

impl From<i64> for VarValue {
    fn from(value: i64) -> Self {
        VarValue::Int(value)
    }
}

impl From<u16> for VarValue {
    fn from(value: u16) -> Self {
        VarValue::Int(i64::from(value))
    }
}

impl From<u32> for VarValue {
    fn from(value: u32) -> Self {
        VarValue::Int(i64::from(value))
    }
}

impl From<bool> for VarValue {
    fn from(value: bool) -> Self {
        VarValue::Bool(value)
    }
}

impl From<Vec<String>> for VarValue {
    fn from(value: Vec<String>) -> Self {
        VarValue::List(value.into_iter().map(VarValue::Str).collect())
    }
}

impl From<&[String]> for VarValue {
    fn from(value: &[String]) -> Self {
        VarValue::List(value.iter().cloned().map(VarValue::Str).collect())
    }
}

/// Ordered variable bag for one module invocation.
///
/// Ephemeral: built per scenario case and consumed by the provisioning
/// step. Keys are rendered in insertion order.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Vars(pub Vec<(String, VarValue)>);

impl Vars {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a variable.
    pub fn push<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<VarValue>,
    {
        self.0.push((key.into(), value.into()));
    }

    /// Get the value for a key, returning the last matching entry.
    pub fn get(&self, key: &str) -> Option<&VarValue> {
        self.0.iter().rev().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterate over all variables in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VarValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render the bag as a flat `-var key=value` argument list.
    pub fn to_cli_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.0.len() * 2);
        for (key, value) in &self.0 {
            args.push("-var".to_string());
            args.push(format!("{}={}", key, value.render()));
        }
        args
    }
}
