use thiserror::Error;

#[derive(Debug, Error)]
pub enum TerraformError {
    #[error("terraform {op} failed ({status}): {stderr}")]
    CommandFailed {
        op: &'static str,
        status: String,
        stderr: String,
    },

    #[error("failed to run terraform {op}: {source}")]
    Spawn {
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("failed to decode terraform outputs: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("output '{name}' is missing")]
    OutputMissing { name: String },

    #[error("output '{name}' is empty")]
    OutputEmpty { name: String },

    #[error("output '{name}' is not a {expected}")]
    OutputType {
        name: String,
        expected: &'static str,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
