use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AwsError {
    #[error("{call} failed: {message}")]
    Api { call: &'static str, message: String },

    #[error("expected exactly one {what} for '{id}', found {found}")]
    NotExactlyOne {
        what: &'static str,
        id: String,
        found: usize,
    },

    #[error("no {what} found for '{id}'")]
    NotFound { what: &'static str, id: String },

    #[error("{call} response missing field '{field}'")]
    MissingField {
        call: &'static str,
        field: &'static str,
    },
}

impl AwsError {
    /// Wrap an SDK error with the name of the API call that produced it.
    pub(crate) fn api(call: &'static str, err: impl fmt::Display) -> Self {
        AwsError::Api {
            call,
            message: err.to_string(),
        }
    }
}

/// Enforce exactly-one cardinality on a describe result.
pub(crate) fn exactly_one<T>(
    mut items: Vec<T>,
    what: &'static str,
    id: &str,
) -> Result<T, AwsError> {
    if items.len() != 1 {
        return Err(AwsError::NotExactlyOne {
            what,
            id: id.to_string(),
            found: items.len(),
        });
    }
    Ok(items.remove(0))
}
