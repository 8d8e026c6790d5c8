use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("duplicate routing priority {priority}: app '{app}' collides with '{existing}'")]
    DuplicatePriority {
        priority: u32,
        app: String,
        existing: String,
    },

    #[error("duplicate app name: '{0}'")]
    DuplicateApp(String),

    #[error("empty field '{field}' in app '{app}'")]
    EmptyField { field: &'static str, app: String },
}
