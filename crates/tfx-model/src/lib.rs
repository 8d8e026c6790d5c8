mod domain;
pub use domain::{AppSet, AppSpec, EnvVars, Environment, TagSet, VarValue, Vars};

mod error;
pub use error::ModelError;
