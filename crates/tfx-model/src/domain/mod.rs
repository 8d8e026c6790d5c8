mod app;
mod env;
mod environment;
mod tags;
mod vars;

pub use app::{AppSet, AppSpec};
pub use env::EnvVars;
pub use environment::Environment;
pub use tags::TagSet;
pub use vars::{VarValue, Vars};
