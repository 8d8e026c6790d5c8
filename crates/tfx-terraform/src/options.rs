use std::{
    fmt,
    path::{Path, PathBuf},
};

use tfx_model::{EnvVars, VarValue, Vars};

use crate::TerraformError;

/// Everything one module invocation needs: the module directory, the
/// variable bag, and the process environment.
///
/// Ephemeral: built per scenario case, cloned into the deploy stack for
/// teardown, and consumed read-only by every operation.
#[derive(Debug, Clone)]
pub struct TerraformOptions {
    dir: PathBuf,
    vars: Vars,
    env: EnvVars,
}

impl TerraformOptions {
    /// Create options for a module directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            vars: Vars::new(),
            env: EnvVars::new(),
        }
    }

    /// Append one variable. Builder-style helper.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<VarValue>) -> Self {
        self.vars.push(key, value);
        self
    }

    /// Append one environment variable. Builder-style helper.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push(key, value);
        self
    }

    /// Module directory the CLI runs in.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Variable bag.
    pub fn vars(&self) -> &Vars {
        &self.vars
    }

    /// Process environment for the CLI.
    pub fn env(&self) -> &EnvVars {
        &self.env
    }

    /// Validate the options before running any operation.
    ///
    /// Rules:
    /// - the module directory path is not empty.
    pub fn validate(&self) -> Result<(), TerraformError> {
        if self.dir.as_os_str().is_empty() {
            return Err(TerraformError::InvalidOptions(
                "module directory is empty".into(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for TerraformOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TerraformOptions(dir='{}', vars={}, env={})",
            self.dir.display(),
            self.vars.len(),
            self.env.len(),
        )
    }
}
