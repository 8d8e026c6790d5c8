use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error, info};

use crate::{Outputs, Provision, TerraformError, TerraformOptions};

/// Log lines longer than this are truncated before being emitted.
const MAX_LOG_LINE: usize = 4096;

/// Drives the `terraform` binary (or a compatible one such as `tofu`)
/// for one module directory per invocation.
///
/// The runner owns no state: every operation receives the full
/// [`TerraformOptions`] and runs to completion before returning, so a
/// scenario's steps stay strictly sequential. Cancellation and timeouts
/// belong to the outer test harness.
#[derive(Debug, Clone)]
pub struct Terraform {
    binary: String,
}

impl Terraform {
    /// Create a runner for the `terraform` binary on `PATH`.
    pub fn new() -> Self {
        Self {
            binary: "terraform".to_string(),
        }
    }

    /// Create a runner for a compatible binary (e.g. `tofu`).
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    async fn run(
        &self,
        op: &'static str,
        args: &[String],
        opts: &TerraformOptions,
    ) -> Result<std::process::Output, TerraformError> {
        opts.validate()?;

        info!(
            op,
            dir = %opts.dir().display(),
            vars = opts.vars().len(),
            "running terraform",
        );

        let mut cmd = Command::new(&self.binary);
        cmd.args(args);
        cmd.current_dir(opts.dir());
        for (key, value) in opts.env().iter() {
            cmd.env(key, value);
        }
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let output = cmd
            .output()
            .await
            .map_err(|source| TerraformError::Spawn { op, source })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            debug!(op, "{}", truncate(line));
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            error!(op, dir = %opts.dir().display(), status = %output.status, "terraform failed");
            return Err(TerraformError::CommandFailed {
                op,
                status: output.status.to_string(),
                stderr,
            });
        }
        Ok(output)
    }

    fn apply_args(op: &str, opts: &TerraformOptions) -> Vec<String> {
        let mut args: Vec<String> = vec![
            op.to_string(),
            "-auto-approve".to_string(),
            "-no-color".to_string(),
            "-input=false".to_string(),
        ];
        args.extend(opts.vars().to_cli_args());
        args
    }
}

impl Default for Terraform {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provision for Terraform {
    async fn init(&self, opts: &TerraformOptions) -> Result<(), TerraformError> {
        let args = vec![
            "init".to_string(),
            "-no-color".to_string(),
            "-input=false".to_string(),
        ];
        self.run("init", &args, opts).await?;
        Ok(())
    }

    async fn apply(&self, opts: &TerraformOptions) -> Result<(), TerraformError> {
        let args = Self::apply_args("apply", opts);
        self.run("apply", &args, opts).await?;
        Ok(())
    }

    async fn destroy(&self, opts: &TerraformOptions) -> Result<(), TerraformError> {
        // Destroy receives the same variable bag as apply; modules with
        // required variables refuse to plan without it.
        let args = Self::apply_args("destroy", opts);
        self.run("destroy", &args, opts).await?;
        Ok(())
    }

    async fn outputs(&self, opts: &TerraformOptions) -> Result<Outputs, TerraformError> {
        let args = vec![
            "output".to_string(),
            "-json".to_string(),
            "-no-color".to_string(),
        ];
        let output = self.run("output", &args, opts).await?;
        let doc = serde_json::from_slice(&output.stdout)?;
        Outputs::from_json(doc)
    }
}

fn truncate(line: &str) -> &str {
    match line.char_indices().nth(MAX_LOG_LINE) {
        Some((idx, _)) => &line[..idx],
        None => line,
    }
}
