use async_trait::async_trait;

use crate::{Outputs, TerraformError, TerraformOptions};

/// The contract scenarios depend on: a working directory plus a
/// variable/environment bag in, `init`/`apply`/`destroy` and output
/// retrieval out.
///
/// Implemented by the [`crate::Terraform`] CLI runner; tests substitute
/// a recording fake to verify orchestration (notably LIFO teardown)
/// without provisioning anything.
#[async_trait]
pub trait Provision: Send + Sync {
    async fn init(&self, opts: &TerraformOptions) -> Result<(), TerraformError>;

    async fn apply(&self, opts: &TerraformOptions) -> Result<(), TerraformError>;

    async fn destroy(&self, opts: &TerraformOptions) -> Result<(), TerraformError>;

    async fn outputs(&self, opts: &TerraformOptions) -> Result<Outputs, TerraformError>;

    /// `init` followed by `apply`, the standard provisioning step.
    async fn init_and_apply(&self, opts: &TerraformOptions) -> Result<(), TerraformError> {
        self.init(opts).await?;
        self.apply(opts).await
    }
}
