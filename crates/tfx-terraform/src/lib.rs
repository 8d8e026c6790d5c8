//! Provisioning interface: drives `terraform init/apply/destroy` for a
//! module directory and decodes its outputs.
//!
//! Scenarios depend on the [`Provision`] trait, not on the CLI runner,
//! so teardown ordering can be exercised without touching a cloud
//! account.

mod error;
pub use error::TerraformError;

mod options;
pub use options::TerraformOptions;

mod outputs;
pub use outputs::Outputs;

mod provision;
pub use provision::Provision;

mod runner;
pub use runner::Terraform;

mod stack;
pub use stack::{DeployStack, Deployment, run_scenario};

mod stage;
pub use stage::StagedModule;
