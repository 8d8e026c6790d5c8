//! Scaffolding shared by the acceptance scenarios: module option
//! builders, unique naming, logging setup, and the opt-in gate for
//! tests that provision real cloud resources.

mod builders;
pub use builders::{
    ComputeInputs, DEFAULT_INSTANCE_COUNT, DEFAULT_INSTANCE_TYPE, DEFAULT_VPC_CIDR, alb_options,
    certificate_arn, complete_options, compute_options, default_apps, example_dir, module_dir,
    required_tags, vpc_options,
};

mod logging;
pub use logging::init_logging;

mod naming;
pub use naming::unique_project_name;

/// Whether acceptance tests that touch a real AWS account should run.
///
/// Requires explicit opt-in via `TFX_ACCEPTANCE=1`, or a CI environment.
pub fn acceptance_enabled() -> bool {
    std::env::var("TFX_ACCEPTANCE").is_ok() || std::env::var("CI").is_ok()
}
