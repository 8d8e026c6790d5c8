use std::path::{Path, PathBuf};

use tfx_model::{AppSet, AppSpec, Environment, ModelError, TagSet};
use tfx_terraform::TerraformOptions;

/// Canonical default network CIDR; per-case CIDRs are explicit inputs.
pub const DEFAULT_VPC_CIDR: &str = "10.0.0.0/16";

/// Instance type the compute scenarios provision.
pub const DEFAULT_INSTANCE_TYPE: &str = "t3.micro";

/// Desired capacity the compute scenarios request.
pub const DEFAULT_INSTANCE_COUNT: i64 = 2;

/// Placeholder listener certificate; real runs must point
/// `TFX_CERTIFICATE_ARN` at an issued certificate in the target account.
const FALLBACK_CERTIFICATE_ARN: &str =
    "arn:aws:acm:us-east-1:000000000000:certificate/00000000-0000-0000-0000-000000000000";

/// The HTTPS listener certificate ARN for this run.
pub fn certificate_arn() -> String {
    std::env::var("TFX_CERTIFICATE_ARN").unwrap_or_else(|_| FALLBACK_CERTIFICATE_ARN.to_string())
}

/// Directory of an infrastructure module, under `TFX_MODULES_DIR`
/// (default `../modules`).
pub fn module_dir(name: &str) -> PathBuf {
    let root = std::env::var("TFX_MODULES_DIR").unwrap_or_else(|_| "../modules".to_string());
    Path::new(&root).join(name)
}

/// Directory of a composed example, under `TFX_EXAMPLES_DIR`
/// (default `../examples`).
pub fn example_dir(name: &str) -> PathBuf {
    let root = std::env::var("TFX_EXAMPLES_DIR").unwrap_or_else(|_| "../examples".to_string());
    Path::new(&root).join(name)
}

/// The tag subset every provisioned resource must carry.
pub fn required_tags(environment: &Environment, project: &str) -> TagSet {
    [
        ("Environment", environment.as_str()),
        ("Project", project),
        ("ManagedBy", "terraform"),
    ]
    .into_iter()
    .collect()
}

/// The fixed two-application listener configuration: distinct ports,
/// path patterns, health-check paths, and routing priorities.
pub fn default_apps(domain: &str) -> Result<AppSet, ModelError> {
    AppSet::new()
        .with(AppSpec::new("app1", 8085, "/app1/*", "/app1/status", 100).with_domain(domain))?
        .with(AppSpec::new("app2", 8086, "/app2/*", "/app2/status", 200).with_domain(domain))
}

/// Variable bag for the network module.
///
/// The module itself derives the rest of the default topology from
/// these inputs: 3 availability zones, the /16 split into private and
/// public /24s, and NAT gateways per [`Environment::nat_gateway_count`].
pub fn vpc_options(
    dir: impl Into<PathBuf>,
    region: &str,
    environment: &Environment,
    project: &str,
    vpc_cidr: &str,
) -> TerraformOptions {
    TerraformOptions::new(dir)
        .with_var("region", region)
        .with_var("environment", environment.as_str())
        .with_var("project_name", project)
        .with_var("vpc_cidr", vpc_cidr)
        .with_env("AWS_DEFAULT_REGION", region)
}

/// Variable bag for the load-balancer module, chaining the network
/// module's outputs into its inputs.
pub fn alb_options(
    dir: impl Into<PathBuf>,
    region: &str,
    environment: &Environment,
    project: &str,
    vpc_id: &str,
    public_subnets: Vec<String>,
    certificate_arn: &str,
    apps: &AppSet,
) -> TerraformOptions {
    TerraformOptions::new(dir)
        .with_var("environment", environment.as_str())
        .with_var("project_name", project)
        .with_var("vpc_id", vpc_id)
        .with_var("public_subnets", public_subnets)
        .with_var("certificate_arn", certificate_arn)
        .with_var("apps", apps.to_var())
        .with_env("AWS_DEFAULT_REGION", region)
}

/// Outputs of the network and load-balancer stages the compute module
/// consumes.
pub struct ComputeInputs {
    pub vpc_id: String,
    pub private_subnets: Vec<String>,
    pub target_group_arns: Vec<String>,
    pub alb_security_group_id: String,
}

/// Variable bag for the compute module.
pub fn compute_options(
    dir: impl Into<PathBuf>,
    region: &str,
    environment: &Environment,
    project: &str,
    inputs: ComputeInputs,
    apps: &AppSet,
) -> TerraformOptions {
    TerraformOptions::new(dir)
        .with_var("environment", environment.as_str())
        .with_var("project_name", project)
        .with_var("vpc_id", inputs.vpc_id)
        .with_var("private_subnets", inputs.private_subnets)
        .with_var("instance_type", DEFAULT_INSTANCE_TYPE)
        .with_var("instance_count", DEFAULT_INSTANCE_COUNT)
        .with_var("apps", apps.to_var())
        .with_var("target_group_arns", inputs.target_group_arns)
        .with_var("alb_security_group_id", inputs.alb_security_group_id)
        .with_env("AWS_DEFAULT_REGION", region)
}

/// Variable bag for the composed end-to-end example.
pub fn complete_options(
    dir: impl Into<PathBuf>,
    region: &str,
    environment: &Environment,
    project: &str,
) -> TerraformOptions {
    TerraformOptions::new(dir)
        .with_var("environment", environment.as_str())
        .with_var("project_name", project)
        .with_env("AWS_DEFAULT_REGION", region)
}
