use aws_config::{BehaviorVersion, Region};
use tracing::debug;

/// Regional API clients built from one shared credential/config load.
///
/// Credentials come from the default provider chain (environment,
/// profile, instance metadata); only the region is pinned per instance.
pub struct AwsClients {
    pub(crate) ec2: aws_sdk_ec2::Client,
    pub(crate) elbv2: aws_sdk_elasticloadbalancingv2::Client,
    pub(crate) autoscaling: aws_sdk_autoscaling::Client,
    pub(crate) iam: aws_sdk_iam::Client,
}

impl AwsClients {
    /// Build all service clients for the given region.
    pub async fn for_region(region: impl Into<String>) -> Self {
        let region = region.into();
        debug!(%region, "loading AWS config");

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region))
            .load()
            .await;

        Self {
            ec2: aws_sdk_ec2::Client::new(&config),
            elbv2: aws_sdk_elasticloadbalancingv2::Client::new(&config),
            autoscaling: aws_sdk_autoscaling::Client::new(&config),
            iam: aws_sdk_iam::Client::new(&config),
        }
    }
}
