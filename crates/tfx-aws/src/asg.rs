use aws_sdk_autoscaling::error::DisplayErrorContext;
use aws_sdk_autoscaling::types::AutoScalingGroup;

use crate::error::exactly_one;
use crate::{AwsClients, AwsError};

impl AwsClients {
    /// The auto-scaling group with the given name; exactly one must exist.
    pub async fn auto_scaling_group_by_name(
        &self,
        name: &str,
    ) -> Result<AutoScalingGroup, AwsError> {
        let out = self
            .autoscaling
            .describe_auto_scaling_groups()
            .auto_scaling_group_names(name)
            .send()
            .await
            .map_err(|e| AwsError::api("DescribeAutoScalingGroups", DisplayErrorContext(&e)))?;
        exactly_one(
            out.auto_scaling_groups.unwrap_or_default(),
            "auto-scaling group",
            name,
        )
    }
}
