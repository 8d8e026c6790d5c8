use aws_sdk_elasticloadbalancingv2::error::DisplayErrorContext;
use aws_sdk_elasticloadbalancingv2::types::{Listener, LoadBalancer, ProtocolEnum, Rule, TargetGroup};
use tfx_model::TagSet;

use crate::error::exactly_one;
use crate::tags::elb_tags;
use crate::{AwsClients, AwsError};

impl AwsClients {
    /// The load balancer with the given name; exactly one must exist.
    pub async fn load_balancer_by_name(&self, name: &str) -> Result<LoadBalancer, AwsError> {
        let out = self
            .elbv2
            .describe_load_balancers()
            .names(name)
            .send()
            .await
            .map_err(|e| AwsError::api("DescribeLoadBalancers", DisplayErrorContext(&e)))?;
        exactly_one(out.load_balancers.unwrap_or_default(), "load balancer", name)
    }

    /// Tags attached to a load balancer (or any ELBv2 resource) ARN.
    pub async fn load_balancer_tags(&self, arn: &str) -> Result<TagSet, AwsError> {
        let out = self
            .elbv2
            .describe_tags()
            .resource_arns(arn)
            .send()
            .await
            .map_err(|e| AwsError::api("DescribeTags", DisplayErrorContext(&e)))?;
        let description = exactly_one(
            out.tag_descriptions.unwrap_or_default(),
            "tag description",
            arn,
        )?;
        Ok(elb_tags(description.tags()))
    }

    /// The target group with the given ARN; exactly one must exist.
    pub async fn target_group_by_arn(&self, arn: &str) -> Result<TargetGroup, AwsError> {
        let out = self
            .elbv2
            .describe_target_groups()
            .target_group_arns(arn)
            .send()
            .await
            .map_err(|e| AwsError::api("DescribeTargetGroups", DisplayErrorContext(&e)))?;
        exactly_one(out.target_groups.unwrap_or_default(), "target group", arn)
    }

    /// The HTTPS listener of a load balancer.
    pub async fn https_listener(&self, load_balancer_arn: &str) -> Result<Listener, AwsError> {
        let out = self
            .elbv2
            .describe_listeners()
            .load_balancer_arn(load_balancer_arn)
            .send()
            .await
            .map_err(|e| AwsError::api("DescribeListeners", DisplayErrorContext(&e)))?;
        out.listeners
            .unwrap_or_default()
            .into_iter()
            .find(|listener| listener.protocol() == Some(&ProtocolEnum::Https))
            .ok_or_else(|| AwsError::NotFound {
                what: "HTTPS listener",
                id: load_balancer_arn.to_string(),
            })
    }

    /// All rules attached to a listener.
    pub async fn listener_rules(&self, listener_arn: &str) -> Result<Vec<Rule>, AwsError> {
        let out = self
            .elbv2
            .describe_rules()
            .listener_arn(listener_arn)
            .send()
            .await
            .map_err(|e| AwsError::api("DescribeRules", DisplayErrorContext(&e)))?;
        Ok(out.rules.unwrap_or_default())
    }
}
