use aws_sdk_ec2::error::DisplayErrorContext;
use aws_sdk_ec2::types::{
    FlowLog, Instance, LaunchTemplateVersion, NatGateway, SecurityGroup, Subnet, Vpc,
    VpcAttributeName,
};

use crate::error::exactly_one;
use crate::{AwsClients, AwsError};

fn filter(name: &str, value: &str) -> aws_sdk_ec2::types::Filter {
    aws_sdk_ec2::types::Filter::builder()
        .name(name)
        .values(value)
        .build()
}

impl AwsClients {
    /// The VPC with the given id; exactly one must exist.
    pub async fn vpc_by_id(&self, vpc_id: &str) -> Result<Vpc, AwsError> {
        let out = self
            .ec2
            .describe_vpcs()
            .vpc_ids(vpc_id)
            .send()
            .await
            .map_err(|e| AwsError::api("DescribeVpcs", DisplayErrorContext(&e)))?;
        exactly_one(out.vpcs.unwrap_or_default(), "vpc", vpc_id)
    }

    /// All subnets with the given ids.
    pub async fn subnets_by_ids(&self, subnet_ids: &[String]) -> Result<Vec<Subnet>, AwsError> {
        let out = self
            .ec2
            .describe_subnets()
            .set_subnet_ids(Some(subnet_ids.to_vec()))
            .send()
            .await
            .map_err(|e| AwsError::api("DescribeSubnets", DisplayErrorContext(&e)))?;
        Ok(out.subnets.unwrap_or_default())
    }

    /// NAT gateways attached to a VPC.
    pub async fn nat_gateways_in_vpc(&self, vpc_id: &str) -> Result<Vec<NatGateway>, AwsError> {
        let out = self
            .ec2
            .describe_nat_gateways()
            .filter(filter("vpc-id", vpc_id))
            .send()
            .await
            .map_err(|e| AwsError::api("DescribeNatGateways", DisplayErrorContext(&e)))?;
        Ok(out.nat_gateways.unwrap_or_default())
    }

    /// Whether the VPC has DNS support enabled.
    pub async fn vpc_dns_support_enabled(&self, vpc_id: &str) -> Result<bool, AwsError> {
        let out = self
            .ec2
            .describe_vpc_attribute()
            .vpc_id(vpc_id)
            .attribute(VpcAttributeName::EnableDnsSupport)
            .send()
            .await
            .map_err(|e| AwsError::api("DescribeVpcAttribute", DisplayErrorContext(&e)))?;
        out.enable_dns_support()
            .and_then(|attr| attr.value())
            .ok_or(AwsError::MissingField {
                call: "DescribeVpcAttribute",
                field: "EnableDnsSupport",
            })
    }

    /// Whether the VPC has DNS hostnames enabled.
    pub async fn vpc_dns_hostnames_enabled(&self, vpc_id: &str) -> Result<bool, AwsError> {
        let out = self
            .ec2
            .describe_vpc_attribute()
            .vpc_id(vpc_id)
            .attribute(VpcAttributeName::EnableDnsHostnames)
            .send()
            .await
            .map_err(|e| AwsError::api("DescribeVpcAttribute", DisplayErrorContext(&e)))?;
        out.enable_dns_hostnames()
            .and_then(|attr| attr.value())
            .ok_or(AwsError::MissingField {
                call: "DescribeVpcAttribute",
                field: "EnableDnsHostnames",
            })
    }

    /// Flow logs configured for a resource (VPC, subnet, or ENI).
    pub async fn flow_logs_for(&self, resource_id: &str) -> Result<Vec<FlowLog>, AwsError> {
        let out = self
            .ec2
            .describe_flow_logs()
            .filter(filter("resource-id", resource_id))
            .send()
            .await
            .map_err(|e| AwsError::api("DescribeFlowLogs", DisplayErrorContext(&e)))?;
        Ok(out.flow_logs.unwrap_or_default())
    }

    /// The security group with the given id; exactly one must exist.
    pub async fn security_group_by_id(&self, group_id: &str) -> Result<SecurityGroup, AwsError> {
        let out = self
            .ec2
            .describe_security_groups()
            .group_ids(group_id)
            .send()
            .await
            .map_err(|e| AwsError::api("DescribeSecurityGroups", DisplayErrorContext(&e)))?;
        exactly_one(
            out.security_groups.unwrap_or_default(),
            "security group",
            group_id,
        )
    }

    /// The `$Latest` version of a launch template; the template itself
    /// must exist, and exactly one latest version is returned.
    pub async fn latest_launch_template_version(
        &self,
        template_id: &str,
    ) -> Result<LaunchTemplateVersion, AwsError> {
        let templates = self
            .ec2
            .describe_launch_templates()
            .launch_template_ids(template_id)
            .send()
            .await
            .map_err(|e| AwsError::api("DescribeLaunchTemplates", DisplayErrorContext(&e)))?;
        exactly_one(
            templates.launch_templates.unwrap_or_default(),
            "launch template",
            template_id,
        )?;

        let versions = self
            .ec2
            .describe_launch_template_versions()
            .launch_template_id(template_id)
            .versions("$Latest")
            .send()
            .await
            .map_err(|e| {
                AwsError::api("DescribeLaunchTemplateVersions", DisplayErrorContext(&e))
            })?;
        exactly_one(
            versions.launch_template_versions.unwrap_or_default(),
            "launch template version",
            template_id,
        )
    }

    /// Instances in the `running` state inside a VPC.
    pub async fn running_instances_in_vpc(&self, vpc_id: &str) -> Result<Vec<Instance>, AwsError> {
        let out = self
            .ec2
            .describe_instances()
            .filters(filter("vpc-id", vpc_id))
            .filters(filter("instance-state-name", "running"))
            .send()
            .await
            .map_err(|e| AwsError::api("DescribeInstances", DisplayErrorContext(&e)))?;
        Ok(out
            .reservations
            .unwrap_or_default()
            .into_iter()
            .flat_map(|r| r.instances.unwrap_or_default())
            .collect())
    }
}
