use aws_sdk_iam::error::DisplayErrorContext;

use crate::{AwsClients, AwsError};

impl AwsClients {
    /// The trust (assume-role) policy document of a role.
    ///
    /// Returned as the raw URL-encoded JSON the API hands back; service
    /// principals like `ec2.amazonaws.com` survive the encoding intact,
    /// so substring assertions on them are safe.
    pub async fn role_trust_policy(&self, role_name: &str) -> Result<String, AwsError> {
        let out = self
            .iam
            .get_role()
            .role_name(role_name)
            .send()
            .await
            .map_err(|e| AwsError::api("GetRole", DisplayErrorContext(&e)))?;
        let role = out.role.ok_or(AwsError::MissingField {
            call: "GetRole",
            field: "Role",
        })?;
        role.assume_role_policy_document
            .ok_or(AwsError::MissingField {
                call: "GetRole",
                field: "AssumeRolePolicyDocument",
            })
    }

    /// ARNs of the managed policies attached to a role.
    pub async fn attached_policy_arns(&self, role_name: &str) -> Result<Vec<String>, AwsError> {
        let out = self
            .iam
            .list_attached_role_policies()
            .role_name(role_name)
            .send()
            .await
            .map_err(|e| AwsError::api("ListAttachedRolePolicies", DisplayErrorContext(&e)))?;
        Ok(out
            .attached_policies
            .unwrap_or_default()
            .into_iter()
            .filter_map(|policy| policy.policy_arn)
            .collect())
    }
}
