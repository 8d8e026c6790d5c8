use tfx_model::TagSet;

/// Convert EC2 tags into a [`TagSet`].
///
/// Entries with a missing key are dropped; a missing value becomes the
/// empty string.
pub fn ec2_tags(tags: &[aws_sdk_ec2::types::Tag]) -> TagSet {
    tags.iter()
        .filter_map(|tag| {
            tag.key()
                .map(|key| (key.to_string(), tag.value().unwrap_or_default().to_string()))
        })
        .collect()
}

/// Convert ELBv2 tags into a [`TagSet`].
pub fn elb_tags(tags: &[aws_sdk_elasticloadbalancingv2::types::Tag]) -> TagSet {
    tags.iter()
        .map(|tag| (tag.key().to_string(), tag.value().unwrap_or_default().to_string()))
        .collect()
}

/// Convert Auto Scaling tag descriptions into a [`TagSet`].
pub fn asg_tags(tags: &[aws_sdk_autoscaling::types::TagDescription]) -> TagSet {
    tags.iter()
        .filter_map(|tag| {
            tag.key()
                .map(|key| (key.to_string(), tag.value().unwrap_or_default().to_string()))
        })
        .collect()
}
