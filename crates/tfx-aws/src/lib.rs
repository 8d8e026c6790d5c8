//! Read-only describe layer over the AWS control-plane APIs.
//!
//! Every query here is a describe/list call; nothing in this crate
//! writes cloud state. Queries that identify a single resource enforce
//! exactly-one cardinality so assertion failures name the resource
//! instead of panicking on an empty slice.

mod client;
pub use client::AwsClients;

mod error;
pub use error::AwsError;

mod tags;
pub use tags::{asg_tags, ec2_tags, elb_tags};

mod asg;
mod ec2;
mod elbv2;
mod iam;
