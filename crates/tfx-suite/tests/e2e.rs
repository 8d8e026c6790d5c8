//! End-to-end acceptance: applies the composed `complete` example (all
//! three modules wired together) and checks the stack converges to
//! running instances.
//!
//! Opt-in: set `TFX_ACCEPTANCE=1` and run with `--ignored`.

use std::sync::Arc;
use std::time::Duration;

use tfx_aws::AwsClients;
use tfx_model::Environment;
use tfx_suite::{
    acceptance_enabled, complete_options, example_dir, init_logging, unique_project_name,
};
use tfx_terraform::{Terraform, run_scenario};

/// How long to wait for the auto-scaling group to launch instances.
const CONVERGENCE_WAIT: Duration = Duration::from_secs(120);

#[tokio::test(flavor = "multi_thread")]
#[ignore = "provisions real AWS resources"]
async fn complete_example_us_east_1() {
    init_logging();
    if !acceptance_enabled() {
        eprintln!("skipping: acceptance runs are opt-in (TFX_ACCEPTANCE=1)");
        return;
    }

    let region = "us-east-1";
    let environment = Environment::new("test");
    let project = unique_project_name("e2e");

    // The example references the modules by relative path, so it runs in
    // place instead of being staged to a temp dir.
    let opts = complete_options(example_dir("complete"), region, &environment, &project);
    let aws = Arc::new(AwsClients::for_region(region).await);

    run_scenario(Arc::new(Terraform::new()), |stack| async move {
        let deployment = stack.apply(opts).await.expect("complete apply");
        let outputs = deployment.outputs().await.expect("complete outputs");

        let vpc_id = outputs.scalar("vpc_id").expect("vpc_id");
        let lt_id = outputs.scalar("launch_template_id").expect("launch_template_id");
        let asg_name = outputs
            .scalar("autoscaling_group_name")
            .expect("autoscaling_group_name");

        aws.vpc_by_id(&vpc_id).await.expect("vpc exists");
        aws.latest_launch_template_version(&lt_id)
            .await
            .expect("launch template exists");
        aws.auto_scaling_group_by_name(&asg_name)
            .await
            .expect("auto-scaling group exists");

        tokio::time::sleep(CONVERGENCE_WAIT).await;

        let instances = aws
            .running_instances_in_vpc(&vpc_id)
            .await
            .expect("describe instances");
        assert!(
            !instances.is_empty(),
            "auto-scaling group launched no running instances",
        );
    })
    .await;
}
