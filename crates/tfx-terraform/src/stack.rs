use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::{Arc, Mutex};

use futures::FutureExt;
use tracing::{debug, error, info};

use crate::{Outputs, Provision, TerraformError, TerraformOptions};

/// Tracks every module applied during a scenario so all of them are
/// destroyed when the scenario ends, in reverse order of application.
///
/// Options are recorded *before* `apply` runs: a failed apply can still
/// leave partially-created resources behind, and those must be torn
/// down too. For a VPC → ALB → compute chain this yields the required
/// LIFO destroy order (compute first, VPC last) — destroying a VPC
/// before its dependents would fail.
pub struct DeployStack<P: Provision> {
    provisioner: Arc<P>,
    applied: Mutex<Vec<TerraformOptions>>,
}

impl<P: Provision> DeployStack<P> {
    /// Create an empty stack backed by the given provisioner.
    pub fn new(provisioner: Arc<P>) -> Self {
        Self {
            provisioner,
            applied: Mutex::new(Vec::new()),
        }
    }

    /// Schedule teardown for `opts`, then run `init` and `apply`.
    ///
    /// Returns a [`Deployment`] handle for reading the module's outputs.
    pub async fn apply(&self, opts: TerraformOptions) -> Result<Deployment<P>, TerraformError> {
        opts.validate()?;
        self.applied
            .lock()
            .expect("deploy stack lock poisoned")
            .push(opts.clone());

        self.provisioner.init_and_apply(&opts).await?;
        debug!(dir = %opts.dir().display(), "module applied");

        Ok(Deployment {
            provisioner: Arc::clone(&self.provisioner),
            options: opts,
        })
    }

    /// Destroy every recorded module in LIFO order.
    ///
    /// A failed destroy is logged and does not stop the remaining
    /// entries from being attempted; the first error is returned once
    /// all entries have been processed.
    pub async fn teardown(&self) -> Result<(), TerraformError> {
        let mut entries = {
            let mut guard = self.applied.lock().expect("deploy stack lock poisoned");
            std::mem::take(&mut *guard)
        };

        let mut first_err = None;
        while let Some(opts) = entries.pop() {
            info!(dir = %opts.dir().display(), "destroying module");
            if let Err(err) = self.provisioner.destroy(&opts).await {
                error!(dir = %opts.dir().display(), %err, "destroy failed during teardown");
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Handle to one applied module; retrieves its outputs on demand.
pub struct Deployment<P: Provision> {
    provisioner: Arc<P>,
    options: TerraformOptions,
}

impl<P: Provision> Deployment<P> {
    /// Fetch and decode the module's full output document.
    pub async fn outputs(&self) -> Result<Outputs, TerraformError> {
        self.provisioner.outputs(&self.options).await
    }
}

/// Run a scenario body with guaranteed teardown.
///
/// The body receives a fresh [`DeployStack`]; whatever it applies is
/// destroyed after the body finishes — including when an assertion or
/// a provisioning step panics mid-scenario. The original panic is
/// resurfaced after teardown so the test still fails with the real
/// cause; a teardown failure on an otherwise green scenario fails the
/// test too.
pub async fn run_scenario<P, F, Fut>(provisioner: Arc<P>, body: F)
where
    P: Provision,
    F: FnOnce(Arc<DeployStack<P>>) -> Fut,
    Fut: Future<Output = ()>,
{
    let stack = Arc::new(DeployStack::new(provisioner));

    let outcome = AssertUnwindSafe(body(Arc::clone(&stack)))
        .catch_unwind()
        .await;
    let teardown = stack.teardown().await;

    if let Err(panic) = outcome {
        std::panic::resume_unwind(panic);
    }
    if let Err(err) = teardown {
        panic!("teardown failed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::json;

    use super::{DeployStack, run_scenario};
    use crate::{Outputs, Provision, TerraformError, TerraformOptions};

    /// Records every operation; optionally fails `apply` or `destroy`
    /// for chosen modules.
    struct FakeProvision {
        log: Mutex<Vec<String>>,
        fail_apply_for: Option<&'static str>,
        fail_destroy_for: &'static [&'static str],
    }

    impl FakeProvision {
        fn new() -> Self {
            Self {
                log: Mutex::new(Vec::new()),
                fail_apply_for: None,
                fail_destroy_for: &[],
            }
        }

        fn failing_apply_for(module: &'static str) -> Self {
            Self {
                fail_apply_for: Some(module),
                ..Self::new()
            }
        }

        fn failing_destroy_for(modules: &'static [&'static str]) -> Self {
            Self {
                fail_destroy_for: modules,
                ..Self::new()
            }
        }

        fn record(&self, op: &str, opts: &TerraformOptions) {
            let module = opts.dir().display().to_string();
            self.log.lock().unwrap().push(format!("{op} {module}"));
        }

        fn ops(&self) -> Vec<String> {
            self.log.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Provision for FakeProvision {
        async fn init(&self, opts: &TerraformOptions) -> Result<(), TerraformError> {
            self.record("init", opts);
            Ok(())
        }

        async fn apply(&self, opts: &TerraformOptions) -> Result<(), TerraformError> {
            self.record("apply", opts);
            if self.fail_apply_for == Some(opts.dir().to_str().unwrap()) {
                return Err(TerraformError::CommandFailed {
                    op: "apply",
                    status: "exit status: 1".into(),
                    stderr: "simulated apply failure".into(),
                });
            }
            Ok(())
        }

        async fn destroy(&self, opts: &TerraformOptions) -> Result<(), TerraformError> {
            self.record("destroy", opts);
            let module = opts.dir().to_str().unwrap();
            if self.fail_destroy_for.contains(&module) {
                return Err(TerraformError::CommandFailed {
                    op: "destroy",
                    status: "exit status: 1".into(),
                    stderr: format!("simulated destroy failure in {module}"),
                });
            }
            Ok(())
        }

        async fn outputs(&self, opts: &TerraformOptions) -> Result<Outputs, TerraformError> {
            self.record("output", opts);
            Outputs::from_json(json!({
                "vpc_id": { "value": "vpc-fake" }
            }))
        }
    }

    #[tokio::test]
    async fn teardown_destroys_in_reverse_apply_order() {
        let fake = Arc::new(FakeProvision::new());
        let stack = DeployStack::new(Arc::clone(&fake));

        for module in ["network", "load-balancer", "compute"] {
            stack
                .apply(TerraformOptions::new(module))
                .await
                .expect("apply should succeed");
        }
        stack.teardown().await.expect("teardown should succeed");

        let destroys: Vec<_> = fake
            .ops()
            .into_iter()
            .filter(|op| op.starts_with("destroy"))
            .collect();
        assert_eq!(
            destroys,
            vec![
                "destroy compute",
                "destroy load-balancer",
                "destroy network",
            ]
        );
    }

    #[tokio::test]
    async fn teardown_is_idempotent_once_drained() {
        let fake = Arc::new(FakeProvision::new());
        let stack = DeployStack::new(Arc::clone(&fake));

        stack
            .apply(TerraformOptions::new("network"))
            .await
            .expect("apply should succeed");
        stack.teardown().await.expect("first teardown");
        stack.teardown().await.expect("second teardown");

        let destroys = fake
            .ops()
            .into_iter()
            .filter(|op| op.starts_with("destroy"))
            .count();
        assert_eq!(destroys, 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn scenario_panic_still_tears_everything_down() {
        let fake = Arc::new(FakeProvision::new());
        let inner = Arc::clone(&fake);

        let scenario = tokio::spawn(run_scenario(inner, |stack| async move {
            stack
                .apply(TerraformOptions::new("network"))
                .await
                .expect("network apply");
            stack
                .apply(TerraformOptions::new("load-balancer"))
                .await
                .expect("lb apply");
            panic!("assertion failed: simulated validation mismatch");
        }));

        let join = scenario.await;
        assert!(join.is_err(), "the original panic must resurface");

        let destroys: Vec<_> = fake
            .ops()
            .into_iter()
            .filter(|op| op.starts_with("destroy"))
            .collect();
        assert_eq!(destroys, vec!["destroy load-balancer", "destroy network"]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn failed_apply_tears_down_itself_and_prior_modules() {
        let fake = Arc::new(FakeProvision::failing_apply_for("load-balancer"));
        let inner = Arc::clone(&fake);

        let scenario = tokio::spawn(run_scenario(inner, |stack| async move {
            stack
                .apply(TerraformOptions::new("network"))
                .await
                .expect("network apply");
            stack
                .apply(TerraformOptions::new("load-balancer"))
                .await
                .expect("lb apply");
        }));

        assert!(scenario.await.is_err());

        // The half-applied module is destroyed too, then its dependencies.
        let destroys: Vec<_> = fake
            .ops()
            .into_iter()
            .filter(|op| op.starts_with("destroy"))
            .collect();
        assert_eq!(destroys, vec!["destroy load-balancer", "destroy network"]);
    }

    #[tokio::test]
    async fn failed_destroy_still_attempts_remaining_modules() {
        let fake = Arc::new(FakeProvision::failing_destroy_for(&[
            "compute",
            "network",
        ]));
        let stack = DeployStack::new(Arc::clone(&fake));

        for module in ["network", "load-balancer", "compute"] {
            stack
                .apply(TerraformOptions::new(module))
                .await
                .expect("apply should succeed");
        }
        let err = stack.teardown().await.unwrap_err();

        // The first failure (compute, destroyed first) is the one returned.
        match err {
            TerraformError::CommandFailed { op, stderr, .. } => {
                assert_eq!(op, "destroy");
                assert!(stderr.contains("compute"), "unexpected stderr: {stderr}");
            }
            other => panic!("unexpected error: {other}"),
        }

        // Every entry was still attempted, in LIFO order.
        let destroys: Vec<_> = fake
            .ops()
            .into_iter()
            .filter(|op| op.starts_with("destroy"))
            .collect();
        assert_eq!(
            destroys,
            vec![
                "destroy compute",
                "destroy load-balancer",
                "destroy network",
            ]
        );
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn teardown_failure_fails_a_green_scenario() {
        let fake = Arc::new(FakeProvision::failing_destroy_for(&["network"]));
        let inner = Arc::clone(&fake);

        let scenario = tokio::spawn(run_scenario(inner, |stack| async move {
            stack
                .apply(TerraformOptions::new("network"))
                .await
                .expect("network apply");
        }));

        let panic = scenario
            .await
            .expect_err("teardown failure must fail the scenario")
            .into_panic();
        let msg = panic
            .downcast_ref::<String>()
            .expect("panic payload should be a message");
        assert!(
            msg.contains("teardown failed"),
            "unexpected panic message: {msg}",
        );
    }

    #[tokio::test]
    async fn deployment_reads_outputs_through_the_provisioner() {
        let fake = Arc::new(FakeProvision::new());
        let stack = DeployStack::new(Arc::clone(&fake));

        let network = stack
            .apply(TerraformOptions::new("network"))
            .await
            .expect("apply should succeed");
        let outputs = network.outputs().await.expect("outputs should decode");
        assert_eq!(outputs.scalar("vpc_id").unwrap(), "vpc-fake");
    }
}
