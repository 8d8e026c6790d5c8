use uuid::Uuid;

/// Build a randomized project name: `<prefix>` plus six hex characters.
///
/// Concurrent runs against the same account stay isolated through
/// disjoint names, not locking, so every run needs a fresh prefix. The
/// suffix is lowercase because some modules feed the project name into
/// resources with lowercase-only naming rules (load balancer names).
pub fn unique_project_name(prefix: &str) -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("{prefix}{}", &id[..6])
}
