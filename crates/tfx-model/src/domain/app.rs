use crate::{ModelError, VarValue};

/// One application routed through the load balancer listener.
///
/// Renders to the `apps` module variable: backend port, listener path
/// pattern, health-check path, host domains, and the listener rule
/// priority. Priorities must be unique within one [`AppSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSpec {
    name: String,
    port: u16,
    path: String,
    health_check_path: String,
    domains: Vec<String>,
    priority: u32,
}

impl AppSpec {
    /// Create an app descriptor.
    pub fn new(
        name: impl Into<String>,
        port: u16,
        path: impl Into<String>,
        health_check_path: impl Into<String>,
        priority: u32,
    ) -> Self {
        Self {
            name: name.into(),
            port,
            path: path.into(),
            health_check_path: health_check_path.into(),
            domains: Vec::new(),
            priority,
        }
    }

    /// Add a host domain the listener rule matches on.
    ///
    /// Builder-style helper; an app needs at least one domain.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domains.push(domain.into());
        self
    }

    /// App name, used as the map key in the `apps` variable.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Backend port the target group forwards to.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Listener path pattern (e.g. `/app1/*`).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Health-check path (e.g. `/app1/status`).
    pub fn health_check_path(&self) -> &str {
        &self.health_check_path
    }

    /// Host domains the rule matches on.
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Listener rule priority; unique per listener.
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Validate the descriptor fields.
    ///
    /// Rules:
    /// - `name`, `path`, `health_check_path` are non-empty
    /// - at least one domain is present
    pub fn validate(&self) -> Result<(), ModelError> {
        let empty = |field| ModelError::EmptyField {
            field,
            app: self.name.clone(),
        };
        if self.name.trim().is_empty() {
            return Err(empty("name"));
        }
        if self.path.trim().is_empty() {
            return Err(empty("path"));
        }
        if self.health_check_path.trim().is_empty() {
            return Err(empty("health_check_path"));
        }
        if self.domains.is_empty() {
            return Err(empty("domain"));
        }
        Ok(())
    }

    fn to_var(&self) -> VarValue {
        VarValue::Map(vec![
            ("port".to_string(), self.port.into()),
            ("path".to_string(), self.path.as_str().into()),
            (
                "health_check_url".to_string(),
                self.health_check_path.as_str().into(),
            ),
            ("domain".to_string(), self.domains.clone().into()),
            ("priority".to_string(), self.priority.into()),
        ])
    }
}

/// The set of applications behind one listener.
///
/// Insertion rejects duplicate app names and duplicate routing
/// priorities, so an invalid listener configuration never reaches the
/// provisioning step.
#[derive(Default, Debug, Clone)]
pub struct AppSet {
    apps: Vec<AppSpec>,
}

impl AppSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of apps.
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Add an app, enforcing per-listener invariants.
    pub fn insert(&mut self, app: AppSpec) -> Result<&mut Self, ModelError> {
        app.validate()?;
        if let Some(existing) = self.apps.iter().find(|a| a.name() == app.name()) {
            return Err(ModelError::DuplicateApp(existing.name().to_string()));
        }
        if let Some(existing) = self.apps.iter().find(|a| a.priority() == app.priority()) {
            return Err(ModelError::DuplicatePriority {
                priority: app.priority(),
                app: app.name().to_string(),
                existing: existing.name().to_string(),
            });
        }
        self.apps.push(app);
        Ok(self)
    }

    /// Builder-style [`AppSet::insert`].
    pub fn with(mut self, app: AppSpec) -> Result<Self, ModelError> {
        self.insert(app)?;
        Ok(self)
    }

    /// Look up an app by name.
    pub fn get(&self, name: &str) -> Option<&AppSpec> {
        self.apps.iter().find(|a| a.name() == name)
    }

    /// Iterate over apps in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &AppSpec> {
        self.apps.iter()
    }

    /// Backend ports of all apps, in insertion order.
    pub fn ports(&self) -> Vec<u16> {
        self.apps.iter().map(AppSpec::port).collect()
    }

    /// Render the set as the `apps` module variable.
    pub fn to_var(&self) -> VarValue {
        VarValue::Map(
            self.apps
                .iter()
                .map(|a| (a.name().to_string(), a.to_var()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{AppSet, AppSpec};
    use crate::ModelError;

    fn app(name: &str, port: u16, priority: u32) -> AppSpec {
        AppSpec::new(
            name,
            port,
            format!("/{name}/*"),
            format!("/{name}/status"),
            priority,
        )
        .with_domain("example.cloudns.be")
    }

    #[test]
    fn distinct_priorities_are_accepted() {
        let set = AppSet::new()
            .with(app("app1", 8085, 100))
            .unwrap()
            .with(app("app2", 8086, 200))
            .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.ports(), vec![8085, 8086]);
        assert_eq!(set.get("app2").unwrap().priority(), 200);
    }

    #[test]
    fn duplicate_priority_is_rejected() {
        let err = AppSet::new()
            .with(app("app1", 8085, 100))
            .unwrap()
            .with(app("app2", 8086, 100))
            .unwrap_err();

        match err {
            ModelError::DuplicatePriority {
                priority,
                app,
                existing,
            } => {
                assert_eq!(priority, 100);
                assert_eq!(app, "app2");
                assert_eq!(existing, "app1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let err = AppSet::new()
            .with(app("app1", 8085, 100))
            .unwrap()
            .with(app("app1", 8086, 200))
            .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateApp(name) if name == "app1"));
    }

    #[test]
    fn app_without_domain_is_rejected() {
        let spec = AppSpec::new("app1", 8085, "/app1/*", "/app1/status", 100);
        let err = AppSet::new().with(spec).unwrap_err();
        assert!(matches!(err, ModelError::EmptyField { field: "domain", .. }));
    }

    #[test]
    fn renders_the_module_variable_shape() {
        let set = AppSet::new().with(app("app1", 8085, 100)).unwrap();
        let rendered = set.to_var().render();
        assert_eq!(
            rendered,
            r#"{"app1":{"port":8085,"path":"/app1/*","health_check_url":"/app1/status","domain":["example.cloudns.be"],"priority":100}}"#
        );
    }
}
