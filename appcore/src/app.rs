//! The application facade the host window/runtime layer binds against.
//!
//! Constructed once per process; captures the runtime mode at construction
//! and holds it immutable for the process lifetime. Resource paths, by
//! contrast, are recomputed on every call.

use tracing::debug;

use crate::core::mode::RuntimeMode;
use crate::core::resource::{AgentEntry, AppConfig, CredentialScheme, ResourceKind};
use crate::io::loader::{LoadError, load};
use crate::io::paths::{CurrentExe, ExeLocator};
use crate::io::probe::{EnvironmentProbe, WorkdirProbe, detect_mode};
use crate::io::provision::{ProvisionError, ensure_exists};

/// One resource the startup hook failed to provision.
#[derive(Debug)]
pub struct ProvisionFailure {
    pub kind: ResourceKind,
    pub error: ProvisionError,
}

/// Outcome of the startup hook.
///
/// Provisioning failures are collected here instead of aborting startup: a
/// missing questions file should degrade the UI, not crash it. The host
/// decides whether to log or ignore the failures; the corresponding `Get*`
/// call will report a read failure if the resource never materializes.
#[derive(Debug, Default)]
pub struct StartupReport {
    pub failures: Vec<ProvisionFailure>,
}

impl StartupReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Application facade: mode detection, provisioning, resource access.
pub struct App {
    title: String,
    scheme: CredentialScheme,
    mode: RuntimeMode,
    locator: Box<dyn ExeLocator>,
}

impl App {
    /// Build the facade against the real working directory and executable
    /// location.
    pub fn new(title: impl Into<String>, scheme: CredentialScheme) -> Self {
        Self::with_environment(title, scheme, &WorkdirProbe, Box::new(CurrentExe))
    }

    /// Build the facade with injected environment capabilities.
    pub fn with_environment(
        title: impl Into<String>,
        scheme: CredentialScheme,
        probe: &dyn EnvironmentProbe,
        locator: Box<dyn ExeLocator>,
    ) -> Self {
        let title = title.into();
        let mode = detect_mode(probe);
        debug!(title = %title, ?mode, ?scheme, "created app instance");
        Self {
            title,
            scheme,
            mode,
            locator,
        }
    }

    /// The display title the facade was constructed with.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The mode captured at construction.
    pub fn mode(&self) -> RuntimeMode {
        self.mode
    }

    /// Startup hook the host invokes once, before dispatching `Get*` calls.
    ///
    /// In production, provisions a default file for each managed resource
    /// that does not exist yet. In development this is a no-op: the
    /// developer supplies the assets and nothing may be created under the
    /// project tree.
    pub fn on_startup(&self) -> StartupReport {
        let mut report = StartupReport::default();
        if self.mode == RuntimeMode::Development {
            debug!("development mode, skipping provisioning");
            return report;
        }
        for kind in self.scheme.managed_kinds() {
            if let Err(error) = ensure_exists(kind, self.locator.as_ref()) {
                report.failures.push(ProvisionFailure { kind, error });
            }
        }
        report
    }

    /// Load the suggested questions for the UI's question slider.
    pub fn questions(&self) -> Result<Vec<String>, LoadError> {
        load(ResourceKind::Questions, self.mode, self.locator.as_ref())
    }

    /// Load the single-agent authentication config.
    pub fn config(&self) -> Result<AppConfig, LoadError> {
        load(ResourceKind::Config, self.mode, self.locator.as_ref())
    }

    /// Load the multi-agent credential list.
    pub fn agents(&self) -> Result<Vec<AgentEntry>, LoadError> {
        load(ResourceKind::Agents, self.mode, self.locator.as_ref())
    }
}
