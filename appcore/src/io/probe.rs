//! Environment probing for dev/prod classification.
//!
//! The [`EnvironmentProbe`] trait decouples classification from the real
//! filesystem. Tests use fake probes that answer either branch of the truth
//! table without touching disk.

use std::path::Path;

use tracing::debug;

use crate::core::mode::{PROJECT_MARKER, RuntimeMode};
use crate::core::resource::{DEV_ASSETS_DIR, ResourceKind};

/// The two marker checks classification depends on.
pub trait EnvironmentProbe {
    /// Does the working directory contain the project manifest?
    fn project_marker_exists(&self) -> bool;

    /// Does the development assets directory contain the questions file?
    fn dev_questions_exist(&self) -> bool;
}

/// Probe backed by the process's working directory.
pub struct WorkdirProbe;

impl EnvironmentProbe for WorkdirProbe {
    fn project_marker_exists(&self) -> bool {
        // `exists` reads check failures as absent, which is the
        // conservative answer here.
        Path::new(PROJECT_MARKER).exists()
    }

    fn dev_questions_exist(&self) -> bool {
        Path::new(DEV_ASSETS_DIR)
            .join(ResourceKind::Questions.filename())
            .exists()
    }
}

/// Run both marker checks and classify.
pub fn detect_mode(probe: &dyn EnvironmentProbe) -> RuntimeMode {
    let project_marker = probe.project_marker_exists();
    let dev_questions = probe.dev_questions_exist();
    let mode = RuntimeMode::classify(project_marker, dev_questions);
    debug!(?mode, project_marker, dev_questions, "classified runtime mode");
    mode
}
