//! Test-only fakes for environment probing and executable location.

use std::io;
use std::path::PathBuf;

use crate::io::paths::{ExeLocator, PathResolutionError};
use crate::io::probe::EnvironmentProbe;

/// Probe with scripted answers for both marker checks.
pub struct FakeProbe {
    pub project_marker: bool,
    pub dev_questions: bool,
}

impl EnvironmentProbe for FakeProbe {
    fn project_marker_exists(&self) -> bool {
        self.project_marker
    }

    fn dev_questions_exist(&self) -> bool {
        self.dev_questions
    }
}

/// Locator pinning the "executable directory" to a fixed path, typically a
/// tempdir standing in for an install folder.
pub struct FixedExeDir(pub PathBuf);

impl ExeLocator for FixedExeDir {
    fn exe_dir(&self) -> Result<PathBuf, PathResolutionError> {
        Ok(self.0.clone())
    }
}

/// Locator simulating an OS that cannot report the executable location.
pub struct FailingExeDir;

impl ExeLocator for FailingExeDir {
    fn exe_dir(&self) -> Result<PathBuf, PathResolutionError> {
        Err(PathResolutionError::Exe(io::Error::new(
            io::ErrorKind::Unsupported,
            "executable location unavailable",
        )))
    }
}
