//! Resource path resolution for the current runtime mode.
//!
//! Paths are derived, never cached: recomputing on every access is cheap and
//! keeps the crate honest about the executable's current location.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::mode::RuntimeMode;
use crate::core::resource::{DEV_ASSETS_DIR, ResourceKind};

/// The OS could not report where the running executable lives.
#[derive(Debug, Error)]
pub enum PathResolutionError {
    #[error("locate running executable: {0}")]
    Exe(#[source] io::Error),
    #[error("executable path {} has no parent directory", .0.display())]
    NoParent(PathBuf),
}

/// Reports the directory containing the running executable.
///
/// Injected into the resolver so tests can pin resources to a temp
/// directory or simulate the OS failing to report a location.
pub trait ExeLocator {
    fn exe_dir(&self) -> Result<PathBuf, PathResolutionError>;
}

/// Locator backed by [`std::env::current_exe`].
pub struct CurrentExe;

impl ExeLocator for CurrentExe {
    fn exe_dir(&self) -> Result<PathBuf, PathResolutionError> {
        let exe = std::env::current_exe().map_err(PathResolutionError::Exe)?;
        match exe.parent() {
            Some(dir) => Ok(dir.to_path_buf()),
            None => Err(PathResolutionError::NoParent(exe)),
        }
    }
}

/// Resolve the on-disk path for `kind` under `mode`.
///
/// Development resolves relative to the working directory; production
/// co-locates resources with the binary so an install stays relocatable as
/// a folder.
pub fn resolve_path(
    kind: ResourceKind,
    mode: RuntimeMode,
    locator: &dyn ExeLocator,
) -> Result<PathBuf, PathResolutionError> {
    match mode {
        RuntimeMode::Development => Ok(Path::new(DEV_ASSETS_DIR).join(kind.filename())),
        RuntimeMode::Production => Ok(locator.exe_dir()?.join(kind.filename())),
    }
}
