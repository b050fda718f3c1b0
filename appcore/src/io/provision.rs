//! First-run provisioning of default resource files.
//!
//! Production installs get their resource files created next to the binary
//! on first startup. Provisioning is strictly create-if-absent: a file that
//! already exists is never touched, whatever its content, so user edits and
//! earlier runs always win.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::core::mode::RuntimeMode;
use crate::core::resource::ResourceKind;
use crate::io::paths::{ExeLocator, PathResolutionError, resolve_path};

/// Failed to materialize a default resource file.
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error(transparent)]
    Path(#[from] PathResolutionError),
    #[error("encode default payload: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Ensure the production file for `kind` exists, writing the default
/// payload if absent.
///
/// Idempotent: the existence check precedes any content inspection, so
/// re-running never clobbers a file. Only meaningful in production mode;
/// development trees supply their own assets and must never have files
/// silently created under the project tree.
pub fn ensure_exists(kind: ResourceKind, locator: &dyn ExeLocator) -> Result<(), ProvisionError> {
    let path = resolve_path(kind, RuntimeMode::Production, locator)?;

    if path.exists() {
        debug!(?kind, path = %path.display(), "resource already present");
        return Ok(());
    }

    let mut buf =
        serde_json::to_string_pretty(&kind.default_payload()).map_err(ProvisionError::Encode)?;
    buf.push('\n');
    fs::write(&path, buf).map_err(|source| ProvisionError::Write {
        path: path.clone(),
        source,
    })?;

    info!(?kind, path = %path.display(), "provisioned default resource");
    Ok(())
}
