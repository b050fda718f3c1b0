//! Loading managed resources from disk into typed values.
//!
//! Every call is a fresh read: there is no cache, so hand-edits to the JSON
//! files take effect on the next call. Call frequency is UI-driven, not a
//! hot path, and staleness would be worse than the re-read.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::core::mode::RuntimeMode;
use crate::core::resource::ResourceKind;
use crate::io::paths::{ExeLocator, PathResolutionError, resolve_path};

/// A resource could not be turned into a typed value.
///
/// Read and parse failures are deliberately distinct: the host renders a
/// missing file differently from a corrupted one.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Path(#[from] PathResolutionError),
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// The file was absent or unreadable.
    pub fn is_read(&self) -> bool {
        matches!(self, LoadError::Read { .. })
    }

    /// The file was present but not the expected JSON shape.
    pub fn is_parse(&self) -> bool {
        matches!(self, LoadError::Parse { .. })
    }
}

/// Read and deserialize the resource for `kind` under `mode`.
pub fn load<T: DeserializeOwned>(
    kind: ResourceKind,
    mode: RuntimeMode,
    locator: &dyn ExeLocator,
) -> Result<T, LoadError> {
    let path = resolve_path(kind, mode, locator)?;
    debug!(?kind, path = %path.display(), "loading resource");

    let contents = fs::read_to_string(&path).map_err(|source| LoadError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| LoadError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::resource::AppConfig;
    use crate::test_support::FixedExeDir;

    /// Verifies a missing file surfaces as a read failure, not a panic.
    #[test]
    fn missing_file_is_a_read_failure() {
        let temp = tempfile::tempdir().expect("tempdir");
        let locator = FixedExeDir(temp.path().to_path_buf());

        let err = load::<Vec<String>>(ResourceKind::Questions, RuntimeMode::Production, &locator)
            .expect_err("nothing to read");
        assert!(err.is_read());
        assert!(!err.is_parse());
    }

    /// Verifies a file with the wrong JSON shape surfaces as a parse
    /// failure.
    #[test]
    fn wrong_shape_is_a_parse_failure() {
        let temp = tempfile::tempdir().expect("tempdir");
        let locator = FixedExeDir(temp.path().to_path_buf());
        fs::write(temp.path().join("questions.json"), r#"{"not":"an array"}"#)
            .expect("seed file");

        let err = load::<Vec<String>>(ResourceKind::Questions, RuntimeMode::Production, &locator)
            .expect_err("shape mismatch");
        assert!(err.is_parse());
    }

    /// Verifies edits between calls are visible: the loader re-reads disk
    /// every time.
    #[test]
    fn reloads_from_disk_on_every_call() {
        let temp = tempfile::tempdir().expect("tempdir");
        let locator = FixedExeDir(temp.path().to_path_buf());
        let path = temp.path().join("config.json");

        fs::write(&path, r#"{"token":"a","agentId":"1"}"#).expect("seed file");
        let first: AppConfig =
            load(ResourceKind::Config, RuntimeMode::Production, &locator).expect("first load");
        assert_eq!(first.token, "a");

        fs::write(&path, r#"{"token":"b","agentId":"2"}"#).expect("edit file");
        let second: AppConfig =
            load(ResourceKind::Config, RuntimeMode::Production, &locator).expect("second load");
        assert_eq!(second.token, "b");
    }
}
