//! Development/production classification rules.
//!
//! A packaged install never carries the project manifest, so its absence in
//! the working directory is a decisive, zero-configuration signal. Requiring
//! the development questions file as a second marker avoids misclassifying a
//! packaged install launched from a directory with a stray manifest.

/// File whose presence in the working directory marks a source tree.
pub const PROJECT_MARKER: &str = "Cargo.toml";

/// Whether the process runs from a development tree or a packaged install.
///
/// Computed once at facade construction and never re-evaluated for the
/// process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    /// Classify from the two marker checks.
    ///
    /// `Development` only when both markers exist. A failed filesystem check
    /// reads as `false` upstream, so classification conservatively falls
    /// back to `Production`, which self-provisions instead of reading a
    /// nonexistent development path.
    pub fn classify(project_marker: bool, dev_questions: bool) -> Self {
        if project_marker && dev_questions {
            RuntimeMode::Development
        } else {
            RuntimeMode::Production
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verifies the classification truth table: both markers are required
    /// for `Development`; anything less is `Production`.
    #[test]
    fn both_markers_required_for_development() {
        assert_eq!(
            RuntimeMode::classify(true, true),
            RuntimeMode::Development
        );
        assert_eq!(
            RuntimeMode::classify(true, false),
            RuntimeMode::Production
        );
        assert_eq!(
            RuntimeMode::classify(false, true),
            RuntimeMode::Production
        );
        assert_eq!(
            RuntimeMode::classify(false, false),
            RuntimeMode::Production
        );
    }
}
