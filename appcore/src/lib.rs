//! Configuration and static-content resolution for a desktop chat shell.
//!
//! This crate decides, once at startup, whether the process runs from a
//! development tree or a packaged install, derives the on-disk locations of
//! the small JSON resources the UI consumes (suggested questions and
//! agent/authentication config), and provisions first-run defaults for
//! packaged installs. The architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (mode classification rules, the
//!   resource table). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (environment probing, executable
//!   location, provisioning, loading). Isolated behind traits to enable
//!   fakes in tests.
//!
//! The [`app`] module ties core logic and I/O together into the facade the
//! host window/runtime layer binds against.

pub mod app;
pub mod core;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
