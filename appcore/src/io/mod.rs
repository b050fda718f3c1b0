//! Side-effecting operations: environment probing, path resolution,
//! provisioning, and loading of managed resources.

pub mod loader;
pub mod paths;
pub mod probe;
pub mod provision;
