//! Pure, deterministic logic shared by the resolution core.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data and return deterministic outputs suitable for tests.

pub mod mode;
pub mod resource;
