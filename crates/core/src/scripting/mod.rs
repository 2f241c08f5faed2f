//! Script execution for run directories.
//!
//! Provides executor types for shell scripts and plain executables. All
//! subprocess management is pure (no HTTP) and lives in the `core` crate for
//! isolation and testability.

pub mod binary;
pub mod executor;
pub mod shell;
pub mod subprocess;
