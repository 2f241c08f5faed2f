//! Domain core of the PFRED script service.
//!
//! Owns everything between an HTTP request and the external bioinformatics
//! scripts: workspace configuration, per-run working directories, subprocess
//! execution, and reading result files back. Nothing here knows about HTTP.

pub mod error;
pub mod naming;
pub mod result_file;
pub mod run_dir;
pub mod script_names;
pub mod scripting;
pub mod workspace;
