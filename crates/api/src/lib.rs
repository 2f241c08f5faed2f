//! PFRED script service API library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! script orchestration) so integration tests and the binary entrypoint can
//! both access them.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod query;
pub mod routes;
pub mod scripting;
pub mod state;
