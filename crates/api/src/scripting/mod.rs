//! Script orchestration service.
//!
//! The [`ScriptOrchestrator`](orchestrator::ScriptOrchestrator) ties the core
//! run-directory, executor, and result-file pieces together into the single
//! flow every script-backed endpoint uses.

pub mod orchestrator;
