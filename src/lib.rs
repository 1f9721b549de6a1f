//! Shared library for `DegreePlanner`
//! Contains the planner core used by the CLI: catalog and timeline models,
//! the timeline state store, requisite and credit checks, document ingestion,
//! the JSON document store, and the backup/restore service.

pub mod core;

pub use crate::core::config;

/// Returns the current version of the `DegreePlanner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
