//! Core module for the degree planner
//!
//! Everything the CLI binary drives lives here: data models, the catalog,
//! the timeline state store, requisite/credit checks, ingestion parsers,
//! the document database with its seed data, backups, and exports.

pub mod backup;
pub mod catalog;
pub mod config;
pub mod db;
pub mod export;
pub mod ingest;
pub mod models;
pub mod planner;
pub mod seed;
pub mod session;
pub mod validation;

/// Returns the current version of the `DegreePlanner` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
