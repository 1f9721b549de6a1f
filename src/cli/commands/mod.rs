//! CLI command handlers for the degree planner.
//!
//! This module provides handlers for the CLI subcommands.
//! Each command is implemented in its own submodule; shared database and
//! timeline plumbing lives here.

pub mod admin;
pub mod backup;
pub mod config;
pub mod export;
pub mod import;
pub mod plan;
pub mod session;

use degree_planner::core::catalog::Catalog;
use degree_planner::core::db::Database;
use degree_planner::core::models::Timeline;
use degree_planner::core::seed::load_catalog;
use degree_planner::core::session::Session;
use logger::error;

/// Open the document database at the configured data directory
pub(crate) fn open_database(config: &degree_planner::config::Config) -> Option<Database> {
    match Database::open(&config.paths.data_dir) {
        Ok(db) => Some(db),
        Err(err) => {
            error!("Failed to open database at {}: {err}", config.paths.data_dir);
            eprintln!("✗ Failed to open database: {err}");
            None
        }
    }
}

/// Load the catalog from the database's static collections
pub(crate) fn load_catalog_for(db: &Database) -> Option<Catalog> {
    match load_catalog(db) {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            error!("Failed to load catalog: {err}");
            eprintln!("✗ Failed to load catalog: {err}");
            None
        }
    }
}

/// Load the session's active timeline from the database
pub(crate) fn load_active_timeline(db: &Database, session: &Session) -> Option<Timeline> {
    let user = match session.require_user() {
        Ok(user) => user.to_string(),
        Err(msg) => {
            eprintln!("✗ {msg}");
            return None;
        }
    };
    let name = match session.require_timeline() {
        Ok(name) => name.to_string(),
        Err(msg) => {
            eprintln!("✗ {msg}");
            return None;
        }
    };

    match db.load_timeline(&name, &user) {
        Ok(Some(timeline)) => Some(timeline),
        Ok(None) => {
            eprintln!("✗ Timeline '{name}' was not found for {user}");
            None
        }
        Err(err) => {
            error!("Failed to load timeline '{name}': {err}");
            eprintln!("✗ Failed to load timeline: {err}");
            None
        }
    }
}

/// Persist a timeline, logging failures
pub(crate) fn save_timeline(db: &Database, timeline: &Timeline) -> bool {
    if let Err(err) = db.save_timeline(timeline) {
        error!("Failed to save timeline '{}': {err}", timeline.name);
        eprintln!("✗ Failed to save timeline: {err}");
        return false;
    }
    true
}
