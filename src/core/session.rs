//! Session state
//!
//! The current user and the in-progress timeline name, carried explicitly
//! between CLI invocations instead of living in ambient globals. Persisted
//! as TOML next to the configuration file.

use crate::core::config::Config;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const SESSION_FILE_NAME: &str = "session.toml";

/// Per-user planning session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    /// Signed-in user's email
    #[serde(default)]
    pub user: Option<String>,

    /// Name of the timeline currently being worked on
    #[serde(default)]
    pub timeline: Option<String>,
}

impl Session {
    /// Session file path, next to the config file
    #[must_use]
    pub fn file_path() -> PathBuf {
        Config::get_planner_dir().join(SESSION_FILE_NAME)
    }

    /// Load the persisted session, or an empty one when absent/unreadable
    #[must_use]
    pub fn load() -> Self {
        let path = Self::file_path();
        fs::read_to_string(path)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Persist the session
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::file_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The signed-in user, or an error message suitable for the CLI
    ///
    /// # Errors
    /// Returns an error when no user is signed in
    pub fn require_user(&self) -> Result<&str, String> {
        self.user
            .as_deref()
            .ok_or_else(|| "No user in session. Run 'session login <email>' first.".to_string())
    }

    /// The active timeline name, or an error message suitable for the CLI
    ///
    /// # Errors
    /// Returns an error when no timeline is open
    pub fn require_timeline(&self) -> Result<&str, String> {
        self.timeline
            .as_deref()
            .ok_or_else(|| "No timeline open. Run 'plan new' or 'plan open' first.".to_string())
    }
}
