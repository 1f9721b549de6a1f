//! Configuration module for the degree planner

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the JSON document collections
    #[serde(default)]
    pub data_dir: String,
    /// Directory backup files are written to
    #[serde(default)]
    pub backups_dir: String,
    /// Directory exported timeline reports are written to
    #[serde(default)]
    pub exports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override data directory
    pub data_dir: Option<String>,
    /// Override backups directory
    pub backups_dir: Option<String>,
    /// Override exports directory
    pub exports_dir: Option<String>,
}

impl Config {
    /// Get the `$DEGREE_PLANNER` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/degreeplanner`
    /// - macOS: `~/Library/Application Support/degreeplanner`
    /// - Windows: `%APPDATA%\degreeplanner`
    #[must_use]
    pub fn get_planner_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("degreeplanner")
    }

    /// Merge missing fields from defaults into this config.
    ///
    /// Used on load so that upgrading the application adds newly introduced
    /// configuration fields while preserving existing user settings. Only
    /// fields that are empty here and non-empty in defaults change.
    ///
    /// # Returns
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.data_dir.is_empty() && !defaults.paths.data_dir.is_empty() {
            self.paths.data_dir.clone_from(&defaults.paths.data_dir);
            changed = true;
        }
        if self.paths.backups_dir.is_empty() && !defaults.paths.backups_dir.is_empty() {
            self.paths
                .backups_dir
                .clone_from(&defaults.paths.backups_dir);
            changed = true;
        }
        if self.paths.exports_dir.is_empty() && !defaults.paths.exports_dir.is_empty() {
            self.paths
                .exports_dir
                .clone_from(&defaults.paths.exports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration.
    ///
    /// Command-line arguments override configuration file values without
    /// modifying the persistent file. Only non-`None` values replace
    /// config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(data_dir) = &overrides.data_dir {
            self.paths.data_dir.clone_from(data_dir);
        }
        if let Some(backups_dir) = &overrides.backups_dir {
            self.paths.backups_dir.clone_from(backups_dir);
        }
        if let Some(exports_dir) = &overrides.exports_dir {
            self.paths.exports_dir.clone_from(exports_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// in the directory returned by [`get_planner_dir`].
    ///
    /// [`get_planner_dir`]: Self::get_planner_dir
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_planner_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$DEGREE_PLANNER` variable in a string
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$DEGREE_PLANNER") {
            let planner_dir = Self::get_planner_dir();
            value.replace("$DEGREE_PLANNER", planner_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string, expanding `$DEGREE_PLANNER`
    /// in path values. Missing fields use their serde defaults.
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_dir = Self::expand_variables(&config.paths.data_dir);
        config.paths.backups_dir = Self::expand_variables(&config.paths.backups_dir);
        config.paths.exports_dir = Self::expand_variables(&config.paths.exports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults.
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen since the defaults are compiled into the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found.
    ///
    /// - File exists: load it, merge missing fields from defaults, save the
    ///   updated config when the merge added anything.
    /// - First run: create the config directory and file from defaults.
    ///
    /// Falls back to defaults if any error occurs during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file, creating the config directory if
    /// needed.
    ///
    /// # Errors
    /// Returns an error if serialization, directory creation, or the
    /// write fails
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key.
    ///
    /// Supported keys: `level`, `file`, `verbose`, `data_dir`,
    /// `backups_dir`, `exports_dir` (dashed forms accepted).
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "data_dir" | "data-dir" => Some(self.paths.data_dir.clone()),
            "backups_dir" | "backups-dir" => Some(self.paths.backups_dir.clone()),
            "exports_dir" | "exports-dir" => Some(self.paths.exports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key.
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to
    /// persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot
    /// be parsed (e.g., a non-boolean for `verbose`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "data_dir" | "data-dir" => self.paths.data_dir = value.to_string(),
            "backups_dir" | "backups-dir" => self.paths.backups_dir = value.to_string(),
            "exports_dir" | "exports-dir" => self.paths.exports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its default).
    ///
    /// Updates the in-memory config; call [`save()`](Config::save) to
    /// persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "data_dir" | "data-dir" => self.paths.data_dir.clone_from(&defaults.paths.data_dir),
            "backups_dir" | "backups-dir" => self
                .paths
                .backups_dir
                .clone_from(&defaults.paths.backups_dir),
            "exports_dir" | "exports-dir" => self
                .paths
                .exports_dir
                .clone_from(&defaults.paths.exports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file.
    /// The next [`load()`](Config::load) recreates it from defaults.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_dir = \"{}\"", self.paths.data_dir)?;
        writeln!(f, "  backups_dir = \"{}\"", self.paths.backups_dir)?;
        writeln!(f, "  exports_dir = \"{}\"", self.paths.exports_dir)?;

        Ok(())
    }
}
