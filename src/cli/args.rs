//! CLI argument definitions for the degree planner

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use degree_planner::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to
/// lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum SessionSubcommand {
    /// Sign a user into the planning session.
    Login {
        /// User email
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// Clear the session.
    Logout,
    /// Show the current session.
    Show,
}

#[derive(Debug, Subcommand)]
pub enum PlanSubcommand {
    /// Create a new timeline and make it the active one.
    New {
        /// Timeline name
        #[arg(value_name = "NAME")]
        name: String,

        /// Degree id the timeline works toward (e.g., "BEng-SOEN")
        #[arg(short, long, value_name = "DEGREE")]
        degree: String,

        /// Include co-op work terms
        #[arg(long)]
        co_op: bool,

        /// Extended credit program
        #[arg(long)]
        extended_credit: bool,
    },
    /// Open an existing timeline as the active one.
    Open {
        /// Timeline name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Delete a saved timeline.
    Delete {
        /// Timeline name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Add a semester to the active timeline.
    AddSemester {
        /// Season (winter, summer, fall)
        #[arg(value_name = "SEASON")]
        season: String,

        /// Four-digit year
        #[arg(value_name = "YEAR")]
        year: u16,
    },
    /// Remove a semester (its courses return to the pool).
    RemoveSemester {
        /// Semester name (e.g., "Fall 2025")
        #[arg(value_name = "SEMESTER")]
        semester: String,
    },
    /// Move a course into a semester or back to the pool.
    Move {
        /// Course code (e.g., "COMP 248")
        #[arg(value_name = "COURSE")]
        course: String,

        /// Destination semester name, or "pool"
        #[arg(long, value_name = "TARGET")]
        to: String,

        /// Insertion index within the destination semester
        #[arg(long, value_name = "INDEX")]
        index: Option<usize>,
    },
    /// Generate a standard four-year semester run.
    Generate {
        /// Starting term (e.g., "Fall 2025")
        #[arg(value_name = "TERM")]
        start: String,
    },
    /// Show the active timeline.
    Show,
    /// List the courses still in the course pool.
    Pool,
    /// Check requisites and credit limits across the timeline.
    Validate,
}

#[derive(Debug, Subcommand)]
pub enum ImportSubcommand {
    /// Import an acceptance letter PDF to seed the timeline.
    Admission {
        /// Path to the uploaded PDF
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Pre-extracted text file (defaults to a sidecar .txt)
        #[arg(long, value_name = "FILE")]
        text: Option<PathBuf>,
    },
    /// Import a transcript PDF to populate completed terms.
    Transcript {
        /// Path to the uploaded PDF
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Pre-extracted text file (defaults to a sidecar .txt)
        #[arg(long, value_name = "FILE")]
        text: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum BackupSubcommand {
    /// Dump the user-data collections to a timestamped backup file.
    Create,
    /// List backup files.
    List,
    /// Restore user data from a backup file (clears everything first).
    Restore {
        /// Backup file name
        #[arg(value_name = "FILE")]
        file: String,
    },
    /// Delete a backup file.
    Delete {
        /// Backup file name
        #[arg(value_name = "FILE")]
        file: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum AdminSubcommand {
    /// List database collections.
    Tables,
    /// Show a collection's documents.
    Show {
        /// Collection name
        #[arg(value_name = "TABLE")]
        table: String,
    },
    /// Insert a JSON document into a collection.
    Insert {
        /// Collection name
        #[arg(value_name = "TABLE")]
        table: String,

        /// Document as a JSON string
        #[arg(value_name = "JSON")]
        document: String,
    },
    /// Remove the document at an index from a collection.
    Remove {
        /// Collection name
        #[arg(value_name = "TABLE")]
        table: String,

        /// Document index
        #[arg(value_name = "INDEX")]
        index: usize,
    },
    /// Re-seed the static course/pool/degree collections.
    Seed,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage the planning session (user and active timeline).
    Session {
        #[command(subcommand)]
        subcommand: SessionSubcommand,
    },
    /// Build and edit the active timeline.
    Plan {
        #[command(subcommand)]
        subcommand: PlanSubcommand,
    },
    /// Ingest uploaded documents into the timeline.
    Import {
        #[command(subcommand)]
        subcommand: ImportSubcommand,
    },
    /// Back up and restore the user-data collections.
    Backup {
        #[command(subcommand)]
        subcommand: BackupSubcommand,
    },
    /// Browse and edit database collections directly.
    Admin {
        #[command(subcommand)]
        subcommand: AdminSubcommand,
    },
    /// Export the active timeline as a Markdown report.
    Export {
        /// Output file path (defaults to the exports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "degreeplanner",
    about = "DegreePlanner command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config data directory
    #[arg(long = "config-data-dir", value_name = "DIR")]
    pub config_data_dir: Option<PathBuf>,

    /// Override config data directory (short form)
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override config backups directory
    #[arg(long = "config-backups-dir", value_name = "DIR")]
    pub config_backups_dir: Option<PathBuf>,

    /// Override config backups directory (short form)
    #[arg(long = "backups-dir", value_name = "DIR")]
    pub backups_dir: Option<PathBuf>,

    /// Override config exports directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config exports directory (short form)
    #[arg(long = "exports-dir", value_name = "DIR")]
    pub exports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides.
    ///
    /// Short-form flags (e.g., `--data-dir`) take precedence over long-form
    /// flags (e.g., `--config-data-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None`
    /// means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string =
            |p: &PathBuf| p.to_string_lossy().to_string();

        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            data_dir: self
                .data_dir
                .as_ref()
                .map(path_string)
                .or_else(|| self.config_data_dir.as_ref().map(path_string)),
            backups_dir: self
                .backups_dir
                .as_ref()
                .map(path_string)
                .or_else(|| self.config_backups_dir.as_ref().map(path_string)),
            exports_dir: self
                .exports_dir
                .as_ref()
                .map(path_string)
                .or_else(|| self.config_exports_dir.as_ref().map(path_string)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli_with_overrides(
        data_dir: Option<&str>,
        config_data_dir: Option<&str>,
    ) -> Cli {
        Cli {
            log_level: None,
            verbose: false,
            debug_flag: false,
            log_file: None,
            config_level: None,
            config_log_file: None,
            config_verbose: None,
            config_data_dir: config_data_dir.map(PathBuf::from),
            data_dir: data_dir.map(PathBuf::from),
            config_backups_dir: None,
            backups_dir: None,
            config_exports_dir: None,
            exports_dir: None,
            command: Command::Config { subcommand: None },
        }
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(LogLevelArg::Error.to_string(), "error");
        assert_eq!(LogLevelArg::Warn.to_string(), "warn");
        assert_eq!(LogLevelArg::Info.to_string(), "info");
        assert_eq!(LogLevelArg::Debug.to_string(), "debug");
    }

    #[test]
    fn test_log_level_to_logger_level() {
        assert_eq!(Level::from(LogLevelArg::Error), Level::Error);
        assert_eq!(Level::from(LogLevelArg::Warn), Level::Warn);
        assert_eq!(Level::from(LogLevelArg::Info), Level::Info);
        assert_eq!(Level::from(LogLevelArg::Debug), Level::Debug);
    }

    #[test]
    fn test_to_config_overrides_empty() {
        let cli = cli_with_overrides(None, None);
        let overrides = cli.to_config_overrides();

        assert!(overrides.level.is_none());
        assert!(overrides.file.is_none());
        assert!(overrides.verbose.is_none());
        assert!(overrides.data_dir.is_none());
        assert!(overrides.backups_dir.is_none());
        assert!(overrides.exports_dir.is_none());
    }

    #[test]
    fn test_short_form_precedence_over_long_form() {
        let cli = cli_with_overrides(Some("/short/data"), Some("/long/data"));
        let overrides = cli.to_config_overrides();

        assert_eq!(overrides.data_dir, Some("/short/data".to_string()));
    }

    #[test]
    fn test_long_form_when_short_form_absent() {
        let cli = cli_with_overrides(None, Some("/long/data"));
        let overrides = cli.to_config_overrides();

        assert_eq!(overrides.data_dir, Some("/long/data".to_string()));
    }
}
