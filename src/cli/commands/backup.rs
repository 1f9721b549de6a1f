//! Backup command handler

use crate::args::BackupSubcommand;
use degree_planner::config::Config;
use degree_planner::core::backup::{backups_dir, BackupService};
use logger::error;

use super::open_database;

/// Dispatch backup subcommands
pub fn run(subcommand: BackupSubcommand, config: &Config) {
    let Some(db) = open_database(config) else {
        return;
    };
    let service = BackupService::new(&db, backups_dir(config));

    match subcommand {
        BackupSubcommand::Create => match service.create_backup() {
            Ok(name) => println!("✓ Backup created: {name}"),
            Err(err) => {
                error!("Backup creation failed: {err}");
                eprintln!("✗ {err}");
            }
        },
        BackupSubcommand::List => match service.list_backups() {
            Ok(names) if names.is_empty() => println!("No backups found"),
            Ok(names) => {
                for name in names {
                    println!("{name}");
                }
            }
            Err(err) => eprintln!("✗ {err}"),
        },
        BackupSubcommand::Restore { file } => match service.restore_backup(&file) {
            Ok(()) => println!("✓ Restored from {file}"),
            Err(err) => {
                error!("Restore from '{file}' failed: {err}");
                eprintln!("✗ {err}");
            }
        },
        BackupSubcommand::Delete { file } => match service.delete_backup(&file) {
            Ok(()) => println!("✓ Deleted {file}"),
            Err(err) => eprintln!("✗ {err}"),
        },
    }
}
