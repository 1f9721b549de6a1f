//! Admin command handler
//!
//! Generic pass-through to whatever collections exist in the database,
//! plus static-data re-seeding.

use crate::args::AdminSubcommand;
use degree_planner::config::Config;
use degree_planner::core::seed::seed_database;

use super::open_database;

/// Dispatch admin subcommands
pub fn run(subcommand: AdminSubcommand, config: &Config) {
    let Some(db) = open_database(config) else {
        return;
    };

    match subcommand {
        AdminSubcommand::Tables => match db.list_collections() {
            Ok(names) if names.is_empty() => println!("No collections found"),
            Ok(names) => {
                for name in names {
                    let count = db.read_all(&name).map(|docs| docs.len()).unwrap_or(0);
                    println!("{name} ({count} documents)");
                }
            }
            Err(err) => eprintln!("✗ {err}"),
        },
        AdminSubcommand::Show { table } => match db.read_all(&table) {
            Ok(docs) if docs.is_empty() => println!("Collection '{table}' is empty"),
            Ok(docs) => {
                for (index, doc) in docs.iter().enumerate() {
                    println!("[{index}] {doc}");
                }
            }
            Err(err) => eprintln!("✗ {err}"),
        },
        AdminSubcommand::Insert { table, document } => {
            let doc: serde_json::Value = match serde_json::from_str(&document) {
                Ok(doc) => doc,
                Err(err) => {
                    eprintln!("✗ Invalid JSON document: {err}");
                    return;
                }
            };
            match db.insert_one(&table, doc) {
                Ok(()) => println!("✓ Inserted into '{table}'"),
                Err(err) => eprintln!("✗ {err}"),
            }
        }
        AdminSubcommand::Remove { table, index } => match db.remove_at(&table, index) {
            Ok(removed) => println!("✓ Removed [{index}] from '{table}': {removed}"),
            Err(err) => eprintln!("✗ {err}"),
        },
        AdminSubcommand::Seed => match seed_database(&db) {
            Ok(()) => println!("✓ Static collections re-seeded"),
            Err(err) => eprintln!("✗ {err}"),
        },
    }
}
