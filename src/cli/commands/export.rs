//! Export command handler

use degree_planner::config::Config;
use degree_planner::core::export::{MarkdownExporter, TimelineExporter};
use degree_planner::core::planner::store::TimelineStore;
use degree_planner::core::session::Session;
use logger::error;
use std::path::{Path, PathBuf};

use super::{load_active_timeline, load_catalog_for, open_database};

/// Export the active timeline as a Markdown report
pub fn run(output: Option<&Path>, config: &Config, session: &Session) {
    let Some(db) = open_database(config) else {
        return;
    };
    let Some(catalog) = load_catalog_for(&db) else {
        return;
    };
    let Some(timeline) = load_active_timeline(&db, session) else {
        return;
    };

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let exports_dir = PathBuf::from(&config.paths.exports_dir);
            if let Err(err) = std::fs::create_dir_all(&exports_dir) {
                eprintln!(
                    "✗ Failed to create exports directory {}: {err}",
                    exports_dir.display()
                );
                return;
            }
            let file_name = format!("{}.md", timeline.name.replace(' ', "_"));
            exports_dir.join(file_name)
        }
    };

    let store = TimelineStore::new(&catalog, timeline);
    match MarkdownExporter::new().generate(&store, &output_path) {
        Ok(()) => println!("✓ Timeline exported to: {}", output_path.display()),
        Err(err) => {
            error!("Export failed: {err}");
            eprintln!("✗ Failed to export timeline: {err}");
        }
    }
}
