//! Import command handler
//!
//! Upload validation, text acquisition through the extraction seam, and
//! application of the parsed document to the active timeline. A failed
//! parse never leaves a partially populated timeline: the store is only
//! saved after the whole document applied cleanly.

use crate::args::ImportSubcommand;
use degree_planner::config::Config;
use degree_planner::core::ingest::{
    apply_admission_seed, apply_transcript, parse_admission_letter, parse_transcript,
    validate_pdf_upload, SidecarTextExtractor, TextExtractor,
};
use degree_planner::core::models::Timeline;
use degree_planner::core::planner::store::TimelineStore;
use degree_planner::core::session::Session;
use logger::{error, info};
use std::path::Path;

use super::{load_catalog_for, open_database, save_timeline};

/// Dispatch import subcommands
pub fn run(subcommand: ImportSubcommand, config: &Config, session: &mut Session) {
    match subcommand {
        ImportSubcommand::Admission { file, text } => {
            handle_admission(config, session, &file, text.as_deref());
        }
        ImportSubcommand::Transcript { file, text } => {
            handle_transcript(config, session, &file, text.as_deref());
        }
    }
}

/// Validate the uploaded PDF and obtain its extracted text
fn extracted_text(file: &Path, text: Option<&Path>) -> Option<String> {
    if let Err(err) = validate_pdf_upload(file) {
        eprintln!("✗ {err}");
        return None;
    }

    let result = text.map_or_else(
        || SidecarTextExtractor.extract(file),
        |path| std::fs::read_to_string(path).map_err(Into::into),
    );

    match result {
        Ok(content) => Some(content),
        Err(err) => {
            error!("Text extraction failed for {}: {err}", file.display());
            eprintln!("✗ {err}");
            None
        }
    }
}

fn handle_admission(config: &Config, session: &mut Session, file: &Path, text: Option<&Path>) {
    let Some(content) = extracted_text(file, text) else {
        return;
    };

    let seed = match parse_admission_letter(&content) {
        Ok(seed) => seed,
        Err(err) => {
            eprintln!("✗ {err}");
            return;
        }
    };

    let Some(db) = open_database(config) else {
        return;
    };
    let Some(catalog) = load_catalog_for(&db) else {
        return;
    };
    let user = match session.require_user() {
        Ok(user) => user.to_string(),
        Err(msg) => {
            eprintln!("✗ {msg}");
            return;
        }
    };

    // Seed the open timeline, or start a fresh one named after the file
    let timeline = match session.timeline.as_deref() {
        Some(name) => match db.load_timeline(name, &user) {
            Ok(Some(timeline)) => timeline,
            Ok(None) | Err(_) => {
                eprintln!("✗ Active timeline '{name}' could not be loaded");
                return;
            }
        },
        None => {
            let name = file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Imported Plan")
                .to_string();
            let degree = catalog
                .degrees
                .first()
                .map_or_else(String::new, |d| d.id.clone());
            Timeline::new(name, user, degree)
        }
    };

    let mut store = TimelineStore::new(&catalog, timeline);
    if let Err(err) = apply_admission_seed(&mut store, &seed) {
        eprintln!("✗ {err}");
        return;
    }

    let timeline = store.into_timeline();
    if !save_timeline(&db, &timeline) {
        return;
    }
    session.timeline = Some(timeline.name.clone());
    let _ = session.save();

    info!("Admission letter imported into '{}'", timeline.name);
    println!(
        "✓ Imported acceptance letter: {} semesters, {} exemptions, {} deficiencies",
        timeline.semesters.len(),
        timeline.exempted.len(),
        timeline.deficiencies.len()
    );
}

fn handle_transcript(config: &Config, session: &mut Session, file: &Path, text: Option<&Path>) {
    let Some(content) = extracted_text(file, text) else {
        return;
    };

    let record = match parse_transcript(&content) {
        Ok(record) => record,
        Err(err) => {
            eprintln!("✗ {err}");
            return;
        }
    };

    let Some(db) = open_database(config) else {
        return;
    };
    let Some(catalog) = load_catalog_for(&db) else {
        return;
    };
    let Some(timeline) = super::load_active_timeline(&db, session) else {
        return;
    };

    let mut store = TimelineStore::new(&catalog, timeline);
    if let Err(err) = apply_transcript(&mut store, &record) {
        eprintln!("✗ {err}");
        return;
    }

    let timeline = store.into_timeline();
    if !save_timeline(&db, &timeline) {
        return;
    }

    let rows: usize = record.terms.iter().map(|t| t.entries.len()).sum();
    info!("Transcript imported into '{}'", timeline.name);
    println!(
        "✓ Imported transcript: {} terms, {rows} course rows, {} exemptions",
        record.terms.len(),
        record.exempted.len()
    );
}
