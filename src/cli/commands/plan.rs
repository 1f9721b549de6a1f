//! Plan command handler
//!
//! Timeline CRUD and the drag-and-drop equivalents: adding/removing
//! semesters and moving courses. Every successful mutation persists the
//! timeline document immediately.

use crate::args::PlanSubcommand;
use degree_planner::config::Config;
use degree_planner::core::models::{
    generate_four_year_semesters, normalize_course_code, CourseStatus, Season, Timeline,
};
use degree_planner::core::planner::credits::{max_credits, semester_credits};
use degree_planner::core::planner::store::{DropTarget, StoreError, TimelineStore};
use degree_planner::core::session::Session;
use logger::info;

use super::{load_active_timeline, load_catalog_for, open_database, save_timeline};

/// Dispatch plan subcommands
pub fn run(subcommand: PlanSubcommand, config: &Config, session: &mut Session) {
    match subcommand {
        PlanSubcommand::New {
            name,
            degree,
            co_op,
            extended_credit,
        } => handle_new(config, session, name, &degree, co_op, extended_credit),
        PlanSubcommand::Open { name } => handle_open(config, session, name),
        PlanSubcommand::Delete { name } => handle_delete(config, session, &name),
        PlanSubcommand::AddSemester { season, year } => {
            with_store(config, session, |store| {
                let Some(season) = Season::parse(&season) else {
                    eprintln!("✗ Unknown season '{season}' (expected winter, summer, or fall)");
                    return false;
                };
                match store.add_semester(season, year) {
                    Ok(name) => {
                        println!("✓ Added {name}");
                        true
                    }
                    Err(err) => {
                        eprintln!("✗ {err}");
                        false
                    }
                }
            });
        }
        PlanSubcommand::RemoveSemester { semester } => {
            with_store(config, session, |store| match store.remove_semester(&semester) {
                Ok(detached) => {
                    println!("✓ Removed {semester}");
                    if !detached.is_empty() {
                        println!("  Returned to pool: {}", detached.join(", "));
                    }
                    true
                }
                Err(err) => {
                    eprintln!("✗ {err}");
                    false
                }
            });
        }
        PlanSubcommand::Move { course, to, index } => {
            with_store(config, session, |store| {
                let code = normalize_course_code(&course);
                let target = if to.eq_ignore_ascii_case("pool") {
                    DropTarget::Pool
                } else {
                    DropTarget::Semester {
                        name: to.clone(),
                        index,
                    }
                };

                match store.move_course(&code, &target) {
                    Ok(outcome) => {
                        match &outcome.semester {
                            Some(name) => println!("✓ Moved {code} to {name}"),
                            None => println!("✓ Returned {code} to the course pool"),
                        }
                        if outcome.over_limit {
                            println!(
                                "⚠ {} now holds {:.1} credits (limit {:.1}); the move was kept",
                                outcome.semester.as_deref().unwrap_or(""),
                                outcome.credits,
                                outcome.cap
                            );
                        }
                        true
                    }
                    Err(err) => {
                        eprintln!("✗ {err}");
                        false
                    }
                }
            });
        }
        PlanSubcommand::Generate { start } => {
            with_store(config, session, |store| {
                let terms = generate_four_year_semesters(&start);
                if terms.is_empty() {
                    eprintln!("✗ '{start}' is not a valid starting term (e.g., \"Fall 2025\")");
                    return false;
                }
                let mut added = 0;
                for term in terms {
                    match store.add_semester_named(term) {
                        Ok(_) => added += 1,
                        Err(StoreError::DuplicateSemester(_)) => {}
                        Err(err) => {
                            eprintln!("✗ {err}");
                            return false;
                        }
                    }
                }
                println!("✓ Added {added} semesters");
                true
            });
        }
        PlanSubcommand::Show => handle_show(config, session),
        PlanSubcommand::Pool => handle_pool(config, session),
        PlanSubcommand::Validate => handle_validate(config, session),
    }
}

/// Run a mutation against the active timeline's store, saving on success
fn with_store(
    config: &Config,
    session: &Session,
    mutate: impl FnOnce(&mut TimelineStore<'_>) -> bool,
) {
    let Some(db) = open_database(config) else {
        return;
    };
    let Some(catalog) = load_catalog_for(&db) else {
        return;
    };
    let Some(timeline) = load_active_timeline(&db, session) else {
        return;
    };

    let mut store = TimelineStore::new(&catalog, timeline);
    if mutate(&mut store) {
        let timeline = store.into_timeline();
        if save_timeline(&db, &timeline) {
            info!("Timeline '{}' saved", timeline.name);
        }
    }
}

fn handle_new(
    config: &Config,
    session: &mut Session,
    name: String,
    degree: &str,
    co_op: bool,
    extended_credit: bool,
) {
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

    if catalog.get_degree(degree).is_none() {
        let known: Vec<String> = catalog.degrees.iter().map(|d| d.id.clone()).collect();
        eprintln!("✗ Unknown degree '{degree}' (known: {})", known.join(", "));
        return;
    }

    let mut timeline = Timeline::new(name.clone(), user, degree.to_string());
    timeline.co_op = co_op;
    timeline.extended_credit = extended_credit;

    if !save_timeline(&db, &timeline) {
        return;
    }
    session.timeline = Some(name.clone());
    if let Err(e) = session.save() {
        eprintln!("✗ Failed to save session: {e}");
        return;
    }
    println!("✓ Created timeline '{name}'");
}

fn handle_open(config: &Config, session: &mut Session, name: String) {
    let Some(db) = open_database(config) else {
        return;
    };
    let user = match session.require_user() {
        Ok(user) => user.to_string(),
        Err(msg) => {
            eprintln!("✗ {msg}");
            return;
        }
    };

    match db.load_timeline(&name, &user) {
        Ok(Some(_)) => {
            session.timeline = Some(name.clone());
            if let Err(e) = session.save() {
                eprintln!("✗ Failed to save session: {e}");
                return;
            }
            println!("✓ Opened timeline '{name}'");
        }
        Ok(None) => eprintln!("✗ Timeline '{name}' was not found for {user}"),
        Err(err) => eprintln!("✗ Failed to load timeline: {err}"),
    }
}

fn handle_delete(config: &Config, session: &mut Session, name: &str) {
    let Some(db) = open_database(config) else {
        return;
    };
    let user = match session.require_user() {
        Ok(user) => user.to_string(),
        Err(msg) => {
            eprintln!("✗ {msg}");
            return;
        }
    };

    match db.delete_timeline(name, &user) {
        Ok(true) => {
            if session.timeline.as_deref() == Some(name) {
                session.timeline = None;
                let _ = session.save();
            }
            println!("✓ Deleted timeline '{name}'");
        }
        Ok(false) => eprintln!("✗ Timeline '{name}' was not found for {user}"),
        Err(err) => eprintln!("✗ Failed to delete timeline: {err}"),
    }
}

fn handle_show(config: &Config, session: &Session) {
    let Some(db) = open_database(config) else {
        return;
    };
    let Some(catalog) = load_catalog_for(&db) else {
        return;
    };
    let Some(timeline) = load_active_timeline(&db, session) else {
        return;
    };
    let store = TimelineStore::new(&catalog, timeline);
    let timeline = store.timeline();

    println!("\n=== {} ({}) ===", timeline.name, timeline.degree_id);
    for semester in &timeline.semesters {
        let credits = semester_credits(semester, &catalog);
        let cap = max_credits(&semester.name);
        let flag = if credits > cap { "  ⚠ over limit" } else { "" };
        println!("\n{} - {credits:.1}/{cap:.1} credits{flag}", semester.name);

        for code in &semester.courses {
            let title = catalog
                .get_course(code)
                .map_or_else(String::new, |c| format!(" - {}", c.title));
            let status = match store.status(code) {
                CourseStatus::Completed => " [completed]",
                CourseStatus::InProgress => " [in progress]",
                CourseStatus::Planned => "",
                CourseStatus::Incomplete => " [incomplete]",
            };
            println!("  {code}{title}{status}");
        }
    }

    if !timeline.exempted.is_empty() {
        println!("\nExempted: {}", timeline.exempted.join(", "));
    }
    if !timeline.deficiencies.is_empty() {
        println!("Deficiencies: {}", timeline.deficiencies.join(", "));
    }
}

fn handle_pool(config: &Config, session: &Session) {
    let Some(db) = open_database(config) else {
        return;
    };
    let Some(catalog) = load_catalog_for(&db) else {
        return;
    };
    let Some(timeline) = load_active_timeline(&db, session) else {
        return;
    };
    let store = TimelineStore::new(&catalog, timeline);

    println!("\n=== Course Pool ===\n");
    for course in store.course_pool() {
        println!("{} - {} ({:.1} cr)", course.code, course.title, course.credits);
    }
}

fn handle_validate(config: &Config, session: &Session) {
    let Some(db) = open_database(config) else {
        return;
    };
    let Some(catalog) = load_catalog_for(&db) else {
        return;
    };
    let Some(timeline) = load_active_timeline(&db, session) else {
        return;
    };
    let store = TimelineStore::new(&catalog, timeline);
    let report = store.validate();

    if report.is_clean() {
        println!("✓ No issues found");
        return;
    }

    for issue in &report.requisite_issues {
        println!(
            "✗ {} in {} is missing: {}",
            issue.course,
            issue.semester,
            issue.missing.join("; ")
        );
    }
    for issue in &report.credit_issues {
        println!(
            "⚠ {} holds {:.1} credits (limit {:.1})",
            issue.semester, issue.credits, issue.cap
        );
    }
}
