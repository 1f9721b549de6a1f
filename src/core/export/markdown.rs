//! Markdown timeline export
//!
//! Renders a timeline as Markdown using template substitution. The output
//! renders well in GitHub, GitLab, and VS Code.

use super::TimelineExporter;
use crate::core::planner::credits::{max_credits, semester_credits};
use crate::core::planner::TimelineStore;
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown timeline template
const TIMELINE_TEMPLATE: &str = include_str!("templates/timeline.md");

/// Markdown timeline exporter
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Create a new Markdown exporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    fn render_template(store: &TimelineStore) -> String {
        let timeline = store.timeline();
        let catalog = store.catalog();
        let mut output = TIMELINE_TEMPLATE.to_string();

        output = output.replace("{{timeline_name}}", &timeline.name);
        output = output.replace("{{owner}}", &timeline.owner);

        let degree = catalog.get_degree(&timeline.degree_id);
        let degree_name = degree.map_or(timeline.degree_id.clone(), |d| d.name.clone());
        output = output.replace("{{degree_name}}", &degree_name);

        let mut options = Vec::new();
        if timeline.co_op {
            options.push("Co-op");
        }
        if timeline.extended_credit {
            options.push("Extended Credit Program");
        }
        let options_str = if options.is_empty() {
            "None".to_string()
        } else {
            options.join(", ")
        };
        output = output.replace("{{options}}", &options_str);

        let placed_credits: f32 = timeline
            .placed_courses()
            .iter()
            .map(|code| catalog.credits_of(code))
            .sum();
        output = output.replace("{{placed_credits}}", &format!("{placed_credits:.1}"));
        let degree_credits = degree.map_or(0.0, |d| d.total_credits);
        output = output.replace("{{degree_credits}}", &format!("{degree_credits:.1}"));

        output = output.replace("{{semester_table}}", &Self::semester_table(store));
        output = output.replace("{{pool_table}}", &Self::pool_table(store));
        output = output.replace("{{exemptions}}", &Self::exemptions_section(store));
        output = output.replace("{{warnings}}", &Self::warnings_section(store));

        output
    }

    /// Generate the semester-by-semester table
    fn semester_table(store: &TimelineStore) -> String {
        let timeline = store.timeline();
        if timeline.semesters.is_empty() {
            return "_No semesters yet._".to_string();
        }

        let mut table = String::new();
        let _ = writeln!(table, "| Semester | Courses | Credits | Cap |");
        table.push_str("|---|---|---|---|\n");

        for semester in &timeline.semesters {
            let courses: Vec<String> = semester
                .courses
                .iter()
                .map(|code| {
                    store.catalog().get_course(code).map_or_else(
                        || code.clone(),
                        |c| format!("{code} - {}", c.title),
                    )
                })
                .collect();

            let credits = semester_credits(semester, store.catalog());
            let cap = max_credits(&semester.name);
            let flag = if credits > cap { " ⚠ over limit" } else { "" };

            let _ = writeln!(
                table,
                "| {} | {} | {credits:.1}{flag} | {cap:.1} |",
                semester.name,
                if courses.is_empty() {
                    "(none)".to_string()
                } else {
                    courses.join(", ")
                },
            );
        }

        table
    }

    /// Generate the requirement-pool progress table
    fn pool_table(store: &TimelineStore) -> String {
        let timeline = store.timeline();
        let pools = store.catalog().pools_for_degree(&timeline.degree_id);
        if pools.is_empty() {
            return "_No pools defined for this degree._".to_string();
        }

        let placed: Vec<String> = timeline.placed_courses();
        let mut table = String::new();
        let _ = writeln!(table, "| Pool | Earned | Required |");
        table.push_str("|---|---|---|\n");

        for pool in pools {
            let earned: f32 = pool
                .courses
                .iter()
                .filter(|code| {
                    placed.iter().any(|p| p == *code)
                        || timeline.exempted.iter().any(|e| e == *code)
                })
                .map(|code| store.catalog().credits_of(code))
                .sum();

            let _ = writeln!(
                table,
                "| {} | {earned:.1} | {:.1} |",
                pool.name, pool.required_credits
            );
        }

        table
    }

    /// Generate the exemptions/deficiencies section
    fn exemptions_section(store: &TimelineStore) -> String {
        let timeline = store.timeline();
        if timeline.exempted.is_empty() && timeline.deficiencies.is_empty() {
            return "_None._".to_string();
        }

        let mut section = String::new();
        for code in &timeline.exempted {
            let _ = writeln!(section, "- Exempted: {code}");
        }
        for code in &timeline.deficiencies {
            let _ = writeln!(section, "- Deficiency: {code}");
        }
        section
    }

    /// Generate the warnings section from timeline validation
    fn warnings_section(store: &TimelineStore) -> String {
        let report = store.validate();
        if report.is_clean() {
            return "_No issues found._".to_string();
        }

        let mut section = String::new();
        for issue in &report.requisite_issues {
            let _ = writeln!(
                section,
                "- {} in {} is missing: {}",
                issue.course,
                issue.semester,
                issue.missing.join("; ")
            );
        }
        for issue in &report.credit_issues {
            let _ = writeln!(
                section,
                "- {} holds {:.1} credits (cap {:.1})",
                issue.semester, issue.credits, issue.cap
            );
        }
        section
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineExporter for MarkdownExporter {
    fn render(&self, store: &TimelineStore) -> Result<String, Box<dyn Error>> {
        Ok(Self::render_template(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use crate::core::models::{Course, Degree, Pool, Season, Timeline};
    use crate::core::planner::DropTarget;

    fn store_fixture(catalog: &Catalog) -> TimelineStore<'_> {
        let mut timeline = Timeline::new(
            "My Plan".to_string(),
            "student@example.com".to_string(),
            "BCompSc".to_string(),
        );
        timeline.co_op = true;

        let mut store = TimelineStore::new(catalog, timeline);
        store.add_semester(Season::Fall, 2025).unwrap();
        store
            .move_course(
                "COMP248",
                &DropTarget::Semester {
                    name: "Fall 2025".to_string(),
                    index: None,
                },
            )
            .unwrap();
        store.add_exemption("MATH203".to_string());
        store
    }

    fn catalog_fixture() -> Catalog {
        let mut pool = Pool::new("comp-core".to_string(), "CS Core".to_string(), 7.0);
        pool.courses = vec!["COMP248".to_string(), "MATH203".to_string()];
        let mut degree = Degree::new("BCompSc".to_string(), "Computer Science".to_string(), 90.0);
        degree.pools = vec!["comp-core".to_string()];

        Catalog::from_parts(
            vec![
                Course::new("COMP248".to_string(), "OOP I".to_string(), 3.5),
                Course::new("MATH203".to_string(), "Calculus I".to_string(), 3.0),
            ],
            vec![pool],
            vec![degree],
        )
    }

    #[test]
    fn test_render_includes_header_and_tables() {
        let catalog = catalog_fixture();
        let store = store_fixture(&catalog);
        let output = MarkdownExporter::new().render(&store).unwrap();

        assert!(output.contains("# My Plan"));
        assert!(output.contains("student@example.com"));
        assert!(output.contains("Computer Science"));
        assert!(output.contains("Co-op"));
        assert!(output.contains("| Fall 2025 | COMP248 - OOP I | 3.5 | 15.0 |"));
        assert!(output.contains("- Exempted: MATH203"));
        assert!(output.contains("_No issues found._"));
    }

    #[test]
    fn test_pool_progress_counts_placed_and_exempted() {
        let catalog = catalog_fixture();
        let store = store_fixture(&catalog);
        let output = MarkdownExporter::new().render(&store).unwrap();

        // COMP248 placed (3.5) + MATH203 exempted (3.0)
        assert!(output.contains("| CS Core | 6.5 | 7.0 |"));
    }

    #[test]
    fn test_generate_writes_file() {
        let catalog = catalog_fixture();
        let store = store_fixture(&catalog);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.md");

        MarkdownExporter::new().generate(&store, &path).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("# My Plan"));
    }
}
