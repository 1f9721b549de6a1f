//! Requisite checking
//!
//! Pure functions evaluating whether a course's prerequisite/corequisite
//! groups are satisfied by the current timeline placement. A group is a
//! disjunction of alternatives; the course's requisites are the conjunction
//! of its groups.

use crate::core::catalog::Catalog;
use crate::core::models::{RequisiteGroup, RequisiteKind, Semester};
use std::collections::HashSet;

/// A read-only snapshot of where courses currently sit
#[derive(Debug, Clone, Copy)]
pub struct Placements<'a> {
    /// Semesters in chronological order
    pub semesters: &'a [Semester],
    /// Courses credited without scheduling (always satisfy requisites)
    pub exempted: &'a HashSet<String>,
}

impl Placements<'_> {
    /// Semester index currently holding `code`, if placed
    #[must_use]
    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.semesters
            .iter()
            .position(|s| s.courses.iter().any(|c| c == code))
    }
}

/// Whether one requisite group is satisfied for a course placed at
/// `semester_index`.
///
/// An alternative satisfies the group when it is exempted, or placed in a
/// semester index meeting the group's relation: strictly earlier for
/// prerequisites, same-or-earlier for corequisites.
#[must_use]
pub fn group_met(group: &RequisiteGroup, semester_index: usize, placements: &Placements) -> bool {
    group.alternatives.iter().any(|alt| {
        if placements.exempted.contains(alt) {
            return true;
        }
        placements.index_of(alt).is_some_and(|idx| match group.kind {
            RequisiteKind::Pre => idx < semester_index,
            RequisiteKind::Co => idx <= semester_index,
        })
    })
}

/// Whether all of a course's requisite groups are satisfied at
/// `semester_index`. A course with no groups is trivially satisfied.
#[must_use]
pub fn requisites_met(code: &str, semester_index: usize, placements: &Placements, catalog: &Catalog) -> bool {
    catalog.get_course(code).map_or(true, |course| {
        course
            .requisites
            .iter()
            .all(|group| group_met(group, semester_index, placements))
    })
}

/// The requisite groups of a course that are NOT satisfied at
/// `semester_index`, for reporting
#[must_use]
pub fn unmet_requisites<'a>(
    code: &str,
    semester_index: usize,
    placements: &Placements,
    catalog: &'a Catalog,
) -> Vec<&'a RequisiteGroup> {
    catalog.get_course(code).map_or_else(Vec::new, |course| {
        course
            .requisites
            .iter()
            .filter(|group| !group_met(group, semester_index, placements))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;

    fn catalog() -> Catalog {
        let comp248 = Course::new("COMP248".to_string(), "OOP I".to_string(), 3.5);

        let mut comp249 = Course::new("COMP249".to_string(), "OOP II".to_string(), 3.5);
        comp249.add_prerequisite("COMP248".to_string());

        let mut comp232 = Course::new("COMP232".to_string(), "Math for CS".to_string(), 3.0);
        comp232.add_corequisite("MATH203".to_string());

        let math203 = Course::new("MATH203".to_string(), "Calculus I".to_string(), 3.0);
        let math209 = Course::new("MATH209".to_string(), "Calculus II".to_string(), 3.0);

        // Grouped alternatives: either calculus course unlocks COMP352
        let mut comp352 = Course::new("COMP352".to_string(), "Data Structures".to_string(), 3.0);
        comp352.add_requisite(RequisiteGroup::grouped(
            "calc".to_string(),
            RequisiteKind::Pre,
            vec!["MATH203".to_string(), "MATH209".to_string()],
        ));

        Catalog::from_parts(
            vec![comp248, comp249, comp232, math203, math209, comp352],
            Vec::new(),
            Vec::new(),
        )
    }

    fn semesters(layout: &[(&str, &[&str])]) -> Vec<Semester> {
        layout
            .iter()
            .map(|(name, codes)| {
                let mut sem = Semester::new((*name).to_string());
                sem.courses = codes.iter().map(|c| (*c).to_string()).collect();
                sem
            })
            .collect()
    }

    #[test]
    fn test_no_requisites_trivially_met() {
        let catalog = catalog();
        let sems = semesters(&[("Fall 2025", &["COMP248"])]);
        let exempted = HashSet::new();
        let placements = Placements {
            semesters: &sems,
            exempted: &exempted,
        };

        assert!(requisites_met("COMP248", 0, &placements, &catalog));
    }

    #[test]
    fn test_prerequisite_requires_strictly_earlier() {
        let catalog = catalog();
        let exempted = HashSet::new();

        let earlier = semesters(&[("Fall 2025", &["COMP248"]), ("Winter 2026", &["COMP249"])]);
        let placements = Placements {
            semesters: &earlier,
            exempted: &exempted,
        };
        assert!(requisites_met("COMP249", 1, &placements, &catalog));

        // Same semester does not satisfy a prerequisite
        let same = semesters(&[("Fall 2025", &["COMP248", "COMP249"])]);
        let placements = Placements {
            semesters: &same,
            exempted: &exempted,
        };
        assert!(!requisites_met("COMP249", 0, &placements, &catalog));

        // Absent prerequisite fails
        let absent = semesters(&[("Fall 2025", &["COMP249"])]);
        let placements = Placements {
            semesters: &absent,
            exempted: &exempted,
        };
        assert!(!requisites_met("COMP249", 0, &placements, &catalog));
    }

    #[test]
    fn test_corequisite_allows_same_semester() {
        let catalog = catalog();
        let exempted = HashSet::new();

        let same = semesters(&[("Fall 2025", &["COMP232", "MATH203"])]);
        let placements = Placements {
            semesters: &same,
            exempted: &exempted,
        };
        assert!(requisites_met("COMP232", 0, &placements, &catalog));

        let earlier = semesters(&[("Fall 2025", &["MATH203"]), ("Winter 2026", &["COMP232"])]);
        let placements = Placements {
            semesters: &earlier,
            exempted: &exempted,
        };
        assert!(requisites_met("COMP232", 1, &placements, &catalog));

        // Corequisite scheduled later fails
        let later = semesters(&[("Fall 2025", &["COMP232"]), ("Winter 2026", &["MATH203"])]);
        let placements = Placements {
            semesters: &later,
            exempted: &exempted,
        };
        assert!(!requisites_met("COMP232", 0, &placements, &catalog));
    }

    #[test]
    fn test_grouped_alternatives_any_member_satisfies() {
        let catalog = catalog();
        let exempted = HashSet::new();

        let with_alt = semesters(&[("Fall 2025", &["MATH209"]), ("Winter 2026", &["COMP352"])]);
        let placements = Placements {
            semesters: &with_alt,
            exempted: &exempted,
        };
        assert!(requisites_met("COMP352", 1, &placements, &catalog));

        let with_neither = semesters(&[("Winter 2026", &["COMP352"])]);
        let placements = Placements {
            semesters: &with_neither,
            exempted: &exempted,
        };
        assert!(!requisites_met("COMP352", 0, &placements, &catalog));
    }

    #[test]
    fn test_exempted_course_satisfies_group() {
        let catalog = catalog();
        let exempted: HashSet<String> = ["COMP248".to_string()].into_iter().collect();

        let sems = semesters(&[("Fall 2025", &["COMP249"])]);
        let placements = Placements {
            semesters: &sems,
            exempted: &exempted,
        };
        assert!(requisites_met("COMP249", 0, &placements, &catalog));
    }

    #[test]
    fn test_unmet_requisites_reports_failing_groups() {
        let catalog = catalog();
        let exempted = HashSet::new();

        let sems = semesters(&[("Fall 2025", &["COMP249", "COMP352"])]);
        let placements = Placements {
            semesters: &sems,
            exempted: &exempted,
        };

        let unmet = unmet_requisites("COMP249", 0, &placements, &catalog);
        assert_eq!(unmet.len(), 1);
        assert_eq!(unmet[0].alternatives, vec!["COMP248"]);

        assert!(unmet_requisites("COMP248", 0, &placements, &catalog).is_empty());
    }
}
