//! Course model

use super::requisite::{RequisiteGroup, RequisiteKind};
use super::semester::Season;
use serde::{Deserialize, Serialize};

/// Scheduling status of a course within a planning session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseStatus {
    /// Passed in a completed term (or credited by exemption)
    Completed,
    /// Registered in the current term
    InProgress,
    /// Placed in a future semester of the timeline
    Planned,
    /// Not placed anywhere (sitting in the course pool)
    #[default]
    Incomplete,
}

/// Represents a course in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course code (e.g., "COMP248")
    pub code: String,

    /// Course title (e.g., "Object-Oriented Programming I")
    pub title: String,

    /// Credit value (can be fractional)
    pub credits: f32,

    /// Catalog description
    #[serde(default)]
    pub description: String,

    /// Seasons the course is offered in
    #[serde(default)]
    pub terms_offered: Vec<Season>,

    /// Requisite groups; every group must be satisfied
    #[serde(default)]
    pub requisites: Vec<RequisiteGroup>,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `code` - Normalized course code (e.g., "COMP248")
    /// * `title` - Full course title
    /// * `credits` - Credit value (can be fractional)
    #[must_use]
    pub const fn new(code: String, title: String, credits: f32) -> Self {
        Self {
            code,
            title,
            credits,
            description: String::new(),
            terms_offered: Vec::new(),
            requisites: Vec::new(),
        }
    }

    /// Add a singleton prerequisite by course code
    pub fn add_prerequisite(&mut self, code: String) {
        self.add_requisite(RequisiteGroup::single(RequisiteKind::Pre, code));
    }

    /// Add a singleton corequisite by course code
    pub fn add_corequisite(&mut self, code: String) {
        self.add_requisite(RequisiteGroup::single(RequisiteKind::Co, code));
    }

    /// Add a requisite group, folding it into an existing group with the
    /// same id and kind when one exists
    pub fn add_requisite(&mut self, group: RequisiteGroup) {
        if let Some(id) = &group.group {
            if let Some(existing) = self
                .requisites
                .iter_mut()
                .find(|g| g.kind == group.kind && g.group.as_deref() == Some(id.as_str()))
            {
                for alt in group.alternatives {
                    if !existing.alternatives.contains(&alt) {
                        existing.alternatives.push(alt);
                    }
                }
                return;
            }
        }
        self.requisites.push(group);
    }

    /// Whether the course is offered in the given season.
    /// An empty offered-terms set means the catalog does not restrict it.
    #[must_use]
    pub fn offered_in(&self, season: Season) -> bool {
        self.terms_offered.is_empty() || self.terms_offered.contains(&season)
    }
}

/// Normalize a course code to CODE-without-spaces form.
/// Handles inputs like "COMP 248", "COMP248", "  SOEN - 287 ".
#[must_use]
pub fn normalize_course_code(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "COMP248".to_string(),
            "Object-Oriented Programming I".to_string(),
            3.5,
        );

        assert_eq!(course.code, "COMP248");
        assert_eq!(course.title, "Object-Oriented Programming I");
        assert!((course.credits - 3.5).abs() < f32::EPSILON);
        assert!(course.requisites.is_empty());
        assert!(course.terms_offered.is_empty());
    }

    #[test]
    fn test_add_prerequisite() {
        let mut course = Course::new(
            "COMP249".to_string(),
            "Object-Oriented Programming II".to_string(),
            3.5,
        );

        course.add_prerequisite("COMP248".to_string());

        assert_eq!(course.requisites.len(), 1);
        assert_eq!(course.requisites[0].kind, RequisiteKind::Pre);
        assert_eq!(course.requisites[0].alternatives, vec!["COMP248"]);
    }

    #[test]
    fn test_add_corequisite() {
        let mut course = Course::new("COMP232".to_string(), "Math for CS".to_string(), 3.0);

        course.add_corequisite("MATH203".to_string());

        assert_eq!(course.requisites.len(), 1);
        assert_eq!(course.requisites[0].kind, RequisiteKind::Co);
    }

    #[test]
    fn test_grouped_requisites_fold() {
        let mut course = Course::new("COMP352".to_string(), "Data Structures".to_string(), 3.0);

        course.add_requisite(RequisiteGroup::grouped(
            "discrete".to_string(),
            RequisiteKind::Pre,
            vec!["COMP232".to_string()],
        ));
        course.add_requisite(RequisiteGroup::grouped(
            "discrete".to_string(),
            RequisiteKind::Pre,
            vec!["MATH339".to_string()],
        ));

        // Same group id folds into one disjunctive slot
        assert_eq!(course.requisites.len(), 1);
        assert_eq!(course.requisites[0].alternatives.len(), 2);

        // Duplicate alternative is not re-added
        course.add_requisite(RequisiteGroup::grouped(
            "discrete".to_string(),
            RequisiteKind::Pre,
            vec!["MATH339".to_string()],
        ));
        assert_eq!(course.requisites[0].alternatives.len(), 2);
    }

    #[test]
    fn test_offered_in() {
        let mut course = Course::new("ENGR213".to_string(), "Applied ODEs".to_string(), 3.0);
        assert!(course.offered_in(Season::Winter)); // unrestricted

        course.terms_offered = vec![Season::Fall, Season::Winter];
        assert!(course.offered_in(Season::Fall));
        assert!(!course.offered_in(Season::Summer));
    }

    #[test]
    fn test_normalize_course_code() {
        assert_eq!(normalize_course_code("COMP 248"), "COMP248");
        assert_eq!(normalize_course_code("comp248"), "COMP248");
        assert_eq!(normalize_course_code("  SOEN - 287 "), "SOEN287");
        assert_eq!(normalize_course_code(""), "");
    }

    #[test]
    fn test_default_status() {
        assert_eq!(CourseStatus::default(), CourseStatus::Incomplete);
    }
}
