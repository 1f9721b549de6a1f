//! Timeline model

use super::semester::{compare_semesters, Semester};
use serde::{Deserialize, Serialize};

/// A named multi-semester degree plan owned by a user.
///
/// Invariant: a course code appears in at most one semester at a time;
/// every move removes the course from its source before inserting at the
/// destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Timeline name (unique per owner)
    pub name: String,

    /// Owning user's email
    pub owner: String,

    /// Associated degree identifier
    pub degree_id: String,

    /// Whether the student is in the extended credit program
    #[serde(default)]
    pub extended_credit: bool,

    /// Whether the plan includes co-op work terms
    #[serde(default)]
    pub co_op: bool,

    /// Courses credited without being scheduled (transfer/exemption)
    #[serde(default)]
    pub exempted: Vec<String>,

    /// Deficiency courses required on top of the regular program
    #[serde(default)]
    pub deficiencies: Vec<String>,

    /// Semesters in chronological order
    #[serde(default)]
    pub semesters: Vec<Semester>,
}

impl Timeline {
    /// Create an empty timeline
    #[must_use]
    pub const fn new(name: String, owner: String, degree_id: String) -> Self {
        Self {
            name,
            owner,
            degree_id,
            extended_credit: false,
            co_op: false,
            exempted: Vec::new(),
            deficiencies: Vec::new(),
            semesters: Vec::new(),
        }
    }

    /// Find a semester by name
    #[must_use]
    pub fn semester(&self, name: &str) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.name == name)
    }

    /// Find a semester by name, mutably
    pub fn semester_mut(&mut self, name: &str) -> Option<&mut Semester> {
        self.semesters.iter_mut().find(|s| s.name == name)
    }

    /// Index of the semester currently holding a course, if any
    #[must_use]
    pub fn semester_index_of(&self, code: &str) -> Option<usize> {
        self.semesters
            .iter()
            .position(|s| s.courses.iter().any(|c| c == code))
    }

    /// All course codes placed in any semester, in chronological order
    #[must_use]
    pub fn placed_courses(&self) -> Vec<String> {
        self.semesters
            .iter()
            .flat_map(|s| s.courses.iter().cloned())
            .collect()
    }

    /// Re-sort semesters chronologically (year, then season rank)
    pub fn sort_semesters(&mut self) {
        self.semesters
            .sort_by(|a, b| compare_semesters(&a.name, &b.name));
    }
}
