//! Requisite group model

use serde::{Deserialize, Serialize};

/// Relation a requisite group imposes on its owning course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequisiteKind {
    /// Prerequisite: an alternative must be scheduled strictly earlier
    Pre,
    /// Corequisite: an alternative must be scheduled no later than the course
    Co,
}

/// One requisite slot of a course: a disjunction of alternative course codes.
///
/// Alternatives sharing a catalog group id are folded into a single group;
/// an ungrouped requisite is its own singleton group. A course's requisites
/// are met only when every group is met (conjunction of disjunctions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequisiteGroup {
    /// Catalog group identifier shared by grouped alternatives
    #[serde(default)]
    pub group: Option<String>,
    /// Relation imposed by this group
    pub kind: RequisiteKind,
    /// Alternative course codes; any one satisfies the group
    pub alternatives: Vec<String>,
}

impl RequisiteGroup {
    /// Create a singleton group for a single required course
    #[must_use]
    pub fn single(kind: RequisiteKind, code: String) -> Self {
        Self {
            group: None,
            kind,
            alternatives: vec![code],
        }
    }

    /// Create a named group of alternatives
    #[must_use]
    pub const fn grouped(id: String, kind: RequisiteKind, alternatives: Vec<String>) -> Self {
        Self {
            group: Some(id),
            kind,
            alternatives,
        }
    }
}
