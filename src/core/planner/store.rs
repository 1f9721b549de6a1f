//! Timeline state store
//!
//! The store owns the authoritative semester → course mapping for one
//! timeline and applies every planner mutation: adding/removing semesters
//! and moving courses between the pool and semesters. Credit caps are
//! advisory: an over-limit move completes and the overflow is reported in
//! the outcome so the caller can flag the semester and warn the user.

use crate::core::catalog::Catalog;
use crate::core::models::{Course, CourseStatus, Season, Semester, Timeline};
use crate::core::planner::credits::{max_credits, semester_credits};
use crate::core::planner::requisites::{unmet_requisites, Placements};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors from timeline mutations. A rejected mutation leaves the
/// timeline unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A semester with the same name already exists
    #[error("Semester '{0}' already exists in the timeline")]
    DuplicateSemester(String),

    /// The named semester is not part of the timeline
    #[error("Semester '{0}' is not part of the timeline")]
    UnknownSemester(String),

    /// The course code is not in the catalog
    #[error("Course '{0}' is not in the catalog")]
    UnknownCourse(String),
}

/// Destination of a course move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Return the course to the course pool (detach from its semester)
    Pool,
    /// Place the course into a semester, optionally at a specific index
    Semester {
        /// Target semester name
        name: String,
        /// Insertion index within the semester (appended when omitted)
        index: Option<usize>,
    },
}

/// Result of a completed course move
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    /// Destination semester, `None` for a return to the pool
    pub semester: Option<String>,
    /// Destination semester's summed credits after the move
    pub credits: f32,
    /// Destination semester's credit cap
    pub cap: f32,
    /// Whether the destination now exceeds its cap (advisory flag)
    pub over_limit: bool,
}

/// A course placed somewhere its requisites are not satisfied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequisiteIssue {
    /// Offending course code
    pub course: String,
    /// Semester holding the course
    pub semester: String,
    /// Rendered unmet groups (alternatives joined with " or ")
    pub missing: Vec<String>,
}

/// A semester whose summed credits exceed its cap
#[derive(Debug, Clone, PartialEq)]
pub struct CreditIssue {
    /// Flagged semester name
    pub semester: String,
    /// Summed credits
    pub credits: f32,
    /// Applicable cap
    pub cap: f32,
}

/// Validation results over the whole timeline
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Courses with unmet requisites
    pub requisite_issues: Vec<RequisiteIssue>,
    /// Semesters over their credit cap
    pub credit_issues: Vec<CreditIssue>,
}

impl ValidationReport {
    /// True when no issue of either kind was found
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.requisite_issues.is_empty() && self.credit_issues.is_empty()
    }
}

/// Authoritative planner state for one timeline
#[derive(Debug, Clone)]
pub struct TimelineStore<'a> {
    catalog: &'a Catalog,
    timeline: Timeline,
    statuses: HashMap<String, CourseStatus>,
    exempted: HashSet<String>,
}

impl<'a> TimelineStore<'a> {
    /// Create a store over an existing timeline.
    ///
    /// Placed courses start as `Planned`, exempted courses as `Completed`;
    /// everything else in the catalog sits in the pool as `Incomplete`.
    #[must_use]
    pub fn new(catalog: &'a Catalog, timeline: Timeline) -> Self {
        let mut statuses = HashMap::new();
        for code in timeline.placed_courses() {
            statuses.insert(code, CourseStatus::Planned);
        }
        for code in &timeline.exempted {
            statuses.insert(code.clone(), CourseStatus::Completed);
        }
        let exempted = timeline.exempted.iter().cloned().collect();

        Self {
            catalog,
            timeline,
            statuses,
            exempted,
        }
    }

    /// The timeline in its current state
    #[must_use]
    pub const fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Consume the store and return the timeline for persistence
    #[must_use]
    pub fn into_timeline(self) -> Timeline {
        self.timeline
    }

    /// The catalog backing this store
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        self.catalog
    }

    /// Current status of a course
    #[must_use]
    pub fn status(&self, code: &str) -> CourseStatus {
        self.statuses.get(code).copied().unwrap_or_default()
    }

    /// Record a status for a course (used by ingestion seeding)
    pub fn set_status(&mut self, code: String, status: CourseStatus) {
        self.statuses.insert(code, status);
    }

    /// Mark a course as exempted: it leaves the pool and satisfies
    /// requisites everywhere
    pub fn add_exemption(&mut self, code: String) {
        if !self.timeline.exempted.contains(&code) {
            self.timeline.exempted.push(code.clone());
        }
        self.statuses.insert(code.clone(), CourseStatus::Completed);
        self.exempted.insert(code);
    }

    /// Record a deficiency course on the timeline (idempotent)
    pub fn add_deficiency(&mut self, code: String) {
        if !self.timeline.deficiencies.contains(&code) {
            self.timeline.deficiencies.push(code);
        }
    }

    /// Add a semester for the given season and year.
    ///
    /// # Errors
    /// [`StoreError::DuplicateSemester`] when the identical term already
    /// exists; the timeline is left unchanged.
    pub fn add_semester(&mut self, season: Season, year: u16) -> Result<String, StoreError> {
        self.add_semester_named(Semester::term_name(season, year))
    }

    /// Add a semester by full term name (used for parsed transcript terms
    /// and sentinel terms). Re-sorts the timeline chronologically.
    ///
    /// # Errors
    /// [`StoreError::DuplicateSemester`] when the name already exists.
    pub fn add_semester_named(&mut self, name: String) -> Result<String, StoreError> {
        if self.timeline.semester(&name).is_some() {
            return Err(StoreError::DuplicateSemester(name));
        }
        self.timeline.semesters.push(Semester::new(name.clone()));
        self.timeline.sort_semesters();
        Ok(name)
    }

    /// Remove a semester. Its courses are detached from the plan (they
    /// reappear in the pool as `Incomplete`); they are not reassigned.
    ///
    /// # Errors
    /// [`StoreError::UnknownSemester`] when no such semester exists.
    pub fn remove_semester(&mut self, name: &str) -> Result<Vec<String>, StoreError> {
        let position = self
            .timeline
            .semesters
            .iter()
            .position(|s| s.name == name)
            .ok_or_else(|| StoreError::UnknownSemester(name.to_string()))?;

        let removed = self.timeline.semesters.remove(position);
        for code in &removed.courses {
            self.statuses.insert(code.clone(), CourseStatus::Incomplete);
        }
        Ok(removed.courses)
    }

    /// Move a course to a drop target.
    ///
    /// The course is always removed from whichever semester holds it before
    /// the insertion happens, so it belongs to at most one semester. A move
    /// that pushes the destination over its credit cap still completes; the
    /// outcome carries the advisory flag.
    ///
    /// # Errors
    /// [`StoreError::UnknownCourse`] when the code is not in the catalog,
    /// [`StoreError::UnknownSemester`] when the destination does not exist.
    /// Both reject before any state change.
    pub fn move_course(&mut self, code: &str, target: &DropTarget) -> Result<MoveOutcome, StoreError> {
        if self.catalog.get_course(code).is_none() {
            return Err(StoreError::UnknownCourse(code.to_string()));
        }

        match target {
            DropTarget::Pool => {
                self.detach(code);
                self.statuses.insert(code.to_string(), CourseStatus::Incomplete);
                Ok(MoveOutcome {
                    semester: None,
                    credits: 0.0,
                    cap: 0.0,
                    over_limit: false,
                })
            }
            DropTarget::Semester { name, index } => {
                if self.timeline.semester(name).is_none() {
                    return Err(StoreError::UnknownSemester(name.clone()));
                }

                self.detach(code);

                let cap = max_credits(name);
                let Some(semester) = self.timeline.semester_mut(name) else {
                    return Err(StoreError::UnknownSemester(name.clone()));
                };
                let at = index
                    .unwrap_or(semester.courses.len())
                    .min(semester.courses.len());
                semester.courses.insert(at, code.to_string());
                let credits = semester_credits(semester, self.catalog);

                self.statuses.insert(code.to_string(), CourseStatus::Planned);

                Ok(MoveOutcome {
                    semester: Some(name.clone()),
                    credits,
                    cap,
                    over_limit: credits > cap,
                })
            }
        }
    }

    /// Remove a course from whichever semester currently holds it
    fn detach(&mut self, code: &str) {
        for semester in &mut self.timeline.semesters {
            semester.courses.retain(|c| c != code);
        }
    }

    /// Catalog courses not placed in any semester and not exempted,
    /// sorted by code
    #[must_use]
    pub fn course_pool(&self) -> Vec<&Course> {
        let placed: HashSet<String> = self.timeline.placed_courses().into_iter().collect();
        let mut pool: Vec<&Course> = self
            .catalog
            .courses()
            .into_iter()
            .filter(|c| !placed.contains(&c.code) && !self.exempted.contains(&c.code))
            .collect();
        pool.sort_by(|a, b| a.code.cmp(&b.code));
        pool
    }

    /// Placement snapshot for requisite checks
    #[must_use]
    pub fn placements(&self) -> Placements<'_> {
        Placements {
            semesters: &self.timeline.semesters,
            exempted: &self.exempted,
        }
    }

    /// Validate the whole timeline: unmet requisites per placed course and
    /// over-cap semesters. Sentinel terms are skipped.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        let placements = self.placements();

        for (index, semester) in self.timeline.semesters.iter().enumerate() {
            if semester.is_sentinel() {
                continue;
            }

            for code in &semester.courses {
                let unmet = unmet_requisites(code, index, &placements, self.catalog);
                if !unmet.is_empty() {
                    report.requisite_issues.push(RequisiteIssue {
                        course: code.clone(),
                        semester: semester.name.clone(),
                        missing: unmet
                            .iter()
                            .map(|group| group.alternatives.join(" or "))
                            .collect(),
                    });
                }
            }

            let credits = semester_credits(semester, self.catalog);
            let cap = max_credits(&semester.name);
            if credits > cap {
                report.credit_issues.push(CreditIssue {
                    semester: semester.name.clone(),
                    credits,
                    cap,
                });
            }
        }

        report
    }
}
