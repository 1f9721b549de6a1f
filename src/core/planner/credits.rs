//! Credit-limit rules
//!
//! Caps are advisory: the state store never blocks a move for exceeding
//! them, it only reports the overflow so the semester can be flagged.

use crate::core::catalog::Catalog;
use crate::core::models::Semester;

/// Credit cap for Summer semesters
pub const SUMMER_MAX_CREDITS: f32 = 14.0;

/// Credit cap for all other semesters
pub const TERM_MAX_CREDITS: f32 = 15.0;

/// Credit cap for a semester, by name.
///
/// Semesters whose name contains "summer" (case-insensitive) use the lower
/// Summer cap; every other term, sentinels included, uses the regular cap.
#[must_use]
pub fn max_credits(semester_name: &str) -> f32 {
    if semester_name.to_ascii_lowercase().contains("summer") {
        SUMMER_MAX_CREDITS
    } else {
        TERM_MAX_CREDITS
    }
}

/// Sum of credits currently placed in a semester
#[must_use]
pub fn semester_credits(semester: &Semester, catalog: &Catalog) -> f32 {
    semester
        .courses
        .iter()
        .map(|code| catalog.credits_of(code))
        .sum()
}

/// Whether a semester's summed credits exceed its cap
#[must_use]
pub fn over_limit(semester: &Semester, catalog: &Catalog) -> bool {
    semester_credits(semester, catalog) > max_credits(&semester.name)
}
