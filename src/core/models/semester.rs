//! Semester model and term ordering
//!
//! A semester is identified by its display name ("Fall 2025"). Two sentinel
//! names exist outside the season/year scheme: [`EXEMPTED`] holds courses
//! credited without being scheduled, and [`DEFICIENCIES`] holds courses the
//! admission letter requires on top of the regular program.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::LazyLock;

/// Sentinel term for exempted/transfer-credited courses.
pub const EXEMPTED: &str = "Exempted";

/// Sentinel term for deficiency courses.
pub const DEFICIENCIES: &str = "Deficiencies";

/// Number of terms in a standard four-year plan (three terms per year).
pub const FOUR_YEAR_TERMS: usize = 12;

static YEAR_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\b(\d{4})\b").expect("year pattern is valid"));

/// Academic season within a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// Winter term (January start)
    Winter,
    /// Summer term
    Summer,
    /// Fall term
    Fall,
    /// Year-spanning Fall/Winter term
    FallWinter,
}

impl Season {
    /// Sort rank within a year: Winter < Summer < Fall < Fall/Winter
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Winter => 1,
            Self::Summer => 2,
            Self::Fall => 3,
            Self::FallWinter => 4,
        }
    }

    /// Parse a season from its display name (case-insensitive)
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "winter" => Some(Self::Winter),
            "summer" => Some(Self::Summer),
            "fall" => Some(Self::Fall),
            "fall/winter" => Some(Self::FallWinter),
            _ => None,
        }
    }

    /// Display name of the season
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Winter => "Winter",
            Self::Summer => "Summer",
            Self::Fall => "Fall",
            Self::FallWinter => "Fall/Winter",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A semester in a timeline: a named term holding an ordered course list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    /// Term display name (e.g., "Fall 2025", or a sentinel)
    pub name: String,
    /// Ordered course codes placed in this term
    pub courses: Vec<String>,
}

impl Semester {
    /// Create an empty semester with the given name
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            courses: Vec::new(),
        }
    }

    /// Build the canonical term name for a season and year
    #[must_use]
    pub fn term_name(season: Season, year: u16) -> String {
        format!("{season} {year}")
    }

    /// Whether this semester is one of the sentinel terms
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        is_sentinel(&self.name)
    }
}

/// Whether a term name is one of the sentinel terms (case-insensitive)
#[must_use]
pub fn is_sentinel(name: &str) -> bool {
    name.eq_ignore_ascii_case(EXEMPTED) || name.eq_ignore_ascii_case(DEFICIENCIES)
}

/// Extract the 4-digit year from a term name, if any
fn year_of(name: &str) -> Option<u16> {
    YEAR_RE
        .captures(name)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Season sort rank for a term name.
///
/// Unknown or malformed season strings rank after every known season so the
/// ordering stays total and deterministic.
fn season_rank(name: &str) -> u8 {
    let lower = name.to_ascii_lowercase();
    if lower.contains("fall/winter") {
        Season::FallWinter.rank()
    } else if lower.contains("winter") {
        Season::Winter.rank()
    } else if lower.contains("summer") {
        Season::Summer.rank()
    } else if lower.contains("fall") {
        Season::Fall.rank()
    } else {
        5
    }
}

/// Order two term names chronologically.
///
/// Numeric year ascending, then season rank (Winter < Summer < Fall <
/// Fall/Winter), then lexicographically. Terms without a parseable year
/// (including the sentinels) sort after dated terms.
#[must_use]
pub fn compare_semesters(a: &str, b: &str) -> Ordering {
    let (year_a, year_b) = (year_of(a), year_of(b));
    match (year_a, year_b) {
        (Some(ya), Some(yb)) => ya
            .cmp(&yb)
            .then_with(|| season_rank(a).cmp(&season_rank(b)))
            .then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Parse a term name into its season and year.
///
/// Returns `None` for sentinels, missing years, or unknown seasons.
#[must_use]
pub fn parse_term(name: &str) -> Option<(Season, u16)> {
    let year = year_of(name)?;
    let season_word = name.trim().split_whitespace().next()?;
    let season = Season::parse(season_word)?;
    Some((season, year))
}

/// The term that follows `(season, year)` in Winter → Summer → Fall rotation
#[must_use]
pub const fn next_term(season: Season, year: u16) -> (Season, u16) {
    match season {
        Season::Winter => (Season::Summer, year),
        Season::Summer => (Season::Fall, year),
        // Year-spanning terms roll over the same way a Fall term does
        Season::Fall | Season::FallWinter => (Season::Winter, year + 1),
    }
}

/// Generate a standard four-year run of terms starting at `start`.
///
/// Produces exactly [`FOUR_YEAR_TERMS`] consecutive term names in
/// Winter → Summer → Fall rotation (e.g., "Fall 2025" through
/// "Summer 2029"). Malformed input yields an empty list.
#[must_use]
pub fn generate_four_year_semesters(start: &str) -> Vec<String> {
    let Some((mut season, mut year)) = parse_term(start) else {
        return Vec::new();
    };

    let mut terms = Vec::with_capacity(FOUR_YEAR_TERMS);
    for _ in 0..FOUR_YEAR_TERMS {
        terms.push(Semester::term_name(season, year));
        (season, year) = next_term(season, year);
    }
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_parse() {
        assert_eq!(Season::parse("Fall"), Some(Season::Fall));
        assert_eq!(Season::parse("winter"), Some(Season::Winter));
        assert_eq!(Season::parse("SUMMER"), Some(Season::Summer));
        assert_eq!(Season::parse("Fall/Winter"), Some(Season::FallWinter));
        assert_eq!(Season::parse("Spring"), None);
        assert_eq!(Season::parse(""), None);
    }

    #[test]
    fn test_season_ranks_ascend() {
        assert!(Season::Winter.rank() < Season::Summer.rank());
        assert!(Season::Summer.rank() < Season::Fall.rank());
        assert!(Season::Fall.rank() < Season::FallWinter.rank());
    }

    #[test]
    fn test_compare_semesters_year_dominates() {
        assert_eq!(
            compare_semesters("Fall 2024", "Winter 2025"),
            Ordering::Less
        );
        assert_eq!(
            compare_semesters("Winter 2026", "Fall 2025"),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_semesters_same_year_by_season() {
        assert_eq!(
            compare_semesters("Winter 2025", "Summer 2025"),
            Ordering::Less
        );
        assert_eq!(
            compare_semesters("Summer 2025", "Fall 2025"),
            Ordering::Less
        );
        assert_eq!(
            compare_semesters("Fall 2025", "Fall/Winter 2025"),
            Ordering::Less
        );
    }

    #[test]
    fn test_compare_semesters_unknown_season_sorts_last() {
        assert_eq!(
            compare_semesters("Fall/Winter 2025", "Spring 2025"),
            Ordering::Less
        );
        // Deterministic between two unknowns
        assert_eq!(
            compare_semesters("Spring 2025", "Spring 2025"),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_semesters_sentinels_sort_after_dated() {
        assert_eq!(
            compare_semesters("Fall 2025", EXEMPTED),
            Ordering::Less
        );
        assert_eq!(compare_semesters(DEFICIENCIES, EXEMPTED), Ordering::Less);
    }

    #[test]
    fn test_parse_term() {
        assert_eq!(parse_term("Fall 2025"), Some((Season::Fall, 2025)));
        assert_eq!(parse_term("  winter 2026 "), Some((Season::Winter, 2026)));
        assert_eq!(parse_term("Fall"), None);
        assert_eq!(parse_term("Exempted"), None);
        assert_eq!(parse_term(""), None);
    }

    #[test]
    fn test_generate_four_year_semesters() {
        let terms = generate_four_year_semesters("Fall 2025");

        assert_eq!(terms.len(), FOUR_YEAR_TERMS);
        assert_eq!(terms.first().map(String::as_str), Some("Fall 2025"));
        assert_eq!(terms.get(1).map(String::as_str), Some("Winter 2026"));
        assert_eq!(terms.get(2).map(String::as_str), Some("Summer 2026"));
        assert_eq!(terms.last().map(String::as_str), Some("Summer 2029"));

        // Rotation stays consecutive throughout
        let mut sorted = terms.clone();
        sorted.sort_by(|a, b| compare_semesters(a, b));
        assert_eq!(terms, sorted);
    }

    #[test]
    fn test_generate_four_year_semesters_malformed() {
        assert!(generate_four_year_semesters("").is_empty());
        assert!(generate_four_year_semesters("Fall").is_empty());
        assert!(generate_four_year_semesters("2025").is_empty());
        assert!(generate_four_year_semesters("Spring 2025").is_empty());
    }

    #[test]
    fn test_sentinels() {
        assert!(is_sentinel("Exempted"));
        assert!(is_sentinel("deficiencies"));
        assert!(!is_sentinel("Fall 2025"));

        let sem = Semester::new(EXEMPTED.to_string());
        assert!(sem.is_sentinel());
        assert!(!Semester::new("Winter 2026".to_string()).is_sentinel());
    }

    #[test]
    fn test_term_name() {
        assert_eq!(Semester::term_name(Season::Fall, 2025), "Fall 2025");
        assert_eq!(
            Semester::term_name(Season::FallWinter, 2025),
            "Fall/Winter 2025"
        );
    }
}
