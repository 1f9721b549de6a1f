//! Transcript parsing
//!
//! Converts extracted student-record text into ordered
//! `{term, course, grade}` rows. The scanner walks the page text top to
//! bottom (the extraction collaborator supplies it sorted by page index
//! then character offset): a term header opens a term, subsequent course
//! rows belong to the most recently seen term, and a section separator
//! ("TERM GPA" summary row) closes it. Rows with the `EX` grade are
//! exempted courses rather than scheduled ones.

use super::ParseError;
use crate::core::models::normalize_course_code;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static TERM_HEADER_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)^\s*(Winter|Summer|Fall)\s+(\d{4})\s*$").expect("term header pattern")
});

static COURSE_ROW_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^\s*([A-Z]{3,4})\s?(\d{3})\b(.*)$").expect("course row pattern")
});

static GRADE_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"\b(A\+|A-|A|B\+|B-|B|C\+|C-|C|D\+|D-|D|F|FNS|EX|PASS|DISC)\s*$")
        .expect("grade pattern")
});

/// Separator marking the end of a term's course rows
const SECTION_SEPARATOR: &str = "TERM GPA";

/// Grade token marking an exempted course row
const EXEMPT_GRADE: &str = "EX";

/// One course row of a transcript term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// Normalized course code
    pub course: String,
    /// Grade, absent for in-progress registrations
    pub grade: Option<String>,
}

/// One term block of a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermRecord {
    /// Term name (e.g., "Fall 2023")
    pub term: String,
    /// Course rows in textual order
    pub entries: Vec<CourseEntry>,
}

/// Everything recovered from one transcript
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptRecord {
    /// Terms in the order they appear
    pub terms: Vec<TermRecord>,
    /// Exempted course codes (rows graded `EX`)
    pub exempted: Vec<String>,
}

impl TranscriptRecord {
    /// Flatten into `(term, course, grade)` triples in document order
    #[must_use]
    pub fn triples(&self) -> Vec<(String, String, Option<String>)> {
        self.terms
            .iter()
            .flat_map(|t| {
                t.entries
                    .iter()
                    .map(|e| (t.term.clone(), e.course.clone(), e.grade.clone()))
            })
            .collect()
    }
}

/// Parse the extracted text of a transcript.
///
/// # Errors
/// [`ParseError::UnrecognizedTranscript`] when no term header and no
/// exempted row is found anywhere in the text.
pub fn parse_transcript(text: &str) -> Result<TranscriptRecord, ParseError> {
    let mut record = TranscriptRecord::default();
    // Index into record.terms of the currently open term block
    let mut current: Option<usize> = None;

    for line in text.lines() {
        if let Some(caps) = TERM_HEADER_RE.captures(line) {
            let term = format!("{} {}", capitalize(&caps[1]), &caps[2]);
            record.terms.push(TermRecord {
                term,
                entries: Vec::new(),
            });
            current = Some(record.terms.len() - 1);
            continue;
        }

        if line.to_ascii_uppercase().contains(SECTION_SEPARATOR) {
            current = None;
            continue;
        }

        if let Some(caps) = COURSE_ROW_RE.captures(line) {
            let course = normalize_course_code(&format!("{}{}", &caps[1], &caps[2]));
            let grade = GRADE_RE
                .captures(&caps[3])
                .map(|g| g[1].to_string());

            if grade.as_deref() == Some(EXEMPT_GRADE) {
                if !record.exempted.contains(&course) {
                    record.exempted.push(course);
                }
                continue;
            }

            // Rows outside any open term block are dropped
            if let Some(idx) = current {
                record.terms[idx].entries.push(CourseEntry { course, grade });
            }
        }
    }

    if record.terms.is_empty() && record.exempted.is_empty() {
        return Err(ParseError::UnrecognizedTranscript);
    }
    Ok(record)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
    })
}
