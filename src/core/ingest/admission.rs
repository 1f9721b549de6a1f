//! Acceptance-letter parsing
//!
//! Converts the extracted text of an admission letter into a
//! [`TimelineSeed`]. The parser is format-coupled by design: it locates
//! labeled regions by substring search and applies regular expressions
//! within each region. Text that deviates from the institutional template
//! is dropped rather than guessed at; the only structural requirement is
//! the literal "OFFER OF ADMISSION" marker.

use super::ParseError;
use crate::core::models::normalize_course_code;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Marker every acceptance letter must carry
const ADMISSION_MARKER: &str = "OFFER OF ADMISSION";

static TERM_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(?i)\b(Winter|Summer|Fall)\s+(\d{4})\b").expect("term pattern is valid")
});

static COURSE_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"\b([A-Z]{3,4})\s?(\d{3})\b").expect("course pattern is valid")
});

static CREDITS_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"(\d+(?:\.\d+)?)\s*credits?").expect("credits pattern is valid")
});

/// A transfer-credited course from the letter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferCredit {
    /// Normalized course code
    pub course: String,
    /// Credits granted (0.0 when the letter omits the count)
    pub credits: f32,
}

/// Structured data pulled from an acceptance letter, used to seed a
/// fresh timeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineSeed {
    /// First term of the program (e.g., "Fall 2025")
    pub starting_term: Option<String>,
    /// Expected graduation term
    pub expected_graduation: Option<String>,
    /// Courses exempted by the admission decision
    pub exemptions: Vec<String>,
    /// Deficiency courses required on top of the program
    pub deficiencies: Vec<String>,
    /// Transfer credits granted
    pub transfer_credits: Vec<TransferCredit>,
}

/// Slice the region between two labels.
///
/// Returns `None` when the start label is absent; a missing end label
/// extends the region to the end of the text (matching how far the
/// source template is trusted).
fn region<'a>(text: &'a str, start_label: &str, end_label: &str) -> Option<&'a str> {
    let start = text.find(start_label)? + start_label.len();
    let rest = &text[start..];
    let end = rest.find(end_label).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// First term string ("Season YYYY") in a region
fn first_term(region_text: &str) -> Option<String> {
    TERM_RE
        .captures(region_text)
        .map(|c| format!("{} {}", capitalize(&c[1]), &c[2]))
}

/// All normalized course codes in a region, in textual order
fn course_codes(region_text: &str) -> Vec<String> {
    COURSE_RE
        .captures_iter(region_text)
        .map(|c| normalize_course_code(&format!("{}{}", &c[1], &c[2])))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
    })
}

/// Transfer-credit pairs: each course code in the region takes the first
/// credit count that follows it (before the next course code)
fn transfer_credits(region_text: &str) -> Vec<TransferCredit> {
    let matches: Vec<_> = COURSE_RE.captures_iter(region_text).collect();
    let mut credits = Vec::with_capacity(matches.len());

    for (i, cap) in matches.iter().enumerate() {
        let code = normalize_course_code(&format!("{}{}", &cap[1], &cap[2]));
        let tail_start = cap.get(0).map_or(0, |m| m.end());
        let tail_end = matches
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(region_text.len(), |m| m.start());

        let amount = CREDITS_RE
            .captures(&region_text[tail_start..tail_end])
            .and_then(|c| c[1].parse::<f32>().ok())
            .unwrap_or(0.0);

        credits.push(TransferCredit {
            course: code,
            credits: amount,
        });
    }
    credits
}

/// Parse the extracted text of an acceptance letter.
///
/// # Errors
/// [`ParseError::NotAdmissionLetter`] when the "OFFER OF ADMISSION"
/// marker is absent. All other template deviations degrade to missing
/// fields rather than errors.
pub fn parse_admission_letter(text: &str) -> Result<TimelineSeed, ParseError> {
    if !text.contains(ADMISSION_MARKER) {
        return Err(ParseError::NotAdmissionLetter);
    }

    let mut seed = TimelineSeed::default();

    if let Some(session) = region(text, "Session", "Minimum Program Length") {
        seed.starting_term = first_term(session);
    }
    if let Some(grad) = region(text, "Expected Graduation Term", "Admission Status") {
        seed.expected_graduation = first_term(grad);
    }
    if let Some(exemptions) = region(text, "Exemptions", "Deficiencies") {
        seed.exemptions = course_codes(exemptions);
    }
    if let Some(deficiencies) = region(text, "Deficiencies", "Transfer Credits") {
        seed.deficiencies = course_codes(deficiencies);
    }
    if let Some(transfers) = region(text, "Transfer Credits", "NOTE:") {
        seed.transfer_credits = transfer_credits(transfers);
    }

    Ok(seed)
}
