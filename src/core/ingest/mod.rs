//! Document ingestion
//!
//! Turns uploaded acceptance letters and transcripts into timeline data.
//! PDF decoding itself is an external collaborator: the parsers here work
//! on already-extracted page text, reachable through the [`TextExtractor`]
//! seam so the fragile format-coupled parsing can be swapped without
//! touching the state store.

pub mod admission;
pub mod transcript;
pub mod upload;

use crate::core::models::CourseStatus;
use crate::core::planner::store::{StoreError, TimelineStore};
use std::error::Error;
use std::path::Path;
use thiserror::Error as ThisError;

pub use admission::{parse_admission_letter, TimelineSeed, TransferCredit};
pub use transcript::{parse_transcript, CourseEntry, TermRecord, TranscriptRecord};
pub use upload::{check_upload, validate_pdf_upload, UploadError, MAX_UPLOAD_BYTES};

/// Terminal failures of one parse attempt. The timeline is never
/// partially populated on error.
#[derive(Debug, ThisError)]
pub enum ParseError {
    /// The document is not an acceptance letter
    #[error("The selected file is not an offer of admission.")]
    NotAdmissionLetter,

    /// No transcript structure was found in the text
    #[error("No terms or course rows were recognized in the document.")]
    UnrecognizedTranscript,
}

/// Source of extracted page text for an uploaded PDF.
///
/// Implementations must return text sorted by page index then character
/// offset; both parsers depend on that ordering.
pub trait TextExtractor {
    /// Extract the full text of the document at `pdf_path`
    ///
    /// # Errors
    /// Returns an error when the text cannot be produced
    fn extract(&self, pdf_path: &Path) -> Result<String, Box<dyn Error>>;
}

/// Extractor reading a sidecar `.txt` file next to the uploaded PDF
/// (the output of the external text-extraction step)
#[derive(Debug, Clone, Copy, Default)]
pub struct SidecarTextExtractor;

impl TextExtractor for SidecarTextExtractor {
    fn extract(&self, pdf_path: &Path) -> Result<String, Box<dyn Error>> {
        let sidecar = pdf_path.with_extension("txt");
        if !sidecar.exists() {
            return Err(format!(
                "No extracted text found at {}; run the PDF text extraction step first or pass --text",
                sidecar.display()
            )
            .into());
        }
        Ok(std::fs::read_to_string(sidecar)?)
    }
}

/// Apply an acceptance-letter seed to a store.
///
/// Generates the four-year semester run from the starting term, records
/// exemptions (including transfer credits) and deficiencies. Existing
/// semesters with the same names are left alone.
///
/// # Errors
/// Propagates [`StoreError`] from semester creation (duplicates are
/// skipped, not errors).
pub fn apply_admission_seed(store: &mut TimelineStore<'_>, seed: &TimelineSeed) -> Result<(), StoreError> {
    if let Some(start) = &seed.starting_term {
        for term in crate::core::models::generate_four_year_semesters(start) {
            match store.add_semester_named(term) {
                Ok(_) | Err(StoreError::DuplicateSemester(_)) => {}
                Err(err) => return Err(err),
            }
        }
    }

    for code in &seed.exemptions {
        store.add_exemption(code.clone());
    }
    for credit in &seed.transfer_credits {
        store.add_exemption(credit.course.clone());
    }
    for code in &seed.deficiencies {
        store.add_deficiency(code.clone());
    }

    Ok(())
}

/// Apply a parsed transcript to a store.
///
/// Creates a semester per term, places each course row at the end of its
/// term, and records statuses: graded rows are completed, ungraded rows
/// are in progress. Exempted rows become timeline exemptions. Rows whose
/// course code is not in the catalog are dropped (logged upstream).
///
/// # Errors
/// Propagates [`StoreError`] from the underlying placements.
pub fn apply_transcript(store: &mut TimelineStore<'_>, record: &TranscriptRecord) -> Result<(), StoreError> {
    for term in &record.terms {
        match store.add_semester_named(term.term.clone()) {
            Ok(_) | Err(StoreError::DuplicateSemester(_)) => {}
            Err(err) => return Err(err),
        }

        for entry in &term.entries {
            if store.catalog().get_course(&entry.course).is_none() {
                logger::warn!(
                    "Transcript row '{}' is not in the catalog; skipping",
                    entry.course
                );
                continue;
            }
            store.move_course(
                &entry.course,
                &crate::core::planner::DropTarget::Semester {
                    name: term.term.clone(),
                    index: None,
                },
            )?;
            let status = if entry.grade.is_some() {
                CourseStatus::Completed
            } else {
                CourseStatus::InProgress
            };
            store.set_status(entry.course.clone(), status);
        }
    }

    for code in &record.exempted {
        store.add_exemption(code.clone());
    }

    Ok(())
}
