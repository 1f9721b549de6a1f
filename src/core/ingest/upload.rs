//! Upload validation for document ingestion
//!
//! Mirrors the checks the upload surfaces perform before any parsing:
//! only PDF files are accepted, and only up to the size cap.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Maximum accepted upload size (2 MB)
pub const MAX_UPLOAD_BYTES: u64 = 2 * 1024 * 1024;

/// PDF magic bytes
const PDF_MAGIC: &[u8] = b"%PDF";

/// Upload rejections, surfaced verbatim to the user
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    /// The selected file is not a PDF
    #[error("Please select a valid PDF file.")]
    NotPdf,

    /// The selected file exceeds the size cap
    #[error("File size must not exceed 2MB.")]
    TooLarge,

    /// The file could not be read at all
    #[error("Unable to read the selected file.")]
    Unreadable,
}

/// Validate an upload from its name, size, and leading bytes.
///
/// # Errors
/// [`UploadError::NotPdf`] for a non-`.pdf` name or missing PDF magic,
/// [`UploadError::TooLarge`] above [`MAX_UPLOAD_BYTES`].
pub fn check_upload(file_name: &str, len: u64, head: &[u8]) -> Result<(), UploadError> {
    let is_pdf_name = Path::new(file_name)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if !is_pdf_name || !head.starts_with(PDF_MAGIC) {
        return Err(UploadError::NotPdf);
    }
    if len > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

/// Validate an uploaded PDF on disk.
///
/// # Errors
/// [`UploadError::Unreadable`] when the file cannot be opened, otherwise
/// the same rejections as [`check_upload`].
pub fn validate_pdf_upload(path: &Path) -> Result<(), UploadError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or(UploadError::Unreadable)?;

    let mut file = File::open(path).map_err(|_| UploadError::Unreadable)?;
    let len = file
        .metadata()
        .map_err(|_| UploadError::Unreadable)?
        .len();

    let mut head = [0_u8; 4];
    let read = file.read(&mut head).map_err(|_| UploadError::Unreadable)?;

    check_upload(file_name, len, &head[..read])
}
