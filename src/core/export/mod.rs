//! Timeline export
//!
//! Renders a timeline to a shareable document. Formats implement
//! [`TimelineExporter`] over the same store snapshot, so adding a format
//! does not touch the planner.

pub mod markdown;

use crate::core::planner::TimelineStore;
use std::error::Error;
use std::path::Path;

pub use markdown::MarkdownExporter;

/// Trait for timeline export formats
pub trait TimelineExporter {
    /// Render the timeline to a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, store: &TimelineStore) -> Result<String, Box<dyn Error>>;

    /// Render the timeline and write it to a file
    ///
    /// # Errors
    /// Returns an error if rendering or the write fails
    fn generate(&self, store: &TimelineStore, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(store)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }
}
