//! Word-processor document renderer.
//!
//! Two stages: [`document_outline`] composes the content model into the
//! intermediate block sequence (the complete, untruncated counterpart
//! of the print front page), and [`to_docx_bytes`] packages that
//! sequence into a `.docx` container. [`render_docx_document`] chains
//! both for the common case.

mod error;
mod outline;
mod writer;

pub use error::DocxError;
pub use outline::document_outline;
pub use writer::to_docx_bytes;

use vitae_model::CvData;

/// Render the complete word-processor document as `.docx` bytes, ready
/// to hand to the caller for a download.
pub fn render_docx_document(data: &CvData) -> Result<Vec<u8>, DocxError> {
    to_docx_bytes(&document_outline(data))
}
