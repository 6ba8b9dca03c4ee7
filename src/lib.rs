//! vitae: CV/résumé document-generation engine.
//!
//! One normalized, pre-translated content model ([`CvData`]) rendered
//! into two independent, faithful documents:
//!
//! - a styled, paginated, print-ready HTML document (abbreviated
//!   two-column front page, untruncated detail pages), see
//!   [`render_print_document`];
//! - a structured word-processor document built from a tagged block
//!   outline and packaged as `.docx`, see [`render_docx_document`].
//!
//! Both renderers are pure: list order is insertion order, absent
//! optional content suppresses its whole section, and rendering the
//! same model twice yields identical output. The browser-facing side
//! (asset inlining, the invisible-iframe print driver) lives in the
//! `vitae-wasm` crate; this root crate integrates the platform-agnostic
//! pieces and backs the preview CLI.

pub mod export;

pub use export::{ExportError, load_cv_data, write_docx_document, write_print_document};
pub use vitae_idf::{DocBlock, HeadingLevel};
pub use vitae_model::{
    CvData, CredentialSection, ExperienceSection, Highlight, ProjectSection, RecommendationGroup,
    RecommendationPerson, Subtopic, cv_file_name,
};
pub use vitae_render_docx::{DocxError, document_outline, render_docx_document};
pub use vitae_render_html::render_print_document;
