//! File-based export for the preview CLI and integration tests.
//!
//! The browser flow hands documents to the print dialog or a download;
//! this module writes the same renderer output to disk under the
//! conventional `<Name>_CV_<date>` file names.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use vitae_model::{CvData, cv_file_name};

/// The main error enum for export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Content model error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Word-processor rendering error: {0}")]
    Docx(#[from] vitae_render_docx::DocxError),
}

/// Read a `CvData` value from a JSON file (camelCase field names, the
/// same shape the browser caller assembles).
pub fn load_cv_data(path: &Path) -> Result<CvData, ExportError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Render the print document and write it under `out_dir`, returning
/// the written path.
pub fn write_print_document(
    data: &CvData,
    out_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    let markup = vitae_render_html::render_print_document(data);
    let path = out_dir.join(cv_file_name(&data.name, date, "html"));
    fs::write(&path, markup)?;
    log::info!("print document written to {}", path.display());
    Ok(path)
}

/// Render the word-processor document and write it under `out_dir`,
/// returning the written path.
pub fn write_docx_document(
    data: &CvData,
    out_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf, ExportError> {
    let bytes = vitae_render_docx::render_docx_document(data)?;
    let path = out_dir.join(cv_file_name(&data.name, date, "docx"));
    fs::write(&path, bytes)?;
    log::info!("word-processor document written to {}", path.display());
    Ok(path)
}
