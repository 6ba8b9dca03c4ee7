use thiserror::Error;

/// Errors raised while packaging the word-processor document.
#[derive(Error, Debug)]
pub enum DocxError {
    #[error("Failed to package document container: {0}")]
    Pack(String),
}
