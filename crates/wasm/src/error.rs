//! Error handling for the browser bindings.
//!
//! Converts export failures into JavaScript-friendly errors.

use vitae_render_docx::DocxError;
use wasm_bindgen::prelude::*;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Input could not be interpreted as a CV content model
    Data,
    /// The invisible rendering surface could not be created or used
    Surface,
    /// The platform rejected the print invocation
    Print,
    /// Word-processor document packaging failed
    Docx,
    /// Unknown error
    Unknown,
}

/// A JavaScript-friendly error type.
///
/// Note: This is NOT a wasm_bindgen struct because we need custom
/// conversion to JavaScript Error objects.
#[derive(Debug)]
pub struct VitaeError {
    code: ErrorCode,
    message: String,
}

impl VitaeError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Create a data-conversion error.
    pub fn data(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Data, message)
    }

    /// Create a rendering-surface error.
    pub fn surface(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Surface, message)
    }

    /// Create a print-invocation error.
    pub fn print(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Print, message)
    }
}

impl From<DocxError> for VitaeError {
    fn from(err: DocxError) -> Self {
        Self::new(ErrorCode::Docx, err.to_string())
    }
}

impl From<VitaeError> for JsValue {
    fn from(err: VitaeError) -> Self {
        let js_error = js_sys::Error::new(&err.message);

        // Add the error code as a property
        let code_str = match err.code {
            ErrorCode::Data => "DATA_ERROR",
            ErrorCode::Surface => "SURFACE_ERROR",
            ErrorCode::Print => "PRINT_ERROR",
            ErrorCode::Docx => "DOCX_ERROR",
            ErrorCode::Unknown => "UNKNOWN_ERROR",
        };

        js_sys::Reflect::set(&js_error, &"code".into(), &JsValue::from_str(code_str)).ok();

        js_error.into()
    }
}
