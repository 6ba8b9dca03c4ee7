//! WebAssembly bindings for the vitae CV export engine.
//!
//! This crate exposes the export subsystem to the portfolio page:
//! rendering the print document and driving the platform print dialog,
//! packaging the word-processor document for a download, and inlining
//! the profile photo as embeddable data.
//!
//! # Architecture
//!
//! Document rendering is synchronous pure Rust (`vitae-render-html`,
//! `vitae-render-docx`); the async surface of this crate is limited to
//! what the browser makes asynchronous: the asset fetch and the print
//! pipeline's settle/complete waits. The JavaScript API exposes
//! Promises throughout via `future_to_promise`.
//!
//! ## Module Structure
//!
//! - [`assets`] - same-origin asset fetching and data-URI inlining
//! - [`print`] - the invisible-iframe print driver
//! - [`error`] - error types with JavaScript interop
//!
//! # Example
//!
//! ```javascript
//! import init, { exportPdf, exportDocx, inlineAsset, pdfFileName } from '@vitae/wasm';
//!
//! await init();
//!
//! const photoDataUrl = await inlineAsset('/assets/profile.jpg');
//! await exportPdf({ ...cvData, photoDataUrl }, pdfFileName(cvData.name));
//! ```

mod assets;
mod error;
mod print;

pub use assets::inline_asset;
pub use error::{ErrorCode, VitaeError};
pub use print::print_to_pdf;

use chrono::Local;
use vitae_model::{CvData, cv_file_name};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// Initialize the WASM module.
///
/// Sets up panic hooks for better error messages in the browser
/// console. Called automatically by wasm-pack's generated JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the vitae-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Render the print document for `data` and drive the platform print
/// dialog, with `file_name` as the save-name hint.
///
/// Resolves once printing finished or the completion wait timed out;
/// the staging surface is destroyed either way.
#[wasm_bindgen(js_name = exportPdf)]
pub fn export_pdf(data: JsValue, file_name: String) -> js_sys::Promise {
    future_to_promise(async move {
        let cv = parse_cv(data)?;
        let markup = vitae_render_html::render_print_document(&cv);
        log::debug!("print document rendered: {} bytes", markup.len());
        print::print_to_pdf(&markup, &file_name).await?;
        Ok(JsValue::UNDEFINED)
    })
}

/// Render the word-processor document for `data`.
///
/// Resolves to the `.docx` bytes as a `Uint8Array`, for the caller to
/// wrap in a Blob and trigger a download with.
#[wasm_bindgen(js_name = exportDocx)]
pub fn export_docx(data: JsValue) -> js_sys::Promise {
    future_to_promise(async move {
        let cv = parse_cv(data)?;
        let bytes = vitae_render_docx::render_docx_document(&cv).map_err(VitaeError::from)?;
        log::debug!("word-processor document packaged: {} bytes", bytes.len());
        Ok(js_sys::Uint8Array::from(&bytes[..]).into())
    })
}

/// Fetch a same-origin asset and inline it as a data URI.
///
/// Resolves to the data URI string, or `null` when the asset is
/// unavailable. Never rejects.
#[wasm_bindgen(js_name = inlineAsset)]
pub fn inline_asset_js(path: String) -> js_sys::Promise {
    future_to_promise(async move {
        Ok(match assets::inline_asset(&path).await {
            Some(data_url) => JsValue::from_str(&data_url),
            None => JsValue::NULL,
        })
    })
}

/// Conventional `.pdf` export file name for `name` and today's date.
#[wasm_bindgen(js_name = pdfFileName)]
pub fn pdf_file_name(name: &str) -> String {
    cv_file_name(name, Local::now().date_naive(), "pdf")
}

/// Conventional `.docx` export file name for `name` and today's date.
#[wasm_bindgen(js_name = docxFileName)]
pub fn docx_file_name(name: &str) -> String {
    cv_file_name(name, Local::now().date_naive(), "docx")
}

fn parse_cv(data: JsValue) -> Result<CvData, VitaeError> {
    serde_wasm_bindgen::from_value(data)
        .map_err(|e| VitaeError::data(format!("Invalid CV data: {e}")))
}
