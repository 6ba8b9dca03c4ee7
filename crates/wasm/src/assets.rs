//! Asset inlining for generated documents.
//!
//! Fetches a same-origin static asset (the profile photo) and encodes
//! it as a `data:` URI so the print markup carries no external
//! references. Every failure mode is non-fatal: the caller treats a
//! missing asset as "no photo" and renders without it.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Fetch `path` and return its body as a self-contained data URI, or
/// `None` on any failure (non-success status, network error, body read
/// error). Never raises to the caller.
pub async fn inline_asset(path: &str) -> Option<String> {
    match fetch_asset(path).await {
        Ok(data_url) => Some(data_url),
        Err(err) => {
            log::debug!("asset fetch for '{path}' failed: {err:?}");
            None
        }
    }
}

async fn fetch_asset(path: &str) -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object available"))?;

    let opts = web_sys::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web_sys::RequestMode::SameOrigin);

    let request = web_sys::Request::new_with_str_and_init(path, &opts)?;

    let response_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: web_sys::Response = response_value
        .dyn_into()
        .map_err(|_| JsValue::from_str("fetch did not yield a Response"))?;

    if !response.ok() {
        return Err(JsValue::from_str(&format!(
            "HTTP error: {} {}",
            response.status(),
            response.status_text()
        )));
    }

    let mime = response
        .headers()
        .get("Content-Type")
        .ok()
        .flatten()
        .unwrap_or_else(|| FALLBACK_MIME.to_string());

    let array_buffer = JsFuture::from(response.array_buffer()?).await?;
    let bytes = js_sys::Uint8Array::new(&array_buffer).to_vec();

    Ok(encode_data_url(&mime, &bytes))
}

/// Build the embeddable representation of the asset bytes.
fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_data_url() {
        assert_eq!(
            encode_data_url("image/jpeg", b"abc"),
            "data:image/jpeg;base64,YWJj"
        );
    }

    #[test]
    fn test_encode_data_url_empty_body() {
        assert_eq!(
            encode_data_url(FALLBACK_MIME, b""),
            "data:application/octet-stream;base64,"
        );
    }
}
