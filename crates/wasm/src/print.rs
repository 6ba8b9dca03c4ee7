//! Print driver.
//!
//! Stages the print markup in an isolated, invisible iframe, waits for
//! fonts and images to settle, triggers the platform print dialog and
//! waits for completion. No platform fires a post-print event reliably
//! in every environment, so completion is whichever comes first of the
//! surface window's `afterprint` event and a fixed timeout; either one
//! resolves the operation. The surface is removed on every exit path.
//!
//! The PDF bytes themselves come from the user's print/save-as-PDF
//! action; this module only guarantees that by the time the future
//! settles, printing was initiated and the surface is gone.

use js_sys::Promise;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AddEventListenerOptions, Document, HtmlIFrameElement, HtmlImageElement, Window};

use crate::error::VitaeError;

/// Settle delay after the markup loads, before font/image waits begin.
const LAYOUT_SETTLE_MS: i32 = 50;

/// Upper bound on waiting for the platform's post-print event.
const PRINT_DONE_TIMEOUT_MS: i32 = 5_000;

/// Render `markup` off-screen and drive the platform print dialog,
/// using `file_name` (normalized to `.pdf`) as the save-name hint.
pub async fn print_to_pdf(markup: &str, file_name: &str) -> Result<(), VitaeError> {
    let file_name = ensure_pdf_extension(file_name);

    let window =
        web_sys::window().ok_or_else(|| VitaeError::surface("no window object available"))?;
    let document = window
        .document()
        .ok_or_else(|| VitaeError::surface("window has no document"))?;

    // Dropped on every exit path below, which removes the iframe.
    let surface = RenderSurface::mount(&document)?;
    surface.load(markup).await;

    let doc = surface.content_document()?;
    doc.set_title(title_hint(&file_name));

    sleep(&window, LAYOUT_SETTLE_MS).await;
    wait_for_fonts(&doc).await;
    wait_for_images(&doc).await;

    let frame_window = surface.content_window()?;
    let _ = frame_window.focus();
    frame_window
        .print()
        .map_err(|_| VitaeError::print("platform print invocation rejected"))?;

    wait_for_print_done(&window, &frame_window).await;
    Ok(())
}

/// Normalize a file name to carry a `.pdf` suffix.
pub(crate) fn ensure_pdf_extension(name: &str) -> String {
    if name.to_ascii_lowercase().ends_with(".pdf") {
        name.to_string()
    } else {
        format!("{name}.pdf")
    }
}

/// The suffix-stripped save-name hint used as the surface title.
pub(crate) fn title_hint(file_name: &str) -> &str {
    if file_name.len() >= 4 && file_name[file_name.len() - 4..].eq_ignore_ascii_case(".pdf") {
        &file_name[..file_name.len() - 4]
    } else {
        file_name
    }
}

/// The invisible staging iframe. Positioned off-screen rather than
/// `display:none` so layout and the print engine still compute
/// geometry. Removal happens in `Drop`, covering early errors, print
/// rejection and the timeout path alike.
struct RenderSurface {
    frame: HtmlIFrameElement,
}

impl RenderSurface {
    fn mount(document: &Document) -> Result<Self, VitaeError> {
        let frame: HtmlIFrameElement = document
            .create_element("iframe")
            .map_err(|_| VitaeError::surface("failed to create iframe element"))?
            .dyn_into()
            .map_err(|_| VitaeError::surface("iframe element has unexpected type"))?;

        let style = frame.style();
        for (prop, value) in [
            ("position", "fixed"),
            ("left", "-10000px"),
            ("top", "0"),
            ("width", "1024px"),
            ("height", "768px"),
            ("border", "0"),
        ] {
            style
                .set_property(prop, value)
                .map_err(|_| VitaeError::surface("failed to style rendering surface"))?;
        }

        let body = document
            .body()
            .ok_or_else(|| VitaeError::surface("document has no body"))?;
        body.append_child(&frame)
            .map_err(|_| VitaeError::surface("failed to attach rendering surface"))?;

        Ok(Self { frame })
    }

    /// Write `markup` into the frame's own document context and wait
    /// for its load event.
    async fn load(&self, markup: &str) {
        let loaded = Promise::new(&mut |resolve, _reject| {
            let _ = self
                .frame
                .add_event_listener_with_callback_and_add_event_listener_options(
                    "load", &resolve, &once(),
                );
        });
        self.frame.set_srcdoc(markup);
        let _ = JsFuture::from(loaded).await;
    }

    fn content_document(&self) -> Result<Document, VitaeError> {
        self.frame
            .content_document()
            .ok_or_else(|| VitaeError::surface("rendering surface exposes no document"))
    }

    fn content_window(&self) -> Result<Window, VitaeError> {
        self.frame
            .content_window()
            .ok_or_else(|| VitaeError::surface("rendering surface exposes no window"))
    }
}

impl Drop for RenderSurface {
    fn drop(&mut self) {
        self.frame.remove();
    }
}

fn once() -> AddEventListenerOptions {
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    opts
}

async fn sleep(window: &Window, ms: i32) {
    let timer = Promise::new(&mut |resolve, _reject| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    let _ = JsFuture::from(timer).await;
}

/// Wait for web fonts to finish loading. `document.fonts` is not
/// available on every platform; absent means there is nothing to wait
/// for.
async fn wait_for_fonts(doc: &Document) {
    let fonts = match js_sys::Reflect::get(doc.as_ref(), &JsValue::from_str("fonts")) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return,
    };
    let ready = match js_sys::Reflect::get(&fonts, &JsValue::from_str("ready")) {
        Ok(value) => value,
        Err(_) => return,
    };
    if let Ok(promise) = ready.dyn_into::<Promise>() {
        let _ = JsFuture::from(promise).await;
    }
}

/// Wait for every embedded image to settle. Already-complete images
/// are skipped; a broken image counts as settled (its error event)
/// rather than stalling the print.
async fn wait_for_images(doc: &Document) {
    let images = doc.images();
    let pending = js_sys::Array::new();

    for index in 0..images.length() {
        let Some(element) = images.item(index) else {
            continue;
        };
        let Ok(image) = element.dyn_into::<HtmlImageElement>() else {
            continue;
        };
        if image.complete() {
            continue;
        }

        let settled = Promise::new(&mut |resolve, _reject| {
            let _ = image.add_event_listener_with_callback_and_add_event_listener_options(
                "load", &resolve, &once(),
            );
            let _ = image.add_event_listener_with_callback_and_add_event_listener_options(
                "error", &resolve, &once(),
            );
        });
        pending.push(&settled);
    }

    if pending.length() > 0 {
        let _ = JsFuture::from(Promise::all(&pending)).await;
    }
}

/// Resolve on whichever fires first: the surface window's `afterprint`
/// event or the fixed timeout. Both triggers share one promise, and a
/// promise settles only once, so the losing trigger is a no-op. The
/// timeout path is a successful resolution, not a failure.
async fn wait_for_print_done(outer: &Window, frame_window: &Window) {
    let done = Promise::new(&mut |resolve, _reject| {
        let _ = frame_window.add_event_listener_with_callback_and_add_event_listener_options(
            "afterprint",
            &resolve,
            &once(),
        );
        let _ = outer
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, PRINT_DONE_TIMEOUT_MS);
    });
    let _ = JsFuture::from(done).await;
}
