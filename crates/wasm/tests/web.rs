//! WebAssembly integration tests.
//!
//! These tests run in a headless browser using wasm-bindgen-test.
//!
//! Run with: wasm-pack test --headless --chrome crates/wasm

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn sample_cv() -> vitae_model::CvData {
    vitae_model::CvData {
        name: "Ada Lovelace".into(),
        role: "Engineer".into(),
        photo_data_url: None,
        photo_alt: None,
        email: "ada@example.com".into(),
        phone: "+44 20 0000".into(),
        location: "London".into(),
        linkedin: "linkedin.com/in/ada".into(),
        about: "First programmer.".into(),
        highlights_title: None,
        highlights: vec![],
        experience_title: "Experience".into(),
        experience_sections: vec![],
        skills_title: "Skills".into(),
        skills_primary: vec!["Math".into()],
        skills_secondary: vec![],
        languages: vec!["English".into()],
        projects_title: "Projects".into(),
        projects_sections: vec![],
        credentials_title: "Credentials".into(),
        credentials_sections: vec![],
        recommendations_title: None,
        recommendation_groups: vec![],
    }
}

fn iframe_count() -> u32 {
    let document = web_sys::window().unwrap().document().unwrap();
    document
        .query_selector_all("iframe")
        .expect("query should succeed")
        .length()
}

/// Test that the module reports a version.
#[wasm_bindgen_test]
fn test_version() {
    let version = vitae_wasm::get_version();
    assert!(!version.is_empty());
}

/// A fetch of a missing asset yields null, not an error.
#[wasm_bindgen_test]
async fn test_inline_asset_missing_yields_none() {
    let inlined = vitae_wasm::inline_asset("/definitely-not-here.jpg").await;
    assert!(inlined.is_none());
}

/// A successful fetch yields a self-contained data URI.
#[wasm_bindgen_test]
async fn test_inline_asset_success_is_data_uri() {
    // The test harness page itself is always served.
    let inlined = vitae_wasm::inline_asset("/").await;
    let data_url = inlined.expect("harness page should be fetchable");
    assert!(data_url.starts_with("data:"));
    assert!(data_url.contains(";base64,"));
}

/// The docx export binding resolves to a ZIP container.
#[wasm_bindgen_test]
async fn test_export_docx_yields_zip_bytes() {
    let data = serde_wasm_bindgen::to_value(&sample_cv()).expect("model should convert");
    let result = JsFuture::from(vitae_wasm::export_docx(data))
        .await
        .expect("export should resolve");

    let bytes = js_sys::Uint8Array::new(&result).to_vec();
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[..2], b"PK");
}

/// The print driver resolves and leaves no residual surface, whether
/// or not the platform ever fires afterprint (headless browsers
/// typically don't, so this exercises the timeout path).
#[wasm_bindgen_test]
async fn test_print_driver_cleans_up_surface() {
    assert_eq!(iframe_count(), 0);

    let markup = vitae_render_html::render_print_document(&sample_cv());
    vitae_wasm::print_to_pdf(&markup, "report")
        .await
        .expect("print flow should resolve");

    assert_eq!(iframe_count(), 0);
}

/// File-name bindings follow the export convention.
#[wasm_bindgen_test]
fn test_file_name_bindings() {
    let pdf = vitae_wasm::pdf_file_name("Ada Lovelace");
    assert!(pdf.starts_with("Ada_Lovelace_CV_"));
    assert!(pdf.ends_with(".pdf"));

    let docx = vitae_wasm::docx_file_name("Ada Lovelace");
    assert!(docx.ends_with(".docx"));
}
