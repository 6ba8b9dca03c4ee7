//! Minimal HTML escaping for interpolated display text.
//!
//! The content model is trusted, pre-translated text, but none of it
//! may be interpreted as markup. One escaper covers both element text
//! and attribute values, so it quotes both quote characters.

/// Escape a display string for embedding in HTML text or a
/// double-/single-quoted attribute.
pub fn text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
