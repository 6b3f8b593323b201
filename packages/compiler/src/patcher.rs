//! Byte-offset splicing of synthesized CSS into the document text.

use crate::scanner::DocumentScan;

/// Append CSS to the document's style element: into the text of the first
/// `<style>` under `<head>` when one exists, else as a new `<style>` at the
/// end of `<head>`, else prepended as the document's first node. Empty CSS
/// leaves the document untouched.
pub fn append_style(html: &str, scan: &DocumentScan, css: &str) -> String {
    if css.is_empty() {
        return html.to_string();
    }

    if let Some((_, text_end)) = scan.style_text {
        return splice(html, text_end, &format!("\n{}\n", css));
    }
    if let Some(close) = scan.head_close_start {
        return splice(html, close, &style_element(css));
    }
    if let Some(open_end) = scan.head_open_end {
        // `<head>` was never closed; keep the style inside it anyway.
        return splice(html, open_end, &style_element(css));
    }
    format!("{}{}", style_element(css), html)
}

/// Insert a new `<style>` immediately after the opening `<head>` tag, or
/// prepend it when the document has no `<head>`. The visibility pass uses
/// this so its rules land ahead of the utility compiler's insertion point.
pub fn prepend_style(html: &str, scan: &DocumentScan, css: &str) -> String {
    if css.is_empty() {
        return html.to_string();
    }
    if let Some(open_end) = scan.head_open_end {
        return splice(html, open_end, &style_element(css));
    }
    format!("{}{}", style_element(css), html)
}

fn style_element(css: &str) -> String {
    format!("<style>\n{}\n</style>", css)
}

fn splice(html: &str, at: usize, insert: &str) -> String {
    let mut out = String::with_capacity(html.len() + insert.len());
    out.push_str(&html[..at]);
    out.push_str(insert);
    out.push_str(&html[at..]);
    out
}
