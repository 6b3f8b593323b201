//! Post-processes rendered HTML: compiles atomic utility-class tokens into
//! standard CSS in a `<style>` element and injects show/hide rules for the
//! responsive visibility markers. One HTML string in, one HTML string out;
//! invoked as a pipeline stage between rendering and minification.

pub mod error;
pub mod patcher;
pub mod scanner;

pub use error::{CompileError, CompileResult};
pub use scanner::{scan_document, DocumentScan};

use atomcss_evaluator::{compile_tokens, visibility_css, VisibilityMarker};
use tracing::{debug, info, instrument};

/// Options for the document compile pass.
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Inject show/hide rules for visibility markers.
    pub inject_visibility: bool,
    /// Compile utility class tokens to CSS.
    pub compile_utilities: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            inject_visibility: true,
            compile_utilities: true,
        }
    }
}

/// Compile a rendered HTML document with default options: visibility rules
/// first, then every utility class token.
pub fn compile_document(html: &str) -> CompileResult<String> {
    compile_document_with_options(html, &CompileOptions::default())
}

#[instrument(skip(html, options), fields(len = html.len()))]
pub fn compile_document_with_options(
    html: &str,
    options: &CompileOptions,
) -> CompileResult<String> {
    let mut output = html.to_string();

    if options.inject_visibility {
        let scan = scanner::scan_document(&output)?;
        let markers = collect_markers(&scan);
        let css = visibility_css(markers);
        if !css.is_empty() {
            debug!("injecting visibility rules");
            output = patcher::prepend_style(&output, &scan, &css);
        }
    }

    if options.compile_utilities {
        let scan = scanner::scan_document(&output)?;
        let css = compile_tokens(scan.class_tokens.iter().map(String::as_str));
        if !css.is_empty() {
            output = patcher::append_style(&output, &scan, &css);
        }
    }

    info!("document compile complete");
    Ok(output)
}

/// Visibility markers present in the document, as tag names or class forms.
fn collect_markers(scan: &DocumentScan) -> Vec<VisibilityMarker> {
    scan.tag_names
        .iter()
        .map(String::as_str)
        .chain(scan.class_tokens.iter().map(String::as_str))
        .filter_map(VisibilityMarker::parse)
        .collect()
}
