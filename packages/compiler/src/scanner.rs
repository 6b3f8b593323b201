//! Single-pass scan of rendered HTML: class tokens, tag names, and the byte
//! offsets the document patcher needs. The scanner never builds a tree; the
//! two compile passes only need attribute values and a handful of positions.

use crate::error::{CompileError, CompileResult};
use std::collections::BTreeSet;

/// Elements whose content is raw text; a `<` inside them never opens a tag.
const RAW_TEXT_TAGS: &[&str] = &["script", "style", "textarea", "title"];

#[derive(Debug, Default, Clone)]
pub struct DocumentScan {
    /// Every class token in document order; repeats are preserved.
    pub class_tokens: Vec<String>,
    /// Lowercased tag names seen at least once.
    pub tag_names: BTreeSet<String>,
    /// Byte offset just past the opening `<head ...>` tag.
    pub head_open_end: Option<usize>,
    /// Byte offset of the `</head>` closing tag.
    pub head_close_start: Option<usize>,
    /// Text-content span of the first `<style>` inside `<head>`.
    pub style_text: Option<(usize, usize)>,
}

/// Scan a document. Structural defects (unterminated comment, tag,
/// attribute value, or raw-text element) fail the whole scan.
pub fn scan_document(source: &str) -> CompileResult<DocumentScan> {
    Scanner::new(source).scan()
}

struct OpenTag {
    name: String,
    class: Option<String>,
    self_closing: bool,
}

struct Scanner<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Scanner<'src> {
    fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    fn scan(mut self) -> CompileResult<DocumentScan> {
        let mut scan = DocumentScan::default();
        let mut in_head = false;

        while let Some(offset) = self.source[self.pos..].find('<') {
            self.pos += offset;
            let start = self.pos;
            let rest = &self.source[start..];

            if rest.starts_with("<!--") {
                match self.source[start + 4..].find("-->") {
                    Some(end) => self.pos = start + 4 + end + 3,
                    None => return Err(CompileError::unterminated_comment(start)),
                }
                continue;
            }

            if rest.starts_with("</") {
                self.pos = start + 2;
                let name = self.scan_name();
                self.skip_to_tag_end(start)?;
                if in_head && name == "head" && scan.head_close_start.is_none() {
                    scan.head_close_start = Some(start);
                    in_head = false;
                }
                continue;
            }

            if rest.starts_with("<!") || rest.starts_with("<?") {
                self.pos = start + 2;
                self.skip_to_tag_end(start)?;
                continue;
            }

            match rest[1..].chars().next() {
                None => break,
                Some(next) if !next.is_ascii_alphabetic() => {
                    // Stray `<` in text content.
                    self.pos = start + 1;
                    continue;
                }
                Some(_) => {}
            }

            self.pos = start + 1;
            let tag = self.scan_open_tag(start)?;
            scan.tag_names.insert(tag.name.clone());

            if let Some(class_value) = &tag.class {
                for token in class_value.split_ascii_whitespace() {
                    scan.class_tokens.push(token.to_string());
                }
            }

            if tag.name == "head" && scan.head_open_end.is_none() {
                scan.head_open_end = Some(self.pos);
                in_head = true;
            }

            if !tag.self_closing && RAW_TEXT_TAGS.contains(&tag.name.as_str()) {
                let text_start = self.pos;
                let close = find_ci(self.source, &format!("</{}", tag.name), text_start)
                    .ok_or_else(|| CompileError::unclosed_raw_text(&tag.name, start))?;
                if tag.name == "style" && in_head && scan.style_text.is_none() {
                    scan.style_text = Some((text_start, close));
                }
                // The loop re-enters at the closing tag.
                self.pos = close;
            }
        }

        Ok(scan)
    }

    fn scan_open_tag(&mut self, start: usize) -> CompileResult<OpenTag> {
        let name = self.scan_name();
        let mut class = None;
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(CompileError::unterminated_tag(start)),
                Some(b'>') => {
                    self.pos += 1;
                    break;
                }
                Some(b'/') => {
                    self.pos += 1;
                    self_closing = true;
                }
                Some(b'=') => {
                    // Stray `=` with no attribute name.
                    self.pos += 1;
                }
                Some(_) => {
                    self_closing = false;
                    let attr = self.scan_attr_name();
                    if attr.is_empty() {
                        self.pos += 1;
                        continue;
                    }
                    self.skip_whitespace();
                    let value = if self.peek() == Some(b'=') {
                        self.pos += 1;
                        self.skip_whitespace();
                        Some(self.scan_attr_value(start)?)
                    } else {
                        None
                    };
                    if attr.eq_ignore_ascii_case("class") {
                        if let Some(value) = value {
                            class = Some(value);
                        }
                    }
                }
            }
        }

        Ok(OpenTag {
            name,
            class,
            self_closing,
        })
    }

    fn scan_name(&mut self) -> String {
        let start = self.pos;
        while matches!(
            self.peek(),
            Some(b) if b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || b == b':'
        ) {
            self.pos += 1;
        }
        self.source[start..self.pos].to_ascii_lowercase()
    }

    fn scan_attr_name(&mut self) -> String {
        let start = self.pos;
        while matches!(
            self.peek(),
            Some(b) if !b.is_ascii_whitespace() && b != b'=' && b != b'>' && b != b'/'
        ) {
            self.pos += 1;
        }
        self.source[start..self.pos].to_string()
    }

    fn scan_attr_value(&mut self, tag_start: usize) -> CompileResult<String> {
        match self.peek() {
            Some(quote @ (b'"' | b'\'')) => {
                self.pos += 1;
                let start = self.pos;
                match self.source.as_bytes()[start..].iter().position(|&b| b == quote) {
                    Some(len) => {
                        let value = self.source[start..start + len].to_string();
                        self.pos = start + len + 1;
                        Ok(value)
                    }
                    None => Err(CompileError::unterminated_attribute(tag_start)),
                }
            }
            _ => {
                let start = self.pos;
                while matches!(
                    self.peek(),
                    Some(b) if !b.is_ascii_whitespace() && b != b'>'
                ) {
                    self.pos += 1;
                }
                Ok(self.source[start..self.pos].to_string())
            }
        }
    }

    fn skip_to_tag_end(&mut self, start: usize) -> CompileResult<()> {
        match self.source[self.pos..].find('>') {
            Some(offset) => {
                self.pos += offset + 1;
                Ok(())
            }
            None => Err(CompileError::unterminated_tag(start)),
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }
}

/// ASCII case-insensitive substring search starting at `from`.
fn find_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let haystack = haystack.as_bytes();
    let needle = needle.as_bytes();
    if needle.is_empty() || haystack.len() < from + needle.len() {
        return None;
    }
    (from..=haystack.len() - needle.len())
        .find(|&idx| haystack[idx..idx + needle.len()].eq_ignore_ascii_case(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_class_tokens_in_order() {
        let scan = scan_document(
            r#"<div class="mt-10px w-full"><span class='c-#333'>x</span></div>"#,
        )
        .expect("Failed to scan");
        assert_eq!(scan.class_tokens, vec!["mt-10px", "w-full", "c-#333"]);
    }

    #[test]
    fn test_collects_tag_names_lowercased() {
        let scan = scan_document("<DIV><Desktop>hi</Desktop></DIV>").expect("Failed to scan");
        assert!(scan.tag_names.contains("div"));
        assert!(scan.tag_names.contains("desktop"));
    }

    #[test]
    fn test_head_and_style_spans() {
        let html = "<html><head><style>.a { color: red; }</style></head><body></body></html>";
        let scan = scan_document(html).expect("Failed to scan");

        let open_end = scan.head_open_end.expect("head open missing");
        assert_eq!(&html[open_end - 6..open_end], "<head>");

        let close = scan.head_close_start.expect("head close missing");
        assert!(html[close..].starts_with("</head>"));

        let (text_start, text_end) = scan.style_text.expect("style span missing");
        assert_eq!(&html[text_start..text_end], ".a { color: red; }");
    }

    #[test]
    fn test_style_outside_head_is_not_the_patch_target() {
        let html = "<html><body><style>.a {}</style></body></html>";
        let scan = scan_document(html).expect("Failed to scan");
        assert!(scan.style_text.is_none());
    }

    #[test]
    fn test_comments_and_doctype_skipped() {
        let html = "<!DOCTYPE html><!-- <div class=\"mt-10px\"> --><p class=\"m-4\"></p>";
        let scan = scan_document(html).expect("Failed to scan");
        assert_eq!(scan.class_tokens, vec!["m-4"]);
    }

    #[test]
    fn test_script_content_not_scanned() {
        let html = r#"<script>var s = "<div class='mt-10px'>";</script><div class="p-8"></div>"#;
        let scan = scan_document(html).expect("Failed to scan");
        assert_eq!(scan.class_tokens, vec!["p-8"]);
    }

    #[test]
    fn test_unquoted_class_attribute() {
        let scan = scan_document("<div class=mt-10px></div>").expect("Failed to scan");
        assert_eq!(scan.class_tokens, vec!["mt-10px"]);
    }

    #[test]
    fn test_self_closing_and_void_tags() {
        let scan = scan_document(r#"<br/><img class="w-full" src="x.png"/>"#)
            .expect("Failed to scan");
        assert_eq!(scan.class_tokens, vec!["w-full"]);
    }

    #[test]
    fn test_stray_angle_bracket_in_text() {
        let scan = scan_document("<p>1 < 2</p>").expect("Failed to scan");
        assert!(scan.tag_names.contains("p"));
    }

    #[test]
    fn test_unterminated_attribute_is_structural_error() {
        let err = scan_document(r#"<div class="mt-10px></div>"#).expect_err("Should fail");
        assert!(matches!(err, CompileError::UnterminatedAttribute { .. }));
    }

    #[test]
    fn test_unterminated_comment_is_structural_error() {
        let err = scan_document("<!-- never closed").expect_err("Should fail");
        assert!(matches!(err, CompileError::UnterminatedComment { .. }));
    }

    #[test]
    fn test_unclosed_script_is_structural_error() {
        let err = scan_document("<script>let x = 1;").expect_err("Should fail");
        assert!(matches!(err, CompileError::UnclosedRawText { .. }));
    }

    #[test]
    fn test_unterminated_tag_is_structural_error() {
        let err = scan_document("<div class=x").expect_err("Should fail");
        assert!(matches!(err, CompileError::UnterminatedTag { .. }));
    }
}
