//! Rule construction and (media, important, negated) bucketing.

use crate::grammar::Declaration;
use atomcss_parser::{Media, ParseError, ParsedModifiers};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Characters escaped when a class token becomes a selector.
const ESCAPED: &[char] = &[':', '!', '#', '[', ']', '.', '(', ')', ',', '%'];

/// Escape a class token for use in a CSS class selector. The original
/// literal stays matchable: only the documented characters gain a `\`.
pub fn escape_class_selector(token: &str) -> String {
    let mut escaped = String::with_capacity(token.len());
    for ch in token.chars() {
        if ESCAPED.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Emission bucket: rules sharing one key are serialized together.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BucketKey {
    pub media: Option<Media>,
    pub important: bool,
    pub negated: bool,
}

impl BucketKey {
    pub fn global(important: bool) -> Self {
        Self {
            media: None,
            important,
            negated: false,
        }
    }

    pub fn scoped(media: Media, important: bool, negated: bool) -> Self {
        Self {
            media: Some(media),
            important,
            negated,
        }
    }
}

/// A generated rule: selector plus its serialized declaration block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub selector: String,
    pub block: String,
}

impl Rule {
    pub fn render(&self) -> String {
        format!("{} {{ {} }}", self.selector, self.block)
    }
}

/// Groups resolved rules by bucket, deduping exact duplicates while
/// preserving first-seen order. Parse errors accumulate alongside and are
/// rendered as marker rules by the emitter.
#[derive(Debug, Default)]
pub struct RuleBucketer {
    buckets: BTreeMap<BucketKey, Vec<Rule>>,
    errors: Vec<String>,
}

impl RuleBucketer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the rule for one parsed token and insert it into its bucket.
    pub fn add(&mut self, parsed: &ParsedModifiers, declarations: &[Declaration]) {
        let mut selector = format!(".{}", escape_class_selector(&parsed.original));
        for pseudo in &parsed.pseudos {
            selector.push(':');
            selector.push_str(pseudo.as_str());
        }

        let suffix = if parsed.important { " !important" } else { "" };
        let block = declarations
            .iter()
            .map(|d| format!("{}: {}{};", d.property, d.value, suffix))
            .collect::<Vec<_>>()
            .join(" ");

        let rule = Rule { selector, block };
        let key = BucketKey {
            media: parsed.media,
            important: parsed.important,
            negated: parsed.negated,
        };

        let bucket = self.buckets.entry(key).or_default();
        if !bucket.contains(&rule) {
            bucket.push(rule);
        }
    }

    /// Record a modifier syntax error; the offending literal gets a visible
    /// marker rule at the end of the emitted CSS.
    pub fn add_error(&mut self, error: &ParseError) {
        let literal = error.token().to_string();
        if !self.errors.contains(&literal) {
            self.errors.push(literal);
        }
    }

    pub fn bucket(&self, key: BucketKey) -> &[Rule] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Vec::is_empty) && self.errors.is_empty()
    }
}
