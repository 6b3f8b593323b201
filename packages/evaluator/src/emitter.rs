//! Fixed-order CSS serialization of bucketed rules, plus the token-list
//! compilation entry point.

use crate::bucket::{escape_class_selector, BucketKey, Rule, RuleBucketer};
use crate::grammar::resolve_base_token;
use crate::media::{breakpoint, complement};
use atomcss_parser::{parse_class_token, Media};
use tracing::{debug, info, instrument};

/// Serialize the buckets: global non-important, global important, then per
/// canonical media its non-negated block wrapped in the breakpoint and its
/// negated block wrapped in the complement, error markers last.
pub fn to_css(bucketer: &RuleBucketer) -> String {
    let mut lines: Vec<String> = Vec::new();

    for important in [false, true] {
        for rule in bucketer.bucket(BucketKey::global(important)) {
            lines.push(rule.render());
        }
    }

    for media in Media::ALL {
        emit_scoped(&mut lines, bucketer, media, false, breakpoint(media));
        emit_scoped(&mut lines, bucketer, media, true, complement(media));
    }

    for literal in bucketer.errors() {
        lines.push(format!(
            ".{} {{ color: red; font-weight: bold; content: 'ERROR({})'; }}",
            escape_class_selector(literal),
            literal
        ));
    }

    lines.join("\n")
}

fn emit_scoped(
    lines: &mut Vec<String>,
    bucketer: &RuleBucketer,
    media: Media,
    negated: bool,
    condition: &str,
) {
    let rules: Vec<&Rule> = [false, true]
        .iter()
        .flat_map(|&important| bucketer.bucket(BucketKey::scoped(media, important, negated)))
        .collect();
    if rules.is_empty() {
        return;
    }

    lines.push(format!("@media {} {{", condition));
    for rule in rules {
        lines.push(format!("  {}", rule.render()));
    }
    lines.push("}".to_string());
}

/// Compile a list of class tokens to CSS text. Modifier syntax errors are
/// recovered as marker rules; unmapped base tokens are skipped silently.
#[instrument(skip(tokens))]
pub fn compile_tokens<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut bucketer = RuleBucketer::new();
    let mut seen = 0usize;

    for token in tokens {
        seen += 1;
        match parse_class_token(token) {
            Ok(parsed) => {
                if let Some(declarations) = resolve_base_token(&parsed.base) {
                    bucketer.add(&parsed, &declarations);
                }
            }
            Err(error) => {
                debug!(token, %error, "recording token error marker");
                bucketer.add_error(&error);
            }
        }
    }

    info!(tokens = seen, errors = bucketer.errors().len(), "compiled class tokens");
    to_css(&bucketer)
}
