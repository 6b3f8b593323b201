//! The base-token grammar: an ordered list of family matchers mapping a
//! demodified token to CSS declarations.

use crate::value::{
    blur_value, display_keyword, font_size_keyword, font_style_keyword, font_weight_keyword,
    is_dimension, is_number, normalize_color, normalize_length, position_keyword,
    text_align_keyword, text_decoration_keyword, text_transform_keyword,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One `property: value` pair produced by the token grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

type FamilyFn = fn(&str) -> Option<Vec<Declaration>>;

/// Family matchers, tried in order. The order is part of the grammar:
/// edge prefixes precede their all-sides substring (`mt-` before `m-`,
/// `bt-` before `b-`), `scroll-fixed-` precedes the exact scroll keywords,
/// and the generic alias fallback always goes last so a long spelling can
/// never shadow a dedicated family.
const FAMILIES: &[(&str, FamilyFn)] = &[
    ("spacing", resolve_spacing),
    ("border", resolve_border),
    ("typography", resolve_typography),
    ("color", resolve_color),
    ("sizing", resolve_sizing),
    ("gap", resolve_gap),
    ("radius", resolve_radius),
    ("z-index", resolve_z_index),
    ("background", resolve_background),
    ("scroll", resolve_scroll),
    ("display", resolve_display_position),
    ("flex-align", resolve_flex_alignment),
    ("alias", resolve_alias),
];

/// Resolve a base token to its declarations, or `None` when the token is
/// not part of the grammar (an ordinary class name — never an error).
pub fn resolve_base_token(base: &str) -> Option<Vec<Declaration>> {
    if base.is_empty() {
        return None;
    }
    for (family, matcher) in FAMILIES {
        if let Some(declarations) = matcher(base) {
            debug!(family, base, "resolved token family");
            return Some(declarations);
        }
    }
    None
}

fn single(property: &str, value: impl Into<String>) -> Option<Vec<Declaration>> {
    Some(vec![Declaration::new(property, value)])
}

// ---------------------------------------------------------------------------
// spacing

/// Margin and padding, all-sides or per-edge. Edge forms precede the
/// all-sides form so `mt-` is never read as `m-` with a stray `t`.
fn resolve_spacing(base: &str) -> Option<Vec<Declaration>> {
    const EDGES: &[(&str, &str)] = &[
        ("mt-", "margin-top"),
        ("mr-", "margin-right"),
        ("mb-", "margin-bottom"),
        ("ml-", "margin-left"),
        ("m-", "margin"),
        ("pt-", "padding-top"),
        ("pr-", "padding-right"),
        ("pb-", "padding-bottom"),
        ("pl-", "padding-left"),
        ("p-", "padding"),
    ];

    for (prefix, property) in EDGES {
        if let Some(value) = base.strip_prefix(prefix) {
            if value.is_empty() {
                return None;
            }
            return single(property, normalize_length(value));
        }
    }
    None
}

// ---------------------------------------------------------------------------
// border

/// Border shorthands: `bt-1px-solid-#333`, `b-2-dashed-accent`. Each
/// `-`-separated segment is classified as a width, a line style, or a
/// color, then joined into the CSS shorthand.
fn resolve_border(base: &str) -> Option<Vec<Declaration>> {
    const EDGES: &[(&str, &str)] = &[
        ("bt-", "border-top"),
        ("br-", "border-right"),
        ("bb-", "border-bottom"),
        ("bl-", "border-left"),
        ("b-", "border"),
    ];
    const LINE_STYLES: &[&str] = &[
        "solid", "dashed", "dotted", "double", "groove", "ridge", "inset", "outset", "none",
    ];

    for (prefix, property) in EDGES {
        if let Some(rest) = base.strip_prefix(prefix) {
            if rest.is_empty() {
                return None;
            }
            let mut parts = Vec::new();
            for segment in rest.split('-') {
                if segment.is_empty() {
                    return None;
                }
                if LINE_STYLES.contains(&segment) {
                    parts.push(segment.to_string());
                } else if is_dimension(segment) {
                    parts.push(normalize_length(segment));
                } else {
                    parts.push(normalize_color(segment));
                }
            }
            return single(property, parts.join(" "));
        }
    }
    None
}

// ---------------------------------------------------------------------------
// typography

fn resolve_typography(base: &str) -> Option<Vec<Declaration>> {
    let (prefix, value) = base.split_once('-')?;
    if value.is_empty() {
        return None;
    }
    match prefix {
        "fz" => {
            let resolved = font_size_keyword(value)
                .map(str::to_string)
                .unwrap_or_else(|| normalize_length(value));
            single("font-size", resolved)
        }
        "fw" => {
            let resolved = font_weight_keyword(value)
                .map(str::to_string)
                .unwrap_or_else(|| value.to_string());
            single("font-weight", resolved)
        }
        "ff" => {
            // Bracketed family list: `ff-[Inter,sans-serif]`; underscores
            // stand in for spaces.
            let inner = value.strip_prefix('[')?.strip_suffix(']')?;
            if inner.is_empty() {
                return None;
            }
            single("font-family", inner.replace('_', " "))
        }
        "fs" => single("font-style", value),
        "td" => single("text-decoration", value),
        "ls" => single("letter-spacing", normalize_length(value)),
        "tt" => single("text-transform", value),
        "ta" => single("text-align", value),
        "tw" => single("text-wrap", value),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// color

fn resolve_color(base: &str) -> Option<Vec<Declaration>> {
    let value = base.strip_prefix("c-")?;
    if value.is_empty() {
        return None;
    }
    single("color", normalize_color(value))
}

// ---------------------------------------------------------------------------
// sizing

fn resolve_sizing(base: &str) -> Option<Vec<Declaration>> {
    const DIMENSIONS: &[(&str, &str)] = &[
        ("min-w-", "min-width"),
        ("min-h-", "min-height"),
        ("max-w-", "max-width"),
        ("max-h-", "max-height"),
        ("w-", "width"),
        ("h-", "height"),
    ];

    for (prefix, property) in DIMENSIONS {
        if let Some(value) = base.strip_prefix(prefix) {
            let resolved = match value {
                "" => return None,
                "full" => "100%".to_string(),
                "auto" => "auto".to_string(),
                "none" => "none".to_string(),
                other => normalize_length(other),
            };
            return single(property, resolved);
        }
    }
    None
}

// ---------------------------------------------------------------------------
// gap

fn resolve_gap(base: &str) -> Option<Vec<Declaration>> {
    let value = base.strip_prefix("gap-")?;
    if value.is_empty() {
        return None;
    }
    single("gap", normalize_length(value))
}

// ---------------------------------------------------------------------------
// corner radius

fn resolve_radius(base: &str) -> Option<Vec<Declaration>> {
    let value = base.strip_prefix("rounded-")?;
    let resolved = match value {
        "" => return None,
        "full" => "9999px".to_string(),
        "none" => "0".to_string(),
        other => normalize_length(other),
    };
    single("border-radius", resolved)
}

// ---------------------------------------------------------------------------
// z-index

fn resolve_z_index(base: &str) -> Option<Vec<Declaration>> {
    let value = base.strip_prefix("z-")?;
    let resolved = match value {
        "full" => "100000",
        "none" => "0",
        other if is_number(other) => other,
        _ => return None,
    };
    single("z-index", resolved)
}

// ---------------------------------------------------------------------------
// background

fn resolve_background(base: &str) -> Option<Vec<Declaration>> {
    if let Some(value) = base.strip_prefix("bg-blur-") {
        if value.is_empty() {
            return None;
        }
        // Blur alone is invisible over transparent backgrounds; pair it
        // with a translucent overlay.
        return Some(vec![
            Declaration::new("backdrop-filter", blur_value(value)),
            Declaration::new("background-color", "rgba(255, 255, 255, 0.3)"),
        ]);
    }

    let value = base.strip_prefix("bg-")?;
    match value {
        "" => None,
        "cover" | "contain" | "auto" => single("background-size", value),
        other => single("background-color", normalize_color(other)),
    }
}

// ---------------------------------------------------------------------------
// overflow / scroll shortcuts

fn resolve_scroll(base: &str) -> Option<Vec<Declaration>> {
    if let Some(value) = base.strip_prefix("scroll-fixed-") {
        if value.is_empty() {
            return None;
        }
        return Some(vec![
            Declaration::new("position", "fixed"),
            Declaration::new("overflow-y", "auto"),
            Declaration::new("max-height", normalize_length(value)),
        ]);
    }

    match base {
        "scroll" => single("overflow", "auto"),
        "scroll-x" => Some(vec![
            Declaration::new("overflow-x", "auto"),
            Declaration::new("overflow-y", "hidden"),
        ]),
        "scroll-y" => Some(vec![
            Declaration::new("overflow-y", "auto"),
            Declaration::new("overflow-x", "hidden"),
        ]),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// display / position keywords

fn resolve_display_position(base: &str) -> Option<Vec<Declaration>> {
    if let Some(value) = display_keyword(base) {
        return single("display", value);
    }
    if let Some(value) = position_keyword(base) {
        return single("position", value);
    }
    None
}

// ---------------------------------------------------------------------------
// directional flex alignment

/// Corner tokens pin content to a corner of a flex container and inset it:
/// `top-left-20px` → flex alignment plus `padding-top`/`padding-left`.
/// `center-<v>` centers both axes with a uniform padding.
fn resolve_flex_alignment(base: &str) -> Option<Vec<Declaration>> {
    const CORNERS: &[(&str, &str, &str, &str, &str)] = &[
        ("top-left-", "flex-start", "flex-start", "padding-top", "padding-left"),
        ("top-right-", "flex-start", "flex-end", "padding-top", "padding-right"),
        ("bottom-left-", "flex-end", "flex-start", "padding-bottom", "padding-left"),
        ("bottom-right-", "flex-end", "flex-end", "padding-bottom", "padding-right"),
    ];

    for (prefix, align, justify, pad_vertical, pad_horizontal) in CORNERS {
        if let Some(value) = base.strip_prefix(prefix) {
            if value.is_empty() {
                return None;
            }
            let inset = normalize_length(value);
            return Some(vec![
                Declaration::new("display", "flex"),
                Declaration::new("align-items", *align),
                Declaration::new("justify-content", *justify),
                Declaration::new(*pad_vertical, inset.clone()),
                Declaration::new(*pad_horizontal, inset),
            ]);
        }
    }

    if let Some(value) = base.strip_prefix("center-") {
        if value.is_empty() {
            return None;
        }
        return Some(vec![
            Declaration::new("display", "flex"),
            Declaration::new("align-items", "center"),
            Declaration::new("justify-content", "center"),
            Declaration::new("padding", normalize_length(value)),
        ]);
    }

    None
}

// ---------------------------------------------------------------------------
// generic alias fallback

#[derive(Clone, Copy)]
enum Normalize {
    /// Bare numerics get `px` appended.
    Length,
    /// Per-property keyword lookup; unrecognized values pass through.
    Keyword,
    /// Bare names become `var(--name)`.
    Color,
    /// Value becomes `blur(v)`.
    Blur,
    Raw,
}

/// The complete long-spelling alias table, longest alias first. This is the
/// canonical set; nothing outside it is accepted by the fallback.
const ALIASES: &[(&str, &str, Normalize)] = &[
    ("background-color", "background-color", Normalize::Color),
    ("text-decoration", "text-decoration", Normalize::Keyword),
    ("text-transform", "text-transform", Normalize::Keyword),
    ("letter-spacing", "letter-spacing", Normalize::Length),
    ("line-height", "line-height", Normalize::Raw),
    ("font-family", "font-family", Normalize::Raw),
    ("font-weight", "font-weight", Normalize::Keyword),
    ("text-align", "text-align", Normalize::Keyword),
    ("font-style", "font-style", Normalize::Keyword),
    ("font-size", "font-size", Normalize::Length),
    ("position", "position", Normalize::Keyword),
    ("display", "display", Normalize::Keyword),
    ("opacity", "opacity", Normalize::Raw),
    ("cursor", "cursor", Normalize::Raw),
    ("color", "color", Normalize::Color),
    ("blur", "filter", Normalize::Blur),
];

fn resolve_alias(base: &str) -> Option<Vec<Declaration>> {
    for (alias, property, normalize) in ALIASES {
        let value = match base
            .strip_prefix(alias)
            .and_then(|rest| rest.strip_prefix('-'))
        {
            Some(value) if !value.is_empty() => value,
            _ => continue,
        };

        let resolved = match normalize {
            Normalize::Length => normalize_length(value),
            Normalize::Keyword => keyword_for(property, value),
            Normalize::Color => normalize_color(value),
            Normalize::Blur => blur_value(value),
            Normalize::Raw => value.replace('_', " "),
        };
        return single(property, resolved);
    }
    None
}

fn keyword_for(property: &str, value: &str) -> String {
    let mapped = match property {
        "font-weight" => font_weight_keyword(value),
        "font-style" => font_style_keyword(value),
        "text-decoration" => text_decoration_keyword(value),
        "text-transform" => text_transform_keyword(value),
        "text-align" => text_align_keyword(value),
        "display" => display_keyword(value),
        "position" => position_keyword(value),
        _ => None,
    };
    mapped.map(str::to_string).unwrap_or_else(|| value.to_string())
}
