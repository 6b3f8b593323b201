use crate::bucket::{BucketKey, Rule};
use crate::grammar::{resolve_base_token, Declaration};

fn one(base: &str) -> Declaration {
    let mut declarations = resolve_base_token(base).expect("Token should resolve");
    assert_eq!(declarations.len(), 1, "expected one declaration for '{}'", base);
    declarations.remove(0)
}

fn assert_resolves(base: &str, property: &str, value: &str) {
    let declaration = one(base);
    assert_eq!(declaration.property, property, "property for '{}'", base);
    assert_eq!(declaration.value, value, "value for '{}'", base);
}

#[test]
fn test_spacing_family() {
    assert_resolves("m-8", "margin", "8px");
    assert_resolves("mt-10px", "margin-top", "10px");
    assert_resolves("mr-1rem", "margin-right", "1rem");
    assert_resolves("mb-0", "margin-bottom", "0px");
    assert_resolves("ml-auto", "margin-left", "auto");
    assert_resolves("p-16", "padding", "16px");
    assert_resolves("pt-4px", "padding-top", "4px");
    assert_resolves("pr-50%", "padding-right", "50%");
    assert_resolves("pb-2.5", "padding-bottom", "2.5px");
    assert_resolves("pl-3em", "padding-left", "3em");
}

#[test]
fn test_border_family() {
    assert_resolves("b-1px-solid-#000", "border", "1px solid #000");
    assert_resolves("bt-2-dotted-red", "border-top", "2px dotted var(--red)");
    assert_resolves("br-1px", "border-right", "1px");
    assert_resolves("bb-solid", "border-bottom", "solid");
    assert_resolves("bl-3px-double-#abcdef", "border-left", "3px double #abcdef");
}

#[test]
fn test_typography_family() {
    assert_resolves("fz-12px", "font-size", "12px");
    assert_resolves("fz-12", "font-size", "12px");
    assert_resolves("fz-lg", "font-size", "1.125rem");
    assert_resolves("fw-bold", "font-weight", "700");
    assert_resolves("fw-450", "font-weight", "450");
    assert_resolves("ff-[Inter,sans-serif]", "font-family", "Inter,sans-serif");
    assert_resolves("ff-[Open_Sans]", "font-family", "Open Sans");
    assert_resolves("fs-italic", "font-style", "italic");
    assert_resolves("td-underline", "text-decoration", "underline");
    assert_resolves("ls-0.5px", "letter-spacing", "0.5px");
    assert_resolves("ls-2", "letter-spacing", "2px");
    assert_resolves("tt-uppercase", "text-transform", "uppercase");
    assert_resolves("ta-center", "text-align", "center");
    assert_resolves("ta-justify", "text-align", "justify");
    assert_resolves("tw-balance", "text-wrap", "balance");
}

#[test]
fn test_unbracketed_font_family_is_unmapped() {
    assert!(resolve_base_token("ff-Inter").is_none());
    assert!(resolve_base_token("ff-[]").is_none());
}

#[test]
fn test_color_family() {
    assert_resolves("c-#112233", "color", "#112233");
    assert_resolves("c-rgb(10,20,30)", "color", "rgb(10,20,30)");
    assert_resolves("c-primary", "color", "var(--primary)");
}

#[test]
fn test_sizing_family() {
    assert_resolves("w-full", "width", "100%");
    assert_resolves("w-320px", "width", "320px");
    assert_resolves("h-auto", "height", "auto");
    assert_resolves("h-100vh", "height", "100vh");
    assert_resolves("min-w-200", "min-width", "200px");
    assert_resolves("min-h-full", "min-height", "100%");
    assert_resolves("max-w-none", "max-width", "none");
    assert_resolves("max-h-80%", "max-height", "80%");
}

#[test]
fn test_gap_and_radius_families() {
    assert_resolves("gap-8", "gap", "8px");
    assert_resolves("gap-1rem", "gap", "1rem");
    assert_resolves("rounded-4px", "border-radius", "4px");
    assert_resolves("rounded-full", "border-radius", "9999px");
    assert_resolves("rounded-none", "border-radius", "0");
}

#[test]
fn test_background_family() {
    assert_resolves("bg-#112233", "background-color", "#112233");
    assert_resolves("bg-surface", "background-color", "var(--surface)");
    assert_resolves("bg-cover", "background-size", "cover");
    assert_resolves("bg-contain", "background-size", "contain");

    let declarations = resolve_base_token("bg-blur-8").expect("Token should resolve");
    assert_eq!(
        declarations,
        vec![
            Declaration::new("backdrop-filter", "blur(8px)"),
            Declaration::new("background-color", "rgba(255, 255, 255, 0.3)"),
        ]
    );
}

#[test]
fn test_display_position_keywords() {
    assert_resolves("block", "display", "block");
    assert_resolves("inline-block", "display", "inline-block");
    assert_resolves("flex", "display", "flex");
    assert_resolves("grid", "display", "grid");
    assert_resolves("hidden", "display", "none");
    assert_resolves("relative", "position", "relative");
    assert_resolves("absolute", "position", "absolute");
    assert_resolves("fixed", "position", "fixed");
    assert_resolves("sticky", "position", "sticky");
}

#[test]
fn test_flex_alignment_corners() {
    let declarations = resolve_base_token("bottom-right-12").expect("Token should resolve");
    assert_eq!(
        declarations,
        vec![
            Declaration::new("display", "flex"),
            Declaration::new("align-items", "flex-end"),
            Declaration::new("justify-content", "flex-end"),
            Declaration::new("padding-bottom", "12px"),
            Declaration::new("padding-right", "12px"),
        ]
    );

    let declarations = resolve_base_token("center-24px").expect("Token should resolve");
    assert_eq!(
        declarations,
        vec![
            Declaration::new("display", "flex"),
            Declaration::new("align-items", "center"),
            Declaration::new("justify-content", "center"),
            Declaration::new("padding", "24px"),
        ]
    );
}

#[test]
fn test_scroll_family() {
    let declarations = resolve_base_token("scroll-fixed-300px").expect("Token should resolve");
    assert_eq!(
        declarations,
        vec![
            Declaration::new("position", "fixed"),
            Declaration::new("overflow-y", "auto"),
            Declaration::new("max-height", "300px"),
        ]
    );

    assert_resolves("scroll", "overflow", "auto");
}

#[test]
fn test_alias_table() {
    assert_resolves("font-size-14", "font-size", "14px");
    assert_resolves("font-weight-medium", "font-weight", "500");
    assert_resolves("font-style-italic", "font-style", "italic");
    assert_resolves("font-family-Open_Sans", "font-family", "Open Sans");
    assert_resolves("text-decoration-line-through", "text-decoration", "line-through");
    assert_resolves("text-transform-capitalize", "text-transform", "capitalize");
    assert_resolves("text-align-right", "text-align", "right");
    assert_resolves("letter-spacing-1", "letter-spacing", "1px");
    assert_resolves("line-height-1.5", "line-height", "1.5");
    assert_resolves("color-#333", "color", "#333");
    assert_resolves("color-accent", "color", "var(--accent)");
    assert_resolves("background-color-#fafafa", "background-color", "#fafafa");
    assert_resolves("display-flex", "display", "flex");
    assert_resolves("position-absolute", "position", "absolute");
    assert_resolves("opacity-0.5", "opacity", "0.5");
    assert_resolves("cursor-pointer", "cursor", "pointer");
    assert_resolves("blur-6px", "filter", "blur(6px)");
}

#[test]
fn test_family_order_edge_before_all_sides() {
    // `mt-` must not be read as `m-` with value `t-...`.
    assert_resolves("mt-1", "margin-top", "1px");
    assert_resolves("m-t", "margin", "t");
}

#[test]
fn test_unmapped_tokens_yield_none() {
    for base in [
        "zzz-unknown-token",
        "not-desktop",
        "grid-area:hover",
        "scrollbar",
        "center",
        "top-left",
    ] {
        assert!(
            resolve_base_token(base).is_none(),
            "'{}' should not resolve",
            base
        );
    }
}

#[test]
fn test_rule_and_bucket_key_serialize() {
    // Rules and bucket keys travel to editor tooling as JSON.
    let rule = Rule {
        selector: ".mt-10px".to_string(),
        block: "margin-top: 10px;".to_string(),
    };
    let json = serde_json::to_value(&rule).expect("Failed to serialize");
    assert_eq!(json["selector"], ".mt-10px");

    let key = BucketKey::global(true);
    let json = serde_json::to_value(key).expect("Failed to serialize");
    assert_eq!(json["important"], true);
    assert_eq!(json["media"], serde_json::Value::Null);
}
