//! Value normalization shared by the token-grammar families.

/// True when the whole string is a bare number (`10`, `2.5`, `-4`).
pub fn is_number(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    if digits.is_empty() {
        return false;
    }
    let mut seen_dot = false;
    let mut seen_digit = false;
    for ch in digits.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

/// True when the string reads as a numeric dimension: a bare number or a
/// number followed by a unit (`10px`, `1.5rem`, `50%`).
pub fn is_dimension(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    digits
        .chars()
        .next()
        .map(|ch| ch.is_ascii_digit() || ch == '.')
        .unwrap_or(false)
}

/// Bare numbers get `px` appended; everything else passes through.
pub fn normalize_length(value: &str) -> String {
    if is_number(value) {
        format!("{}px", value)
    } else {
        value.to_string()
    }
}

/// True for literal color syntax: `#rgb`/`#rrggbb` hex or a functional
/// `rgb(...)` / `rgba(...)` / `hsl(...)` / `hsla(...)` value.
pub fn is_color_literal(value: &str) -> bool {
    value.starts_with('#')
        || value.starts_with("rgb(")
        || value.starts_with("rgba(")
        || value.starts_with("hsl(")
        || value.starts_with("hsla(")
}

/// Literal colors pass through; symbolic names become `var(--name)` so
/// themes can define them.
pub fn normalize_color(value: &str) -> String {
    if is_color_literal(value) {
        value.to_string()
    } else {
        format!("var(--{})", value)
    }
}

pub fn blur_value(value: &str) -> String {
    format!("blur({})", normalize_length(value))
}

/// Named font weights, mapped to their numeric values.
pub fn font_weight_keyword(value: &str) -> Option<&'static str> {
    match value {
        "thin" => Some("100"),
        "extralight" => Some("200"),
        "light" => Some("300"),
        "normal" => Some("400"),
        "medium" => Some("500"),
        "semibold" => Some("600"),
        "bold" => Some("700"),
        "extrabold" => Some("800"),
        "black" => Some("900"),
        _ => None,
    }
}

/// Named font sizes.
pub fn font_size_keyword(value: &str) -> Option<&'static str> {
    match value {
        "xs" => Some("0.75rem"),
        "sm" => Some("0.875rem"),
        "md" => Some("1rem"),
        "lg" => Some("1.125rem"),
        "xl" => Some("1.25rem"),
        "2xl" => Some("1.5rem"),
        "3xl" => Some("1.875rem"),
        "4xl" => Some("2.25rem"),
        _ => None,
    }
}

pub fn display_keyword(value: &str) -> Option<&'static str> {
    match value {
        "block" => Some("block"),
        "inline" => Some("inline"),
        "inline-block" => Some("inline-block"),
        "flex" => Some("flex"),
        "inline-flex" => Some("inline-flex"),
        "grid" => Some("grid"),
        "hidden" => Some("none"),
        "none" => Some("none"),
        _ => None,
    }
}

pub fn position_keyword(value: &str) -> Option<&'static str> {
    match value {
        "static" => Some("static"),
        "relative" => Some("relative"),
        "absolute" => Some("absolute"),
        "fixed" => Some("fixed"),
        "sticky" => Some("sticky"),
        _ => None,
    }
}

pub fn font_style_keyword(value: &str) -> Option<&'static str> {
    match value {
        "normal" => Some("normal"),
        "italic" => Some("italic"),
        "oblique" => Some("oblique"),
        _ => None,
    }
}

pub fn text_decoration_keyword(value: &str) -> Option<&'static str> {
    match value {
        "none" => Some("none"),
        "underline" => Some("underline"),
        "overline" => Some("overline"),
        "line-through" => Some("line-through"),
        _ => None,
    }
}

pub fn text_transform_keyword(value: &str) -> Option<&'static str> {
    match value {
        "none" => Some("none"),
        "uppercase" => Some("uppercase"),
        "lowercase" => Some("lowercase"),
        "capitalize" => Some("capitalize"),
        _ => None,
    }
}

pub fn text_align_keyword(value: &str) -> Option<&'static str> {
    match value {
        "left" => Some("left"),
        "center" => Some("center"),
        "right" => Some("right"),
        "justify" => Some("justify"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_number() {
        assert!(is_number("10"));
        assert!(is_number("2.5"));
        assert!(is_number("-4"));
        assert!(!is_number("10px"));
        assert!(!is_number(""));
        assert!(!is_number("-"));
        assert!(!is_number("."));
        assert!(!is_number("1.2.3"));
    }

    #[test]
    fn test_is_dimension() {
        assert!(is_dimension("10px"));
        assert!(is_dimension("1.5rem"));
        assert!(is_dimension("50%"));
        assert!(is_dimension("-10px"));
        assert!(!is_dimension("auto"));
        assert!(!is_dimension("#fff"));
    }

    #[test]
    fn test_normalize_length() {
        assert_eq!(normalize_length("10"), "10px");
        assert_eq!(normalize_length("2.5"), "2.5px");
        assert_eq!(normalize_length("10px"), "10px");
        assert_eq!(normalize_length("50%"), "50%");
        assert_eq!(normalize_length("auto"), "auto");
    }

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color("#112233"), "#112233");
        assert_eq!(normalize_color("rgb(1,2,3)"), "rgb(1,2,3)");
        assert_eq!(normalize_color("primary"), "var(--primary)");
    }

    #[test]
    fn test_blur_value() {
        assert_eq!(blur_value("5"), "blur(5px)");
        assert_eq!(blur_value("5px"), "blur(5px)");
    }

    #[test]
    fn test_font_weight_keywords() {
        assert_eq!(font_weight_keyword("semibold"), Some("600"));
        assert_eq!(font_weight_keyword("bold"), Some("700"));
        assert_eq!(font_weight_keyword("700"), None);
    }
}
