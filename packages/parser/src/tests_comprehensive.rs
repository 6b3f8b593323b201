use crate::error::ParseError;
use crate::modifier::{parse_class_token, Media, Pseudo};

#[test]
fn test_all_media_modifiers() {
    for (name, media) in [
        ("phone", Media::Phone),
        ("tablet", Media::Tablet),
        ("mobile", Media::Mobile),
        ("desktop", Media::Desktop),
    ] {
        let token = format!("{}:w-full", name);
        let parsed = parse_class_token(&token).expect("Failed to parse");
        assert_eq!(parsed.media, Some(media));
        assert_eq!(parsed.base, "w-full");
    }
}

#[test]
fn test_all_pseudo_modifiers() {
    for (name, pseudo) in [
        ("hover", Pseudo::Hover),
        ("active", Pseudo::Active),
        ("focus", Pseudo::Focus),
    ] {
        let token = format!("{}:c-#333", name);
        let parsed = parse_class_token(&token).expect("Failed to parse");
        assert_eq!(parsed.pseudos, vec![pseudo]);
        assert_eq!(parsed.base, "c-#333");
    }
}

#[test]
fn test_three_pseudos_canonicalized() {
    let orders = [
        "focus:active:hover:w-full",
        "active:hover:focus:w-full",
        "hover:active:focus:w-full",
    ];
    for token in orders {
        let parsed = parse_class_token(token).expect("Failed to parse");
        assert_eq!(
            parsed.pseudos,
            vec![Pseudo::Hover, Pseudo::Active, Pseudo::Focus],
            "pseudo order not canonical for '{}'",
            token
        );
    }
}

#[test]
fn test_media_and_pseudo_combined() {
    let parsed = parse_class_token("phone:hover:bg-#112233").expect("Failed to parse");
    assert_eq!(parsed.media, Some(Media::Phone));
    assert_eq!(parsed.pseudos, vec![Pseudo::Hover]);
    assert_eq!(parsed.base, "bg-#112233");
    assert!(!parsed.important);
}

#[test]
fn test_important_before_media() {
    // `!` may sit on any segment.
    let parsed = parse_class_token("!phone:w-full").expect("Failed to parse");
    assert!(parsed.important);
    assert_eq!(parsed.media, Some(Media::Phone));
    assert_eq!(parsed.base, "w-full");
}

#[test]
fn test_standalone_important_segment() {
    let parsed = parse_class_token("phone:!:w-full").expect("Failed to parse");
    assert!(parsed.important);
    assert_eq!(parsed.base, "w-full");
}

#[test]
fn test_negated_important() {
    let parsed = parse_class_token("not:desktop:!w-full").expect("Failed to parse");
    assert!(parsed.negated);
    assert!(parsed.important);
    assert_eq!(parsed.media, Some(Media::Desktop));
    assert_eq!(parsed.base, "w-full");
}

#[test]
fn test_negation_with_gap_before_media() {
    // `not` must be immediately followed by the media modifier.
    let err = parse_class_token("not:hover:phone:w-full").expect_err("Should fail");
    assert!(matches!(err, ParseError::NegationWithoutMedia { .. }));
}

#[test]
fn test_base_containing_colon_segments() {
    // Once the base starts, later segments are never treated as modifiers.
    let parsed = parse_class_token("grid-area:hover").expect("Failed to parse");
    assert_eq!(parsed.base, "grid-area:hover");
    assert!(parsed.pseudos.is_empty());
}

#[test]
fn test_original_is_preserved_verbatim() {
    let token = "not:desktop:!w-full";
    let parsed = parse_class_token(token).expect("Failed to parse");
    assert_eq!(parsed.original, token);
}

#[test]
fn test_error_carries_literal() {
    for token in [
        "phone:desktop:mt-10px",
        "hover:hover:mt-10px",
        "phone:not:mt-10px",
        "not:mt-10px",
        "phone:",
    ] {
        let err = parse_class_token(token).expect_err("Should fail");
        assert_eq!(err.token(), token);
    }
}

#[test]
fn test_parsed_modifiers_serialize() {
    // ParsedModifiers is part of the public data model; editor tooling
    // consumes it as JSON.
    let parsed = parse_class_token("phone:hover:mt-10px").expect("Failed to parse");
    let json = serde_json::to_value(&parsed).expect("Failed to serialize");
    assert_eq!(json["media"], "phone");
    assert_eq!(json["pseudos"][0], "hover");
    assert_eq!(json["base"], "mt-10px");
}
