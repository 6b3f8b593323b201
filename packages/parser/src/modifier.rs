use crate::error::{ParseError, ParseResult};
use serde::{Deserialize, Serialize};

/// Responsive media modifier. Canonical emission order is the declaration
/// order here: phone, tablet, mobile, desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Media {
    Phone,
    Tablet,
    Mobile,
    Desktop,
}

impl Media {
    pub const ALL: [Media; 4] = [Media::Phone, Media::Tablet, Media::Mobile, Media::Desktop];

    pub fn parse(segment: &str) -> Option<Media> {
        match segment {
            "phone" => Some(Media::Phone),
            "tablet" => Some(Media::Tablet),
            "mobile" => Some(Media::Mobile),
            "desktop" => Some(Media::Desktop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Media::Phone => "phone",
            Media::Tablet => "tablet",
            Media::Mobile => "mobile",
            Media::Desktop => "desktop",
        }
    }
}

/// Pseudo-class modifier. Variant order is the canonical selector order:
/// hover < active < focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pseudo {
    Hover,
    Active,
    Focus,
}

impl Pseudo {
    pub fn parse(segment: &str) -> Option<Pseudo> {
        match segment {
            "hover" => Some(Pseudo::Hover),
            "active" => Some(Pseudo::Active),
            "focus" => Some(Pseudo::Focus),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pseudo::Hover => "hover",
            Pseudo::Active => "active",
            Pseudo::Focus => "focus",
        }
    }
}

/// Parsed form of one utility class token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedModifiers {
    pub important: bool,
    pub media: Option<Media>,
    /// Canonical order, no duplicates.
    pub pseudos: Vec<Pseudo>,
    pub negated: bool,
    /// The token with modifier prefixes stripped. Empty only for a bare
    /// media modifier token (e.g. a `phone` visibility marker class).
    pub base: String,
    /// The token exactly as written, for selector synthesis.
    pub original: String,
}

impl ParsedModifiers {
    pub fn is_bare_media(&self) -> bool {
        self.base.is_empty()
    }
}

/// Parse one class token into its modifier fields and base token.
///
/// The token is split on `:`; segments are consumed left to right as long as
/// they are recognized modifiers (`not`, a media name, a pseudo name, or an
/// important marker). The remainder is the base. A leading `!` on any
/// consumed segment (or on the first base segment) sets `important` and is
/// idempotent.
pub fn parse_class_token(token: &str) -> ParseResult<ParsedModifiers> {
    let segments: Vec<&str> = token.split(':').collect();

    let mut important = false;
    let mut media: Option<Media> = None;
    let mut pseudos: Vec<Pseudo> = Vec::new();
    let mut negated = false;

    let mut idx = 0;
    let mut base_head: Option<&str> = None;

    while idx < segments.len() {
        let raw = segments[idx];
        let stripped = raw.trim_start_matches('!');
        if stripped.len() != raw.len() {
            important = true;
        }

        if stripped.is_empty() {
            if stripped.len() != raw.len() {
                // Segment was only `!`: a standalone important marker.
                idx += 1;
                continue;
            }
            // A genuinely empty segment (`::`) is not a modifier.
            break;
        }

        if stripped == "not" {
            if idx != 0 {
                return Err(ParseError::MisplacedNegation {
                    token: token.to_string(),
                });
            }
            negated = true;
            idx += 1;
            continue;
        }

        if let Some(parsed) = Media::parse(stripped) {
            if negated && media.is_none() && idx > 1 {
                // Something other than the media modifier sat between `not`
                // and the media name.
                return Err(ParseError::NegationWithoutMedia {
                    token: token.to_string(),
                });
            }
            if media.is_some() {
                return Err(ParseError::duplicate_media(token, parsed.as_str()));
            }
            media = Some(parsed);
            idx += 1;
            continue;
        }

        if let Some(parsed) = Pseudo::parse(stripped) {
            if pseudos.contains(&parsed) {
                return Err(ParseError::duplicate_pseudo(token, parsed.as_str()));
            }
            pseudos.push(parsed);
            idx += 1;
            continue;
        }

        // Not a modifier: this segment starts the base. Its important
        // marker (if any) was already consumed above.
        base_head = Some(stripped);
        break;
    }

    if negated {
        if media.is_none() {
            return Err(ParseError::NegationWithoutMedia {
                token: token.to_string(),
            });
        }
        if !pseudos.is_empty() {
            return Err(ParseError::NegationWithPseudo {
                token: token.to_string(),
            });
        }
    }

    let base = match base_head {
        Some(head) => {
            let mut base = head.to_string();
            for segment in &segments[idx + 1..] {
                base.push(':');
                base.push_str(segment);
            }
            base
        }
        None if idx < segments.len() => segments[idx..].join(":"),
        None => String::new(),
    };

    if base.is_empty() {
        let bare_media = media.map(|m| m.as_str() == token).unwrap_or(false);
        if !bare_media {
            return Err(ParseError::EmptyBase {
                token: token.to_string(),
            });
        }
    }

    pseudos.sort();

    Ok(ParsedModifiers {
        important,
        media,
        pseudos,
        negated,
        base,
        original: token.to_string(),
    })
}
