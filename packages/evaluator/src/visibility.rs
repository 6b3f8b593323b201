//! Show/hide rule pairs for the fixed responsive visibility markers.

use crate::media::{breakpoint, complement};
use atomcss_parser::Media;
use serde::{Deserialize, Serialize};

/// A visibility marker: an element shown only inside (plain) or only
/// outside (negated) one media range. Exactly eight exist: the four media
/// names and their `not-` forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VisibilityMarker {
    pub media: Media,
    pub negated: bool,
}

impl VisibilityMarker {
    pub const ALL: [VisibilityMarker; 8] = [
        VisibilityMarker::shown(Media::Desktop),
        VisibilityMarker::shown(Media::Tablet),
        VisibilityMarker::shown(Media::Phone),
        VisibilityMarker::shown(Media::Mobile),
        VisibilityMarker::hidden(Media::Desktop),
        VisibilityMarker::hidden(Media::Tablet),
        VisibilityMarker::hidden(Media::Phone),
        VisibilityMarker::hidden(Media::Mobile),
    ];

    const fn shown(media: Media) -> Self {
        Self {
            media,
            negated: false,
        }
    }

    const fn hidden(media: Media) -> Self {
        Self {
            media,
            negated: true,
        }
    }

    /// Parse a marker name: the tag form (`desktop`, `not-desktop`) or
    /// either class form (`not-desktop` / `notdesktop`).
    pub fn parse(name: &str) -> Option<Self> {
        if let Some(media) = Media::parse(name) {
            return Some(Self::shown(media));
        }
        let rest = name
            .strip_prefix("not-")
            .or_else(|| name.strip_prefix("not"))?;
        Media::parse(rest).map(Self::hidden)
    }

    pub fn canonical_name(&self) -> String {
        if self.negated {
            format!("not-{}", self.media.as_str())
        } else {
            self.media.as_str().to_string()
        }
    }

    fn condition(&self) -> &'static str {
        if self.negated {
            complement(self.media)
        } else {
            breakpoint(self.media)
        }
    }

    /// Selector list covering the tag name and the class forms.
    fn selector_list(&self) -> String {
        let name = self.canonical_name();
        if self.negated {
            let compact = name.replace('-', "");
            format!("{}, .{}, .{}", name, name, compact)
        } else {
            format!("{}, .{}", name, name)
        }
    }
}

/// Emit one hide/show rule pair per marker present, deduped by marker and
/// ordered canonically (shown markers before `not-` markers, each in
/// desktop/tablet/phone/mobile order).
pub fn visibility_css<I>(markers: I) -> String
where
    I: IntoIterator<Item = VisibilityMarker>,
{
    let present: Vec<VisibilityMarker> = markers.into_iter().collect();
    let mut lines: Vec<String> = Vec::new();

    for marker in VisibilityMarker::ALL {
        if !present.contains(&marker) {
            continue;
        }
        let selectors = marker.selector_list();
        lines.push(format!("{} {{ display: none; }}", selectors));
        lines.push(format!("@media {} {{", marker.condition()));
        lines.push(format!("  {} {{ display: inline; }}", selectors));
        lines.push("}".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marker_forms() {
        assert_eq!(
            VisibilityMarker::parse("desktop"),
            Some(VisibilityMarker::shown(Media::Desktop))
        );
        assert_eq!(
            VisibilityMarker::parse("not-desktop"),
            Some(VisibilityMarker::hidden(Media::Desktop))
        );
        assert_eq!(
            VisibilityMarker::parse("notdesktop"),
            Some(VisibilityMarker::hidden(Media::Desktop))
        );
        assert_eq!(VisibilityMarker::parse("header"), None);
        assert_eq!(VisibilityMarker::parse("nothing"), None);
    }

    #[test]
    fn test_shown_marker_pair() {
        let css = visibility_css([VisibilityMarker::shown(Media::Desktop)]);
        assert_eq!(
            css,
            "desktop, .desktop { display: none; }\n\
             @media (min-width: 1025px) {\n  \
             desktop, .desktop { display: inline; }\n}"
        );
    }

    #[test]
    fn test_negated_marker_uses_complement() {
        let css = visibility_css([VisibilityMarker::hidden(Media::Phone)]);
        assert!(css.contains("not-phone, .not-phone, .notphone { display: none; }"));
        assert!(css.contains("@media (min-width: 768px) {"));
        assert!(css.contains("not-phone, .not-phone, .notphone { display: inline; }"));
    }

    #[test]
    fn test_dedup_by_marker_name() {
        let css = visibility_css([
            VisibilityMarker::shown(Media::Desktop),
            VisibilityMarker::shown(Media::Desktop),
            VisibilityMarker::shown(Media::Desktop),
        ]);
        assert_eq!(css.matches("display: none").count(), 1);
        assert_eq!(css.matches("display: inline").count(), 1);
    }

    #[test]
    fn test_marker_emission_order_is_canonical() {
        let css = visibility_css([
            VisibilityMarker::hidden(Media::Phone),
            VisibilityMarker::shown(Media::Tablet),
        ]);
        let tablet = css.find("tablet, .tablet").expect("tablet pair missing");
        let not_phone = css.find("not-phone").expect("not-phone pair missing");
        assert!(tablet < not_phone);
    }

    #[test]
    fn test_no_markers_no_css() {
        assert_eq!(visibility_css([]), "");
    }
}
