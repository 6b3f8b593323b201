use atomcss_parser::Media;

/// `@media` condition for a breakpoint.
pub fn breakpoint(media: Media) -> &'static str {
    match media {
        Media::Phone => "(min-width: 0px) and (max-width: 767px)",
        Media::Tablet => "(min-width: 768px) and (max-width: 1024px)",
        Media::Mobile => "(min-width: 0px) and (max-width: 1024px)",
        Media::Desktop => "(min-width: 1025px)",
    }
}

/// `@media` condition for everything outside a breakpoint. Fixed per
/// canonical media; tablet's complement is a two-range disjunction.
pub fn complement(media: Media) -> &'static str {
    match media {
        Media::Phone => "(min-width: 768px)",
        Media::Tablet => "(max-width: 767px), (min-width: 1025px)",
        Media::Mobile => "(min-width: 1025px)",
        Media::Desktop => "(max-width: 1024px)",
    }
}
