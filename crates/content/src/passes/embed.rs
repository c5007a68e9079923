// ABOUTME: Strips fixed width/height attributes from generated embed markup.
// ABOUTME: Plain text substitution for oEmbed snippets, independent of the content pipeline.

use once_cell::sync::Lazy;
use regex::Regex;

// The leading group stops matches inside longer names like `data-width`.
static DIMENSION_ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(^|[^a-z0-9_:.-])(?:width|height)="[0-9]+""#).unwrap()
});

/// Remove every `width="N"` and `height="N"` attribute from `html`.
///
/// The whitespace around a removed attribute is left as is.
pub fn strip_embed_dimensions(html: &str) -> String {
    DIMENSION_ATTR_RE.replace_all(html, "${1}").into_owned()
}
