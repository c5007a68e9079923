// ABOUTME: Bootstrap heading pass: injects utility classes into <h2>, <h3> and <h4> tags.
// ABOUTME: Pattern-based over the raw markup; no tree is built.

use log::debug;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Class injected into every matched heading.
pub const HEADING_CLASS: &str = "flex-fill border-bottom pb-2 mt-5 mb-3";

const HEADING_TAGS: &[&str] = &["h2", "h3", "h4"];

// One pattern per tag since the regex crate has no backreferences to pair
// the closing tag with the opening one. Inner content is lazy.
static HEADING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    HEADING_TAGS
        .iter()
        .map(|tag| Regex::new(&format!(r"(?is)<({tag})\b([^>]*)>(.*?)</{tag}\s*>")).unwrap())
        .collect()
});

/// Add [`HEADING_CLASS`] to level 2-4 headings.
///
/// The original attribute string is kept verbatim after the injected class.
/// A heading that already has a `class` attribute ends up with two; the
/// injected one comes first and wins in browsers. Nested headings of the same
/// level are not paired correctly.
pub fn bootstrap_headings(html: &str) -> String {
    let mut out = html.to_string();
    let mut total = 0usize;

    for pattern in HEADING_PATTERNS.iter() {
        let mut count = 0usize;
        let replaced = pattern.replace_all(&out, |caps: &Captures| {
            count += 1;
            format!(
                "<{tag} class=\"{class}\"{attrs}>{content}</{tag}>",
                tag = &caps[1],
                class = HEADING_CLASS,
                attrs = &caps[2],
                content = &caps[3],
            )
        });
        if count > 0 {
            out = replaced.into_owned();
            total += count;
        }
    }

    debug!("heading pass: {} rewritten", total);
    out
}
