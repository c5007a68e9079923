// ABOUTME: Bootstrap image pass: makes in-flow images responsive.
// ABOUTME: Appends w-100 img-fluid to <img> elements directly inside a <p> or <div>.

use log::debug;

use super::mentions_tag;
use crate::dom::Fragment;

/// Tokens appended to the class of in-flow images.
pub const IMAGE_CLASSES: &str = "w-100 img-fluid";

const IMAGE_PARENTS: &[&str] = &["p", "div"];

/// Existing class tokens followed by [`IMAGE_CLASSES`].
fn merged_class(existing: Option<&str>) -> String {
    match existing.map(str::trim_end) {
        Some(class) if !class.trim().is_empty() => format!("{} {}", class, IMAGE_CLASSES),
        _ => IMAGE_CLASSES.to_string(),
    }
}

/// Add responsive classes to images whose parent is a paragraph or div.
///
/// Unlike the blockquote pass this merges into an existing class instead of
/// replacing it.
pub fn bootstrap_images(html: &str) -> String {
    if !mentions_tag(html, "img") {
        return html.to_string();
    }

    let mut fragment = Fragment::parse(html);
    let mut rewritten = 0usize;

    for id in fragment.elements_by_tag("img") {
        let in_flow = fragment
            .parent_element(id)
            .map(|parent| IMAGE_PARENTS.iter().any(|tag| parent.has_name(tag)))
            .unwrap_or(false);
        if !in_flow {
            continue;
        }

        let class = match fragment.element(id) {
            Some(el) => merged_class(el.attr("class")),
            None => continue,
        };
        if fragment.set_attr(id, "class", &class) {
            rewritten += 1;
        }
    }

    debug!("image pass: {} rewritten", rewritten);

    if rewritten == 0 {
        return html.to_string();
    }
    fragment.serialize()
}
