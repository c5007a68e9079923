// ABOUTME: Bootstrap video pass: wraps YouTube and Vimeo iframes in a 16x9 ratio container.
// ABOUTME: Host detection is a plain substring match on the iframe src.

use log::debug;

use super::mentions_tag;
use crate::dom::{wrap, Fragment};

/// Class of the responsive container.
pub const RATIO_CLASS: &str = "ratio ratio-16x9";

const VIDEO_HOSTS: &[&str] = &["youtube.com", "vimeo.com"];

/// True if `src` mentions a known video host anywhere.
pub fn is_video_src(src: &str) -> bool {
    VIDEO_HOSTS.iter().any(|host| src.contains(host))
}

/// Wrap video-host iframes in `<div class="ratio ratio-16x9">`.
pub fn bootstrap_videos(html: &str) -> String {
    if !mentions_tag(html, "iframe") {
        return html.to_string();
    }

    let mut fragment = Fragment::parse(html);
    let mut rewritten = 0usize;

    for id in fragment.elements_by_tag("iframe") {
        let is_video = fragment
            .element(id)
            .and_then(|el| el.attr("src"))
            .map(is_video_src)
            .unwrap_or(false);
        if is_video && wrap(&mut fragment, id, "div", Some(RATIO_CLASS)).is_some() {
            rewritten += 1;
        }
    }

    debug!("video pass: {} rewritten", rewritten);

    if rewritten == 0 {
        return html.to_string();
    }
    fragment.serialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_video_src() {
        assert!(is_video_src("https://www.youtube.com/embed/x"));
        assert!(is_video_src("https://player.vimeo.com/video/1"));
        assert!(is_video_src("https://example.org/?ref=youtube.com"));
        assert!(!is_video_src("https://youtu.be/x"));
        assert!(!is_video_src(""));
    }

    #[test]
    fn test_youtube_wrapped() {
        assert_eq!(
            bootstrap_videos(r#"<iframe src="https://www.youtube.com/embed/x"></iframe>"#),
            r#"<div class="ratio ratio-16x9"><iframe src="https://www.youtube.com/embed/x"></iframe></div>"#
        );
    }

    #[test]
    fn test_vimeo_in_figure_wrapped_in_place() {
        let out = bootstrap_videos(
            r#"<figure><iframe src="https://player.vimeo.com/video/1"></iframe><figcaption>v</figcaption></figure>"#,
        );
        assert_eq!(
            out,
            r#"<figure><div class="ratio ratio-16x9"><iframe src="https://player.vimeo.com/video/1"></iframe></div><figcaption>v</figcaption></figure>"#
        );
    }

    #[test]
    fn test_other_iframes_untouched() {
        let html = r#"<iframe src="https://maps.example.org/embed"></iframe><iframe></iframe>"#;
        assert_eq!(bootstrap_videos(html), html);
    }

    #[test]
    fn test_only_video_iframes_wrapped() {
        let out = bootstrap_videos(
            r#"<iframe src="https://example.org/a"></iframe><iframe src="https://youtube.com/embed/b"></iframe>"#,
        );
        assert_eq!(out.matches(RATIO_CLASS).count(), 1);
        assert!(out.starts_with(r#"<iframe src="https://example.org/a"></iframe><div class="#));
    }
}
