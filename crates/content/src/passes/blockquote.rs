// ABOUTME: Bootstrap blockquote pass: classes each <blockquote> and wraps it in <figure>.
// ABOUTME: Skips tweet fallbacks and blockquotes that stand in for a following WordPress embed.

use ego_tree::NodeId;
use log::{debug, trace};

use super::mentions_tag;
use crate::dom::{wrap, Fragment};

/// Class set on every rewritten blockquote. Overwrites any existing class.
pub const BLOCKQUOTE_CLASS: &str = "blockquote border-start p-4 bg-light";

/// Twitter's embed script renders from a blockquote with this class.
const TWEET_CLASS: &str = "twitter-tweet";

/// Class of the iframe WordPress emits for oEmbed'd posts.
const WP_EMBED_CLASS: &str = "wp-embedded-content";

/// Why a blockquote was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// `class="twitter-tweet"`.
    SocialEmbed,
    /// Followed by a `<p>` holding a `wp-embedded-content` iframe.
    OEmbedFallback,
}

/// Decide whether the blockquote `id` must be skipped.
pub fn exclusion(fragment: &Fragment, id: NodeId) -> Option<Exclusion> {
    let el = fragment.element(id)?;
    if el.attr("class") == Some(TWEET_CLASS) {
        return Some(Exclusion::SocialEmbed);
    }

    let next_id = fragment.next_non_text_sibling(id)?;
    let next = fragment.element(next_id)?;
    if next.has_name("p")
        && fragment.has_descendant(next_id, |d| {
            d.has_name("iframe") && d.attr("class") == Some(WP_EMBED_CLASS)
        })
    {
        return Some(Exclusion::OEmbedFallback);
    }

    None
}

/// Apply Bootstrap blockquote styling.
///
/// Every blockquote not caught by [`exclusion`] gets [`BLOCKQUOTE_CLASS`] and
/// a `<figure>` wrapper. Returns the input untouched when nothing changes.
pub fn bootstrap_blockquotes(html: &str) -> String {
    if !mentions_tag(html, "blockquote") {
        return html.to_string();
    }

    let mut fragment = Fragment::parse(html);
    let targets = fragment.elements_by_tag("blockquote");

    let mut rewritten = 0usize;
    let mut skipped = 0usize;
    for id in targets {
        if let Some(reason) = exclusion(&fragment, id) {
            trace!("blockquote pass: skipping {:?}", reason);
            skipped += 1;
            continue;
        }
        fragment.set_attr(id, "class", BLOCKQUOTE_CLASS);
        if wrap(&mut fragment, id, "figure", None).is_some() {
            rewritten += 1;
        }
    }

    debug!(
        "blockquote pass: {} rewritten, {} skipped",
        rewritten, skipped
    );

    if rewritten == 0 {
        return html.to_string();
    }
    fragment.serialize()
}
