// ABOUTME: The rewrite passes and the Pass enum naming the ones the pipeline runs.
// ABOUTME: Each pass maps one HTML fragment string to another.

pub mod blockquote;
pub mod embed;
pub mod heading;
pub mod image;
pub mod video;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BootstrapifyError;

pub use blockquote::bootstrap_blockquotes;
pub use embed::strip_embed_dimensions;
pub use heading::bootstrap_headings;
pub use image::bootstrap_images;
pub use video::bootstrap_videos;

/// A content pipeline pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pass {
    Blockquote,
    Heading,
    Image,
    #[serde(rename = "video")]
    VideoEmbed,
}

impl Pass {
    /// Short name used on the command line and in reports.
    pub fn name(self) -> &'static str {
        match self {
            Pass::Blockquote => "blockquote",
            Pass::Heading => "heading",
            Pass::Image => "image",
            Pass::VideoEmbed => "video",
        }
    }

    /// Run this pass over a fragment.
    pub fn run(self, html: &str) -> String {
        match self {
            Pass::Blockquote => bootstrap_blockquotes(html),
            Pass::Heading => bootstrap_headings(html),
            Pass::Image => bootstrap_images(html),
            Pass::VideoEmbed => bootstrap_videos(html),
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Pass {
    type Err = BootstrapifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blockquote" | "blockquotes" => Ok(Pass::Blockquote),
            "heading" | "headings" => Ok(Pass::Heading),
            "image" | "images" | "img" => Ok(Pass::Image),
            "video" | "videos" | "iframe" => Ok(Pass::VideoEmbed),
            _ => Err(BootstrapifyError::unknown_pass(s)),
        }
    }
}

/// Cheap pre-check: does the markup contain an opening `tag` at all?
fn mentions_tag(html: &str, tag: &str) -> bool {
    html.to_ascii_lowercase().contains(&format!("<{}", tag))
}
