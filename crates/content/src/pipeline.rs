// ABOUTME: The content pipeline: runs the enabled passes in a fixed order.
// ABOUTME: Provides Bootstrapify, the PIPELINE order and the transform entry point.

use log::debug;

use crate::error::Result;
use crate::options::{BootstrapifyBuilder, Options};
use crate::passes::Pass;

/// Pass order. Each pass consumes the previous pass's output.
pub const PIPELINE: [Pass; 4] = [Pass::Blockquote, Pass::Heading, Pass::Image, Pass::VideoEmbed];

/// A configured content pipeline.
#[derive(Debug, Clone)]
pub struct Bootstrapify {
    passes: Vec<Pass>,
}

impl Bootstrapify {
    /// A pipeline running every pass.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    pub fn with_options(opts: Options) -> Self {
        Self {
            passes: opts.passes(),
        }
    }

    pub fn builder() -> BootstrapifyBuilder {
        BootstrapifyBuilder::new()
    }

    /// Enabled passes in the order they run.
    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// Rewrite one piece of content.
    ///
    /// Never fails: malformed markup is parsed best-effort and a pass with
    /// nothing to do hands its input on unchanged.
    pub fn transform(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }

        let mut html = content.to_string();
        for pass in &self.passes {
            html = pass.run(&html);
            debug!("pipeline: {} pass done ({} bytes)", pass, html.len());
        }
        html
    }

    /// Like [`Bootstrapify::transform`] for raw bytes, which must be UTF-8.
    pub fn transform_bytes(&self, content: &[u8]) -> Result<String> {
        let content = std::str::from_utf8(content)?;
        Ok(self.transform(content))
    }
}

impl Default for Bootstrapify {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the full pipeline over `content`.
pub fn transform(content: &str) -> String {
    Bootstrapify::new().transform(content)
}
