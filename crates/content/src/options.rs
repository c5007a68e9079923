// ABOUTME: Pipeline options and the BootstrapifyBuilder used to construct a Bootstrapify.
// ABOUTME: Options only select which passes run; the pass order is fixed.

use crate::passes::Pass;
use crate::pipeline::{Bootstrapify, PIPELINE};

/// Configuration for a [`Bootstrapify`] pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Passes left out of the pipeline.
    pub skip: Vec<Pass>,
}

impl Options {
    /// Enabled passes in pipeline order.
    pub fn passes(&self) -> Vec<Pass> {
        PIPELINE
            .iter()
            .copied()
            .filter(|pass| !self.skip.contains(pass))
            .collect()
    }
}

/// Builder for constructing Bootstrapify instances.
#[derive(Debug, Clone)]
pub struct BootstrapifyBuilder {
    opts: Options,
}

impl BootstrapifyBuilder {
    /// Create a builder with every pass enabled.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Leave a pass out of the pipeline.
    pub fn skip(mut self, pass: Pass) -> Self {
        if !self.opts.skip.contains(&pass) {
            self.opts.skip.push(pass);
        }
        self
    }

    /// Leave several passes out of the pipeline.
    pub fn skip_all(mut self, passes: impl IntoIterator<Item = Pass>) -> Self {
        for pass in passes {
            self = self.skip(pass);
        }
        self
    }

    /// Build the pipeline.
    pub fn build(self) -> Bootstrapify {
        Bootstrapify::with_options(self.opts)
    }
}

impl Default for BootstrapifyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_everything_in_order() {
        assert_eq!(
            Options::default().passes(),
            vec![Pass::Blockquote, Pass::Heading, Pass::Image, Pass::VideoEmbed]
        );
    }

    #[test]
    fn test_skip_keeps_order() {
        let pipeline = BootstrapifyBuilder::new()
            .skip(Pass::Heading)
            .skip(Pass::Heading)
            .build();
        assert_eq!(
            pipeline.passes(),
            &[Pass::Blockquote, Pass::Image, Pass::VideoEmbed]
        );
    }

    #[test]
    fn test_skip_all() {
        let pipeline = BootstrapifyBuilder::default()
            .skip_all([Pass::VideoEmbed, Pass::Blockquote])
            .build();
        assert_eq!(pipeline.passes(), &[Pass::Heading, Pass::Image]);
    }
}
