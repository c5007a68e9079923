// ABOUTME: Main library entry point for the bootstrapify content rewriter.
// ABOUTME: Re-exports the public API: transform, strip_embed_dimensions, Bootstrapify, Pass, Options.

//! Bootstrapify - rewrites blog post HTML to use Bootstrap 5 conventions.
//!
//! Blockquotes are classed and wrapped in `<figure>`, level 2-4 headings get
//! spacing utilities, in-flow images become fluid and YouTube/Vimeo iframes
//! get a 16x9 ratio container.
//!
//! # Example
//!
//! ```
//! let html = bootstrapify_content::transform("<blockquote>Quote</blockquote>");
//! assert_eq!(
//!     html,
//!     r#"<figure><blockquote class="blockquote border-start p-4 bg-light">Quote</blockquote></figure>"#
//! );
//!
//! let embed = bootstrapify_content::strip_embed_dimensions(r#"<iframe width="500" src="x">"#);
//! assert!(!embed.contains("width"));
//! ```

pub mod dom;
pub mod error;
pub mod options;
pub mod passes;
pub mod pipeline;

pub use crate::error::{BootstrapifyError, Result};
pub use crate::options::{BootstrapifyBuilder, Options};
pub use crate::passes::{strip_embed_dimensions, Pass};
pub use crate::pipeline::{transform, Bootstrapify, PIPELINE};
