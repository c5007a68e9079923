// ABOUTME: DOM layer shared by the tree-based passes.
// ABOUTME: Fragment parsing/serialization plus the element wrapping helper.

//! DOM utilities for rewriting HTML fragments.
//!
//! Passes parse their input into a [`Fragment`], edit it in place and
//! serialize it back. No tree outlives the pass that built it.

pub mod fragment;
pub mod wrap;

pub use fragment::{Element, Fragment, Node};
pub use wrap::wrap;
