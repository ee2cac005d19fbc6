//! # DOM
//!
//! Element tree for the inspected page: an index-based node tree with
//! inline highlight state, plus the pointer/keyboard event types the
//! overlay consumes.

#![forbid(unsafe_code)]

pub mod event;
pub mod node;
pub mod tree;

pub use event::*;
pub use node::*;
pub use tree::Document;
