//! # Style Snapshots
//!
//! Raw computed-style values for the inspected page: the snapshot type the
//! overlay reads on every hover, and the per-document registry that serves
//! them.

#![forbid(unsafe_code)]

pub mod registry;
pub mod snapshot;

pub use registry::StyleMap;
pub use snapshot::{ComputedStyle, INITIAL_VALUES};
