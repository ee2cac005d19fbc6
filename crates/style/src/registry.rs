//! Per-document style registry.
//!
//! The hosting document owns the mapping from element to computed style; the
//! overlay asks for a fresh snapshot on every hover and never holds onto one
//! across hover cycles.

use std::collections::HashMap;

use dom::NodeId;

use crate::snapshot::ComputedStyle;

/// Registry of computed styles for a document's elements.
#[derive(Default)]
pub struct StyleMap {
    styles: HashMap<NodeId, ComputedStyle>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install (or replace) the computed style for an element.
    pub fn set(&mut self, node: NodeId, style: ComputedStyle) {
        self.styles.insert(node, style);
    }

    /// A fresh snapshot for `node`.
    ///
    /// Elements the host never styled resolve to the initial values, the way
    /// an unstyled element still has a full computed-style object.
    pub fn computed(&self, node: NodeId) -> ComputedStyle {
        self.styles.get(&node).cloned().unwrap_or_default()
    }
}
