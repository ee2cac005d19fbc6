//! DOM node model.
//!
//! All nodes live in a `Vec<Node>` owned by the [`Document`](crate::Document)
//! and are referenced by [`NodeId`] (a plain slot index). Nodes are never
//! deallocated during a page session, so no generation counter is needed.
//! The tree structure is encoded via parent/child/sibling links stored
//! directly on each node.

use core::fmt;

/// A handle that uniquely identifies a node within its document.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

// ---------------------------------------------------------------------------
// Attribute
// ---------------------------------------------------------------------------

/// A single attribute on an element (e.g. `class="foo"`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Element data
// ---------------------------------------------------------------------------

/// Data specific to element nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementData {
    pub tag_name: String,
    pub attrs: Vec<Attr>,
    /// Cached `id` attribute value for fast lookup.
    pub id: Option<String>,
    /// Cached list of class names (split from the `class` attribute).
    pub classes: Vec<String>,
    /// Inline outline style drawn by the overlay highlight
    /// (e.g. `1px dashed #f00`). `None` when no highlight is active.
    pub outline: Option<String>,
}

impl ElementData {
    /// The element's class list joined with spaces, as a `className` string.
    pub fn class_name(&self) -> String {
        self.classes.join(" ")
    }
}

// ---------------------------------------------------------------------------
// Node data (variant per node type)
// ---------------------------------------------------------------------------

/// The payload that distinguishes different kinds of DOM nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeData {
    Element(ElementData),
    Text { data: String },
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A single node in the DOM tree.
///
/// Tree links (`parent`, `first_child`, …) form an intrusive doubly-linked
/// child list so that insertions and removals are O(1).
#[derive(Clone, Debug)]
pub struct Node {
    pub data: NodeData,

    // -- tree links ----------------------------------------------------------
    pub parent: Option<NodeId>,
    pub first_child: Option<NodeId>,
    pub last_child: Option<NodeId>,
    pub prev_sibling: Option<NodeId>,
    pub next_sibling: Option<NodeId>,
}

impl Node {
    /// Create a new detached node.
    pub fn new(data: NodeData) -> Self {
        Self {
            data,
            parent: None,
            first_child: None,
            last_child: None,
            prev_sibling: None,
            next_sibling: None,
        }
    }

    /// Returns `true` if this node is an element.
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Returns `true` if this node is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text { .. })
    }

    /// If this is an element, return a reference to its [`ElementData`].
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// If this is an element, return a mutable reference to its [`ElementData`].
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }
}
