//! DOM tree operations.
//!
//! The [`Document`] struct owns every [`Node`] and provides safe
//! tree-manipulation methods that keep the intrusive parent/child/sibling
//! links consistent. The overlay's highlight state (element outlines) is
//! managed here as well.

use crate::node::{Attr, ElementData, Node, NodeData, NodeId};

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// The complete document tree for one page session.
pub struct Document {
    nodes: Vec<Node>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create a document containing only a `<body>` root element.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            body: NodeId(0),
        };
        doc.body = doc.create_element("body", Vec::new());
        doc
    }

    /// The root `<body>` element.
    #[inline]
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Number of nodes ever created in this document (detached included).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    // =======================================================================
    // Node creation
    // =======================================================================

    fn allocate(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create an element node.
    ///
    /// The `id` and `classes` caches are extracted from `attrs` automatically.
    pub fn create_element(&mut self, tag_name: &str, attrs: Vec<Attr>) -> NodeId {
        let id = attrs
            .iter()
            .find(|a| a.name == "id")
            .map(|a| a.value.clone());

        let classes = attrs
            .iter()
            .find(|a| a.name == "class")
            .map(|a| {
                a.value
                    .split_whitespace()
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        self.allocate(Node::new(NodeData::Element(ElementData {
            tag_name: tag_name.to_string(),
            attrs,
            id,
            classes,
            outline: None,
        })))
    }

    /// Convenience: create an element with no attributes.
    pub fn create_plain_element(&mut self, tag_name: &str) -> NodeId {
        self.create_element(tag_name, Vec::new())
    }

    /// Create a text node.
    pub fn create_text(&mut self, data: &str) -> NodeId {
        self.allocate(Node::new(NodeData::Text {
            data: data.to_string(),
        }))
    }

    // =======================================================================
    // Tree mutation
    // =======================================================================

    /// Append `child` as the last child of `parent`.
    ///
    /// If `child` already has a parent it is first removed from its current
    /// position.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.get(child).and_then(|n| n.parent).is_some() {
            self.detach(child);
        }

        let old_last = self.get(parent).and_then(|n| n.last_child);

        // Link previous last sibling → child.
        if let Some(old_last_id) = old_last {
            if let Some(old_last_node) = self.get_mut(old_last_id) {
                old_last_node.next_sibling = Some(child);
            }
        }

        // Set child links.
        if let Some(child_node) = self.get_mut(child) {
            child_node.parent = Some(parent);
            child_node.prev_sibling = old_last;
            child_node.next_sibling = None;
        }

        // Update parent.
        if let Some(parent_node) = self.get_mut(parent) {
            if parent_node.first_child.is_none() {
                parent_node.first_child = Some(child);
            }
            parent_node.last_child = Some(child);
        }
    }

    /// Remove `child` from `parent`'s child list.
    ///
    /// The child becomes a detached root (parent = None). No-op when the
    /// child does not actually belong to `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        let belongs = self
            .get(child)
            .map(|n| n.parent == Some(parent))
            .unwrap_or(false);
        if !belongs {
            return;
        }
        self.detach(child);
    }

    /// Detach a node from its parent without deallocating it.
    pub fn detach(&mut self, node_id: NodeId) {
        let (parent_id, prev, next) = match self.get(node_id) {
            Some(n) => (n.parent, n.prev_sibling, n.next_sibling),
            None => return,
        };

        if let Some(prev_id) = prev {
            if let Some(prev_node) = self.get_mut(prev_id) {
                prev_node.next_sibling = next;
            }
        }

        if let Some(next_id) = next {
            if let Some(next_node) = self.get_mut(next_id) {
                next_node.prev_sibling = prev;
            }
        }

        if let Some(pid) = parent_id {
            if let Some(parent_node) = self.get_mut(pid) {
                if parent_node.first_child == Some(node_id) {
                    parent_node.first_child = next;
                }
                if parent_node.last_child == Some(node_id) {
                    parent_node.last_child = prev;
                }
            }
        }

        if let Some(node) = self.get_mut(node_id) {
            node.parent = None;
            node.prev_sibling = None;
            node.next_sibling = None;
        }
    }

    /// Replace the contents of a text node.
    pub fn set_text(&mut self, node_id: NodeId, text: &str) {
        if let Some(node) = self.get_mut(node_id) {
            if let NodeData::Text { data } = &mut node.data {
                *data = text.to_string();
            }
        }
    }

    /// Read the contents of a text node (empty string for non-text nodes).
    pub fn text(&self, node_id: NodeId) -> &str {
        match self.get(node_id).map(|n| &n.data) {
            Some(NodeData::Text { data }) => data,
            _ => "",
        }
    }

    // =======================================================================
    // Traversal
    // =======================================================================

    /// Return the immediate children of `parent` in document order.
    pub fn children(&self, parent: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cursor = self.get(parent).and_then(|n| n.first_child);
        while let Some(id) = cursor {
            out.push(id);
            cursor = self.get(id).and_then(|n| n.next_sibling);
        }
        out
    }

    /// Return all descendants of `node` in pre-order DFS (not including
    /// `node` itself).
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = Vec::new();

        // Push children in reverse so the first child is processed first.
        let children = self.children(node);
        for &child in children.iter().rev() {
            stack.push(child);
        }

        while let Some(id) = stack.pop() {
            out.push(id);
            let grandchildren = self.children(id);
            for &gc in grandchildren.iter().rev() {
                stack.push(gc);
            }
        }
        out
    }

    // =======================================================================
    // Queries
    // =======================================================================

    /// Find the first *attached* element with the given `id` attribute,
    /// searching the body subtree in pre-order DFS.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let matches_id = |nid: NodeId| {
            self.get(nid)
                .and_then(|n| n.as_element())
                .map(|e| e.id.as_deref() == Some(id))
                .unwrap_or(false)
        };

        if matches_id(self.body) {
            return Some(self.body);
        }
        self.descendants(self.body).into_iter().find(|&d| matches_id(d))
    }

    // =======================================================================
    // Highlight outline
    // =======================================================================

    /// Set the inline outline style on an element (the hover highlight).
    pub fn set_outline(&mut self, node_id: NodeId, style: &str) {
        if let Some(elem) = self.get_mut(node_id).and_then(|n| n.as_element_mut()) {
            elem.outline = Some(style.to_string());
        }
    }

    /// Clear the inline outline style on an element.
    pub fn clear_outline(&mut self, node_id: NodeId) {
        if let Some(elem) = self.get_mut(node_id).and_then(|n| n.as_element_mut()) {
            elem.outline = None;
        }
    }

    /// The element's current inline outline style, if any.
    pub fn outline(&self, node_id: NodeId) -> Option<&str> {
        self.get(node_id)
            .and_then(|n| n.as_element())
            .and_then(|e| e.outline.as_deref())
    }

    /// Ids of all attached elements that currently carry an outline.
    pub fn outlined_elements(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        if self.outline(self.body).is_some() {
            out.push(self.body);
        }
        for d in self.descendants(self.body) {
            if self.outline(d).is_some() {
                out.push(d);
            }
        }
        out
    }
}

// ===========================================================================
// Tests
// ===========================================================================
