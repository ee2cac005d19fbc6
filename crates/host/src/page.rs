//! # Page session
//!
//! One inspected page: its document, the computed styles and layout boxes
//! the host reports for it, and the overlay instance driving the panel.
//! The session owns the delegated event route: raw pointer coordinates come
//! in, one hit test finds the innermost element, and synthesized
//! over/out/move events feed the overlay.

use std::collections::HashMap;

use common::Rect;
use dom::{Document, KeyInput, NodeId, PointerEvent, PointerKind};
use inspector::{KeyResponse, Overlay, OverlayConfig, Viewport};
use style::StyleMap;
use tracing::debug;

use crate::sinks::PromptSink;

pub struct PageSession {
    doc: Document,
    styles: StyleMap,
    boxes: HashMap<NodeId, Rect>,
    overlay: Overlay,
    viewport: Viewport,
    /// Element the pointer is currently over, per the last routed position.
    hovered: Option<NodeId>,
}

impl PageSession {
    pub fn new(doc: Document, styles: StyleMap, viewport: Viewport) -> Self {
        Self::with_config(doc, styles, viewport, OverlayConfig::default())
    }

    pub fn with_config(
        doc: Document,
        styles: StyleMap,
        viewport: Viewport,
        config: OverlayConfig,
    ) -> Self {
        Self {
            doc,
            styles,
            boxes: HashMap::new(),
            overlay: Overlay::new(config),
            viewport,
            hovered: None,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn styles(&self) -> &StyleMap {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut StyleMap {
        &mut self.styles
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn overlay_mut(&mut self) -> &mut Overlay {
        &mut self.overlay
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll_to(&mut self, y: f32) {
        self.viewport.scroll_y = y;
    }

    /// Record the layout box the host computed for an element.
    pub fn set_box(&mut self, node: NodeId, rect: Rect) {
        self.boxes.insert(node, rect);
    }

    pub fn enable_overlay(&mut self) -> bool {
        self.overlay.enable(&mut self.doc)
    }

    pub fn disable_overlay(&mut self) -> bool {
        self.overlay.disable(&mut self.doc)
    }

    /// Innermost element whose box contains the point. Later siblings paint
    /// on top, so they are probed first.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<NodeId> {
        self.hit_node(self.doc.body(), x, y)
    }

    fn hit_node(&self, node: NodeId, x: f32, y: f32) -> Option<NodeId> {
        for child in self.doc.children(node).into_iter().rev() {
            if let Some(hit) = self.hit_node(child, x, y) {
                return Some(hit);
            }
        }
        let is_element = self.doc.get(node).is_some_and(|n| n.is_element());
        if is_element && self.boxes.get(&node).is_some_and(|r| r.contains(x, y)) {
            Some(node)
        } else {
            None
        }
    }

    /// Route one pointer position: hit test, synthesize out/over on target
    /// change, then a move for panel placement.
    pub fn route_pointer(&mut self, x: f32, y: f32) {
        let target = self.hit_test(x, y);
        if target != self.hovered {
            if let Some(prev) = self.hovered {
                let mut out = PointerEvent::new(PointerKind::Out, prev, x, y);
                self.overlay
                    .handle_pointer(&mut self.doc, &self.styles, self.viewport, &mut out);
            }
            if let Some(next) = target {
                debug!(node = next.index(), "pointer target changed");
                let mut over = PointerEvent::new(PointerKind::Over, next, x, y);
                self.overlay
                    .handle_pointer(&mut self.doc, &self.styles, self.viewport, &mut over);
            }
            self.hovered = target;
        }
        let move_target = target.unwrap_or(self.doc.body());
        let mut mv = PointerEvent::new(PointerKind::Move, move_target, x, y);
        self.overlay
            .handle_pointer(&mut self.doc, &self.styles, self.viewport, &mut mv);
    }

    /// Route one key press to the overlay.
    pub fn route_key(&mut self, input: KeyInput) -> KeyResponse {
        self.overlay.handle_key(&mut self.doc, input)
    }

    /// Route a key press, presenting any requested CSS text through `prompt`.
    pub fn route_key_with_prompt(
        &mut self,
        input: KeyInput,
        prompt: &mut dyn PromptSink,
    ) -> KeyResponse {
        let response = self.route_key(input);
        if let KeyResponse::ShowCss(text) = &response {
            prompt.prompt("CSS definition", text);
        }
        response
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Tests
// ═════════════════════════════════════════════════════════════════════════════
