//! # Floating style panel
//!
//! Owns the DOM subtree for the overlay panel: a header line, one section
//! per catalog category with a list item per property, and a footer with
//! the keyboard legend. The panel only manipulates its own nodes; deciding
//! which values to show lives in the hover controller.

use std::collections::HashMap;

use common::Vec2;
use dom::{Attr, Document, NodeId};

use crate::catalog::Category;
use crate::config::OverlayConfig;

/// Id attribute on the panel root, used to detect an already-injected panel.
pub const PANEL_ID: &str = "stylelens-panel";
/// Id attribute on the first-run hint paragraph.
pub const HINT_ID: &str = "stylelens-hint";

/// Keyboard legend shown in the panel footer.
pub const FOOTER_LEGEND: &str = "[F] Freeze/UnFreeze  [C] CSS  [ESC] Close";

struct Slot {
    value_text: NodeId,
    visible: bool,
}

struct Section {
    visible: bool,
}

/// The injected panel subtree plus its display bookkeeping.
pub struct Panel {
    root: NodeId,
    header_text: NodeId,
    hint: Option<NodeId>,
    slots: HashMap<&'static str, Slot>,
    sections: HashMap<Category, Section>,
    position: Vec2,
    height: f32,
}

impl Panel {
    /// Build the panel subtree and append it (plus the one-shot hint) to
    /// the document body.
    pub fn build(doc: &mut Document, config: &OverlayConfig) -> Panel {
        let root = doc.create_element(
            "div",
            vec![
                Attr::new("id", PANEL_ID),
                Attr::new("class", "stylelens-panel"),
            ],
        );

        let h1 = doc.create_plain_element("h1");
        let header_text = doc.create_text("");
        doc.append_child(h1, header_text);
        doc.append_child(root, h1);

        let mut slots = HashMap::new();
        let mut sections = HashMap::new();
        for category in Category::ALL {
            let section = doc.create_element(
                "div",
                vec![
                    Attr::new("id", &format!("stylelens-{}", category.id())),
                    Attr::new("class", "stylelens-category"),
                ],
            );
            let h2 = doc.create_plain_element("h2");
            let h2_text = doc.create_text(category.title());
            doc.append_child(h2, h2_text);
            doc.append_child(section, h2);

            let list = doc.create_plain_element("ul");
            for &prop in category.properties() {
                let item = doc.create_element(
                    "li",
                    vec![Attr::new("id", &format!("stylelens-{prop}"))],
                );
                let label = doc.create_element("span", vec![Attr::new("class", "label")]);
                let label_text = doc.create_text(prop);
                doc.append_child(label, label_text);
                doc.append_child(item, label);

                let value = doc.create_element("span", vec![Attr::new("class", "value")]);
                let value_text = doc.create_text("");
                doc.append_child(value, value_text);
                doc.append_child(item, value);

                doc.append_child(list, item);
                slots.insert(prop, Slot { value_text, visible: true });
            }
            doc.append_child(section, list);
            doc.append_child(root, section);
            sections.insert(category, Section { visible: true });
        }

        let footer = doc.create_element("div", vec![Attr::new("class", "stylelens-footer")]);
        let footer_text = doc.create_text(FOOTER_LEGEND);
        doc.append_child(footer, footer_text);
        doc.append_child(root, footer);

        let body = doc.body();
        doc.append_child(body, root);

        let hint = doc.create_element("p", vec![Attr::new("id", HINT_ID)]);
        let hint_text = doc.create_text(&config.hint_text);
        doc.append_child(hint, hint_text);
        doc.append_child(body, hint);

        Panel {
            root,
            header_text,
            hint: Some(hint),
            slots,
            sections,
            position: Vec2::ZERO,
            height: config.panel_height,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn set_header_text(&mut self, doc: &mut Document, text: &str) {
        doc.set_text(self.header_text, text);
    }

    pub fn header_text<'d>(&self, doc: &'d Document) -> &'d str {
        doc.text(self.header_text)
    }

    /// Write a slot value and mark the slot visible.
    pub fn set_property_value(&mut self, doc: &mut Document, prop: &str, value: &str) {
        if let Some(slot) = self.slots.get_mut(prop) {
            doc.set_text(slot.value_text, value);
            slot.visible = true;
        }
    }

    /// Show the property with `value` when `shown` holds, hide it (keeping
    /// the previous text) otherwise. Returns 1 when shown, 0 when hidden,
    /// so callers can count a category's visible rows.
    pub fn set_property_value_if(
        &mut self,
        doc: &mut Document,
        prop: &str,
        value: &str,
        shown: bool,
    ) -> u32 {
        if shown {
            self.set_property_value(doc, prop, value);
            1
        } else {
            self.hide_property(prop);
            0
        }
    }

    pub fn hide_property(&mut self, prop: &str) {
        if let Some(slot) = self.slots.get_mut(prop) {
            slot.visible = false;
        }
    }

    pub fn is_property_visible(&self, prop: &str) -> bool {
        self.slots.get(prop).is_some_and(|s| s.visible)
    }

    pub fn property_value<'d>(&self, doc: &'d Document, prop: &str) -> &'d str {
        match self.slots.get(prop) {
            Some(slot) => doc.text(slot.value_text),
            None => "",
        }
    }

    pub fn show_category(&mut self, category: Category) {
        if let Some(section) = self.sections.get_mut(&category) {
            section.visible = true;
        }
    }

    pub fn hide_category(&mut self, category: Category) {
        if let Some(section) = self.sections.get_mut(&category) {
            section.visible = false;
        }
    }

    pub fn is_category_visible(&self, category: Category) -> bool {
        self.sections.get(&category).is_some_and(|s| s.visible)
    }

    /// Number of visible property rows inside one category.
    pub fn visible_properties(&self, category: Category) -> usize {
        category
            .properties()
            .iter()
            .filter(|p| self.is_property_visible(p))
            .count()
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Record the panel height the host measured after layout.
    pub fn set_height(&mut self, height: f32) {
        self.height = height;
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn has_hint(&self) -> bool {
        self.hint.is_some()
    }

    /// Drop the first-run hint. Safe to call more than once.
    pub fn remove_hint(&mut self, doc: &mut Document) {
        if let Some(hint) = self.hint.take() {
            doc.detach(hint);
        }
    }

    /// Detach the panel subtree (and any remaining hint) from the document.
    pub fn remove(mut self, doc: &mut Document) {
        self.remove_hint(doc);
        doc.detach(self.root);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Tests
// ═════════════════════════════════════════════════════════════════════════════
