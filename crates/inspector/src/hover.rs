//! # Hover controller
//!
//! Drives the overlay from routed pointer events: outlines the hovered
//! element, refreshes every panel category from a fresh style snapshot, and
//! keeps the generated CSS definition text in sync with what the panel
//! shows.
//!
//! Events reach the controller through a single delegated route (the host
//! hit-tests once and hands the innermost target over); the controller never
//! attaches anything to individual nodes, so covering a page costs the same
//! whether it has ten elements or ten thousand.

use common::{Edges, Rect, Vec2};
use dom::{Document, NodeId, PointerEvent, PointerKind};
use style::{ComputedStyle, StyleMap};

use crate::catalog::{self, Category};
use crate::config::OverlayConfig;
use crate::format::{color_to_hex, format_color, format_length, format_url};
use crate::panel::{Panel, PANEL_ID};

/// Lifecycle of the overlay.
///
/// `Frozen` keeps the panel on screen but stops reacting to pointer events,
/// so the user can move the cursor into the panel without losing the
/// inspected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// Not injected; all input is ignored.
    Idle,
    /// Panel injected and following the pointer.
    Active,
    /// Panel injected but pinned to the last inspected element.
    Frozen,
}

/// The visible page area, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scroll_y: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, scroll_y: 0.0 }
    }
}

/// One overlay instance per inspected document.
pub struct Overlay {
    config: OverlayConfig,
    state: OverlayState,
    panel: Option<Panel>,
    /// Element currently carrying the hover outline.
    outlined: Option<NodeId>,
    /// Last inspected element; survives mouse-out so console commands keep
    /// a target.
    current: Option<NodeId>,
    css_definition: String,
}

impl Overlay {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            config,
            state: OverlayState::Idle,
            panel: None,
            outlined: None,
            current: None,
            css_definition: String::new(),
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state != OverlayState::Idle
    }

    /// Last inspected element, if any hover has happened yet.
    pub fn current_element(&self) -> Option<NodeId> {
        self.current
    }

    /// CSS definition text for the last inspected element.
    pub fn css_definition(&self) -> &str {
        &self.css_definition
    }

    pub fn panel(&self) -> Option<&Panel> {
        self.panel.as_ref()
    }

    pub fn panel_mut(&mut self) -> Option<&mut Panel> {
        self.panel.as_mut()
    }

    /// Inject the panel and start following the pointer. Returns `false`
    /// without side effects when the overlay is already up (or the document
    /// already carries a panel from another instance).
    pub fn enable(&mut self, doc: &mut Document) -> bool {
        if self.panel.is_some() || doc.element_by_id(PANEL_ID).is_some() {
            return false;
        }
        self.panel = Some(Panel::build(doc, &self.config));
        self.state = OverlayState::Active;
        true
    }

    /// Tear the panel down and drop any outline. Returns `false` when there
    /// is nothing to tear down. Works from both `Active` and `Frozen`.
    pub fn disable(&mut self, doc: &mut Document) -> bool {
        let Some(panel) = self.panel.take() else {
            return false;
        };
        if let Some(node) = self.outlined.take() {
            doc.clear_outline(node);
        }
        panel.remove(doc);
        self.state = OverlayState::Idle;
        true
    }

    /// Stop reacting to pointer events, keeping the panel where it is.
    /// No-op (returns `false`) unless currently `Active`.
    pub fn freeze(&mut self) -> bool {
        if self.state != OverlayState::Active {
            return false;
        }
        self.state = OverlayState::Frozen;
        true
    }

    /// Resume following the pointer. The stale outline is dropped so the
    /// next hover starts clean. No-op (returns `false`) unless `Frozen`.
    pub fn unfreeze(&mut self, doc: &mut Document) -> bool {
        if self.state != OverlayState::Frozen {
            return false;
        }
        if let Some(node) = self.outlined.take() {
            doc.clear_outline(node);
        }
        self.state = OverlayState::Active;
        true
    }

    /// Feed one routed pointer event through the controller. Events are
    /// ignored outside the `Active` state.
    pub fn handle_pointer(
        &mut self,
        doc: &mut Document,
        styles: &StyleMap,
        viewport: Viewport,
        event: &mut PointerEvent,
    ) {
        if self.state != OverlayState::Active {
            return;
        }
        match event.kind {
            PointerKind::Over => self.pointer_over(doc, styles, event),
            PointerKind::Out => self.pointer_out(doc, event),
            PointerKind::Move => self.pointer_move(viewport, event),
        }
    }

    fn pointer_over(&mut self, doc: &mut Document, styles: &StyleMap, event: &mut PointerEvent) {
        let Some(panel) = self.panel.as_mut() else {
            return;
        };
        let Some((tag, id, class)) = element_identity(doc, event.target) else {
            return;
        };

        panel.remove_hint(doc);
        panel.set_header_text(doc, &format_header(&tag, &id, &class));

        if !tag.eq_ignore_ascii_case("body") {
            doc.set_outline(event.target, &self.config.outline_style);
            self.outlined = Some(event.target);
        }
        self.current = Some(event.target);

        // A fresh snapshot every time; hover frequency is human-scale.
        let style = styles.computed(event.target);
        update_font_text(panel, doc, &style);
        update_color_background(panel, doc, &style);
        update_box(panel, doc, &style);
        update_positioning(panel, doc, &style);
        update_list(panel, doc, &style, &tag);
        update_table(panel, doc, &style, &tag);
        update_misc(panel, doc, &style);
        update_effect(panel, doc, &style);

        self.css_definition = build_css_definition(&tag, &id, &class, &style);
        event.stop_propagation();
    }

    fn pointer_out(&mut self, doc: &mut Document, event: &mut PointerEvent) {
        doc.clear_outline(event.target);
        if self.outlined == Some(event.target) {
            self.outlined = None;
        }
        event.stop_propagation();
    }

    fn pointer_move(&mut self, viewport: Viewport, event: &PointerEvent) {
        let Some(panel) = self.panel.as_mut() else {
            return;
        };
        let c = &self.config;
        let w = c.panel_width;
        let h = panel.height();

        let x = if event.page_x + w > viewport.width {
            if event.page_x - w - c.flip_clearance > 0.0 {
                event.page_x - w - c.flip_margin_x
            } else {
                0.0
            }
        } else {
            event.page_x + c.pointer_offset
        };
        let mut y = if event.page_y + h > viewport.height {
            if event.page_y - h - c.flip_clearance > 0.0 {
                event.page_y - h - c.flip_margin_y
            } else {
                0.0
            }
        } else {
            event.page_y + c.pointer_offset
        };

        // Last resort when the flipped position still leaves the visible
        // area (small windows, scrolled pages): pin below the fold line.
        let visible = Rect::new(0.0, viewport.scroll_y, viewport.width, viewport.height);
        if !visible.contains_rect(Rect::new(x, y, w, h)) {
            y = viewport.scroll_y + c.pointer_offset;
        }
        panel.set_position(Vec2::new(x, y));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Header and CSS text generation
// ─────────────────────────────────────────────────────────────────────────────

fn element_identity(doc: &Document, node: NodeId) -> Option<(String, String, String)> {
    let element = doc.get(node)?.as_element()?;
    Some((
        element.tag_name.clone(),
        element.id.clone().unwrap_or_default(),
        element.class_name(),
    ))
}

/// `<tag> #id .class`, omitting empty segments.
pub fn format_header(tag: &str, id: &str, class: &str) -> String {
    let mut out = format!("<{}>", tag.to_ascii_lowercase());
    if !id.is_empty() {
        out.push_str(" #");
        out.push_str(id);
    }
    if !class.is_empty() {
        out.push_str(" .");
        out.push_str(class);
    }
    out
}

/// Serialize a full CSS rule for the element: selector line, one tab-indented
/// `/* Title */` section per category with every catalog property, a blank
/// line between sections, closing brace. Pure function of its inputs.
pub fn build_css_definition(tag: &str, id: &str, class: &str, style: &ComputedStyle) -> String {
    let mut selector = tag.to_ascii_lowercase();
    if !id.is_empty() {
        selector.push_str(" #");
        selector.push_str(id);
    }
    if !class.is_empty() {
        selector.push_str(" .");
        selector.push_str(class);
    }

    // When all four sides agree, emit the single border shorthand instead
    // of four identical directional lines.
    let border = style.get("border");
    let collapsed_border = !border.is_empty() && style.get("border-top-style") != "none";

    let mut out = format!("{selector} {{\n");
    for (i, category) in Category::ALL.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str("\t/* ");
        out.push_str(category.title());
        out.push_str(" */\n");
        for &prop in category.properties() {
            match prop {
                "border" if !collapsed_border => continue,
                "border-top" | "border-right" | "border-bottom" | "border-left"
                    if collapsed_border =>
                {
                    continue;
                }
                _ => {}
            }
            out.push('\t');
            out.push_str(prop);
            out.push_str(": ");
            out.push_str(&style.get(prop));
            out.push_str(";\n");
        }
    }
    out.push('}');
    out
}

/// `name: value;` pairs for every catalog property, space-separated, the way
/// an inline style attribute would read.
pub fn css_text(style: &ComputedStyle) -> String {
    let parts: Vec<String> = catalog::all_properties()
        .map(|prop| format!("{prop}: {};", style.get(prop)))
        .collect();
    parts.join(" ")
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-category panel updates
// ─────────────────────────────────────────────────────────────────────────────

/// Show `prop` with its raw value unless it still equals `default`.
fn set_unless(
    panel: &mut Panel,
    doc: &mut Document,
    style: &ComputedStyle,
    prop: &str,
    default: &str,
) -> u32 {
    let value = style.get(prop);
    panel.set_property_value_if(doc, prop, &value, value != default)
}

fn update_font_text(panel: &mut Panel, doc: &mut Document, style: &ComputedStyle) {
    panel.set_property_value(doc, "font-family", &style.get("font-family"));
    panel.set_property_value(doc, "font-size", &style.get("font-size"));
    set_unless(panel, doc, style, "font-weight", "400");
    set_unless(panel, doc, style, "font-variant", "normal");
    set_unless(panel, doc, style, "font-style", "normal");
    set_unless(panel, doc, style, "letter-spacing", "normal");
    set_unless(panel, doc, style, "line-height", "normal");
    set_unless(panel, doc, style, "text-decoration", "none");
    set_unless(panel, doc, style, "text-align", "start");
    set_unless(panel, doc, style, "text-indent", "0px");
    set_unless(panel, doc, style, "text-transform", "none");
    set_unless(panel, doc, style, "vertical-align", "baseline");
    set_unless(panel, doc, style, "white-space", "normal");
    set_unless(panel, doc, style, "word-spacing", "normal");
}

fn update_color_background(panel: &mut Panel, doc: &mut Document, style: &ComputedStyle) {
    panel.set_property_value(doc, "color", &format_color(&style.get("color")));

    let background = style.get("background-color");
    panel.set_property_value_if(
        doc,
        "background-color",
        &format_color(&background),
        background != "transparent",
    );
    set_unless(panel, doc, style, "background-attachment", "scroll");

    let image = style.get("background-image");
    panel.set_property_value_if(doc, "background-image", &format_url(&image), image != "none");

    let position = style.get("background-position");
    panel.set_property_value_if(doc, "background-position", &position, !position.is_empty());
    set_unless(panel, doc, style, "background-repeat", "repeat");
}

fn update_box(panel: &mut Panel, doc: &mut Document, style: &ComputedStyle) {
    let height = format_length(&style.get("height"));
    panel.set_property_value_if(doc, "height", &height, height != "auto");
    let width = format_length(&style.get("width"));
    panel.set_property_value_if(doc, "width", &width, width != "auto");

    let side_text = |side: &str| {
        format!(
            "{} {} {}",
            format_length(&style.get(&format!("border-{side}-width"))),
            style.get(&format!("border-{side}-style")),
            color_to_hex(&style.get(&format!("border-{side}-color"))),
        )
    };
    let sides = Edges::new(
        side_text("top"),
        side_text("right"),
        side_text("bottom"),
        side_text("left"),
    );
    if sides.uniform() && style.get("border-top-style") != "none" {
        // One swatch-decorated line for the whole border.
        let width = format_length(&style.get("border-top-width"));
        let border_style = style.get("border-top-style");
        let color = format_color(&style.get("border-top-color"));
        panel.set_property_value(doc, "border", &format!("{width} {border_style} {color}"));
        for side in ["border-top", "border-right", "border-bottom", "border-left"] {
            panel.hide_property(side);
        }
    } else {
        panel.hide_property("border");
        for side in ["top", "right", "bottom", "left"] {
            let shown = style.get(&format!("border-{side}-style")) != "none";
            let width = format_length(&style.get(&format!("border-{side}-width")));
            let border_style = style.get(&format!("border-{side}-style"));
            let color = format_color(&style.get(&format!("border-{side}-color")));
            panel.set_property_value_if(
                doc,
                &format!("border-{side}"),
                &format!("{width} {border_style} {color}"),
                shown,
            );
        }
    }

    let margin = edge_shorthand(style, "margin");
    panel.set_property_value_if(doc, "margin", &margin, margin != "0 0 0 0");
    let padding = edge_shorthand(style, "padding");
    panel.set_property_value_if(doc, "padding", &padding, padding != "0 0 0 0");

    set_unless(panel, doc, style, "max-height", "none");
    set_unless(panel, doc, style, "min-height", "0px");
    set_unless(panel, doc, style, "max-width", "none");
    set_unless(panel, doc, style, "min-width", "0px");
}

/// `top right bottom left` with each side rounded and `0px` shortened to `0`.
fn edge_shorthand(style: &ComputedStyle, prefix: &str) -> String {
    let sides: Vec<String> = ["top", "right", "bottom", "left"]
        .iter()
        .map(|side| {
            let v = format_length(&style.get(&format!("{prefix}-{side}")));
            if v == "0px" { "0".to_string() } else { v }
        })
        .collect();
    sides.join(" ")
}

fn update_positioning(panel: &mut Panel, doc: &mut Document, style: &ComputedStyle) {
    set_unless(panel, doc, style, "position", "static");
    set_unless(panel, doc, style, "top", "auto");
    set_unless(panel, doc, style, "bottom", "auto");
    set_unless(panel, doc, style, "right", "auto");
    set_unless(panel, doc, style, "left", "auto");
    set_unless(panel, doc, style, "float", "none");
    panel.set_property_value(doc, "display", &style.get("display"));
    set_unless(panel, doc, style, "clear", "none");
    set_unless(panel, doc, style, "z-index", "auto");
}

fn update_list(panel: &mut Panel, doc: &mut Document, style: &ComputedStyle, tag: &str) {
    if !catalog::is_list_tag(tag) {
        panel.hide_category(Category::List);
        return;
    }
    panel.show_category(Category::List);
    let image = style.get("list-style-image");
    if image == "none" {
        panel.set_property_value(doc, "list-style-type", &style.get("list-style-type"));
        panel.hide_property("list-style-image");
    } else {
        panel.set_property_value(doc, "list-style-image", &image);
        panel.hide_property("list-style-type");
    }
    panel.set_property_value(doc, "list-style-position", &style.get("list-style-position"));
}

fn update_table(panel: &mut Panel, doc: &mut Document, style: &ComputedStyle, tag: &str) {
    if !catalog::is_table_tag(tag) {
        panel.hide_category(Category::Table);
        return;
    }
    let mut shown = 0;
    shown += set_unless(panel, doc, style, "border-collapse", "separate");
    shown += set_unless(panel, doc, style, "border-spacing", "0px 0px");
    shown += set_unless(panel, doc, style, "caption-side", "top");
    shown += set_unless(panel, doc, style, "empty-cells", "show");
    shown += set_unless(panel, doc, style, "table-layout", "auto");
    if shown > 0 {
        panel.show_category(Category::Table);
    } else {
        panel.hide_category(Category::Table);
    }
}

fn update_misc(panel: &mut Panel, doc: &mut Document, style: &ComputedStyle) {
    let mut shown = 0;
    shown += set_unless(panel, doc, style, "overflow", "visible");
    shown += set_unless(panel, doc, style, "cursor", "auto");
    shown += set_unless(panel, doc, style, "visibility", "visible");
    if shown > 0 {
        panel.show_category(Category::Misc);
    } else {
        panel.hide_category(Category::Misc);
    }
}

fn update_effect(panel: &mut Panel, doc: &mut Document, style: &ComputedStyle) {
    let mut shown = 0;
    for prop in ["transform", "transition", "outline"] {
        let value = style.get(prop);
        shown += panel.set_property_value_if(doc, prop, &value, !value.is_empty());
    }
    shown += set_unless(panel, doc, style, "outline-offset", "0px");
    shown += set_unless(panel, doc, style, "box-sizing", "content-box");
    shown += set_unless(panel, doc, style, "resize", "none");
    shown += set_unless(panel, doc, style, "text-shadow", "none");
    shown += set_unless(panel, doc, style, "text-overflow", "clip");
    shown += set_unless(panel, doc, style, "word-wrap", "normal");
    shown += set_unless(panel, doc, style, "box-shadow", "none");
    for prop in [
        "border-top-left-radius",
        "border-top-right-radius",
        "border-bottom-left-radius",
        "border-bottom-right-radius",
    ] {
        let value = style.get(prop);
        shown += panel.set_property_value_if(doc, prop, &format_length(&value), value != "0px");
    }
    if shown > 0 {
        panel.show_category(Category::Effect);
    } else {
        panel.hide_category(Category::Effect);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Tests
// ═════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use dom::Attr;

    fn fixture() -> (Document, StyleMap, Overlay) {
        let doc = Document::new();
        let styles = StyleMap::new();
        let overlay = Overlay::new(OverlayConfig::default());
        (doc, styles, overlay)
    }

    fn hover(overlay: &mut Overlay, doc: &mut Document, styles: &StyleMap, node: NodeId) {
        let mut ev = PointerEvent::new(PointerKind::Over, node, 0.0, 0.0);
        overlay.handle_pointer(doc, styles, Viewport::new(1280.0, 800.0), &mut ev);
    }

    fn uniform_border(style: &mut ComputedStyle, width: &str, line: &str, color: &str) {
        for side in ["top", "right", "bottom", "left"] {
            style.set(&format!("border-{side}-width"), width);
            style.set(&format!("border-{side}-style"), line);
            style.set(&format!("border-{side}-color"), color);
        }
    }

    // === Lifecycle ===

    #[test]
    fn enable_is_idempotent() {
        let (mut doc, _, mut overlay) = fixture();
        assert!(overlay.enable(&mut doc));
        assert_eq!(overlay.state(), OverlayState::Active);
        assert!(!overlay.enable(&mut doc));
    }

    #[test]
    fn disable_restores_the_document() {
        let (mut doc, styles, mut overlay) = fixture();
        let div = doc.create_plain_element("div");
        let body = doc.body();
        doc.append_child(body, div);
        let attached_before = doc.descendants(body).len();

        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, div);
        assert!(overlay.disable(&mut doc));

        assert_eq!(doc.descendants(body).len(), attached_before);
        assert_eq!(doc.element_by_id(PANEL_ID), None);
        assert!(doc.outlined_elements().is_empty());
    }

    #[test]
    fn disable_without_enable_is_a_noop() {
        let (mut doc, _, mut overlay) = fixture();
        assert!(!overlay.disable(&mut doc));
        let count = doc.node_count();
        assert!(!overlay.disable(&mut doc));
        assert_eq!(doc.node_count(), count);
    }

    #[test]
    fn freeze_blocks_pointer_events() {
        let (mut doc, styles, mut overlay) = fixture();
        let div = doc.create_element("div", vec![Attr::new("id", "a")]);
        let body = doc.body();
        doc.append_child(body, div);

        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, div);
        assert!(overlay.freeze());
        assert_eq!(overlay.state(), OverlayState::Frozen);
        assert!(!overlay.freeze());

        let other = doc.create_element("div", vec![Attr::new("id", "b")]);
        doc.append_child(body, other);
        hover(&mut overlay, &mut doc, &styles, other);
        // Frozen: the hovered element is ignored.
        assert_eq!(overlay.current_element(), Some(div));
        assert!(doc.outline(other).is_none());
    }

    #[test]
    fn unfreeze_clears_stale_outline() {
        let (mut doc, styles, mut overlay) = fixture();
        let div = doc.create_plain_element("div");
        let body = doc.body();
        doc.append_child(body, div);

        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, div);
        assert!(doc.outline(div).is_some());
        overlay.freeze();
        assert!(overlay.unfreeze(&mut doc));
        assert!(doc.outline(div).is_none());
        assert_eq!(overlay.state(), OverlayState::Active);
        assert!(!overlay.unfreeze(&mut doc));
    }

    // === Hover updates ===

    #[test]
    fn hover_outlines_element_and_sets_header() {
        let (mut doc, styles, mut overlay) = fixture();
        let div = doc.create_element(
            "div",
            vec![Attr::new("id", "main"), Attr::new("class", "wide")],
        );
        let body = doc.body();
        doc.append_child(body, div);

        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, div);

        assert_eq!(doc.outline(div), Some("1px dashed #f00"));
        let panel = overlay.panel().map(|p| p.header_text(&doc));
        assert_eq!(panel, Some("<div> #main .wide"));
        assert_eq!(overlay.current_element(), Some(div));
    }

    #[test]
    fn body_is_never_outlined() {
        let (mut doc, styles, mut overlay) = fixture();
        let body = doc.body();
        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, body);
        assert!(doc.outline(body).is_none());
        // It still becomes the inspected element.
        assert_eq!(overlay.current_element(), Some(body));
    }

    #[test]
    fn first_hover_removes_hint() {
        let (mut doc, styles, mut overlay) = fixture();
        let div = doc.create_plain_element("div");
        let body = doc.body();
        doc.append_child(body, div);

        overlay.enable(&mut doc);
        assert!(doc.element_by_id(crate::panel::HINT_ID).is_some());
        hover(&mut overlay, &mut doc, &styles, div);
        assert!(doc.element_by_id(crate::panel::HINT_ID).is_none());
    }

    #[test]
    fn default_values_are_suppressed() {
        let (mut doc, styles, mut overlay) = fixture();
        let div = doc.create_element("div", vec![Attr::new("id", "x")]);
        let body = doc.body();
        doc.append_child(body, div);

        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, div);

        let panel = overlay.panel().unwrap();
        assert!(!panel.is_property_visible("font-weight"));
        assert!(!panel.is_property_visible("position"));
        assert!(!panel.is_property_visible("background-color"));
        // Unconditional rows stay visible.
        assert!(panel.is_property_visible("font-family"));
        assert!(panel.is_property_visible("display"));
        assert!(panel.is_property_visible("color"));
    }

    #[test]
    fn non_default_values_are_shown() {
        let (mut doc, mut styles, mut overlay) = fixture();
        let div = doc.create_plain_element("div");
        let body = doc.body();
        doc.append_child(body, div);
        styles.set(
            div,
            ComputedStyle::default()
                .with("font-weight", "700")
                .with("position", "absolute"),
        );

        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, div);

        let panel = overlay.panel().unwrap();
        assert!(panel.is_property_visible("font-weight"));
        assert_eq!(panel.property_value(&doc, "font-weight"), "700");
        assert!(panel.is_property_visible("position"));
        assert_eq!(panel.property_value(&doc, "position"), "absolute");
    }

    #[test]
    fn uniform_border_collapses_to_one_row() {
        let (mut doc, mut styles, mut overlay) = fixture();
        let div = doc.create_plain_element("div");
        let body = doc.body();
        doc.append_child(body, div);
        let mut style = ComputedStyle::default();
        uniform_border(&mut style, "1px", "solid", "rgb(0, 0, 0)");
        styles.set(div, style);

        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, div);

        let panel = overlay.panel().unwrap();
        assert!(panel.is_property_visible("border"));
        let border = panel.property_value(&doc, "border");
        assert!(border.starts_with("1px solid <span"));
        assert!(border.ends_with("#000000"));
        for side in ["border-top", "border-right", "border-bottom", "border-left"] {
            assert!(!panel.is_property_visible(side));
        }
    }

    #[test]
    fn mixed_border_shows_directional_rows() {
        let (mut doc, mut styles, mut overlay) = fixture();
        let div = doc.create_plain_element("div");
        let body = doc.body();
        doc.append_child(body, div);
        let mut style = ComputedStyle::default();
        style.set("border-top-width", "2px");
        style.set("border-top-style", "solid");
        styles.set(div, style);

        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, div);

        let panel = overlay.panel().unwrap();
        assert!(!panel.is_property_visible("border"));
        assert!(panel.is_property_visible("border-top"));
        assert!(panel.property_value(&doc, "border-top").starts_with("2px solid "));
        // The remaining sides are style "none" and stay hidden.
        assert!(!panel.is_property_visible("border-bottom"));
    }

    #[test]
    fn margins_shorten_zero_sides() {
        let (mut doc, mut styles, mut overlay) = fixture();
        let div = doc.create_plain_element("div");
        let body = doc.body();
        doc.append_child(body, div);
        styles.set(
            div,
            ComputedStyle::default()
                .with("margin-top", "8.4px")
                .with("margin-bottom", "8.4px"),
        );

        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, div);

        let panel = overlay.panel().unwrap();
        assert!(panel.is_property_visible("margin"));
        assert_eq!(panel.property_value(&doc, "margin"), "8px 0 8px 0");
        // All-zero padding is hidden entirely.
        assert!(!panel.is_property_visible("padding"));
    }

    #[test]
    fn table_category_only_for_table_tags() {
        let (mut doc, mut styles, mut overlay) = fixture();
        let div = doc.create_plain_element("div");
        let table = doc.create_plain_element("table");
        let body = doc.body();
        doc.append_child(body, div);
        doc.append_child(body, table);
        styles.set(table, ComputedStyle::default().with("border-collapse", "collapse"));

        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, table);
        assert!(overlay.panel().unwrap().is_category_visible(Category::Table));

        hover(&mut overlay, &mut doc, &styles, div);
        assert!(!overlay.panel().unwrap().is_category_visible(Category::Table));
    }

    #[test]
    fn all_default_table_stays_hidden() {
        let (mut doc, styles, mut overlay) = fixture();
        let table = doc.create_plain_element("table");
        let body = doc.body();
        doc.append_child(body, table);

        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, table);
        assert!(!overlay.panel().unwrap().is_category_visible(Category::Table));
    }

    #[test]
    fn list_shows_type_or_image_never_both() {
        let (mut doc, mut styles, mut overlay) = fixture();
        let ul = doc.create_plain_element("ul");
        let ol = doc.create_plain_element("ol");
        let body = doc.body();
        doc.append_child(body, ul);
        doc.append_child(body, ol);
        styles.set(
            ol,
            ComputedStyle::default().with("list-style-image", "url(\"dot.png\")"),
        );

        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, ul);
        let panel = overlay.panel().unwrap();
        assert!(panel.is_category_visible(Category::List));
        assert!(panel.is_property_visible("list-style-type"));
        assert!(!panel.is_property_visible("list-style-image"));

        hover(&mut overlay, &mut doc, &styles, ol);
        let panel = overlay.panel().unwrap();
        assert!(panel.is_property_visible("list-style-image"));
        assert!(!panel.is_property_visible("list-style-type"));
    }

    #[test]
    fn effect_category_is_always_populated() {
        // transform/transition/outline report non-empty defaults, so the
        // category never ends up fully suppressed.
        let (mut doc, styles, mut overlay) = fixture();
        let div = doc.create_plain_element("div");
        let body = doc.body();
        doc.append_child(body, div);

        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, div);
        let panel = overlay.panel().unwrap();
        assert!(panel.is_category_visible(Category::Effect));
        assert!(panel.is_property_visible("transform"));
        assert!(!panel.is_property_visible("box-shadow"));
    }

    #[test]
    fn mouse_out_clears_outline_but_keeps_current() {
        let (mut doc, styles, mut overlay) = fixture();
        let div = doc.create_plain_element("div");
        let body = doc.body();
        doc.append_child(body, div);

        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, div);
        assert!(doc.outline(div).is_some());

        let mut out = PointerEvent::new(PointerKind::Out, div, 0.0, 0.0);
        overlay.handle_pointer(&mut doc, &styles, Viewport::new(1280.0, 800.0), &mut out);
        assert!(doc.outline(div).is_none());
        assert!(out.propagation_stopped);
        assert_eq!(overlay.current_element(), Some(div));
    }

    // === Panel positioning ===

    #[test]
    fn panel_follows_pointer_with_offset() {
        let (mut doc, styles, mut overlay) = fixture();
        overlay.enable(&mut doc);
        let body = doc.body();
        let mut ev = PointerEvent::new(PointerKind::Move, body, 100.0, 150.0);
        overlay.handle_pointer(&mut doc, &styles, Viewport::new(1280.0, 800.0), &mut ev);
        assert_eq!(overlay.panel().unwrap().position(), Vec2::new(120.0, 170.0));
    }

    #[test]
    fn panel_flips_left_near_right_edge() {
        let (mut doc, styles, mut overlay) = fixture();
        overlay.enable(&mut doc);
        let body = doc.body();
        let mut ev = PointerEvent::new(PointerKind::Move, body, 1200.0, 150.0);
        overlay.handle_pointer(&mut doc, &styles, Viewport::new(1280.0, 800.0), &mut ev);
        // 1200 - 350 - 40
        assert_eq!(overlay.panel().unwrap().position().x, 810.0);
    }

    #[test]
    fn panel_pins_to_scroll_when_nothing_fits() {
        let (mut doc, styles, mut overlay) = fixture();
        overlay.enable(&mut doc);
        let body = doc.body();
        // Pointer far down a scrolled page: the upward flip (1300-400-20)
        // still lands below the visible band, so the panel pins.
        let mut ev = PointerEvent::new(PointerKind::Move, body, 100.0, 1300.0);
        let viewport = Viewport { width: 1280.0, height: 800.0, scroll_y: 400.0 };
        overlay.handle_pointer(&mut doc, &styles, viewport, &mut ev);
        assert_eq!(overlay.panel().unwrap().position().y, 420.0);
    }

    // === CSS text generation ===

    #[test]
    fn header_omits_empty_segments() {
        assert_eq!(format_header("DIV", "", ""), "<div>");
        assert_eq!(format_header("div", "x", ""), "<div> #x");
        assert_eq!(format_header("div", "", "y z"), "<div> .y z");
        assert_eq!(format_header("div", "x", "y"), "<div> #x .y");
    }

    #[test]
    fn css_definition_structure() {
        let style = ComputedStyle::default().with("font-weight", "700");
        let text = build_css_definition("div", "x", "y", &style);
        assert!(text.starts_with("div #x .y {\n"));
        assert!(text.ends_with('}'));
        assert!(text.contains("\t/* Font */\n"));
        assert!(text.contains("\t/* Effect */\n"));
        assert!(text.contains("\tfont-weight: 700;\n"));
        // Blank line between sections.
        assert!(text.contains(";\n\n\t/* Color */\n"));
    }

    #[test]
    fn css_definition_collapses_uniform_border() {
        let mut style = ComputedStyle::default();
        uniform_border(&mut style, "1px", "solid", "rgb(0, 0, 0)");
        let text = build_css_definition("div", "x", "y", &style);
        assert!(text.contains("\tborder: 1px solid rgb(0, 0, 0);\n"));
        assert!(!text.contains("border-top:"));

        let default_text = build_css_definition("div", "", "", &ComputedStyle::default());
        assert!(default_text.contains("border-top: 0px none rgb(0, 0, 0);"));
        assert!(!default_text.contains("\tborder: "));
    }

    #[test]
    fn css_text_lists_every_property() {
        let text = css_text(&ComputedStyle::default());
        assert!(text.contains("display: block;"));
        assert!(text.contains("font-size: 16px;"));
        assert!(text.ends_with(';'));
    }

    // === Bordered div scenario ===

    #[test]
    fn bordered_div_scenario() {
        let (mut doc, mut styles, mut overlay) = fixture();
        let div = doc.create_element(
            "div",
            vec![Attr::new("id", "x"), Attr::new("class", "y")],
        );
        let body = doc.body();
        doc.append_child(body, div);
        let mut style = ComputedStyle::default();
        uniform_border(&mut style, "1px", "solid", "rgb(0, 0, 0)");
        styles.set(div, style);

        overlay.enable(&mut doc);
        hover(&mut overlay, &mut doc, &styles, div);

        let panel = overlay.panel().unwrap();
        assert_eq!(panel.header_text(&doc), "<div> #x .y");
        assert!(!panel.is_property_visible("font-weight"));
        assert!(!panel.is_property_visible("position"));
        assert!(panel.is_property_visible("border"));
        let border = panel.property_value(&doc, "border");
        assert!(border.starts_with("1px solid <span"));
        assert!(border.ends_with("#000000"));

        let text = overlay.css_definition();
        assert!(text.contains("/* Box */"));
        assert!(text.contains("\tborder: 1px solid rgb(0, 0, 0);\n"));
        assert!(!text.contains("border-left:"));
    }
}
