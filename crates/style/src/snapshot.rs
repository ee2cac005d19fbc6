//! Computed-style snapshots — raw string values keyed by property name.
//!
//! The overlay never interprets styles as typed values; it compares and
//! formats the raw strings the hosting document reports, so a snapshot is a
//! plain name → value map seeded with the CSS initial value of every
//! property the inspector panel knows about.

use std::collections::HashMap;

/// CSS initial (or common-default) values for every inspectable property.
///
/// The panel's default-value suppression rules compare against exactly these
/// strings, so hosts that override a property must use the same textual
/// conventions (`"rgb(r, g, b)"` colors, `"<n>px"` lengths).
pub const INITIAL_VALUES: &[(&str, &str)] = &[
    // -- Font / text --
    ("font-family", "serif"),
    ("font-size", "16px"),
    ("font-style", "normal"),
    ("font-variant", "normal"),
    ("font-weight", "400"),
    ("letter-spacing", "normal"),
    ("line-height", "normal"),
    ("text-decoration", "none"),
    ("text-align", "start"),
    ("text-indent", "0px"),
    ("text-transform", "none"),
    ("vertical-align", "baseline"),
    ("white-space", "normal"),
    ("word-spacing", "normal"),
    // -- Color / background --
    ("background-attachment", "scroll"),
    ("background-color", "transparent"),
    ("background-image", "none"),
    ("background-position", "0% 0%"),
    ("background-repeat", "repeat"),
    ("color", "rgb(0, 0, 0)"),
    // -- Box --
    ("height", "auto"),
    ("width", "auto"),
    ("border-top-width", "0px"),
    ("border-right-width", "0px"),
    ("border-bottom-width", "0px"),
    ("border-left-width", "0px"),
    ("border-top-style", "none"),
    ("border-right-style", "none"),
    ("border-bottom-style", "none"),
    ("border-left-style", "none"),
    ("border-top-color", "rgb(0, 0, 0)"),
    ("border-right-color", "rgb(0, 0, 0)"),
    ("border-bottom-color", "rgb(0, 0, 0)"),
    ("border-left-color", "rgb(0, 0, 0)"),
    ("margin-top", "0px"),
    ("margin-right", "0px"),
    ("margin-bottom", "0px"),
    ("margin-left", "0px"),
    ("padding-top", "0px"),
    ("padding-right", "0px"),
    ("padding-bottom", "0px"),
    ("padding-left", "0px"),
    ("max-height", "none"),
    ("min-height", "0px"),
    ("max-width", "none"),
    ("min-width", "0px"),
    // -- Position --
    ("position", "static"),
    ("top", "auto"),
    ("bottom", "auto"),
    ("right", "auto"),
    ("left", "auto"),
    ("float", "none"),
    ("display", "block"),
    ("clear", "none"),
    ("z-index", "auto"),
    // -- List --
    ("list-style-image", "none"),
    ("list-style-type", "disc"),
    ("list-style-position", "outside"),
    // -- Table --
    ("border-collapse", "separate"),
    ("border-spacing", "0px 0px"),
    ("caption-side", "top"),
    ("empty-cells", "show"),
    ("table-layout", "auto"),
    // -- Misc --
    ("overflow", "visible"),
    ("cursor", "auto"),
    ("visibility", "visible"),
    // -- Effect --
    ("transform", "none"),
    ("transition", "all 0s ease 0s"),
    ("outline", "rgb(0, 0, 0) none 0px"),
    ("outline-offset", "0px"),
    ("box-sizing", "content-box"),
    ("resize", "none"),
    ("text-shadow", "none"),
    ("text-overflow", "clip"),
    ("word-wrap", "normal"),
    ("box-shadow", "none"),
    ("border-top-left-radius", "0px"),
    ("border-top-right-radius", "0px"),
    ("border-bottom-left-radius", "0px"),
    ("border-bottom-right-radius", "0px"),
];

// ─────────────────────────────────────────────────────────────────────────────
// ComputedStyle
// ─────────────────────────────────────────────────────────────────────────────

/// A read-only snapshot of an element's computed style.
///
/// Created fresh for each hover-update cycle; never cached across hovers.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    values: HashMap<String, String>,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        let values = INITIAL_VALUES
            .iter()
            .map(|&(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self { values }
    }
}

impl ComputedStyle {
    /// Override a single property value. Hosts and tests use this to build
    /// the styles the document would report.
    pub fn set(&mut self, name: &str, value: &str) -> &mut Self {
        self.values.insert(name.to_string(), value.to_string());
        self
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    /// Read a property value.
    ///
    /// Shorthand names (`border`, `border-top`, `margin`, `padding`) are
    /// composed from their longhands the way a document's computed-style
    /// object reports them: directional border shorthands read
    /// `"<width> <style> <color>"`, `border` reads the shared side value when
    /// all four sides agree and the empty string otherwise, and
    /// `margin`/`padding` collapse to one value when uniform.
    /// Unknown names read as the empty string.
    pub fn get(&self, name: &str) -> String {
        if let Some(v) = self.values.get(name) {
            return v.clone();
        }
        match name {
            "border-top" | "border-right" | "border-bottom" | "border-left" => {
                let side = &name["border-".len()..];
                self.border_side(side)
            }
            "border" => {
                let sides: Vec<String> = ["top", "right", "bottom", "left"]
                    .iter()
                    .map(|s| self.border_side(s))
                    .collect();
                if sides.iter().all(|s| s == &sides[0]) {
                    sides[0].clone()
                } else {
                    String::new()
                }
            }
            "margin" => self.box_shorthand("margin"),
            "padding" => self.box_shorthand("padding"),
            _ => String::new(),
        }
    }

    /// `"<width> <style> <color>"` for one border side.
    fn border_side(&self, side: &str) -> String {
        format!(
            "{} {} {}",
            self.get(&format!("border-{side}-width")),
            self.get(&format!("border-{side}-style")),
            self.get(&format!("border-{side}-color")),
        )
    }

    /// Single value when uniform, four-value shorthand otherwise.
    fn box_shorthand(&self, prefix: &str) -> String {
        let sides: Vec<String> = ["top", "right", "bottom", "left"]
            .iter()
            .map(|s| self.get(&format!("{prefix}-{s}")))
            .collect();
        if sides.iter().all(|s| s == &sides[0]) {
            sides[0].clone()
        } else {
            sides.join(" ")
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Tests
// ═════════════════════════════════════════════════════════════════════════════
