//! Overlay tuning knobs with the stock defaults.

/// Geometry and presentation settings for the overlay.
///
/// Hosts normally use [`OverlayConfig::default`]; the fields exist so an
/// embedder can restyle the overlay without patching the inspector.
#[derive(Clone, Debug)]
pub struct OverlayConfig {
    /// Fixed panel width in CSS pixels.
    pub panel_width: f32,
    /// Fallback panel height used until the host reports a measured one.
    pub panel_height: f32,
    /// Offset from the pointer to the panel's top-left corner.
    pub pointer_offset: f32,
    /// Extra clearance when the panel flips to the left of the pointer.
    pub flip_margin_x: f32,
    /// Extra clearance when the panel flips above the pointer.
    pub flip_margin_y: f32,
    /// Minimum room required on the opposite side before flipping.
    pub flip_clearance: f32,
    /// Outline applied to the hovered element.
    pub outline_style: String,
    /// One-shot hint shown until the first hover.
    pub hint_text: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            panel_width: 350.0,
            panel_height: 400.0,
            pointer_offset: 20.0,
            flip_margin_x: 40.0,
            flip_margin_y: 20.0,
            flip_clearance: 10.0,
            outline_style: "1px dashed #f00".to_string(),
            hint_text: "StyleLens ready.".to_string(),
        }
    }
}
