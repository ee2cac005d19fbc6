//! # Display formatting for raw computed values
//!
//! Pure string transforms applied before a value reaches the panel. Each
//! helper passes unrecognized input through unchanged so an unusual host
//! value degrades to "shown raw" rather than an error.

use common::Color;

/// Convert `rgb(r, g, b)` / `rgba(r, g, b, a)` to an uppercase `#RRGGBB`
/// hex string. Fully transparent black maps to `#FFFFFF` so the swatch
/// stays visible against the panel background. Anything unparsable is
/// returned unchanged.
pub fn color_to_hex(raw: &str) -> String {
    match parse_rgb(raw) {
        Some((0, 0, 0, Some(a))) if a == 0.0 => "#FFFFFF".to_string(),
        Some((r, g, b, _)) => Color::rgb(r, g, b).to_css_hex(),
        None => raw.to_string(),
    }
}

/// Format a color value for a panel slot: an inline swatch box followed by
/// the hex text.
pub fn format_color(raw: &str) -> String {
    let hex = color_to_hex(raw);
    format!(
        "<span style=\"border: 1px solid #000000 !important;\
width: 8px !important;height: 8px !important;display: inline-block \
!important;background-color:{hex} !important;\"></span> {hex}"
    )
}

/// Round a pixel length to a whole number of pixels (`"120.46px"` →
/// `"120px"`). Non-pixel values pass through unchanged, so the helper is
/// idempotent on its own output.
pub fn format_length(raw: &str) -> String {
    let Some(number) = raw.strip_suffix("px") else {
        return raw.to_string();
    };
    match number.trim().parse::<f32>() {
        Ok(n) => format!("{}px", n.round() as i64),
        Err(_) => raw.to_string(),
    }
}

/// Reduce a `url(...)` value to the file name of the referenced resource.
/// Values without a `url(...)` wrapper pass through unchanged.
pub fn format_url(raw: &str) -> String {
    let Some(open) = raw.find('(') else {
        return raw.to_string();
    };
    let Some(close) = raw.rfind(')') else {
        return raw.to_string();
    };
    if close <= open {
        return raw.to_string();
    }
    let inner = raw[open + 1..close].trim().trim_matches(['"', '\'']);
    match inner.rsplit('/').next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => inner.to_string(),
    }
}

/// Parse the numeric components of an `rgb()`/`rgba()` function.
fn parse_rgb(raw: &str) -> Option<(u8, u8, u8, Option<f32>)> {
    let raw = raw.trim();
    let body = raw
        .strip_prefix("rgba(")
        .or_else(|| raw.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let channel = |s: &str| -> Option<u8> {
        let v = s.parse::<f32>().ok()?;
        if (0.0..=255.0).contains(&v) {
            Some(v.round() as u8)
        } else {
            None
        }
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if parts.len() == 4 {
        Some(parts[3].parse::<f32>().ok()?)
    } else {
        None
    };
    Some((r, g, b, a))
}

// ═════════════════════════════════════════════════════════════════════════════
// Tests
// ═════════════════════════════════════════════════════════════════════════════
