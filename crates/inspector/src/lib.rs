//! # inspector — hover-to-inspect style overlay
//!
//! The overlay core: a fixed catalog of inspectable properties, display
//! formatting for raw computed values, the floating panel subtree, and the
//! hover/keyboard controller that ties them together. Host integration
//! (event routing, console commands) lives in the `host` crate.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod format;
pub mod hover;
pub mod keys;
pub mod panel;

pub use catalog::Category;
pub use config::OverlayConfig;
pub use hover::{build_css_definition, css_text, format_header, Overlay, OverlayState, Viewport};
pub use keys::KeyResponse;
pub use panel::{Panel, HINT_ID, PANEL_ID};
