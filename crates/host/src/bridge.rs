//! # Host bridge
//!
//! Entry points the embedding front end calls: overlay injection with the
//! restricted-page guard, and the console commands reachable from the
//! context menu. Command output goes to a [`ConsoleSink`]; nothing here
//! prints directly.

use common::LensError;
use dom::{Document, NodeId};
use inspector::{catalog, css_text};
use tracing::{info, warn};

use crate::page::PageSession;
use crate::sinks::{ConsoleSink, NotificationSink};

/// URL prefixes the host refuses to inject into.
pub const RESTRICTED_PREFIXES: &[&str] = &["chrome://", "https://chrome.google.com/"];

/// Console commands exposed through the context menu, in menu order.
pub const COMMANDS: &[&str] = &[
    "el",
    "id",
    "tagName",
    "className",
    "style",
    "cssText",
    "getComputedStyle",
    "simpleCssDefinition",
];

/// Whether `url` points at a page the host must not touch.
pub fn is_restricted_url(url: &str) -> bool {
    RESTRICTED_PREFIXES.iter().any(|p| url.starts_with(p))
}

/// Inject the overlay into the session's page.
///
/// Restricted pages get a user-facing notification and an error instead.
/// Returns `Ok(false)` when the overlay was already up (injection is
/// tolerant of repeated triggers).
pub fn inject_overlay(
    session: &mut PageSession,
    url: &str,
    notifications: &mut dyn NotificationSink,
) -> Result<bool, LensError> {
    if is_restricted_url(url) {
        warn!(url, "refusing to inject into restricted page");
        notifications.notify("StyleLens", "This page cannot be inspected.");
        return Err(LensError::RestrictedPage(url.to_string()));
    }
    let injected = session.enable_overlay();
    if injected {
        info!(url, "overlay injected");
    }
    Ok(injected)
}

/// Run one context-menu console command against the last inspected element.
///
/// Commands aimed at a restricted page are dropped without touching the
/// console; the refusal only shows up in the log.
pub fn run_command(
    session: &mut PageSession,
    url: &str,
    command: &str,
    console: &mut dyn ConsoleSink,
) {
    if is_restricted_url(url) {
        warn!(url, command, "refusing to run command on restricted page");
        return;
    }
    let Some(node) = session.overlay().current_element() else {
        console.error("StyleLens: no element inspected yet.");
        return;
    };
    match command {
        "el" => console.log(&describe_element(session.document(), node)),
        "id" => console.log(&element_attr(session.document(), node, "id")),
        "tagName" => {
            let tag = element_tag(session.document(), node).to_ascii_uppercase();
            console.log(&tag);
        }
        "className" => console.log(&element_attr(session.document(), node, "class")),
        "style" => console.log(&element_attr(session.document(), node, "style")),
        "cssText" => console.log(&css_text(&session.styles().computed(node))),
        "getComputedStyle" => {
            let style = session.styles().computed(node);
            let lines: Vec<String> = catalog::all_properties()
                .map(|prop| format!("{prop}: {}", style.get(prop)))
                .collect();
            console.log(&lines.join("\n"));
        }
        "simpleCssDefinition" => console.log(session.overlay().css_definition()),
        other => {
            warn!(command = other, "unknown console command");
            console.log(&format!("StyleLens: unknown command '{other}'"));
        }
    }
}

fn element_tag(doc: &Document, node: NodeId) -> String {
    doc.get(node)
        .and_then(|n| n.as_element())
        .map(|e| e.tag_name.clone())
        .unwrap_or_default()
}

fn element_attr(doc: &Document, node: NodeId, name: &str) -> String {
    doc.get(node)
        .and_then(|n| n.as_element())
        .and_then(|e| e.attrs.iter().find(|a| a.name == name))
        .map(|a| a.value.clone())
        .unwrap_or_default()
}

/// An opening-tag rendering of the element, attributes included.
fn describe_element(doc: &Document, node: NodeId) -> String {
    let Some(element) = doc.get(node).and_then(|n| n.as_element()) else {
        return String::new();
    };
    let mut out = format!("<{}", element.tag_name.to_ascii_lowercase());
    for attr in &element.attrs {
        out.push_str(&format!(" {}=\"{}\"", attr.name, attr.value));
    }
    out.push('>');
    out
}

// ═════════════════════════════════════════════════════════════════════════════
// Tests
// ═════════════════════════════════════════════════════════════════════════════
