//! Pointer and keyboard event types.
//!
//! The overlay receives its input through a single delegated route at the
//! page session rather than per-node listeners: the host hit-tests the
//! pointer position, fills in `target` with the innermost element, and hands
//! the event to the overlay once. `stop_propagation` marks the event as
//! consumed so the session does not synthesize follow-up events for
//! ancestors.

use crate::node::NodeId;

// ---------------------------------------------------------------------------
// Pointer events
// ---------------------------------------------------------------------------

/// The kind of pointer event being delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    /// The pointer entered the target element.
    Over,
    /// The pointer left the target element.
    Out,
    /// The pointer moved while over the target element.
    Move,
}

/// A pointer event aimed at the innermost element under the cursor.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// The innermost element under the pointer.
    pub target: NodeId,
    /// Pointer position in page coordinates.
    pub page_x: f32,
    pub page_y: f32,
    /// Set to `true` when `stop_propagation()` is called.
    pub propagation_stopped: bool,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, target: NodeId, page_x: f32, page_y: f32) -> Self {
        Self {
            kind,
            target,
            page_x,
            page_y,
            propagation_stopped: false,
        }
    }

    /// Mark the event as consumed; no ancestor of the target will see it.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

// ---------------------------------------------------------------------------
// Keyboard events
// ---------------------------------------------------------------------------

/// A key identity, reduced to what the overlay dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
}

/// A keyboard event with modifier state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub alt: bool,
    pub ctrl: bool,
}

impl KeyInput {
    /// A plain key press with no modifiers held.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            alt: false,
            ctrl: false,
        }
    }

    pub fn with_ctrl(key: Key) -> Self {
        Self {
            key,
            alt: false,
            ctrl: true,
        }
    }

    pub fn with_alt(key: Key) -> Self {
        Self {
            key,
            alt: true,
            ctrl: false,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_propagation_marks_event() {
        let mut evt = PointerEvent::new(PointerKind::Over, NodeId(3), 10.0, 20.0);
        assert!(!evt.propagation_stopped);
        evt.stop_propagation();
        assert!(evt.propagation_stopped);
    }

    #[test]
    fn key_input_constructors() {
        let plain = KeyInput::plain(Key::Char('f'));
        assert!(!plain.alt && !plain.ctrl);

        let ctrl = KeyInput::with_ctrl(Key::Char('c'));
        assert!(ctrl.ctrl && !ctrl.alt);

        let alt = KeyInput::with_alt(Key::Escape);
        assert!(alt.alt && !alt.ctrl);
    }
}
