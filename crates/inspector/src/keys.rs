//! Keyboard handling for the overlay.

use dom::{Document, Key, KeyInput};

use crate::hover::Overlay;

/// What a key press asked the host to do.
///
/// `ShowCss` carries the generated definition text; the host decides how to
/// present it (the reference front end uses a prompt dialog so the text can
/// be copied).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyResponse {
    /// Nothing relevant (overlay down, modifier held, unbound key).
    Ignored,
    /// Escape: overlay torn down.
    Closed,
    /// F while following the pointer.
    Froze,
    /// F while frozen.
    Unfroze,
    /// C: show this CSS definition text to the user.
    ShowCss(String),
}

impl Overlay {
    /// Dispatch one key press.
    ///
    /// Escape closes the overlay even when a modifier is held; F and C only
    /// fire unmodified so they cannot shadow browser shortcuts.
    pub fn handle_key(&mut self, doc: &mut Document, input: KeyInput) -> KeyResponse {
        match input.key {
            Key::Escape => {
                if self.disable(doc) {
                    KeyResponse::Closed
                } else {
                    KeyResponse::Ignored
                }
            }
            Key::Char(_) if input.alt || input.ctrl => KeyResponse::Ignored,
            Key::Char(c) => match c.to_ascii_lowercase() {
                'f' => {
                    if self.freeze() {
                        KeyResponse::Froze
                    } else if self.unfreeze(doc) {
                        KeyResponse::Unfroze
                    } else {
                        KeyResponse::Ignored
                    }
                }
                'c' if self.is_enabled() => KeyResponse::ShowCss(self.css_definition().to_string()),
                _ => KeyResponse::Ignored,
            },
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Tests
// ═════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OverlayConfig;
    use crate::hover::OverlayState;
    use crate::panel::PANEL_ID;

    fn enabled() -> (Document, Overlay) {
        let mut doc = Document::new();
        let mut overlay = Overlay::new(OverlayConfig::default());
        assert!(overlay.enable(&mut doc));
        (doc, overlay)
    }

    #[test]
    fn escape_closes_the_overlay() {
        let (mut doc, mut overlay) = enabled();
        let resp = overlay.handle_key(&mut doc, KeyInput::plain(Key::Escape));
        assert_eq!(resp, KeyResponse::Closed);
        assert_eq!(overlay.state(), OverlayState::Idle);
        assert_eq!(doc.element_by_id(PANEL_ID), None);

        // Second escape has nothing left to close.
        let resp = overlay.handle_key(&mut doc, KeyInput::plain(Key::Escape));
        assert_eq!(resp, KeyResponse::Ignored);
    }

    #[test]
    fn escape_works_with_modifiers_and_while_frozen() {
        let (mut doc, mut overlay) = enabled();
        overlay.freeze();
        let resp = overlay.handle_key(&mut doc, KeyInput::with_ctrl(Key::Escape));
        assert_eq!(resp, KeyResponse::Closed);
    }

    #[test]
    fn f_toggles_freeze() {
        let (mut doc, mut overlay) = enabled();
        assert_eq!(
            overlay.handle_key(&mut doc, KeyInput::plain(Key::Char('f'))),
            KeyResponse::Froze
        );
        assert_eq!(overlay.state(), OverlayState::Frozen);
        assert_eq!(
            overlay.handle_key(&mut doc, KeyInput::plain(Key::Char('F'))),
            KeyResponse::Unfroze
        );
        assert_eq!(overlay.state(), OverlayState::Active);
    }

    #[test]
    fn modified_letters_are_ignored() {
        let (mut doc, mut overlay) = enabled();
        assert_eq!(
            overlay.handle_key(&mut doc, KeyInput::with_ctrl(Key::Char('f'))),
            KeyResponse::Ignored
        );
        assert_eq!(
            overlay.handle_key(&mut doc, KeyInput::with_alt(Key::Char('c'))),
            KeyResponse::Ignored
        );
        assert_eq!(overlay.state(), OverlayState::Active);
    }

    #[test]
    fn c_returns_css_definition() {
        let (mut doc, mut overlay) = enabled();
        match overlay.handle_key(&mut doc, KeyInput::plain(Key::Char('c'))) {
            KeyResponse::ShowCss(text) => assert_eq!(text, overlay.css_definition()),
            other => panic!("expected ShowCss, got {other:?}"),
        }
    }

    #[test]
    fn keys_ignored_while_idle() {
        let mut doc = Document::new();
        let mut overlay = Overlay::new(OverlayConfig::default());
        for key in [Key::Char('f'), Key::Char('c')] {
            assert_eq!(
                overlay.handle_key(&mut doc, KeyInput::plain(key)),
                KeyResponse::Ignored
            );
        }
    }
}
