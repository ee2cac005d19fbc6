//! # Context menu
//!
//! The "StyleLens console" context-menu tree: one parent entry with a child
//! per console command. Front ends rebuild the menu on startup and on
//! settings changes, so installation has to be idempotent.

use crate::bridge::COMMANDS;

/// Menu id of the parent entry.
pub const MENU_ROOT_ID: &str = "stylelens-console";
/// Title of the parent entry.
pub const MENU_ROOT_TITLE: &str = "StyleLens console";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub id: String,
    pub title: String,
    pub parent: Option<String>,
}

/// The installed context-menu tree.
#[derive(Debug, Default)]
pub struct ContextMenu {
    items: Vec<MenuItem>,
}

impl ContextMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the parent entry and one child per command. Returns `false`
    /// (leaving the tree untouched) when already installed.
    pub fn install(&mut self) -> bool {
        if self.items.iter().any(|i| i.id == MENU_ROOT_ID) {
            return false;
        }
        self.items.push(MenuItem {
            id: MENU_ROOT_ID.to_string(),
            title: MENU_ROOT_TITLE.to_string(),
            parent: None,
        });
        for &command in COMMANDS {
            self.items.push(MenuItem {
                id: command.to_string(),
                title: format!("console.log({command})"),
                parent: Some(MENU_ROOT_ID.to_string()),
            });
        }
        true
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Console command for a clicked menu item, if the id names one.
    pub fn command_for(&self, item_id: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|i| i.id == item_id && i.parent.is_some())
            .map(|i| i.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_builds_root_plus_children() {
        let mut menu = ContextMenu::new();
        assert!(menu.install());
        assert_eq!(menu.items().len(), 1 + COMMANDS.len());
        assert_eq!(menu.items()[0].parent, None);
        assert!(menu.items()[1..]
            .iter()
            .all(|i| i.parent.as_deref() == Some(MENU_ROOT_ID)));
    }

    #[test]
    fn install_is_idempotent() {
        let mut menu = ContextMenu::new();
        menu.install();
        let before = menu.items().to_vec();
        assert!(!menu.install());
        assert_eq!(menu.items(), &before[..]);
    }

    #[test]
    fn clicks_map_back_to_commands() {
        let mut menu = ContextMenu::new();
        menu.install();
        assert_eq!(menu.command_for("cssText"), Some("cssText"));
        assert_eq!(menu.command_for(MENU_ROOT_ID), None);
        assert_eq!(menu.command_for("nope"), None);
    }
}
