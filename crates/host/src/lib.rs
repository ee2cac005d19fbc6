//! # host — front-end integration for the overlay
//!
//! Everything between the inspector core and an embedding front end: the
//! per-page session with its delegated event route, the injection bridge
//! with console commands, the context-menu model, and the output sink
//! traits.

#![forbid(unsafe_code)]

pub mod bridge;
pub mod menu;
pub mod page;
pub mod sinks;

pub use bridge::{inject_overlay, is_restricted_url, run_command, COMMANDS};
pub use menu::{ContextMenu, MenuItem};
pub use page::PageSession;
pub use sinks::{
    ConsoleSink, MemoryConsole, MemoryNotifications, MemoryPrompt, NotificationSink, PromptSink,
};
