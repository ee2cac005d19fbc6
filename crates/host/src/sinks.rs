//! # Host output sinks
//!
//! The overlay core never talks to the outside world directly; everything
//! user-visible goes through one of these traits so embedders decide how a
//! console line, a notification, or a copyable text dump is presented.

/// Destination for console command output.
pub trait ConsoleSink {
    fn log(&mut self, line: &str);
    fn error(&mut self, line: &str);
}

/// Destination for one-shot user notifications (e.g. "page not inspectable").
pub trait NotificationSink {
    fn notify(&mut self, title: &str, message: &str);
}

/// Destination for copyable text the user asked to see (the C key).
pub trait PromptSink {
    fn prompt(&mut self, label: &str, text: &str);
}

// ─────────────────────────────────────────────────────────────────────────────
// In-memory implementations
// ─────────────────────────────────────────────────────────────────────────────

/// Records console lines; used by tests and the demo front end.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    pub logs: Vec<String>,
    pub errors: Vec<String>,
}

impl ConsoleSink for MemoryConsole {
    fn log(&mut self, line: &str) {
        self.logs.push(line.to_string());
    }

    fn error(&mut self, line: &str) {
        self.errors.push(line.to_string());
    }
}

/// Records `(title, message)` notification pairs.
#[derive(Debug, Default)]
pub struct MemoryNotifications {
    pub shown: Vec<(String, String)>,
}

impl NotificationSink for MemoryNotifications {
    fn notify(&mut self, title: &str, message: &str) {
        self.shown.push((title.to_string(), message.to_string()));
    }
}

/// Records prompted text dumps.
#[derive(Debug, Default)]
pub struct MemoryPrompt {
    pub shown: Vec<(String, String)>,
}

impl PromptSink for MemoryPrompt {
    fn prompt(&mut self, label: &str, text: &str) {
        self.shown.push((label.to_string(), text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_console_keeps_streams_apart() {
        let mut console = MemoryConsole::default();
        console.log("a");
        console.error("b");
        assert_eq!(console.logs, ["a"]);
        assert_eq!(console.errors, ["b"]);
    }
}
