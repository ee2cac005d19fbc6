//! StyleLens — hover-to-inspect CSS overlay
//!
//! Demo front end: builds a small page, injects the overlay, and walks
//! through the hover / freeze / CSS-dump flow on stdout.

use common::Rect;
use dom::{Attr, Document, Key, KeyInput};
use host::{
    inject_overlay, run_command, ConsoleSink, ContextMenu, MemoryNotifications, PageSession,
    PromptSink,
};
use inspector::Viewport;
use style::{ComputedStyle, StyleMap};

struct StdoutConsole;

impl ConsoleSink for StdoutConsole {
    fn log(&mut self, line: &str) {
        println!("   console.log: {line}");
    }

    fn error(&mut self, line: &str) {
        println!("   console.error: {line}");
    }
}

struct StdoutPrompt;

impl PromptSink for StdoutPrompt {
    fn prompt(&mut self, label: &str, text: &str) {
        println!("   [{label}]");
        for line in text.lines() {
            println!("   | {line}");
        }
    }
}

/// body > div#main.card (bordered) > p.intro
fn sample_session() -> PageSession {
    let mut doc = Document::new();
    let card = doc.create_element(
        "div",
        vec![Attr::new("id", "main"), Attr::new("class", "card")],
    );
    let intro = doc.create_element("p", vec![Attr::new("class", "intro")]);
    let text = doc.create_text("Hover me");
    let body = doc.body();
    doc.append_child(body, card);
    doc.append_child(card, intro);
    doc.append_child(intro, text);

    let mut styles = StyleMap::new();
    let mut card_style = ComputedStyle::default()
        .with("width", "400px")
        .with("background-color", "rgb(245, 245, 245)")
        .with("padding-top", "16px")
        .with("padding-right", "16px")
        .with("padding-bottom", "16px")
        .with("padding-left", "16px");
    for side in ["top", "right", "bottom", "left"] {
        card_style.set(&format!("border-{side}-width"), "1px");
        card_style.set(&format!("border-{side}-style"), "solid");
        card_style.set(&format!("border-{side}-color"), "rgb(221, 221, 221)");
    }
    styles.set(card, card_style);
    styles.set(
        intro,
        ComputedStyle::default()
            .with("font-weight", "700")
            .with("color", "rgb(102, 102, 102)"),
    );

    let mut session = PageSession::new(doc, styles, Viewport::new(1280.0, 800.0));
    let body = session.document().body();
    session.set_box(body, Rect::new(0.0, 0.0, 1280.0, 800.0));
    session.set_box(card, Rect::new(100.0, 100.0, 400.0, 300.0));
    session.set_box(intro, Rect::new(116.0, 116.0, 368.0, 40.0));
    session
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("StyleLens v0.1.0\n");

    let mut notifications = MemoryNotifications::default();
    let mut console = StdoutConsole;
    let mut prompt = StdoutPrompt;

    // 1. Context menu setup (idempotent across restarts)
    println!("── Context menu ──");
    let mut menu = ContextMenu::new();
    menu.install();
    menu.install();
    println!("   {} entries installed", menu.items().len());

    // 2. Restricted pages are refused
    println!("\n── Injection guard ──");
    let mut session = sample_session();
    if inject_overlay(&mut session, "chrome://extensions", &mut notifications).is_err() {
        let (title, message) = &notifications.shown[0];
        println!("   refused: {title}: {message}");
    }

    // 3. Inject into a normal page
    println!("\n── Injection ──");
    match inject_overlay(&mut session, "https://example.com/docs", &mut notifications) {
        Ok(injected) => println!("   injected: {injected}"),
        Err(e) => println!("   error: {e}"),
    }

    // 4. Hover the nested paragraph
    println!("\n── Hover ──");
    session.route_pointer(150.0, 130.0);
    if let Some(panel) = session.overlay().panel() {
        println!("   header: {}", panel.header_text(session.document()));
        let pos = panel.position();
        println!("   panel at ({}, {})", pos.x, pos.y);
    }

    // 5. Freeze, then dump the CSS definition
    println!("\n── Freeze + CSS ──");
    session.route_key(KeyInput::plain(Key::Char('f')));
    session.route_key_with_prompt(KeyInput::plain(Key::Char('c')), &mut prompt);

    // 6. Console commands from the context menu
    println!("\n── Console commands ──");
    for command in ["el", "tagName", "cssText"] {
        run_command(&mut session, "https://example.com/docs", command, &mut console);
    }

    // 7. Escape tears everything down
    println!("\n── Close ──");
    session.route_key(KeyInput::plain(Key::Escape));
    println!("   overlay enabled: {}", session.overlay().is_enabled());
}
