//! Drives the bridge against the headless status bar and prints the events a
//! scripting layer would receive.
//!
//! Run with:
//! ```bash
//! cargo run -p core-statusbar --example statusbar_demo
//!
//! # JSON logs
//! cargo run -p core-statusbar --example statusbar_demo -- json
//! ```

use bridge_desktop::HeadlessStatusBar;
use bridge_traits::logging::LogLevel;
use bridge_traits::status_bar::StatusBarFrame;
use core_runtime::config::BridgeConfig;
use core_runtime::events::EventBus;
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use core_statusbar::{StatusBarBridge, FRAME_DID_CHANGE};
use std::env;
use std::sync::Arc;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let format = match env::args().nth(1).as_deref() {
        Some("json") => LogFormat::Json,
        Some("compact") => LogFormat::Compact,
        _ => LogFormat::Pretty,
    };
    init_logging(
        LoggingConfig::default()
            .with_format(format)
            .with_level(LogLevel::Debug),
    )?;

    let native = Arc::new(HeadlessStatusBar::default());
    let bridge = StatusBarBridge::from_builder(
        BridgeConfig::builder()
            .event_bus(EventBus::default())
            .native_status_bar(native.clone()),
    )?;
    let mut events = bridge.subscribe().ok_or("bridge has no event bus")?;

    // What a script would send over the boundary.
    let args: Vec<serde_json::Value> =
        serde_json::from_str(r#"["light-content", 3, "darkcontent", null]"#)?;
    for style in args {
        bridge.set_style(style, true);
        info!(applied = %native.snapshot().style, "Style after call");
    }

    bridge.set_hidden(true, "slide");
    bridge.add_listener(FRAME_DID_CHANGE)?;

    // Rotate to landscape and back.
    native.change_frame(StatusBarFrame::new(0.0, 0.0, 812.0, 0.0));
    native.change_frame(StatusBarFrame::new(0.0, 0.0, 375.0, 44.0));

    bridge.remove_listeners(1)?;

    for event in events.drain() {
        println!("{} {}", event.name, event.body);
    }

    if let Err(err) = bridge.remove_listeners(1) {
        println!("caller bug surfaced: {err}");
    }

    Ok(())
}
