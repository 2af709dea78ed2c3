//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop hosts
//! (macOS, Windows, Linux) and test harnesses.
//!
//! ## Overview
//!
//! Desktop windows have no system status bar, so this crate ships an
//! in-process stand-in:
//! - `NativeStatusBar` using [`HeadlessStatusBar`], which records the applied
//!   appearance and lets the host (or a test) drive frame notifications
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::HeadlessStatusBar;
//! use bridge_traits::status_bar::StatusBarFrame;
//! use std::sync::Arc;
//!
//! let status_bar = Arc::new(HeadlessStatusBar::default());
//! // Inject into BridgeConfig, then simulate a rotation:
//! status_bar.change_frame(StatusBarFrame::new(0.0, 0.0, 844.0, 0.0));
//! ```

mod status_bar;

pub use status_bar::{HeadlessStatusBar, StatusBarState};
