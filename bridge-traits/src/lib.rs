//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the status bar core and the host
//! that embeds it. Each trait represents a capability that the core requires
//! but that must be implemented differently per platform (iOS, Android,
//! desktop test shells).
//!
//! ## Traits
//!
//! ### Platform Integration
//! - [`NativeStatusBar`](status_bar::NativeStatusBar) - The host status bar object: style, visibility, frame notifications
//! - [`EventEmitter`](events::EventEmitter) - Channel the core writes named events into for the scripting layer
//!
//! ### Utilities
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Desktop  | `bridge-desktop`    | ✅ Headless shim |
//! | iOS      | TBD                 | 📋 Planned |
//! | Android  | TBD                 | 📋 Planned |
//!
//! ## Error Handling
//!
//! Status bar calls are assumed to succeed once the native object exists, so
//! [`NativeStatusBar`](status_bar::NativeStatusBar) methods return plain
//! values. [`BridgeError`](error::BridgeError) is used where a host call can
//! genuinely fail, such as forwarding logs.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so a single bridge instance can be
//! shared between the host UI context and background logging. Hosts are still
//! expected to drive status bar mutations from their main/UI context.
//!
//! ## Examples
//!
//! ### Implementing NativeStatusBar
//!
//! ```ignore
//! use bridge_traits::status_bar::{
//!     FrameObserver, NativeStatusBar, ObserverToken, StatusBarAnimation, StatusBarFrame,
//!     StatusBarStyle,
//! };
//!
//! pub struct UiKitStatusBar { /* application handle */ }
//!
//! impl NativeStatusBar for UiKitStatusBar {
//!     fn set_style(&self, style: StatusBarStyle, animated: bool) {
//!         // [application setStatusBarStyle:style.code() animated:animated]
//!         todo!()
//!     }
//!     // ...
//! }
//! ```

pub mod error;
pub mod events;
pub mod logging;
pub mod status_bar;

pub use error::BridgeError;

// Re-export commonly used types
pub use events::{EventEmitter, HostEvent};
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use status_bar::{
    FrameChange, FrameObserver, FramePhase, NativeStatusBar, ObserverToken, StatusBarAnimation,
    StatusBarFrame, StatusBarStyle,
};
