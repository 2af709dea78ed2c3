//! Workspace placeholder crate.
//!
//! This crate exists to expose shared feature flags that map to the individual
//! workspace crates (e.g., `core-statusbar`, `bridge-desktop`). Host
//! applications can depend on `statusbar-workspace` and enable the documented
//! features without needing to wire each crate individually.

#[cfg(feature = "desktop-shims")]
pub use bridge_desktop::HeadlessStatusBar;
#[cfg(feature = "desktop-shims")]
pub use core_statusbar::{RawInput, StatusBarBridge, StatusBarError, StatusBarEvent};
