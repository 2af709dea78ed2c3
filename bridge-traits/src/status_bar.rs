//! Status Bar Abstraction
//!
//! Strongly-typed view of the host status bar: the closed set of visual styles
//! and transition animations, the frame geometry reported by the host, and the
//! [`NativeStatusBar`] trait every platform implements.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Visual theme of the status bar content.
///
/// Each variant carries a stable string tag and a numeric code matching the
/// platform's raw enumeration value. Together they form the compatibility
/// table accepted from scripting callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusBarStyle {
    /// Platform default (dark content on light backgrounds)
    #[default]
    Default,
    /// Light content, for dark backgrounds
    LightContent,
    /// Dark content, for light backgrounds
    DarkContent,
}

impl StatusBarStyle {
    /// Every declared style, in table order.
    pub const ALL: [StatusBarStyle; 3] = [
        StatusBarStyle::Default,
        StatusBarStyle::LightContent,
        StatusBarStyle::DarkContent,
    ];

    /// Tag accepted from scripting callers.
    pub const fn tag(self) -> &'static str {
        match self {
            StatusBarStyle::Default => "default",
            StatusBarStyle::LightContent => "light-content",
            StatusBarStyle::DarkContent => "dark-content",
        }
    }

    /// Raw platform value. Code 2 is a retired platform style and is not mapped.
    pub const fn code(self) -> i64 {
        match self {
            StatusBarStyle::Default => 0,
            StatusBarStyle::LightContent => 1,
            StatusBarStyle::DarkContent => 3,
        }
    }
}

impl fmt::Display for StatusBarStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Transition used when the status bar changes visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusBarAnimation {
    /// Change immediately
    #[default]
    None,
    /// Cross-fade
    Fade,
    /// Slide in or out from the screen edge
    Slide,
}

impl StatusBarAnimation {
    /// Every declared animation, in table order.
    pub const ALL: [StatusBarAnimation; 3] = [
        StatusBarAnimation::None,
        StatusBarAnimation::Fade,
        StatusBarAnimation::Slide,
    ];

    /// Tag accepted from scripting callers.
    pub const fn tag(self) -> &'static str {
        match self {
            StatusBarAnimation::None => "none",
            StatusBarAnimation::Fade => "fade",
            StatusBarAnimation::Slide => "slide",
        }
    }

    /// Raw platform value.
    pub const fn code(self) -> i64 {
        match self {
            StatusBarAnimation::None => 0,
            StatusBarAnimation::Fade => 1,
            StatusBarAnimation::Slide => 2,
        }
    }
}

impl fmt::Display for StatusBarAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Status bar bounds in screen points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusBarFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl StatusBarFrame {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Whether a frame notification precedes or follows the geometry change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramePhase {
    WillChange,
    DidChange,
}

/// A single native frame notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameChange {
    pub phase: FramePhase,
    pub frame: StatusBarFrame,
}

impl FrameChange {
    pub fn will_change(frame: StatusBarFrame) -> Self {
        Self {
            phase: FramePhase::WillChange,
            frame,
        }
    }

    pub fn did_change(frame: StatusBarFrame) -> Self {
        Self {
            phase: FramePhase::DidChange,
            frame,
        }
    }
}

/// Callback registered with the host for frame notifications.
pub type FrameObserver = Arc<dyn Fn(FrameChange) + Send + Sync>;

/// Handle identifying a registered [`FrameObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverToken(pub u64);

/// Host status bar trait
///
/// Wraps the platform status bar object:
/// - **iOS**: `UIApplication` status bar properties and frame notifications
/// - **Android**: `Window` system UI flags and insets listeners
/// - **Desktop**: headless shim for tests and previews
///
/// Calls are expected to be issued from the host's main/UI context and to
/// return immediately after the request is issued.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::status_bar::{NativeStatusBar, StatusBarAnimation};
///
/// fn hide(status_bar: &dyn NativeStatusBar) {
///     status_bar.set_hidden(true, StatusBarAnimation::Fade);
/// }
/// ```
pub trait NativeStatusBar: Send + Sync {
    /// Apply a content style, optionally animated
    fn set_style(&self, style: StatusBarStyle, animated: bool);

    /// Show or hide the status bar using the given transition
    fn set_hidden(&self, hidden: bool, animation: StatusBarAnimation);

    /// Toggle the network activity spinner
    fn set_network_activity_indicator_visible(&self, visible: bool);

    /// Current status bar bounds
    fn frame(&self) -> StatusBarFrame;

    /// Start delivering frame notifications to `observer`
    ///
    /// Observers must be invoked in the order they were added, once per
    /// native notification. Implementations may also invoke `observer`
    /// synchronously before returning, e.g. to report the current frame.
    fn add_frame_observer(&self, observer: FrameObserver) -> ObserverToken;

    /// Stop delivering notifications to the observer behind `token`
    ///
    /// Unknown tokens are ignored.
    fn remove_frame_observer(&self, token: ObserverToken);
}
