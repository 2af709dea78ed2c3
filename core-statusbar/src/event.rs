//! Outbound status bar events.

use bridge_traits::events::HostEvent;
use bridge_traits::status_bar::{FrameChange, FramePhase, StatusBarFrame};
use serde::Deserialize;
use serde_json::json;

/// Emitted after the status bar frame changed.
pub const FRAME_DID_CHANGE: &str = "statusBarFrameDidChange";

/// Emitted before the status bar frame changes.
pub const FRAME_WILL_CHANGE: &str = "statusBarFrameWillChange";

/// Every event name a caller may register a listener for.
pub const SUPPORTED_EVENTS: &[&str] = &[FRAME_DID_CHANGE, FRAME_WILL_CHANGE];

/// Typed form of the events the bridge writes into the host channel.
///
/// Serialized body: `{ "frame": { "x", "y", "width", "height" } }`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusBarEvent {
    FrameWillChange { frame: StatusBarFrame },
    FrameDidChange { frame: StatusBarFrame },
}

#[derive(Deserialize)]
struct FramePayload {
    frame: StatusBarFrame,
}

impl StatusBarEvent {
    /// Event name as seen by the scripting layer.
    pub fn name(&self) -> &'static str {
        match self {
            StatusBarEvent::FrameWillChange { .. } => FRAME_WILL_CHANGE,
            StatusBarEvent::FrameDidChange { .. } => FRAME_DID_CHANGE,
        }
    }

    pub fn frame(&self) -> StatusBarFrame {
        match self {
            StatusBarEvent::FrameWillChange { frame } | StatusBarEvent::FrameDidChange { frame } => {
                *frame
            }
        }
    }

    pub fn body(&self) -> serde_json::Value {
        json!({ "frame": self.frame() })
    }

    pub fn into_host_event(self) -> HostEvent {
        HostEvent::new(self.name(), self.body())
    }

    /// Parse a host event written by the bridge.
    ///
    /// Returns `None` for other event names or malformed bodies.
    pub fn from_host_event(event: &HostEvent) -> Option<Self> {
        let FramePayload { frame } = serde_json::from_value(event.body.clone()).ok()?;

        match event.name.as_str() {
            FRAME_WILL_CHANGE => Some(StatusBarEvent::FrameWillChange { frame }),
            FRAME_DID_CHANGE => Some(StatusBarEvent::FrameDidChange { frame }),
            _ => None,
        }
    }
}

impl From<FrameChange> for StatusBarEvent {
    fn from(change: FrameChange) -> Self {
        match change.phase {
            FramePhase::WillChange => StatusBarEvent::FrameWillChange {
                frame: change.frame,
            },
            FramePhase::DidChange => StatusBarEvent::FrameDidChange {
                frame: change.frame,
            },
        }
    }
}

impl From<StatusBarEvent> for HostEvent {
    fn from(event: StatusBarEvent) -> Self {
        event.into_host_event()
    }
}
