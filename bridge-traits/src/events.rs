//! Event Emission Abstraction
//!
//! Generic channel the core writes named events into. The host forwards them
//! to its scripting layer (JS event emitter, message port, etc).

use serde::{Deserialize, Serialize};

/// Named event with a JSON body, as seen by the scripting layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostEvent {
    /// Event name subscribers register for (e.g. `statusBarFrameDidChange`)
    pub name: String,
    /// Structured payload
    pub body: serde_json::Value,
}

impl HostEvent {
    pub fn new(name: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}

/// Event emitter trait
///
/// Delivery is fire-and-forget: the core never branches on whether anyone
/// received the event.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::events::{EventEmitter, HostEvent};
///
/// fn notify(emitter: &dyn EventEmitter) {
///     emitter.emit(HostEvent::new("ready", serde_json::json!({})));
/// }
/// ```
pub trait EventEmitter: Send + Sync {
    /// Write an event into the host channel
    fn emit(&self, event: HostEvent);
}
