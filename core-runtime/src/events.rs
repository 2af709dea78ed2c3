//! # Event Bus System
//!
//! Provides the default event channel for the status bar bridge using
//! `tokio::sync::broadcast`. The bus implements
//! [`EventEmitter`](bridge_traits::EventEmitter), so the bridge can write named
//! events into it while any number of host-side consumers read them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐   emit    ┌───────────┐   subscribe   ┌────────────┐
//! │ StatusBarBridge ├──────────>│ EventBus  ├──────────────>│ Subscriber │
//! └─────────────────┘           │ (broadcast│               └────────────┘
//!                               │  channel) │   subscribe   ┌────────────┐
//!                               │           ├──────────────>│ Subscriber │
//!                               └───────────┘               └────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use bridge_traits::{EventEmitter, HostEvent};
//! use core_runtime::events::{EventBus, EventStream};
//!
//! let bus = EventBus::new(16);
//! let mut stream = EventStream::new(bus.subscribe()).named("statusBarFrameDidChange");
//!
//! bus.emit(HostEvent::new("statusBarFrameDidChange", serde_json::json!({})));
//! assert!(stream.try_recv().is_some());
//! ```
//!
//! ## Error Handling
//!
//! - **`RecvError::Lagged(n)`**: Subscriber was too slow and missed `n` events.
//!   This is non-fatal; the subscriber can continue receiving new events.
//! - **`RecvError::Closed`**: All senders have been dropped. This indicates shutdown.
//!
//! Writing into a bus with no receivers is not an error for the bridge; the
//! event is dropped and a `trace` record is logged.

use bridge_traits::{EventEmitter, HostEvent};
use std::fmt;
use tokio::sync::broadcast;
use tracing::{debug, trace};

// Re-export commonly used types
pub use tokio::sync::broadcast::error::{RecvError, SendError};
pub use tokio::sync::broadcast::Receiver;

/// Default buffer size for the event bus channel.
///
/// Subscribers that fall further behind receive `RecvError::Lagged`.
pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 100;

/// Central event bus for publishing and subscribing to host events.
///
/// Uses `tokio::sync::broadcast` internally, which provides:
/// - Multiple producers (clone the `EventBus`)
/// - Multiple consumers (each `subscribe()` creates a new receiver)
/// - Non-blocking sends (events are cloned for each subscriber)
/// - Lagging detection (slow subscribers get `RecvError::Lagged`)
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<HostEvent>,
}

impl EventBus {
    /// Creates a new event bus with the specified buffer size.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of events to buffer per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Creates a new event bus with the default buffer size.
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER_SIZE)
    }

    /// Publishes an event to all subscribers.
    ///
    /// Returns the number of subscribers that received the event, or an error
    /// carrying the event back when there are no active subscribers.
    pub fn publish(&self, event: HostEvent) -> Result<usize, SendError<HostEvent>> {
        self.sender.send(event)
    }

    /// Creates a new subscriber to the event bus.
    ///
    /// The subscriber only receives events published after this call.
    pub fn subscribe(&self) -> Receiver<HostEvent> {
        self.sender.subscribe()
    }

    /// Returns the current number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl EventEmitter for EventBus {
    fn emit(&self, event: HostEvent) {
        if let Err(SendError(event)) = self.publish(event) {
            trace!(event = %event.name, "Dropping event with no bus subscribers");
        }
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriber_count", &self.subscriber_count())
            .finish()
    }
}

type EventFilter = Box<dyn Fn(&HostEvent) -> bool + Send + Sync>;

/// Wrapper around a broadcast receiver with optional filtering.
pub struct EventStream {
    receiver: Receiver<HostEvent>,
    filter: Option<EventFilter>,
}

impl EventStream {
    /// Creates a new event stream from a receiver.
    pub fn new(receiver: Receiver<HostEvent>) -> Self {
        Self {
            receiver,
            filter: None,
        }
    }

    /// Only yield events matching `predicate`.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&HostEvent) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Box::new(predicate));
        self
    }

    /// Only yield events with the given name.
    pub fn named(self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.filter(move |event| event.name == name)
    }

    fn accepts(&self, event: &HostEvent) -> bool {
        self.filter.as_ref().map_or(true, |filter| filter(event))
    }

    /// Receives the next matching event.
    pub async fn recv(&mut self) -> Result<HostEvent, RecvError> {
        loop {
            let event = self.receiver.recv().await?;
            if self.accepts(&event) {
                return Ok(event);
            }
        }
    }

    /// Attempts to receive a matching event without waiting.
    ///
    /// Returns `None` when no matching event is buffered.
    pub fn try_recv(&mut self) -> Option<Result<HostEvent, RecvError>> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.accepts(&event) {
                        return Some(Ok(event));
                    }
                }
                Err(broadcast::error::TryRecvError::Empty) => return None,
                Err(broadcast::error::TryRecvError::Lagged(n)) => {
                    return Some(Err(RecvError::Lagged(n)))
                }
                Err(broadcast::error::TryRecvError::Closed) => return Some(Err(RecvError::Closed)),
            }
        }
    }

    /// Drains every matching event currently buffered.
    ///
    /// Events overwritten while this stream lagged are skipped; draining
    /// continues with the oldest event still buffered.
    pub fn drain(&mut self) -> Vec<HostEvent> {
        let mut events = Vec::new();
        loop {
            match self.try_recv() {
                Some(Ok(event)) => events.push(event),
                Some(Err(RecvError::Lagged(skipped))) => {
                    debug!(skipped, "Event stream lagged while draining");
                }
                Some(Err(RecvError::Closed)) | None => return events,
            }
        }
    }
}

impl fmt::Debug for EventStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventStream")
            .field("has_filter", &self.filter.is_some())
            .finish()
    }
}
