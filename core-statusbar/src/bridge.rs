//! # Status Bar Bridge
//!
//! Exposes the host status bar to the scripting layer.
//!
//! ## Overview
//!
//! The bridge accepts loosely-typed arguments, normalizes them through
//! [`convert`](crate::convert), and applies the result to the
//! [`NativeStatusBar`]. In the other direction it observes native frame
//! notifications and writes them into the configured [`EventEmitter`] as
//! [`StatusBarEvent`]s.
//!
//! ## Observation lifecycle
//!
//! Native observation is reference counted by listener registrations:
//!
//! ```text
//!              add_listener (0 -> 1)
//!  Unobserved ─────────────────────────> Observed
//!      ^                                    │
//!      └────────────────────────────────────┘
//!              remove_listeners (n -> 0)
//! ```
//!
//! The native observer is attached iff the listener count is non-zero and a
//! native status bar is present. Count changes are made under the bridge lock,
//! but the native `add_frame_observer`/`remove_frame_observer` calls are made
//! after releasing it, so a native implementation may notify the observer
//! synchronously and host handlers may call back into the bridge.
//!
//! Every transition bumps an observation generation. A registration that
//! completes after a newer transition is stale and is removed again.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::BridgeConfig;
//! use core_statusbar::StatusBarBridge;
//!
//! let bridge = StatusBarBridge::new(
//!     BridgeConfig::builder()
//!         .event_emitter(js_emitter)
//!         .native_status_bar(uikit_status_bar)
//!         .build()?,
//! );
//!
//! bridge.set_style("light-content", true);
//! bridge.set_hidden(true, "fade");
//! bridge.add_listener("statusBarFrameDidChange")?;
//! ```

use crate::convert::{to_status_bar_animation, to_status_bar_style, RawInput};
use crate::error::{Result, StatusBarError};
use crate::event::{StatusBarEvent, SUPPORTED_EVENTS};
use bridge_traits::events::EventEmitter;
use bridge_traits::status_bar::{FrameChange, FrameObserver, NativeStatusBar, ObserverToken};
use core_runtime::config::{BridgeConfig, BridgeConfigBuilder};
use core_runtime::events::{EventBus, EventStream};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, instrument, trace};

/// Whether the bridge currently observes native frame notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationState {
    Unobserved,
    Observed,
}

/// Observer registered on a specific native status bar.
struct ActiveObserver {
    native: Arc<dyn NativeStatusBar>,
    token: ObserverToken,
}

/// Registration decided under the lock, performed after releasing it.
struct PendingObserver {
    native: Arc<dyn NativeStatusBar>,
    generation: u64,
}

struct BridgeState {
    native: Option<Arc<dyn NativeStatusBar>>,
    listener_count: usize,
    observer: Option<ActiveObserver>,
    generation: u64,
}

impl BridgeState {
    fn begin_observing(&mut self) -> Option<PendingObserver> {
        if self.observer.is_some() {
            return None;
        }
        let native = Arc::clone(self.native.as_ref()?);
        self.generation += 1;
        Some(PendingObserver {
            native,
            generation: self.generation,
        })
    }

    fn end_observing(&mut self) -> Option<ActiveObserver> {
        self.generation += 1;
        self.observer.take()
    }
}

/// Bridge between the scripting layer and the host status bar.
pub struct StatusBarBridge {
    emitter: Arc<dyn EventEmitter>,
    event_bus: Option<EventBus>,
    view_controller_based_appearance: bool,
    state: Mutex<BridgeState>,
}

impl StatusBarBridge {
    /// Create a bridge from a validated configuration.
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            emitter: config.event_emitter,
            event_bus: config.event_bus,
            view_controller_based_appearance: config.view_controller_based_appearance,
            state: Mutex::new(BridgeState {
                native: config.native_status_bar,
                listener_count: 0,
                observer: None,
                generation: 0,
            }),
        }
    }

    /// Build the configuration and create a bridge from it.
    ///
    /// # Errors
    ///
    /// Returns [`StatusBarError::Runtime`] when the configuration is missing a
    /// required capability.
    pub fn from_builder(builder: BridgeConfigBuilder) -> Result<Self> {
        Ok(Self::new(builder.build()?))
    }

    /// Subscribe to the events this bridge emits.
    ///
    /// Only available when the bridge was configured with an [`EventBus`];
    /// host emitters deliver events through their own channel.
    pub fn subscribe(&self) -> Option<EventStream> {
        self.event_bus
            .as_ref()
            .map(|bus| EventStream::new(bus.subscribe()))
    }

    /// Event names accepted by [`add_listener`](Self::add_listener).
    pub fn supported_events(&self) -> &'static [&'static str] {
        SUPPORTED_EVENTS
    }

    /// Apply a status bar style.
    ///
    /// Unrecognized styles resolve to the default style. Does nothing when no
    /// native status bar is attached.
    #[instrument(skip(self, style))]
    pub fn set_style(&self, style: impl Into<RawInput>, animated: bool) {
        if self.rejects_global_appearance() {
            return;
        }

        let style = to_status_bar_style(&style.into());
        let Some(native) = self.native() else {
            debug!(%style, "No native status bar, ignoring style change");
            return;
        };

        native.set_style(style, animated);
        debug!(%style, animated, "Status bar style set");
    }

    /// Show or hide the status bar.
    ///
    /// Unrecognized animations resolve to no animation. Does nothing when no
    /// native status bar is attached.
    #[instrument(skip(self, animation))]
    pub fn set_hidden(&self, hidden: bool, animation: impl Into<RawInput>) {
        if self.rejects_global_appearance() {
            return;
        }

        let animation = to_status_bar_animation(&animation.into());
        let Some(native) = self.native() else {
            debug!(hidden, %animation, "No native status bar, ignoring visibility change");
            return;
        };

        native.set_hidden(hidden, animation);
        debug!(hidden, %animation, "Status bar visibility set");
    }

    /// Toggle the network activity indicator.
    pub fn set_network_activity_indicator_visible(&self, visible: bool) {
        if let Some(native) = self.native() {
            native.set_network_activity_indicator_visible(visible);
        }
    }

    /// Current status bar height, or `0.0` without a native status bar.
    pub fn get_height(&self) -> f64 {
        self.native().map_or(0.0, |native| native.frame().height)
    }

    /// Register one listener for `event_name`.
    ///
    /// The first registration starts native observation.
    ///
    /// # Errors
    ///
    /// Returns [`StatusBarError::UnsupportedEvent`] for names outside
    /// [`supported_events`](Self::supported_events); the count is unchanged.
    pub fn add_listener(&self, event_name: &str) -> Result<()> {
        if !SUPPORTED_EVENTS.contains(&event_name) {
            error!(event = event_name, "Unsupported status bar event");
            return Err(StatusBarError::UnsupportedEvent(event_name.to_string()));
        }

        let pending = {
            let mut state = self.lock_state();
            state.listener_count += 1;
            debug!(
                event = event_name,
                listener_count = state.listener_count,
                "Listener added"
            );
            if state.listener_count == 1 {
                state.begin_observing()
            } else {
                None
            }
        };

        self.observe(pending);
        Ok(())
    }

    /// Remove `count` listeners.
    ///
    /// Removing the last listener stops native observation.
    ///
    /// # Errors
    ///
    /// Returns [`StatusBarError::ListenerUnderflow`] when `count` exceeds the
    /// registered listeners. This is a caller bug; the count is left unchanged.
    pub fn remove_listeners(&self, count: usize) -> Result<()> {
        let active = {
            let mut state = self.lock_state();

            if count > state.listener_count {
                error!(
                    requested = count,
                    active = state.listener_count,
                    "Attempted to remove more status bar listeners than were added"
                );
                return Err(StatusBarError::ListenerUnderflow {
                    requested: count,
                    active: state.listener_count,
                });
            }

            state.listener_count -= count;
            debug!(
                removed = count,
                listener_count = state.listener_count,
                "Listeners removed"
            );
            if count > 0 && state.listener_count == 0 {
                state.end_observing()
            } else {
                None
            }
        };

        Self::unobserve(active);
        Ok(())
    }

    /// Attach the native status bar once the host has created it.
    ///
    /// Replaces any previously attached status bar. Observation moves to the
    /// new status bar if listeners are registered.
    pub fn attach_native(&self, native: Arc<dyn NativeStatusBar>) {
        let (previous, pending) = {
            let mut state = self.lock_state();
            let previous = state.end_observing();
            state.native = Some(native);
            debug!(listener_count = state.listener_count, "Native status bar attached");

            let pending = if state.listener_count > 0 {
                state.begin_observing()
            } else {
                None
            };
            (previous, pending)
        };

        Self::unobserve(previous);
        self.observe(pending);
    }

    /// Detach the native status bar, e.g. when the host tears down its UI.
    ///
    /// Listener registrations are kept and observation resumes on the next
    /// [`attach_native`](Self::attach_native).
    pub fn detach_native(&self) {
        let previous = {
            let mut state = self.lock_state();
            state.native = None;
            debug!("Native status bar detached");
            state.end_observing()
        };

        Self::unobserve(previous);
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.lock_state().listener_count
    }

    pub fn observation_state(&self) -> ObservationState {
        if self.lock_state().observer.is_some() {
            ObservationState::Observed
        } else {
            ObservationState::Unobserved
        }
    }

    fn rejects_global_appearance(&self) -> bool {
        if self.view_controller_based_appearance {
            error!(
                "Status bar appearance is managed per view controller; \
                 disable view-controller-based status bar appearance to use this bridge"
            );
        }
        self.view_controller_based_appearance
    }

    /// Register the frame observer planned under the lock.
    ///
    /// The native call runs unlocked. If another transition happened
    /// meanwhile, the new registration is stale and is removed again.
    fn observe(&self, pending: Option<PendingObserver>) {
        let Some(PendingObserver { native, generation }) = pending else {
            return;
        };

        let token = native.add_frame_observer(self.frame_observer());

        let stale = {
            let mut state = self.lock_state();
            if state.generation == generation {
                state.observer = Some(ActiveObserver {
                    native: Arc::clone(&native),
                    token,
                });
                false
            } else {
                true
            }
        };

        if stale {
            native.remove_frame_observer(token);
            debug!(?token, "Discarded stale status bar frame observer");
        } else {
            debug!(?token, "Started observing status bar frame");
        }
    }

    fn unobserve(active: Option<ActiveObserver>) {
        if let Some(ActiveObserver { native, token }) = active {
            native.remove_frame_observer(token);
            debug!(?token, "Stopped observing status bar frame");
        }
    }

    fn native(&self) -> Option<Arc<dyn NativeStatusBar>> {
        self.lock_state().native.clone()
    }

    fn frame_observer(&self) -> FrameObserver {
        let emitter = Arc::clone(&self.emitter);
        Arc::new(move |change: FrameChange| {
            let event = StatusBarEvent::from(change);
            trace!(event = event.name(), height = change.frame.height, "Forwarding frame change");
            emitter.emit(event.into_host_event());
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, BridgeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for StatusBarBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock_state();
        f.debug_struct("StatusBarBridge")
            .field("has_native", &state.native.is_some())
            .field("has_event_bus", &self.event_bus.is_some())
            .field("listener_count", &state.listener_count)
            .field("observed", &state.observer.is_some())
            .field(
                "view_controller_based_appearance",
                &self.view_controller_based_appearance,
            )
            .finish()
    }
}
