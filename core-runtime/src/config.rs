//! # Bridge Configuration Module
//!
//! Provides configuration management for the status bar bridge.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! `BridgeConfig` instance that holds the host-provided collaborators and the
//! settings the bridge needs. It enforces fail-fast validation so a missing
//! event channel is reported at startup rather than as silently dropped events.
//!
//! ## Required Dependencies
//!
//! - `EventEmitter` - Channel events are written into for the scripting layer
//!
//! ## Optional Dependencies
//!
//! - `NativeStatusBar` - The host status bar. May be attached later, because
//!   hosts routinely construct the bridge before native UI exists.
//!
//! Desktop hosts without a scripting runtime can pass an [`EventBus`] through
//! [`BridgeConfigBuilder::event_bus`]. The bus is then both the emitter and
//! the place consumers subscribe to.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::config::BridgeConfig;
//! use std::sync::Arc;
//!
//! let config = BridgeConfig::builder()
//!     .event_emitter(Arc::new(MyJsEmitter::new()))
//!     .native_status_bar(Arc::new(MyUiKitStatusBar::new()))
//!     .build()
//!     .expect("Failed to build config");
//! ```
//!
//! ## Error Handling
//!
//! ```ignore
//! use core_runtime::config::BridgeConfig;
//!
//! // No event channel: fails with CapabilityMissing
//! let result = BridgeConfig::builder().build();
//! ```

use crate::error::{Error, Result};
use crate::events::EventBus;
use bridge_traits::{EventEmitter, NativeStatusBar};
use std::sync::Arc;

/// Configuration for a status bar bridge.
///
/// Use [`BridgeConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct BridgeConfig {
    /// Event channel for outbound notifications (required)
    pub event_emitter: Arc<dyn EventEmitter>,

    /// Bus behind `event_emitter`, when one was configured via
    /// [`BridgeConfigBuilder::event_bus`]
    pub event_bus: Option<EventBus>,

    /// Host status bar, if it already exists
    pub native_status_bar: Option<Arc<dyn NativeStatusBar>>,

    /// Whether the host manages status bar appearance per view controller.
    ///
    /// When set, global style and visibility changes are rejected with an
    /// error log, because the platform would ignore them.
    pub view_controller_based_appearance: bool,
}

impl std::fmt::Debug for BridgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BridgeConfig")
            .field("event_emitter", &"EventEmitter { ... }")
            .field("event_bus", &self.event_bus)
            .field(
                "native_status_bar",
                &self
                    .native_status_bar
                    .as_ref()
                    .map(|_| "NativeStatusBar { ... }"),
            )
            .field(
                "view_controller_based_appearance",
                &self.view_controller_based_appearance,
            )
            .finish()
    }
}

impl BridgeConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> BridgeConfigBuilder {
        BridgeConfigBuilder::default()
    }
}

/// Builder for [`BridgeConfig`].
#[derive(Default)]
pub struct BridgeConfigBuilder {
    event_emitter: Option<Arc<dyn EventEmitter>>,
    event_bus: Option<EventBus>,
    native_status_bar: Option<Arc<dyn NativeStatusBar>>,
    view_controller_based_appearance: bool,
}

impl BridgeConfigBuilder {
    /// Sets the event channel.
    pub fn event_emitter(mut self, emitter: Arc<dyn EventEmitter>) -> Self {
        self.event_emitter = Some(emitter);
        self.event_bus = None;
        self
    }

    /// Uses `bus` as the event channel and keeps it subscribable.
    pub fn event_bus(mut self, bus: EventBus) -> Self {
        self.event_emitter = Some(Arc::new(bus.clone()));
        self.event_bus = Some(bus);
        self
    }

    /// Sets the host status bar.
    pub fn native_status_bar(mut self, status_bar: Arc<dyn NativeStatusBar>) -> Self {
        self.native_status_bar = Some(status_bar);
        self
    }

    /// Declares that the host uses per-view-controller status bar appearance.
    pub fn view_controller_based_appearance(mut self, enabled: bool) -> Self {
        self.view_controller_based_appearance = enabled;
        self
    }

    /// Builds the configuration, validating required dependencies.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityMissing`] when neither an `EventEmitter` nor
    /// an `EventBus` was provided.
    pub fn build(self) -> Result<BridgeConfig> {
        let event_emitter = self.event_emitter.ok_or_else(|| Error::CapabilityMissing {
            capability: "EventEmitter".to_string(),
            message: "No event emitter provided. \
                      Desktop: pass an EventBus via event_bus(). \
                      Mobile: inject the host's scripting event channel."
                .to_string(),
        })?;

        Ok(BridgeConfig {
            event_emitter,
            event_bus: self.event_bus,
            native_status_bar: self.native_status_bar,
            view_controller_based_appearance: self.view_controller_based_appearance,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::HostEvent;
    use bridge_traits::{
        FrameObserver, ObserverToken, StatusBarAnimation, StatusBarFrame, StatusBarStyle,
    };

    struct NullEmitter;

    impl EventEmitter for NullEmitter {
        fn emit(&self, _event: HostEvent) {}
    }

    struct NullStatusBar;

    impl NativeStatusBar for NullStatusBar {
        fn set_style(&self, _style: StatusBarStyle, _animated: bool) {}
        fn set_hidden(&self, _hidden: bool, _animation: StatusBarAnimation) {}
        fn set_network_activity_indicator_visible(&self, _visible: bool) {}
        fn frame(&self) -> StatusBarFrame {
            StatusBarFrame::default()
        }
        fn add_frame_observer(&self, _observer: FrameObserver) -> ObserverToken {
            ObserverToken(0)
        }
        fn remove_frame_observer(&self, _token: ObserverToken) {}
    }

    #[test]
    fn test_builder_with_all_dependencies() {
        let config = BridgeConfig::builder()
            .event_emitter(Arc::new(NullEmitter))
            .native_status_bar(Arc::new(NullStatusBar))
            .view_controller_based_appearance(true)
            .build()
            .unwrap();

        assert!(config.native_status_bar.is_some());
        assert!(config.view_controller_based_appearance);
    }

    #[test]
    fn test_native_status_bar_is_optional() {
        let config = BridgeConfig::builder()
            .event_emitter(Arc::new(NullEmitter))
            .build()
            .unwrap();

        assert!(config.native_status_bar.is_none());
        assert!(!config.view_controller_based_appearance);
    }

    #[test]
    fn test_missing_emitter_fails_fast() {
        let err = BridgeConfig::builder().build().unwrap_err();

        match err {
            Error::CapabilityMissing { capability, .. } => {
                assert_eq!(capability, "EventEmitter");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_event_bus_is_kept_subscribable() {
        let config = BridgeConfig::builder()
            .event_bus(EventBus::new(8))
            .build()
            .unwrap();

        let bus = config.event_bus.clone().unwrap();
        let mut receiver = bus.subscribe();
        config
            .event_emitter
            .emit(HostEvent::new("statusBarFrameDidChange", serde_json::json!({})));

        assert_eq!(receiver.try_recv().unwrap().name, "statusBarFrameDidChange");
    }

    #[test]
    fn test_explicit_emitter_replaces_event_bus() {
        let config = BridgeConfig::builder()
            .event_bus(EventBus::new(8))
            .event_emitter(Arc::new(NullEmitter))
            .build()
            .unwrap();

        assert!(config.event_bus.is_none());
    }

    #[test]
    fn test_debug_hides_trait_objects() {
        let config = BridgeConfig::builder()
            .event_emitter(Arc::new(NullEmitter))
            .build()
            .unwrap();

        let debug = format!("{:?}", config);
        assert!(debug.contains("EventEmitter { ... }"));
        assert!(debug.contains("native_status_bar: None"));
    }
}
