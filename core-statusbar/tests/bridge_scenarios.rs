//! End-to-end scenarios against the headless status bar and the event bus.

use bridge_desktop::HeadlessStatusBar;
use bridge_traits::status_bar::{StatusBarAnimation, StatusBarFrame, StatusBarStyle};
use core_runtime::config::BridgeConfig;
use core_runtime::events::{EventBus, EventStream};
use core_statusbar::{
    ObservationState, StatusBarBridge, StatusBarError, StatusBarEvent, FRAME_DID_CHANGE,
    FRAME_WILL_CHANGE,
};
use std::sync::Arc;

struct Harness {
    native: Arc<HeadlessStatusBar>,
    bus: EventBus,
    bridge: StatusBarBridge,
}

impl Harness {
    fn new() -> Self {
        let native = Arc::new(HeadlessStatusBar::default());
        let bus = EventBus::new(64);
        let config = BridgeConfig::builder()
            .event_emitter(Arc::new(bus.clone()))
            .native_status_bar(native.clone())
            .build()
            .unwrap();

        Self {
            native,
            bus,
            bridge: StatusBarBridge::new(config),
        }
    }

    fn did_change_stream(&self) -> EventStream {
        EventStream::new(self.bus.subscribe()).named(FRAME_DID_CHANGE)
    }

    fn assert_observed_iff_listeners(&self) {
        let listening = self.bridge.listener_count() > 0;
        assert_eq!(self.native.observer_count() > 0, listening);
        assert_eq!(
            self.bridge.observation_state() == ObservationState::Observed,
            listening
        );
    }
}

fn frame(height: f64) -> StatusBarFrame {
    StatusBarFrame::new(0.0, 0.0, 375.0, height)
}

#[test]
fn test_three_changes_then_unsubscribe() {
    let harness = Harness::new();
    let mut stream = harness.did_change_stream();

    harness.bridge.add_listener(FRAME_DID_CHANGE).unwrap();
    for height in [20.0, 44.0, 0.0] {
        harness.native.change_frame(frame(height));
    }
    harness.bridge.remove_listeners(1).unwrap();
    harness.native.change_frame(frame(20.0));

    assert_eq!(stream.drain().len(), 3);
}

#[test]
fn test_events_match_native_changes_in_order() {
    let harness = Harness::new();
    let mut stream = harness.did_change_stream();
    harness.bridge.add_listener(FRAME_DID_CHANGE).unwrap();

    let frames: Vec<StatusBarFrame> = (0..10)
        .map(|i| StatusBarFrame::new(0.0, 0.0, 375.0 + i as f64, 20.0 + i as f64))
        .collect();
    for f in &frames {
        harness.native.change_frame(*f);
    }

    let delivered: Vec<StatusBarFrame> = stream
        .drain()
        .iter()
        .map(|event| StatusBarEvent::from_host_event(event).unwrap().frame())
        .collect();
    assert_eq!(delivered, frames);
}

#[test]
fn test_will_change_precedes_did_change() {
    let harness = Harness::new();
    let mut stream = EventStream::new(harness.bus.subscribe());
    harness.bridge.add_listener(FRAME_WILL_CHANGE).unwrap();

    harness.native.change_frame(frame(44.0));

    let names: Vec<String> = stream.drain().into_iter().map(|e| e.name).collect();
    assert_eq!(names, vec![FRAME_WILL_CHANGE, FRAME_DID_CHANGE]);
}

#[test]
fn test_no_events_without_listeners() {
    let harness = Harness::new();
    let mut stream = EventStream::new(harness.bus.subscribe());

    harness.native.change_frame(frame(44.0));

    assert!(stream.drain().is_empty());
}

#[test]
fn test_observer_attached_iff_listeners() {
    let harness = Harness::new();
    harness.assert_observed_iff_listeners();

    harness.bridge.add_listener(FRAME_DID_CHANGE).unwrap();
    harness.assert_observed_iff_listeners();

    harness.bridge.add_listener(FRAME_WILL_CHANGE).unwrap();
    harness.bridge.add_listener(FRAME_DID_CHANGE).unwrap();
    harness.assert_observed_iff_listeners();
    assert_eq!(harness.native.observer_count(), 1);

    harness.bridge.remove_listeners(2).unwrap();
    harness.assert_observed_iff_listeners();

    assert!(harness.bridge.remove_listeners(5).is_err());
    harness.assert_observed_iff_listeners();

    harness.bridge.remove_listeners(1).unwrap();
    harness.assert_observed_iff_listeners();

    harness.bridge.add_listener(FRAME_DID_CHANGE).unwrap();
    harness.assert_observed_iff_listeners();
}

#[test]
fn test_underflow_from_zero() {
    let harness = Harness::new();

    let err = harness.bridge.remove_listeners(1).unwrap_err();

    assert!(matches!(
        err,
        StatusBarError::ListenerUnderflow {
            requested: 1,
            active: 0
        }
    ));
    assert_eq!(harness.bridge.listener_count(), 0);
}

#[test]
fn test_set_style_scenarios() {
    let harness = Harness::new();

    harness.bridge.set_style("dark-content", false);
    assert_eq!(harness.native.snapshot().style, StatusBarStyle::DarkContent);

    harness.bridge.set_style(42, false);
    assert_eq!(harness.native.snapshot().style, StatusBarStyle::Default);

    harness.bridge.set_style(serde_json::json!(1), true);
    let state = harness.native.snapshot();
    assert_eq!(state.style, StatusBarStyle::LightContent);
    assert!(state.style_animated);
}

#[test]
fn test_set_style_is_idempotent() {
    let harness = Harness::new();

    harness.bridge.set_style("light-content", true);
    let once = harness.native.snapshot();

    harness.bridge.set_style("light-content", true);
    assert_eq!(harness.native.snapshot(), once);
}

#[test]
fn test_set_hidden_with_fade() {
    let harness = Harness::new();

    harness.bridge.set_hidden(true, "fade");

    let state = harness.native.snapshot();
    assert!(state.hidden);
    assert_eq!(state.hidden_animation, StatusBarAnimation::Fade);
}

#[test]
fn test_get_height_tracks_frame() {
    let harness = Harness::new();
    assert_eq!(harness.bridge.get_height(), 20.0);

    harness.native.change_frame(frame(47.0));
    assert_eq!(harness.bridge.get_height(), 47.0);
}

#[test]
fn test_native_attached_after_listeners() {
    let bus = EventBus::new(16);
    let mut stream = EventStream::new(bus.subscribe()).named(FRAME_DID_CHANGE);
    let bridge = StatusBarBridge::new(
        BridgeConfig::builder()
            .event_emitter(Arc::new(bus.clone()))
            .build()
            .unwrap(),
    );

    bridge.set_style("light-content", true);
    bridge.add_listener(FRAME_DID_CHANGE).unwrap();

    let native = Arc::new(HeadlessStatusBar::default());
    bridge.attach_native(native.clone());
    assert_eq!(native.observer_count(), 1);
    // Calls made before the native status bar existed are not replayed.
    assert_eq!(native.snapshot().style, StatusBarStyle::Default);

    native.change_frame(frame(44.0));
    assert_eq!(stream.drain().len(), 1);

    bridge.detach_native();
    assert_eq!(native.observer_count(), 0);
}

#[test]
fn test_attach_replaces_previous_native() {
    let harness = Harness::new();
    harness.bridge.add_listener(FRAME_DID_CHANGE).unwrap();

    let replacement = Arc::new(HeadlessStatusBar::default());
    harness.bridge.attach_native(replacement.clone());

    assert_eq!(harness.native.observer_count(), 0);
    assert_eq!(replacement.observer_count(), 1);
}

#[tokio::test]
async fn test_async_consumer_receives_event() {
    let harness = Harness::new();
    let mut stream = harness.did_change_stream();
    harness.bridge.add_listener(FRAME_DID_CHANGE).unwrap();

    harness.native.change_frame(frame(44.0));

    let event = stream.recv().await.unwrap();
    assert_eq!(
        StatusBarEvent::from_host_event(&event),
        Some(StatusBarEvent::FrameDidChange { frame: frame(44.0) })
    );
}

#[test]
fn test_subscribe_through_configured_event_bus() {
    let native = Arc::new(HeadlessStatusBar::default());
    let bridge = StatusBarBridge::from_builder(
        BridgeConfig::builder()
            .event_bus(EventBus::new(16))
            .native_status_bar(native.clone()),
    )
    .unwrap();
    let mut stream = bridge.subscribe().unwrap().named(FRAME_DID_CHANGE);

    bridge.add_listener(FRAME_DID_CHANGE).unwrap();
    native.change_frame(frame(44.0));

    let event = stream.try_recv().unwrap().unwrap();
    assert_eq!(
        StatusBarEvent::from_host_event(&event),
        Some(StatusBarEvent::FrameDidChange { frame: frame(44.0) })
    );
}

#[test]
fn test_subscribe_without_event_bus() {
    let harness = Harness::new();
    assert!(harness.bridge.subscribe().is_none());
}
