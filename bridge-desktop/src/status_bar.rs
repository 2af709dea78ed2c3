//! Headless Status Bar Implementation

use bridge_traits::status_bar::{
    FrameChange, FrameObserver, NativeStatusBar, ObserverToken, StatusBarAnimation,
    StatusBarFrame, StatusBarStyle,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, trace};

/// Default frame: a portrait phone status bar.
const DEFAULT_FRAME: StatusBarFrame = StatusBarFrame {
    x: 0.0,
    y: 0.0,
    width: 375.0,
    height: 20.0,
};

/// Appearance currently applied to a [`HeadlessStatusBar`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarState {
    pub style: StatusBarStyle,
    /// Whether the last style change was requested as animated
    pub style_animated: bool,
    pub hidden: bool,
    /// Transition used by the last visibility change
    pub hidden_animation: StatusBarAnimation,
    pub network_activity_indicator_visible: bool,
    pub frame: StatusBarFrame,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            style: StatusBarStyle::Default,
            style_animated: false,
            hidden: false,
            hidden_animation: StatusBarAnimation::None,
            network_activity_indicator_visible: false,
            frame: DEFAULT_FRAME,
        }
    }
}

/// In-process status bar for desktop hosts and tests
///
/// Provides:
/// - Recording of applied style, visibility and indicator state
/// - Ordered observer registry for frame notifications
/// - [`change_frame`](Self::change_frame) to simulate a native geometry change
///
/// Observers are invoked outside the internal locks, so an observer may call
/// back into the status bar.
pub struct HeadlessStatusBar {
    state: Mutex<StatusBarState>,
    observers: Mutex<Vec<(ObserverToken, FrameObserver)>>,
    next_token: AtomicU64,
}

impl HeadlessStatusBar {
    /// Create a status bar with the given initial frame
    pub fn new(frame: StatusBarFrame) -> Self {
        Self {
            state: Mutex::new(StatusBarState {
                frame,
                ..StatusBarState::default()
            }),
            observers: Mutex::new(Vec::new()),
            next_token: AtomicU64::new(1),
        }
    }

    /// Copy of the currently applied appearance
    pub fn snapshot(&self) -> StatusBarState {
        self.lock_state().clone()
    }

    /// Number of registered frame observers
    pub fn observer_count(&self) -> usize {
        self.lock_observers().len()
    }

    /// Simulate a native frame change
    ///
    /// Delivers a will-change notification, updates the frame, then delivers a
    /// did-change notification, each to every observer in registration order.
    pub fn change_frame(&self, frame: StatusBarFrame) {
        debug!(
            x = frame.x,
            y = frame.y,
            width = frame.width,
            height = frame.height,
            "Status bar frame changing"
        );

        self.notify(FrameChange::will_change(frame));
        self.lock_state().frame = frame;
        self.notify(FrameChange::did_change(frame));
    }

    fn notify(&self, change: FrameChange) {
        // Snapshot so observers run without holding the registry lock.
        let observers: Vec<FrameObserver> = self
            .lock_observers()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();

        trace!(observers = observers.len(), phase = ?change.phase, "Delivering frame change");

        for observer in observers {
            observer(change);
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, StatusBarState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_observers(&self) -> MutexGuard<'_, Vec<(ObserverToken, FrameObserver)>> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for HeadlessStatusBar {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME)
    }
}

impl NativeStatusBar for HeadlessStatusBar {
    fn set_style(&self, style: StatusBarStyle, animated: bool) {
        let mut state = self.lock_state();
        state.style = style;
        state.style_animated = animated;
        debug!(%style, animated, "Status bar style applied");
    }

    fn set_hidden(&self, hidden: bool, animation: StatusBarAnimation) {
        let mut state = self.lock_state();
        state.hidden = hidden;
        state.hidden_animation = animation;
        debug!(hidden, %animation, "Status bar visibility applied");
    }

    fn set_network_activity_indicator_visible(&self, visible: bool) {
        self.lock_state().network_activity_indicator_visible = visible;
        debug!(visible, "Network activity indicator updated");
    }

    fn frame(&self) -> StatusBarFrame {
        self.lock_state().frame
    }

    fn add_frame_observer(&self, observer: FrameObserver) -> ObserverToken {
        let token = ObserverToken(self.next_token.fetch_add(1, Ordering::Relaxed));
        self.lock_observers().push((token, observer));
        debug!(token = token.0, "Frame observer added");
        token
    }

    fn remove_frame_observer(&self, token: ObserverToken) {
        let mut observers = self.lock_observers();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != token);

        if observers.len() == before {
            trace!(token = token.0, "Ignoring unknown frame observer token");
        } else {
            debug!(token = token.0, "Frame observer removed");
        }
    }
}
