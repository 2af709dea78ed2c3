//! # Status Bar Core
//!
//! Type-safe bridge between an embedded scripting layer and the host status
//! bar.
//!
//! ## Overview
//!
//! - [`convert`] - total conversion from scripting values ([`RawInput`]) to
//!   [`StatusBarStyle`](bridge_traits::StatusBarStyle) and
//!   [`StatusBarAnimation`](bridge_traits::StatusBarAnimation)
//! - [`bridge`] - [`StatusBarBridge`], applying appearance changes and
//!   forwarding native frame notifications as events
//! - [`event`] - [`StatusBarEvent`] names and payloads
//!
//! ## Caller surface
//!
//! | Operation                                | Effect |
//! |------------------------------------------|--------|
//! | `set_style(style, animated)`             | Apply a style tag or code |
//! | `set_hidden(hidden, animation)`          | Toggle visibility with a transition |
//! | `add_listener(event_name)`               | Register a listener; first one starts observing |
//! | `remove_listeners(count)`                | Unregister; last one stops observing |
//! | `get_height()`                           | Current status bar height |
//! | `set_network_activity_indicator_visible` | Toggle the activity spinner |

pub mod bridge;
pub mod convert;
pub mod error;
pub mod event;

pub use bridge::{ObservationState, StatusBarBridge};
pub use convert::{to_status_bar_animation, to_status_bar_style, FromRawInput, RawInput};
pub use error::{Result, StatusBarError};
pub use event::{StatusBarEvent, FRAME_DID_CHANGE, FRAME_WILL_CHANGE, SUPPORTED_EVENTS};
