//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the status bar bridge:
//! - Logging and tracing infrastructure
//! - Configuration management
//! - Event bus system
//!
//! ## Overview
//!
//! This crate contains the runtime utilities the bridge depends on. It
//! establishes the configuration contract with the host, the logging
//! conventions, and the default event channel events are written into.

pub mod config;
pub mod error;
pub mod events;
pub mod logging;

pub use error::{Error, Result};
