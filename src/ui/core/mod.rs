//! Core UI functionality.
//!
//! This module contains the fundamental building blocks the widget and the
//! demo application are assembled from:
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Keyboard/mouse input polling
//!
//! Components implement the [`Component`] trait and report [`Action`]s back
//! to their host; the host decides what a transition means for the rest of
//! the application.

pub mod actions;
pub mod component;
pub mod event_handler;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
