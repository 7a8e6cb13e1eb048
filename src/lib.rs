//! selectbox - a searchable modal select box for Ratatui
//!
//! This library provides a single reusable widget: a focusable trigger field
//! that opens a modal overlay with an optional title, an optional search bar,
//! a filterable item list, and a cancel button. The caller owns the item
//! collection; the widget reports the chosen item back through an
//! [`Action`](ui::core::Action) and an optional callback.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Demo application configuration management
//! * [`filter`] - Keyword filtering over item collections
//! * [`item`] - The selectable item entity and boundary validation
//! * [`icons`] - Icon themes for the widget's glyphs
//! * [`ui`] - Terminal user interface components and rendering

/// Demo application configuration management
pub mod config;

/// Application constants and default values
pub mod constants;

/// Typed errors reported at the item-collection boundary
pub mod error;

/// Keyword filtering over item collections
pub mod filter;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// The selectable item entity and boundary validation
pub mod item;

/// Logging setup for the demo binary
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

// Re-export the main types for convenient access
pub use error::SelectBoxError;
pub use item::SelectItem;
pub use ui::components::{SelectBoxComponent, SelectBoxOptions, SelectBoxStyle};
