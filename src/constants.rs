//! Constants used throughout the application
//!
//! This module centralizes UI text, default values, and validation bounds
//! to improve maintainability and consistency.

// Default widget text
pub const DEFAULT_PLACEHOLDER: &str = "-- Select --";
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search...";
pub const DEFAULT_EMPTY_MESSAGE: &str = "No entries";
pub const DEFAULT_CANCEL_LABEL: &str = "CANCEL";
pub const DEFAULT_MODAL_TITLE: &str = "Select an entry";

// Modal sizing (percentages of the terminal area)
pub const MODAL_DEFAULT_WIDTH_PERCENT: u16 = 60;
pub const MODAL_DEFAULT_HEIGHT_PERCENT: u16 = 60;
pub const MODAL_MIN_PERCENT: u16 = 20;
pub const MODAL_MAX_PERCENT: u16 = 95;

// Demo application
pub const LOG_FILE_DEFAULT: &str = "selectbox.log";
pub const CONFIG_GENERATED: &str = "Default configuration written to";
