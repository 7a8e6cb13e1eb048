//! Errors reported when a caller hands the widget a malformed item collection.

use thiserror::Error;

/// Items are validated once, when the collection crosses the widget boundary.
/// Everything downstream (filtering, selection) treats the collection as
/// well-formed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectBoxError {
    /// The label is both the display text and the search target, so an empty
    /// one would render as a blank, unsearchable row.
    #[error("item '{key}' has an empty label")]
    EmptyLabel { key: String },

    /// Item identity is the (key, label) pair; duplicate keys make the
    /// reported selection ambiguous.
    #[error("duplicate item key '{key}'")]
    DuplicateKey { key: String },
}
