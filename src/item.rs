//! The selectable item entity.
//!
//! Items are caller-owned: the widget never creates, persists, or mutates
//! them, it only reads. Re-supplied collections replace the previous one
//! wholesale; there is no merging or diffing.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::SelectBoxError;

/// One candidate entry, identified by `key`, displayed and searched by
/// `label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectItem {
    pub key: String,
    pub label: String,
}

impl SelectItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Validate a caller-supplied collection before accepting it.
///
/// An empty collection is valid (it renders the empty state); an item with
/// an empty label or a duplicate key is rejected with a descriptive error.
pub fn validate_items(items: &[SelectItem]) -> Result<(), SelectBoxError> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
    for item in items {
        if item.label.is_empty() {
            return Err(SelectBoxError::EmptyLabel { key: item.key.clone() });
        }
        if !seen.insert(item.key.as_str()) {
            return Err(SelectBoxError::DuplicateKey { key: item.key.clone() });
        }
    }
    Ok(())
}
