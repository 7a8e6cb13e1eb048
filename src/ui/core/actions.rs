use crate::item::SelectItem;

/// State transitions reported by components to whoever hosts them.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Action {
    /// The selection modal was opened
    Opened,
    /// The selection modal was dismissed without changing the selection
    Closed,
    /// A row was activated; carries the full item so callers never need a
    /// second lookup. `SelectItem::label` is the label-only view of it.
    Selected(SelectItem),

    // App control
    Quit,
    #[default]
    None,
}
