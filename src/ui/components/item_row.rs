//! Row rendering for the selection list.
//!
//! The default row shows the item label, marking the current selection with
//! an icon and a stronger style. Callers can replace the whole row, the
//! cancel button, or the empty state with their own renderers; the widget
//! falls back to the built-ins when no override is supplied.

use ratatui::{
    style::Style,
    text::Line,
    widgets::{ListItem, Paragraph},
};

use crate::icons::IconService;
use crate::item::SelectItem;

/// Full replacement for a list row. Receives the item and whether it is the
/// current selection.
pub type ItemRenderer = Box<dyn Fn(&SelectItem, bool) -> ListItem<'static>>;

/// Full replacement for the cancel button. Receives whether the button is
/// focused; dismissal itself stays with the component.
pub type CancelRenderer = Box<dyn Fn(bool) -> Paragraph<'static>>;

/// Full replacement for the empty-state placeholder.
pub type EmptyRenderer = Box<dyn Fn() -> Paragraph<'static>>;

/// Invoked exactly once per successful row selection, with the full item.
pub type ValueChangeHandler = Box<dyn FnMut(&SelectItem)>;

/// Default row rendering: the label, with a marker and a stronger style
/// when the row is the current selection.
pub fn default_row(
    item: &SelectItem,
    is_current: bool,
    icons: &IconService,
    item_style: Style,
    selected_style: Style,
) -> ListItem<'static> {
    let line = if is_current {
        Line::styled(format!("{} {}", icons.selected_marker(), item.label), selected_style)
    } else {
        Line::styled(format!("  {}", item.label), item_style)
    };
    ListItem::new(line)
}
