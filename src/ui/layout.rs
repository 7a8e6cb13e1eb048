//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Areas inside the modal, one per enabled slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalChunks {
    pub title: Option<Rect>,
    pub search: Option<Rect>,
    pub list: Rect,
    pub cancel: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Split the modal interior into title / search / list / cancel areas.
    ///
    /// `area` is the full modal rectangle including its outer border; the
    /// slots are laid out inside it. Disabled slots get no area and the
    /// list absorbs the space.
    #[must_use]
    pub fn modal_layout(area: Rect, show_title: bool, show_search: bool) -> ModalChunks {
        let inner = area.inner(Margin {
            horizontal: 1,
            vertical: 1,
        });

        let mut constraints = Vec::with_capacity(4);
        if show_title {
            constraints.push(Constraint::Length(1));
        }
        if show_search {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Min(1));
        constraints.push(Constraint::Length(2));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let mut index = 0;
        let title = if show_title {
            index += 1;
            Some(chunks[index - 1])
        } else {
            None
        };
        let search = if show_search {
            index += 1;
            Some(chunks[index - 1])
        } else {
            None
        };

        ModalChunks {
            title,
            search,
            list: chunks[index],
            cancel: chunks[index + 1],
        }
    }

    /// Layout for the demo screen: one row per select box, a status line,
    /// and a footer with key hints.
    #[must_use]
    pub fn demo_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area)
            .to_vec()
    }
}
