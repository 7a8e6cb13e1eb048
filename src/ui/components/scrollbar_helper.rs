//! Scrollbar state and rendering for the modal's item list.
//!
//! The list chunk inside the modal is borderless, so the full chunk height
//! is usable content space; the scrollbar takes over the rightmost column
//! only when the list overflows.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Update the scrollbar with the current list size and highlight position.
    pub fn update_state(&mut self, total_items: usize, current_position: usize, viewport_height: usize) {
        self.state = self
            .state
            .content_length(total_items)
            .position(current_position)
            .viewport_content_length(viewport_height);
    }

    /// Whether `total_items` rows overflow a borderless area of `height` rows.
    pub fn needs_scrollbar(total_items: usize, height: usize) -> bool {
        total_items > height
    }

    /// Split `rect` into a list area and, when the content overflows, a
    /// one-column scrollbar area on the right.
    pub fn calculate_areas(rect: Rect, total_items: usize) -> (Rect, Option<Rect>) {
        if !Self::needs_scrollbar(total_items, rect.height as usize) {
            return (rect, None);
        }

        let list_area = Rect {
            width: rect.width.saturating_sub(1),
            ..rect
        };
        let scrollbar_area = Rect {
            x: rect.x + rect.width.saturating_sub(1),
            width: 1,
            ..rect
        };
        (list_area, Some(scrollbar_area))
    }

    /// Render the scrollbar if an area was reserved for it.
    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }
}
