//! The select box widget.
//!
//! A focusable trigger field showing the current selection or a placeholder.
//! Activating it opens a modal overlay with an optional title, an optional
//! search bar, the filterable item list, and a cancel button. Selecting a
//! row closes the modal and reports the chosen item; cancel, Esc, and
//! backdrop clicks close it silently without touching the selection.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::constants::{
    DEFAULT_CANCEL_LABEL, DEFAULT_EMPTY_MESSAGE, DEFAULT_MODAL_TITLE, DEFAULT_PLACEHOLDER,
    DEFAULT_SEARCH_PLACEHOLDER, MODAL_DEFAULT_HEIGHT_PERCENT, MODAL_DEFAULT_WIDTH_PERCENT, MODAL_MAX_PERCENT,
    MODAL_MIN_PERCENT,
};
use crate::error::SelectBoxError;
use crate::filter::filter_items;
use crate::icons::{IconService, IconTheme};
use crate::item::{validate_items, SelectItem};
use crate::ui::components::item_row::{self, CancelRenderer, EmptyRenderer, ItemRenderer, ValueChangeHandler};
use crate::ui::components::modal;
use crate::ui::components::scrollbar_helper::ScrollbarHelper;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;

/// Construction-time options. Every field has a sensible default; the
/// recognized set is fixed and documented here, there is no opaque
/// passthrough to inner widgets.
#[derive(Debug, Clone)]
pub struct SelectBoxOptions {
    /// Trigger text while nothing is selected
    pub placeholder: String,
    /// Label of the initially selected item. Values that match no item are
    /// ignored with a warning.
    pub initial_value: Option<String>,
    /// Show a title row at the top of the modal
    pub show_title: bool,
    pub modal_title: String,
    /// Show the search bar inside the modal
    pub show_search_bar: bool,
    pub search_placeholder: String,
    /// Message shown when the rendered collection is empty
    pub empty_message: String,
    pub cancel_label: String,
    /// Modal size as percentages of the terminal area, clamped to sane bounds
    pub modal_width_percent: u16,
    pub modal_height_percent: u16,
    pub icon_theme: IconTheme,
    pub style: SelectBoxStyle,
}

impl Default for SelectBoxOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            initial_value: None,
            show_title: false,
            modal_title: DEFAULT_MODAL_TITLE.to_string(),
            show_search_bar: false,
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            cancel_label: DEFAULT_CANCEL_LABEL.to_string(),
            modal_width_percent: MODAL_DEFAULT_WIDTH_PERCENT,
            modal_height_percent: MODAL_DEFAULT_HEIGHT_PERCENT,
            icon_theme: IconTheme::default(),
            style: SelectBoxStyle::default(),
        }
    }
}

/// One style per visual slot. The enumerated equivalent of the original
/// per-element style passthroughs.
#[derive(Debug, Clone)]
pub struct SelectBoxStyle {
    pub trigger_text: Style,
    pub trigger_placeholder: Style,
    pub trigger_border: Style,
    pub trigger_border_focused: Style,
    pub modal_border: Style,
    pub title: Style,
    pub search_text: Style,
    pub search_placeholder: Style,
    pub search_border: Style,
    pub list_item: Style,
    /// Applied to the row matching the current selection
    pub list_item_selected: Style,
    /// Applied to the row under the navigation highlight
    pub highlight: Style,
    pub cancel: Style,
    pub cancel_focused: Style,
    pub empty: Style,
}

impl Default for SelectBoxStyle {
    fn default() -> Self {
        Self {
            trigger_text: Style::default().fg(Color::White),
            trigger_placeholder: Style::default().fg(Color::Gray),
            trigger_border: Style::default().fg(Color::DarkGray),
            trigger_border_focused: Style::default().fg(Color::Cyan),
            modal_border: Style::default().fg(Color::DarkGray),
            title: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            search_text: Style::default().fg(Color::White),
            search_placeholder: Style::default().fg(Color::Gray),
            search_border: Style::default().fg(Color::DarkGray),
            list_item: Style::default().fg(Color::White),
            list_item_selected: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            highlight: Style::default().add_modifier(Modifier::REVERSED),
            cancel: Style::default().fg(Color::Red),
            cancel_focused: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD | Modifier::REVERSED),
            empty: Style::default().fg(Color::Gray),
        }
    }
}

/// Searchable modal select box.
///
/// Each mounted instance owns its state exclusively; two instances never
/// share anything. All transitions happen synchronously inside the event
/// handlers, so the filtered list is never stale relative to the keyword at
/// render time.
pub struct SelectBoxComponent {
    options: SelectBoxOptions,
    icons: IconService,

    items: Vec<SelectItem>,
    filtered: Vec<SelectItem>,
    keyword: String,
    cursor_position: usize,
    selected: Option<SelectItem>,
    open: bool,
    cancel_focused: bool,
    focused: bool,

    list_state: ListState,
    scrollbar_helper: ScrollbarHelper,

    on_value_change: Option<ValueChangeHandler>,
    item_renderer: Option<ItemRenderer>,
    cancel_renderer: Option<CancelRenderer>,
    empty_renderer: Option<EmptyRenderer>,

    // Areas from the last render, for mouse hit-testing
    trigger_area: Option<Rect>,
    modal_area: Option<Rect>,
    list_area: Option<Rect>,
    cancel_area: Option<Rect>,
}

impl SelectBoxComponent {
    /// Create a select box over a caller-supplied item collection.
    ///
    /// The collection is validated at this boundary; an item with an empty
    /// label or a duplicate key is rejected.
    pub fn new(items: Vec<SelectItem>, options: SelectBoxOptions) -> Result<Self, SelectBoxError> {
        validate_items(&items)?;

        let selected = match &options.initial_value {
            Some(value) => {
                let found = items.iter().find(|item| item.label == *value).cloned();
                if found.is_none() {
                    log::warn!("initial value '{}' matches no item label, ignoring", value);
                }
                found
            }
            None => None,
        };

        let icons = IconService::new(options.icon_theme);

        Ok(Self {
            options,
            icons,
            items,
            filtered: Vec::new(),
            keyword: String::new(),
            cursor_position: 0,
            selected,
            open: false,
            cancel_focused: false,
            focused: false,
            list_state: ListState::default(),
            scrollbar_helper: ScrollbarHelper::new(),
            on_value_change: None,
            item_renderer: None,
            cancel_renderer: None,
            empty_renderer: None,
            trigger_area: None,
            modal_area: None,
            list_area: None,
            cancel_area: None,
        })
    }

    /// Register the selection callback. Invoked exactly once per successful
    /// row selection, after the modal has closed.
    #[must_use]
    pub fn with_on_value_change(mut self, handler: impl FnMut(&SelectItem) + 'static) -> Self {
        self.on_value_change = Some(Box::new(handler));
        self
    }

    /// Replace the default row rendering.
    #[must_use]
    pub fn with_item_renderer(mut self, renderer: impl Fn(&SelectItem, bool) -> ListItem<'static> + 'static) -> Self {
        self.item_renderer = Some(Box::new(renderer));
        self
    }

    /// Replace the default cancel button rendering.
    #[must_use]
    pub fn with_cancel_renderer(mut self, renderer: impl Fn(bool) -> Paragraph<'static> + 'static) -> Self {
        self.cancel_renderer = Some(Box::new(renderer));
        self
    }

    /// Replace the default empty-state rendering.
    #[must_use]
    pub fn with_empty_renderer(mut self, renderer: impl Fn() -> Paragraph<'static> + 'static) -> Self {
        self.empty_renderer = Some(Box::new(renderer));
        self
    }

    /// Replace the item collection. The previous collection is dropped, not
    /// merged; the current selection is intentionally left alone even when
    /// its item is gone from the new collection.
    pub fn set_items(&mut self, items: Vec<SelectItem>) -> Result<(), SelectBoxError> {
        validate_items(&items)?;
        self.items = items;
        if self.open {
            self.apply_keyword();
        }
        Ok(())
    }

    pub fn set_icon_theme(&mut self, theme: IconTheme) {
        self.icons.set_theme(theme);
    }

    /// Open the selection modal. The keyword always starts empty, so the
    /// full collection is shown regardless of any search in a prior session.
    pub fn open(&mut self) -> Action {
        if self.open {
            return Action::None;
        }
        self.open = true;
        self.cancel_focused = false;

        // Start the highlight on the current selection when it is visible
        let start = self
            .selected
            .as_ref()
            .and_then(|selected| self.items.iter().position(|item| item == selected))
            .unwrap_or(0);
        self.list_state.select(if self.items.is_empty() { None } else { Some(start) });

        log::debug!("select box opened ({} items)", self.items.len());
        Action::Opened
    }

    /// Dismiss the modal without changing the selection. Also the target of
    /// the backdrop and back-action dismissals; none of them report a reason.
    pub fn close(&mut self) -> Action {
        if !self.open {
            return Action::None;
        }
        self.open = false;
        self.clear_search();
        self.cancel_focused = false;
        self.modal_area = None;
        self.list_area = None;
        self.cancel_area = None;

        log::debug!("select box closed");
        Action::Closed
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectItem> {
        self.selected.as_ref()
    }

    /// Label-only view of the selection, for callers that only want the
    /// display string.
    #[must_use]
    pub fn selected_label(&self) -> Option<&str> {
        self.selected.as_ref().map(|item| item.label.as_str())
    }

    /// The items the list is currently showing: the full collection while no
    /// keyword is active, the filtered subset otherwise.
    #[must_use]
    pub fn visible_items(&self) -> &[SelectItem] {
        if self.keyword.is_empty() {
            &self.items
        } else {
            &self.filtered
        }
    }

    /// Text the trigger field is showing.
    #[must_use]
    pub fn trigger_label(&self) -> &str {
        self.selected_label().unwrap_or(&self.options.placeholder)
    }

    fn clear_search(&mut self) {
        self.keyword.clear();
        self.filtered.clear();
        self.cursor_position = 0;
    }

    /// Recompute the filtered subset from the full collection and reset the
    /// highlight. Always synchronous, always from `items`, never from the
    /// previous filter result.
    fn apply_keyword(&mut self) {
        self.filtered = filter_items(&self.items, &self.keyword);
        let visible = self.visible_items().len();
        self.list_state.select(if visible == 0 { None } else { Some(0) });
    }

    fn select_highlighted(&mut self) -> Action {
        match self.list_state.selected() {
            Some(index) => self.select_at(index),
            None => Action::None,
        }
    }

    fn select_at(&mut self, index: usize) -> Action {
        let Some(item) = self.visible_items().get(index).cloned() else {
            return Action::None;
        };

        self.selected = Some(item.clone());
        self.close();

        log::debug!("selected '{}' (key '{}')", item.label, item.key);
        if let Some(handler) = self.on_value_change.as_mut() {
            handler(&item);
        }
        Action::Selected(item)
    }

    fn highlight_next(&mut self) {
        let len = self.visible_items().len();
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(index) => (index + 1) % len,
            None => 0,
        };
        self.list_state.select(Some(next));
        self.cancel_focused = false;
    }

    fn highlight_previous(&mut self) {
        let len = self.visible_items().len();
        if len == 0 {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(index) => (index + len - 1) % len,
            None => 0,
        };
        self.list_state.select(Some(previous));
        self.cancel_focused = false;
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos: usize = self
            .keyword
            .chars()
            .take(self.cursor_position)
            .map(|ch| ch.len_utf8())
            .sum();
        self.keyword.insert(byte_pos, c);
        self.cursor_position += 1;
        self.apply_keyword();
    }

    fn delete_backward(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let byte_pos: usize = self
            .keyword
            .chars()
            .take(self.cursor_position)
            .map(|ch| ch.len_utf8())
            .sum();
        let prev_char_len = self
            .keyword
            .chars()
            .nth(self.cursor_position - 1)
            .map(|ch| ch.len_utf8())
            .unwrap_or(1);
        self.keyword.remove(byte_pos - prev_char_len);
        self.cursor_position -= 1;
        self.apply_keyword();
    }

    fn delete_forward(&mut self) {
        let char_count = self.keyword.chars().count();
        if self.cursor_position >= char_count {
            return;
        }
        let byte_pos: usize = self
            .keyword
            .chars()
            .take(self.cursor_position)
            .map(|ch| ch.len_utf8())
            .sum();
        self.keyword.remove(byte_pos);
        self.apply_keyword();
    }

    fn handle_open_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => self.close(),
            KeyCode::Tab => {
                self.cancel_focused = !self.cancel_focused;
                Action::None
            }
            KeyCode::Enter => {
                if self.cancel_focused {
                    self.close()
                } else {
                    self.select_highlighted()
                }
            }
            KeyCode::Up => {
                self.highlight_previous();
                Action::None
            }
            KeyCode::Down => {
                self.highlight_next();
                Action::None
            }
            KeyCode::Char(c) if self.options.show_search_bar => {
                self.insert_char(c);
                Action::None
            }
            KeyCode::Backspace if self.options.show_search_bar => {
                self.delete_backward();
                Action::None
            }
            KeyCode::Delete if self.options.show_search_bar => {
                self.delete_forward();
                Action::None
            }
            KeyCode::Left if self.options.show_search_bar => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                }
                Action::None
            }
            KeyCode::Right if self.options.show_search_bar => {
                let char_count = self.keyword.chars().count();
                if self.cursor_position < char_count {
                    self.cursor_position += 1;
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn hit(area: Option<Rect>, column: u16, row: u16) -> bool {
        match area {
            Some(area) => {
                column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
            }
            None => false,
        }
    }

    fn render_trigger(&mut self, f: &mut Frame, rect: Rect) {
        self.trigger_area = Some(rect);

        let style = &self.options.style;
        let border_style = if self.focused {
            style.trigger_border_focused
        } else {
            style.trigger_border
        };
        let text_style = if self.selected.is_some() {
            style.trigger_text
        } else {
            style.trigger_placeholder
        };

        let arrow = self.icons.dropdown_arrow();
        let inner_width = rect.width.saturating_sub(2) as usize;
        let text_width = inner_width.saturating_sub(arrow.width() + 2);
        let label = truncate_to_width(self.trigger_label(), text_width);
        let padding = text_width.saturating_sub(label.width());

        let line = Line::styled(format!(" {}{} {}", label, " ".repeat(padding), arrow), text_style);
        let paragraph = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border_style),
        );
        f.render_widget(paragraph, rect);
    }

    fn render_modal(&mut self, f: &mut Frame) {
        let style = self.options.style.clone();
        let width = self
            .options
            .modal_width_percent
            .clamp(MODAL_MIN_PERCENT, MODAL_MAX_PERCENT);
        let height = self
            .options
            .modal_height_percent
            .clamp(MODAL_MIN_PERCENT, MODAL_MAX_PERCENT);

        let modal_area = LayoutManager::centered_rect(width, height, f.area());
        self.modal_area = Some(modal_area);
        f.render_widget(Clear, modal_area);
        f.render_widget(modal::create_modal_block(style.modal_border), modal_area);

        let chunks = LayoutManager::modal_layout(modal_area, self.options.show_title, self.options.show_search_bar);

        if let Some(title_area) = chunks.title {
            f.render_widget(
                modal::create_title_paragraph(&self.options.modal_title, style.title),
                title_area,
            );
        }

        if let Some(search_area) = chunks.search {
            f.render_widget(
                modal::create_search_paragraph(
                    &self.keyword,
                    &self.options.search_placeholder,
                    self.icons.search(),
                    style.search_text,
                    style.search_placeholder,
                    style.search_border,
                ),
                search_area,
            );
        }

        self.render_list(f, chunks.list);
        self.render_cancel(f, chunks.cancel);
    }

    fn render_list(&mut self, f: &mut Frame, rect: Rect) {
        let style = &self.options.style;
        let visible = self.visible_items();

        if visible.is_empty() {
            self.list_area = None;
            match &self.empty_renderer {
                Some(renderer) => f.render_widget(renderer(), rect),
                None => f.render_widget(modal::create_empty_paragraph(&self.options.empty_message, style.empty), rect),
            }
            return;
        }

        let rows: Vec<ListItem> = visible
            .iter()
            .map(|item| {
                let is_current = self.selected.as_ref() == Some(item);
                match &self.item_renderer {
                    Some(renderer) => renderer(item, is_current),
                    None => item_row::default_row(item, is_current, &self.icons, style.list_item, style.list_item_selected),
                }
            })
            .collect();

        let total = rows.len();
        let (list_area, scrollbar_area) = ScrollbarHelper::calculate_areas(rect, total);
        self.list_area = Some(list_area);
        self.scrollbar_helper
            .update_state(total, self.list_state.selected().unwrap_or(0), list_area.height as usize);

        let highlight = if self.cancel_focused {
            Style::default()
        } else {
            style.highlight
        };
        let list = List::new(rows).highlight_style(highlight);
        f.render_stateful_widget(list, list_area, &mut self.list_state);
        self.scrollbar_helper.render(f, scrollbar_area);
    }

    fn render_cancel(&mut self, f: &mut Frame, rect: Rect) {
        self.cancel_area = Some(rect);
        let style = &self.options.style;
        let cancel_style = if self.cancel_focused {
            style.cancel_focused
        } else {
            style.cancel
        };

        match &self.cancel_renderer {
            Some(renderer) => f.render_widget(renderer(self.cancel_focused), rect),
            None => f.render_widget(
                modal::create_cancel_paragraph(
                    &self.options.cancel_label,
                    self.icons.cancel(),
                    cancel_style,
                    style.modal_border,
                ),
                rect,
            ),
        }
    }
}

impl Component for SelectBoxComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.open {
            self.handle_open_key(key)
        } else {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.open(),
                _ => Action::None,
            }
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let (column, row) = (mouse.column, mouse.row);
                if self.open {
                    if Self::hit(self.cancel_area, column, row) {
                        return self.close();
                    }
                    if Self::hit(self.list_area, column, row) {
                        let list_top = self.list_area.map(|area| area.y).unwrap_or(row);
                        let index = self.list_state.offset() + (row - list_top) as usize;
                        if index < self.visible_items().len() {
                            self.list_state.select(Some(index));
                            return self.select_at(index);
                        }
                        return Action::None;
                    }
                    if !Self::hit(self.modal_area, column, row) {
                        // Backdrop tap
                        return self.close();
                    }
                    Action::None
                } else if Self::hit(self.trigger_area, column, row) {
                    self.open()
                } else {
                    Action::None
                }
            }
            MouseEventKind::ScrollUp if self.open => {
                self.highlight_previous();
                Action::None
            }
            MouseEventKind::ScrollDown if self.open => {
                self.highlight_next();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.render_trigger(f, rect);
        if self.open {
            self.render_modal(f);
        }
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}

/// Truncate a label to at most `max_width` columns, appending an ellipsis
/// when anything was cut.
fn truncate_to_width(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }

    let mut result = String::new();
    let mut used = 0;
    for ch in label.chars() {
        let char_width = ch.to_string().width();
        if used + char_width + 1 > max_width {
            break;
        }
        result.push(ch);
        used += char_width;
    }
    result.push('…');
    result
}
