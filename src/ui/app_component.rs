//! Demo application hosting two select boxes.
//!
//! The first box is built from the loaded configuration (title and search
//! bar per the config flags); the second shows the override hooks: a custom
//! row renderer, a custom empty state, and an initial value. A status line
//! echoes the last selection reported by either box.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{ListItem, Paragraph},
    Frame,
};

use crate::config::Config;
use crate::item::SelectItem;
use crate::ui::components::{SelectBoxComponent, SelectBoxOptions};
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;

/// Which trigger field currently has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Primary,
    Secondary,
}

pub struct AppComponent {
    primary: SelectBoxComponent,
    secondary: SelectBoxComponent,
    focus: Focus,
    last_selection: Option<SelectItem>,
}

impl AppComponent {
    /// Build the demo from the loaded configuration. `items` overrides the
    /// primary box's sample data when the user passed a JSON file.
    pub fn new(config: &Config, items: Option<Vec<SelectItem>>) -> anyhow::Result<Self> {
        let primary_items = items.unwrap_or_else(sample_fruits);

        let primary = SelectBoxComponent::new(
            primary_items,
            SelectBoxOptions {
                placeholder: config.ui.placeholder.clone(),
                show_title: config.ui.show_title,
                modal_title: config.ui.modal_title.clone(),
                show_search_bar: config.ui.show_search_bar,
                modal_width_percent: config.ui.modal_width_percent,
                modal_height_percent: config.ui.modal_height_percent,
                icon_theme: config.display.icon_theme,
                ..SelectBoxOptions::default()
            },
        )?
        .with_on_value_change(|item| log::info!("primary selection changed to '{}'", item.label));

        let secondary = SelectBoxComponent::new(
            sample_countries(),
            SelectBoxOptions {
                placeholder: "-- Country --".to_string(),
                initial_value: Some("France".to_string()),
                modal_height_percent: 40,
                icon_theme: config.display.icon_theme,
                ..SelectBoxOptions::default()
            },
        )?
        .with_item_renderer(|item, is_current| {
            let marker = if is_current { ">" } else { " " };
            ListItem::new(Line::styled(
                format!("{} {}  [{}]", marker, item.label, item.key),
                Style::default().fg(if is_current { Color::Cyan } else { Color::White }),
            ))
        })
        .with_empty_renderer(|| {
            Paragraph::new("Nothing to pick from")
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
        });

        let mut app = Self {
            primary,
            secondary,
            focus: Focus::Primary,
            last_selection: None,
        };
        app.primary.on_focus();
        Ok(app)
    }

    fn open_select(&mut self) -> Option<&mut SelectBoxComponent> {
        if self.primary.is_open() {
            Some(&mut self.primary)
        } else if self.secondary.is_open() {
            Some(&mut self.secondary)
        } else {
            None
        }
    }

    fn focused_select(&mut self) -> &mut SelectBoxComponent {
        match self.focus {
            Focus::Primary => &mut self.primary,
            Focus::Secondary => &mut self.secondary,
        }
    }

    fn switch_focus(&mut self) {
        self.focused_select().on_blur();
        self.focus = match self.focus {
            Focus::Primary => Focus::Secondary,
            Focus::Secondary => Focus::Primary,
        };
        self.focused_select().on_focus();
    }

    fn status_line(&self) -> String {
        match &self.last_selection {
            Some(item) => format!("Selected: {} (key {})", item.label, item.key),
            None => "Nothing selected yet".to_string(),
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // An open modal captures all keyboard input
        if let Some(select) = self.open_select() {
            return select.handle_key_events(key);
        }

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Tab | KeyCode::BackTab => {
                self.switch_focus();
                Action::None
            }
            _ => self.focused_select().handle_key_events(key),
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if let Some(select) = self.open_select() {
            return select.handle_mouse_events(mouse);
        }

        let action = self.primary.handle_mouse_events(mouse);
        if action != Action::None {
            return action;
        }
        self.secondary.handle_mouse_events(mouse)
    }

    fn update(&mut self, action: Action) -> Action {
        if let Action::Selected(item) = &action {
            self.last_selection = Some(item.clone());
        }
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::demo_layout(rect);

        let status = Paragraph::new(self.status_line())
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center);
        f.render_widget(status, chunks[2]);

        let hints = Paragraph::new("Tab switch field • Enter open • q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(hints, chunks[3]);

        // The open box renders last so its modal stays on top
        if self.primary.is_open() {
            self.secondary.render(f, chunks[1]);
            self.primary.render(f, chunks[0]);
        } else {
            self.primary.render(f, chunks[0]);
            self.secondary.render(f, chunks[1]);
        }
    }
}

fn sample_fruits() -> Vec<SelectItem> {
    vec![
        SelectItem::new("1", "Apple"),
        SelectItem::new("2", "Banana"),
        SelectItem::new("3", "Cherry"),
        SelectItem::new("4", "Dragonfruit"),
        SelectItem::new("5", "Elderberry"),
        SelectItem::new("6", "Fig"),
        SelectItem::new("7", "Grape"),
        SelectItem::new("8", "Mandarin"),
        SelectItem::new("9", "Mango"),
        SelectItem::new("10", "Papaya"),
    ]
}

fn sample_countries() -> Vec<SelectItem> {
    vec![
        SelectItem::new("de", "Germany"),
        SelectItem::new("fr", "France"),
        SelectItem::new("it", "Italy"),
        SelectItem::new("jp", "Japan"),
        SelectItem::new("no", "Norway"),
        SelectItem::new("pt", "Portugal"),
    ]
}
