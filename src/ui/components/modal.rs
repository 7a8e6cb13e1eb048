//! Shared render helpers for the selection modal.

use ratatui::{
    layout::Alignment,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates the outer modal block
pub fn create_modal_block<'a>(border_style: Style) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
}

/// Creates the search input field with a visual cursor
pub fn create_search_paragraph<'a>(
    input: &'a str,
    placeholder: &'a str,
    icon: &'a str,
    text_style: Style,
    placeholder_style: Style,
    border_style: Style,
) -> Paragraph<'a> {
    let cursor_char = "█";

    let line = if input.is_empty() {
        Line::from(vec![
            Span::styled(cursor_char, text_style),
            Span::styled(placeholder, placeholder_style),
        ])
    } else {
        Line::from(Span::styled(format!("{}{}", input, cursor_char), text_style))
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", icon))
        .border_style(border_style);

    Paragraph::new(line).block(input_block)
}

/// Creates the centered title row shown above the list
pub fn create_title_paragraph(title: &str, style: Style) -> Paragraph<'_> {
    Paragraph::new(title).style(style).alignment(Alignment::Center)
}

/// Creates the centered informational message shown when the rendered
/// collection is empty
pub fn create_empty_paragraph(message: &str, style: Style) -> Paragraph<'_> {
    Paragraph::new(message).style(style).alignment(Alignment::Center)
}

/// Creates the cancel button row, separated from the list by a top border
pub fn create_cancel_paragraph<'a>(label: &'a str, icon: &'a str, style: Style, border_style: Style) -> Paragraph<'a> {
    Paragraph::new(format!("{} {}", icon, label))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).border_style(border_style))
}
