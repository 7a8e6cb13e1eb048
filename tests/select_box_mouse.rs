use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use selectbox::ui::core::{Action, Component};
use selectbox::ui::LayoutManager;
use selectbox::{SelectBoxComponent, SelectBoxOptions, SelectItem};

const TRIGGER: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 3,
};

fn fruits() -> Vec<SelectItem> {
    vec![
        SelectItem::new("1", "Apple"),
        SelectItem::new("2", "Banana"),
        SelectItem::new("3", "Cherry"),
    ]
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// Render once so the component records its hit-test areas.
fn draw(terminal: &mut Terminal<TestBackend>, select: &mut SelectBoxComponent) {
    terminal.draw(|f| select.render(f, TRIGGER)).unwrap();
}

fn setup() -> (Terminal<TestBackend>, SelectBoxComponent) {
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let select = SelectBoxComponent::new(fruits(), SelectBoxOptions::default()).unwrap();
    (terminal, select)
}

#[test]
fn test_click_on_trigger_opens_the_modal() {
    let (mut terminal, mut select) = setup();
    draw(&mut terminal, &mut select);

    assert_eq!(select.handle_mouse_events(click(1, 1)), Action::Opened);
    assert!(select.is_open());
}

#[test]
fn test_click_elsewhere_while_closed_does_nothing() {
    let (mut terminal, mut select) = setup();
    draw(&mut terminal, &mut select);

    assert_eq!(select.handle_mouse_events(click(40, 20)), Action::None);
    assert!(!select.is_open());
}

#[test]
fn test_click_on_row_selects_it() {
    let (mut terminal, mut select) = setup();
    draw(&mut terminal, &mut select);
    select.handle_mouse_events(click(1, 1));
    draw(&mut terminal, &mut select);

    // Recompute the modal geometry through the same layout the widget uses
    let modal = LayoutManager::centered_rect(60, 60, Rect::new(0, 0, 80, 24));
    let chunks = LayoutManager::modal_layout(modal, false, false);

    let second_row = click(chunks.list.x + 1, chunks.list.y + 1);
    let action = select.handle_mouse_events(second_row);
    assert_eq!(action, Action::Selected(SelectItem::new("2", "Banana")));
    assert!(!select.is_open());
    assert_eq!(select.selected_label(), Some("Banana"));
}

#[test]
fn test_backdrop_click_dismisses_without_selection() {
    let (mut terminal, mut select) = setup();
    draw(&mut terminal, &mut select);
    select.handle_mouse_events(click(1, 1));
    draw(&mut terminal, &mut select);

    // The far corner is well outside any modal size the widget allows
    assert_eq!(select.handle_mouse_events(click(79, 23)), Action::Closed);
    assert!(!select.is_open());
    assert_eq!(select.selected_label(), None);
}

#[test]
fn test_cancel_button_click_dismisses_without_selection() {
    let (mut terminal, mut select) = setup();
    draw(&mut terminal, &mut select);
    select.handle_mouse_events(click(1, 1));
    draw(&mut terminal, &mut select);

    let modal = LayoutManager::centered_rect(60, 60, Rect::new(0, 0, 80, 24));
    let chunks = LayoutManager::modal_layout(modal, false, false);

    let cancel = click(chunks.cancel.x + chunks.cancel.width / 2, chunks.cancel.y + 1);
    assert_eq!(select.handle_mouse_events(cancel), Action::Closed);
    assert!(!select.is_open());
    assert_eq!(select.selected_label(), None);
}

#[test]
fn test_scroll_wheel_moves_the_highlight() {
    let (mut terminal, mut select) = setup();
    draw(&mut terminal, &mut select);
    select.handle_mouse_events(click(1, 1));
    draw(&mut terminal, &mut select);

    let scroll_down = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 40,
        row: 12,
        modifiers: KeyModifiers::NONE,
    };
    select.handle_mouse_events(scroll_down);

    let modal = LayoutManager::centered_rect(60, 60, Rect::new(0, 0, 80, 24));
    let chunks = LayoutManager::modal_layout(modal, false, false);
    let first_row = click(chunks.list.x + 1, chunks.list.y);
    let action = select.handle_mouse_events(first_row);

    // Clicking still selects by row position, independent of the highlight
    assert_eq!(action, Action::Selected(SelectItem::new("1", "Apple")));
}
