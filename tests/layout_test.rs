use ratatui::layout::Rect;
use selectbox::ui::LayoutManager;

#[test]
fn test_centered_rect_dimensions() {
    let area = Rect::new(0, 0, 100, 100);
    let centered = LayoutManager::centered_rect(60, 40, area);

    assert_eq!(centered.width, 60);
    assert_eq!(centered.height, 40);
    assert_eq!(centered.x, 20);
    assert_eq!(centered.y, 30);
}

#[test]
fn test_centered_rect_is_inside_area() {
    let area = Rect::new(5, 3, 80, 24);
    let centered = LayoutManager::centered_rect(50, 50, area);

    assert!(centered.x >= area.x);
    assert!(centered.y >= area.y);
    assert!(centered.x + centered.width <= area.x + area.width);
    assert!(centered.y + centered.height <= area.y + area.height);
}

#[test]
fn test_modal_layout_with_all_slots() {
    let modal = Rect::new(20, 10, 60, 20);
    let chunks = LayoutManager::modal_layout(modal, true, true);

    let title = chunks.title.expect("title slot enabled");
    let search = chunks.search.expect("search slot enabled");

    // Slots stack downward inside the modal border
    assert_eq!(title.y, 11);
    assert_eq!(title.height, 1);
    assert_eq!(search.y, 12);
    assert_eq!(search.height, 3);
    assert_eq!(chunks.list.y, 15);
    assert_eq!(chunks.cancel.height, 2);
    assert_eq!(chunks.cancel.y + chunks.cancel.height, 29);

    // All slots share the interior width
    assert_eq!(title.width, 58);
    assert_eq!(chunks.list.width, 58);
}

#[test]
fn test_modal_layout_without_optional_slots() {
    let modal = Rect::new(20, 10, 60, 20);
    let chunks = LayoutManager::modal_layout(modal, false, false);

    assert!(chunks.title.is_none());
    assert!(chunks.search.is_none());

    // The list absorbs the space the disabled slots would have used
    assert_eq!(chunks.list.y, 11);
    assert_eq!(chunks.list.height, 16);
    assert_eq!(chunks.cancel.height, 2);
}

#[test]
fn test_modal_layout_search_only() {
    let modal = Rect::new(0, 0, 40, 16);
    let chunks = LayoutManager::modal_layout(modal, false, true);

    assert!(chunks.title.is_none());
    let search = chunks.search.expect("search slot enabled");
    assert_eq!(search.y, 1);
    assert_eq!(chunks.list.y, 4);
}

#[test]
fn test_demo_layout_rows() {
    let area = Rect::new(0, 0, 80, 24);
    let chunks = LayoutManager::demo_layout(area);

    assert_eq!(chunks.len(), 4);
    assert_eq!(chunks[0].height, 3);
    assert_eq!(chunks[1].height, 3);
    assert_eq!(chunks[3].height, 1);
}
