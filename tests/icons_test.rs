use selectbox::icons::*;

#[test]
fn test_default_theme() {
    let service = IconService::default();
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_theme_switching() {
    let mut service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.theme(), IconTheme::Emoji);

    service.set_theme(IconTheme::Ascii);
    assert_eq!(service.theme(), IconTheme::Ascii);
}

#[test]
fn test_ascii_icons() {
    let service = IconService::new(IconTheme::Ascii);
    assert_eq!(service.dropdown_arrow(), "v");
    assert_eq!(service.selected_marker(), "*");
    assert_eq!(service.cancel(), "x");
}

#[test]
fn test_unicode_icons() {
    let service = IconService::new(IconTheme::Unicode);
    assert_eq!(service.dropdown_arrow(), "▼");
    assert_eq!(service.selected_marker(), "✓");
    assert_eq!(service.cancel(), "✗");
}

#[test]
fn test_emoji_icons() {
    let service = IconService::new(IconTheme::Emoji);
    assert_eq!(service.dropdown_arrow(), "🔽");
    assert_eq!(service.selected_marker(), "✅");
}

#[test]
fn test_icon_set_matches_theme() {
    let service = IconService::new(IconTheme::Unicode);
    let icons = service.icons();
    assert_eq!(icons.search, service.search());
    assert_eq!(icons.cancel, service.cancel());
}
