use super::*;
use std::collections::HashMap;

fn depth_for(vars: &[(&str, &str)]) -> ColorDepth {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ColorDepth::from_vars(|name| vars.get(name).cloned())
}

#[test]
fn each_depth_gets_its_own_palette() {
    let cases = [
        (ColorDepth::TrueColor, UiTheme::cosmic_dark(), UiTheme::cosmic_light()),
        (ColorDepth::Indexed256, UiTheme::indexed_dark(), UiTheme::indexed_light()),
        (ColorDepth::Basic, UiTheme::basic_dark(), UiTheme::basic_light()),
    ];
    for (depth, dark, light) in cases {
        assert_eq!(UiTheme::for_theme(Theme::Dark, depth), dark);
        assert_eq!(UiTheme::for_theme(Theme::Light, depth), light);
    }
    assert_ne!(UiTheme::indexed_dark(), UiTheme::basic_dark());
    assert_ne!(UiTheme::indexed_light(), UiTheme::basic_light());
}

#[test]
fn palettes_stay_within_their_depth() {
    for theme in [
        UiTheme::indexed_dark(),
        UiTheme::indexed_light(),
        UiTheme::basic_dark(),
        UiTheme::basic_light(),
    ] {
        for color in [theme.foreground, theme.border, theme.badge_bg, theme.pros_fg] {
            assert!(!matches!(color, Color::Rgb(..)), "{color:?} needs true color");
        }
    }
    for color in [UiTheme::basic_dark().border, UiTheme::basic_light().foreground] {
        assert!(matches!(color, Color::Indexed(n) if n < 16), "{color:?} is not basic");
    }
}

#[test]
fn detects_depth_from_terminal_vars() {
    assert_eq!(depth_for(&[("COLORTERM", "truecolor")]), ColorDepth::TrueColor);
    assert_eq!(depth_for(&[("TERM", "xterm-24bit")]), ColorDepth::TrueColor);
    assert_eq!(depth_for(&[("TERM", "xterm-256color")]), ColorDepth::Indexed256);
    assert_eq!(depth_for(&[("TERM", "xterm")]), ColorDepth::Basic);
    assert_eq!(depth_for(&[]), ColorDepth::Basic);
}

#[test]
fn override_wins_when_valid() {
    assert_eq!(
        depth_for(&[(COLOR_DEPTH_ENV, "256"), ("COLORTERM", "truecolor")]),
        ColorDepth::Indexed256
    );
    assert_eq!(
        depth_for(&[(COLOR_DEPTH_ENV, " Basic "), ("TERM", "xterm-256color")]),
        ColorDepth::Basic
    );
    assert_eq!(
        depth_for(&[(COLOR_DEPTH_ENV, "lots"), ("TERM", "xterm-256color")]),
        ColorDepth::Indexed256
    );
}

#[test]
fn dark_and_light_differ() {
    let dark = UiTheme::cosmic_dark();
    let light = UiTheme::cosmic_light();
    assert_ne!(dark.background, light.background);
    assert_ne!(dark.foreground, light.foreground);
    assert_ne!(dark.star_lit_fg, light.star_lit_fg);
}

#[test]
fn pros_and_cons_have_distinct_colors() {
    for theme in [
        UiTheme::cosmic_dark(),
        UiTheme::cosmic_light(),
        UiTheme::indexed_dark(),
        UiTheme::indexed_light(),
        UiTheme::basic_dark(),
        UiTheme::basic_light(),
    ] {
        assert_ne!(theme.pros_heading_fg, theme.cons_heading_fg);
        assert_ne!(theme.pros_fg, theme.cons_fg);
    }
}

#[test]
fn default_is_cosmic_dark() {
    assert_eq!(UiTheme::default(), UiTheme::cosmic_dark());
}
