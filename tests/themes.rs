// Integration tests for theme palette invariants.
// Native-friendly: the palette is plain static data.

use std::collections::HashSet;

use wave_rider::game::theme::{THEMES, default_theme, theme_by_name};

fn assert_rrggbb(color: &str, what: &str, theme: &str) {
    assert!(
        color.len() == 7 && color.starts_with('#'),
        "{what} of '{theme}' is not #rrggbb: '{color}'"
    );
    for c in color[1..].chars() {
        assert!(
            c.is_ascii_hexdigit() && !c.is_ascii_uppercase(),
            "{what} of '{theme}' has invalid hex char '{c}' in '{color}'"
        );
    }
}

#[test]
fn theme_names_are_unique_and_nonempty() {
    assert!(!THEMES.is_empty());
    let mut seen = HashSet::new();
    for t in THEMES.iter() {
        assert!(!t.name.is_empty(), "unnamed theme");
        assert!(seen.insert(t.name), "duplicate theme name '{}'", t.name);
    }
}

#[test]
fn theme_colors_are_well_formed() {
    for t in THEMES.iter() {
        assert_rrggbb(t.background, "background", t.name);
        assert_rrggbb(t.wave, "wave", t.name);
        assert_rrggbb(t.rider, "rider", t.name);
        assert_rrggbb(t.obstacle, "obstacle", t.name);
        assert_rrggbb(t.text, "text", t.name);
    }
}

#[test]
fn playfield_colors_contrast_with_the_background() {
    for t in THEMES.iter() {
        assert_ne!(t.wave, t.background, "invisible wave in '{}'", t.name);
        assert_ne!(t.rider, t.background, "invisible rider in '{}'", t.name);
        assert_ne!(t.obstacle, t.background, "invisible obstacles in '{}'", t.name);
        assert_ne!(t.text, t.background, "invisible text in '{}'", t.name);
    }
}

#[test]
fn lookup_is_total() {
    for t in THEMES.iter() {
        assert_eq!(theme_by_name(t.name).name, t.name);
    }
    // unknown names resolve to the default instead of failing
    assert_eq!(theme_by_name("nonexistent").name, default_theme().name);
}
