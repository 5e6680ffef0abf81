// Color themes for the canvas and overlays.
// "classic" is the house palette and the fallback; the rest are alternates
// offered by the theme select. All colors are #rrggbb so they can go straight
// into canvas fill/stroke styles and element style attributes.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub wave: &'static str,
    pub rider: &'static str,
    pub obstacle: &'static str,
    pub text: &'static str,
}

pub static THEMES: [Theme; 5] = [
    Theme {
        name: "classic",
        background: "#1a1a1d",
        wave: "#c3073f",
        rider: "#0000ff",
        obstacle: "#ff0000",
        text: "#ffffff",
    },
    Theme {
        name: "midnight",
        background: "#0b1026",
        wave: "#4fc3f7",
        rider: "#ffd54f",
        obstacle: "#ef5350",
        text: "#e8eaf6",
    },
    Theme {
        name: "daylight",
        background: "#f5f7fa",
        wave: "#1565c0",
        rider: "#e65100",
        obstacle: "#2e7d32",
        text: "#212121",
    },
    Theme {
        name: "synthwave",
        background: "#12041f",
        wave: "#ff2e88",
        rider: "#00e5ff",
        obstacle: "#ffe600",
        text: "#f8e1ff",
    },
    Theme {
        name: "mono",
        background: "#000000",
        wave: "#ffffff",
        rider: "#ffffff",
        obstacle: "#ffffff",
        text: "#ffffff",
    },
];

/// Lookup by select value; unknown names fall back to the first entry.
pub fn theme_by_name(name: &str) -> &'static Theme {
    THEMES.iter().find(|t| t.name == name).unwrap_or(&THEMES[0])
}

pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}
