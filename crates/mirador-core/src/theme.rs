//! Named color themes for dashboard rendering.
//!
//! A theme is an explicit, read-only object threaded into the styling pass;
//! nothing in the crate reads ambient theme state.

use crate::color::Color;
use std::collections::HashMap;

/// A dashboard color theme.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme name.
    pub name: String,
    /// Whether this is a dark theme (drives contrast adjustment).
    pub dark: bool,
    /// Background color.
    pub background: Color,
    /// Foreground (text) color.
    pub foreground: Color,
    /// Border color.
    pub border: Color,
    /// Dim/inactive color.
    pub dim: Color,
    /// Theme variable table for `$name` color references.
    variables: HashMap<String, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap_or(Color::WHITE)
}

fn variables(entries: &[(&str, &str)]) -> HashMap<String, Color> {
    entries
        .iter()
        .map(|(name, value)| ((*name).to_string(), hex(value)))
        .collect()
}

impl Theme {
    /// Tokyo Night theme (dark, modern). The default.
    #[must_use]
    pub fn tokyo_night() -> Self {
        Self {
            name: "tokyo-night".to_string(),
            dark: true,
            background: hex("#1a1b26"),
            foreground: hex("#c0caf5"),
            border: hex("#414868"),
            dim: hex("#565f89"),
            variables: variables(&[
                ("success", "#9ece6a"),
                ("error", "#f7768e"),
                ("warning", "#e0af68"),
                ("primary", "#7aa2f7"),
                ("secondary", "#bb9af7"),
                ("accent", "#7dcfff"),
            ]),
        }
    }

    /// Dracula theme (dark, purple).
    #[must_use]
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            dark: true,
            background: hex("#282a36"),
            foreground: hex("#f8f8f2"),
            border: hex("#6272a4"),
            dim: hex("#44475a"),
            variables: variables(&[
                ("success", "#50fa7b"),
                ("error", "#ff5555"),
                ("warning", "#f1fa8c"),
                ("primary", "#bd93f9"),
                ("secondary", "#ff79c6"),
                ("accent", "#8be9fd"),
            ]),
        }
    }

    /// Nord theme (cool, arctic).
    #[must_use]
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            dark: true,
            background: hex("#2e3440"),
            foreground: hex("#eceff4"),
            border: hex("#4c566a"),
            dim: hex("#3b4252"),
            variables: variables(&[
                ("success", "#a3be8c"),
                ("error", "#bf616a"),
                ("warning", "#ebcb8b"),
                ("primary", "#81a1c1"),
                ("secondary", "#b48ead"),
                ("accent", "#88c0d0"),
            ]),
        }
    }

    /// Solarized Light theme.
    #[must_use]
    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light".to_string(),
            dark: false,
            background: hex("#fdf6e3"),
            foreground: hex("#657b83"),
            border: hex("#93a1a1"),
            dim: hex("#eee8d5"),
            variables: variables(&[
                ("success", "#859900"),
                ("error", "#dc322f"),
                ("warning", "#b58900"),
                ("primary", "#268bd2"),
                ("secondary", "#6c71c4"),
                ("accent", "#2aa198"),
            ]),
        }
    }

    /// Look up a theme preset by name.
    ///
    /// Names are matched case-insensitively with `-` and `_` treated as
    /// equivalent, so "tokyo-night" and "tokyo_night" both resolve.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace('-', "_").as_str() {
            "tokyo_night" => Some(Self::tokyo_night()),
            "dracula" => Some(Self::dracula()),
            "nord" => Some(Self::nord()),
            "solarized_light" => Some(Self::solarized_light()),
            _ => None,
        }
    }

    /// Names of all built-in presets.
    #[must_use]
    pub fn preset_names() -> &'static [&'static str] {
        &["tokyo-night", "dracula", "nord", "solarized-light"]
    }

    /// Look up a theme variable (the `name` of a `$name` reference).
    ///
    /// Dashes in the variable name are treated as underscores.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<Color> {
        let key = name.replace('-', "_");
        self.variables.get(&key).copied()
    }
}
