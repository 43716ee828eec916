use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

/// Visual variables for the dark theme, in the order they are written.
const DARK_VARIABLES: [(&str, &str); 16] = [
    ("--bg-primary", "#0f0f0f"),
    ("--bg-secondary", "#1a1a1a"),
    ("--bg-tertiary", "#2a2a2a"),
    ("--text-primary", "#ffffff"),
    ("--text-secondary", "#b0b0b0"),
    ("--text-muted", "#808080"),
    ("--accent-primary", "#00d4ff"),
    ("--accent-secondary", "#ff6b6b"),
    ("--accent-gradient", "linear-gradient(135deg, #00d4ff 0%, #ff6b6b 100%)"),
    ("--accent-gradient-alt", "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"),
    ("--border-color", "#333333"),
    ("--shadow-color", "rgba(0, 0, 0, 0.5)"),
    ("--card-bg", "#1f1f1f"),
    ("--success-color", "#00ff88"),
    ("--warning-color", "#ffaa00"),
    ("--error-color", "#ff4757"),
];

/// Visual variables for the light theme. Same names, same order as the dark table.
const LIGHT_VARIABLES: [(&str, &str); 16] = [
    ("--bg-primary", "#ffffff"),
    ("--bg-secondary", "#f8fafc"),
    ("--bg-tertiary", "#f1f5f9"),
    ("--text-primary", "#1a202c"),
    ("--text-secondary", "#4a5568"),
    ("--text-muted", "#718096"),
    ("--accent-primary", "#3182ce"),
    ("--accent-secondary", "#e53e3e"),
    ("--accent-gradient", "linear-gradient(135deg, #3182ce 0%, #e53e3e 100%)"),
    ("--accent-gradient-alt", "linear-gradient(135deg, #667eea 0%, #764ba2 100%)"),
    ("--border-color", "#e2e8f0"),
    ("--shadow-color", "rgba(0, 0, 0, 0.1)"),
    ("--card-bg", "#ffffff"),
    ("--success-color", "#38a169"),
    ("--warning-color", "#d69e2e"),
    ("--error-color", "#e53e3e"),
];

/// Appearance of the scroll bar for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbarColors {
    pub track: &'static str,
    pub thumb: &'static str,
}

/// Label and icon shown on the theme toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleAppearance {
    pub icon: &'static str,
    pub label: &'static str,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn opposite(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn from_dark_flag(is_dark: bool) -> Theme {
        if is_dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Class name placed on the root surface, e.g. `dark-theme`.
    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Dark => "dark-theme",
            Theme::Light => "light-theme",
        }
    }

    pub fn variables(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Theme::Dark => &DARK_VARIABLES,
            Theme::Light => &LIGHT_VARIABLES,
        }
    }

    pub fn variable(&self, name: &str) -> Option<&'static str> {
        self.variables()
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    /// The toggle always advertises the theme it would switch to.
    pub fn toggle_appearance(&self) -> ToggleAppearance {
        match self {
            Theme::Dark => ToggleAppearance {
                icon: "@-2circle",
                label: "Switch to light mode",
            },
            Theme::Light => ToggleAppearance {
                icon: "@-2square",
                label: "Switch to dark mode",
            },
        }
    }

    pub fn scrollbar_colors(&self) -> ScrollbarColors {
        match self {
            Theme::Dark => ScrollbarColors {
                track: "#1a1a1a",
                thumb: "linear-gradient(135deg, #00d4ff 0%, #ff6b6b 100%)",
            },
            Theme::Light => ScrollbarColors {
                track: "#f1f5f9",
                thumb: "linear-gradient(135deg, #3182ce 0%, #e53e3e 100%)",
            },
        }
    }

    /// Brightness multiplier for the hero's floating icons.
    pub fn icon_brightness(&self) -> f32 {
        match self {
            Theme::Dark => 1.0,
            Theme::Light => 0.8,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}
