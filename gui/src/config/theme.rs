// Theme specific configurations (colors and the top bar style table)
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn palette(self) -> &'static ThemePalette {
        match self {
            Theme::Dark => &ThemePalette::DARK,
            Theme::Light => &ThemePalette::LIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemePalette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub primary: &'static str,
    pub on_primary: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
}

impl ThemePalette {
    pub const DARK: ThemePalette = ThemePalette {
        background: "#1e1e1e",
        foreground: "#d1d4dc",
        primary: "#007acc",
        on_primary: "#ffffff",
        surface: "#333333",
        border: "#555555",
    };

    pub const LIGHT: ThemePalette = ThemePalette {
        background: "#ffffff",
        foreground: "#000000",
        primary: "#3f51b5",
        on_primary: "#ffffff",
        surface: "#fafafa",
        border: "#e0e0e0",
    };
}

/// Static inline-style table for the top bar and its dialogs.
///
/// Colors come from the active [`ThemePalette`]; these only carry layout.
#[derive(Debug, Clone, PartialEq)]
pub struct TopBarStyles {
    pub root: &'static str,
    pub bar: &'static str,
    pub title: &'static str,
    pub button: &'static str,
    pub backdrop: &'static str,
    pub dialog: &'static str,
}

pub const TOP_BAR_STYLES: TopBarStyles = TopBarStyles {
    root: "flex-grow: 1;",
    bar: "position: static; display: flex; align-items: center; min-height: 64px; padding: 0 24px; box-shadow: 0 2px 4px rgba(0,0,0,0.3);",
    title: "flex-grow: 1; font-size: 1.3125rem; font-weight: 500; margin: 0;",
    button: "background: transparent; color: inherit; border: none; padding: 6px 16px; font-size: 0.875rem; text-transform: capitalize; cursor: pointer;",
    backdrop: "position: fixed; inset: 0; background-color: rgba(0,0,0,0.5); display: flex; align-items: center; justify-content: center; z-index: 1300;",
    dialog: "min-width: 400px; max-width: 600px; padding: 24px; border-radius: 4px; box-shadow: 0 5px 15px rgba(0,0,0,0.5);",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_selects_its_palette() {
        assert_eq!(Theme::Dark.palette(), &ThemePalette::DARK);
        assert_eq!(Theme::Light.palette().background, "#ffffff");
    }

    #[test]
    fn theme_deserializes_lowercase() {
        let theme: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(theme, Theme::Light);
    }

    #[test]
    fn button_labels_are_capitalized() {
        assert!(TOP_BAR_STYLES.button.contains("text-transform: capitalize"));
        assert!(TOP_BAR_STYLES.title.contains("flex-grow: 1"));
    }
}
