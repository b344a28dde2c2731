//! Theme resolution and the active style palette.
//!
//! The theme mode is never persisted: it is derived on every screen
//! creation from the stored primary color. A light primary selects the
//! light style, anything else the dark style.

use crate::color::Rgb;
use crate::config::Config;
use ratatui::style::{Color, Modifier, Style};
use std::sync::RwLock;
use tracing::warn;

/// Status bar background used in full-screen mode when the transparent
/// status bar preference is off.
pub const STATUS_BAR_BG: Rgb = Rgb::new(0x26, 0x32, 0x38);

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    mode: ThemeMode::Dark,
    primary: Color::Cyan,
    accent: Color::Magenta,
    text: Color::White,
    text_muted: Color::DarkGray,
    border: Color::DarkGray,
    border_focused: Color::Cyan,
    highlight_bg: Color::DarkGray,
    background: Color::Reset,
});

/// Install the palette for the given mode (called during screen creation,
/// before the window exists).
pub fn init_theme(mode: ThemeMode) {
    let mut theme = THEME.write().unwrap();
    *theme = Theme::new(mode);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap().clone()
}

/// Light or dark style, derived from the persisted primary color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// Luminance test on the stored primary color: light primary, light
    /// style; everything else, dark style.
    pub fn resolve(config: &Config) -> Self {
        if primary_color(config).is_light() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

fn stored_color(raw: &str, key: &str, fallback: Rgb) -> Rgb {
    match Rgb::from_hex(raw) {
        Ok(color) => color,
        Err(_) => {
            warn!("unreadable {key} {raw:?} in preferences, using {fallback}");
            fallback
        }
    }
}

/// Primary accent color from the preference store.
pub fn primary_color(config: &Config) -> Rgb {
    stored_color(
        &config.primary_color,
        "primary_color",
        Rgb::new(0xec, 0xef, 0xf1),
    )
}

/// Window background color from the preference store.
pub fn background_color(config: &Config) -> Rgb {
    stored_color(
        &config.background_color,
        "background_color",
        Rgb::new(0xff, 0xff, 0xff),
    )
}

/// Status bar color for non-full-screen screens: transparent on request,
/// otherwise the primary color darkened a step so the bar reads as chrome.
pub fn status_bar_color(config: &Config, transparent: bool) -> Rgb {
    if transparent {
        Rgb::TRANSPARENT
    } else {
        primary_color(config).darken(0.85)
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    /// Active mode
    pub mode: ThemeMode,

    /// Main accent color (borders, titles, menu icons)
    pub primary: Color,
    /// Secondary accent (progress, badges)
    pub accent: Color,

    /// Main text color
    pub text: Color,
    /// Muted/secondary text
    pub text_muted: Color,

    /// Default border color
    pub border: Color,
    /// Focused/active border color
    pub border_focused: Color,
    /// Selection highlight background
    pub highlight_bg: Color,
    /// Background color (use Reset for terminal default)
    pub background: Color,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark style - for dark primary colors
    pub fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            primary: Color::Cyan,
            accent: Color::Magenta,
            text: Color::White,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            highlight_bg: Color::DarkGray,
            background: Color::Reset,
        }
    }

    /// Light style - for light primary colors
    pub fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            primary: Color::Blue,
            accent: Color::Magenta,
            text: Color::Black,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            highlight_bg: Color::Gray,
            background: Color::Reset,
        }
    }

    // === Style Helpers ===

    /// Style for primary/title text
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for regular text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for muted/secondary text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for focused borders
    pub fn border_focused_style(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Style for unfocused borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for list item highlight (selected row)
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.text)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_primary(primary: &str) -> Config {
        Config {
            primary_color: primary.to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_light_primary_resolves_light_mode() {
        let config = config_with_primary("#fafafa");
        assert_eq!(ThemeMode::resolve(&config), ThemeMode::Light);
    }

    #[test]
    fn test_dark_primary_resolves_dark_mode() {
        let config = config_with_primary("#263238");
        assert_eq!(ThemeMode::resolve(&config), ThemeMode::Dark);
    }

    #[test]
    fn test_unreadable_primary_falls_back_to_default() {
        // The default primary is light, so a corrupt value still resolves.
        let config = config_with_primary("##nope");
        assert_eq!(ThemeMode::resolve(&config), ThemeMode::Light);
    }

    #[test]
    fn test_status_bar_color_transparent_request() {
        let config = Config::default();
        assert_eq!(status_bar_color(&config, true), Rgb::TRANSPARENT);
        assert_ne!(status_bar_color(&config, false), Rgb::TRANSPARENT);
    }

    #[test]
    fn test_status_bar_color_tracks_primary() {
        let config = config_with_primary("#804020");
        let bar = status_bar_color(&config, false);
        assert_eq!(bar, Rgb::new(0x80, 0x40, 0x20).darken(0.85));
    }

    #[test]
    fn test_theme_palette_matches_mode() {
        assert_eq!(Theme::new(ThemeMode::Light).mode, ThemeMode::Light);
        assert_eq!(Theme::new(ThemeMode::Dark).mode, ThemeMode::Dark);
    }
}
