//! Light/dark theme: ambient detection, toggling, and palettes

use ratatui::style::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Visual theme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to the preference store
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Light => Palette::LIGHT,
            Theme::Dark => Palette::DARK,
        }
    }
}

/// Startup theme from the ambient preference, if one was detected.
pub fn init_theme(ambient: Option<Theme>) -> Theme {
    ambient.unwrap_or_default()
}

pub fn toggle_theme(current: Theme) -> Theme {
    current.toggle()
}

/// Parse the `COLORFGBG` terminal convention (`"fg;bg"` or `"fg;default;bg"`).
///
/// Background indexes 0-6 and 8 are dark; 7 and 9-15 are light.
pub fn detect_ambient(colorfgbg: Option<&str>) -> Option<Theme> {
    let bg = colorfgbg?.rsplit(';').next()?.trim();
    match bg.parse::<u8>().ok()? {
        0..=6 | 8 => Some(Theme::Dark),
        7 | 9..=15 => Some(Theme::Light),
        _ => None,
    }
}

/// Concrete colors for a theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Background gradient (top, bottom)
    pub background: (Color, Color),
    pub foreground: Color,
    pub muted: Color,
    pub card: Color,
    pub border: Color,
    pub accent: Color,
    pub error: Color,
    /// Glyph on the toggle: the theme you'd switch *to*
    pub toggle_glyph: &'static str,
    pub toggle_color: Color,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: (Color::Rgb(56, 189, 248), Color::Rgb(79, 70, 229)), // sky-400 -> indigo-600
        foreground: Color::White,
        muted: Color::Rgb(219, 234, 254),
        card: Color::Rgb(96, 165, 250),
        border: Color::Rgb(191, 219, 254),
        accent: Color::Rgb(253, 224, 71),
        error: Color::Rgb(254, 202, 202),
        toggle_glyph: "\u{263e}",
        toggle_color: Color::Rgb(31, 41, 55),
    };

    pub const DARK: Palette = Palette {
        background: (Color::Rgb(17, 24, 39), Color::Rgb(0, 0, 0)), // gray-900 -> black
        foreground: Color::Rgb(243, 244, 246),
        muted: Color::Rgb(156, 163, 175),
        card: Color::Rgb(38, 42, 51),
        border: Color::Rgb(55, 65, 81),
        accent: Color::Rgb(253, 224, 71),
        error: Color::Rgb(252, 165, 165),
        toggle_glyph: "\u{2600}",
        toggle_color: Color::Rgb(253, 224, 71),
    };

    /// Mid-tone used as the flat backdrop
    pub fn backdrop(&self) -> Color {
        blend(self.background.0, self.background.1, 0.5)
    }
}

fn blend(a: Color, b: Color, t: f32) -> Color {
    match (a, b) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => a,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(toggle_theme(Theme::Light), Theme::Dark);
        assert_eq!(toggle_theme(toggle_theme(Theme::Light)), Theme::Light);
        assert_eq!(toggle_theme(toggle_theme(Theme::Dark)), Theme::Dark);
    }

    #[test]
    fn test_init_theme_defaults_to_light() {
        assert_eq!(init_theme(None), Theme::Light);
        assert_eq!(init_theme(Some(Theme::Dark)), Theme::Dark);
    }

    #[test]
    fn test_detect_ambient() {
        assert_eq!(detect_ambient(Some("15;0")), Some(Theme::Dark));
        assert_eq!(detect_ambient(Some("0;15")), Some(Theme::Light));
        assert_eq!(detect_ambient(Some("0;default;7")), Some(Theme::Light));
        assert_eq!(detect_ambient(Some("7;8")), Some(Theme::Dark));
        assert_eq!(detect_ambient(Some("garbage")), None);
        assert_eq!(detect_ambient(Some("0;200")), None);
        assert_eq!(detect_ambient(None), None);
    }

    #[test]
    fn test_serialized_names() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(Theme::Light.as_str(), "light");
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
        assert_eq!(Palette::DARK.backdrop(), Color::Rgb(9, 12, 20));
    }
}
