use std::str::FromStr;

use ratatui::style::Color;
use ratatui::widgets::BorderType;
use scrollsense_core::BoxShadowPreset;

/// Demo palette (Gruvbox Material dark)
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,
    pub fg0: Color,
    pub fg1: Color,
    pub grey0: Color,
    pub grey2: Color,
    pub yellow: Color,
    pub aqua: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            fg1: Color::Rgb(0xdd, 0xc7, 0xa1),
            grey0: Color::Rgb(0x7c, 0x6f, 0x64),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            yellow: Color::Rgb(0xd8, 0xa6, 0x57),
            aqua: Color::Rgb(0x89, 0xb4, 0x82),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
        }
    }
}

impl Theme {
    /// Header background from the configured CSS-ish color, falling back to bg1
    /// for "transparent" or anything ratatui cannot parse
    pub fn header_background(&self, configured: &str) -> Color {
        if configured.eq_ignore_ascii_case("transparent") {
            return self.bg1;
        }
        Color::from_str(configured).unwrap_or(self.bg1)
    }
}

/// Terminal stand-in for the shadow preset: the header's bottom border
pub fn shadow_border(preset: BoxShadowPreset) -> Option<BorderType> {
    match preset {
        BoxShadowPreset::None => None,
        BoxShadowPreset::Light => Some(BorderType::Plain),
        BoxShadowPreset::Medium => Some(BorderType::Thick),
        BoxShadowPreset::Heavy => Some(BorderType::Double),
        BoxShadowPreset::Custom => Some(BorderType::QuadrantOutside),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_background() {
        let theme = Theme::default();
        assert_eq!(theme.header_background("transparent"), theme.bg1);
        assert_eq!(theme.header_background("#ffffff"), Color::Rgb(0xff, 0xff, 0xff));
        assert_eq!(theme.header_background("not a color"), theme.bg1);
    }

    #[test]
    fn test_shadow_border() {
        assert_eq!(shadow_border(BoxShadowPreset::None), None);
        assert_eq!(shadow_border(BoxShadowPreset::Heavy), Some(BorderType::Double));
    }
}
