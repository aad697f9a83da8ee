use anyhow::{bail, Context};
use plotters::style::full_palette::{BLUE_400, RED_400};
use plotters::style::RGBColor;

/// Bar color of the first player in the classic theme.
pub const CLASSIC_FIRST: RGBColor = RGBColor(0xc0, 0x50, 0x4e);
/// Bar color of the second player in the classic theme.
pub const CLASSIC_SECOND: RGBColor = RGBColor(0x55, 0x8e, 0xd3);

/// The built-in color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Classic,
    Swapped,
    Material,
}

impl ThemeName {
    pub const ALL: [ThemeName; 3] = [ThemeName::Classic, ThemeName::Swapped, ThemeName::Material];

    /// Maps a theme name to a [`ThemeName`], ignoring case.
    /// Valid names: `classic`, `swapped`, and `material`.
    pub fn from_name(name: &str) -> Option<ThemeName> {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Some(ThemeName::Classic),
            "swapped" => Some(ThemeName::Swapped),
            "material" => Some(ThemeName::Material),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeName::Classic => "classic",
            ThemeName::Swapped => "swapped",
            ThemeName::Material => "material",
        }
    }
}

/// Colors of the two bar series. Only the colors change between themes,
/// the geometry of the chart never does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub first: RGBColor,
    pub second: RGBColor,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::named(ThemeName::Classic)
    }
}

impl Theme {
    pub fn named(name: ThemeName) -> Self {
        match name {
            ThemeName::Classic => Theme {
                first: CLASSIC_FIRST,
                second: CLASSIC_SECOND,
            },
            ThemeName::Swapped => Theme {
                first: CLASSIC_SECOND,
                second: CLASSIC_FIRST,
            },
            ThemeName::Material => Theme {
                first: RED_400,
                second: BLUE_400,
            },
        }
    }

    pub fn with_first(self, color: RGBColor) -> Self {
        Theme {
            first: color,
            ..self
        }
    }

    pub fn with_second(self, color: RGBColor) -> Self {
        Theme {
            second: color,
            ..self
        }
    }
}

/// Parses a color written as `#rrggbb` (the `#` is optional).
pub fn parse_hex_color(value: &str) -> anyhow::Result<RGBColor> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("'{}' is not a color, expected #rrggbb", value);
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .with_context(|| format!("Invalid color channel in '{}'", value))
    };
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}
