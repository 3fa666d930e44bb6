//! Foreground selection against an arbitrary tier color

use serde::{Deserialize, Serialize};

use crate::constants::{BRAND_COLOR, DARK_FOREGROUND, LIGHT_FOREGROUND};

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#RRGGBB`. Anything else (no `#`, other lengths, non-hex) is `None`.
    pub fn parse_hex(color: &str) -> Option<Self> {
        let hex = color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        // All ASCII from here, so byte slicing is on char boundaries
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    /// Perceptual luminance in `[0, 1]`
    pub fn luminance(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)) / 255.0
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Whether `color` is a light background.
///
/// Malformed colors count as dark.
pub fn is_light_color(color: &str) -> bool {
    Rgb::parse_hex(color).is_some_and(|rgb| rgb.luminance() > 0.5)
}

/// Foreground to draw on a given background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContrastColor {
    LightForeground,
    DarkForeground,
}

impl ContrastColor {
    /// Dark text on light backgrounds, light text otherwise
    pub fn for_background(background: &str) -> Self {
        if is_light_color(background) {
            ContrastColor::DarkForeground
        } else {
            ContrastColor::LightForeground
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            ContrastColor::LightForeground => LIGHT_FOREGROUND,
            ContrastColor::DarkForeground => DARK_FOREGROUND,
        }
    }
}

/// Background and foreground of a membership card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPalette {
    pub background: String,
    pub foreground: String,
    pub contrast: ContrastColor,
}

impl CardPalette {
    /// Palette for a tier; a missing or empty tier color falls back to `default`
    pub fn for_tier(tier_color: Option<&str>, default: &str) -> Self {
        let background = tier_color
            .filter(|c| !c.is_empty())
            .unwrap_or(default)
            .to_string();
        let contrast = ContrastColor::for_background(&background);

        Self {
            background,
            foreground: contrast.hex().to_string(),
            contrast,
        }
    }

    /// Foreground with a two-hex-digit alpha suffix, e.g. `#FFFFFF20`
    pub fn tint(&self, alpha: u8) -> String {
        format!("{}{:02X}", self.foreground, alpha)
    }

    /// Skeleton fill while card data loads
    pub fn muted(&self) -> String {
        self.tint(0x20)
    }

    /// Hairline divider between card sections
    pub fn divider(&self) -> String {
        self.tint(0x33)
    }
}

impl Default for CardPalette {
    fn default() -> Self {
        Self::for_tier(None, BRAND_COLOR)
    }
}
