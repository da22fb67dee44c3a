//! Design tokens consumed by the card.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An HSL color. Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Color {
    pub const fn hsl(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// CSS color value (e.g., "hsl(340deg 65% 47%)").
    pub fn to_css(&self) -> String {
        format!("hsl({}deg {}% {}%)", self.hue, self.saturation, self.lightness)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

pub const WHITE: Color = Color::hsl(0, 0, 100);
pub const GRAY_100: Color = Color::hsl(185, 5, 95);
pub const GRAY_300: Color = Color::hsl(190, 5, 80);
pub const GRAY_500: Color = Color::hsl(196, 4, 60);
pub const GRAY_700: Color = Color::hsl(220, 5, 40);
pub const GRAY_900: Color = Color::hsl(220, 3, 20);
pub const PRIMARY: Color = Color::hsl(340, 65, 47);
pub const SECONDARY: Color = Color::hsl(240, 60, 63);

/// Font weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Medium,
    Bold,
}

impl FontWeight {
    pub fn value(&self) -> u16 {
        match self {
            FontWeight::Normal => 500,
            FontWeight::Medium => 600,
            FontWeight::Bold => 800,
        }
    }
}
