//! # Palettes
//!
//! Colors for the floating-lines background.
//!
//! A palette is always eight colors. It comes from one of two places:
//!
//! - a named [`Preset`] (the static table below), or
//! - [`derive`], which spreads a single base color into an eight-step range.
//!
//! ```text
//! base #FF0000 ──derive──▶ #4d0000 #7c1616 ... #ec0000
//!                          i=0     i=1         i=7
//! ```
//!
//! Everything here is pure. Conversions to terminal colors live in the TUI layer.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 8;

/// An ordered set of line colors.
pub type Palette = [Rgb; PALETTE_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Build an `Rgb` from a `0xRRGGBB` literal.
const fn rgb(hex: u32) -> Rgb {
    Rgb {
        r: ((hex >> 16) & 0xFF) as u8,
        g: ((hex >> 8) & 0xFF) as u8,
        b: (hex & 0xFF) as u8,
    }
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `RRGGBB` (case-insensitive).
    pub fn from_hex(input: &str) -> Result<Self, PaletteError> {
        let trimmed = input.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(PaletteError::InvalidHex(input.to_string()));
        }
        let value = u32::from_str_radix(hex, 16)
            .map_err(|_| PaletteError::InvalidHex(input.to_string()))?;
        Ok(rgb(value))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Fully saturated color at 50% lightness for the given hue (degrees).
    ///
    /// Backs the color slider: one axis is enough to pick a base color.
    pub fn from_hue(hue: u16) -> Self {
        let h = f64::from(hue % 360) / 60.0;
        let x = 1.0 - ((h % 2.0) - 1.0).abs();
        let (r, g, b) = match h as u8 {
            0 => (1.0, x, 0.0),
            1 => (x, 1.0, 0.0),
            2 => (0.0, 1.0, x),
            3 => (0.0, x, 1.0),
            4 => (x, 0.0, 1.0),
            _ => (1.0, 0.0, x),
        };
        let scale = |c: f64| (c * 255.0).round() as u8;
        Self::new(scale(r), scale(g), scale(b))
    }

    /// Hue in degrees (0 for grays).
    pub fn hue(self) -> u16 {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        if delta == 0.0 {
            return 0;
        }
        let sector = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        ((sector * 60.0).round() as u16) % 360
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    InvalidHex(String),
    UnknownPreset(String),
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::InvalidHex(s) => write!(f, "invalid hex color '{s}' (expected #RRGGBB)"),
            PaletteError::UnknownPreset(s) => write!(f, "unknown color preset '{s}'"),
        }
    }
}

impl std::error::Error for PaletteError {}

// ============================================================================
// Presets
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Sunset,
    Ocean,
    Forest,
    #[default]
    Fire,
    Purple,
    Monochrome,
    Neon,
    Pastel,
}

impl Preset {
    pub const ALL: [Preset; 8] = [
        Preset::Sunset,
        Preset::Ocean,
        Preset::Forest,
        Preset::Fire,
        Preset::Purple,
        Preset::Monochrome,
        Preset::Neon,
        Preset::Pastel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Sunset => "sunset",
            Preset::Ocean => "ocean",
            Preset::Forest => "forest",
            Preset::Fire => "fire",
            Preset::Purple => "purple",
            Preset::Monochrome => "monochrome",
            Preset::Neon => "neon",
            Preset::Pastel => "pastel",
        }
    }

    pub fn colors(self) -> Palette {
        match self {
            Preset::Sunset => [
                rgb(0xFF6B6B), rgb(0xFF8E53), rgb(0xFFD93D), rgb(0x6BCF7F),
                rgb(0x4ECDC4), rgb(0x45B7D1), rgb(0x5B86E5), rgb(0x8E44AD),
            ],
            Preset::Ocean => [
                rgb(0x006994), rgb(0x0099CC), rgb(0x00B4D8), rgb(0x48CAE4),
                rgb(0x90E0EF), rgb(0xADE8F4), rgb(0xCAF0F8), rgb(0x03045E),
            ],
            Preset::Forest => [
                rgb(0x2D6A4F), rgb(0x40916C), rgb(0x52B788), rgb(0x74C69D),
                rgb(0x95D5B2), rgb(0xB7E4C7), rgb(0xD8F3DC), rgb(0x1B5E20),
            ],
            Preset::Fire => [
                rgb(0xFF0000), rgb(0xFF4500), rgb(0xFF6347), rgb(0xFF8C00),
                rgb(0xFFA500), rgb(0xFFD700), rgb(0xFFFF00), rgb(0xFFA07A),
            ],
            Preset::Purple => [
                rgb(0x6A0DAD), rgb(0x7B68EE), rgb(0x9370DB), rgb(0x8A2BE2),
                rgb(0x9400D3), rgb(0x9932CC), rgb(0xBA55D3), rgb(0xDDA0DD),
            ],
            Preset::Monochrome => [
                rgb(0x000000), rgb(0x2C2C2C), rgb(0x555555), rgb(0x808080),
                rgb(0xAAAAAA), rgb(0xD3D3D3), rgb(0xE5E5E5), rgb(0xFFFFFF),
            ],
            Preset::Neon => [
                rgb(0xFF10F0), rgb(0x00FFF0), rgb(0x39FF14), rgb(0xFF3131),
                rgb(0xFFFF33), rgb(0xFF10F0), rgb(0x1F51FF), rgb(0xFF6700),
            ],
            Preset::Pastel => [
                rgb(0xFFB3BA), rgb(0xFFDFBA), rgb(0xFFFFBA), rgb(0xBAFFC9),
                rgb(0xBAE1FF), rgb(0xE0BBE4), rgb(0xFEC8D8), rgb(0xFFDFD3),
            ],
        }
    }
}

impl FromStr for Preset {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| PaletteError::UnknownPreset(s.to_string()))
    }
}

// ============================================================================
// Derivation
// ============================================================================

/// Spread `base` into an eight-color range.
///
/// For index `i`: `factor = 0.3 + i * 0.1`, `variation = sin(i * 0.8) * 30`,
/// and each channel becomes `clamp(round(c * factor + variation), 0, 255)`.
pub fn derive(base: Rgb) -> Palette {
    let mut colors = [Rgb::new(0, 0, 0); PALETTE_SIZE];
    for (i, slot) in colors.iter_mut().enumerate() {
        let i = i as f64;
        let factor = 0.3 + i * 0.1;
        let variation = (i * 0.8).sin() * 30.0;
        let channel = |c: u8| (f64::from(c) * factor + variation).round().clamp(0.0, 255.0) as u8;
        *slot = Rgb::new(channel(base.r), channel(base.g), channel(base.b));
    }
    colors
}

/// [`derive`] from a hex string.
pub fn derive_hex(base: &str) -> Result<Palette, PaletteError> {
    Rgb::from_hex(base).map(derive)
}

/// Where the active palette comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteSource {
    Preset(Preset),
    /// Manual mode: colors derived from a base color.
    Manual(Rgb),
}

impl PaletteSource {
    pub fn colors(self) -> Palette {
        match self {
            PaletteSource::Preset(preset) => preset.colors(),
            PaletteSource::Manual(base) => derive(base),
        }
    }

    pub fn label(self) -> String {
        match self {
            PaletteSource::Preset(preset) => preset.name().to_string(),
            PaletteSource::Manual(base) => format!("custom {}", base.to_hex().to_uppercase()),
        }
    }
}

impl Default for PaletteSource {
    fn default() -> Self {
        PaletteSource::Preset(Preset::default())
    }
}
