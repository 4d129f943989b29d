use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cells (and the swatch) at or above this luma get a dark outline so light
/// colors stay visible against the blank sheet.
pub const BORDER_LUMA_THRESHOLD: f64 = 210.0;

/// Largest value a 24-bit color can hold.
pub const MAX_RGB24: u32 = 0xFF_FFFF;

/// Errors produced when parsing a hex color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length {0}, expected 3 or 6 digits")]
    InvalidLength(usize),
    #[error("invalid hex digits in {0:?}")]
    InvalidHex(String),
}

/// An opaque 24-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Builds a color from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub const fn to_u24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub const fn from_array([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }

    /// ITU-R BT.709 luma on the raw 0..=255 channel values.
    pub fn luma(self) -> f64 {
        0.2126 * self.r as f64 + 0.7152 * self.g as f64 + 0.0722 * self.b as f64
    }

    /// Whether a surface filled with this color is drawn with an outline.
    pub fn needs_border(self) -> bool {
        self.luma() >= BORDER_LUMA_THRESHOLD
    }

    /// Picks a color uniformly from the whole 24-bit range, both ends included.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_u24(rng.gen_range(0..=MAX_RGB24))
    }

    /// Lowercase `#rrggbb`, always six digits.
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.to_u24())
    }

    /// Parses `#rgb` or `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidHex(hex.to_owned()));
        }

        if !matches!(digits.len(), 3 | 6) {
            return Err(ColorParseError::InvalidLength(digits.len()));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| ColorParseError::InvalidHex(hex.to_owned()))?;
        match digits.len() {
            3 => {
                let r = ((value >> 8) & 0xf) as u8;
                let g = ((value >> 4) & 0xf) as u8;
                let b = (value & 0xf) as u8;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Ok(Self::from_u24(value)),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl From<Rgb> for egui::Color32 {
    fn from(color: Rgb) -> Self {
        egui::Color32::from_rgb(color.r, color.g, color.b)
    }
}

impl From<egui::Color32> for Rgb {
    fn from(color: egui::Color32) -> Self {
        // alpha is dropped, the picker is opaque
        Self::new(color.r(), color.g(), color.b())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_border_follows_luma_threshold() {
        assert!(Rgb::WHITE.needs_border());
        assert!((Rgb::WHITE.luma() - 255.0).abs() < 1e-9);
        assert!(!Rgb::BLACK.needs_border());
        assert_eq!(Rgb::BLACK.luma(), 0.0);

        // pure green alone stays under the threshold, light yellow crosses it
        assert!(!Rgb::new(0, 255, 0).needs_border());
        assert!(Rgb::new(255, 255, 0).needs_border());
    }

    #[test]
    fn test_gray_210_sits_just_below_threshold() {
        let gray = Rgb::new(210, 210, 210);
        assert!(gray.luma() < BORDER_LUMA_THRESHOLD);
        assert!((gray.luma() - 210.0).abs() < 1e-9);
        assert!(!gray.needs_border());
        assert!(Rgb::new(211, 211, 211).needs_border());
    }

    #[test]
    fn test_luma_of_slate_blue() {
        let color = Rgb::from_hex("#336699").unwrap();
        assert!((color.luma() - 94.8396).abs() < 1e-3);
        assert!(!color.needs_border());
    }

    #[test]
    fn test_hex_is_zero_padded() {
        assert_eq!(Rgb::from_u24(0x00000f).to_hex(), "#00000f");
        assert_eq!(Rgb::new(0x12, 0xab, 0x00).to_hex(), "#12ab00");
        assert_eq!(Rgb::WHITE.to_string(), "#ffffff");
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!("#336699".parse::<Rgb>(), Ok(Rgb::new(0x33, 0x66, 0x99)));
        assert_eq!(Rgb::from_hex("fff"), Ok(Rgb::WHITE));
        assert_eq!(Rgb::from_hex("#ABCDEF"), Ok(Rgb::new(0xab, 0xcd, 0xef)));
        assert_eq!(Rgb::from_hex("#"), Err(ColorParseError::Empty));
        assert_eq!(Rgb::from_hex("#12345"), Err(ColorParseError::InvalidLength(5)));
        assert_eq!(Rgb::from_hex("#1234567890"), Err(ColorParseError::InvalidLength(10)));
        assert_eq!(Rgb::from_hex("#12345678"), Err(ColorParseError::InvalidLength(8)));
        assert!(matches!(Rgb::from_hex("#zz0000"), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(Rgb::from_hex("+12345"), Err(ColorParseError::InvalidHex(_))));
    }

    #[test]
    fn test_random_colors_are_always_full_width() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let hex = Rgb::random(&mut rng).to_hex();
            assert_eq!(hex.len(), 7, "{hex}");
        }
    }

    #[test]
    fn test_color32_conversion() {
        let color = Rgb::new(10, 20, 30);
        let converted: egui::Color32 = color.into();
        assert_eq!(converted, egui::Color32::from_rgb(10, 20, 30));
        assert_eq!(Rgb::from(converted), color);
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(0x33, 0x66, 0x99)).unwrap();
        assert_eq!(json, "\"#336699\"");
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::new(0x33, 0x66, 0x99));
        assert!(serde_json::from_str::<Rgb>("\"#12\"").is_err());
    }
}
