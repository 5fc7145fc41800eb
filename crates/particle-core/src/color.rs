use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color must start with '#': {0:?}")]
    MissingHash(String),
    #[error("color must have 6 hex digits: {0:?}")]
    BadLength(String),
    #[error("invalid hex digit in color: {0:?}")]
    BadDigit(String),
}

/// 8-bit sRGB color as produced by an `<input type="color">`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// `#00f2ff`
    pub const BASE: Rgb = Rgb::new(0x00, 0xf2, 0xff);
    /// `#050505`
    pub const BACKGROUND: Rgb = Rgb::new(0x05, 0x05, 0x05);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (either case).
    pub fn from_hex(s: &str) -> Result<Rgb, ColorError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(s.to_string()))?;
        if digits.len() != 6 {
            return Err(ColorError::BadLength(s.to_string()));
        }
        // from_str_radix alone would accept a leading '+'
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(s.to_string()));
        }
        let value =
            u32::from_str_radix(digits, 16).map_err(|_| ColorError::BadDigit(s.to_string()))?;
        Ok(Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
    }

    /// Uppercase `#RRGGBB`, as shown next to the picker.
    pub fn to_hex_upper(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Channels in [0, 1], still sRGB encoded.
    pub fn to_srgb_f32(self) -> [f32; 3] {
        [self.r, self.g, self.b].map(|c| c as f32 / 255.0)
    }

    /// Channels in [0, 1], decoded to linear light for an sRGB render target.
    pub fn to_linear_f32(self) -> [f32; 3] {
        self.to_srgb_f32().map(srgb_to_linear)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgb::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BACKGROUND_HEX, BASE_COLOR_HEX};

    #[test]
    fn parses_picker_values() {
        assert_eq!(Rgb::from_hex("#00f2ff"), Ok(Rgb::new(0, 0xf2, 0xff)));
        assert_eq!(Rgb::from_hex("#FF8000"), Ok(Rgb::new(0xff, 0x80, 0)));
        assert_eq!("#00f2ff".parse::<Rgb>(), Ok(Rgb::BASE));
        assert_eq!(Rgb::from_hex(BASE_COLOR_HEX), Ok(Rgb::BASE));
        assert_eq!(Rgb::from_hex(BACKGROUND_HEX), Ok(Rgb::BACKGROUND));
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(matches!(Rgb::from_hex("00f2ff"), Err(ColorError::MissingHash(_))));
        assert!(matches!(Rgb::from_hex("#0f2"), Err(ColorError::BadLength(_))));
        assert!(matches!(Rgb::from_hex("#00g2ff"), Err(ColorError::BadDigit(_))));
        assert!(matches!(Rgb::from_hex("#+0f2ff"), Err(ColorError::BadDigit(_))));
    }

    #[test]
    fn formats_both_ways() {
        let c = Rgb::new(0xab, 0x01, 0xcd);
        assert_eq!(c.to_string(), "#ab01cd");
        assert_eq!(c.to_hex_upper(), "#AB01CD");
    }

    #[test]
    fn linear_conversion_keeps_endpoints() {
        assert_eq!(Rgb::new(0, 0, 0).to_linear_f32(), [0.0, 0.0, 0.0]);
        let white = Rgb::new(255, 255, 255).to_linear_f32();
        assert!(white.iter().all(|c| (c - 1.0).abs() < 1e-6));
    }
}
