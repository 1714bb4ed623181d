//! Color types and utilities
//!
//! Color tokens are stored as CSS-like string literals (`"#3F51B5"`,
//! `"white"`, `"rgba(0, 0, 0, 0.5)"`). [`Color`] is the numeric form used
//! when a literal has to be blended or shaded.

use thiserror::Error;

/// Errors raised while interpreting a color literal
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The string is not `#RGB` or `#RRGGBB`
    #[error("{0} is invalid hex color")]
    InvalidHex(String),

    /// An RGB channel is outside `0..=255` (or not a number)
    #[error("{0} is invalid rgb code, please use number between 0-255")]
    InvalidChannel(f64),
}

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB)
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            255,
        )
    }

    /// Parse a `#RGB` or `#RRGGBB` literal
    pub fn parse_hex(literal: &str) -> Result<Self, ColorError> {
        let [r, g, b] = parse_hex_channels(literal)?;
        Ok(Self::from_rgba8(r, g, b, 255))
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        ]
    }

    /// Uppercase `#RRGGBB` literal (alpha is dropped)
    pub fn to_hex_string(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Hue (degrees), saturation and lightness (0.0 to 1.0)
    pub fn to_hsl(&self) -> (f32, f32, f32) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;

        if (max - min).abs() < f32::EPSILON {
            return (0.0, 0.0, l);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == self.r {
            (self.g - self.b) / d + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / d + 2.0
        } else {
            (self.r - self.g) / d + 4.0
        };

        (h * 60.0, s, l)
    }

    /// Build an opaque color from hue (degrees), saturation and lightness
    pub fn from_hsl(h: f32, s: f32, l: f32) -> Self {
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);
        if s == 0.0 {
            return Self::rgb(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = h.rem_euclid(360.0) / 360.0;

        Self::rgb(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }

    /// Same hue and saturation at a different lightness
    pub fn with_lightness(self, lightness: f32) -> Self {
        let (h, s, _) = self.to_hsl();
        Self::from_hsl(h, s, lightness).with_alpha(self.a)
    }
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Validate a hex literal and return its channels, expanding `#RGB`
pub fn parse_hex_channels(literal: &str) -> Result<[u8; 3], ColorError> {
    let invalid = || ColorError::InvalidHex(literal.to_string());

    let digits = literal.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => return Err(invalid()),
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

fn validate_channel(value: f64) -> Result<f64, ColorError> {
    if value.is_nan() || !(0.0..=255.0).contains(&value) {
        return Err(ColorError::InvalidChannel(value));
    }
    Ok(value)
}

/// `rgba(r, g, b, a)` from a hex literal and an opacity
pub fn rgba_from_hex(hex: &str, opacity: f64) -> Result<String, ColorError> {
    let [r, g, b] = parse_hex_channels(hex)?;
    Ok(format!("rgba({}, {}, {}, {})", r, g, b, opacity))
}

/// `rgba(r, g, b, a)` from numeric channels and an opacity
pub fn rgba_from_channels(r: f64, g: f64, b: f64, opacity: f64) -> Result<String, ColorError> {
    let r = validate_channel(r)?;
    let g = validate_channel(g)?;
    let b = validate_channel(b)?;
    Ok(format!("rgba({}, {}, {}, {})", r, g, b, opacity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn three_digit_hex_expands() {
        assert_eq!(parse_hex_channels("#F00").unwrap(), [255, 0, 0]);
        assert_eq!(parse_hex_channels("#a1B2c3").unwrap(), [0xA1, 0xB2, 0xC3]);
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for bad in ["bad", "FF0000", "#FF00", "#GG0000", "#FF00000", ""] {
            assert_eq!(
                parse_hex_channels(bad),
                Err(ColorError::InvalidHex(bad.to_string())),
                "{bad}"
            );
        }
    }

    #[test]
    fn rgba_formats_like_css() {
        assert_eq!(rgba_from_hex("#FF0000", 0.5).unwrap(), "rgba(255, 0, 0, 0.5)");
        assert_eq!(rgba_from_channels(10.0, 20.0, 30.0, 1.0).unwrap(), "rgba(10, 20, 30, 1)");
    }

    #[test]
    fn out_of_range_channel_fails() {
        assert_eq!(
            rgba_from_channels(300.0, 0.0, 0.0, 1.0),
            Err(ColorError::InvalidChannel(300.0))
        );
        assert!(rgba_from_channels(0.0, -1.0, 0.0, 1.0).is_err());
        assert!(rgba_from_channels(0.0, 0.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn hsl_round_trip_keeps_hex() {
        let color = Color::from_hex(0x3F51B5);
        let (h, s, l) = color.to_hsl();
        assert_eq!(Color::from_hsl(h, s, l).to_hex_string(), "#3F51B5");
    }

    #[test]
    fn lightness_shift_keeps_alpha() {
        let color = Color::from_hex(0x3F51B5).with_alpha(0.5);
        let lighter = color.with_lightness(0.9);
        assert_eq!(lighter.a, 0.5);
        assert!(lighter.to_hsl().2 > color.to_hsl().2);
    }
}
