//! RGB color values with hex parsing and HSV conversion.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Allow float comparisons in HSV conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An RGB color with one byte per channel.
///
/// This is the concrete form every color identifier ultimately resolves to.
/// Supports parsing from hex strings and conversion to and from HSV, which
/// the shade machinery uses to vary brightness while keeping the hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Accepts "#RRGGBB", "RRGGBB", and the short "#RGB" form, in either
    /// case. Surrounding whitespace is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtint::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#00FF00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    ///
    /// let color = RgbColor::from_hex("#f0a").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 170));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected hex digits");
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .with_context(|| format!("Invalid red channel in hex color '{hex}'"))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .with_context(|| format!("Invalid green channel in hex color '{hex}'"))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .with_context(|| format!("Invalid blue channel in hex color '{hex}'"))?;
                Ok(Self::new(r, g, b))
            }
            3 => {
                // #RGB expands each digit: #f0a -> #ff00aa
                let mut channels = [0u8; 3];
                for (i, channel) in channels.iter_mut().enumerate() {
                    let digit = u8::from_str_radix(&hex[i..=i], 16)
                        .with_context(|| format!("Invalid digit in hex color '{hex}'"))?;
                    *channel = digit << 4 | digit;
                }
                Ok(Self::new(channels[0], channels[1], channels[2]))
            }
            _ => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 3 or 6 hex digits (RGB or RRGGBB)"
            ),
        }
    }

    /// Formats the color as "#RRGGBB" (uppercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtint::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(255, 0, 0).to_hex(), "#FF0000");
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080FF");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Converts the color to HSV (Hue, Saturation, Value).
    ///
    /// Returns `(h, s, v)` with hue in degrees (0.0-360.0, 0.0 for
    /// grayscale), saturation and value in 0.0-1.0.
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSV color model uses single-char names
    pub fn to_hsv(&self) -> (f32, f32, f32) {
        let r = f32::from(self.r) / 255.0;
        let g = f32::from(self.g) / 255.0;
        let b = f32::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let v = max;
        let s = if max == 0.0 { 0.0 } else { delta / max };

        let h = if delta == 0.0 {
            0.0 // Grayscale, hue is undefined
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };
        let h = if h < 0.0 { h + 360.0 } else { h };

        (h, s, v)
    }

    /// Creates an `RgbColor` from HSV components.
    ///
    /// Out-of-range components are clamped: hue to 0.0-360.0, saturation
    /// and value to 0.0-1.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordtint::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hsv(120.0, 1.0, 1.0), RgbColor::new(0, 255, 0));
    /// assert_eq!(RgbColor::from_hsv(240.0, 1.0, 0.5), RgbColor::new(0, 0, 128));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSV color model uses single-char names
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = h.clamp(0.0, 360.0);
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let c = v * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
        let m = v - c;

        let (r, g, b) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Self {
            r: ((r + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            g: ((g + m) * 255.0).round().clamp(0.0, 255.0) as u8,
            b: ((b + m) * 255.0).round().clamp(0.0, 255.0) as u8,
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#FFFFFF).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_valid() {
        let color = RgbColor::from_hex("#FF0000").unwrap();
        assert_eq!(color, RgbColor::new(255, 0, 0));

        let color = RgbColor::from_hex("00ff00").unwrap();
        assert_eq!(color, RgbColor::new(0, 255, 0));

        let color = RgbColor::from_hex("  #0000FF  ").unwrap();
        assert_eq!(color, RgbColor::new(0, 0, 255));
    }

    #[test]
    fn test_from_hex_short_form() {
        assert_eq!(
            RgbColor::from_hex("#fff").unwrap(),
            RgbColor::new(255, 255, 255)
        );
        assert_eq!(RgbColor::from_hex("#000").unwrap(), RgbColor::new(0, 0, 0));
        assert_eq!(RgbColor::from_hex("f0a").unwrap(), RgbColor::new(255, 0, 170));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(RgbColor::from_hex("#FFFF").is_err());
        assert!(RgbColor::from_hex("#FFFFFFF").is_err());
        assert!(RgbColor::from_hex("GGGGGG").is_err());
        assert!(RgbColor::from_hex("#GG0000").is_err());
        assert!(RgbColor::from_hex("").is_err());
        assert!(RgbColor::from_hex("#").is_err());
    }

    #[test]
    fn test_hex_roundtrip() {
        let original = RgbColor::new(123, 45, 67);
        let parsed = RgbColor::from_hex(&original.to_hex()).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(RgbColor::new(0, 128, 255).to_string(), "#0080FF");
    }

    #[test]
    fn test_to_hsv_primary_colors() {
        let (h, s, v) = RgbColor::new(255, 0, 0).to_hsv();
        assert!((h - 0.0).abs() < 0.01);
        assert!((s - 1.0).abs() < 0.01);
        assert!((v - 1.0).abs() < 0.01);

        let (h, _, _) = RgbColor::new(0, 255, 0).to_hsv();
        assert!((h - 120.0).abs() < 0.01);

        let (h, _, _) = RgbColor::new(0, 0, 255).to_hsv();
        assert!((h - 240.0).abs() < 0.01);
    }

    #[test]
    fn test_to_hsv_grayscale() {
        let (h, s, v) = RgbColor::new(128, 128, 128).to_hsv();
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((v - 0.502).abs() < 0.01);
    }

    #[test]
    fn test_hsv_roundtrip() {
        let colors = vec![
            RgbColor::new(255, 0, 0),
            RgbColor::new(0, 255, 0),
            RgbColor::new(0, 0, 255),
            RgbColor::new(255, 255, 0),
            RgbColor::new(128, 64, 192),
            RgbColor::new(200, 100, 50),
        ];

        for color in colors {
            let (h, s, v) = color.to_hsv();
            let converted = RgbColor::from_hsv(h, s, v);
            // Allow small rounding errors (±1 per channel)
            assert!((i16::from(color.r) - i16::from(converted.r)).abs() <= 1);
            assert!((i16::from(color.g) - i16::from(converted.g)).abs() <= 1);
            assert!((i16::from(color.b) - i16::from(converted.b)).abs() <= 1);
        }
    }

    #[test]
    fn test_from_hsv_clamping() {
        assert_eq!(
            RgbColor::from_hsv(400.0, 1.5, 1.5),
            RgbColor::new(255, 0, 0)
        );
        assert_eq!(
            RgbColor::from_hsv(-10.0, -0.5, -0.5),
            RgbColor::new(0, 0, 0)
        );
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(RgbColor::default(), RgbColor::new(255, 255, 255));
    }
}
