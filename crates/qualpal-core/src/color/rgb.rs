//! sRGB color type
//!
//! [`Rgb`] is the canonical color representation of the crate: gamma-encoded
//! sRGB with each channel normalized to 0.0..=1.0. Every other color space is
//! a derived view computed on demand.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;
use super::linear_rgb::LinearRgb;

/// A color in sRGB color space.
///
/// Channels are gamma-encoded and normalized to 0.0..=1.0 (mapping to 0..255
/// for 8-bit). Values are immutable in spirit: conversions and simulations
/// always produce a new `Rgb`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel (gamma-encoded, 0.0..=1.0)
    pub r: f64,
    /// Green channel (gamma-encoded, 0.0..=1.0)
    pub g: f64,
    /// Blue channel (gamma-encoded, 0.0..=1.0)
    pub b: f64,
}

impl Rgb {
    /// Create a new color from normalized channel values.
    ///
    /// No validation is performed; see [`Rgb::is_valid`].
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use qualpal_core::Rgb;
    /// let red = Rgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Convert to a byte array [R, G, B], rounding and clamping each channel.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            (self.r * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.g * 255.0).round().clamp(0.0, 255.0) as u8,
            (self.b * 255.0).round().clamp(0.0, 255.0) as u8,
        ]
    }

    /// Lowercase `#rrggbb` representation.
    ///
    /// ```
    /// use qualpal_core::Rgb;
    /// assert_eq!(Rgb::new(1.0, 0.5, 0.0).to_hex(), "#ff8000");
    /// ```
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// True when every channel is finite and within 0.0..=1.0.
    #[inline]
    pub fn is_valid(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    #[inline]
    pub(crate) fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// IEC 61966-2-1 decode: sRGB channel to linear light.
#[inline]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// IEC 61966-2-1 encode: linear light to sRGB channel.
#[inline]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

impl From<LinearRgb> for Rgb {
    /// Gamma-encode a linear color. Channels are clamped to 0.0..=1.0 first,
    /// so out-of-gamut results land on the nearest boundary.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r.clamp(0.0, 1.0)),
            g: linear_to_srgb(linear.g.clamp(0.0, 1.0)),
            b: linear_to_srgb(linear.b.clamp(0.0, 1.0)),
        }
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Accepts `#RRGGBB`, `RRGGBB`, `#RGB` and `RGB`, case-insensitive,
    /// surrounding whitespace ignored.
    ///
    /// ```
    /// use qualpal_core::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white.r, 1.0);
    ///
    /// let red: Rgb = "#f00".parse().unwrap();
    /// assert_eq!(red.to_hex(), "#ff0000");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if !s.is_ascii() {
            return Err(ParseColorError::InvalidLength);
        }
        // from_str_radix accepts a leading '+'
        if s.contains('+') {
            return Err(ParseColorError::InvalidCharacter('+'));
        }

        match s.len() {
            3 => {
                // Shorthand: each digit doubles (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::from_u8(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::from_u8(r, g, b))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}
