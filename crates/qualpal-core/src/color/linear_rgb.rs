//! Linear RGB color type
//!
//! Linear RGB is the space where light adds physically. The XYZ transform and
//! the CVD simulation matrices both operate here.

use super::rgb::{srgb_to_linear, Rgb};

/// Tolerance for treating a slightly out-of-range linear channel as in gamut.
const GAMUT_EPSILON: f64 = 1e-9;

/// A color in linear RGB color space.
///
/// Values are typically in 0.0..=1.0 but may fall outside that range for
/// intermediate results (inverse Lab transforms, CVD projections).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f64,
    /// Green channel (linear light intensity)
    pub g: f64,
    /// Blue channel (linear light intensity)
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// True when every channel lies in 0.0..=1.0 up to a small tolerance.
    #[inline]
    pub fn in_gamut(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|&c| c >= -GAMUT_EPSILON && c <= 1.0 + GAMUT_EPSILON)
    }

    /// Gamma-encode if the color is displayable, `None` otherwise.
    ///
    /// Channels within the tolerance of a boundary are clamped onto it.
    pub fn to_displayable(self) -> Option<Rgb> {
        self.in_gamut().then(|| Rgb::from(self))
    }

    #[inline]
    pub(crate) fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub(crate) fn from_channels([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for LinearRgb {
    /// Decode sRGB gamma with the exact IEC 61966-2-1 curve.
    fn from(rgb: Rgb) -> Self {
        Self {
            r: srgb_to_linear(rgb.r),
            g: srgb_to_linear(rgb.g),
            b: srgb_to_linear(rgb.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_gamut_tolerance() {
        assert!(LinearRgb::new(0.0, 0.5, 1.0).in_gamut());
        assert!(LinearRgb::new(-1e-12, 0.5, 1.0 + 1e-12).in_gamut());
        assert!(!LinearRgb::new(-0.01, 0.5, 1.0).in_gamut());
        assert!(!LinearRgb::new(0.0, 0.5, 1.02).in_gamut());
    }

    #[test]
    fn test_to_displayable_clamps_boundary() {
        let rgb = LinearRgb::new(-1e-12, 0.0, 1.0 + 1e-12)
            .to_displayable()
            .unwrap();
        assert_eq!(rgb.r, 0.0);
        assert_eq!(rgb.b, 1.0);
        assert!(LinearRgb::new(1.5, 0.0, 0.0).to_displayable().is_none());
    }

    #[test]
    fn test_type_conversion_changes_values() {
        let srgb = Rgb::new(0.5, 0.5, 0.5);
        let linear = LinearRgb::from(srgb);
        // gamma compression
        assert!(linear.r < 0.5);
        let back = Rgb::from(linear);
        assert!((back.r - 0.5).abs() < 1e-12);
    }
}
