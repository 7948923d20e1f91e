//! Color types and conversion utilities
//!
//! [`Rgb`] (gamma-encoded sRGB, channels in 0.0..=1.0) is the canonical
//! storage form. Every other space is a view derived through `From`:
//!
//! ```text
//! Rgb <-> Hsl, Hsv
//! Rgb <-> LinearRgb <-> Xyz <-> Lab <-> Lch
//!                       Xyz  -> Din99d
//! ```
//!
//! Conversions back to [`Rgb`] clamp to the displayable range. Use
//! [`LinearRgb::to_displayable`] when out-of-gamut results must be detected.
//!
//! # Example
//!
//! ```
//! use qualpal_core::{Lab, Rgb};
//!
//! let orange: Rgb = "#ff7f00".parse().unwrap();
//! let lab = Lab::from(orange);
//! let back = Rgb::from(lab);
//! assert_eq!(back.to_hex(), "#ff7f00");
//! ```

mod din99d;
mod error;
mod hsl;
mod lab;
mod linear_rgb;
mod rgb;
mod xyz;

pub use din99d::Din99d;
pub use error::ParseColorError;
pub use hsl::{Hsl, Hsv};
pub use lab::{Lab, Lch};
pub use linear_rgb::LinearRgb;
pub use rgb::{linear_to_srgb, srgb_to_linear, Rgb};
pub use xyz::{Xyz, D65_WHITE};

pub(crate) use xyz::mul3;

/// Wrap a hue angle in degrees into 0.0..360.0.
///
/// ```
/// use qualpal_core::color::normalize_hue;
/// assert_eq!(normalize_hue(-170.0), 190.0);
/// assert_eq!(normalize_hue(360.0), 0.0);
/// ```
#[inline]
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
