//! Perceptual color difference metrics.
//!
//! [`Metric`] selects one of three formulas:
//!
//! | Metric | Space | Formula |
//! |--------|-------|---------|
//! | [`Metric::Ciede2000`] | L*a*b* | CIEDE2000 (default) |
//! | [`Metric::Din99d`] | DIN99d | Euclidean |
//! | [`Metric::Cie76`] | L*a*b* | Euclidean |
//!
//! All three are symmetric and zero for identical colors. The distance
//! matrix engine projects each color into the metric's working space once
//! and compares the projected coordinates pairwise.

mod ciede2000;

use std::fmt;
use std::str::FromStr;

pub use ciede2000::ciede2000;

use crate::api::ConfigError;
use crate::color::{Din99d, Lab, Rgb};

/// Coordinates of a color in a metric's working space.
pub(crate) type Coords = [f64; 3];

/// Color difference formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    /// CIEDE2000 with kL = kC = kH = 1.
    #[default]
    Ciede2000,
    /// Euclidean distance in DIN99d.
    Din99d,
    /// Euclidean distance in L*a*b* (ΔE*ab).
    Cie76,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Ciede2000, Metric::Din99d, Metric::Cie76];

    /// Lowercase tag, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Ciede2000 => "ciede2000",
            Metric::Din99d => "din99d",
            Metric::Cie76 => "cie76",
        }
    }

    /// Project a color into this metric's working space.
    #[inline]
    pub(crate) fn project(self, rgb: Rgb) -> Coords {
        match self {
            Metric::Ciede2000 | Metric::Cie76 => {
                let lab = Lab::from(rgb);
                [lab.l, lab.a, lab.b]
            }
            Metric::Din99d => {
                let din = Din99d::from(rgb);
                [din.l, din.a, din.b]
            }
        }
    }

    /// Difference between two projected colors.
    ///
    /// Arguments are put in a canonical order first so the result is
    /// bit-for-bit symmetric.
    #[inline]
    pub(crate) fn compare(self, a: Coords, b: Coords) -> f64 {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        match self {
            Metric::Ciede2000 => ciede2000(Lab::new(a[0], a[1], a[2]), Lab::new(b[0], b[1], b[2])),
            Metric::Din99d | Metric::Cie76 => euclidean(a, b),
        }
    }
}

#[inline]
fn euclidean(a: Coords, b: Coords) -> f64 {
    let d0 = a[0] - b[0];
    let d1 = a[1] - b[1];
    let d2 = a[2] - b[2];
    (d0 * d0 + d1 * d1 + d2 * d2).sqrt()
}

/// Perceptual difference between two colors.
///
/// ```
/// use qualpal_core::{difference, Metric, Rgb};
///
/// let red = Rgb::new(1.0, 0.0, 0.0);
/// let blue = Rgb::new(0.0, 0.0, 1.0);
/// assert_eq!(difference(red, red, Metric::Ciede2000), 0.0);
/// assert_eq!(
///     difference(red, blue, Metric::Din99d),
///     difference(blue, red, Metric::Din99d)
/// );
/// ```
pub fn difference(a: Rgb, b: Rgb, metric: Metric) -> f64 {
    metric.compare(metric.project(a), metric.project(b))
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ciede2000" => Ok(Metric::Ciede2000),
            "din99d" => Ok(Metric::Din99d),
            "cie76" => Ok(Metric::Cie76),
            _ => Err(ConfigError::UnknownMetric(s.to_string())),
        }
    }
}
