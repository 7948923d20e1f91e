//! CIE L*a*b* and its polar form L*C*h
//!
//! Both use the D65 reference white of [`D65_WHITE`]. L* is in 0.0..=100.0;
//! a* and b* are unbounded but stay within roughly -128..=127 for sRGB input.

use super::normalize_hue;
use super::rgb::Rgb;
use super::xyz::{Xyz, D65_WHITE};

/// CIE epsilon (216/24389): below this the cube root is replaced by a line.
const EPSILON: f64 = 216.0 / 24389.0;
/// CIE kappa (24389/27).
const KAPPA: f64 = 24389.0 / 27.0;

/// A color in CIE L*a*b*.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness, 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

/// A color in CIE L*C*h (cylindrical L*a*b*).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    /// Lightness, 0.0..=100.0
    pub l: f64,
    /// Chroma, >= 0.0
    pub c: f64,
    /// Hue angle in degrees, 0.0..360.0
    pub h: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance in L*a*b* (CIE76 ΔE*ab).
    #[inline]
    pub fn distance(self, other: Lab) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }

    /// L*a*b* relative to an arbitrary reference white.
    pub(crate) fn from_xyz_with_white(xyz: Xyz, white: Xyz) -> Self {
        let fx = lab_f(xyz.x / white.x);
        let fy = lab_f(xyz.y / white.y);
        let fz = lab_f(xyz.z / white.z);
        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl Lch {
    #[inline]
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

#[inline]
fn lab_f_inv(f: f64) -> f64 {
    let cubed = f * f * f;
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        Lab::from_xyz_with_white(xyz, D65_WHITE)
    }
}

impl From<Lab> for Xyz {
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;

        // Lightness decides Y directly so dark colors stay on the linear segment
        let y = if lab.l > KAPPA * EPSILON {
            fy * fy * fy
        } else {
            lab.l / KAPPA
        };

        Xyz::new(lab_f_inv(fx) * D65_WHITE.x, y * D65_WHITE.y, lab_f_inv(fz) * D65_WHITE.z)
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        Lab::from(Xyz::from(rgb))
    }
}

impl From<Lab> for Rgb {
    /// Clamped to the displayable range; use [`Xyz`] and
    /// [`LinearRgb::to_displayable`](super::LinearRgb::to_displayable) to
    /// detect out-of-gamut colors instead.
    fn from(lab: Lab) -> Self {
        Rgb::from(Xyz::from(lab))
    }
}

impl From<Lab> for Lch {
    fn from(lab: Lab) -> Self {
        let c = lab.a.hypot(lab.b);
        let h = if c == 0.0 {
            0.0
        } else {
            normalize_hue(lab.b.atan2(lab.a).to_degrees())
        };
        Self { l: lab.l, c, h }
    }
}

impl From<Lch> for Lab {
    fn from(lch: Lch) -> Self {
        let (sin, cos) = lch.h.to_radians().sin_cos();
        Self {
            l: lch.l,
            a: lch.c * cos,
            b: lch.c * sin,
        }
    }
}

impl From<Rgb> for Lch {
    fn from(rgb: Rgb) -> Self {
        Lch::from(Lab::from(rgb))
    }
}

impl From<Lch> for Rgb {
    fn from(lch: Lch) -> Self {
        Rgb::from(Lab::from(lch))
    }
}
