//! DIN99d color space (Cui, Luo, Rigg, Roesler & Witt, 2002)
//!
//! DIN99d is a reshaped L*a*b* in which plain Euclidean distance approximates
//! perceived difference. Lightness is log-compressed; the chroma plane is
//! rotated by 50°, stretched along one axis and log-compressed. A skew of X
//! toward -Z before the Lab step corrects the blue region.

use super::lab::Lab;
use super::rgb::Rgb;
use super::xyz::{Xyz, D65_WHITE};

const HUE_ROTATION_DEG: f64 = 50.0;

/// A color in DIN99d coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Din99d {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Din99d {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Euclidean distance, which is the DIN99d color difference ΔE99d.
    #[inline]
    pub fn distance(self, other: Din99d) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

#[inline]
fn skew(xyz: Xyz) -> Xyz {
    Xyz::new(1.12 * xyz.x - 0.12 * xyz.z, xyz.y, xyz.z)
}

impl From<Xyz> for Din99d {
    fn from(xyz: Xyz) -> Self {
        let lab = Lab::from_xyz_with_white(skew(xyz), skew(D65_WHITE));

        let (sin, cos) = HUE_ROTATION_DEG.to_radians().sin_cos();
        let e = lab.a * cos + lab.b * sin;
        let f = 1.14 * (lab.b * cos - lab.a * sin);
        let g = e.hypot(f);

        let l = 325.22 * (1.0 + 0.0036 * lab.l).ln();
        let c = 22.5 * (1.0 + 0.06 * g).ln();
        if g == 0.0 {
            return Self { l, a: 0.0, b: 0.0 };
        }
        let h = f.atan2(e) + HUE_ROTATION_DEG.to_radians();

        Self {
            l,
            a: c * h.cos(),
            b: c * h.sin(),
        }
    }
}

impl From<Rgb> for Din99d {
    fn from(rgb: Rgb) -> Self {
        Din99d::from(Xyz::from(rgb))
    }
}
