//! CIE 1931 XYZ tristimulus values (D65, 2° observer)

use super::linear_rgb::LinearRgb;
use super::rgb::Rgb;

/// D65 reference white, Y normalized to 1.0.
pub const D65_WHITE: Xyz = Xyz {
    x: 0.95047,
    y: 1.0,
    z: 1.08883,
};

/// Linear sRGB to XYZ (sRGB primaries, D65).
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// Exact inverse of [`RGB_TO_XYZ`].
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.2404548360214083, -1.5371388501025751, -0.4985315468684809],
    [-0.9692663898756537, 1.876010928842491, 0.04155608234667352],
    [0.05564341960421366, -0.20402585426769815, 1.0572251624579287],
];

#[inline]
pub(crate) fn mul3(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// A color in CIE XYZ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<LinearRgb> for Xyz {
    fn from(rgb: LinearRgb) -> Self {
        let [x, y, z] = mul3(&RGB_TO_XYZ, rgb.channels());
        Self { x, y, z }
    }
}

impl From<Xyz> for LinearRgb {
    /// Inverse transform. The result is unclamped and may be out of gamut.
    fn from(xyz: Xyz) -> Self {
        LinearRgb::from_channels(mul3(&XYZ_TO_RGB, [xyz.x, xyz.y, xyz.z]))
    }
}

impl From<Rgb> for Xyz {
    fn from(rgb: Rgb) -> Self {
        Xyz::from(LinearRgb::from(rgb))
    }
}

impl From<Xyz> for Rgb {
    /// Gamma-encoded sRGB, clamped to the displayable range.
    fn from(xyz: Xyz) -> Self {
        Rgb::from(LinearRgb::from(xyz))
    }
}
