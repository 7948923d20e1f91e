//! Linear dichromat simulation in linear RGB.
//!
//! Each full-loss matrix is `LMS⁻¹ · P · LMS`, where LMS is the
//! Hunt-Pointer-Estévez cone response of sRGB primaries and `P` replaces the
//! missing cone signal with a combination of the two remaining ones. The
//! replacement plane passes through white and one anchor stimulus: the blue
//! primary for protan/deutan and the red primary for tritan. Both anchors are
//! therefore seen unchanged, and every row of the resulting matrix sums to 1.
//!
//! Anomalous trichromacy at severity `s` interpolates linearly between the
//! identity and the full-loss matrix.

use super::CvdKind;
use crate::color::{mul3, LinearRgb, Rgb};

const PROTAN: [[f64; 3]; 3] = [
    [0.1705569911353506, 0.8294430088646494, 0.0],
    [0.1705569911353506, 0.8294430088646494, 0.0],
    [-0.004517144247106231, 0.004517144247106231, 1.0],
];

const DEUTAN: [[f64; 3]; 3] = [
    [0.33066007347512333, 0.6693399265248767, 0.0],
    [0.33066007347512333, 0.6693399265248767, 0.0],
    [-0.0278553825793318, 0.0278553825793318, 1.0],
];

const TRITAN: [[f64; 3]; 3] = [
    [1.0, 0.12739886336687878, -0.12739886336687878],
    [0.0, 0.8739092990281622, 0.12609070097183783],
    [0.0, 0.8739092990281622, 0.12609070097183783],
];

const IDENTITY: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

impl CvdKind {
    /// Full-loss (dichromat) simulation matrix in linear RGB.
    pub fn dichromat_matrix(self) -> [[f64; 3]; 3] {
        match self {
            CvdKind::Protan => PROTAN,
            CvdKind::Deutan => DEUTAN,
            CvdKind::Tritan => TRITAN,
        }
    }
}

/// A precomputed simulation for one deficiency kind at one severity.
///
/// Severity is clamped to 0.0..=1.0; zero (or NaN) yields the identity,
/// as does [`CvdSimulator::default`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CvdSimulator {
    matrix: Option<[[f64; 3]; 3]>,
}

impl CvdSimulator {
    pub fn new(kind: CvdKind, severity: f64) -> Self {
        if severity.is_nan() || severity <= 0.0 {
            return Self { matrix: None };
        }
        let s = severity.min(1.0);
        let full = kind.dichromat_matrix();
        let mut matrix = [[0.0; 3]; 3];
        for (row, (full_row, id_row)) in matrix.iter_mut().zip(full.iter().zip(IDENTITY.iter())) {
            for (cell, (&f, &i)) in row.iter_mut().zip(full_row.iter().zip(id_row.iter())) {
                *cell = (1.0 - s) * i + s * f;
            }
        }
        Self {
            matrix: Some(matrix),
        }
    }

    /// Simulated appearance of `color`, clamped to the displayable range.
    #[inline]
    pub fn apply(&self, color: Rgb) -> Rgb {
        match &self.matrix {
            None => color,
            Some(matrix) => {
                let linear = LinearRgb::from(color);
                Rgb::from(LinearRgb::from_channels(mul3(matrix, linear.channels())))
            }
        }
    }
}

/// Appearance of `color` to an observer with deficiency `kind` at
/// `severity` (0.0 = normal vision, 1.0 = dichromacy).
///
/// ```
/// use qualpal_core::{simulate_cvd, CvdKind, Rgb};
///
/// let red = Rgb::new(1.0, 0.0, 0.0);
/// assert_eq!(simulate_cvd(red, CvdKind::Protan, 0.0), red);
///
/// let seen = simulate_cvd(red, CvdKind::Protan, 1.0);
/// assert!((seen.r - seen.g).abs() < 1e-9);
/// ```
pub fn simulate_cvd(color: Rgb, kind: CvdKind, severity: f64) -> Rgb {
    CvdSimulator::new(kind, severity).apply(color)
}
