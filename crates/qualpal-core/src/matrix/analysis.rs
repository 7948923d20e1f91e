//! Post-hoc analysis of finished palettes.

use std::collections::BTreeMap;
use std::fmt;

use super::engine::{simulators, DistanceMatrix, ProjectedColors};
use crate::color::Rgb;
use crate::cvd::{CvdKind, CvdMap, CvdSimulator};
use crate::metric::Metric;

/// A way of seeing colors: normal vision or one simulated deficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Vision {
    Normal,
    Cvd(CvdKind),
}

impl fmt::Display for Vision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vision::Normal => f.write_str("normal"),
            Vision::Cvd(kind) => write!(f, "{kind}"),
        }
    }
}

/// Distances within a palette as seen under one [`Vision`].
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteAnalysis {
    pub matrix: DistanceMatrix,
    /// For each color, the distance to its nearest neighbor in the palette
    /// (infinite for a single-color palette).
    pub min_distances: Vec<f64>,
    /// Smallest distance between any palette color and the background.
    pub background_min_distance: Option<f64>,
}

impl PaletteAnalysis {
    fn new(colors: &[Rgb], background: Option<Rgb>, metric: Metric, sim: CvdSimulator) -> Self {
        let mut points = colors.to_vec();
        points.extend(background);
        let projected = ProjectedColors::new(&points, metric, &[sim]);

        let n = colors.len();
        let full = projected.matrix();
        let mut matrix = DistanceMatrix::zeros(n);
        let mut min_distances = Vec::with_capacity(n);
        for i in 0..n {
            let mut nearest = f64::INFINITY;
            for j in 0..n {
                let d = full.get(i, j);
                matrix.set(i, j, d);
                if i != j {
                    nearest = nearest.min(d);
                }
            }
            min_distances.push(nearest);
        }
        let background_min_distance = background.and_then(|_| (0..n).map(|i| full.get(i, n)).reduce(f64::min));

        Self {
            matrix,
            min_distances,
            background_min_distance,
        }
    }
}

/// Smallest pairwise distance in `colors` under worst-case CVD scoring.
///
/// `None` when fewer than two colors are given.
///
/// ```
/// use qualpal_core::{min_distance, CvdMap, Metric, Rgb};
///
/// let colors = [Rgb::new(1.0, 1.0, 1.0), Rgb::new(0.0, 0.0, 0.0)];
/// let d = min_distance(&colors, Metric::Ciede2000, &CvdMap::new()).unwrap();
/// assert!((d - 100.0).abs() < 1e-3);
/// ```
pub fn min_distance(colors: &[Rgb], metric: Metric, cvd: &CvdMap) -> Option<f64> {
    let projected = ProjectedColors::new(colors, metric, &simulators(cvd));
    let n = projected.len();
    (0..n)
        .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
        .map(|(i, j)| projected.distance(i, j))
        .reduce(f64::min)
}

/// Analyze `colors` under normal vision and under each active deficiency
/// in `cvd`.
pub fn analyze_palette(
    colors: &[Rgb],
    metric: Metric,
    cvd: &CvdMap,
    background: Option<Rgb>,
) -> BTreeMap<Vision, PaletteAnalysis> {
    let mut analyses = BTreeMap::new();
    analyses.insert(
        Vision::Normal,
        PaletteAnalysis::new(colors, background, metric, CvdSimulator::default()),
    );
    for (kind, severity) in cvd.active() {
        analyses.insert(
            Vision::Cvd(kind),
            PaletteAnalysis::new(colors, background, metric, CvdSimulator::new(kind, severity)),
        );
    }
    analyses
}
