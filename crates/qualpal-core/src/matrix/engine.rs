//! Pairwise distance computation.
//!
//! Colors are projected into the metric's working space once per vision
//! view (normal vision, or one view per active CVD kind). The effective
//! distance between two colors is the smallest distance over all views.

use std::num::NonZeroUsize;
use std::thread;

use crate::color::Rgb;
use crate::cvd::{CvdMap, CvdSimulator};
use crate::metric::{Coords, Metric};

/// Point count above which matrix rows are filled on worker threads.
const PARALLEL_THRESHOLD: usize = 256;

/// Square, symmetric matrix of color differences with a zero diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    pub(crate) fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Number of rows (and columns).
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between entries `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index out of bounds");
        self.data[i * self.n + j]
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.n + j] = value;
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks(self.n.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    /// Smallest off-diagonal entry, `None` below two entries.
    pub fn min_off_diagonal(&self) -> Option<f64> {
        (0..self.n)
            .flat_map(|i| ((i + 1)..self.n).map(move |j| (i, j)))
            .map(|(i, j)| self.data[i * self.n + j])
            .reduce(f64::min)
    }

    fn mirror_upper(&mut self) {
        let n = self.n;
        for i in 1..n {
            for j in 0..i {
                self.data[i * n + j] = self.data[j * n + i];
            }
        }
    }
}

/// One simulator per vision view scored by `cvd`.
///
/// Normal vision is the only view when no kind has a non-zero severity;
/// otherwise every active kind is a view and normal vision is not.
pub(crate) fn simulators(cvd: &CvdMap) -> Vec<CvdSimulator> {
    let active: Vec<_> = cvd
        .active()
        .map(|(kind, severity)| CvdSimulator::new(kind, severity))
        .collect();
    if active.is_empty() {
        vec![CvdSimulator::default()]
    } else {
        active
    }
}

/// Colors projected into a metric space under each vision view.
pub(crate) struct ProjectedColors {
    metric: Metric,
    views: Vec<Vec<Coords>>,
    len: usize,
}

impl ProjectedColors {
    pub(crate) fn new(colors: &[Rgb], metric: Metric, simulators: &[CvdSimulator]) -> Self {
        let views = simulators
            .iter()
            .map(|sim| {
                colors
                    .iter()
                    .map(|&color| metric.project(sim.apply(color)))
                    .collect()
            })
            .collect();
        Self {
            metric,
            views,
            len: colors.len(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Worst-case distance over all views.
    #[inline]
    pub(crate) fn distance(&self, i: usize, j: usize) -> f64 {
        self.views
            .iter()
            .map(|view| self.metric.compare(view[i], view[j]))
            .fold(f64::INFINITY, f64::min)
    }

    pub(crate) fn matrix(&self) -> DistanceMatrix {
        let n = self.len;
        let mut matrix = DistanceMatrix::zeros(n);
        if n < 2 {
            return matrix;
        }

        let fill_row = |i: usize, row: &mut [f64]| {
            for (j, cell) in row.iter_mut().enumerate().skip(i + 1) {
                *cell = self.distance(i, j);
            }
        };

        let workers = thread::available_parallelism()
            .map_or(1, NonZeroUsize::get)
            .min(n);
        if n > PARALLEL_THRESHOLD && workers > 1 {
            tracing::debug!(points = n, workers, "computing distance matrix in parallel");
            // Rows are dealt round-robin so the shrinking upper triangle
            // spreads evenly across workers.
            let mut buckets: Vec<Vec<(usize, &mut [f64])>> = (0..workers).map(|_| Vec::new()).collect();
            for (i, row) in matrix.data.chunks_mut(n).enumerate() {
                buckets[i % workers].push((i, row));
            }
            thread::scope(|scope| {
                for bucket in buckets {
                    let fill_row = &fill_row;
                    scope.spawn(move || {
                        for (i, row) in bucket {
                            fill_row(i, row);
                        }
                    });
                }
            });
        } else {
            for (i, row) in matrix.data.chunks_mut(n).enumerate() {
                fill_row(i, row);
            }
        }

        matrix.mirror_upper();
        matrix
    }
}

/// Pairwise distance matrix over `colors`.
///
/// With active CVD entries each cell holds the smallest distance across the
/// simulated views, so a palette scored this way stays distinguishable for
/// every declared deficiency.
///
/// ```
/// use qualpal_core::{distance_matrix, CvdMap, Metric, Rgb};
///
/// let colors = [Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 0.0, 1.0)];
/// let matrix = distance_matrix(&colors, Metric::Cie76, &CvdMap::new());
/// assert_eq!(matrix.len(), 2);
/// assert_eq!(matrix.get(0, 0), 0.0);
/// assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
/// ```
pub fn distance_matrix(colors: &[Rgb], metric: Metric, cvd: &CvdMap) -> DistanceMatrix {
    ProjectedColors::new(colors, metric, &simulators(cvd)).matrix()
}

/// Distance from each color to `background`, under the same worst-case
/// scoring as [`distance_matrix`].
pub fn background_distances(
    colors: &[Rgb],
    background: Rgb,
    metric: Metric,
    cvd: &CvdMap,
) -> Vec<f64> {
    let mut points = colors.to_vec();
    points.push(background);
    let projected = ProjectedColors::new(&points, metric, &simulators(cvd));
    let bg = colors.len();
    (0..bg).map(|i| projected.distance(i, bg)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvd::CvdKind;
    use crate::metric::difference;

    fn sample_colors(count: usize) -> Vec<Rgb> {
        (0..count)
            .map(|i| {
                let i = i as u32;
                Rgb::from_u8(
                    (i * 37 % 256) as u8,
                    (i * 101 % 256) as u8,
                    (i * 211 % 256) as u8,
                )
            })
            .collect()
    }

    #[test]
    fn test_symmetric_with_zero_diagonal() {
        let colors = sample_colors(20);
        let cvd = CvdMap::from_pairs([(CvdKind::Deutan, 0.6)]).unwrap();
        for metric in Metric::ALL {
            let matrix = distance_matrix(&colors, metric, &cvd);
            for i in 0..colors.len() {
                assert_eq!(matrix.get(i, i), 0.0);
                for j in 0..colors.len() {
                    assert_eq!(matrix.get(i, j), matrix.get(j, i));
                    assert!(matrix.get(i, j) >= 0.0);
                }
            }
        }
    }

    #[test]
    fn test_matches_pairwise_difference() {
        let colors = sample_colors(8);
        let matrix = distance_matrix(&colors, Metric::Ciede2000, &CvdMap::new());
        for i in 0..8 {
            for j in 0..8 {
                let expected = difference(colors[i], colors[j], Metric::Ciede2000);
                assert!((matrix.get(i, j) - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let colors = sample_colors(PARALLEL_THRESHOLD + 40);
        let cvd = CvdMap::from_pairs([(CvdKind::Protan, 1.0), (CvdKind::Tritan, 0.5)]).unwrap();
        let projected = ProjectedColors::new(&colors, Metric::Din99d, &simulators(&cvd));
        let matrix = projected.matrix();
        for i in 0..colors.len() {
            for j in 0..colors.len() {
                let expected = if i == j { 0.0 } else { projected.distance(i, j) };
                assert_eq!(matrix.get(i, j), expected, "cell ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_worst_case_over_kinds() {
        let colors = sample_colors(12);
        let protan = CvdMap::from_pairs([(CvdKind::Protan, 1.0)]).unwrap();
        let tritan = CvdMap::from_pairs([(CvdKind::Tritan, 1.0)]).unwrap();
        let both = CvdMap::from_pairs([(CvdKind::Protan, 1.0), (CvdKind::Tritan, 1.0)]).unwrap();

        let p = distance_matrix(&colors, Metric::Ciede2000, &protan);
        let t = distance_matrix(&colors, Metric::Ciede2000, &tritan);
        let pt = distance_matrix(&colors, Metric::Ciede2000, &both);
        for i in 0..12 {
            for j in 0..12 {
                assert_eq!(pt.get(i, j), p.get(i, j).min(t.get(i, j)));
            }
        }
    }

    #[test]
    fn test_zero_severity_is_normal_vision() {
        let colors = sample_colors(6);
        let zero = CvdMap::from_pairs([(CvdKind::Deutan, 0.0)]).unwrap();
        assert_eq!(
            distance_matrix(&colors, Metric::Cie76, &zero),
            distance_matrix(&colors, Metric::Cie76, &CvdMap::new())
        );
    }

    #[test]
    fn test_small_inputs() {
        let empty = distance_matrix(&[], Metric::Ciede2000, &CvdMap::new());
        assert!(empty.is_empty());
        assert_eq!(empty.rows().count(), 0);
        assert_eq!(empty.min_off_diagonal(), None);

        let single = distance_matrix(&[Rgb::new(0.5, 0.5, 0.5)], Metric::Ciede2000, &CvdMap::new());
        assert_eq!(single.to_rows(), vec![vec![0.0]]);
        assert_eq!(single.min_off_diagonal(), None);
    }

    #[test]
    fn test_background_distances() {
        let colors = [Rgb::new(1.0, 1.0, 1.0), Rgb::new(0.0, 0.0, 0.0)];
        let white = Rgb::new(1.0, 1.0, 1.0);
        let distances = background_distances(&colors, white, Metric::Ciede2000, &CvdMap::new());
        assert_eq!(distances.len(), 2);
        assert_eq!(distances[0], 0.0);
        assert!((distances[1] - 100.0).abs() < 1e-3);
    }
}
