//! Greedy farthest-point selection.
//!
//! Every step adds the candidate whose nearest already-selected color is
//! farthest away. This is a 2-approximation of max-min diversification and
//! only needs one distance matrix over the scored points.

use crate::api::{ConfigError, QualpalError};
use crate::color::Rgb;
use crate::cvd::CvdMap;
use crate::matrix::{simulators, DistanceMatrix, ProjectedColors};
use crate::metric::Metric;
use crate::sample::MemoryBudget;

use super::check_channels;

/// Index of the largest value, earliest on ties.
fn argmax(values: impl Iterator<Item = (usize, f64)>) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, v) in values {
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Greedy state over a matrix laid out as `[scoring members][pool]`.
struct Greedy<'a> {
    matrix: &'a DistanceMatrix,
    offset: usize,
    /// Distance from each candidate to its nearest selected member.
    nearest: Vec<f64>,
    available: Vec<bool>,
    picks: Vec<usize>,
}

impl<'a> Greedy<'a> {
    fn new(matrix: &'a DistanceMatrix, offset: usize) -> Self {
        let pool = matrix.len() - offset;
        let nearest = (0..pool)
            .map(|c| {
                matrix.row(offset + c)[..offset]
                    .iter()
                    .copied()
                    .fold(f64::INFINITY, f64::min)
            })
            .collect();
        Self {
            matrix,
            offset,
            nearest,
            available: vec![true; pool],
            picks: Vec::new(),
        }
    }

    /// The candidate farthest from everything else combined.
    fn seed(&self) -> Option<usize> {
        argmax((0..self.available.len()).map(|c| {
            let row = &self.matrix.row(self.offset + c)[self.offset..];
            (c, row.iter().sum())
        }))
    }

    fn next_pick(&self) -> Option<usize> {
        argmax(
            self.nearest
                .iter()
                .copied()
                .enumerate()
                .filter(|&(c, _)| self.available[c]),
        )
    }

    fn pick(&mut self, c: usize) {
        tracing::trace!(candidate = c, nearest = self.nearest[c], "selected");
        self.available[c] = false;
        self.picks.push(c);
        let column = self.offset + c;
        for (d, nearest) in self.nearest.iter_mut().enumerate() {
            *nearest = nearest.min(self.matrix.get(self.offset + d, column));
        }
    }
}

/// Choose `n` colors: all of `fixed`, in order, followed by `n - fixed.len()`
/// candidates from `pool` in selection order.
///
/// `background` takes part in scoring but is never returned. Without fixed
/// colors or background the first pick is the candidate with the largest
/// summed distance to the rest of the pool. Ties always go to the earliest
/// candidate, so equal inputs give equal output.
///
/// ```
/// use qualpal_core::{select_palette, CvdMap, Metric, Rgb};
///
/// let red = Rgb::new(1.0, 0.0, 0.0);
/// let green = Rgb::new(0.0, 1.0, 0.0);
/// let blue = Rgb::new(0.0, 0.0, 1.0);
///
/// let palette = select_palette(&[red, green, blue], &[], None, 2, Metric::Ciede2000, &CvdMap::new())?;
/// assert_eq!(palette, vec![green, red]);
/// # Ok::<(), qualpal_core::QualpalError>(())
/// ```
pub fn select_palette(
    pool: &[Rgb],
    fixed: &[Rgb],
    background: Option<Rgb>,
    n: usize,
    metric: Metric,
    cvd: &CvdMap,
) -> Result<Vec<Rgb>, QualpalError> {
    select_palette_with_budget(pool, fixed, background, n, metric, cvd, MemoryBudget::default())
}

/// [`select_palette`] with an explicit memory budget for the distance matrix.
pub fn select_palette_with_budget(
    pool: &[Rgb],
    fixed: &[Rgb],
    background: Option<Rgb>,
    n: usize,
    metric: Metric,
    cvd: &CvdMap,
    budget: MemoryBudget,
) -> Result<Vec<Rgb>, QualpalError> {
    check_channels(pool)?;
    check_channels(fixed)?;
    check_channels(background.as_slice())?;

    let k = fixed.len();
    if k > n {
        return Err(ConfigError::FixedExceedsTotal { fixed: k, total: n }.into());
    }
    let available = pool.len() + k;
    if n > available {
        return Err(QualpalError::NotEnoughCandidates {
            requested: n,
            available,
        });
    }
    if n == k {
        return Ok(fixed.to_vec());
    }

    let simulators = simulators(cvd);
    let mut points = Vec::with_capacity(available + 1);
    points.extend_from_slice(fixed);
    points.extend(background);
    let offset = points.len();
    points.extend_from_slice(pool);
    budget.check(points.len(), simulators.len())?;

    let matrix = ProjectedColors::new(&points, metric, &simulators).matrix();
    let mut greedy = Greedy::new(&matrix, offset);

    if offset == 0 {
        if let Some(seed) = greedy.seed() {
            greedy.pick(seed);
        }
    }
    while k + greedy.picks.len() < n {
        match greedy.next_pick() {
            Some(c) => greedy.pick(c),
            None => break,
        }
    }

    let mut palette = fixed.to_vec();
    palette.extend(greedy.picks.iter().map(|&c| pool[c]));
    if palette.len() < n {
        return Err(QualpalError::NotEnoughCandidates {
            requested: n,
            available: palette.len(),
        });
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        let selected: Vec<usize> = (0..k)
            .chain(greedy.picks.iter().map(|&c| offset + c))
            .collect();
        let min = selected
            .iter()
            .enumerate()
            .flat_map(|(a, &i)| selected[a + 1..].iter().map(move |&j| (i, j)))
            .map(|(i, j)| matrix.get(i, j))
            .reduce(f64::min);
        tracing::debug!(n, pool = pool.len(), fixed = k, min_distance = ?min, "palette selected");
    }
    Ok(palette)
}

/// Extend `fixed` to `total_n` colors drawn from `pool`.
///
/// ```
/// use qualpal_core::{extend_palette, CvdMap, Metric, Rgb};
///
/// let fixed = [Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 0.0, 1.0)];
/// let pool = [Rgb::new(0.0, 1.0, 0.0), Rgb::new(1.0, 1.0, 0.0), Rgb::new(0.5, 0.0, 0.5)];
///
/// let palette = extend_palette(&pool, &fixed, 4, Metric::Ciede2000, &CvdMap::new())?;
/// assert_eq!(palette.len(), 4);
/// assert_eq!(&palette[..2], &fixed);
/// # Ok::<(), qualpal_core::QualpalError>(())
/// ```
pub fn extend_palette(
    pool: &[Rgb],
    fixed: &[Rgb],
    total_n: usize,
    metric: Metric,
    cvd: &CvdMap,
) -> Result<Vec<Rgb>, QualpalError> {
    select_palette(pool, fixed, None, total_n, metric, cvd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cvd::CvdKind;
    use crate::matrix::min_distance;
    use crate::metric::difference;

    fn red() -> Rgb {
        Rgb::new(1.0, 0.0, 0.0)
    }
    fn green() -> Rgb {
        Rgb::new(0.0, 1.0, 0.0)
    }
    fn blue() -> Rgb {
        Rgb::new(0.0, 0.0, 1.0)
    }
    fn purple() -> Rgb {
        Rgb::new(0.5, 0.0, 0.5)
    }
    fn orange() -> Rgb {
        Rgb::new(1.0, 0.5, 0.0)
    }
    fn yellow() -> Rgb {
        Rgb::new(1.0, 1.0, 0.0)
    }

    fn grid(steps: u8) -> Vec<Rgb> {
        let scale = 255 / (steps - 1);
        let mut colors = Vec::new();
        for r in 0..steps {
            for g in 0..steps {
                for b in 0..steps {
                    colors.push(Rgb::from_u8(r * scale, g * scale, b * scale));
                }
            }
        }
        colors
    }

    #[test]
    fn test_argmax_prefers_earliest() {
        assert_eq!(argmax([(0, 1.0), (1, 3.0), (2, 3.0)].into_iter()), Some(1));
        assert_eq!(argmax(std::iter::empty()), None);
    }

    #[test]
    fn test_returns_exactly_n() {
        let pool = grid(4);
        for n in [1, 2, 5, 17, pool.len()] {
            let palette = select_palette(&pool, &[], None, n, Metric::Ciede2000, &CvdMap::new()).unwrap();
            assert_eq!(palette.len(), n);
        }
    }

    #[test]
    fn test_three_primaries_pick_farthest_pair() {
        let palette = select_palette(
            &[red(), green(), blue()],
            &[],
            None,
            2,
            Metric::Ciede2000,
            &CvdMap::new(),
        )
        .unwrap();
        // red-green is the farthest of the three pairs
        assert_eq!(palette, vec![green(), red()]);
    }

    #[test]
    fn test_extend_keeps_prefix_and_maximizes_min_distance() {
        let fixed = [red(), blue()];
        let pool = [green(), purple(), orange(), yellow()];
        let palette = extend_palette(&pool, &fixed, 4, Metric::Ciede2000, &CvdMap::new()).unwrap();
        assert_eq!(palette.len(), 4);
        assert_eq!(&palette[..2], &fixed);

        let achieved = min_distance(&palette, Metric::Ciede2000, &CvdMap::new()).unwrap();
        let mut best = 0.0f64;
        for i in 0..pool.len() {
            for j in (i + 1)..pool.len() {
                let candidate = [fixed[0], fixed[1], pool[i], pool[j]];
                let d = min_distance(&candidate, Metric::Ciede2000, &CvdMap::new()).unwrap();
                best = best.max(d);
            }
        }
        assert!((achieved - best).abs() < 1e-9, "achieved {achieved}, best {best}");
    }

    #[test]
    fn test_background_is_scored_but_not_returned() {
        let white = Rgb::new(1.0, 1.0, 1.0);
        let near_white = Rgb::new(0.97, 0.97, 0.97);
        let pool = [near_white, Rgb::new(0.1, 0.1, 0.1), Rgb::new(0.8, 0.1, 0.1)];
        let palette = select_palette(&pool, &[], Some(white), 2, Metric::Ciede2000, &CvdMap::new()).unwrap();
        assert_eq!(palette.len(), 2);
        assert!(!palette.contains(&white));
        assert!(!palette.contains(&near_white));
    }

    #[test]
    fn test_first_pick_against_background_is_farthest_from_it() {
        let black = Rgb::new(0.0, 0.0, 0.0);
        let pool = [Rgb::new(0.2, 0.2, 0.2), Rgb::new(1.0, 1.0, 1.0), Rgb::new(0.5, 0.5, 0.5)];
        let palette = select_palette(&pool, &[], Some(black), 1, Metric::Cie76, &CvdMap::new()).unwrap();
        assert_eq!(palette, vec![Rgb::new(1.0, 1.0, 1.0)]);
    }

    #[test]
    fn test_greedy_invariant_each_pick_is_farthest() {
        let pool = grid(5);
        let metric = Metric::Din99d;
        let palette = select_palette(&pool, &[], None, 6, metric, &CvdMap::new()).unwrap();
        for step in 1..palette.len() {
            let chosen = &palette[..step];
            let score = |c: Rgb| {
                chosen
                    .iter()
                    .map(|&s| difference(c, s, metric))
                    .fold(f64::INFINITY, f64::min)
            };
            let picked = score(palette[step]);
            for &candidate in pool.iter().filter(|c| !chosen.contains(c)) {
                assert!(score(candidate) <= picked + 1e-9);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let pool = grid(4);
        let cvd = CvdMap::from_pairs([(CvdKind::Deutan, 0.7)]).unwrap();
        let a = select_palette(&pool, &[], None, 8, Metric::Ciede2000, &cvd).unwrap();
        let b = select_palette(&pool, &[], None, 8, Metric::Ciede2000, &cvd).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cvd_changes_selection_scoring() {
        let pool = [green(), Rgb::new(0.55, 0.55, 0.0), blue()];
        let fixed = [red()];
        let normal = extend_palette(&pool, &fixed, 2, Metric::Ciede2000, &CvdMap::new()).unwrap();
        let deutan = CvdMap::from_pairs([(CvdKind::Deutan, 1.0)]).unwrap();
        let cvd = extend_palette(&pool, &fixed, 2, Metric::Ciede2000, &deutan).unwrap();
        assert_eq!(normal[1], green());
        assert_eq!(cvd[1], blue());
    }

    #[test]
    fn test_not_enough_candidates() {
        let pool = grid(3);
        assert_eq!(
            select_palette(&pool, &[], None, 100, Metric::Ciede2000, &CvdMap::new()),
            Err(QualpalError::NotEnoughCandidates {
                requested: 100,
                available: 27
            })
        );
        assert_eq!(
            select_palette(&[], &[red()], None, 2, Metric::Ciede2000, &CvdMap::new()),
            Err(QualpalError::NotEnoughCandidates {
                requested: 2,
                available: 1
            })
        );
    }

    #[test]
    fn test_fixed_larger_than_total() {
        assert_eq!(
            extend_palette(&[green()], &[red(), blue()], 1, Metric::Ciede2000, &CvdMap::new()),
            Err(QualpalError::Config(ConfigError::FixedExceedsTotal {
                fixed: 2,
                total: 1
            }))
        );
    }

    #[test]
    fn test_trivial_requests() {
        assert_eq!(
            select_palette(&[], &[], None, 0, Metric::Ciede2000, &CvdMap::new()),
            Ok(vec![])
        );
        assert_eq!(
            extend_palette(&[green()], &[red(), blue()], 2, Metric::Ciede2000, &CvdMap::new()),
            Ok(vec![red(), blue()])
        );
    }

    #[test]
    fn test_invalid_channels_rejected() {
        let bad = Rgb::new(0.5, 1.5, 0.0);
        assert_eq!(
            select_palette(&[bad], &[], None, 1, Metric::Cie76, &CvdMap::new()),
            Err(QualpalError::Config(ConfigError::ChannelOutOfRange {
                channel: 'g',
                value: 1.5
            }))
        );
    }

    #[test]
    fn test_memory_budget_enforced() {
        let pool = grid(6);
        let budget = MemoryBudget::from_gib(1e-6).unwrap();
        let err = select_palette_with_budget(&pool, &[], None, 3, Metric::Cie76, &CvdMap::new(), budget)
            .unwrap_err();
        assert!(matches!(err, QualpalError::MemoryExceeded { .. }));
    }
}
