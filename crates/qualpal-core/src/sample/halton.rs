//! Halton low-discrepancy sequence in three dimensions.

const BASES: [u64; 3] = [2, 3, 5];

/// Van der Corput radical inverse of `index` in `base`, in 0.0..1.0.
fn radical_inverse(mut index: u64, base: u64) -> f64 {
    let inv_base = 1.0 / base as f64;
    let mut scale = inv_base;
    let mut value = 0.0;
    while index > 0 {
        value += (index % base) as f64 * scale;
        index /= base;
        scale *= inv_base;
    }
    value
}

/// Deterministic stream of points in the unit cube `[0, 1)^3`.
#[derive(Debug, Clone, Default)]
pub(crate) struct Halton {
    index: u64,
}

impl Halton {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl Iterator for Halton {
    type Item = [f64; 3];

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.index;
        self.index = self.index.checked_add(1)?;
        Some(BASES.map(|base| radical_inverse(i, base)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radical_inverse_base_two() {
        let expected = [0.0, 0.5, 0.25, 0.75, 0.125, 0.625];
        for (i, &e) in expected.iter().enumerate() {
            assert_eq!(radical_inverse(i as u64, 2), e);
        }
    }

    #[test]
    fn test_radical_inverse_base_three() {
        assert!((radical_inverse(1, 3) - 1.0 / 3.0).abs() < 1e-15);
        assert!((radical_inverse(2, 3) - 2.0 / 3.0).abs() < 1e-15);
        assert!((radical_inverse(3, 3) - 1.0 / 9.0).abs() < 1e-15);
    }

    #[test]
    fn test_points_stay_in_unit_cube() {
        for point in Halton::new().take(5000) {
            assert!(point.iter().all(|&u| (0.0..1.0).contains(&u)), "{point:?}");
        }
    }

    #[test]
    fn test_sequence_is_reproducible() {
        let a: Vec<_> = Halton::new().take(100).collect();
        let b: Vec<_> = Halton::new().take(100).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_first_coordinate_fills_strata() {
        // 64 points of base 2 hit each of 64 equal strata exactly once
        let mut hits = [0u32; 64];
        for point in Halton::new().take(64) {
            hits[(point[0] * 64.0) as usize] += 1;
        }
        assert!(hits.iter().all(|&h| h == 1));
    }
}
