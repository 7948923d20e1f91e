//! Up-front memory projection for pools and distance matrices.

use crate::api::{ConfigError, QualpalError};

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;
/// One `f64` matrix cell.
const MATRIX_CELL_BYTES: u64 = 8;
/// Three `f64` metric coordinates per point and vision view.
const COORD_BYTES: u64 = 24;

/// Memory available to a request, in GiB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryBudget {
    gib: f64,
}

impl Default for MemoryBudget {
    fn default() -> Self {
        Self { gib: 1.0 }
    }
}

impl MemoryBudget {
    pub fn from_gib(gib: f64) -> Result<Self, ConfigError> {
        if !gib.is_finite() || gib <= 0.0 {
            return Err(ConfigError::InvalidMemoryBudget(gib));
        }
        Ok(Self { gib })
    }

    pub fn gib(self) -> f64 {
        self.gib
    }

    pub fn bytes(self) -> u64 {
        // float-to-int casts saturate
        (self.gib * BYTES_PER_GIB) as u64
    }

    /// Peak bytes for scoring `points` colors under `views` vision views:
    /// the dense matrix plus the projected coordinates of every view.
    pub fn projected_bytes(points: usize, views: usize) -> u64 {
        let p = points as u64;
        let v = views.max(1) as u64;
        p.saturating_mul(p)
            .saturating_mul(MATRIX_CELL_BYTES)
            .saturating_add(p.saturating_mul(v).saturating_mul(COORD_BYTES))
    }

    /// Fail with [`QualpalError::MemoryExceeded`] if the projection does
    /// not fit.
    pub fn check(self, points: usize, views: usize) -> Result<(), QualpalError> {
        let required = Self::projected_bytes(points, views);
        let budget = self.bytes();
        if required > budget {
            tracing::debug!(points, views, required, budget, "memory budget exceeded");
            return Err(QualpalError::MemoryExceeded { required, budget });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_one_gib() {
        assert_eq!(MemoryBudget::default().bytes(), 1 << 30);
    }

    #[test]
    fn test_invalid_budgets_rejected() {
        for gib in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(MemoryBudget::from_gib(gib).is_err(), "{gib}");
        }
    }

    #[test]
    fn test_projection() {
        assert_eq!(MemoryBudget::projected_bytes(0, 1), 0);
        assert_eq!(MemoryBudget::projected_bytes(10, 1), 800 + 240);
        assert_eq!(MemoryBudget::projected_bytes(10, 3), 800 + 720);
        assert_eq!(MemoryBudget::projected_bytes(usize::MAX, 4), u64::MAX);
    }

    #[test]
    fn test_check() {
        let tiny = MemoryBudget::from_gib(1e-6).unwrap(); // 1073 bytes
        assert!(tiny.check(10, 1).is_ok());
        assert_eq!(
            tiny.check(20, 1),
            Err(QualpalError::MemoryExceeded {
                required: 3200 + 480,
                budget: 1073
            })
        );
        assert!(MemoryBudget::default().check(1000, 4).is_ok());
    }
}
