//! Candidate pool sampling from a color-space region.
//!
//! Points come from a three-dimensional Halton sequence mapped onto (hue,
//! saturation or chroma, lightness), so the same region and pool size always
//! give the same pool. LCHab points outside the sRGB gamut are discarded.

mod budget;
mod halton;
mod region;

pub use budget::MemoryBudget;
pub use region::{ColorspaceMode, Region};

use halton::Halton;

use crate::api::{ConfigError, QualpalError};
use crate::color::Rgb;

/// Upper bound on draws per requested pool entry in LCHab mode.
const MAX_DRAWS_PER_POINT: usize = 50;

/// Sample up to `pool_size` displayable colors from `region`.
///
/// The memory projection for a pool of `pool_size` is checked before any
/// sampling. HSL regions always yield exactly `pool_size` colors. LCHab
/// regions may yield fewer when much of the region lies outside the gamut;
/// a region with no displayable point fails with
/// [`QualpalError::EmptyRegion`].
///
/// ```
/// use qualpal_core::{sample_colorspace, MemoryBudget, Region};
///
/// let region = Region::hsl((0.0, 360.0), (0.4, 0.9), (0.3, 0.7))?;
/// let pool = sample_colorspace(&region, 200, MemoryBudget::default())?;
/// assert_eq!(pool.len(), 200);
/// # Ok::<(), qualpal_core::QualpalError>(())
/// ```
pub fn sample_colorspace(
    region: &Region,
    pool_size: usize,
    budget: MemoryBudget,
) -> Result<Vec<Rgb>, QualpalError> {
    if pool_size == 0 {
        return Err(ConfigError::ZeroPoolSize.into());
    }
    budget.check(pool_size, 1)?;

    let pool = match region.mode() {
        ColorspaceMode::Hsl => Halton::new()
            .take(pool_size)
            .filter_map(|u| region.point(u))
            .collect::<Vec<_>>(),
        ColorspaceMode::Lchab => {
            let max_draws = pool_size.saturating_mul(MAX_DRAWS_PER_POINT);
            let mut pool = Vec::with_capacity(pool_size);
            let mut draws = 0usize;
            for u in Halton::new().take(max_draws) {
                draws += 1;
                if let Some(color) = region.point(u) {
                    pool.push(color);
                    if pool.len() == pool_size {
                        break;
                    }
                }
            }
            tracing::debug!(
                draws,
                accepted = pool.len(),
                rejected = draws - pool.len(),
                "sampled LCHab region"
            );
            pool
        }
    };

    if pool.is_empty() {
        return Err(QualpalError::EmptyRegion {
            mode: region.mode(),
        });
    }
    if pool.len() < pool_size {
        tracing::warn!(
            requested = pool_size,
            sampled = pool.len(),
            "region is mostly outside the sRGB gamut"
        );
    }
    tracing::debug!(mode = %region.mode(), pool = pool.len(), "candidate pool ready");
    Ok(pool)
}
