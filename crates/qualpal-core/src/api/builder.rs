//! Qualpal builder -- the primary ergonomic entry point for the crate.
//!
//! [`Qualpal`] bundles a candidate source with scoring options (background,
//! CVD, metric, memory limit) and runs generation against them.

use std::collections::BTreeMap;

use super::error::{ConfigError, QualpalError};
use crate::color::Rgb;
use crate::cvd::CvdMap;
use crate::matrix::{analyze_palette, PaletteAnalysis, Vision};
use crate::metric::Metric;
use crate::sample::{sample_colorspace, MemoryBudget, Region};
use crate::select::{check_channels, select_palette_with_budget};

/// Default number of candidates sampled from a color-space region.
pub const DEFAULT_COLORSPACE_SIZE: usize = 1000;

/// Where candidate colors come from.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// Sample candidates from a color-space region.
    Colorspace(Region),
    /// Choose among an explicit list of colors.
    Colors(Vec<Rgb>),
}

/// Immutable palette generation configuration.
///
/// # Design
///
/// - Constructors take the candidate source, so there is no unconfigured state
/// - Configuration methods consume and return `self`
/// - [`generate()`](Self::generate) and [`extend()`](Self::extend) take
///   `&self`, so one configuration serves any number of requests
/// - All input validation happens at the start of a request, before any
///   sampling or selection
///
/// # Example
///
/// ```
/// use qualpal_core::{CvdKind, CvdMap, Qualpal, Region};
///
/// let region = Region::hsl((-170.0, 60.0), (0.0, 0.7), (0.2, 0.8))?;
/// let qualpal = Qualpal::from_colorspace(region)
///     .cvd(CvdMap::new().with(CvdKind::Deutan, 0.7)?)
///     .colorspace_size(300);
///
/// let palette = qualpal.generate(5)?;
/// assert_eq!(palette.len(), 5);
/// assert_eq!(qualpal.generate(5)?, palette);
/// # Ok::<(), qualpal_core::QualpalError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Qualpal {
    input: Input,
    background: Option<Rgb>,
    cvd: CvdMap,
    metric: Metric,
    memory_limit: MemoryBudget,
    colorspace_size: usize,
}

impl Qualpal {
    fn new(input: Input) -> Self {
        Self {
            input,
            background: None,
            cvd: CvdMap::new(),
            metric: Metric::default(),
            memory_limit: MemoryBudget::default(),
            colorspace_size: DEFAULT_COLORSPACE_SIZE,
        }
    }

    /// Generate from candidates sampled in `region`.
    pub fn from_colorspace(region: Region) -> Self {
        Self::new(Input::Colorspace(region))
    }

    /// Generate from an explicit candidate list.
    pub fn from_colors(colors: impl IntoIterator<Item = Rgb>) -> Self {
        Self::new(Input::Colors(colors.into_iter().collect()))
    }

    /// Generate from candidates given as hex strings.
    ///
    /// ```
    /// use qualpal_core::Qualpal;
    ///
    /// let qualpal = Qualpal::from_hex(&["#e41a1c", "#377eb8", "#4daf4a"])?;
    /// assert_eq!(qualpal.generate(2)?.len(), 2);
    /// # Ok::<(), qualpal_core::QualpalError>(())
    /// ```
    pub fn from_hex(colors: &[&str]) -> Result<Self, ConfigError> {
        let colors = colors
            .iter()
            .map(|s| s.parse::<Rgb>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_colors(colors))
    }

    /// Color the palette must stand out against. Scored, never returned.
    #[inline]
    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    /// Deficiencies the palette must stay distinguishable under.
    #[inline]
    pub fn cvd(mut self, cvd: CvdMap) -> Self {
        self.cvd = cvd;
        self
    }

    #[inline]
    pub fn metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    #[inline]
    pub fn memory_limit(mut self, budget: MemoryBudget) -> Self {
        self.memory_limit = budget;
        self
    }

    /// Number of candidates sampled from a color-space region.
    #[inline]
    pub fn colorspace_size(mut self, size: usize) -> Self {
        self.colorspace_size = size;
        self
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn get_metric(&self) -> Metric {
        self.metric
    }

    pub fn get_cvd(&self) -> &CvdMap {
        &self.cvd
    }

    pub fn get_background(&self) -> Option<Rgb> {
        self.background
    }

    fn validate(&self) -> Result<(), QualpalError> {
        match &self.input {
            Input::Colors(colors) if colors.is_empty() => {
                return Err(ConfigError::EmptyColors.into());
            }
            Input::Colors(colors) => check_channels(colors)?,
            Input::Colorspace(_) if self.colorspace_size == 0 => {
                return Err(ConfigError::ZeroPoolSize.into());
            }
            Input::Colorspace(_) => {}
        }
        check_channels(self.background.as_slice())?;
        Ok(())
    }

    /// The candidate pool this configuration selects from.
    pub fn candidates(&self) -> Result<Vec<Rgb>, QualpalError> {
        self.validate()?;
        match &self.input {
            Input::Colorspace(region) => {
                sample_colorspace(region, self.colorspace_size, self.memory_limit)
            }
            Input::Colors(colors) => Ok(colors.clone()),
        }
    }

    /// Generate `n` maximally distinct colors.
    pub fn generate(&self, n: usize) -> Result<Vec<Rgb>, QualpalError> {
        self.extend(&[], n)
    }

    /// Extend `fixed` to `n` colors in total. `fixed` is kept verbatim as
    /// the prefix of the result.
    ///
    /// ```
    /// use qualpal_core::{Qualpal, Region, Rgb};
    ///
    /// let fixed: Vec<Rgb> = vec!["#e41a1c".parse()?, "#377eb8".parse()?];
    /// let region = Region::hsl((0.0, 360.0), (0.3, 0.9), (0.3, 0.8))?;
    /// let palette = Qualpal::from_colorspace(region)
    ///     .colorspace_size(200)
    ///     .extend(&fixed, 4)?;
    /// assert_eq!(&palette[..2], &fixed[..]);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn extend(&self, fixed: &[Rgb], n: usize) -> Result<Vec<Rgb>, QualpalError> {
        self.validate()?;
        check_channels(fixed)?;
        if fixed.len() > n {
            return Err(ConfigError::FixedExceedsTotal {
                fixed: fixed.len(),
                total: n,
            }
            .into());
        }
        let capacity = match &self.input {
            Input::Colorspace(_) => self.colorspace_size,
            Input::Colors(colors) => colors.len(),
        };
        let available = capacity.saturating_add(fixed.len());
        if n > available {
            return Err(QualpalError::NotEnoughCandidates {
                requested: n,
                available,
            });
        }

        let pool = self.candidates()?;
        select_palette_with_budget(
            &pool,
            fixed,
            self.background,
            n,
            self.metric,
            &self.cvd,
            self.memory_limit,
        )
    }

    /// Distance analysis of `colors` under this configuration's metric,
    /// CVD map and background.
    pub fn analyze(&self, colors: &[Rgb]) -> BTreeMap<Vision, PaletteAnalysis> {
        analyze_palette(colors, self.metric, &self.cvd, self.background)
    }
}
