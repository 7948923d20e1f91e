// Matrix constants are tabulated at full f64 precision
#![allow(clippy::excessive_precision)]

//! qualpal-core: distinct color palettes for data visualization
//!
//! This library picks sets of colors that stay as distinguishable as
//! possible to a human observer, optionally accounting for color vision
//! deficiency (CVD) and a background color.
//!
//! # Quick Start
//!
//! The [`Qualpal`] builder is the primary entry point:
//!
//! ```
//! use qualpal_core::{Qualpal, Region};
//!
//! let region = Region::hsl((0.0, 360.0), (0.4, 0.9), (0.3, 0.7))?;
//! let palette = Qualpal::from_colorspace(region).generate(5)?;
//!
//! assert_eq!(palette.len(), 5);
//! for color in &palette {
//!     println!("{color}"); // #rrggbb
//! }
//! # Ok::<(), qualpal_core::QualpalError>(())
//! ```
//!
//! # Lower-level API
//!
//! Every stage is also available as a free function:
//!
//! ```
//! use qualpal_core::{
//!     distance_matrix, select_palette, sample_colorspace, CvdKind, CvdMap, MemoryBudget,
//!     Metric, Region,
//! };
//!
//! let region = Region::lchab((0.0, 360.0), (20.0, 60.0), (40.0, 80.0))?;
//! let pool = sample_colorspace(&region, 400, MemoryBudget::default())?;
//!
//! let cvd = CvdMap::new().with(CvdKind::Protan, 0.5)?;
//! let palette = select_palette(&pool, &[], None, 4, Metric::Din99d, &cvd)?;
//!
//! let matrix = distance_matrix(&palette, Metric::Din99d, &cvd);
//! assert_eq!(matrix.len(), 4);
//! # Ok::<(), qualpal_core::QualpalError>(())
//! ```
//!
//! # Color Spaces
//!
//! [`Rgb`] (gamma-encoded sRGB, channels in 0.0..=1.0) is the canonical
//! storage form. All other spaces are views computed on demand:
//!
//! - [`Hsl`] / [`Hsv`]: cylindrical RGB, used to describe sampling regions
//! - [`LinearRgb`]: linear light, where CVD simulation happens
//! - [`Xyz`]: CIE 1931 tristimulus values, D65 white
//! - [`Lab`] / [`Lch`]: CIE L*a*b* and its polar form, used by CIEDE2000,
//!   CIE76 and LCHab sampling
//! - [`Din99d`]: log-compressed reshaping of L*a*b* for the DIN99d metric
//!
//! # Metrics
//!
//! [`Metric`] chooses how perceived difference is measured:
//!
//! | Metric | Cost | Notes |
//! |--------|------|-------|
//! | [`Metric::Ciede2000`] | high | Default; weighted lightness/chroma/hue terms plus a blue-region rotation term |
//! | [`Metric::Din99d`] | low | Euclidean in DIN99d; close to CIEDE2000 for large differences |
//! | [`Metric::Cie76`] | lowest | Euclidean in L*a*b*; overstates differences among saturated colors |
//!
//! All three are exactly symmetric and zero for identical colors.
//!
//! # Color Vision Deficiency
//!
//! [`simulate_cvd`] maps a color to its appearance for a protan, deutan or
//! tritan observer. Full loss (severity 1.0) projects the missing cone
//! response onto a plane through white and a fixed anchor stimulus in LMS
//! space. Lower severities interpolate linearly from the identity.
//!
//! When a [`CvdMap`] lists several deficiencies, every pairwise distance is
//! the *smallest* distance across the simulated views. A palette selected
//! this way is distinguishable for each declared deficiency individually,
//! not merely on average. Normal vision is scored only when no deficiency
//! has a non-zero severity.
//!
//! # Selection
//!
//! Choosing `n` colors that maximize the minimum pairwise distance is
//! NP-hard. The selector runs greedy farthest-point traversal, which
//! guarantees at least half the optimal minimum distance:
//!
//! ```text
//! selected = fixed colors (+ background, scored only)
//! if selected is empty:
//!     seed with the candidate farthest from all others combined
//! while |selected| < n:
//!     add the candidate whose nearest selected color is farthest away
//!     (ties go to the earliest candidate)
//! ```
//!
//! Fixed colors are returned first and unchanged, then picks in selection
//! order. Because each pick only depends on earlier ones, a palette of `n`
//! colors is a prefix of the palette of `n + 1` colors for the same input.
//!
//! # Resources
//!
//! The distance matrix dominates memory use. [`MemoryBudget`] projects the
//! peak allocation from the point count before anything is allocated and
//! rejects the request with [`QualpalError::MemoryExceeded`] instead of
//! running out of memory. Large matrices are filled on scoped worker
//! threads; the result is identical to the sequential one.

pub mod api;
pub mod color;
pub mod cvd;
pub mod matrix;
pub mod metric;
pub mod sample;
pub mod select;


pub use api::{ConfigError, ErrorKind, Input, Qualpal, QualpalError, DEFAULT_COLORSPACE_SIZE};
pub use color::{Din99d, Hsl, Hsv, Lab, Lch, LinearRgb, ParseColorError, Rgb, Xyz};
pub use cvd::{simulate_cvd, CvdKind, CvdMap, CvdSimulator};
pub use matrix::{
    analyze_palette, background_distances, distance_matrix, min_distance, DistanceMatrix,
    PaletteAnalysis, Vision,
};
pub use metric::{difference, Metric};
pub use sample::{sample_colorspace, ColorspaceMode, MemoryBudget, Region};
pub use select::{extend_palette, select_palette, select_palette_with_budget};
