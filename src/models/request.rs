use qualpal_core::{ColorspaceMode, CvdMap, Input, MemoryBudget, Metric, Qualpal, Region, Rgb};

use crate::error::AppError;

pub const DEFAULT_HUE: (f64, f64) = (0.0, 360.0);
pub const DEFAULT_HSL_SATURATION: (f64, f64) = (0.0, 1.0);
pub const DEFAULT_HSL_LIGHTNESS: (f64, f64) = (0.0, 1.0);
pub const DEFAULT_LCHAB_CHROMA: (f64, f64) = (0.0, 100.0);
pub const DEFAULT_LCHAB_LIGHTNESS: (f64, f64) = (0.0, 100.0);

/// One fully resolved palette request, whether it came from the command
/// line or from a request file.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteRequest {
    /// Total palette size, fixed colors included.
    pub n: usize,
    pub input: Input,
    pub fixed: Vec<Rgb>,
    pub background: Option<Rgb>,
    pub cvd: CvdMap,
    pub metric: Metric,
    pub memory_limit: MemoryBudget,
    pub colorspace_size: usize,
}

impl PaletteRequest {
    pub fn new(n: usize, input: Input) -> Self {
        Self {
            n,
            input,
            fixed: Vec::new(),
            background: None,
            cvd: CvdMap::new(),
            metric: Metric::default(),
            memory_limit: MemoryBudget::default(),
            colorspace_size: qualpal_core::DEFAULT_COLORSPACE_SIZE,
        }
    }

    /// Builder configuration equivalent to this request.
    pub fn qualpal(&self) -> Qualpal {
        let qualpal = match &self.input {
            Input::Colorspace(region) => Qualpal::from_colorspace(*region),
            Input::Colors(colors) => Qualpal::from_colors(colors.iter().copied()),
        };
        let qualpal = qualpal
            .cvd(self.cvd.clone())
            .metric(self.metric)
            .memory_limit(self.memory_limit)
            .colorspace_size(self.colorspace_size);
        match self.background {
            Some(bg) => qualpal.background(bg),
            None => qualpal,
        }
    }
}

/// Build a sampling region, filling unspecified ranges with the defaults of
/// `mode`. `saturation` only applies to HSL and `chroma` only to LCHab.
pub fn build_region(
    mode: ColorspaceMode,
    hue: Option<(f64, f64)>,
    saturation: Option<(f64, f64)>,
    chroma: Option<(f64, f64)>,
    lightness: Option<(f64, f64)>,
) -> Result<Region, AppError> {
    let hue = hue.unwrap_or(DEFAULT_HUE);
    let region = match mode {
        ColorspaceMode::Hsl => {
            if chroma.is_some() {
                return Err(AppError::InvalidRequest(
                    "chroma applies to lchab mode; use saturation for hsl".to_string(),
                ));
            }
            Region::hsl(
                hue,
                saturation.unwrap_or(DEFAULT_HSL_SATURATION),
                lightness.unwrap_or(DEFAULT_HSL_LIGHTNESS),
            )?
        }
        ColorspaceMode::Lchab => {
            if saturation.is_some() {
                return Err(AppError::InvalidRequest(
                    "saturation applies to hsl mode; use chroma for lchab".to_string(),
                ));
            }
            Region::lchab(
                hue,
                chroma.unwrap_or(DEFAULT_LCHAB_CHROMA),
                lightness.unwrap_or(DEFAULT_LCHAB_LIGHTNESS),
            )?
        }
    };
    Ok(region)
}
