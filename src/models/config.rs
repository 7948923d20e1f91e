use std::collections::BTreeMap;
use std::path::Path;

use qualpal_core::{ColorspaceMode, CvdKind, CvdMap, Input, MemoryBudget, Metric, Rgb};
use serde::Deserialize;

use super::request::{build_region, PaletteRequest};
use crate::error::AppError;

/// Palette request loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RequestConfig {
    /// Total number of colors, fixed colors included
    pub n: usize,

    /// Where candidates come from
    pub input: InputConfig,

    /// Colors kept verbatim at the start of the palette
    #[serde(default)]
    pub fixed: Vec<String>,

    /// Background the palette must stand out against
    #[serde(default)]
    pub background: Option<String>,

    /// Deficiency kind -> severity in [0, 1]
    #[serde(default)]
    pub cvd: BTreeMap<String, f64>,

    #[serde(default = "default_metric")]
    pub metric: String,

    /// Memory limit in GiB
    #[serde(default = "default_memory_limit")]
    pub memory_limit: f64,

    /// Number of candidates sampled from a colorspace region
    #[serde(default = "default_colorspace_size")]
    pub colorspace_size: usize,
}

fn default_metric() -> String {
    Metric::default().as_str().to_string()
}

fn default_memory_limit() -> f64 {
    1.0
}

fn default_colorspace_size() -> usize {
    qualpal_core::DEFAULT_COLORSPACE_SIZE
}

/// Exactly one of `colorspace` or `colors` must be set
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    #[serde(default)]
    pub colorspace: Option<ColorspaceConfig>,

    #[serde(default)]
    pub colors: Option<Vec<String>>,
}

/// Sampling region; missing ranges take the defaults of `mode`
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ColorspaceConfig {
    #[serde(default = "default_mode")]
    pub mode: String,

    #[serde(default)]
    pub hue: Option<[f64; 2]>,

    /// HSL only
    #[serde(default)]
    pub saturation: Option<[f64; 2]>,

    /// LCHab only
    #[serde(default)]
    pub chroma: Option<[f64; 2]>,

    #[serde(default)]
    pub lightness: Option<[f64; 2]>,
}

fn default_mode() -> String {
    ColorspaceMode::default().as_str().to_string()
}

fn pair(range: Option<[f64; 2]>) -> Option<(f64, f64)> {
    range.map(|[min, max]| (min, max))
}

fn parse_colors(colors: &[String]) -> Result<Vec<Rgb>, AppError> {
    colors
        .iter()
        .map(|s| s.parse::<Rgb>().map_err(AppError::from))
        .collect()
}

impl RequestConfig {
    /// Parse a request from YAML text
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, AppError> {
        serde_yaml::from_str(content).map_err(|source| AppError::ParseRequest {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a request file from disk
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ReadRequest {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content, path)?;
        tracing::info!(
            path = %path.display(),
            n = config.n,
            fixed = config.fixed.len(),
            "Loaded request"
        );
        Ok(config)
    }

    /// Validate every field and resolve it into a [`PaletteRequest`]
    pub fn to_request(&self) -> Result<PaletteRequest, AppError> {
        let input = match (&self.input.colorspace, &self.input.colors) {
            (Some(space), None) => {
                let mode: ColorspaceMode = space.mode.parse()?;
                Input::Colorspace(build_region(
                    mode,
                    pair(space.hue),
                    pair(space.saturation),
                    pair(space.chroma),
                    pair(space.lightness),
                )?)
            }
            (None, Some(colors)) => Input::Colors(parse_colors(colors)?),
            (Some(_), Some(_)) => {
                return Err(AppError::InvalidRequest(
                    "input takes either `colorspace` or `colors`, not both".to_string(),
                ))
            }
            (None, None) => {
                return Err(AppError::InvalidRequest(
                    "input needs `colorspace` or `colors`".to_string(),
                ))
            }
        };

        let cvd = self
            .cvd
            .iter()
            .map(|(kind, &severity)| kind.parse::<CvdKind>().map(|kind| (kind, severity)))
            .collect::<Result<Vec<_>, _>>()?;

        let mut request = PaletteRequest::new(self.n, input);
        request.fixed = parse_colors(&self.fixed)?;
        request.background = self
            .background
            .as_deref()
            .map(str::parse::<Rgb>)
            .transpose()?;
        request.cvd = CvdMap::from_pairs(cvd)?;
        request.metric = self.metric.parse()?;
        request.memory_limit = MemoryBudget::from_gib(self.memory_limit)?;
        request.colorspace_size = self.colorspace_size;
        Ok(request)
    }
}
