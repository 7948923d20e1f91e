//! Command-line argument types shared by the `qualpal` subcommands.

use clap::Args;
use qualpal_core::{ColorspaceMode, CvdKind, CvdMap, Input, MemoryBudget, Metric, Rgb};

use super::request::{build_region, PaletteRequest};
use crate::error::AppError;

/// Parse a `min:max` range. Endpoints may be negative (`-170:60`).
pub fn parse_range(s: &str) -> Result<(f64, f64), String> {
    let (min, max) = s
        .split_once(':')
        .ok_or_else(|| format!("expected min:max, got '{s}'"))?;
    let min = min
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid range start '{min}': {e}"))?;
    let max = max
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid range end '{max}': {e}"))?;
    Ok((min, max))
}

/// Parse a severity in [0, 1].
pub fn parse_severity(s: &str) -> Result<f64, String> {
    let severity = s
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid severity '{s}': {e}"))?;
    if !(0.0..=1.0).contains(&severity) {
        return Err(format!("severity {severity} is outside [0, 1]"));
    }
    Ok(severity)
}

/// Parse `kind=severity`, e.g. `deutan=0.7`.
pub fn parse_cvd(s: &str) -> Result<(CvdKind, f64), String> {
    let (kind, severity) = s
        .split_once('=')
        .ok_or_else(|| format!("expected kind=severity, got '{s}'"))?;
    let kind = kind.parse::<CvdKind>().map_err(|e| e.to_string())?;
    Ok((kind, parse_severity(severity)?))
}

/// Options selecting candidates and scoring them
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Colorspace to sample candidates from
    #[arg(long, default_value_t = ColorspaceMode::Hsl)]
    pub mode: ColorspaceMode,

    /// Hue range in degrees, may cross 0 (e.g. -170:60)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_range)]
    pub hue: Option<(f64, f64)>,

    /// HSL saturation range within 0..1 (e.g. 0:0.7)
    #[arg(long, value_parser = parse_range)]
    pub saturation: Option<(f64, f64)>,

    /// LCHab chroma range within 0..200 (e.g. 20:60)
    #[arg(long, value_parser = parse_range)]
    pub chroma: Option<(f64, f64)>,

    /// Lightness range: 0..1 for hsl, 0..100 for lchab
    #[arg(long, value_parser = parse_range)]
    pub lightness: Option<(f64, f64)>,

    /// Choose among these colors instead of sampling (comma-separated hex)
    #[arg(long, value_delimiter = ',', conflicts_with_all = ["hue", "saturation", "chroma", "lightness"])]
    pub colors: Vec<Rgb>,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    /// Memory limit in GiB
    #[arg(long, default_value_t = 1.0)]
    pub memory_limit: f64,

    /// Number of candidates sampled from the colorspace
    #[arg(long, default_value_t = qualpal_core::DEFAULT_COLORSPACE_SIZE)]
    pub colorspace_size: usize,
}

/// Options that change how distances are measured
#[derive(Debug, Clone, Args)]
pub struct ScoringArgs {
    /// Background color the palette must stand out against
    #[arg(long)]
    pub background: Option<Rgb>,

    /// Color vision deficiency as kind=severity (repeatable)
    #[arg(long = "cvd", value_parser = parse_cvd)]
    pub cvd: Vec<(CvdKind, f64)>,

    /// Color difference metric
    #[arg(long, default_value_t = Metric::Ciede2000)]
    pub metric: Metric,
}

impl ScoringArgs {
    pub fn cvd_map(&self) -> Result<CvdMap, AppError> {
        Ok(CvdMap::from_pairs(self.cvd.iter().copied())?)
    }
}

impl InputArgs {
    /// Resolve into a request for `n` colors that starts with `fixed`
    pub fn to_request(&self, n: usize, fixed: Vec<Rgb>) -> Result<PaletteRequest, AppError> {
        let input = if self.colors.is_empty() {
            Input::Colorspace(build_region(
                self.mode,
                self.hue,
                self.saturation,
                self.chroma,
                self.lightness,
            )?)
        } else {
            Input::Colors(self.colors.clone())
        };

        let mut request = PaletteRequest::new(n, input);
        request.fixed = fixed;
        request.background = self.scoring.background;
        request.cvd = self.scoring.cvd_map()?;
        request.metric = self.scoring.metric;
        request.memory_limit = MemoryBudget::from_gib(self.memory_limit)?;
        request.colorspace_size = self.colorspace_size;
        Ok(request)
    }
}
