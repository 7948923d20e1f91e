use std::fmt;
use std::path::Path;

use qualpal_core::{analyze_palette, distance_matrix, CvdMap, Metric, Rgb};

use crate::error::AppError;
use crate::models::{PaletteRequest, RequestConfig};

/// Runs palette requests and renders results as text.
pub struct PaletteService;

impl PaletteService {
    /// Produce the palette for `request`: the fixed colors followed by the
    /// picks needed to reach `request.n`.
    pub fn generate(request: &PaletteRequest) -> Result<Vec<Rgb>, AppError> {
        let palette = request.qualpal().extend(&request.fixed, request.n)?;
        tracing::info!(
            n = request.n,
            fixed = request.fixed.len(),
            metric = %request.metric,
            "Generated palette"
        );
        Ok(palette)
    }

    /// Load a YAML request file and run it.
    pub fn run_file(path: &Path) -> Result<Vec<Rgb>, AppError> {
        let request = RequestConfig::load(path)?.to_request()?;
        Self::generate(&request)
    }

    /// One lowercase `#rrggbb` per line.
    pub fn format_palette(colors: &[Rgb]) -> String {
        colors.iter().map(|c| format!("{c}\n")).collect()
    }

    /// Worst-case distance matrix over every active view, the minimum
    /// distance, and per-view summaries.
    pub fn format_analysis(
        colors: &[Rgb],
        metric: Metric,
        cvd: &CvdMap,
        background: Option<Rgb>,
    ) -> Result<String, fmt::Error> {
        let mut out = String::new();
        write_analysis(&mut out, colors, metric, cvd, background)?;
        Ok(out)
    }
}

fn write_analysis(
    out: &mut impl fmt::Write,
    colors: &[Rgb],
    metric: Metric,
    cvd: &CvdMap,
    background: Option<Rgb>,
) -> fmt::Result {
    let matrix = distance_matrix(colors, metric, cvd);

    writeln!(out, "distance matrix ({metric}):")?;
    write!(out, "{:>8}", "")?;
    for color in colors {
        write!(out, " {:>8}", color.to_hex())?;
    }
    writeln!(out)?;
    for (color, row) in colors.iter().zip(matrix.rows()) {
        write!(out, "{:>8}", color.to_hex())?;
        for d in row {
            write!(out, " {d:>8.2}")?;
        }
        writeln!(out)?;
    }

    match matrix.min_off_diagonal() {
        Some(min) => writeln!(out, "min distance: {min:.2}")?,
        None => writeln!(out, "min distance: n/a")?,
    }

    for (vision, analysis) in analyze_palette(colors, metric, cvd, background) {
        let min = analysis
            .min_distances
            .iter()
            .copied()
            .filter(|d| d.is_finite())
            .fold(f64::INFINITY, f64::min);
        write!(out, "{:<8}", vision.to_string())?;
        if min.is_finite() {
            write!(out, " min {min:.2}")?;
        }
        if let Some(bg) = analysis.background_min_distance {
            write!(out, " background {bg:.2}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
