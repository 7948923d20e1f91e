//! Distance matrices and palette analysis.

mod analysis;
mod engine;

pub use analysis::{analyze_palette, min_distance, PaletteAnalysis, Vision};
pub use engine::{background_distances, distance_matrix, DistanceMatrix};

pub(crate) use engine::{simulators, ProjectedColors};
