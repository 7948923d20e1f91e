pub mod args;
pub mod config;
pub mod request;

pub use args::{parse_cvd, parse_range, parse_severity, InputArgs, ScoringArgs};
pub use config::{ColorspaceConfig, InputConfig, RequestConfig};
pub use request::{build_region, PaletteRequest};
