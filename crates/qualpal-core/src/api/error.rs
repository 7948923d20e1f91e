//! Unified error type for the qualpal-core public API.
//!
//! Every fallible entry point returns [`QualpalError`]. Input problems are
//! grouped under [`ConfigError`] and are always raised before any sampling or
//! selection work starts.

use thiserror::Error;

use crate::color::ParseColorError;
use crate::cvd::CvdKind;
use crate::sample::ColorspaceMode;

/// Broad classification of a [`QualpalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or out-of-range input
    Configuration,
    /// Not enough candidates to satisfy the request
    Infeasibility,
    /// Projected memory exceeds the configured budget
    Resource,
}

/// Invalid request parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),

    #[error("color channel {channel} = {value} is outside 0..=1")]
    ChannelOutOfRange { channel: char, value: f64 },

    #[error("degenerate {name} range: min {min} must be less than max {max}")]
    DegenerateRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{name} range [{min}, {max}] is outside {lower}..={upper}")]
    RangeOutOfBounds {
        name: &'static str,
        min: f64,
        max: f64,
        lower: f64,
        upper: f64,
    },

    #[error("hue range spans {span} degrees (at most 360 allowed)")]
    HueSpanTooWide { span: f64 },

    #[error("unknown metric '{0}' (expected ciede2000, din99d or cie76)")]
    UnknownMetric(String),

    #[error("unknown CVD kind '{0}' (expected protan, deutan or tritan)")]
    UnknownCvdKind(String),

    #[error("unknown colorspace mode '{0}' (expected hsl or lchab)")]
    UnknownColorspaceMode(String),

    #[error("{0} is listed more than once")]
    DuplicateCvdKind(CvdKind),

    #[error("{kind} severity {severity} is outside 0..=1")]
    SeverityOutOfRange { kind: CvdKind, severity: f64 },

    #[error("memory limit must be a positive number of GiB, got {0}")]
    InvalidMemoryBudget(f64),

    #[error("colorspace size must be at least 1")]
    ZeroPoolSize,

    #[error("{fixed} fixed colors exceed the requested total of {total}")]
    FixedExceedsTotal { fixed: usize, total: usize },

    #[error("color input must contain at least one color")]
    EmptyColors,
}

/// Error returned by every fallible qualpal-core operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QualpalError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("requested {requested} colors but only {available} are available")]
    NotEnoughCandidates { requested: usize, available: usize },

    #[error("no displayable colors found in the {mode} region")]
    EmptyRegion { mode: ColorspaceMode },

    #[error("projected memory use of {required} bytes exceeds the budget of {budget} bytes")]
    MemoryExceeded { required: u64, budget: u64 },
}

impl QualpalError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QualpalError::Config(_) => ErrorKind::Configuration,
            QualpalError::NotEnoughCandidates { .. } | QualpalError::EmptyRegion { .. } => {
                ErrorKind::Infeasibility
            }
            QualpalError::MemoryExceeded { .. } => ErrorKind::Resource,
        }
    }
}

impl From<ParseColorError> for QualpalError {
    fn from(err: ParseColorError) -> Self {
        QualpalError::Config(ConfigError::ParseColor(err))
    }
}
