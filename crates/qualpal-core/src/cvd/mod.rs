//! Color vision deficiency (CVD) simulation.
//!
//! [`simulate_cvd`] transforms one color for one deficiency kind at one
//! severity. [`CvdMap`] holds the validated kind-to-severity configuration a
//! palette request scores against.

mod simulate;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

pub use simulate::{simulate_cvd, CvdSimulator};

use crate::api::ConfigError;

/// Deficiency kind, named after the affected cone type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CvdKind {
    /// Long-wavelength (L) cones
    Protan,
    /// Medium-wavelength (M) cones
    Deutan,
    /// Short-wavelength (S) cones
    Tritan,
}

impl CvdKind {
    pub const ALL: [CvdKind; 3] = [CvdKind::Protan, CvdKind::Deutan, CvdKind::Tritan];

    pub fn as_str(self) -> &'static str {
        match self {
            CvdKind::Protan => "protan",
            CvdKind::Deutan => "deutan",
            CvdKind::Tritan => "tritan",
        }
    }
}

impl fmt::Display for CvdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CvdKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "protan" => Ok(CvdKind::Protan),
            "deutan" => Ok(CvdKind::Deutan),
            "tritan" => Ok(CvdKind::Tritan),
            _ => Err(ConfigError::UnknownCvdKind(s.to_string())),
        }
    }
}

/// Severity per deficiency kind, each in 0.0..=1.0.
///
/// At most one entry exists per kind; inserting a kind again replaces its
/// severity. An empty map (or one with only zero severities) means normal
/// vision.
///
/// ```
/// use qualpal_core::{CvdKind, CvdMap};
///
/// let cvd = CvdMap::new()
///     .with(CvdKind::Deutan, 0.7)?
///     .with(CvdKind::Tritan, 0.0)?;
/// assert_eq!(cvd.active().count(), 1);
/// assert!(CvdMap::new().with(CvdKind::Protan, 1.5).is_err());
/// # Ok::<(), qualpal_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CvdMap {
    severities: BTreeMap<CvdKind, f64>,
}

impl CvdMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(kind, severity)` pairs, validating each severity.
    /// A kind may appear only once.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (CvdKind, f64)>,
    {
        pairs.into_iter().try_fold(Self::new(), |map, (kind, severity)| {
            if map.severities.contains_key(&kind) {
                return Err(ConfigError::DuplicateCvdKind(kind));
            }
            map.with(kind, severity)
        })
    }

    /// Add or replace the severity for `kind`.
    pub fn with(mut self, kind: CvdKind, severity: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&severity) {
            return Err(ConfigError::SeverityOutOfRange { kind, severity });
        }
        self.severities.insert(kind, severity);
        Ok(self)
    }

    pub fn get(&self, kind: CvdKind) -> Option<f64> {
        self.severities.get(&kind).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.severities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.severities.len()
    }

    /// All entries in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (CvdKind, f64)> + '_ {
        self.severities.iter().map(|(&kind, &severity)| (kind, severity))
    }

    /// Entries with a non-zero severity, in kind order.
    pub fn active(&self) -> impl Iterator<Item = (CvdKind, f64)> + '_ {
        self.iter().filter(|&(_, severity)| severity > 0.0)
    }

    /// True when at least one entry alters color appearance.
    pub fn is_active(&self) -> bool {
        self.active().next().is_some()
    }
}
