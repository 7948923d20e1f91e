//! Validated color-space regions.

use std::fmt;
use std::str::FromStr;

use crate::api::ConfigError;
use crate::color::{normalize_hue, Hsl, Lab, Lch, LinearRgb, Rgb, Xyz};

const HUE_LIMIT: f64 = 360.0;
const UNIT: (f64, f64) = (0.0, 1.0);
const LCH_CHROMA: (f64, f64) = (0.0, 200.0);
const LCH_LIGHTNESS: (f64, f64) = (0.0, 100.0);

/// Cylindrical model a [`Region`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorspaceMode {
    /// Hue, saturation (0..=1), lightness (0..=1)
    #[default]
    Hsl,
    /// Hue, chroma (0..=200), L* (0..=100)
    Lchab,
}

impl ColorspaceMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorspaceMode::Hsl => "hsl",
            ColorspaceMode::Lchab => "lchab",
        }
    }
}

impl fmt::Display for ColorspaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorspaceMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hsl" => Ok(ColorspaceMode::Hsl),
            "lchab" | "lch" => Ok(ColorspaceMode::Lchab),
            _ => Err(ConfigError::UnknownColorspaceMode(s.to_string())),
        }
    }
}

/// A box in a cylindrical color space.
///
/// The hue range is an ordered pair of degrees that may cross 0: `(-170.0,
/// 60.0)` covers 190..360 and 0..=60. Sampled hues are wrapped modulo 360.
///
/// ```
/// use qualpal_core::Region;
///
/// let region = Region::hsl((-170.0, 60.0), (0.0, 0.7), (0.2, 0.8))?;
/// assert_eq!(region.hue(), (-170.0, 60.0));
///
/// assert!(Region::hsl((0.0, 360.0), (0.5, 0.5), (0.2, 0.8)).is_err());
/// # Ok::<(), qualpal_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    mode: ColorspaceMode,
    hue: (f64, f64),
    colorfulness: (f64, f64),
    lightness: (f64, f64),
}

fn check_range(
    name: &'static str,
    (min, max): (f64, f64),
    (lower, upper): (f64, f64),
) -> Result<(), ConfigError> {
    if min.is_nan() || max.is_nan() || min >= max {
        return Err(ConfigError::DegenerateRange { name, min, max });
    }
    if min < lower || max > upper {
        return Err(ConfigError::RangeOutOfBounds {
            name,
            min,
            max,
            lower,
            upper,
        });
    }
    Ok(())
}

fn check_hue(hue: (f64, f64)) -> Result<(), ConfigError> {
    check_range("hue", hue, (-HUE_LIMIT, HUE_LIMIT))?;
    let span = hue.1 - hue.0;
    if span > HUE_LIMIT {
        return Err(ConfigError::HueSpanTooWide { span });
    }
    Ok(())
}

#[inline]
fn lerp((min, max): (f64, f64), t: f64) -> f64 {
    min + t * (max - min)
}

impl Region {
    /// HSL region: saturation and lightness within 0.0..=1.0.
    pub fn hsl(
        hue: (f64, f64),
        saturation: (f64, f64),
        lightness: (f64, f64),
    ) -> Result<Self, ConfigError> {
        check_hue(hue)?;
        check_range("saturation", saturation, UNIT)?;
        check_range("lightness", lightness, UNIT)?;
        Ok(Self {
            mode: ColorspaceMode::Hsl,
            hue,
            colorfulness: saturation,
            lightness,
        })
    }

    /// LCHab region: chroma within 0.0..=200.0, L* within 0.0..=100.0.
    pub fn lchab(
        hue: (f64, f64),
        chroma: (f64, f64),
        lightness: (f64, f64),
    ) -> Result<Self, ConfigError> {
        check_hue(hue)?;
        check_range("chroma", chroma, LCH_CHROMA)?;
        check_range("lightness", lightness, LCH_LIGHTNESS)?;
        Ok(Self {
            mode: ColorspaceMode::Lchab,
            hue,
            colorfulness: chroma,
            lightness,
        })
    }

    pub fn mode(&self) -> ColorspaceMode {
        self.mode
    }

    pub fn hue(&self) -> (f64, f64) {
        self.hue
    }

    /// Saturation (HSL) or chroma (LCHab) range.
    pub fn colorfulness(&self) -> (f64, f64) {
        self.colorfulness
    }

    pub fn lightness(&self) -> (f64, f64) {
        self.lightness
    }

    /// Map a unit-cube point into the region.
    ///
    /// Returns `None` when the point lies outside the sRGB gamut, which can
    /// only happen in LCHab mode.
    pub(crate) fn point(&self, [u, v, w]: [f64; 3]) -> Option<Rgb> {
        let h = normalize_hue(lerp(self.hue, u));
        let c = lerp(self.colorfulness, v);
        let l = lerp(self.lightness, w);
        match self.mode {
            ColorspaceMode::Hsl => Some(Rgb::from(Hsl::new(h, c, l))),
            ColorspaceMode::Lchab => {
                let xyz = Xyz::from(Lab::from(Lch::new(l, c, h)));
                LinearRgb::from(xyz).to_displayable()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_ranges_rejected() {
        assert_eq!(
            Region::hsl((0.0, 360.0), (0.5, 0.5), (0.2, 0.8)),
            Err(ConfigError::DegenerateRange {
                name: "saturation",
                min: 0.5,
                max: 0.5
            })
        );
        assert!(matches!(
            Region::hsl((60.0, 10.0), (0.0, 1.0), (0.0, 1.0)),
            Err(ConfigError::DegenerateRange { name: "hue", .. })
        ));
        assert!(matches!(
            Region::lchab((0.0, 360.0), (0.0, 100.0), (f64::NAN, 50.0)),
            Err(ConfigError::DegenerateRange { name: "lightness", .. })
        ));
        assert!(matches!(
            Region::hsl((0.0, 360.0), (0.0, f64::NAN), (0.0, 1.0)),
            Err(ConfigError::DegenerateRange { name: "saturation", .. })
        ));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert!(matches!(
            Region::hsl((0.0, 360.0), (0.0, 1.2), (0.0, 1.0)),
            Err(ConfigError::RangeOutOfBounds {
                name: "saturation",
                ..
            })
        ));
        assert!(matches!(
            Region::lchab((0.0, 360.0), (0.0, 250.0), (0.0, 100.0)),
            Err(ConfigError::RangeOutOfBounds { name: "chroma", .. })
        ));
        assert!(matches!(
            Region::hsl((-400.0, 0.0), (0.0, 1.0), (0.0, 1.0)),
            Err(ConfigError::RangeOutOfBounds { name: "hue", .. })
        ));
        assert_eq!(
            Region::hsl((-180.0, 270.0), (0.0, 1.0), (0.0, 1.0)),
            Err(ConfigError::HueSpanTooWide { span: 450.0 })
        );
    }

    #[test]
    fn test_hue_is_wrapped() {
        let region = Region::hsl((-170.0, 60.0), (0.9, 1.0), (0.4, 0.6)).unwrap();
        // u = 0 maps to -170, which wraps to 190
        let rgb = region.point([0.0, 0.5, 0.5]).unwrap();
        let hsl = Hsl::from(rgb);
        assert!((hsl.h - 190.0).abs() < 1e-6, "{hsl:?}");
    }

    #[test]
    fn test_lchab_points_outside_gamut_are_rejected() {
        let region = Region::lchab((0.0, 360.0), (150.0, 200.0), (90.0, 100.0)).unwrap();
        assert_eq!(region.point([0.3, 0.5, 0.5]), None);

        let grey_region = Region::lchab((0.0, 360.0), (0.0, 5.0), (40.0, 60.0)).unwrap();
        assert!(grey_region.point([0.3, 0.5, 0.5]).is_some());
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("hsl".parse::<ColorspaceMode>(), Ok(ColorspaceMode::Hsl));
        assert_eq!("LCHab".parse::<ColorspaceMode>(), Ok(ColorspaceMode::Lchab));
        assert_eq!(ColorspaceMode::Lchab.to_string(), "lchab");
        assert!("rgb".parse::<ColorspaceMode>().is_err());
    }
}
