//! Cylindrical sRGB models: HSL and HSV
//!
//! Both are plain reparameterizations of gamma-encoded sRGB. Hue is in
//! degrees 0.0..360.0; saturation, lightness and value are in 0.0..=1.0.

use super::normalize_hue;
use super::rgb::Rgb;

/// A color in HSL (hue, saturation, lightness).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, 0.0..360.0
    pub h: f64,
    /// Saturation, 0.0..=1.0
    pub s: f64,
    /// Lightness, 0.0..=1.0
    pub l: f64,
}

/// A color in HSV (hue, saturation, value).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in degrees, 0.0..360.0
    pub h: f64,
    /// Saturation, 0.0..=1.0
    pub s: f64,
    /// Value, 0.0..=1.0
    pub v: f64,
}

impl Hsl {
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

impl Hsv {
    #[inline]
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

/// Hue shared by HSL and HSV, plus the channel extrema it was derived from.
fn hue_and_extrema(rgb: Rgb) -> (f64, f64, f64) {
    let Rgb { r, g, b } = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    (normalize_hue(h), max, min)
}

/// Build RGB from chroma `c`, hue and the lightness offset `m`.
fn from_hue_chroma(h: f64, c: f64, m: f64) -> Rgb {
    let hp = normalize_hue(h) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());

    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(
        (r + m).clamp(0.0, 1.0),
        (g + m).clamp(0.0, 1.0),
        (b + m).clamp(0.0, 1.0),
    )
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let (h, max, min) = hue_and_extrema(rgb);
        let l = (max + min) / 2.0;
        let delta = max - min;
        let s = if delta == 0.0 {
            0.0
        } else {
            delta / (1.0 - (2.0 * l - 1.0).abs())
        };
        Self { h, s, l }
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        let c = (1.0 - (2.0 * hsl.l - 1.0).abs()) * hsl.s;
        from_hue_chroma(hsl.h, c, hsl.l - c / 2.0)
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        let (h, max, min) = hue_and_extrema(rgb);
        let s = if max == 0.0 { 0.0 } else { (max - min) / max };
        Self { h, s, v: max }
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        let c = hsv.v * hsv.s;
        from_hue_chroma(hsv.h, c, hsv.v - c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb_close(a: Rgb, b: Rgb, tol: f64) {
        assert!(
            (a.r - b.r).abs() < tol && (a.g - b.g).abs() < tol && (a.b - b.b).abs() < tol,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn test_primaries_to_hsl() {
        let red = Hsl::from(Rgb::new(1.0, 0.0, 0.0));
        assert_eq!((red.h, red.s, red.l), (0.0, 1.0, 0.5));

        let green = Hsl::from(Rgb::new(0.0, 1.0, 0.0));
        assert_eq!((green.h, green.s, green.l), (120.0, 1.0, 0.5));

        let blue = Hsl::from(Rgb::new(0.0, 0.0, 1.0));
        assert_eq!((blue.h, blue.s, blue.l), (240.0, 1.0, 0.5));

        let magenta = Hsl::from(Rgb::new(1.0, 0.0, 1.0));
        assert_eq!(magenta.h, 300.0);
    }

    #[test]
    fn test_grey_has_zero_saturation() {
        let grey = Hsl::from(Rgb::new(0.4, 0.4, 0.4));
        assert_eq!(grey.h, 0.0);
        assert_eq!(grey.s, 0.0);
        assert!((grey.l - 0.4).abs() < 1e-12);

        let hsv = Hsv::from(Rgb::new(0.0, 0.0, 0.0));
        assert_eq!((hsv.h, hsv.s, hsv.v), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hsl_to_rgb_known_values() {
        assert_rgb_close(Rgb::from(Hsl::new(0.0, 1.0, 0.5)), Rgb::new(1.0, 0.0, 0.0), 1e-12);
        assert_rgb_close(Rgb::from(Hsl::new(60.0, 1.0, 0.5)), Rgb::new(1.0, 1.0, 0.0), 1e-12);
        assert_rgb_close(Rgb::from(Hsl::new(210.0, 0.5, 0.25)), Rgb::new(0.125, 0.25, 0.375), 1e-12);
        // hue 360 wraps to red
        assert_rgb_close(Rgb::from(Hsl::new(360.0, 1.0, 0.5)), Rgb::new(1.0, 0.0, 0.0), 1e-12);
    }

    #[test]
    fn test_hsv_known_values() {
        let hsv = Hsv::from(Rgb::new(0.5, 0.25, 0.0));
        assert!((hsv.h - 30.0).abs() < 1e-12);
        assert_eq!(hsv.s, 1.0);
        assert_eq!(hsv.v, 0.5);
        assert_rgb_close(Rgb::from(hsv), Rgb::new(0.5, 0.25, 0.0), 1e-12);
    }

    #[test]
    fn test_round_trips_on_grid() {
        for r in 0..=10 {
            for g in 0..=10 {
                for b in 0..=10 {
                    let rgb = Rgb::new(f64::from(r) / 10.0, f64::from(g) / 10.0, f64::from(b) / 10.0);
                    assert_rgb_close(Rgb::from(Hsl::from(rgb)), rgb, 1e-9);
                    assert_rgb_close(Rgb::from(Hsv::from(rgb)), rgb, 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_hsl_matches_palette_crate() {
        use palette::encoding::Srgb as SrgbStandard;
        use palette::{FromColor, Hsl as PaletteHsl, Srgb};

        for (r, g, b) in [(0.9, 0.2, 0.4), (0.1, 0.7, 0.3), (0.25, 0.5, 0.75)] {
            let ours = Hsl::from(Rgb::new(r, g, b));
            let theirs: PaletteHsl<SrgbStandard, f64> =
                PaletteHsl::from_color(Srgb::<f64>::new(r, g, b));
            assert!((ours.h - theirs.hue.into_positive_degrees()).abs() < 1e-9);
            assert!((ours.s - theirs.saturation).abs() < 1e-9);
            assert!((ours.l - theirs.lightness).abs() < 1e-9);
        }
    }
}
