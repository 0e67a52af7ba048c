//! OKLCH color specs and their conversion to and from display sRGB.
//!
//! Specs use percentage coordinates: lightness is a percent of the OKLab
//! lightness axis and chroma is a percent of [`MAX_CHROMA`]. Conversion goes
//! OKLCH → OKLab → LMS → linear sRGB → gamma-encoded 8-bit channels.

use std::fmt;

use super::gamma::{decode_srgb, encode_srgb};
use super::types::ResolvedColor;

/// OKLab chroma that a spec chroma of 100 maps to.
pub const MAX_CHROMA: f64 = 0.4;

/// Below this OKLab chroma a color is treated as achromatic (hue 0).
const ACHROMATIC_EPSILON: f64 = 1e-4;

// https://bottosson.github.io/posts/oklab/
const OKLAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0, 0.396_337_777_4, 0.215_803_757_3],
    [1.0, -0.105_561_345_8, -0.063_854_172_8],
    [1.0, -0.089_484_177_5, -1.291_485_548_0],
];

const LMS_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [4.076_741_662_1, -3.307_711_591_3, 0.230_969_929_2],
    [-1.268_438_004_6, 2.609_757_401_1, -0.341_319_396_5],
    [-0.004_196_086_3, -0.703_418_614_7, 1.707_614_701_0],
];

const LINEAR_SRGB_TO_LMS: [[f64; 3]; 3] = [
    [0.412_221_470_8, 0.536_332_536_3, 0.051_445_992_9],
    [0.211_903_498_2, 0.680_699_545_1, 0.107_396_956_6],
    [0.088_302_461_9, 0.281_718_837_6, 0.629_978_700_5],
];

const LMS_TO_OKLAB: [[f64; 3]; 3] = [
    [0.210_454_255_3, 0.793_617_785_0, -0.004_072_046_8],
    [1.977_998_495_1, -2.428_592_205_0, 0.450_593_709_9],
    [0.025_904_037_1, 0.782_771_766_2, -0.808_675_766_0],
];

// Plain multiply-add keeps results bit-identical with other implementations of
// the same matrices; fused operations round differently.
#[allow(clippy::suboptimal_flops)]
fn mul3(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    m.map(|row| row[0] * v[0] + row[1] * v[1] + row[2] * v[2])
}

/// A color given as percentage OKLCH coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PerceptualColorSpec {
    /// Lightness, nominally `0..=100`.
    pub lightness: f64,
    /// Chroma as a percent of [`MAX_CHROMA`], nominally `0..=100`.
    pub chroma: f64,
    /// Hue angle in degrees; any real value, read mod 360.
    pub hue: f64,
}

impl PerceptualColorSpec {
    /// Build a spec from its three coordinates.
    #[must_use]
    pub const fn new(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self {
            lightness,
            chroma,
            hue,
        }
    }

    /// The spec as absolute OKLab coordinates `[L, a, b]`.
    #[must_use]
    pub fn to_oklab(self) -> [f64; 3] {
        let l = self.lightness / 100.0;
        let c = self.chroma / 100.0 * MAX_CHROMA;
        let h = self.hue.to_radians();
        [l, c * h.cos(), c * h.sin()]
    }

    /// Resolve the spec into a display color. See [`resolve`].
    #[must_use]
    pub fn resolve(self) -> ResolvedColor {
        resolve(self)
    }
}

impl fmt::Display for PerceptualColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oklch({}, {}, {})",
            self.lightness, self.chroma, self.hue
        )
    }
}

/// What: Convert a perceptual spec into a canonical opaque sRGB color.
///
/// Inputs:
/// - `spec`: Percentage OKLCH coordinates.
///
/// Output:
/// - Opaque [`ResolvedColor`].
///
/// Details:
/// - Total: out-of-gamut results and out-of-range coordinates (e.g. lightness
///   150) are clipped per channel, never rejected. Clipping is not a search
///   for the nearest valid spec; hue and chroma may shift visibly.
/// - Pure and deterministic, so generated theme files stay diff-stable.
#[must_use]
pub fn resolve(spec: PerceptualColorSpec) -> ResolvedColor {
    let lms_ = mul3(&OKLAB_TO_LMS, spec.to_oklab());
    let lms = lms_.map(|v| v * v * v);
    let [r, g, b] = mul3(&LMS_TO_LINEAR_SRGB, lms).map(encode_srgb);
    ResolvedColor::rgb(r, g, b)
}

/// What: Convert a display color back into a rounded perceptual spec.
///
/// Inputs:
/// - `color`: Color to convert; alpha is ignored.
///
/// Output:
/// - Spec with lightness, chroma and hue each rounded to whole numbers.
///
/// Details:
/// - Used to migrate hex palettes onto `oklch(...)` specs.
/// - Achromatic colors report hue 0; hue is normalized into `0..360`.
#[must_use]
pub fn to_perceptual(color: ResolvedColor) -> PerceptualColorSpec {
    let linear = color.channels().map(decode_srgb);
    let lms = mul3(&LINEAR_SRGB_TO_LMS, linear).map(f64::cbrt);
    let [l, a, b] = mul3(&LMS_TO_OKLAB, lms);
    let chroma = a.hypot(b);
    let hue = if chroma < ACHROMATIC_EPSILON {
        0.0
    } else {
        b.atan2(a).to_degrees().round().rem_euclid(360.0)
    };
    // `+ 0.0` folds a rounded -0 into 0.
    PerceptualColorSpec::new(
        (l * 100.0).round() + 0.0,
        (chroma / MAX_CHROMA * 100.0).round(),
        hue,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Known specs land on their expected hex values.
    ///
    /// Inputs:
    /// - Grays and a handful of saturated accents.
    ///
    /// Output:
    /// - Stable hex strings.
    ///
    /// Details:
    /// - Saturated chroma 100 colors sit outside sRGB and exercise clipping.
    fn resolve_known_specs() {
        let cases = [
            ((100.0, 0.0, 0.0), "#ffffff"),
            ((0.0, 0.0, 0.0), "#000000"),
            ((30.0, 0.0, 0.0), "#2e2e2e"),
            ((95.0, 0.0, 0.0), "#eeeeee"),
            ((60.0, 0.0, 0.0), "#808080"),
            ((50.0, 100.0, 0.0), "#f0005a"),
            ((80.0, 50.0, 140.0), "#6fdb55"),
            ((50.0, 25.0, 0.0), "#904961"),
        ];
        for ((l, c, h), hex) in cases {
            let color = resolve(PerceptualColorSpec::new(l, c, h));
            assert_eq!(color.to_hex(), hex, "oklch({l}, {c}, {h})");
        }
    }

    #[test]
    /// What: Resolving the same spec twice is byte-identical.
    fn resolve_is_deterministic() {
        let spec = PerceptualColorSpec::new(54.0, 100.0, 250.0);
        assert_eq!(resolve(spec).to_hex(), resolve(spec).to_hex());
    }

    #[test]
    /// What: Hue wraps around modulo 360.
    ///
    /// Inputs:
    /// - Hue 0, 360, and -360 with otherwise identical coordinates.
    ///
    /// Output:
    /// - Same color for all three.
    fn hue_wraps_around() {
        let base = resolve(PerceptualColorSpec::new(50.0, 100.0, 0.0));
        assert_eq!(resolve(PerceptualColorSpec::new(50.0, 100.0, 360.0)), base);
        assert_eq!(resolve(PerceptualColorSpec::new(50.0, 100.0, -360.0)), base);
    }

    #[test]
    /// What: Over-range and non-finite coordinates clip instead of failing.
    ///
    /// Inputs:
    /// - Lightness 150, negative lightness, and a NaN hue.
    ///
    /// Output:
    /// - Valid six-digit hex strings.
    fn out_of_range_specs_clip() {
        let bright = resolve(PerceptualColorSpec::new(150.0, 50.0, 0.0));
        assert_eq!(bright.to_hex(), "#ffffff");
        let dark = resolve(PerceptualColorSpec::new(-20.0, 0.0, 0.0));
        assert_eq!(dark.to_hex(), "#000000");
        let nan = resolve(PerceptualColorSpec::new(50.0, 50.0, f64::NAN));
        assert_eq!(nan.to_hex().len(), 7);
    }

    #[test]
    /// What: Inverse conversion recovers rounded specs for in-gamut colors.
    ///
    /// Inputs:
    /// - White, black, a mid gray and an in-gamut green.
    ///
    /// Output:
    /// - The spec each color was generated from; grays report hue 0.
    fn to_perceptual_recovers_specs() {
        assert_eq!(
            to_perceptual(ResolvedColor::rgb(255, 255, 255)),
            PerceptualColorSpec::new(100.0, 0.0, 0.0)
        );
        assert_eq!(
            to_perceptual(ResolvedColor::rgb(0, 0, 0)),
            PerceptualColorSpec::new(0.0, 0.0, 0.0)
        );
        assert_eq!(
            to_perceptual(ResolvedColor::rgb(0x80, 0x80, 0x80)),
            PerceptualColorSpec::new(60.0, 0.0, 0.0)
        );
        assert_eq!(
            to_perceptual(ResolvedColor::rgb(0x6f, 0xdb, 0x55)),
            PerceptualColorSpec::new(80.0, 50.0, 140.0)
        );
    }

    #[test]
    /// What: A hue that rounds up to 360 is reported as 0.
    fn to_perceptual_normalizes_hue() {
        let spec = to_perceptual(ResolvedColor::rgb(0x90, 0x49, 0x61));
        assert_eq!(spec, PerceptualColorSpec::new(50.0, 25.0, 0.0));
    }

    #[test]
    fn display_matches_source_syntax() {
        let spec = PerceptualColorSpec::new(54.0, 100.0, 250.0);
        assert_eq!(spec.to_string(), "oklch(54, 100, 250)");
    }
}
