//! Contrast algorithms and their per-class threshold tables.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::ResolvedColor;
use crate::color::gamma::decode_srgb;

/// Sensitivity tier of a foreground/background pairing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContrastClass {
    /// Readable text.
    Text,
    /// Interactive UI components such as borders of inputs.
    #[serde(alias = "ui-component")]
    #[value(alias = "ui-component")]
    Ui,
    /// Purely decorative separators.
    #[serde(alias = "decorative")]
    #[value(alias = "decorative")]
    Decoration,
}

impl ContrastClass {
    /// Every class, in table order.
    pub const ALL: [Self; 3] = [Self::Text, Self::Ui, Self::Decoration];

    /// Lowercase identifier used in theme sources.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Ui => "ui",
            Self::Decoration => "decoration",
        }
    }
}

impl fmt::Display for ContrastClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contrast metric used to score a pair.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ContrastAlgorithm {
    /// WCAG 2.1 relative-luminance ratio, `1.0..=21.0`.
    #[default]
    Wcag21,
    /// APCA lightness contrast, scored as `|Lc|`.
    Apca,
}

// Luminance coefficients for the WCAG ratio.
const WCAG_R: f64 = 0.2126;
const WCAG_G: f64 = 0.7152;
const WCAG_B: f64 = 0.0722;

// APCA 0.0.98G constants.
const APCA_R: f64 = 0.212_672_9;
const APCA_G: f64 = 0.715_152_2;
const APCA_B: f64 = 0.072_175_0;
const APCA_GAMMA: f64 = 2.4;
const APCA_BLACK_THRESHOLD: f64 = 0.022;
const APCA_BLACK_CLAMP: f64 = 1.414;
const APCA_DELTA_Y_MIN: f64 = 0.0005;
const APCA_SCALE: f64 = 1.14;
const APCA_OFFSET: f64 = 0.027;
const APCA_LOW_CLIP: f64 = 0.1;
const APCA_NORM_BG: f64 = 0.56;
const APCA_NORM_TXT: f64 = 0.57;
const APCA_REV_BG: f64 = 0.65;
const APCA_REV_TXT: f64 = 0.62;

impl ContrastAlgorithm {
    /// What: Look up the minimum passing score for a class.
    ///
    /// Inputs:
    /// - `class`: Sensitivity tier.
    ///
    /// Output:
    /// - Threshold on this algorithm's scale.
    ///
    /// Details:
    /// - `decoration` under WCAG (1.2) is not a WCAG level; it only keeps
    ///   separators from vanishing entirely.
    #[must_use]
    pub const fn threshold(self, class: ContrastClass) -> f64 {
        match (self, class) {
            (Self::Wcag21, ContrastClass::Text) => 4.5,
            (Self::Wcag21, ContrastClass::Ui) => 3.0,
            (Self::Wcag21, ContrastClass::Decoration) => 1.2,
            (Self::Apca, ContrastClass::Text) => 45.0,
            (Self::Apca, ContrastClass::Ui) => 30.0,
            (Self::Apca, ContrastClass::Decoration) => 10.0,
        }
    }

    /// What: Score a foreground/background pair.
    ///
    /// Inputs:
    /// - `foreground`, `background`: Colors to compare; alpha is ignored.
    ///
    /// Output:
    /// - Non-negative score on this algorithm's scale.
    ///
    /// Details:
    /// - WCAG 2.1 is symmetric in its arguments; APCA is not, since it models
    ///   text polarity.
    #[must_use]
    pub fn score(self, foreground: ResolvedColor, background: ResolvedColor) -> f64 {
        match self {
            Self::Wcag21 => wcag21_ratio(foreground, background),
            Self::Apca => apca_lightness_contrast(foreground, background).abs(),
        }
    }
}

impl fmt::Display for ContrastAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wcag21 => "WCAG21",
            Self::Apca => "APCA",
        })
    }
}

/// Relative luminance of a color's RGB channels (WCAG definition).
#[must_use]
pub fn relative_luminance(color: ResolvedColor) -> f64 {
    let [r, g, b] = color.channels().map(decode_srgb);
    WCAG_R * r + WCAG_G * g + WCAG_B * b
}

/// What: Compute the WCAG 2.1 contrast ratio between two colors.
///
/// Inputs:
/// - `a`, `b`: Colors in either order.
///
/// Output:
/// - `(L_lighter + 0.05) / (L_darker + 0.05)`, in `1.0..=21.0`.
#[must_use]
pub fn wcag21_ratio(a: ResolvedColor, b: ResolvedColor) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

fn apca_luminance(color: ResolvedColor) -> f64 {
    let [r, g, b] = color
        .channels()
        .map(|c| (f64::from(c) / 255.0).powf(APCA_GAMMA));
    let y = APCA_R * r + APCA_G * g + APCA_B * b;
    if y < APCA_BLACK_THRESHOLD {
        y + (APCA_BLACK_THRESHOLD - y).powf(APCA_BLACK_CLAMP)
    } else {
        y
    }
}

/// What: Compute the signed APCA lightness contrast `Lc`.
///
/// Inputs:
/// - `text`: Foreground color.
/// - `background`: Surface the text sits on.
///
/// Output:
/// - Positive for dark text on a light background, negative for the reverse,
///   0 for pairs too close to distinguish.
#[must_use]
pub fn apca_lightness_contrast(text: ResolvedColor, background: ResolvedColor) -> f64 {
    let y_txt = apca_luminance(text);
    let y_bg = apca_luminance(background);
    if (y_bg - y_txt).abs() < APCA_DELTA_Y_MIN {
        return 0.0;
    }
    if y_bg > y_txt {
        let c = (y_bg.powf(APCA_NORM_BG) - y_txt.powf(APCA_NORM_TXT)) * APCA_SCALE;
        if c < APCA_LOW_CLIP {
            0.0
        } else {
            (c - APCA_OFFSET) * 100.0
        }
    } else {
        let c = (y_bg.powf(APCA_REV_BG) - y_txt.powf(APCA_REV_TXT)) * APCA_SCALE;
        if c > -APCA_LOW_CLIP {
            0.0
        } else {
            (c + APCA_OFFSET) * 100.0
        }
    }
}
