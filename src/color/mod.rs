//! Color values and the conversions the theme generator needs.
//!
//! Specs are written in percentage OKLCH and resolved into canonical sRGB hex
//! colors; translucent variants are produced by attaching an alpha channel.

/// Alpha channel attachment.
mod alpha;
/// sRGB transfer functions.
pub(crate) mod gamma;
/// OKLCH specs and conversions.
mod oklch;
/// Color literal parsing.
mod parsing;
/// Canonical color type.
mod types;

pub use alpha::with_alpha;
pub use oklch::{MAX_CHROMA, PerceptualColorSpec, resolve, to_perceptual};
pub use parsing::{ColorParseError, parse_color};
pub use types::ResolvedColor;
