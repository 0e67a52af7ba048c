use super::types::ResolvedColor;

/// What: Attach an alpha channel to an already-resolved color.
///
/// Inputs:
/// - `color`: Base color; any existing alpha is discarded.
/// - `percent`: Opacity in percent, clipped to `0..=100`.
///
/// Output:
/// - Same RGB channels with alpha `round(percent / 100 * 255)`.
///
/// Details:
/// - Replaces the alpha; nothing is blended against a background. The editor
///   composites the translucent color itself.
/// - A NaN percent yields a fully transparent color.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn with_alpha(color: ResolvedColor, percent: f64) -> ResolvedColor {
    let p = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    let a = (p / 100.0 * 255.0).round() as u8;
    ResolvedColor::rgba(color.r, color.g, color.b, a)
}
