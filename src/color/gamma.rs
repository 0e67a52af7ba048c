//! sRGB transfer functions (IEC 61966-2-1).

/// What: Decode an 8-bit sRGB channel into linear light.
///
/// Inputs:
/// - `channel`: Gamma-encoded channel value.
///
/// Output:
/// - Linear-light value in `[0, 1]`.
pub(crate) fn decode_srgb(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// What: Encode a linear-light value into an 8-bit sRGB channel.
///
/// Inputs:
/// - `linear`: Linear-light value; may lie outside `[0, 1]` or be non-finite.
///
/// Output:
/// - Channel value in `[0, 255]`.
///
/// Details:
/// - Out-of-gamut input is clipped to `[0, 1]` before encoding; non-finite
///   input clips to 0.
/// - Quantizes with rounding, so adjacent specs never drift by one step
///   between runs.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn encode_srgb(linear: f64) -> u8 {
    let l = if linear.is_finite() {
        linear.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let v = if l <= 0.003_130_8 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    };
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Decoding then encoding reproduces every 8-bit value.
    ///
    /// Inputs:
    /// - All channel values 0..=255.
    ///
    /// Output:
    /// - Identical channel after the round trip.
    fn transfer_functions_are_inverse_on_u8() {
        for c in 0..=255u8 {
            assert_eq!(encode_srgb(decode_srgb(c)), c);
        }
    }

    #[test]
    /// What: Out-of-range and non-finite linear values clip instead of wrapping.
    fn encode_clips_out_of_gamut() {
        assert_eq!(encode_srgb(-0.5), 0);
        assert_eq!(encode_srgb(1.7), 255);
        assert_eq!(encode_srgb(f64::NAN), 0);
        assert_eq!(encode_srgb(f64::INFINITY), 0);
    }
}
