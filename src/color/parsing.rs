use std::fmt;

use super::oklch::{PerceptualColorSpec, resolve};
use super::types::ResolvedColor;

/// A color string that could not be turned into a [`ResolvedColor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    /// The offending input, untrimmed.
    pub input: String,
    /// Short description of what was wrong with it.
    pub reason: String,
}

impl ColorParseError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color {:?}: {}", self.input, self.reason)
    }
}

impl std::error::Error for ColorParseError {}

/// What: Parse a color literal into a [`ResolvedColor`].
///
/// Inputs:
/// - `s`: Color text from a theme source.
///
/// Output:
/// - `Ok(ResolvedColor)` for recognized formats; `Err(ColorParseError)` naming
///   the input otherwise.
///
/// Details:
/// - Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa` (the `#` is optional for
///   the six and eight digit forms), `R,G,B` decimal triplets (0-255 per
///   channel), `oklch(L, C, H)` with commas or spaces, and `transparent`.
/// - `oklch(...)` goes through [`resolve`], so its coordinates clip rather
///   than fail.
pub fn parse_color(s: &str) -> Result<ResolvedColor, ColorParseError> {
    let t = s.trim();
    if t.is_empty() {
        return Err(ColorParseError::new(s, "empty color value"));
    }
    if t.eq_ignore_ascii_case("transparent") {
        return Ok(ResolvedColor::TRANSPARENT);
    }
    if let Some(args) = strip_function(t, "oklch") {
        return parse_oklch_args(s, args).map(resolve);
    }
    if let Some(hex) = t.strip_prefix('#') {
        return parse_hex_digits(s, hex);
    }
    if t.contains(',') {
        return parse_decimal_triplet(s, t);
    }
    if matches!(t.len(), 6 | 8) && t.chars().all(|c| c.is_ascii_hexdigit()) {
        return parse_hex_digits(s, t);
    }
    Err(ColorParseError::new(s, "unrecognized color format"))
}

/// Return the argument text of `name(...)`, matching the name case-insensitively.
fn strip_function<'a>(t: &'a str, name: &str) -> Option<&'a str> {
    let open = t.find('(')?;
    if !t[..open].trim().eq_ignore_ascii_case(name) {
        return None;
    }
    t[open + 1..].strip_suffix(')')
}

fn parse_oklch_args(input: &str, args: &str) -> Result<PerceptualColorSpec, ColorParseError> {
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    let [l, c, h] = parts.as_slice() else {
        return Err(ColorParseError::new(
            input,
            format!("oklch() takes 3 components, found {}", parts.len()),
        ));
    };
    let num = |raw: &str, what: &str| -> Result<f64, ColorParseError> {
        let v = raw
            .strip_suffix('%')
            .unwrap_or(raw)
            .parse::<f64>()
            .map_err(|_| ColorParseError::new(input, format!("{what} {raw:?} is not a number")))?;
        if v.is_finite() {
            Ok(v)
        } else {
            Err(ColorParseError::new(input, format!("{what} must be finite")))
        }
    };
    Ok(PerceptualColorSpec::new(
        num(*l, "lightness")?,
        num(*c, "chroma")?,
        num(h.strip_suffix("deg").unwrap_or(*h), "hue")?,
    ))
}

fn parse_hex_digits(input: &str, hex: &str) -> Result<ResolvedColor, ColorParseError> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::new(input, "non-hex digit in hex color"));
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).unwrap_or(0) * 0x11;
    match hex.len() {
        3 => Ok(ResolvedColor::rgb(nibble(0), nibble(1), nibble(2))),
        4 => Ok(ResolvedColor::rgba(
            nibble(0),
            nibble(1),
            nibble(2),
            nibble(3),
        )),
        6 => Ok(ResolvedColor::rgb(byte(0), byte(2), byte(4))),
        8 => Ok(ResolvedColor::rgba(byte(0), byte(2), byte(4), byte(6))),
        n => Err(ColorParseError::new(
            input,
            format!("hex color must have 3, 4, 6 or 8 digits, found {n}"),
        )),
    }
}

fn parse_decimal_triplet(input: &str, t: &str) -> Result<ResolvedColor, ColorParseError> {
    let parts: Vec<&str> = t.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(ColorParseError::new(
            input,
            "decimal color must be R,G,B",
        ));
    };
    let channel = |raw: &str| {
        raw.parse::<u8>()
            .map_err(|_| ColorParseError::new(input, format!("channel {raw:?} is not in 0-255")))
    };
    Ok(ResolvedColor::rgb(channel(*r)?, channel(*g)?, channel(*b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Every supported literal form parses to the expected color.
    ///
    /// Inputs:
    /// - Hex in all widths, decimal triplets, `transparent`, and oklch forms.
    ///
    /// Output:
    /// - Matching canonical hex strings.
    fn parse_supported_forms() {
        let cases = [
            ("#fff", "#ffffff"),
            ("#f008", "#ff000088"),
            ("#F0005A", "#f0005a"),
            ("f0005a", "#f0005a"),
            ("#0000001a", "#0000001a"),
            ("  30, 60,90 ", "#1e3c5a"),
            ("transparent", "#00000000"),
            ("oklch(50, 100, 0)", "#f0005a"),
            ("oklch(50 100 0)", "#f0005a"),
            ("OKLCH(50%, 100%, 0deg)", "#f0005a"),
            ("oklch(100, 0, 0)", "#ffffff"),
        ];
        for (input, hex) in cases {
            let color = parse_color(input).unwrap_or_else(|e| panic!("{input}: {e}"));
            assert_eq!(color.to_hex(), hex, "{input}");
        }
    }

    #[test]
    /// What: Malformed inputs fail fast and name the offending text.
    ///
    /// Inputs:
    /// - Empty text, bad hex digits and widths, out-of-range decimals,
    ///   malformed oklch calls, and unknown words.
    ///
    /// Output:
    /// - `ColorParseError` whose `input` is the original string.
    fn parse_rejects_malformed_input() {
        for input in [
            "",
            "#ggg",
            "#12345",
            "256,0,0",
            "1,2",
            "oklch(50, 100)",
            "oklch(a, b, c)",
            "oklch(50, 100, 0",
            "blue",
        ] {
            let err = parse_color(input).expect_err(input);
            assert_eq!(err.input, input);
            assert!(err.to_string().contains("invalid color"));
        }
    }

    #[test]
    /// What: `FromStr` on `ResolvedColor` goes through the same parser.
    fn from_str_uses_parser() {
        let color: ResolvedColor = "#abc".parse().expect("parse");
        assert_eq!(color.to_hex(), "#aabbcc");
        assert!("nope".parse::<ResolvedColor>().is_err());
    }
}
