use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::parsing::{ColorParseError, parse_color};

/// Canonical display color: 8-bit sRGB channels plus an optional 8-bit alpha.
///
/// Two colors compare equal exactly when their hex encodings are equal, so an
/// explicit alpha of 255 is the same color as no alpha at all.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; `None` means fully opaque.
    pub a: Option<u8>,
}

impl ResolvedColor {
    /// Fully transparent black, used where the editor insists on an alpha color.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Build an opaque color from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Build a color with an explicit alpha channel.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r,
            g,
            b,
            a: Some(a),
        }
    }

    /// The RGB channels without alpha.
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Effective alpha value (255 when none was attached).
    #[must_use]
    pub const fn alpha(self) -> u8 {
        match self.a {
            Some(a) => a,
            None => 255,
        }
    }

    /// Whether the color renders without any translucency.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.alpha() == 255
    }

    /// Drop the alpha channel, keeping RGB untouched.
    #[must_use]
    pub const fn opaque(self) -> Self {
        Self::rgb(self.r, self.g, self.b)
    }

    /// What: Encode the color as a fixed-width lowercase hex string.
    ///
    /// Inputs:
    /// - `self`: Color to encode.
    ///
    /// Output:
    /// - `#rrggbb` for opaque colors, `#rrggbbaa` otherwise.
    ///
    /// Details:
    /// - The encoding is total and deterministic; generated theme files rely on
    ///   it being byte-stable across runs.
    #[must_use]
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r,
                self.g,
                self.b,
                self.alpha()
            )
        }
    }
}

impl PartialEq for ResolvedColor {
    fn eq(&self, other: &Self) -> bool {
        self.channels() == other.channels() && self.alpha() == other.alpha()
    }
}

impl Eq for ResolvedColor {}

impl Hash for ResolvedColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.channels().hash(state);
        self.alpha().hash(state);
    }
}

impl fmt::Display for ResolvedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ResolvedColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl Serialize for ResolvedColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for ResolvedColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_color(&raw).map_err(serde::de::Error::custom)
    }
}
