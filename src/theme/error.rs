use std::fmt;
use std::path::PathBuf;

use crate::color::ColorParseError;
use crate::contrast::ContrastFailures;

/// What: Errors raised while loading a theme source or producing the theme file.
///
/// Inputs: Generated by the loader, the document writer and policy enforcement.
///
/// Output: Implements `Display`/`Error` for propagation up to `main`.
///
/// Details:
/// - Every variant names the file, key or reference at fault so the run can
///   be fixed without guessing. A theme is never partially generated.
#[derive(Debug)]
pub enum ThemeError {
    /// Reading or writing a file failed.
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The theme source is not valid TOML or does not match the schema.
    Toml(toml::de::Error),
    /// Serializing the theme document failed.
    Json(serde_json::Error),
    /// A color value could not be parsed.
    Color {
        /// Key whose value was malformed, e.g. `palette.ui.fg`.
        key: String,
        /// Parser diagnostics.
        source: ColorParseError,
    },
    /// A `group.name` reference points at nothing.
    UnknownReference {
        /// Key holding the reference.
        key: String,
        /// The reference text.
        reference: String,
    },
    /// Structural problem in the source.
    Invalid(String),
    /// Contrast checks failed under the `fail` policy.
    ContrastFailures(ContrastFailures),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Toml(err) => write!(f, "theme source: {err}"),
            Self::Json(err) => write!(f, "theme document: {err}"),
            Self::Color { key, source } => write!(f, "{key}: {source}"),
            Self::UnknownReference { key, reference } => {
                write!(f, "{key}: unknown color reference \"{reference}\"")
            }
            Self::Invalid(msg) => f.write_str(msg),
            Self::ContrastFailures(failures) => write!(f, "{failures}"),
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Toml(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Color { source, .. } => Some(source),
            Self::ContrastFailures(failures) => Some(failures),
            Self::UnknownReference { .. } | Self::Invalid(_) => None,
        }
    }
}

impl From<toml::de::Error> for ThemeError {
    fn from(value: toml::de::Error) -> Self {
        Self::Toml(value)
    }
}

impl From<serde_json::Error> for ThemeError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<ContrastFailures> for ThemeError {
    fn from(value: ContrastFailures) -> Self {
        Self::ContrastFailures(value)
    }
}
