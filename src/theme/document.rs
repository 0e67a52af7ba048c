//! The generated theme document and its serialization.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::ResolvedColor;

use super::error::ThemeError;
use super::source::ThemeSource;

/// Font style attached to a token color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Explicitly no style; serialized as an empty string.
    #[default]
    #[serde(rename = "")]
    None,
    /// Bold.
    Bold,
    /// Italic.
    Italic,
    /// Underline.
    Underline,
    /// Strikethrough.
    Strikethrough,
}

/// One TextMate scope or a list of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenScope {
    /// A single scope selector.
    One(String),
    /// Several scope selectors sharing the same settings.
    Many(Vec<String>),
}

/// Settings applied to matching tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenSettings {
    /// Foreground color, absent for style-only rules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<ResolvedColor>,
    /// Font style; always present alongside a foreground.
    #[serde(rename = "fontStyle", skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
}

/// A syntax-highlighting rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenColor {
    /// Optional human-readable rule name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Scopes the rule applies to.
    pub scope: TokenScope,
    /// What the rule sets.
    pub settings: TokenSettings,
}

/// The theme file written for the editor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ThemeDocument {
    /// Base theme kind, e.g. `light` or `dark`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Workbench colors sorted by key.
    pub colors: BTreeMap<String, ResolvedColor>,
    /// Syntax rules in source order.
    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<TokenColor>,
}

impl ThemeDocument {
    /// What: Assemble the document from a loaded source.
    ///
    /// Inputs:
    /// - `source`: Fully resolved theme source.
    ///
    /// Output:
    /// - Document whose color keys are sorted, so reordering the source never
    ///   changes the generated file.
    #[must_use]
    pub fn from_source(source: &ThemeSource) -> Self {
        Self {
            kind: source.kind.clone(),
            colors: source.workbench.sorted(),
            token_colors: source.token_colors.clone(),
        }
    }

    /// Serialize as pretty JSON with two-space indentation.
    ///
    /// # Errors
    /// Returns [`ThemeError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// What: Write the document to disk.
    ///
    /// Inputs:
    /// - `path`: Destination file; missing parent directories are created.
    ///
    /// Output:
    /// - `Ok(())` once the file is written.
    ///
    /// Details:
    /// - One-shot write with no retry; I/O errors carry the path.
    ///
    /// # Errors
    /// Returns [`ThemeError::Io`] or [`ThemeError::Json`].
    pub fn write(&self, path: &Path) -> Result<(), ThemeError> {
        let json = self.to_json()?;
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|source| ThemeError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, &json).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            path = %path.display(),
            bytes = json.len(),
            colors = self.colors.len(),
            token_colors = self.token_colors.len(),
            "wrote theme document"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ThemeDocument {
        let mut colors = BTreeMap::new();
        colors.insert("tab.border".to_string(), ResolvedColor::rgb(0xce, 0xce, 0xce));
        colors.insert(
            "editor.background".to_string(),
            ResolvedColor::rgb(0xff, 0xff, 0xff),
        );
        ThemeDocument {
            kind: "light".to_string(),
            colors,
            token_colors: vec![
                TokenColor {
                    name: None,
                    scope: TokenScope::One("emphasis".to_string()),
                    settings: TokenSettings {
                        foreground: None,
                        font_style: Some(FontStyle::Italic),
                    },
                },
                TokenColor {
                    name: Some("JSX tags".to_string()),
                    scope: TokenScope::Many(vec!["entity.name.tag".to_string()]),
                    settings: TokenSettings {
                        foreground: Some(ResolvedColor::rgb(0, 0x38, 0xff)),
                        font_style: Some(FontStyle::None),
                    },
                },
            ],
        }
    }

    #[test]
    /// What: JSON layout matches what the editor expects.
    ///
    /// Inputs:
    /// - Document with two colors and two token rules.
    ///
    /// Output:
    /// - `type`, sorted `colors`, and `tokenColors` with omitted empty fields.
    fn json_layout() {
        let json = sample().to_json().expect("json");
        let expected = r##"{
  "type": "light",
  "colors": {
    "editor.background": "#ffffff",
    "tab.border": "#cecece"
  },
  "tokenColors": [
    {
      "scope": "emphasis",
      "settings": {
        "fontStyle": "italic"
      }
    },
    {
      "name": "JSX tags",
      "scope": [
        "entity.name.tag"
      ],
      "settings": {
        "foreground": "#0038ff",
        "fontStyle": ""
      }
    }
  ]
}"##;
        assert_eq!(json, expected);
    }

    #[test]
    /// What: Writing creates parent directories and stores the JSON verbatim.
    fn write_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("themes").join("out.json");
        let doc = sample();
        doc.write(&path).expect("write");
        let written = fs::read_to_string(&path).expect("read back");
        assert_eq!(written, doc.to_json().expect("json"));
    }

    #[test]
    /// What: Write failures surface as I/O errors naming the path.
    fn write_reports_io_errors() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A directory cannot be overwritten with a file.
        let err = sample().write(dir.path()).expect_err("directory target");
        assert!(matches!(err, ThemeError::Io { .. }));
        assert!(err.to_string().contains(&dir.path().display().to_string()));
    }
}
