//! TOML theme source loading.
//!
//! A source declares palette groups, workbench sections, token rules and
//! contrast checks. Everything is resolved to concrete colors at load time,
//! so the rest of the pipeline never sees references or literals.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use toml::{Table, Value};

use crate::color::{ResolvedColor, parse_color, with_alpha};
use crate::contrast::{ContrastAlgorithm, ContrastCheck, ContrastClass, FailurePolicy};

use super::document::{FontStyle, TokenColor, TokenScope, TokenSettings};
use super::error::ThemeError;
use super::palette::{ColorGroup, Palette, is_reference};

/// Theme kind used when the source does not set `type`.
const DEFAULT_KIND: &str = "dark";

/// Run settings declared in the source's `[settings]` table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceSettings {
    /// Contrast algorithm; the built-in default applies when absent.
    pub algorithm: Option<ContrastAlgorithm>,
    /// Failure policy; the built-in default applies when absent.
    pub on_failure: Option<FailurePolicy>,
}

/// A fully resolved theme source.
#[derive(Clone, Debug)]
pub struct ThemeSource {
    /// Base theme kind written as `type`.
    pub kind: String,
    /// Output path declared by the source.
    pub output: Option<PathBuf>,
    /// Declared run settings.
    pub settings: SourceSettings,
    /// Named color groups.
    pub palette: Palette,
    /// Workbench colors after merging every section in order.
    pub workbench: ColorGroup,
    /// Token rules in declaration order.
    pub token_colors: Vec<TokenColor>,
    /// Expanded contrast checks in declaration order.
    pub checks: Vec<ContrastCheck>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSource {
    #[serde(rename = "type")]
    kind: Option<String>,
    output: Option<PathBuf>,
    #[serde(default)]
    settings: SourceSettings,
    #[serde(default)]
    palette: Table,
    #[serde(default)]
    workbench: Table,
    #[serde(default)]
    tokens: BTreeMap<String, RawTokenStyle>,
    #[serde(default)]
    token_colors: Vec<RawTokenColor>,
    #[serde(default)]
    checks: Vec<RawCheck>,
}

/// Reusable token style from the `[tokens]` table.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTokenStyle {
    foreground: String,
    #[serde(default)]
    font_style: FontStyle,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTokenColor {
    name: Option<String>,
    scope: TokenScope,
    style: Option<String>,
    foreground: Option<String>,
    font_style: Option<FontStyle>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRefs {
    One(String),
    Many(Vec<String>),
}

impl RawRefs {
    fn as_slice(&self) -> &[String] {
        match self {
            Self::One(one) => std::slice::from_ref(one),
            Self::Many(many) => many,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCheck {
    class: ContrastClass,
    foreground: RawRefs,
    background: RawRefs,
    #[serde(default)]
    except: Vec<String>,
}

/// Where references are looked up while resolving a value.
struct Scope<'a> {
    palette: &'a Palette,
    /// Group currently being built, for references to its earlier entries.
    local: Option<&'a ColorGroup>,
}

impl Scope<'_> {
    fn lookup(&self, reference: &str) -> Option<ResolvedColor> {
        if let Some(local) = self.local
            && let Some((group, key)) = reference.split_once('.')
            && group == local.name()
            && let Some(color) = local.get(key)
        {
            return Some(color);
        }
        self.palette.lookup(reference)
    }
}

impl ThemeSource {
    /// What: Parse and resolve a theme source from TOML text.
    ///
    /// Inputs:
    /// - `text`: Source document.
    ///
    /// Output:
    /// - Resolved source with every color concrete and every check expanded.
    ///
    /// Details:
    /// - Palette groups resolve in declaration order; a value may reference
    ///   any earlier group or an earlier entry of its own group.
    /// - Workbench sections reference the palette only and merge in order.
    ///
    /// # Errors
    /// - [`ThemeError::Toml`] for syntax or schema problems.
    /// - [`ThemeError::Color`], [`ThemeError::UnknownReference`] or
    ///   [`ThemeError::Invalid`] naming the offending key.
    pub fn from_toml(text: &str) -> Result<Self, ThemeError> {
        let raw: RawSource = toml::from_str(text)?;
        let palette = resolve_palette(&raw.palette)?;
        let workbench = resolve_workbench(&raw.workbench, &palette)?;
        let styles = resolve_styles(&raw.tokens, &palette)?;
        let token_colors = resolve_token_colors(raw.token_colors, &styles, &palette)?;
        let checks = expand_checks(&raw.checks, &palette)?;
        tracing::debug!(
            groups = palette.groups().len(),
            colors = workbench.len(),
            token_colors = token_colors.len(),
            checks = checks.len(),
            "resolved theme source"
        );
        Ok(Self {
            kind: raw.kind.unwrap_or_else(|| DEFAULT_KIND.to_string()),
            output: raw.output,
            settings: raw.settings,
            palette,
            workbench,
            token_colors,
            checks,
        })
    }
}

/// What: Read and resolve a theme source file.
///
/// Inputs:
/// - `path`: TOML file to load.
///
/// Output:
/// - The resolved [`ThemeSource`].
///
/// # Errors
/// Returns [`ThemeError::Io`] when the file cannot be read, otherwise any
/// error from [`ThemeSource::from_toml`].
pub fn load_source(path: &Path) -> Result<ThemeSource, ThemeError> {
    let text = fs::read_to_string(path).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let source = ThemeSource::from_toml(&text)?;
    tracing::info!(path = %path.display(), kind = %source.kind, "loaded theme source");
    Ok(source)
}

fn resolve_palette(table: &Table) -> Result<Palette, ThemeError> {
    let mut palette = Palette::default();
    for (name, value) in table {
        let Value::Table(entries) = value else {
            return Err(ThemeError::Invalid(format!(
                "palette.{name}: expected a table of colors, found {}",
                value.type_str()
            )));
        };
        let mut flat = Vec::new();
        flatten(entries, "", &mut flat);
        let mut group = ColorGroup::new(name.as_str());
        for (key, value) in flat {
            let full_key = format!("palette.{name}.{key}");
            let color = resolve_value(
                value,
                &full_key,
                &Scope {
                    palette: &palette,
                    local: Some(&group),
                },
            )?;
            group.insert(key, color);
        }
        tracing::debug!(group = %name, colors = group.len(), "resolved palette group");
        palette.insert_group(group);
    }
    Ok(palette)
}

fn resolve_workbench(table: &Table, palette: &Palette) -> Result<ColorGroup, ThemeError> {
    let scope = Scope {
        palette,
        local: None,
    };
    let mut merged = ColorGroup::new("colors");
    for (section, value) in table {
        let Value::Table(entries) = value else {
            return Err(ThemeError::Invalid(format!(
                "workbench.{section}: expected a table of colors, found {}",
                value.type_str()
            )));
        };
        let mut flat = Vec::new();
        flatten(entries, "", &mut flat);
        let mut group = ColorGroup::new(section.as_str());
        for (key, value) in flat {
            let color = resolve_value(value, &format!("workbench.{section}.{key}"), &scope)?;
            group.insert(key, color);
        }
        merged = merged.merge(&group);
    }
    Ok(merged)
}

fn resolve_styles(
    raw: &BTreeMap<String, RawTokenStyle>,
    palette: &Palette,
) -> Result<BTreeMap<String, TokenSettings>, ThemeError> {
    let scope = Scope {
        palette,
        local: None,
    };
    raw.iter()
        .map(|(name, style)| {
            let foreground =
                resolve_text(&style.foreground, &format!("tokens.{name}.foreground"), &scope)?;
            Ok((
                name.clone(),
                TokenSettings {
                    foreground: Some(foreground),
                    font_style: Some(style.font_style),
                },
            ))
        })
        .collect()
}

fn resolve_token_colors(
    raw: Vec<RawTokenColor>,
    styles: &BTreeMap<String, TokenSettings>,
    palette: &Palette,
) -> Result<Vec<TokenColor>, ThemeError> {
    let scope = Scope {
        palette,
        local: None,
    };
    let mut rules = Vec::with_capacity(raw.len());
    for (index, rule) in raw.into_iter().enumerate() {
        let key = format!("token_colors[{index}]");
        let mut settings = match &rule.style {
            Some(name) => styles.get(name).cloned().ok_or_else(|| ThemeError::UnknownReference {
                key: format!("{key}.style"),
                reference: name.clone(),
            })?,
            None => TokenSettings {
                foreground: None,
                font_style: None,
            },
        };
        if let Some(text) = &rule.foreground {
            settings.foreground = Some(resolve_text(text, &format!("{key}.foreground"), &scope)?);
        }
        if let Some(font_style) = rule.font_style {
            settings.font_style = Some(font_style);
        }
        if settings.foreground.is_none() && settings.font_style.is_none() {
            return Err(ThemeError::Invalid(format!(
                "{key}: needs a style, a foreground or a font_style"
            )));
        }
        rules.push(TokenColor {
            name: rule.name,
            scope: rule.scope,
            settings,
        });
    }
    Ok(rules)
}

/// What: Expand declared checks into concrete color pairs.
///
/// Inputs:
/// - `raw`: Declared checks.
/// - `palette`: Resolved palette for references and wildcards.
///
/// Output:
/// - One [`ContrastCheck`] per foreground and background combination,
///   foreground-major, in declaration order.
///
/// Details:
/// - `except` drops entries by label from both sides.
/// - A value that is not a reference is parsed as a color literal and labeled
///   with its own text.
fn expand_checks(raw: &[RawCheck], palette: &Palette) -> Result<Vec<ContrastCheck>, ThemeError> {
    let mut checks = Vec::new();
    for (index, check) in raw.iter().enumerate() {
        let key = format!("checks[{index}]");
        let foregrounds = expand_side(&check.foreground, &check.except, palette, &key)?;
        let backgrounds = expand_side(&check.background, &check.except, palette, &key)?;
        if foregrounds.is_empty() || backgrounds.is_empty() {
            tracing::warn!(check = %key, "contrast check expands to no pairs");
        }
        for (fg_label, fg) in &foregrounds {
            for (bg_label, bg) in &backgrounds {
                checks.push(ContrastCheck::new(
                    check.class,
                    *fg,
                    *bg,
                    fg_label.as_str(),
                    bg_label.as_str(),
                ));
            }
        }
    }
    Ok(checks)
}

fn expand_side(
    refs: &RawRefs,
    except: &[String],
    palette: &Palette,
    key: &str,
) -> Result<Vec<(String, ResolvedColor)>, ThemeError> {
    let mut out = Vec::new();
    for pattern in refs.as_slice() {
        let matched = if is_reference(pattern) {
            palette
                .expand(pattern.trim())
                .ok_or_else(|| ThemeError::UnknownReference {
                    key: key.to_string(),
                    reference: pattern.clone(),
                })?
        } else {
            let color = parse_color(pattern).map_err(|source| ThemeError::Color {
                key: key.to_string(),
                source,
            })?;
            vec![(pattern.clone(), color)]
        };
        out.extend(matched.into_iter().filter(|(label, _)| !except.contains(label)));
    }
    Ok(out)
}

/// Flatten nested tables into dotted keys; `{ color, alpha }` tables are leaves.
fn flatten<'a>(table: &'a Table, prefix: &str, out: &mut Vec<(String, &'a Value)>) {
    for (key, value) in table {
        let name = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Table(inner) if !inner.contains_key("color") => flatten(inner, &name, out),
            _ => out.push((name, value)),
        }
    }
}

fn resolve_value(value: &Value, key: &str, scope: &Scope<'_>) -> Result<ResolvedColor, ThemeError> {
    match value {
        Value::String(text) => resolve_text(text, key, scope),
        Value::Table(table) => {
            if let Some(field) = table.keys().find(|k| *k != "color" && *k != "alpha") {
                return Err(ThemeError::Invalid(format!(
                    "{key}: unknown field \"{field}\", expected `color` and `alpha`"
                )));
            }
            let color = match table.get("color") {
                Some(Value::String(text)) => resolve_text(text, key, scope)?,
                _ => {
                    return Err(ThemeError::Invalid(format!(
                        "{key}: `color` must be a string"
                    )));
                }
            };
            match table.get("alpha") {
                None => Ok(color),
                Some(alpha) => Ok(with_alpha(color, alpha_percent(alpha, key)?)),
            }
        }
        other => Err(ThemeError::Invalid(format!(
            "{key}: expected a color string or {{ color, alpha }} table, found {}",
            other.type_str()
        ))),
    }
}

#[allow(clippy::cast_precision_loss)]
fn alpha_percent(value: &Value, key: &str) -> Result<f64, ThemeError> {
    match value {
        Value::Integer(percent) => Ok(*percent as f64),
        Value::Float(percent) => Ok(*percent),
        other => Err(ThemeError::Invalid(format!(
            "{key}: `alpha` must be a number of percent, found {}",
            other.type_str()
        ))),
    }
}

fn resolve_text(text: &str, key: &str, scope: &Scope<'_>) -> Result<ResolvedColor, ThemeError> {
    if is_reference(text) {
        let reference = text.trim();
        return scope
            .lookup(reference)
            .ok_or_else(|| ThemeError::UnknownReference {
                key: key.to_string(),
                reference: reference.to_string(),
            });
    }
    parse_color(text).map_err(|source| ThemeError::Color {
        key: key.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"
type = "light"
output = "out/theme.json"

[settings]
algorithm = "apca"
on_failure = "fail"

[palette.ui]
fg = "oklch(30, 0, 0)"
bg0 = "#ffffff"
bg1 = "ui.bg0"
shadow = "transparent"
tooltip = { bg = "238,238,238", border = "#ccc" }

[palette.syntax]
default = "oklch(20, 0, 0)"
keyword = "syntax.default"
comment = "ui.fg"

[workbench.editor]
"editor.background" = "ui.bg0"
"editor.foreground" = "ui.fg"
"editor.lineHighlightBackground" = { color = "ui.fg", alpha = 10 }

[workbench.overrides]
"editor.background" = "ui.tooltip.bg"

[tokens]
keyword = { foreground = "syntax.keyword", font_style = "bold" }

[[token_colors]]
scope = "keyword"
style = "keyword"

[[token_colors]]
name = "Emphasis"
scope = ["emphasis"]
font_style = "italic"

[[checks]]
class = "text"
foreground = "syntax.*"
background = ["ui.bg0", "ui.bg1"]
except = ["syntax.keyword"]
"##;

    #[test]
    /// What: A full source resolves every section.
    ///
    /// Inputs:
    /// - Sample with settings, references, nested keys, alpha, styles and checks.
    ///
    /// Output:
    /// - Concrete colors everywhere, merged workbench, expanded checks.
    fn resolves_sample_source() {
        let source = ThemeSource::from_toml(SAMPLE).expect("valid source");
        assert_eq!(source.kind, "light");
        assert_eq!(source.output, Some(PathBuf::from("out/theme.json")));
        assert_eq!(source.settings.algorithm, Some(ContrastAlgorithm::Apca));
        assert_eq!(source.settings.on_failure, Some(FailurePolicy::Fail));

        let palette = &source.palette;
        assert_eq!(palette.lookup("ui.fg"), Some(ResolvedColor::rgb(0x2e, 0x2e, 0x2e)));
        assert_eq!(palette.lookup("ui.bg1"), Some(ResolvedColor::rgb(255, 255, 255)));
        assert_eq!(palette.lookup("ui.shadow"), Some(ResolvedColor::TRANSPARENT));
        assert_eq!(
            palette.lookup("ui.tooltip.bg"),
            Some(ResolvedColor::rgb(238, 238, 238))
        );
        assert_eq!(
            palette.lookup("syntax.keyword"),
            Some(ResolvedColor::rgb(0x16, 0x16, 0x16))
        );

        let colors = &source.workbench;
        assert_eq!(
            colors.get("editor.background"),
            Some(ResolvedColor::rgb(238, 238, 238))
        );
        assert_eq!(
            colors.get("editor.lineHighlightBackground").map(|c| c.to_hex()),
            Some("#2e2e2e1a".to_string())
        );

        assert_eq!(source.token_colors.len(), 2);
        let keyword = &source.token_colors[0].settings;
        assert_eq!(keyword.foreground, Some(ResolvedColor::rgb(0x16, 0x16, 0x16)));
        assert_eq!(keyword.font_style, Some(FontStyle::Bold));
        let emphasis = &source.token_colors[1];
        assert_eq!(emphasis.name.as_deref(), Some("Emphasis"));
        assert_eq!(emphasis.settings.foreground, None);

        let pairs: Vec<(&str, &str)> = source
            .checks
            .iter()
            .map(|c| (c.foreground_label.as_str(), c.background_label.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("syntax.default", "ui.bg0"),
                ("syntax.default", "ui.bg1"),
                ("syntax.comment", "ui.bg0"),
                ("syntax.comment", "ui.bg1"),
            ]
        );
    }

    #[test]
    /// What: Missing sections fall back to defaults.
    fn empty_source_uses_defaults() {
        let source = ThemeSource::from_toml("").expect("empty source");
        assert_eq!(source.kind, "dark");
        assert_eq!(source.settings, SourceSettings::default());
        assert!(source.workbench.is_empty());
        assert!(source.checks.is_empty());
    }

    #[test]
    /// What: Unknown references name the offending key.
    fn unknown_reference_names_key() {
        let err = ThemeSource::from_toml(
            "[palette.ui]\nfg = \"#000\"\n[workbench.editor]\n\"editor.foreground\" = \"ui.missing\"\n",
        )
        .expect_err("unknown reference");
        assert!(matches!(
            &err,
            ThemeError::UnknownReference { key, reference }
                if key == "workbench.editor.editor.foreground" && reference == "ui.missing"
        ));
    }

    #[test]
    /// What: References only see earlier palette groups.
    fn forward_group_reference_fails() {
        let err = ThemeSource::from_toml(
            "[palette.a]\nx = \"b.y\"\n[palette.b]\ny = \"#fff\"\n",
        )
        .expect_err("forward reference");
        assert!(matches!(err, ThemeError::UnknownReference { .. }));
    }

    #[test]
    /// What: Malformed colors surface as color errors with the key.
    fn malformed_color_names_key() {
        let err = ThemeSource::from_toml("[palette.ui]\nfg = \"#12345\"\n").expect_err("bad hex");
        assert!(matches!(&err, ThemeError::Color { key, .. } if key == "palette.ui.fg"));
        assert!(err.to_string().starts_with("palette.ui.fg: "));
    }

    #[test]
    /// What: Schema violations are rejected as TOML errors.
    fn unknown_top_level_field_rejected() {
        let err = ThemeSource::from_toml("colour = 1\n").expect_err("unknown field");
        assert!(matches!(err, ThemeError::Toml(_)));
    }

    #[test]
    /// What: Token rules need something to set.
    fn empty_token_rule_rejected() {
        let err = ThemeSource::from_toml("[[token_colors]]\nscope = \"comment\"\n")
            .expect_err("empty rule");
        assert!(matches!(err, ThemeError::Invalid(_)));
    }

    #[test]
    /// What: Literal colors are allowed in checks and labeled by their text.
    fn literal_colors_in_checks() {
        let source = ThemeSource::from_toml(
            "[[checks]]\nclass = \"ui\"\nforeground = \"#808080\"\nbackground = \"#ffffff\"\n",
        )
        .expect("literal check");
        assert_eq!(source.checks.len(), 1);
        assert_eq!(source.checks[0].foreground_label, "#808080");
        assert_eq!(source.checks[0].class, ContrastClass::Ui);
    }

    #[test]
    /// What: Loading a missing file reports the path.
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.toml");
        let err = load_source(&path).expect_err("missing file");
        assert!(matches!(err, ThemeError::Io { .. }));
    }
}
