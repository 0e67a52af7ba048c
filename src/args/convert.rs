//! Palette conversion handler (`--convert`).

use std::fmt::Write as _;

use crate::color::{ResolvedColor, to_perceptual};
use crate::theme::Palette;

/// What: Print the resolved palette as `oklch(...)` source tables.
///
/// Inputs:
/// - `palette`: Resolved palette of the loaded source.
///
/// Output:
/// - Writes [`render_oklch_palette`] to stdout.
pub fn handle_convert(palette: &Palette) {
    tracing::info!(groups = palette.groups().len(), "converting palette to oklch");
    print!("{}", render_oklch_palette(palette));
}

/// What: Render a palette as `[palette.<group>]` tables of rounded `oklch(...)` values.
///
/// Inputs:
/// - `palette`: Palette to render.
///
/// Output:
/// - TOML text that loads back into the same groups.
///
/// Details:
/// - Lightness and chroma are percent, hue degrees, each rounded to whole
///   numbers; achromatic colors get hue 0.
/// - Fully transparent colors render as `transparent`; other translucent
///   colors as `{ color, alpha }` with alpha in whole percent.
#[must_use]
pub fn render_oklch_palette(palette: &Palette) -> String {
    let mut out = String::new();
    for (index, group) in palette.groups().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "[palette.{}]", toml_key(group.name()));
        for (key, color) in group.iter() {
            let _ = writeln!(out, "{} = {}", toml_key(key), render_value(color));
        }
    }
    out
}

fn render_value(color: ResolvedColor) -> String {
    if color == ResolvedColor::TRANSPARENT {
        return "\"transparent\"".to_string();
    }
    let spec = to_perceptual(color);
    if color.is_opaque() {
        return format!("\"{spec}\"");
    }
    let percent = (f64::from(color.alpha()) / 255.0 * 100.0).round();
    format!("{{ color = \"{spec}\", alpha = {percent} }}")
}

/// Bare key when TOML allows it, quoted otherwise.
fn toml_key(key: &str) -> String {
    if !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        key.to_string()
    } else {
        toml::Value::String(key.to_string()).to_string()
    }
}
