use std::env;
use std::path::{Path, PathBuf};

/// File name looked up in each candidate directory.
pub const SOURCE_FILE_NAME: &str = "theme.toml";
/// Directory name under the XDG config home.
const APP_DIR: &str = "sage-theme";

/// What: List candidate theme source locations in priority order.
///
/// Inputs:
/// - `xdg_config`: Value of `XDG_CONFIG_HOME`, if set.
/// - `home`: Value of `HOME`, if set.
///
/// Output:
/// - `./theme.toml`, then `$XDG_CONFIG_HOME/sage-theme/theme.toml`, then
///   `$HOME/.config/sage-theme/theme.toml`. Blank variables are skipped.
#[must_use]
pub fn source_candidates(xdg_config: Option<&str>, home: Option<&str>) -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(SOURCE_FILE_NAME)];
    if let Some(xdg) = xdg_config
        && !xdg.trim().is_empty()
    {
        candidates.push(Path::new(xdg).join(APP_DIR).join(SOURCE_FILE_NAME));
    }
    if let Some(h) = home
        && !h.trim().is_empty()
    {
        candidates.push(
            Path::new(h)
                .join(".config")
                .join(APP_DIR)
                .join(SOURCE_FILE_NAME),
        );
    }
    candidates
}

/// Determine the theme source to load when none is given explicitly.
///
/// Output: The first existing candidate from [`source_candidates`].
pub fn resolve_source_path() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let home = env::var("HOME").ok();
    let found = source_candidates(xdg_config.as_deref(), home.as_deref())
        .into_iter()
        .find(|p| p.is_file());
    match &found {
        Some(path) => tracing::debug!(path = %path.display(), "found theme source"),
        None => tracing::debug!("no theme source in default locations"),
    }
    found
}
