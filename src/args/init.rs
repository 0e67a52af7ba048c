//! Starter source handler (`--init`).

use std::fs;
use std::path::Path;

use crate::theme::{SKELETON_SOURCE, ThemeError};

/// What: Write the built-in theme source to `path`.
///
/// Inputs:
/// - `path`: Destination file; parent directories are created.
///
/// Output:
/// - `Ok(())` once the file exists with the skeleton content.
///
/// Details:
/// - Refuses to touch an existing file.
///
/// # Errors
/// [`ThemeError::Invalid`] when `path` exists, [`ThemeError::Io`] on write failure.
pub fn handle_init(path: &Path) -> Result<(), ThemeError> {
    if path.exists() {
        return Err(ThemeError::Invalid(format!(
            "{} already exists; refusing to overwrite",
            path.display()
        )));
    }
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).map_err(|source| ThemeError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, SKELETON_SOURCE).map_err(|source| ThemeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote starter theme source");
    println!("wrote starter theme source to {}", path.display());
    Ok(())
}
