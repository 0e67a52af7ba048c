//! Theme sources, palettes and the generated theme document.
//!
//! Loading resolves every color up front; building runs the contrast report
//! and then writes the document.

/// Validation and writing pipeline.
mod build;
/// Generated document model and JSON output.
mod document;
/// Error type for loading and generation.
mod error;
/// Named color groups and order-preserving merge.
mod palette;
/// Default theme source locations.
mod paths;
/// Built-in theme source.
mod skeleton;
/// TOML source loading and reference resolution.
mod source;

pub use build::{BuildOptions, BuildOutcome, DEFAULT_OUTPUT, build_theme, output_path};
pub use document::{FontStyle, ThemeDocument, TokenColor, TokenScope, TokenSettings};
pub use error::ThemeError;
pub use palette::{ColorGroup, Palette};
pub use paths::{SOURCE_FILE_NAME, resolve_source_path, source_candidates};
pub use skeleton::SKELETON_SOURCE;
pub use source::{SourceSettings, ThemeSource, load_source};
