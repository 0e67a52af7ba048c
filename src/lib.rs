//! Library entry for sage-theme exposing color resolution, contrast checking
//! and theme generation for the binary and integration tests.

/// Command-line definition and mode handlers.
pub mod args;
/// Color values, parsing and OKLCH conversion.
pub mod color;
/// Contrast scoring and batch validation.
pub mod contrast;
/// Theme sources, palettes and the generated document.
pub mod theme;
