//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::contrast::ContrastAlgorithm;
use crate::theme::ThemeError;

/// sage-theme - Generate an editor color theme from OKLCH colors and check its contrast
#[derive(Parser, Debug, Default)]
#[command(name = "sage-theme")]
#[command(version)]
#[command(
    about = "Generate an editor color theme from OKLCH colors and check its contrast",
    long_about = None
)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Theme source to load (default: ./theme.toml, then ~/.config/sage-theme/theme.toml)
    #[arg(short, long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Write the theme document here instead of the source's `output`
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Contrast algorithm for the report (overrides the source's settings)
    #[arg(long, value_enum)]
    pub algorithm: Option<ContrastAlgorithm>,

    /// Abort without writing when any contrast check fails
    #[arg(long)]
    pub strict: bool,

    /// Run the contrast report only; do not write the theme document
    #[arg(long, conflicts_with_all = ["convert", "init"])]
    pub check: bool,

    /// Print the resolved palette back as oklch() values
    #[arg(long, conflicts_with = "init")]
    pub convert: bool,

    /// Write the built-in theme source to FILE and exit (never overwrites)
    #[arg(long, value_name = "FILE")]
    pub init: Option<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Append logs to FILE instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

/// What: Dispatch the requested mode.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Ok(())` when the mode completed.
///
/// Details:
/// - `--init` runs without loading a source.
/// - Otherwise the source is loaded once and handed to `--convert` or to
///   generation (which `--check` limits to the report).
///
/// # Errors
/// Any [`ThemeError`] from loading, validation or writing.
pub fn process_args(args: &Args) -> Result<(), ThemeError> {
    use crate::args::{convert, generate, init};

    if let Some(path) = &args.init {
        return init::handle_init(path);
    }

    let path = match &args.source {
        Some(path) => path.clone(),
        None => crate::theme::resolve_source_path().ok_or_else(|| {
            ThemeError::Invalid(
                "no theme source found; pass --source FILE or create one with --init theme.toml"
                    .to_string(),
            )
        })?,
    };
    let source = crate::theme::load_source(&path)?;

    if args.convert {
        convert::handle_convert(&source.palette);
        return Ok(());
    }
    generate::handle_generate(args, &source)
}
