//! Theme generation handler.

use crate::args::Args;
use crate::args::utils::use_color;
use crate::contrast::ConsoleSink;
use crate::theme::{BuildOptions, ThemeError, ThemeSource, build_theme, output_path};

/// What: Run the contrast report and write the theme document.
///
/// Inputs:
/// - `args`: Command-line overrides (`--algorithm`, `--strict`, `--check`, `--output`).
/// - `source`: Loaded theme source.
///
/// Output:
/// - `Ok(())` once the report ran and, unless `--check`, the file was written.
///
/// Details:
/// - Report lines stream to stdout and stderr while checks run.
///
/// # Errors
/// Contrast failures under the `fail` policy, or write errors.
pub fn handle_generate(args: &Args, source: &ThemeSource) -> Result<(), ThemeError> {
    let mut options = BuildOptions::resolve(&source.settings, args.algorithm, args.strict);
    if !args.check {
        options.output = Some(output_path(args.output.as_deref(), source));
    }
    tracing::info!(
        algorithm = %options.algorithm,
        policy = ?options.policy,
        check_only = args.check,
        "generating theme"
    );
    let mut sink = ConsoleSink::new(use_color(args));
    let outcome = build_theme(source, &options, &mut sink)?;
    if let Some(path) = &outcome.written {
        println!(
            "wrote {} ({} colors, {} token rules)",
            path.display(),
            outcome.document.colors.len(),
            outcome.document.token_colors.len()
        );
    }
    Ok(())
}
