//! Shared utilities for argument processing.

use crossterm::tty::IsTty;

/// What: Determine the log level based on command-line arguments and environment variables.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
/// - `SAGE_THEME_TRACE=1` enables TRACE level.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else if std::env::var("SAGE_THEME_TRACE").ok().as_deref() == Some("1") {
        "trace".to_string()
    } else {
        args.log_level.clone()
    }
}

/// Whether diagnostics should carry ANSI styling: not disabled and stderr is a terminal.
#[must_use]
pub fn use_color(args: &crate::args::Args) -> bool {
    !args.no_color && std::io::stderr().is_tty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;

    #[test]
    /// What: Verbose wins over the explicit level.
    fn verbose_overrides_level() {
        let args = Args {
            verbose: true,
            log_level: "error".to_string(),
            ..Args::default()
        };
        assert_eq!(determine_log_level(&args), "debug");
    }

    #[test]
    /// What: `--no-color` always disables styling.
    fn no_color_disables_styling() {
        let args = Args {
            no_color: true,
            ..Args::default()
        };
        assert!(!use_color(&args));
    }
}
