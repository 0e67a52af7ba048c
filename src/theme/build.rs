//! The generation pipeline: validate, then write.

use std::path::{Path, PathBuf};

use crate::contrast::{
    ContrastAlgorithm, ContrastEvaluator, DiagnosticSink, FailurePolicy, ValidationReport,
    run_batch,
};

use super::document::ThemeDocument;
use super::error::ThemeError;
use super::source::{SourceSettings, ThemeSource};

/// Output path used when neither the command line nor the source names one.
pub const DEFAULT_OUTPUT: &str = "themes/sage-of-light-color-theme.json";

/// Effective settings for one generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Contrast algorithm for the report.
    pub algorithm: ContrastAlgorithm,
    /// What to do with failing checks.
    pub policy: FailurePolicy,
    /// Where to write the document; `None` validates only.
    pub output: Option<PathBuf>,
}

impl BuildOptions {
    /// What: Combine command-line overrides with source settings.
    ///
    /// Inputs:
    /// - `settings`: Values declared by the source.
    /// - `algorithm`: Command-line algorithm, if given.
    /// - `strict`: Whether the command line forces the `fail` policy.
    ///
    /// Output:
    /// - Options with no output path; set [`BuildOptions::output`] to write.
    ///
    /// Details:
    /// - Precedence is command line, then source, then built-in default.
    #[must_use]
    pub fn resolve(
        settings: &SourceSettings,
        algorithm: Option<ContrastAlgorithm>,
        strict: bool,
    ) -> Self {
        let policy = if strict {
            FailurePolicy::Fail
        } else {
            settings.on_failure.unwrap_or_default()
        };
        Self {
            algorithm: algorithm.or(settings.algorithm).unwrap_or_default(),
            policy,
            output: None,
        }
    }
}

/// Result of a successful run.
#[derive(Debug)]
pub struct BuildOutcome {
    /// Every scored check.
    pub report: ValidationReport,
    /// The assembled document.
    pub document: ThemeDocument,
    /// Path written, when an output was requested.
    pub written: Option<PathBuf>,
}

/// What: Validate a source and write its theme document.
///
/// Inputs:
/// - `source`: Resolved theme source.
/// - `options`: Effective algorithm, policy and output path.
/// - `sink`: Receives the diagnostic report.
///
/// Output:
/// - [`BuildOutcome`] with the report and, if written, the path.
///
/// Details:
/// - The report always runs before anything is written. Under
///   [`FailurePolicy::Fail`] failing checks abort the run and leave any
///   existing output untouched.
///
/// # Errors
/// [`ThemeError::ContrastFailures`] under the `fail` policy, or I/O and
/// serialization errors from writing.
pub fn build_theme<S: DiagnosticSink + ?Sized>(
    source: &ThemeSource,
    options: &BuildOptions,
    sink: &mut S,
) -> Result<BuildOutcome, ThemeError> {
    let evaluator = ContrastEvaluator::new(options.algorithm);
    let report = run_batch(&source.checks, &evaluator, sink);
    report.enforce(options.policy)?;

    let document = ThemeDocument::from_source(source);
    let written = match options.output.as_deref() {
        Some(path) => {
            document.write(path)?;
            Some(path.to_path_buf())
        }
        None => {
            tracing::debug!("no output requested; skipping write");
            None
        }
    };
    Ok(BuildOutcome {
        report,
        document,
        written,
    })
}

/// Output path for a run: explicit override, then the source, then the default.
#[must_use]
pub fn output_path(explicit: Option<&Path>, source: &ThemeSource) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| source.output.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}
