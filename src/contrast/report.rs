//! Batch contrast validation and its diagnostic output.
//!
//! A batch evaluates every check in order, emits one line per check to a
//! [`DiagnosticSink`] as soon as it is scored, and returns a
//! [`ValidationReport`] that owns the results. Nothing is shared between
//! batches; what to do about failures is decided by the caller through
//! [`FailurePolicy`].

use std::fmt;
use std::io::Write;

use crossterm::style::{Stylize, style};
use serde::{Deserialize, Serialize};

use crate::color::ResolvedColor;

use super::algorithm::ContrastClass;
use super::evaluate::{ContrastEvaluator, ContrastResult};

/// Marker prefixed to failing lines.
const FAIL_BADGE: &str = "[!]";
/// Blank of the same width for passing lines.
const NO_BADGE: &str = "   ";
/// Banner printed before the failure summary.
pub const FAILURE_BANNER: &str = ">>> CONTRAST FAILURE";

/// What the caller does once a batch has failures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Report failures and carry on.
    #[default]
    Warn,
    /// Report failures and abort with an error.
    Fail,
}

/// One pairing to validate.
#[derive(Clone, Debug, PartialEq)]
pub struct ContrastCheck {
    /// Threshold tier.
    pub class: ContrastClass,
    /// Foreground color.
    pub foreground: ResolvedColor,
    /// Background color.
    pub background: ResolvedColor,
    /// Human label for the foreground, e.g. `syntax.comment`.
    pub foreground_label: String,
    /// Human label for the background, e.g. `ui.bg0`.
    pub background_label: String,
}

impl ContrastCheck {
    /// Build a check from its colors and labels.
    pub fn new(
        class: ContrastClass,
        foreground: ResolvedColor,
        background: ResolvedColor,
        foreground_label: impl Into<String>,
        background_label: impl Into<String>,
    ) -> Self {
        Self {
            class,
            foreground,
            background,
            foreground_label: foreground_label.into(),
            background_label: background_label.into(),
        }
    }
}

/// A scored check together with its labels.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportEntry {
    /// Label of the foreground color.
    pub foreground_label: String,
    /// Label of the background color.
    pub background_label: String,
    /// Score and verdict.
    pub result: ContrastResult,
}

impl ReportEntry {
    /// Whether this check fell below its threshold.
    #[must_use]
    pub const fn failed(&self) -> bool {
        !self.result.passed
    }

    /// What: Render the entry as a single diagnostic line.
    ///
    /// Inputs:
    /// - `color`: Whether to include ANSI styling.
    ///
    /// Output:
    /// - `"{badge} {score:>7.2} <> {threshold:>3} :: {bg} <- {fg}"`.
    ///
    /// Details:
    /// - The badge is `[!]` for failures and three spaces otherwise, so lines
    ///   stay aligned.
    /// - With color, numbers are yellow and separators cyan; failing lines are
    ///   bold red throughout.
    #[must_use]
    pub fn render(&self, color: bool) -> String {
        let badge = if self.failed() { FAIL_BADGE } else { NO_BADGE };
        let score = format!("{:>7.2}", self.result.score);
        let threshold = format!("{:>3}", self.result.threshold);
        if !color || self.failed() {
            let line = format!(
                "{badge} {score} <> {threshold} :: {} <- {}",
                self.background_label, self.foreground_label
            );
            return if color {
                style(line).red().bold().to_string()
            } else {
                line
            };
        }
        format!(
            "{badge} {} {} {} {} {} {} {}",
            style(score).yellow(),
            style("<>").cyan(),
            style(threshold).yellow(),
            style("::").cyan(),
            self.background_label,
            style("<-").cyan(),
            self.foreground_label
        )
    }
}

/// Receives diagnostic output while a batch runs.
pub trait DiagnosticSink {
    /// Called once per check, immediately after it is scored.
    fn line(&mut self, entry: &ReportEntry);
    /// Called once after the batch when at least one check failed.
    fn summary(&mut self, failures: &[&ReportEntry]);
}

/// Writes passing lines to stdout and failures plus the summary to stderr.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink {
    color: bool,
}

impl ConsoleSink {
    /// Create a console sink, optionally with ANSI styling.
    #[must_use]
    pub const fn new(color: bool) -> Self {
        Self { color }
    }
}

impl DiagnosticSink for ConsoleSink {
    fn line(&mut self, entry: &ReportEntry) {
        let text = entry.render(self.color);
        // Broken pipes must not abort a batch.
        if entry.failed() {
            let _ = writeln!(std::io::stderr().lock(), "{text}");
        } else {
            let _ = writeln!(std::io::stdout().lock(), "{text}");
        }
    }

    fn summary(&mut self, failures: &[&ReportEntry]) {
        let mut err = std::io::stderr().lock();
        let banner = if self.color {
            style(FAILURE_BANNER).red().bold().to_string()
        } else {
            FAILURE_BANNER.to_string()
        };
        let _ = writeln!(err, "\n{banner}\n");
        for entry in failures {
            let _ = writeln!(err, "{}", entry.render(self.color));
        }
    }
}

/// Collects plain-text diagnostics in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySink {
    /// Per-check lines in emission order, paired with their failure flag.
    pub lines: Vec<(bool, String)>,
    /// Summary block (banner first), empty when nothing failed.
    pub summary: Vec<String>,
}

impl DiagnosticSink for MemorySink {
    fn line(&mut self, entry: &ReportEntry) {
        self.lines.push((entry.failed(), entry.render(false)));
    }

    fn summary(&mut self, failures: &[&ReportEntry]) {
        self.summary.push(FAILURE_BANNER.to_string());
        self.summary
            .extend(failures.iter().map(|entry| entry.render(false)));
    }
}

/// Returned by [`ValidationReport::enforce`] when failures must abort the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContrastFailures {
    /// Number of failing checks.
    pub failed: usize,
    /// Number of checks in the batch.
    pub total: usize,
}

impl fmt::Display for ContrastFailures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} contrast checks failed",
            self.failed, self.total
        )
    }
}

impl std::error::Error for ContrastFailures {}

/// Results of one batch, in evaluation order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    entries: Vec<ReportEntry>,
}

impl ValidationReport {
    /// Every entry in evaluation order.
    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Failing entries in evaluation order.
    pub fn failures(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter().filter(|entry| entry.failed())
    }

    /// Number of failing entries.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Whether every check passed (vacuously true for an empty batch).
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// What: Apply the caller's failure policy to the collected results.
    ///
    /// Inputs:
    /// - `policy`: What failures should mean for this run.
    ///
    /// Output:
    /// - `Ok(())` when nothing failed or the policy is `Warn`.
    /// - `Err(ContrastFailures)` when something failed under `Fail`.
    ///
    /// Details:
    /// - Under `Warn` the failures are still logged, so a lenient run is
    ///   never silent about them.
    pub fn enforce(&self, policy: FailurePolicy) -> Result<(), ContrastFailures> {
        let failed = self.failure_count();
        if failed == 0 {
            return Ok(());
        }
        let total = self.entries.len();
        match policy {
            FailurePolicy::Warn => {
                tracing::warn!(
                    failed,
                    total,
                    "contrast failures present; continuing because on_failure = warn"
                );
                Ok(())
            }
            FailurePolicy::Fail => Err(ContrastFailures { failed, total }),
        }
    }
}

/// What: Evaluate a batch of checks and stream diagnostics while doing so.
///
/// Inputs:
/// - `checks`: Pairs to validate, in the order they should be reported.
/// - `evaluator`: Scorer carrying the active algorithm.
/// - `sink`: Destination for per-check lines and the failure summary.
///
/// Output:
/// - A [`ValidationReport`] owning every result.
///
/// Details:
/// - Strictly sequential; each line reaches the sink before the next check is
///   scored. Never stops early and never errors on a failing check.
/// - After the last check the sink receives the failure summary, if any.
/// - Translucent colors are evaluated as opaque and logged as a warning.
pub fn run_batch<S: DiagnosticSink + ?Sized>(
    checks: &[ContrastCheck],
    evaluator: &ContrastEvaluator,
    sink: &mut S,
) -> ValidationReport {
    tracing::info!(
        checks = checks.len(),
        algorithm = %evaluator.algorithm(),
        "running contrast checks"
    );
    let mut report = ValidationReport {
        entries: Vec::with_capacity(checks.len()),
    };
    for check in checks {
        if !check.foreground.is_opaque() || !check.background.is_opaque() {
            tracing::warn!(
                foreground = %check.foreground_label,
                background = %check.background_label,
                "translucent color in contrast check; alpha ignored"
            );
        }
        let result = evaluator.evaluate(check.foreground, check.background, check.class);
        tracing::debug!(
            class = %result.class,
            score = result.score,
            threshold = result.threshold,
            passed = result.passed,
            foreground = %check.foreground_label,
            background = %check.background_label,
            "contrast check"
        );
        let entry = ReportEntry {
            foreground_label: check.foreground_label.clone(),
            background_label: check.background_label.clone(),
            result,
        };
        sink.line(&entry);
        report.entries.push(entry);
    }
    let failures: Vec<&ReportEntry> = report.failures().collect();
    if !failures.is_empty() {
        sink.summary(&failures);
    }
    tracing::info!(
        total = report.entries.len(),
        failed = failures.len(),
        "contrast checks finished"
    );
    report
}
