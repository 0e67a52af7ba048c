//! Contrast scoring and batch validation.

/// Algorithms and threshold tables.
mod algorithm;
/// Single-pair evaluation.
mod evaluate;
/// Batch runs, reports and diagnostic sinks.
mod report;

pub use algorithm::{
    ContrastAlgorithm, ContrastClass, apca_lightness_contrast, relative_luminance, wcag21_ratio,
};
pub use evaluate::{ContrastEvaluator, ContrastResult};
pub use report::{
    ConsoleSink, ContrastCheck, ContrastFailures, DiagnosticSink, FAILURE_BANNER, FailurePolicy,
    MemorySink, ReportEntry, ValidationReport, run_batch,
};
