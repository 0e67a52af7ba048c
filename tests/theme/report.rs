//! Contrast report over the built-in source.

use sage_theme::contrast::{
    ContrastAlgorithm, ContrastClass, ContrastEvaluator, FAILURE_BANNER, MemorySink, run_batch,
};
use sage_theme::theme::{SKELETON_SOURCE, ThemeSource};

#[test]
/// What: The built-in checks report in declaration order with WCAG 2.1.
///
/// Inputs:
/// - Built-in source evaluated with the default algorithm.
///
/// Output:
/// - 31 lines; the first is the failing error-on-background pair; the
///   summary repeats exactly the failing lines after the banner.
fn skeleton_report_lines() {
    let source = ThemeSource::from_toml(SKELETON_SOURCE).expect("source");
    let mut sink = MemorySink::default();
    let report = run_batch(
        &source.checks,
        &ContrastEvaluator::new(ContrastAlgorithm::Wcag21),
        &mut sink,
    );

    assert_eq!(sink.lines.len(), 31);
    assert_eq!(
        sink.lines[0],
        (true, "[!]    4.33 <> 4.5 :: ui.bg0 <- ui.error".to_string())
    );
    assert_eq!(
        sink.lines[2],
        (false, "      13.58 <> 4.5 :: ui.bg0 <- ui.fg".to_string())
    );
    assert_eq!(
        sink.lines[8],
        (false, "       1.57 <> 1.2 :: ui.bg0 <- ui.border0".to_string())
    );
    assert_eq!(
        sink.lines[10],
        (false, "       3.95 <>   3 :: ui.bg0 <- ui.border1".to_string())
    );

    let failing: Vec<&String> = sink
        .lines
        .iter()
        .filter(|(failed, _)| *failed)
        .map(|(_, line)| line)
        .collect();
    assert_eq!(failing.len(), report.failure_count());
    assert_eq!(sink.summary[0], FAILURE_BANNER);
    assert_eq!(sink.summary.len(), failing.len() + 1);
    for (summary, line) in sink.summary[1..].iter().zip(failing) {
        assert_eq!(summary, line);
    }
}

#[test]
/// What: Switching algorithms swaps the whole threshold table.
///
/// Inputs:
/// - Built-in checks under APCA.
///
/// Output:
/// - Every entry carries the APCA threshold for its class.
fn apca_uses_apca_thresholds() {
    let source = ThemeSource::from_toml(SKELETON_SOURCE).expect("source");
    let report = run_batch(
        &source.checks,
        &ContrastEvaluator::new(ContrastAlgorithm::Apca),
        &mut MemorySink::default(),
    );
    for entry in report.entries() {
        let expected = match entry.result.class {
            ContrastClass::Text => 45.0,
            ContrastClass::Ui => 30.0,
            ContrastClass::Decoration => 10.0,
        };
        assert!((entry.result.threshold - expected).abs() < f64::EPSILON);
        assert_eq!(entry.result.algorithm, ContrastAlgorithm::Apca);
        assert!(entry.result.score >= 0.0);
    }
}
