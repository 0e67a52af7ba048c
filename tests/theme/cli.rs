//! Command-line modes driven through `process_args`.

use std::fs;

use sage_theme::args::{Args, process_args};
use sage_theme::contrast::ContrastAlgorithm;
use sage_theme::theme::{SKELETON_SOURCE, ThemeError};

const PASSING: &str = r##"
type = "light"

[palette.ui]
fg = "oklch(30, 0, 0)"
bg = "oklch(100, 0, 0)"

[workbench.editor]
"editor.foreground" = "ui.fg"
"editor.background" = "ui.bg"

[[checks]]
class = "text"
foreground = "ui.fg"
background = "ui.bg"
"##;

fn args_for(source: &std::path::Path) -> Args {
    Args {
        source: Some(source.to_path_buf()),
        no_color: true,
        log_level: "warn".to_string(),
        ..Args::default()
    }
}

#[test]
/// What: A passing source is written to the requested output.
///
/// Inputs:
/// - Source with one passing check, `--output` into a temp dir.
///
/// Output:
/// - Document on disk with the resolved colors.
fn generate_writes_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = dir.path().join("theme.toml");
    fs::write(&source, PASSING).expect("write source");
    let output = dir.path().join("out").join("theme.json");
    let args = Args {
        output: Some(output.clone()),
        strict: true,
        ..args_for(&source)
    };
    process_args(&args).expect("generate");
    let text = fs::read_to_string(&output).expect("output");
    assert!(text.contains("\"editor.foreground\": \"#2e2e2e\""));
}

#[test]
/// What: `--check` validates without writing anything.
fn check_mode_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = dir.path().join("theme.toml");
    fs::write(&source, PASSING).expect("write source");
    let output = dir.path().join("theme.json");
    let args = Args {
        output: Some(output.clone()),
        check: true,
        ..args_for(&source)
    };
    process_args(&args).expect("check");
    assert!(!output.exists());
}

#[test]
/// What: `--strict` on the built-in source fails and leaves no output.
///
/// Inputs:
/// - Built-in source from `--init`, then a strict run with `--algorithm wcag21`.
///
/// Output:
/// - Contrast failure error; output path absent.
fn init_then_strict_run_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = dir.path().join("theme.toml");
    process_args(&Args {
        init: Some(source.clone()),
        ..Args::default()
    })
    .expect("init");
    assert_eq!(fs::read_to_string(&source).expect("read"), SKELETON_SOURCE);

    let output = dir.path().join("theme.json");
    let args = Args {
        output: Some(output.clone()),
        strict: true,
        algorithm: Some(ContrastAlgorithm::Wcag21),
        ..args_for(&source)
    };
    let err = process_args(&args).expect_err("strict run fails");
    assert!(matches!(err, ThemeError::ContrastFailures(_)));
    assert!(!output.exists());
}

#[test]
/// What: `--convert` loads the source and succeeds without writing.
fn convert_mode_succeeds() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = dir.path().join("theme.toml");
    fs::write(&source, PASSING).expect("write source");
    let args = Args {
        convert: true,
        ..args_for(&source)
    };
    process_args(&args).expect("convert");
    assert_eq!(fs::read_dir(dir.path()).expect("list").count(), 1);
}
