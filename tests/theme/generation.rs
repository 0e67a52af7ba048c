//! End-to-end generation from a theme source to the JSON document.

use std::fs;

use sage_theme::contrast::{FailurePolicy, MemorySink};
use sage_theme::theme::{BuildOptions, SKELETON_SOURCE, ThemeError, ThemeSource, build_theme};

fn skeleton() -> ThemeSource {
    ThemeSource::from_toml(SKELETON_SOURCE).expect("built-in source loads")
}

#[test]
/// What: The built-in source produces the expected document.
///
/// Inputs:
/// - Built-in source, default options, output in a temp dir.
///
/// Output:
/// - JSON with `type`, resolved workbench colors (alpha as 8-digit hex) and
///   token rules that omit absent fields.
fn skeleton_generates_document() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("themes").join("sage.json");
    let options = BuildOptions {
        output: Some(path.clone()),
        ..BuildOptions::default()
    };
    let mut sink = MemorySink::default();
    build_theme(&skeleton(), &options, &mut sink).expect("warn policy succeeds");

    let text = fs::read_to_string(&path).expect("document written");
    let json: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(json["type"], "light");
    let colors = &json["colors"];
    assert_eq!(colors["editor.background"], "#ffffff");
    assert_eq!(colors["editor.foreground"], "#2e2e2e");
    assert_eq!(colors["list.hoverBackground"], "#8080801a");
    assert_eq!(colors["editor.lineHighlightBackground"], "#2e2e2e0d");
    assert_eq!(colors["activityBar.activeBackground"], "#00000000");
    assert_eq!(colors["button.border"], "#00000099");
    assert_eq!(colors["peekViewEditor.background"], "#fefadb");

    let tokens = json["tokenColors"].as_array().expect("token array");
    assert_eq!(
        tokens[0]["settings"],
        serde_json::json!({ "foreground": "#161616", "fontStyle": "" })
    );
    assert_eq!(
        tokens[1],
        serde_json::json!({ "scope": "emphasis", "settings": { "fontStyle": "italic" } })
    );
    let invalid = tokens
        .iter()
        .find(|t| t["scope"] == "invalid")
        .expect("invalid rule");
    assert_eq!(invalid["settings"], serde_json::json!({ "foreground": "#f0005a" }));

    // Keys come out sorted regardless of section order.
    let first = text.find("\"activityBar.activeBackground\"").expect("key");
    let later = text.find("\"editor.background\"").expect("key");
    assert!(first < later);
}

#[test]
/// What: Generating twice yields byte-identical files.
fn generation_is_deterministic() {
    let dir = tempfile::tempdir().expect("tempdir");
    let source = skeleton();
    let mut written = Vec::new();
    for name in ["a.json", "b.json"] {
        let path = dir.path().join(name);
        let options = BuildOptions {
            output: Some(path.clone()),
            ..BuildOptions::default()
        };
        build_theme(&source, &options, &mut MemorySink::default()).expect("build");
        written.push(fs::read(&path).expect("read"));
    }
    assert_eq!(written[0], written[1]);
}

#[test]
/// What: Reordering workbench sections does not change the document.
///
/// Inputs:
/// - Two sources with the same sections declared in opposite order.
///
/// Output:
/// - Identical JSON.
fn section_order_does_not_change_output() {
    let palette = "[palette.ui]\nfg = \"#2e2e2e\"\nbg = \"#ffffff\"\n";
    let a = "[workbench.a]\n\"tab.border\" = \"ui.fg\"\n";
    let b = "[workbench.b]\n\"editor.background\" = \"ui.bg\"\n";
    let first = ThemeSource::from_toml(&format!("{palette}{a}{b}")).expect("first");
    let second = ThemeSource::from_toml(&format!("{palette}{b}{a}")).expect("second");
    let first = sage_theme::theme::ThemeDocument::from_source(&first)
        .to_json()
        .expect("json");
    let second = sage_theme::theme::ThemeDocument::from_source(&second)
        .to_json()
        .expect("json");
    assert_eq!(first, second);
}

#[test]
/// What: Strict runs of the built-in source abort before writing.
///
/// Inputs:
/// - Built-in source (which has failing pairs) under the `fail` policy.
///
/// Output:
/// - `ContrastFailures` error, no file, full report still emitted.
fn strict_run_leaves_no_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("sage.json");
    let options = BuildOptions {
        policy: FailurePolicy::Fail,
        output: Some(path.clone()),
        ..BuildOptions::default()
    };
    let mut sink = MemorySink::default();
    let err = build_theme(&skeleton(), &options, &mut sink).expect_err("strict fails");
    assert!(matches!(err, ThemeError::ContrastFailures(f) if f.failed == 11 && f.total == 31));
    assert!(!path.exists());
    assert_eq!(sink.lines.len(), 31);
}
