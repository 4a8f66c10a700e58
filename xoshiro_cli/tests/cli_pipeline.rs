// End-to-end tests for the `rngen` pipeline: argument parsing, config file
// loading, engine construction, drawing and rendering, driven through
// `xoshiro_cli::run` exactly as `main` does.

use std::path::PathBuf;

use xoshiro_cli::{CliError, run};
use xoshiro_rng::{Random, RandomSource};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Write `contents` to a per-test file under the system temp dir.
fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "rngen-{}-{name}.json",
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn seeded_text_output_matches_library() {
    let out = run(&args(&["--seed", "42", "--count", "5"])).unwrap();
    let mut rng = Random::from_seed(42);
    let expected: String = (0..5).map(|_| format!("{}\n", rng.next_u64())).collect();
    assert_eq!(out, expected);
}

#[test]
fn json_report_lists_engine_and_values() {
    let out = run(&args(&["--kind", "f64", "--count", "3", "--json"])).unwrap();
    let report: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(report["engine"], "xoshiro256starstar");
    assert_eq!(report["kind"], "f64");
    let values = report["values"].as_array().unwrap();
    assert_eq!(values.len(), 3);
    for v in values {
        let v = v.as_f64().unwrap();
        assert!((0.0..1.0).contains(&v));
    }
}

#[test]
fn config_file_is_overridden_by_flags() {
    let path = temp_config(
        "override",
        r#"{ "kind": "i64", "bound": 10, "count": 4, "seed": 7 }"#,
    );
    let from_file = run(&args(&["--config", path.to_str().unwrap()])).unwrap();
    assert_eq!(from_file.lines().count(), 4);
    for line in from_file.lines() {
        let v: i64 = line.parse().unwrap();
        assert!((0..10).contains(&v));
    }

    // A flag placed before --config still wins over the file.
    let overridden = run(&args(&["--count", "2", "--config", path.to_str().unwrap()])).unwrap();
    assert_eq!(overridden.lines().count(), 2);
    assert!(from_file.starts_with(&overridden));

    std::fs::remove_file(path).unwrap();
}

#[test]
fn inverted_range_surfaces_engine_error() {
    let err = run(&args(&["--kind", "i32", "--min", "5", "--max", "1"])).unwrap_err();
    assert!(matches!(err, CliError::Rng(_)), "got {err:?}");
    assert_eq!(err.to_string(), "min (5) must not exceed max (1)");
}

#[test]
fn help_prints_usage() {
    let out = run(&args(&["--help"])).unwrap();
    assert!(out.starts_with("Usage: rngen"));
}

#[test]
fn zero_length_bytes_render_empty_lines() {
    let out = run(&args(&["--kind", "bytes", "--len", "0", "--count", "3"])).unwrap();
    assert_eq!(out, "\n\n\n");
}
