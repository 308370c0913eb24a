//! Integration tests for hubq CLI.

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn hubq_cmd(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hubq"));
    cmd.env("HUBQ_CONFIG_DIR", config_dir);
    cmd.env_remove("HUBQ_LOG");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(config_dir: &std::path::Path, args: &[&str]) -> Output {
    hubq_cmd(config_dir)
        .args(args)
        .output()
        .expect("failed to run hubq")
}

fn run_with_stdin(config_dir: &std::path::Path, args: &[&str], input: &str) -> Output {
    let mut child = hubq_cmd(config_dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn hubq");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().expect("failed to wait for hubq")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_encode_argument() {
    let tmp = TempDir::new().unwrap();
    let output = run(
        tmp.path(),
        &["encode", r#"{"_type":"model","tags":["a","b"],"predicted_entities":["x"]}"#],
    );
    assert!(output.status.success(), "encode failed: {:?}", output);
    assert_eq!(stdout(&output), "?tags=a&tags=b&predicted_entities=x");
}

#[test]
fn test_encode_stdin() {
    let tmp = TempDir::new().unwrap();
    let output = run_with_stdin(tmp.path(), &["encode"], r#"{"sort":"views","recommended":false}"#);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "?sort=views&recommended=0");
}

#[test]
fn test_encode_empty_record_prints_empty_line() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["encode", r#"{"sort":"date","recommended":true}"#]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_encode_rejects_non_object() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["encode", "[1,2]"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error: Invalid filter parameters"));
}

#[test]
fn test_encode_rejects_bad_json() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["encode", "{tags"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("JSON error"));
}

#[test]
fn test_decode_json() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["decode", "?tags=a&tags=b&q=x+y&recommended=0"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"tags": ["a", "b"], "q": "x y", "recommended": false})
    );
}

#[test]
fn test_url_default_origin() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["url", r#"{"sort":"views"}"#]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "http://64.225.77.157:3000/?sort=views");
}

#[test]
fn test_url_origin_flag() {
    let tmp = TempDir::new().unwrap();
    let output = run(
        tmp.path(),
        &["url", r#"{"type":"model"}"#, "--origin", "https://hub.example.org/"],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "https://hub.example.org/?type=model");
}

#[test]
fn test_init_then_url_reads_config() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["init"]);
    assert!(output.status.success(), "init failed: {:?}", output);
    assert!(tmp.path().join("config.toml").exists());

    std::fs::write(
        tmp.path().join("config.toml"),
        "search_origin = \"https://hub.example.org\"\n",
    )
    .unwrap();

    let output = run(tmp.path(), &["url", r#"{"supported":true}"#]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "https://hub.example.org/?supported=1");
}

#[test]
fn test_init_twice_fails_without_force() {
    let tmp = TempDir::new().unwrap();
    assert!(run(tmp.path(), &["init"]).status.success());

    let output = run(tmp.path(), &["init"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));

    assert!(run(tmp.path(), &["init", "--force"]).status.success());
}

#[test]
fn test_select_builds_query() {
    let tmp = TempDir::new().unwrap();
    let output = run(
        tmp.path(),
        &[
            "select", "--type", "model", "--tag", "ner", "--tag", "bert", "--entity", "PER",
            "--annotator", "NerDLModel", "--sort", "downloads", "--recommended", "false",
        ],
    );
    assert!(output.status.success(), "select failed: {:?}", output);
    assert_eq!(
        stdout(&output),
        "?type=model&tags=ner&tags=bert&predicted_entities=PER&annotator=NerDLModel&sort=downloads&recommended=0"
    );
}

#[test]
fn test_select_merges_into_params() {
    let tmp = TempDir::new().unwrap();
    let output = run(
        tmp.path(),
        &["select", "--params", r#"{"sort":"views","type":"model"}"#, "--sort", "date", "--type", "all"],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_select_url() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["select", "--sort", "views", "--url"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "http://64.225.77.157:3000/?sort=views");
}

#[test]
fn test_select_unknown_sort() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["select", "--sort", "stars"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown sort order 'stars'"));
}

#[test]
fn test_options_table() {
    let tmp = TempDir::new().unwrap();
    let meta_path = tmp.path().join("meta.json");
    std::fs::write(
        &meta_path,
        r#"{"aggregations":{"tags":["ner","bert"],"predictedEntities":["PER"],"annotators":["NerDLModel"]}}"#,
    )
    .unwrap();

    let output = run(tmp.path(), &["options", meta_path.to_str().unwrap()]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Assigned tags (2):"));
    assert!(text.contains("  bert"));
    assert!(text.contains("Entities (1):"));
    assert!(text.contains("Annotator class (1):"));
}

#[test]
fn test_options_json_incomplete_meta() {
    let tmp = TempDir::new().unwrap();
    let output = run_with_stdin(
        tmp.path(),
        &["options", "-", "--format", "json"],
        r#"{"aggregations":{"tags":["ner"]}}"#,
    );
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"tags": [], "predicted_entities": [], "annotators": []})
    );
}

#[test]
fn test_select_clear_tags_and_entities() {
    let tmp = TempDir::new().unwrap();
    let output = run(
        tmp.path(),
        &[
            "select", "--params", r#"{"tags":["ner"],"predicted_entities":["PER"],"sort":"views"}"#,
            "--clear-tags", "--clear-entities",
        ],
    );
    assert!(output.status.success(), "select failed: {:?}", output);
    assert_eq!(stdout(&output), "?sort=views");
}

#[test]
fn test_select_clear_tags_conflicts_with_tag() {
    let tmp = TempDir::new().unwrap();
    let output = run(tmp.path(), &["select", "--tag", "ner", "--clear-tags"]);
    assert!(!output.status.success());
}

#[test]
fn test_select_prints_state() {
    let tmp = TempDir::new().unwrap();
    let output = run(
        tmp.path(),
        &["select", "--type", "pipeline", "--tag", "ner", "--sort", "views", "--state"],
    );
    assert!(output.status.success(), "select failed: {:?}", output);
    let text = stdout(&output);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("?type=pipeline&tags=ner&sort=views"));
    assert!(text.contains("Type:            Pipelines"));
    assert!(text.contains("Assigned tags:   ner"));
    assert!(text.contains("Annotator class: -"));
    assert!(text.contains("Sort by:         views"));
    assert!(text.contains("Recommended:     off"));
}
