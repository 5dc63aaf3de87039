use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

fn cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_dokus")));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

// -- stdin mode --

#[test]
fn stdin_mode_produces_markdown() {
    let assert = cmd().write_stdin(fixture("shapes.js")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    assert!(output.starts_with("## Index\n\n* [Shape](#shape)\n  * [Shape::area](#shapearea)\n"));
    assert!(output.contains("## Shape\n\n> *`abstract`*\n\n`Shape Shape(string name)`\n"));
    assert!(output.contains("* **name** (string): label shown in legends"));
    assert!(output.contains("#### Fields\n\n* **name**: the label"));
    assert!(output.contains("### Shape::area\n\n`number Shape::area()`\n\nArea in square units.\n"));
    assert!(output.contains("### Shape::describe\n\n> *`deprecated`*\n"));
    assert!(!output.contains("internal note"));
    assert!(output.contains("`string format(string fmt, ...)`"));
    assert!(output.contains("Format values into a string.\n\nUses printf-style placeholders."));
    assert!(!output.contains("helper"), "private function should be hidden");
}

#[test]
fn stdin_mode_reports_unknown_argument() {
    cmd()
        .write_stdin(fixture("shapes.js"))
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown argument for @arg function comment: extra"));
}

#[test]
fn stdin_show_private() {
    let assert = cmd()
        .arg("--show-private")
        .write_stdin(fixture("shapes.js"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("## helper\n\n> *`private`*"));
}

#[test]
fn stdin_json_format() {
    let assert = cmd()
        .args(["-f", "json"])
        .write_stdin(fixture("shapes.js"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    let classes = value["classes"].as_array().unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["name"], "Shape");
    assert_eq!(classes[0]["constructor"]["is_abstract"], true);
    let methods = classes[0]["methods"].as_array().unwrap();
    assert_eq!(methods.len(), 2);
    assert_eq!(methods[0]["name"], "Shape::area");
    assert_eq!(methods[0]["see_also"][0], "Shape");
    assert_eq!(methods[1]["name"], "Shape::describe");

    let functions = value["functions"].as_array().unwrap();
    assert_eq!(functions.len(), 1);
    assert_eq!(functions[0]["name"], "format");
    assert_eq!(functions[0]["variadic"], true);
    assert_eq!(functions[0]["declaration_line"], 39);
}

#[test]
fn stdin_json_declarations() {
    let assert = cmd()
        .args(["--json-input", "-f", "json"])
        .write_stdin(fixture("shapes.json"))
        .assert()
        .success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["classes"][0]["name"], "Circle");
    assert_eq!(value["classes"][0]["constructor"]["arguments"][0]["name"], "radius");
    assert_eq!(value["classes"][0]["methods"][0]["arguments"][0]["name"], "by");
}

// -- file mode --

#[test]
fn file_mode_creates_output() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(fixture_path("shapes.js"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("shapes.md")).unwrap();
    assert!(output.contains("## Shape"));
}

#[test]
fn file_mode_json_declaration_file() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .args(["-f", "json"])
        .arg(fixture_path("shapes.json"))
        .assert()
        .success();

    let output = std::fs::read_to_string(dir.path().join("shapes.json")).unwrap();
    assert!(output.contains("\"Circle::grow\""));
}

#[test]
fn file_mode_directory_input() {
    let src = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    std::fs::write(src.path().join("a.js"), "/*\na\nDoes a.\n*/\nfunction a() {}\n").unwrap();
    std::fs::write(src.path().join("b.ts"), "function b(x: number) {}\n").unwrap();
    std::fs::write(src.path().join("readme.txt"), "not a source\n").unwrap();

    cmd()
        .args(["-o", out.path().to_str().unwrap()])
        .arg(src.path().to_str().unwrap())
        .assert()
        .success();

    assert!(out.path().join("a.md").exists());
    assert!(out.path().join("b.md").exists());
    assert!(!out.path().join("readme.md").exists());
}

#[test]
fn file_mode_requires_output() {
    cmd()
        .arg(fixture_path("shapes.js"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output is required"));
}

#[test]
fn file_mode_skips_unsupported_file() {
    let dir = TempDir::new().unwrap();
    let mut input = NamedTempFile::with_suffix(".txt").unwrap();
    input.write_all(b"function foo() {}\n").unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(input.path().to_str().unwrap())
        .assert()
        .success()
        .stderr(predicate::str::contains("unsupported file type"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn file_mode_skips_invalid_json() {
    let dir = TempDir::new().unwrap();
    let mut input = NamedTempFile::with_suffix(".json").unwrap();
    input.write_all(b"{ not json").unwrap();

    cmd()
        .args(["-o", dir.path().to_str().unwrap()])
        .arg(input.path().to_str().unwrap())
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid declaration file"));
}

// -- diagnostics --

#[test]
fn deny_warnings_fails_on_diagnostic() {
    cmd()
        .arg("--deny-warnings")
        .write_stdin(fixture("shapes.js"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 warning(s) emitted"));
}

#[test]
fn deny_warnings_passes_clean_input() {
    cmd()
        .arg("--deny-warnings")
        .write_stdin("/*\nint add(int a, int b)\nAdds.\n@arg a left\n*/\nfunction add(a, b) {}\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("`int add(int a, int b)`"));
}

#[test]
fn invalid_format_fails() {
    cmd()
        .args(["-f", "xml"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown format"));
}
