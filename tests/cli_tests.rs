//! End-to-end tests for the `fixture` binary.

mod common;

use assert_cmd::Command;
use common::sample_catalog_file;
use predicates::prelude::*;

fn fixture_cmd() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("fixture").unwrap();
    cmd.env_remove("FIXTURE_SEED")
        .env_remove("FIXTURE_COLLECTION_MIN")
        .env_remove("FIXTURE_COLLECTION_MAX");
    cmd
}

fn json_lines(stdout: &[u8]) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is JSON"))
        .collect()
}

#[test]
fn test_parse_normalizes_rust_spellings() {
    fixture_cmd()
        .args(["parse", "Vec<HashMap<String, i32>>?"])
        .assert()
        .success()
        .stdout("List<Map<String, Int>>?\n");
}

#[test]
fn test_parse_json_output() {
    let output = fixture_cmd()
        .args(["parse", "Pair<String, *>", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["classifier"]["name"], "Pair");
    assert_eq!(json["type_arguments"][1]["classifier"]["kind"], "star");
}

#[test]
fn test_parse_rejects_malformed_type() {
    fixture_cmd()
        .args(["parse", "List<Int"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse 'List<Int'"));
}

#[test]
fn test_generate_count_and_fixed_length() {
    let output = fixture_cmd()
        .args(["generate", "List<Boolean>", "--seed", "3", "--count", "4"])
        .args(["--min", "2", "--max", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let values = json_lines(&output.stdout);
    assert_eq!(values.len(), 4);
    for value in values {
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|v| v.is_boolean()));
    }
}

#[test]
fn test_generate_is_reproducible_with_seed() {
    let run = || {
        fixture_cmd()
            .args(["generate", "Map<String, List<Long>>", "--seed", "42", "--count", "3"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_generate_seed_from_environment() {
    let run = || {
        fixture_cmd()
            .env("FIXTURE_SEED", "5")
            .args(["generate", "List<Int>"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_generate_catalog_types() {
    let catalog = sample_catalog_file();
    let output = fixture_cmd()
        .arg("generate")
        .arg("Pair<User, Shape>")
        .arg("--catalog")
        .arg(catalog.path())
        .args(["--seed", "8"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let values = json_lines(&output.stdout);
    let pair = &values[0];
    assert_eq!(pair["$type"], "Pair<User, Shape>");
    assert_eq!(pair["first"]["$type"], "User");
    assert!(pair["first"]["age"].is_i64());
    assert_eq!(pair["second"]["$type"], "Circle");
}

#[test]
fn test_generate_with_slot_override() {
    let catalog = sample_catalog_file();
    let output = fixture_cmd()
        .arg("generate")
        .arg("User")
        .arg("--catalog")
        .arg(catalog.path())
        .args(["--set", "String#email=\"a@b.c\"", "--set", "Int=7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let user = &json_lines(&output.stdout)[0];
    assert_eq!(user["email"], "a@b.c");
    assert_eq!(user["age"], 7);
    assert_ne!(user["username"], "a@b.c");
}

#[test]
fn test_generate_top_level_key() {
    fixture_cmd()
        .args(["generate", "String", "--key", "token", "--set", "String#token=\"t-1\""])
        .assert()
        .success()
        .stdout("\"t-1\"\n");
}

#[test]
fn test_generate_capability_and_singleton() {
    let catalog = sample_catalog_file();
    fixture_cmd()
        .arg("generate")
        .arg("Pair<Named, Origin>")
        .arg("--catalog")
        .arg(catalog.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"$proxy\":\"Named\""))
        .stdout(predicate::str::contains("\"$singleton\":\"Origin\""));
}

#[test]
fn test_generate_unknown_type_fails() {
    fixture_cmd()
        .args(["generate", "Widget"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E201"));
}

#[test]
fn test_generate_inverted_range_fails() {
    fixture_cmd()
        .args(["generate", "List<Int>", "--min", "4", "--max", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E103"));
}

#[test]
fn test_generate_flags_override_environment_range() {
    let output = fixture_cmd()
        .env("FIXTURE_COLLECTION_MIN", "6")
        .args(["generate", "List<Int>", "--max", "10", "--count", "5"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    for value in json_lines(&output.stdout) {
        let len = value.as_array().unwrap().len();
        assert!((6..=10).contains(&len), "length {} outside 6..=10", len);
    }

    let output = fixture_cmd()
        .env("FIXTURE_COLLECTION_MIN", "8")
        .args(["generate", "List<Int>", "--min", "1", "--max", "2", "--count", "5"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    for value in json_lines(&output.stdout) {
        assert!(value.as_array().unwrap().len() <= 2);
    }
}

#[test]
fn test_catalog_listing() {
    let catalog = sample_catalog_file();
    fixture_cmd()
        .arg("catalog")
        .arg(catalog.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Pair<A, B> (class)"))
        .stdout(predicate::str::contains("public new(first: A, second: B)"))
        .stdout(predicate::str::contains("Shape (variant)"))
        .stdout(predicate::str::contains("fn get_name() -> String"))
        .stdout(predicate::str::contains("Origin (singleton)"));
}

#[test]
fn test_catalog_json_listing() {
    let catalog = sample_catalog_file();
    let output = fixture_cmd()
        .arg("catalog")
        .arg(catalog.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Circle", "Named", "Origin", "Pair", "Shape", "Square", "User"]);
}

#[test]
fn test_catalog_invalid_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"{ "classes": [ { "name": "X", "kind": "nope" } ] }"#).unwrap();

    fixture_cmd()
        .arg("catalog")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("E102"));
}
