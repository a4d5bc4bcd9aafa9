//! End-to-end tests for the ddlsmith binary

use std::fs;
use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn schema_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

const SAMPLE: &str = r#"{
    "container": {"name": "shop", "description": "Web shop"},
    "tables": [{
        "table_data": {
            "name": "users",
            "columns": [
                {"name": "id", "type": "bigint", "nullable": false},
                {"name": "email", "type": "varchar", "length": 255}
            ]
        }
    }]
}"#;

#[test]
fn test_generate_prints_script() {
    let schema = schema_file(SAMPLE);

    Command::cargo_bin("ddlsmith")
        .unwrap()
        .args(["generate"])
        .arg(schema.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE SCHEMA \"shop\";"))
        .stdout(predicate::str::contains("CREATE TABLE \"shop\".\"users\""))
        .stdout(predicate::str::contains("\"email\" varchar(255)"));
}

#[test]
fn test_generate_writes_output_file() {
    let schema = schema_file(SAMPLE);
    let output = tempfile::NamedTempFile::new().unwrap();

    Command::cargo_bin("ddlsmith")
        .unwrap()
        .args(["generate"])
        .arg(schema.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .success();

    let script = fs::read_to_string(output.path()).unwrap();
    assert!(script.contains("COMMENT ON SCHEMA \"shop\" IS 'Web shop';"));
}

#[test]
fn test_check_reports_contents() {
    let schema = schema_file(SAMPLE);

    Command::cargo_bin("ddlsmith")
        .unwrap()
        .args(["check"])
        .arg(schema.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("users (2 columns, 0 foreign keys)"))
        .stdout(predicate::str::contains("document is valid"));
}

#[test]
fn test_missing_file_fails() {
    Command::cargo_bin("ddlsmith")
        .unwrap()
        .args(["generate", "no_such_file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Schema document not found"));
}

#[test]
fn test_invalid_json_fails() {
    let schema = schema_file("not json");

    Command::cargo_bin("ddlsmith")
        .unwrap()
        .args(["check"])
        .arg(schema.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid schema document"));
}

#[test]
fn test_types_lists_catalog() {
    Command::cargo_bin("ddlsmith")
        .unwrap()
        .args(["types"])
        .assert()
        .success()
        .stdout(predicate::str::contains("varchar"))
        .stdout(predicate::str::contains("double precision"));
}
