//! End-to-end tests of the assembly-params binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    Command::cargo_bin("assembly-params").expect("binary should build")
}

fn custom_catalog() -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".json").expect("Failed to create temp file");
    let json = serde_json::json!({
        "version": "1.0.0",
        "parameters": [
            {
                "key": "0",
                "long_description": "\n    (0) sample_name ----------\n    Name of the sample.\n    ",
                "short_description": "Sample name"
            },
            {
                "key": "1",
                "long_description": "\n    (1) min_depth ------------\n    Minimum read depth.\n    ",
                "short_description": "Min depth"
            }
        ]
    });
    write!(file, "{json}").expect("Failed to write catalog");
    file
}

#[test]
fn test_name() {
    cmd()
        .args(["name", "7"])
        .assert()
        .success()
        .stdout("datatype\n");
}

#[test]
fn test_name_by_name() {
    cmd()
        .args(["name", "clust_threshold"])
        .assert()
        .success()
        .stdout("clust_threshold\n");
}

#[test]
fn test_name_unknown_key() {
    cmd()
        .args(["name", "999"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("999").and(predicate::str::contains("not recognized")));
}

#[test]
fn test_describe_short() {
    cmd()
        .args(["describe", "7", "--short"])
        .assert()
        .success()
        .stdout("Datatype (see docs): rad, gbs, ddrad, etc.\n");
}

#[test]
fn test_describe_long() {
    cmd()
        .args(["describe", "0"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("(0) assembly_name ---")
                .and(predicate::str::contains("white-crowns")),
        );
}

#[test]
fn test_describe_json() {
    let output = cmd()
        .args(["describe", "1", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["key"], "1");
    assert_eq!(value["canonical_name"], "project_dir");
    assert_eq!(value["index_label"], "(1) project_dir");
    assert_eq!(
        value["short_description"],
        "Project dir (made in curdir if not present)"
    );
}

#[test]
fn test_show_all_short() {
    let output = cmd().args(["show", "*", "--short"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 30);
    assert_eq!(lines[0], "Assembly name. Used to name output directories for assembly steps");
    assert_eq!(lines[29], "Reads mapped to this reference are removed in step 3");
}

#[test]
fn test_show_index() {
    cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with(
                "Enter a name or number for explanation of the parameter\n\n(0) assembly_name\n",
            )
            .and(predicate::str::ends_with("(29) reference_as_filter\n")),
        );
}

#[test]
fn test_show_unknown_key() {
    cmd()
        .args(["show", "not_a_param"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not_a_param"));
}

#[test]
fn test_show_all_json() {
    let output = cmd()
        .args(["show", "*", "--short", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 30);
    assert_eq!(items[7]["name"], "datatype");
    assert_eq!(items[7]["description"], "Datatype (see docs): rad, gbs, ddrad, etc.");
}

#[test]
fn test_catalog_list_tsv() {
    let output = cmd()
        .args(["catalog", "list", "--format", "tsv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "key\tname\tshort_description");
    assert_eq!(lines.len(), 31);
    assert_eq!(lines[8], "7\tdatatype\tDatatype (see docs): rad, gbs, ddrad, etc.");
}

#[test]
fn test_catalog_list_text() {
    cmd()
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("Assembly Parameters (30 parameters)\n")
                .and(predicate::str::contains("Key"))
                .and(predicate::str::contains("reference_as_filter")),
        );
}

#[test]
fn test_catalog_list_json() {
    let output = cmd()
        .args(["catalog", "list", "--filter", "PATH", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["raw_fastq_path", "barcodes_path", "sorted_fastq_path"]);
}

#[test]
fn test_catalog_list_filter() {
    cmd()
        .args(["catalog", "list", "--filter", "consens"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("max_alleles_consens")
                .and(predicate::str::contains("max_Ns_consens"))
                .and(predicate::str::contains("max_Hs_consens"))
                .and(predicate::str::contains("datatype").not()),
        );
}

#[test]
fn test_custom_catalog() {
    let catalog = custom_catalog();

    cmd()
        .args(["--catalog"])
        .arg(catalog.path())
        .args(["show"])
        .assert()
        .success()
        .stdout(
            "Enter a name or number for explanation of the parameter\n\n(0) sample_name\n(1) min_depth\n",
        );

    cmd()
        .arg("--catalog")
        .arg(catalog.path())
        .args(["name", "7"])
        .assert()
        .failure();
}

#[test]
fn test_malformed_custom_catalog() {
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    write!(
        file,
        r#"{{"version": "1.0.0", "parameters": [{{"key": "0", "long_description": "\n (0) ---\n", "short_description": "x"}}]}}"#
    )
    .unwrap();

    cmd()
        .arg("--catalog")
        .arg(file.path())
        .args(["name", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed parameter entry '0'"));
}

#[test]
fn test_duplicate_name_custom_catalog() {
    let mut file = NamedTempFile::with_suffix(".json").unwrap();
    let json = serde_json::json!({
        "version": "1.0.0",
        "parameters": [
            {"key": "0", "long_description": "\n (0) depth ---\n", "short_description": "Min"},
            {"key": "1", "long_description": "\n (1) depth ---\n", "short_description": "Max"}
        ]
    });
    write!(file, "{json}").unwrap();

    cmd()
        .arg("--catalog")
        .arg(file.path())
        .args(["name", "depth"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("reuses the name 'depth'"));
}

#[test]
fn test_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("params.json");

    cmd()
        .args(["catalog", "export"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("Exported 30 parameters"));

    cmd()
        .arg("--catalog")
        .arg(&out)
        .args(["name", "14"])
        .assert()
        .success()
        .stdout("clust_threshold\n");

    // Refuses to overwrite without --force
    cmd().args(["catalog", "export"]).arg(&out).assert().failure();
    cmd()
        .args(["catalog", "export", "--force"])
        .arg(&out)
        .assert()
        .success();
}
