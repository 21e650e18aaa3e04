use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn scorer() -> Command {
    Command::cargo_bin("tf-idf-scorer").unwrap()
}

#[test]
fn scores_file_as_text() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("corpus.txt");
    fs::write(&input, "horse cowboy\nvultures horse\n").unwrap();

    scorer()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0\thorse=0 cowboy=0.3010299956"))
        .stdout(predicate::str::contains("\n1\tvultures=0.3010299956"))
        .stdout(predicate::str::ends_with(" horse=0\n"));
}

#[test]
fn reads_stdin_and_writes_json() {
    let out = scorer()
        .args(["--format", "json", "-"])
        .write_stdin("horse cowboy\n\nvultures horse\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let docs = parsed.as_array().unwrap();
    assert_eq!(docs.len(), 3);
    assert!(docs[1].as_object().unwrap().is_empty());
    // 3 documents, horse in 2 of them
    let horse = docs[0]["horse"].as_f64().unwrap();
    assert!((horse - (3.0f64 / 2.0).log(10.0)).abs() < 1e-12);
}

#[test]
fn top_keeps_highest_terms() {
    scorer()
        .args(["--top", "1"])
        .write_stdin("horse cowboy\nvultures horse\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0\tcowboy="))
        .stdout(predicate::str::contains("horse=").not());
}

#[test]
fn writes_cbor_to_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("scores.cbor");

    scorer()
        .args(["--format", "cbor", "--parallel", "-o"])
        .arg(&output)
        .write_stdin("alpha beta\nbeta gamma\n")
        .assert()
        .success();

    let bytes = fs::read(&output).unwrap();
    let docs: Vec<tf_idf_scorer::ScoreMap> = serde_cbor::from_slice(&bytes).unwrap();
    assert_eq!(docs, tf_idf_scorer::tf_idf(&["alpha beta", "beta gamma"]));
}

#[test]
fn rejects_unknown_format() {
    scorer()
        .args(["--format", "xml"])
        .write_stdin("a b\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn missing_input_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    scorer()
        .arg(dir.path().join("nope.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("I/O error"))
        .stderr(predicate::str::contains("Os {").not());
}
