//! CLI integration tests: run the compiled binary against temp report files
//! and assert on exit codes and output.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const BLOOD_REPORT: &str = "\
Vitamin D: 25 ng/mL (Normal: 20-50)
Glucose: 90 mg/dL (Reference range: 70-99)
TSH: 2.1 mIU/L
";

const GENETIC_REPORT: &str = "\
Genotype panel results listed per variant below.
MTHFR C677T rs1801133 genotype CT heterozygous
COMT V158M rs4680 genotype AA
";

fn report_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".txt").expect("temp file");
    file.write_all(contents.as_bytes()).expect("write report");
    file
}

fn cmd() -> Command {
    Command::cargo_bin("report-parser").expect("binary built")
}

#[test]
fn parse_blood_report_text_output() {
    let file = report_file(BLOOD_REPORT);

    cmd()
        .arg("parse")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("type: blood"))
        .stdout(predicate::str::contains("Vitamin D"))
        .stdout(predicate::str::contains("ng/mL"));
}

#[test]
fn parse_json_output_is_valid() {
    let file = report_file(GENETIC_REPORT);

    let output = cmd()
        .arg("parse")
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let results: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    let doc = &results[0]["document"];
    assert_eq!(doc["document_type"], "genetic");
    assert_eq!(doc["variants"][0]["rsid"], "rs1801133");
}

#[test]
fn batch_continues_past_unreadable_file() {
    let file = report_file(BLOOD_REPORT);

    cmd()
        .arg("parse")
        .arg("/nonexistent/report.txt")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("read error"))
        .stdout(predicate::str::contains("type: blood"));
}

#[test]
fn batch_fails_when_nothing_readable() {
    cmd()
        .arg("parse")
        .arg("/nonexistent/a.txt")
        .arg("/nonexistent/b.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input file could be read"));
}

#[test]
fn classify_reports_scores() {
    let file = report_file(GENETIC_REPORT);

    cmd()
        .arg("classify")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("genetic"))
        .stdout(predicate::str::contains("indicators:"));
}

#[test]
fn reconcile_shows_match_stage() {
    let file = report_file(GENETIC_REPORT);

    cmd()
        .arg("reconcile")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("mthfr_c677t"))
        .stdout(predicate::str::contains("stage: rsid"));
}

#[test]
fn catalog_list_and_show() {
    cmd()
        .args(["catalog", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mthfr_c677t"))
        .stdout(predicate::str::contains("rs1801133"));

    cmd()
        .args(["catalog", "show", "comt_v158m"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rs4680"))
        .stdout(predicate::str::contains("COMT"));

    cmd()
        .args(["catalog", "show", "not_a_real_id"])
        .assert()
        .failure();
}

#[test]
fn catalog_export_roundtrips_through_custom_catalog() {
    let export = NamedTempFile::with_suffix(".json").expect("temp file");

    cmd()
        .args(["catalog", "export", "--output"])
        .arg(export.path())
        .assert()
        .success();

    // The exported file is a usable --catalog argument for reconcile
    let report = report_file(GENETIC_REPORT);
    cmd()
        .arg("reconcile")
        .arg(report.path())
        .arg("--catalog")
        .arg(export.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("mthfr_c677t"));
}
