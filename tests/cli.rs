use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::{Path, PathBuf};

const SAMPLE_CHART: &str = "\
Chuck Norris (CEO) -- 9
├── Alice Johnson (Engineering Manager) -- 3
│   ├── Carol White (Senior Developer)
│   ├── Dave Brown (Developer)
│   └── Eve Davis (Junior Developer)
└── Bob Smith (Sales Manager) -- 4
    ├── Frank Wilson (Sales Lead) -- 2
    │   ├── Henry Taylor (Sales Rep)
    │   └── Ivy Anderson (Sales Rep)
    └── Grace Miller (Account Manager)
";

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/test_org.csv")
}

/// Writes the sample organisation to `dir/org.xlsx`, header in row 1.
fn write_workbook(dir: &Path) -> PathBuf {
    let rows = fs::read_to_string(fixture()).unwrap();
    let path = dir.join("org.xlsx");

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    for (row, line) in rows.lines().enumerate() {
        for (col, field) in line.split(';').take(4).enumerate() {
            if !field.is_empty() {
                sheet.write_string(row as u32, col as u16, field).unwrap();
            }
        }
    }
    workbook.save(&path).unwrap();
    path
}

/// Runs in an empty temp dir so no stray orgchart.json or out.png interferes.
fn orgchart(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("orgchart").unwrap();
    cmd.current_dir(dir).env_remove("ORGCHART_LOG");
    cmd
}

#[test]
fn test_ascii_chart() {
    let temp_dir = tempfile::tempdir().unwrap();
    orgchart(temp_dir.path())
        .arg("--input")
        .arg(fixture())
        .arg("--ascii")
        .assert()
        .success()
        .stdout(SAMPLE_CHART);
}

#[test]
fn test_ascii_chart_from_workbook() {
    let temp_dir = tempfile::tempdir().unwrap();
    let workbook = write_workbook(temp_dir.path());
    orgchart(temp_dir.path())
        .arg("--input")
        .arg(&workbook)
        .arg("--ascii")
        .assert()
        .success()
        .stdout(SAMPLE_CHART);
}

#[test]
fn test_workbook_with_blank_first_row() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("org.xlsx");
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.write_string(1, 0, "CEO").unwrap();
    sheet.write_string(1, 1, "Chuck Norris").unwrap();
    sheet.write_string(1, 3, "CEO").unwrap();
    sheet.write_string(2, 0, "E1").unwrap();
    sheet.write_string(2, 1, "Alice Johnson").unwrap();
    sheet.write_string(2, 2, "CEO").unwrap();
    sheet.write_string(2, 3, "Engineering Manager").unwrap();
    sheet.write_string(3, 1, "No Id").unwrap();
    workbook.save(&path).unwrap();

    orgchart(temp_dir.path())
        .arg("--input")
        .arg(&path)
        .arg("--ascii")
        .assert()
        .success()
        .stdout("Chuck Norris (CEO) -- 1\n└── Alice Johnson (Engineering Manager)\n")
        .stderr(predicate::str::contains("skipping row with empty id"))
        .stderr(predicate::str::contains("line=4"));
}

#[test]
fn test_ascii_only_managers() {
    let temp_dir = tempfile::tempdir().unwrap();
    orgchart(temp_dir.path())
        .arg("--input")
        .arg(fixture())
        .args(["--ascii", "--only-managers"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Frank Wilson (Sales Lead) -- 2"))
        .stdout(predicate::str::contains("Carol White").not());
}

#[test]
fn test_ascii_rooted_by_name() {
    let temp_dir = tempfile::tempdir().unwrap();
    orgchart(temp_dir.path())
        .arg("--input")
        .arg(fixture())
        .args(["--ascii", "--root", "Alice Johnson"])
        .assert()
        .success()
        .stdout(
            "\
Alice Johnson (Engineering Manager) -- 3
├── Carol White (Senior Developer)
├── Dave Brown (Developer)
└── Eve Davis (Junior Developer)
",
        );
}

#[test]
fn test_rooted_individual_contributor_managers_only_warns() {
    let temp_dir = tempfile::tempdir().unwrap();
    orgchart(temp_dir.path())
        .arg("--input")
        .arg(fixture())
        .args(["--ascii", "--root", "E9", "--only-managers"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("E9 has no reports, nothing left to chart"));
}

#[test]
fn test_orgsize_quotes_fields_with_delimiter() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("org.csv"),
        "id;name;manager_id;title\nE1;\"Smith; Jr.\";;Manager\nE2;Dev;E1;Dev\n",
    )
    .unwrap();

    orgchart(temp_dir.path())
        .args(["--input", "org.csv", "--orgsize"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Smith; Jr.\";Manager;1;1\n"));
}

#[test]
fn test_orgsize_report() {
    let temp_dir = tempfile::tempdir().unwrap();
    orgchart(temp_dir.path())
        .arg("--input")
        .arg(fixture())
        .args(["--ascii", "--orgsize"])
        .assert()
        .success()
        .stdout(
            "\
manager;title;total org size;number of directs
Chuck Norris;CEO;9;2
Alice Johnson;Engineering Manager;3;3
Bob Smith;Sales Manager;4;2
Frank Wilson;Sales Lead;2;2
",
        );
}

#[test]
fn test_json_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let output = orgchart(temp_dir.path())
        .arg("--input")
        .arg(fixture())
        .args(["--json", "--root", "E6"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["name"], "Frank Wilson");
    assert_eq!(value[0]["reports"].as_array().unwrap().len(), 2);
}

#[test]
fn test_dot_output_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    orgchart(temp_dir.path())
        .arg("--input")
        .arg(fixture())
        .args(["--output", "chart.dot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chart.dot"));

    let dot = fs::read_to_string(temp_dir.path().join("chart.dot")).unwrap();
    assert!(dot.starts_with("strict digraph orgchart"));
    assert!(dot.contains("<B>Ivy Anderson</B>"));
    assert!(dot.contains("lightyellow"));
    assert_eq!(dot.matches("->").count(), 9);
}

#[test]
fn test_missing_graphviz_fails_without_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    // An empty directory as PATH hides any installed `dot`.
    orgchart(temp_dir.path())
        .env("PATH", temp_dir.path())
        .arg("--input")
        .arg(fixture())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Graphviz `dot` not found"));

    assert!(!temp_dir.path().join("out.png").exists());
}

#[test]
fn test_missing_input_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    orgchart(temp_dir.path())
        .args(["--input", "nope.csv", "--ascii"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Input file not found"))
        .stdout("");
}

#[test]
fn test_unsupported_extension() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(temp_dir.path().join("org.txt"), "id;name;manager_id;title\n").unwrap();

    orgchart(temp_dir.path())
        .args(["--input", "org.txt", "--ascii"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file type"));
}

#[test]
fn test_duplicate_id_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("dup.csv"),
        "id;name;manager_id;title\nE1;Alice;;Manager\nE1;Alicia;;Director\n",
    )
    .unwrap();

    orgchart(temp_dir.path())
        .args(["--input", "dup.csv", "--ascii"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("E1 appears more than once"))
        .stdout("");
}

#[test]
fn test_cycle_is_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("cycle.csv"),
        "id;name;manager_id;title\nA;Ann;B;Lead\nB;Ben;A;Lead\n",
    )
    .unwrap();

    orgchart(temp_dir.path())
        .args(["--input", "cycle.csv", "--ascii"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cycle detected"));
}

#[test]
fn test_ambiguous_root() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("twins.csv"),
        "id;name;manager_id;title\nR;Root;;CEO\nA;Sam Lee;R;Dev\nB;Sam Lee;R;Dev\n",
    )
    .unwrap();

    orgchart(temp_dir.path())
        .args(["--input", "twins.csv", "--ascii", "--root", "Sam Lee"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Expected exactly one occurrence of Sam Lee, but found 2",
        ));
}

#[test]
fn test_orphan_dropped_then_rooted_by_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("orphan.csv"),
        "id;name;manager_id;title\nCEO;Chuck;;CEO\nE1;Alice;GHOST;Manager\n",
    )
    .unwrap();

    orgchart(temp_dir.path())
        .args(["--input", "orphan.csv", "--ascii"])
        .assert()
        .success()
        .stdout("Chuck (CEO)\n")
        .stderr(predicate::str::contains("manager id not found"));

    fs::write(temp_dir.path().join("roots.json"), r#"{ "orphans": "root" }"#).unwrap();
    orgchart(temp_dir.path())
        .args(["--input", "orphan.csv", "--ascii", "--config", "roots.json"])
        .assert()
        .success()
        .stdout("Chuck (CEO)\nAlice (Manager)\n");
}

#[test]
fn test_missing_explicit_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    orgchart(temp_dir.path())
        .arg("--input")
        .arg(fixture())
        .args(["--ascii", "--config", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}
