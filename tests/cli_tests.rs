//! End-to-end tests of the command-line interface

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const GRID: &str = "ABCCC\nFGWOO\nCHILL\nPQNDD\nUVDXY\n";

fn bin() -> Command {
    Command::cargo_bin("grid-word-finder").expect("binary should build")
}

fn temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

#[test]
fn test_search_text_output() {
    let grid = temp_file(GRID, ".txt");

    bin()
        .args(["search", "--grid"])
        .arg(grid.path())
        .args(["CHILL", "WIND", "COLD", "SNOW"])
        .assert()
        .success()
        .stdout(predicate::str::contains("COLD"))
        .stdout(predicate::str::contains("CHILL"))
        .stdout(predicate::str::contains("WIND"))
        .stdout(predicate::str::contains("SNOW").not());
}

#[test]
fn test_search_tsv_ranking() {
    let grid = temp_file(GRID, ".txt");

    let output = bin()
        .args(["--format", "tsv", "search", "--grid"])
        .arg(grid.path())
        .arg("CHILL,WIND,COLD")
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "rank\tword\thits\trow\tcol\tdirection");
    assert_eq!(lines[1], "1\tCOLD\t2\t0\t3\tvertical");
    assert_eq!(lines[2], "2\tCHILL\t1\t2\t0\thorizontal");
    assert_eq!(lines[3], "3\tWIND\t1\t1\t2\tvertical");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_search_json_output() {
    let grid = temp_file(GRID, ".txt");
    let words = temp_file("# weather\nCHILL\nWIND\n", ".txt");

    let output = bin()
        .args(["--format", "json", "search", "--grid"])
        .arg(grid.path())
        .arg("--words")
        .arg(words.path())
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["grid_size"], 5);
    assert_eq!(report["words_searched"], 2);
    assert_eq!(report["matches"][0]["word"], "CHILL");
    assert_eq!(report["matches"][0]["hits"], 1);
    assert_eq!(report["stats"]["cells_visited"], 25);
}

#[test]
fn test_search_grid_from_stdin() {
    bin()
        .args(["search", "--grid", "-", "CHILL"])
        .write_stdin(GRID)
        .assert()
        .success()
        .stdout(predicate::str::contains("CHILL"));
}

#[test]
fn test_search_rejects_wrong_shape() {
    let grid = temp_file("ABC\nDEF\nGHI\n", ".txt");

    bin()
        .args(["search", "--grid"])
        .arg(grid.path())
        .arg("ABC")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Grid has 3 rows, expected 5"));
}

#[test]
fn test_search_custom_size() {
    let grid = temp_file("ABC\nDEF\nGHI\n", ".txt");

    bin()
        .args(["search", "--size", "3", "--grid"])
        .arg(grid.path())
        .args(["ABC", "ADG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ABC"))
        .stdout(predicate::str::contains("ADG"));
}

#[test]
fn test_search_requires_words() {
    let grid = temp_file(GRID, ".txt");

    bin()
        .args(["search", "--grid"])
        .arg(grid.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No words to search for"));
}

#[test]
fn test_search_no_matches() {
    let grid = temp_file(GRID, ".txt");

    bin()
        .args(["search", "--grid"])
        .arg(grid.path())
        .arg("SNOW")
        .assert()
        .success()
        .stdout(predicate::str::contains("No words found."));
}

#[test]
fn test_search_puzzle_file() {
    let puzzle = temp_file(
        r#"{"version": "1.0.0", "rows": ["AB", "CD"], "words": ["AB", "BD", "CA"]}"#,
        ".json",
    );

    bin()
        .args(["--format", "tsv", "search", "--puzzle"])
        .arg(puzzle.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("AB\t1"))
        .stdout(predicate::str::contains("BD\t1"))
        .stdout(predicate::str::contains("CA").not());
}

#[test]
fn test_demo_runs_embedded_puzzle() {
    bin()
        .args(["demo", "--show-grid"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CHILL"))
        .stdout(predicate::str::contains("Top Words"));
}

#[test]
fn test_puzzle_export_round_trips() {
    let output = bin()
        .args(["puzzle", "export"])
        .output()
        .expect("Failed to run binary");
    assert!(output.status.success());

    let exported = temp_file(&String::from_utf8(output.stdout).unwrap(), ".json");
    bin()
        .args(["puzzle", "show", "--puzzle"])
        .arg(exported.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ABCCC"));
}

#[test]
fn test_search_merged_word_sources_over_limit() {
    // Each source is under the limit on its own
    let puzzle_words: Vec<String> = (0..60_000).map(|i| format!("P{i}")).collect();
    let puzzle = temp_file(
        &serde_json::json!({
            "version": "1.0.0",
            "rows": ["AB", "CD"],
            "words": puzzle_words,
        })
        .to_string(),
        ".json",
    );
    let file_words: String = (0..50_000).map(|i| format!("F{i}\n")).collect();
    let words = temp_file(&file_words, ".txt");

    bin()
        .args(["search", "--puzzle"])
        .arg(puzzle.path())
        .arg("--words")
        .arg(words.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Too many words: 110000 exceeds maximum of 100000",
        ));
}

#[test]
fn test_search_size_conflicts_with_puzzle() {
    let puzzle = temp_file(
        r#"{"version": "1.0.0", "rows": ["AB", "CD"], "words": ["AB"]}"#,
        ".json",
    );

    bin()
        .args(["search", "--size", "3", "--puzzle"])
        .arg(puzzle.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_search_ignore_case_keeps_spelling() {
    let grid = temp_file(GRID, ".txt");

    bin()
        .args(["--format", "tsv", "search", "--ignore-case", "--grid"])
        .arg(grid.path())
        .arg("chill")
        .assert()
        .success()
        .stdout(predicate::str::contains("1\tchill\t1\t2\t0\thorizontal"))
        .stdout(predicate::str::contains("CHILL").not());
}
