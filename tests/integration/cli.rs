use mdmeta_cli::test_utils::{DocsFixture, MarkdownFixture};
use predicates::prelude::*;

use super::mdmeta;

#[test]
fn test_invalid_input_path_exits_1_without_output() {
    let docs = DocsFixture::new().unwrap().with_raw("notes.txt", "plain text").unwrap();

    mdmeta()
        .current_dir(docs.root())
        .arg("notes.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Input path must be a markdown file or directory"));

    assert!(!docs.path("metadata-output.json").exists());
}

#[test]
fn test_missing_input_path_exits_1() {
    let docs = DocsFixture::new().unwrap();

    mdmeta().current_dir(docs.root()).arg("ghost.md").assert().code(1);
    assert!(!docs.path("metadata-output.json").exists());
}

#[test]
fn test_empty_directory_reports_no_files() {
    let docs = DocsFixture::new().unwrap().with_raw("src/readme.txt", "nothing here").unwrap();

    mdmeta()
        .current_dir(docs.root())
        .arg("src")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing src..."))
        .stdout(predicate::str::contains("No markdown files found."));

    assert!(!docs.path("metadata-output.json").exists());
}

#[test]
fn test_summary_lines() {
    let docs = DocsFixture::new()
        .unwrap()
        .with_raw("docs/a.md", "---\ntitle: A\nauthor: me\n---\nBody words here\n")
        .unwrap()
        .with_raw("docs/b.md", "No frontmatter at all\n")
        .unwrap();

    mdmeta()
        .current_dir(docs.root())
        .arg("docs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing docs..."))
        .stdout(predicate::str::contains("Found 2 markdown files."))
        .stdout(predicate::str::contains("Metadata saved to metadata-output.json"))
        .stdout(predicate::str::contains(
            "Metadata fields found:\nauthor, directory, file_name, file_path, last_modified, \
             reading_time_minutes, title, word_count",
        ))
        .stdout(predicate::str::contains("Errors encountered").not());

    assert!(docs.path("metadata-output.json").exists());
}

#[test]
fn test_error_summary_lists_failed_files() {
    let docs = DocsFixture::new()
        .unwrap()
        .with_file(MarkdownFixture::post("good"))
        .unwrap()
        .with_file(MarkdownFixture::broken("bad"))
        .unwrap();

    mdmeta()
        .current_dir(docs.root())
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 markdown files."))
        .stdout(predicate::str::contains("Errors encountered in 1 files:"))
        .stdout(predicate::str::contains("bad.md: YAML parsing error"));
}

#[test]
fn test_quiet_keeps_only_errors() {
    let docs = DocsFixture::new()
        .unwrap()
        .with_file(MarkdownFixture::post("good"))
        .unwrap()
        .with_file(MarkdownFixture::broken("bad"))
        .unwrap();

    mdmeta()
        .current_dir(docs.root())
        .args([".", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing").not())
        .stdout(predicate::str::contains("Metadata fields found").not())
        .stdout(predicate::str::contains("Errors encountered in 1 files:"));

    assert!(docs.path("metadata-output.json").exists());
}

#[test]
fn test_verbose_and_quiet_conflict() {
    let docs = DocsFixture::new().unwrap();

    mdmeta().current_dir(docs.root()).args([".", "--verbose", "--quiet"]).assert().code(2);
}

#[test]
fn test_unknown_format_rejected() {
    let docs = DocsFixture::new().unwrap().with_file(MarkdownFixture::post("p")).unwrap();

    mdmeta()
        .current_dir(docs.root())
        .args([".", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn test_output_from_environment() {
    let docs = DocsFixture::new().unwrap().with_file(MarkdownFixture::post("p")).unwrap();

    mdmeta()
        .current_dir(docs.root())
        .env("MDMETA_OUTPUT", "from-env")
        .env("MDMETA_FORMAT", "csv")
        .arg("posts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Metadata saved to from-env.csv"));

    assert!(docs.path("from-env.csv").exists());
}

#[test]
fn test_unwritable_output_exits_1() {
    let docs = DocsFixture::new().unwrap().with_file(MarkdownFixture::post("p")).unwrap();
    std::fs::create_dir(docs.path("taken.json")).unwrap();

    mdmeta()
        .current_dir(docs.root())
        .args(["posts", "--output", "taken.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to write output"));

    assert!(docs.path("taken.json").is_dir());
}

#[test]
fn test_help_mentions_formats() {
    mdmeta()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("csv"));
}

#[test]
fn test_dollar_sign_in_paths_is_literal() {
    let docs =
        DocsFixture::new().unwrap().with_raw("price$1.md", "---\ntitle: Price\n---\nOne dollar\n").unwrap();

    mdmeta()
        .current_dir(docs.root())
        .args(["price$1.md", "--output", "out$HOME_NOT_EXPANDED.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 markdown files."));

    let written = docs.read("out$HOME_NOT_EXPANDED.json").unwrap();
    let records: Vec<serde_json::Value> = serde_json::from_str(&written).unwrap();
    assert_eq!(records[0]["file_name"], "price$1.md");
    assert_eq!(records[0]["title"], "Price");
}
