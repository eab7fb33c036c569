use mdmeta_cli::test_utils::{DocsFixture, MarkdownFixture};
use predicates::prelude::*;
use serde_json::Value;

use super::mdmeta;

fn two_posts() -> DocsFixture {
    DocsFixture::new()
        .unwrap()
        .with_raw("docs/one.md", "---\ntitle: One\ntags: [a, b]\n---\nFirst post body\n")
        .unwrap()
        .with_raw("docs/two.md", "---\ntitle: Two\nauthor: Sam\n---\nSecond\n")
        .unwrap()
}

#[test]
fn test_json_output_is_pretty_array() {
    let docs = two_posts();

    mdmeta().current_dir(docs.root()).args(["docs", "--output", "out.json"]).assert().success();

    let written = docs.read("out.json").unwrap();
    assert!(written.starts_with("[\n  {\n    \"file_path\": "));

    let parsed: Value = serde_json::from_str(&written).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 2);

    let one = records.iter().find(|r| r["title"] == "One").unwrap();
    let keys: Vec<_> = one.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        vec![
            "file_path",
            "file_name",
            "directory",
            "last_modified",
            "word_count",
            "reading_time_minutes",
            "title",
            "tags"
        ]
    );
    assert_eq!(one["word_count"], 3);
    assert_eq!(one["reading_time_minutes"], 1);
    assert_eq!(one["tags"], serde_json::json!(["a", "b"]));
    assert_eq!(one["directory"], "docs");
}

#[test]
fn test_json_extension_appended() {
    let docs = two_posts();

    mdmeta()
        .current_dir(docs.root())
        .args(["docs", "--output", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Metadata saved to report.json"));

    assert!(docs.path("report.json").exists());
    assert!(!docs.path("report").exists());
}

#[test]
fn test_csv_output() {
    let docs = two_posts();

    mdmeta()
        .current_dir(docs.root())
        .args(["docs", "--format", "csv", "--output", "report"])
        .assert()
        .success();

    let written = docs.read("report.csv").unwrap();
    let mut lines = written.split("\r\n");
    assert_eq!(
        lines.next(),
        Some(
            "author,directory,file_name,file_path,last_modified,reading_time_minutes,tags,title,word_count"
        )
    );

    let rows: Vec<_> = lines.filter(|line| !line.is_empty()).collect();
    assert_eq!(rows.len(), 2);

    // Missing author is an empty first cell; the tag list is JSON-encoded
    let one = rows.iter().find(|row| row.contains("one.md")).unwrap();
    assert!(one.starts_with(",docs,one.md,"));
    assert!(one.contains(r#""[""a"",""b""]",One,3"#));

    let two = rows.iter().find(|row| row.contains("two.md")).unwrap();
    assert!(two.starts_with("Sam,docs,two.md,"));
    assert!(two.ends_with(",,Two,1"));
}

#[test]
fn test_csv_default_output_keeps_json_name() {
    let docs = two_posts();

    mdmeta().current_dir(docs.root()).args(["docs", "--format", "csv"]).assert().success();

    assert!(docs.path("metadata-output.json.csv").exists());
}

#[test]
fn test_yaml_output_preserves_order() {
    let docs = two_posts();

    mdmeta()
        .current_dir(docs.root())
        .args(["docs", "--format", "yaml", "--output", "meta.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Metadata saved to meta.yml"));

    let written = docs.read("meta.yml").unwrap();
    let parsed: Vec<serde_yaml::Mapping> = serde_yaml::from_str(&written).unwrap();
    assert_eq!(parsed.len(), 2);

    let first_keys: Vec<_> =
        parsed[0].keys().map(|k| k.as_str().unwrap_or_default().to_string()).collect();
    assert_eq!(&first_keys[..3], ["file_path", "file_name", "directory"]);
}

#[test]
fn test_yaml_extension_appended() {
    let docs = DocsFixture::new().unwrap().with_file(MarkdownFixture::post("p")).unwrap();

    mdmeta()
        .current_dir(docs.root())
        .args(["posts", "--format", "yaml", "--output", "meta"])
        .assert()
        .success();

    assert!(docs.path("meta.yaml").exists());
}
