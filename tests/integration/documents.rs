use mdmeta_cli::test_utils::{DocsFixture, MarkdownFixture};
use serde_json::{Value, json};

use super::mdmeta;

/// Run on `input` inside the fixture and return the parsed JSON records.
fn extract(docs: &DocsFixture, input: &str) -> Vec<Value> {
    mdmeta().current_dir(docs.root()).args([input, "--output", "out.json"]).assert().success();

    let written = docs.read("out.json").unwrap();
    serde_json::from_str(&written).unwrap()
}

fn by_name<'a>(records: &'a [Value], file_name: &str) -> &'a Value {
    records.iter().find(|r| r["file_name"] == file_name).unwrap()
}

#[test]
fn test_single_file_with_yaml_frontmatter() {
    let docs =
        DocsFixture::new().unwrap().with_raw("hi.md", "---\ntitle: Hi\n---\nHello world\n").unwrap();

    let records = extract(&docs, "hi.md");
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record["title"], "Hi");
    assert_eq!(record["word_count"], 2);
    assert_eq!(record["reading_time_minutes"], 1);
    assert_eq!(record["file_path"], "hi.md");
    assert_eq!(record["directory"], "");
}

#[test]
fn test_reading_time_for_400_words() {
    let body = vec!["word"; 400].join(" ");
    let docs = DocsFixture::new().unwrap().with_raw("long.md", &body).unwrap();

    let records = extract(&docs, "long.md");
    assert_eq!(records[0]["word_count"], 400);
    assert_eq!(records[0]["reading_time_minutes"], 2);
}

#[test]
fn test_directory_with_one_bad_document() {
    let docs = DocsFixture::new()
        .unwrap()
        .with_raw("docs/good.md", "---\ntitle: ok\n---\nfine\n")
        .unwrap()
        .with_raw("docs/bad.md", "---\nbad: [unclosed\n---\n")
        .unwrap();

    let records = extract(&docs, "docs");
    assert_eq!(records.len(), 2);

    let errors: Vec<_> = records.iter().filter(|r| r.get("error").is_some()).collect();
    assert_eq!(errors.len(), 1);

    let error = errors[0].as_object().unwrap();
    assert_eq!(error.len(), 2);
    assert_eq!(error["file_path"], "docs/bad.md");
    assert!(!error["error"].as_str().unwrap().is_empty());

    let good = by_name(&records, "good.md");
    assert_eq!(good["title"], "ok");
}

#[test]
fn test_fenced_json_frontmatter_in_mdx() {
    let docs = DocsFixture::new().unwrap().with_file(MarkdownFixture::json_page("intro")).unwrap();

    let records = extract(&docs, "pages");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], "Page intro");
    assert_eq!(records[0]["order"], 2);
    assert_eq!(records[0]["word_count"], 2);
    assert_eq!(records[0]["file_name"], "intro.mdx");
}

#[test]
fn test_uppercase_extension_is_skipped() {
    let docs = DocsFixture::new()
        .unwrap()
        .with_raw("tree/lower.md", "x")
        .unwrap()
        .with_raw("tree/UPPER.MD", "y")
        .unwrap();

    let records = extract(&docs, "tree");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["file_name"], "lower.md");
}

#[test]
fn test_frontmatter_overrides_computed_field() {
    let docs = DocsFixture::new()
        .unwrap()
        .with_raw("o.md", "---\nfile_name: custom\nword_count: lots\n---\none two\n")
        .unwrap();

    let records = extract(&docs, "o.md");
    let record = records[0].as_object().unwrap();

    assert_eq!(record["file_name"], "custom");
    assert_eq!(record["word_count"], "lots");
    let keys: Vec<_> = record.keys().map(String::as_str).collect();
    assert_eq!(keys[1], "file_name");
    assert_eq!(keys[4], "word_count");
    assert_eq!(keys.len(), 6);
}

#[test]
fn test_nested_values_survive() {
    let docs = DocsFixture::new()
        .unwrap()
        .with_raw("n.md", "---\nseo:\n  keywords: [rust, cli]\n  score: 4.5\npublished: true\n---\n")
        .unwrap();

    let records = extract(&docs, "n.md");
    assert_eq!(records[0]["seo"], json!({"keywords": ["rust", "cli"], "score": 4.5}));
    assert_eq!(records[0]["published"], true);
    assert_eq!(records[0]["word_count"], 0);
    assert_eq!(records[0]["reading_time_minutes"], 0);
}
