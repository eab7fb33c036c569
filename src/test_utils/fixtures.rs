//! Sample documents and temporary document trees.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture for creating sample markdown files
#[derive(Clone, Debug)]
pub struct MarkdownFixture {
    /// Path relative to the tree root
    pub path: String,
    /// Full file content, frontmatter included
    pub content: String,
}

impl MarkdownFixture {
    /// Blog post with YAML frontmatter: title, tags and a draft flag
    pub fn post(name: &str) -> Self {
        Self {
            path: format!("posts/{name}.md"),
            content: format!(
                r#"---
title: "Post {name}"
tags:
  - rust
  - docs
draft: false
---

# {name}

Some words in the body of this post.
"#
            ),
        }
    }

    /// Document with a fenced JSON metadata block
    pub fn json_page(name: &str) -> Self {
        Self {
            path: format!("pages/{name}.mdx"),
            content: format!(
                r#"```json
{{"title": "Page {name}", "order": 2}}
```
Page body.
"#
            ),
        }
    }

    /// Document whose YAML block does not parse
    pub fn broken(name: &str) -> Self {
        Self {
            path: format!("{name}.md"),
            content: "---\nbad: [unclosed\n---\nbody\n".to_string(),
        }
    }

    /// Markdown file without frontmatter
    pub fn simple(name: &str, content: &str) -> Self {
        Self {
            path: format!("{name}.md"),
            content: content.to_string(),
        }
    }

    /// Write the markdown file below a directory, creating parents
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let file_path = dir.join(&self.path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&file_path, &self.content)
            .with_context(|| format!("Failed to write fixture {}", file_path.display()))?;
        Ok(file_path)
    }
}

/// A temporary directory holding a documentation tree.
///
/// The directory and everything in it is removed on drop.
///
/// # Example
///
/// ```rust,no_run
/// use mdmeta_cli::test_utils::{DocsFixture, MarkdownFixture};
///
/// # fn example() -> anyhow::Result<()> {
/// let docs = DocsFixture::new()?
///     .with_file(MarkdownFixture::post("hello"))?
///     .with_raw("notes/plain.md", "Just text")?;
///
/// assert!(docs.root().join("posts/hello.md").exists());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DocsFixture {
    temp: TempDir,
}

impl DocsFixture {
    /// Create an empty tree.
    pub fn new() -> Result<Self> {
        let temp = TempDir::new().context("Failed to create temp directory")?;
        Ok(Self {
            temp,
        })
    }

    /// Root directory of the tree.
    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    /// Absolute path of an entry in the tree.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp.path().join(relative)
    }

    /// Add a fixture document.
    pub fn with_file(self, file: MarkdownFixture) -> Result<Self> {
        file.write_to(self.root())?;
        Ok(self)
    }

    /// Add a file with exact content at a relative path.
    pub fn with_raw(self, relative: &str, content: &str) -> Result<Self> {
        self.write_raw(relative, content)?;
        Ok(self)
    }

    /// Write a file with exact content at a relative path.
    pub fn write_raw(&self, relative: &str, content: &str) -> Result<PathBuf> {
        MarkdownFixture {
            path: relative.to_string(),
            content: content.to_string(),
        }
        .write_to(self.root())
    }

    /// Read a file from the tree as text.
    pub fn read(&self, relative: &str) -> Result<String> {
        let path = self.path(relative);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }
}
