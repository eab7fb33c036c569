//! Frontmatter detection and parsing.
//!
//! Two encodings are recognised, both anchored at the very first byte of the
//! document (no leading blank lines or whitespace):
//!
//! ```text
//! ---                      ```json
//! title: Getting Started   {"title": "Getting Started"}
//! tags: [intro]            ```
//! ---
//! ```
//!
//! A YAML block always wins over a fenced JSON block; the JSON pattern is only
//! tried when no YAML block matches. Whatever follows the closing delimiter
//! line is the body.
//!
//! # Example
//!
//! ```rust
//! use mdmeta_cli::markdown::frontmatter::{FrontmatterFormat, FrontmatterParser};
//!
//! let parser = FrontmatterParser::new();
//! let parsed = parser.parse("---\ntitle: Hi\n---\nHello world\n").unwrap();
//!
//! assert_eq!(parsed.format, Some(FrontmatterFormat::Yaml));
//! assert_eq!(parsed.data["title"], "Hi");
//! assert_eq!(parsed.content, "Hello world\n");
//! ```

use regex::Regex;
use serde_json::{Map, Number, Value as JsonValue};
use std::fmt;
use std::sync::LazyLock;
use tracing::trace;

use crate::core::MdmetaError;

/// Parsed frontmatter key/value pairs, in the order they appear in the block.
pub type Metadata = Map<String, JsonValue>;

static YAML_FRONTMATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\s*\n(.*?)\n---\s*\n").expect("YAML frontmatter pattern is valid")
});

static JSON_FRONTMATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A```json\s*\n(.*?)\n```\s*\n").expect("JSON frontmatter pattern is valid")
});

/// Encoding of a detected frontmatter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// `---` delimited YAML block
    Yaml,
    /// ```` ```json ```` fenced JSON block
    Json,
}

impl fmt::Display for FrontmatterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "YAML"),
            Self::Json => write!(f, "JSON"),
        }
    }
}

/// Byte boundaries of a detected frontmatter block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontmatterBoundaries {
    /// Which encoding matched
    pub format: FrontmatterFormat,
    /// Byte range of the block interior (between the delimiter lines)
    pub interior: (usize, usize),
    /// Byte position just past the closing delimiter line and its newline
    pub end: usize,
}

/// Result of extracting frontmatter from a document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFrontmatter {
    /// The parsed key/value pairs; empty when the document has no block.
    pub data: Metadata,

    /// The document body with the frontmatter block removed.
    pub content: String,

    /// Which encoding the block used, if one was found.
    pub format: Option<FrontmatterFormat>,

    /// The raw block interior before parsing.
    pub raw_frontmatter: Option<String>,
}

impl ParsedFrontmatter {
    /// Check if a frontmatter block was present in the original content.
    pub fn has_frontmatter(&self) -> bool {
        self.format.is_some()
    }
}

/// Frontmatter parser for YAML and fenced JSON blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontmatterParser;

impl FrontmatterParser {
    /// Create a new frontmatter parser.
    pub fn new() -> Self {
        Self
    }

    /// Locate the frontmatter block without parsing it.
    ///
    /// Returns `None` when neither pattern matches at the start of `content`.
    pub fn get_frontmatter_boundaries(&self, content: &str) -> Option<FrontmatterBoundaries> {
        let (format, captures) = if let Some(caps) = YAML_FRONTMATTER.captures(content) {
            (FrontmatterFormat::Yaml, caps)
        } else {
            (FrontmatterFormat::Json, JSON_FRONTMATTER.captures(content)?)
        };

        // Group 0 always exists on a match and group 1 is not optional
        let whole = captures.get(0)?;
        let interior = captures.get(1)?;

        trace!("Matched {} frontmatter ending at byte {}", format, whole.end());

        Some(FrontmatterBoundaries {
            format,
            interior: (interior.start(), interior.end()),
            end: whole.end(),
        })
    }

    /// Extract and parse the frontmatter block, returning metadata and body.
    ///
    /// # Errors
    ///
    /// - [`MdmetaError::FrontmatterParse`] if a block was found but its interior
    ///   is not valid under its encoding's grammar
    /// - [`MdmetaError::FrontmatterNotMapping`] if the interior parsed to a
    ///   sequence or scalar instead of a mapping
    pub fn parse(&self, content: &str) -> Result<ParsedFrontmatter, MdmetaError> {
        let Some(boundaries) = self.get_frontmatter_boundaries(content) else {
            return Ok(ParsedFrontmatter {
                data: Metadata::new(),
                content: content.to_string(),
                format: None,
                raw_frontmatter: None,
            });
        };

        let raw = &content[boundaries.interior.0..boundaries.interior.1];
        let data = match boundaries.format {
            FrontmatterFormat::Yaml => parse_yaml_block(raw)?,
            FrontmatterFormat::Json => parse_json_block(raw)?,
        };

        Ok(ParsedFrontmatter {
            data,
            content: content[boundaries.end..].to_string(),
            format: Some(boundaries.format),
            raw_frontmatter: Some(raw.to_string()),
        })
    }
}

/// Extract frontmatter metadata and body from a document's text.
///
/// Shorthand for [`FrontmatterParser::parse`] returning just the pair.
pub fn extract(content: &str) -> Result<(Metadata, String), MdmetaError> {
    let parsed = FrontmatterParser::new().parse(content)?;
    Ok((parsed.data, parsed.content))
}

fn parse_yaml_block(raw: &str) -> Result<Metadata, MdmetaError> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(raw).map_err(|e| MdmetaError::FrontmatterParse {
            format: FrontmatterFormat::Yaml,
            reason: e.to_string(),
        })?;

    match yaml_to_json(value) {
        JsonValue::Object(map) => Ok(map),
        // Includes null, from a block holding only comments or whitespace
        other => Err(MdmetaError::FrontmatterNotMapping {
            format: FrontmatterFormat::Yaml,
            found: value_kind(&other).to_string(),
        }),
    }
}

fn parse_json_block(raw: &str) -> Result<Metadata, MdmetaError> {
    let value: JsonValue = serde_json::from_str(raw).map_err(|e| MdmetaError::FrontmatterParse {
        format: FrontmatterFormat::Json,
        reason: e.to_string(),
    })?;

    match value {
        JsonValue::Object(map) => Ok(map),
        other => Err(MdmetaError::FrontmatterNotMapping {
            format: FrontmatterFormat::Json,
            found: value_kind(&other).to_string(),
        }),
    }
}

/// Convert a YAML value into the JSON data model used by records.
///
/// Non-string mapping keys are stringified, tags are dropped in favour of the
/// tagged value, and non-finite floats keep their YAML spelling as a string.
fn yaml_to_json(value: serde_yaml::Value) -> JsonValue {
    use serde_yaml::Value as Yaml;

    match value {
        Yaml::Null => JsonValue::Null,
        Yaml::Bool(b) => JsonValue::Bool(b),
        Yaml::Number(n) => {
            if let Some(i) = n.as_i64() {
                JsonValue::Number(i.into())
            } else if let Some(u) = n.as_u64() {
                JsonValue::Number(u.into())
            } else {
                n.as_f64()
                    .and_then(Number::from_f64)
                    .map_or_else(|| JsonValue::String(n.to_string()), JsonValue::Number)
            }
        }
        Yaml::String(s) => JsonValue::String(s),
        Yaml::Sequence(items) => JsonValue::Array(items.into_iter().map(yaml_to_json).collect()),
        Yaml::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(yaml_key_to_string(key), yaml_to_json(value));
            }
            JsonValue::Object(map)
        }
        Yaml::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_key_to_string(key: serde_yaml::Value) -> String {
    use serde_yaml::Value as Yaml;

    match key {
        Yaml::String(s) => s,
        Yaml::Number(n) => n.to_string(),
        Yaml::Bool(b) => b.to_string(),
        Yaml::Null => "null".to_string(),
        other => serde_json::to_string(&yaml_to_json(other)).unwrap_or_default(),
    }
}

fn value_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "a sequence",
        JsonValue::Object(_) => "a mapping",
    }
}
