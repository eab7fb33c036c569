//! Serialization of record lists.
//!
//! Three formats are supported:
//!
//! | Format | Shape |
//! |--------|-------|
//! | `json` | Array of objects, 2-space indentation, key order kept |
//! | `csv`  | Header of sorted field names, one row per record |
//! | `yaml` | Sequence of mappings, key order kept |
//!
//! [`save_output`] renders the whole document in memory and then writes it
//! with [`atomic_write`], so a failed run never leaves a partial file.

pub mod csv;

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::MdmetaError;
use crate::metadata::Record;
use crate::utils::fs::atomic_write;

/// Serialization format for the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,
    /// Comma-separated values with a header row
    Csv,
    /// YAML sequence of mappings
    Yaml,
}

impl OutputFormat {
    /// Extension appended to output paths that lack one for this format.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => ".json",
            Self::Csv => ".csv",
            Self::Yaml => ".yaml",
        }
    }

    /// Suffixes accepted as-is for this format.
    const fn accepted_suffixes(self) -> &'static [&'static str] {
        match self {
            Self::Json => &[".json"],
            Self::Csv => &[".csv"],
            Self::Yaml => &[".yaml", ".yml"],
        }
    }

    /// Append the format's extension unless the path already ends with an
    /// accepted one. The comparison is case-sensitive.
    ///
    /// ```rust
    /// use mdmeta_cli::output::OutputFormat;
    /// use std::path::{Path, PathBuf};
    ///
    /// assert_eq!(OutputFormat::Csv.normalize_output_path(Path::new("out")), PathBuf::from("out.csv"));
    /// assert_eq!(OutputFormat::Yaml.normalize_output_path(Path::new("out.yml")), PathBuf::from("out.yml"));
    /// assert_eq!(
    ///     OutputFormat::Csv.normalize_output_path(Path::new("out.json")),
    ///     PathBuf::from("out.json.csv")
    /// );
    /// ```
    #[must_use]
    pub fn normalize_output_path(self, path: &Path) -> PathBuf {
        let raw = path.as_os_str().to_string_lossy();
        if self.accepted_suffixes().iter().any(|suffix| raw.ends_with(suffix)) {
            return path.to_path_buf();
        }

        let mut normalized = path.as_os_str().to_os_string();
        normalized.push(self.extension());
        PathBuf::from(normalized)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Render records in the given format.
///
/// # Errors
///
/// Returns an error if a serializer fails; with string keys and JSON values
/// this does not happen in practice.
pub fn render(records: &[Record], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(records).context("Failed to serialize records as JSON")
        }
        OutputFormat::Csv => self::csv::render_csv(records),
        OutputFormat::Yaml => {
            serde_yaml::to_string(records).context("Failed to serialize records as YAML")
        }
    }
}

/// Render records and write them to `path` in one atomic step.
///
/// # Errors
///
/// Returns [`MdmetaError::OutputWrite`] when rendering or writing fails. The
/// destination is left untouched in that case.
pub fn save_output(records: &[Record], path: &Path, format: OutputFormat) -> Result<(), MdmetaError> {
    let output_error = |err: anyhow::Error| MdmetaError::OutputWrite {
        path: path.to_string_lossy().into_owned(),
        reason: format!("{err:#}"),
    };

    let rendered = render(records, format).map_err(output_error)?;
    atomic_write(path, rendered.as_bytes()).map_err(output_error)?;

    debug!("Wrote {} record(s) as {} to {}", records.len(), format, path.display());
    Ok(())
}
