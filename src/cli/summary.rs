//! Run summary printed to stdout.
//!
//! Everything here goes to stdout; diagnostics go through `tracing` to stderr.
//! In quiet mode only the per-file error section is printed.

use colored::Colorize;
use std::path::Path;

use crate::metadata::record::{ERROR, FILE_PATH};
use crate::metadata::{Record, field_union};

/// Prints progress lines and the final summary of a run.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    quiet: bool,
}

impl Summary {
    /// Create a summary printer; `quiet` suppresses everything but errors.
    #[must_use]
    pub const fn new(quiet: bool) -> Self {
        Self {
            quiet,
        }
    }

    /// `Processing <path>...`
    pub fn processing(&self, input: &str) {
        if !self.quiet {
            println!("Processing {input}...");
        }
    }

    /// Printed when the input held no documents.
    pub fn no_documents(&self) {
        if !self.quiet {
            println!("{}", "No markdown files found.".yellow());
        }
    }

    /// `Found N markdown files.`
    pub fn found(&self, count: usize) {
        if !self.quiet {
            println!("Found {count} markdown files.");
        }
    }

    /// `Metadata saved to <path>`
    pub fn saved(&self, output: &Path) {
        if !self.quiet {
            println!("{} {}", "Metadata saved to".green(), output.display());
        }
    }

    /// The sorted union of field names, comma-joined.
    pub fn fields(&self, records: &[Record]) {
        if self.quiet {
            return;
        }
        println!("\n{}", "Metadata fields found:".bold());
        println!("{}", fields_line(records));
    }

    /// One line per record that carries an `error` field.
    pub fn errors(&self, records: &[Record]) {
        let lines = error_lines(records);
        if lines.is_empty() {
            return;
        }

        println!("\n{}", format!("Errors encountered in {} files:", lines.len()).red());
        for line in lines {
            println!("{line}");
        }
    }
}

pub(crate) fn fields_line(records: &[Record]) -> String {
    field_union(records).into_iter().collect::<Vec<_>>().join(", ")
}

pub(crate) fn error_lines(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .filter(|record| record.is_error())
        .map(|record| {
            format!(
                "  {}: {}",
                record.field_text(FILE_PATH).unwrap_or_default(),
                record.field_text(ERROR).unwrap_or_default()
            )
        })
        .collect()
}
