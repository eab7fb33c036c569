//! Integration test suite for mdmeta
//!
//! End-to-end tests that run the `mdmeta` binary against temporary document
//! trees and inspect its output files, stdout and exit code.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **cli**: Argument handling, exit codes and the printed summary
//! - **formats**: JSON, CSV and YAML output files and extension handling
//! - **documents**: Frontmatter encodings, enrichment and per-file errors

mod cli;
mod documents;
mod formats;

use assert_cmd::Command;

/// The `mdmeta` binary with a deterministic environment: no colors, no
/// spinner, and no inherited output/format defaults.
pub fn mdmeta() -> Command {
    let mut cmd = Command::cargo_bin("mdmeta").unwrap();
    cmd.env("NO_COLOR", "1")
        .env("MDMETA_NO_PROGRESS", "1")
        .env_remove("MDMETA_OUTPUT")
        .env_remove("MDMETA_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}
