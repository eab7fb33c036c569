//! Atomic file write operations using temp-and-rename strategy.
//!
//! The output file either keeps its previous content or receives the new
//! content in full; an interrupted run never leaves a truncated report.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::utils::fs::dirs::ensure_dir;

/// Atomically writes bytes to a file using a write-then-rename strategy.
///
/// 1. Creates a uniquely named temporary file next to the target
/// 2. Writes and syncs the content
/// 3. Renames the temporary file over the target
///
/// Missing parent directories are created first. The temporary file is
/// removed if any step fails.
///
/// # Errors
///
/// Fails when the parent directory cannot be created, the temporary file
/// cannot be written, or the final rename is refused (for example when the
/// target is an existing directory).
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in: {}", parent.display()))?;

    temp.write_all(content)
        .with_context(|| format!("Failed to write to temp file: {}", temp.path().display()))?;
    temp.as_file().sync_all().with_context(|| "Failed to sync file to disk")?;

    temp.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}
