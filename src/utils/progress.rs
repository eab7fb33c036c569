//! Progress spinner for directory scans
//!
//! Walking a large documentation tree can take a while, so the CLI shows a
//! spinner on stderr with the number of documents processed so far. The
//! spinner never writes to stdout and is hidden entirely when:
//! - `--no-progress` is passed
//! - the `MDMETA_NO_PROGRESS` environment variable is set
//! - stderr is not a terminal (indicatif draws nothing in that case)
//!
//! # Examples
//!
//! ```rust
//! use mdmeta_cli::utils::progress::ProgressBar;
//!
//! let spinner = ProgressBar::new_spinner();
//! spinner.set_message("Scanning docs/");
//! spinner.inc(1);
//! spinner.finish_and_clear();
//! ```

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle as IndicatifStyle};
use std::time::Duration;

/// Environment variable that disables all progress output.
pub const NO_PROGRESS_ENV: &str = "MDMETA_NO_PROGRESS";

fn is_progress_disabled() -> bool {
    std::env::var_os(NO_PROGRESS_ENV).is_some()
}

/// A spinner with consistent styling that counts processed documents.
///
/// Cloning shares the underlying indicator, so the walker and the CLI can hold
/// the same spinner.
#[derive(Clone, Debug)]
pub struct ProgressBar {
    inner: IndicatifBar,
}

impl ProgressBar {
    /// Creates a spinner, or a hidden indicator when `MDMETA_NO_PROGRESS` is set.
    ///
    /// The animation ticks every 100ms.
    #[must_use]
    pub fn new_spinner() -> Self {
        let bar = if is_progress_disabled() {
            IndicatifBar::hidden()
        } else {
            let bar = IndicatifBar::new_spinner();
            bar.set_style(spinner_style());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        };
        Self {
            inner: bar,
        }
    }

    /// Creates an indicator that silently ignores every update.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            inner: IndicatifBar::hidden(),
        }
    }

    /// Sets the message shown next to the spinner.
    pub fn set_message(&self, msg: impl Into<String>) {
        self.inner.set_message(msg.into());
    }

    /// Advances the processed-document count.
    pub fn inc(&self, delta: u64) {
        self.inner.inc(delta);
    }

    /// Number of documents counted so far.
    #[must_use]
    pub fn position(&self) -> u64 {
        self.inner.position()
    }

    /// Removes the spinner from the terminal.
    pub fn finish_and_clear(&self) {
        self.inner.finish_and_clear();
    }
}

fn spinner_style() -> IndicatifStyle {
    IndicatifStyle::default_spinner()
        .template("{spinner:.cyan} {msg} ({pos} documents)")
        .unwrap_or_else(|_| IndicatifStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
}
