//! Command-line interface for mdmeta.
//!
//! `mdmeta` takes one input path, which may be a single `.md`/`.mdx` file or a
//! directory to scan recursively, and writes the metadata of every document it
//! finds to one output file.
//!
//! # Usage
//!
//! ```bash
//! # Scan a tree and write metadata-output.json
//! mdmeta docs/
//!
//! # CSV report with an explicit destination (".csv" is appended if missing)
//! mdmeta docs/ --format csv --output reports/docs
//!
//! # Single document, YAML output
//! mdmeta README.md --format yaml --output readme.yml
//! ```
//!
//! # Environment Variables
//!
//! - `MDMETA_OUTPUT` - Default for `--output`
//! - `MDMETA_FORMAT` - Default for `--format`
//! - `MDMETA_NO_PROGRESS` - Set to any value to hide the spinner
//! - `RUST_LOG` - Log filter when neither `--verbose` nor `--quiet` is given
//!
//! # Exit Codes
//!
//! - `0` - Output written, or no documents were found
//! - `1` - Invalid input path, or the output could not be written

pub mod summary;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::metadata::collect_records;
use crate::output::{OutputFormat, save_output};
use crate::utils::paths::expand_path;
use crate::utils::progress::ProgressBar;

pub use summary::Summary;

/// Output destination used when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "metadata-output.json";

/// Runtime configuration derived from the global flags.
///
/// Separating this from [`Cli`] lets tests run the pipeline with an explicit
/// configuration instead of parsed arguments.
///
/// # Examples
///
/// ```rust
/// use mdmeta_cli::cli::CliConfig;
///
/// let config = CliConfig::new().with_no_progress(true);
/// assert!(config.no_progress);
/// assert_eq!(config.log_level, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log filter directive. `None` defers to `RUST_LOG`, then `warn`.
    pub log_level: Option<String>,

    /// Hide the spinner.
    pub no_progress: bool,

    /// Print only per-file errors, no banner or summary.
    pub quiet: bool,
}

impl CliConfig {
    /// Configuration with logging from the environment, progress shown, summary printed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the log filter directive.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Enable or disable the spinner.
    #[must_use]
    pub const fn with_no_progress(mut self, no_progress: bool) -> Self {
        self.no_progress = no_progress;
        self
    }

    /// Enable or disable quiet mode.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The filter the subscriber is built with.
    fn env_filter(&self) -> EnvFilter {
        match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        }
    }
}

/// Install the global `tracing` subscriber, writing to stderr.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(config: &CliConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Extract frontmatter metadata from markdown files into JSON, CSV or YAML.
#[derive(Parser, Debug)]
#[command(
    name = "mdmeta",
    about = "Extract frontmatter metadata from markdown files",
    version,
    long_about = "mdmeta scans a markdown file or a directory tree of .md/.mdx files, \
                  reads the YAML or fenced JSON frontmatter of each document, adds file \
                  statistics (word count, reading time, modification time), and writes \
                  one record per document as JSON, CSV or YAML."
)]
pub struct Cli {
    /// Markdown file or directory to scan
    path: String,

    /// Output file path
    ///
    /// The extension for the chosen format is appended when missing
    /// (`.json`, `.csv`, or `.yaml` unless the path already ends in `.yml`).
    #[arg(long, env = "MDMETA_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: String,

    /// Output format
    #[arg(long, value_enum, env = "MDMETA_FORMAT", default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Only report per-file errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Hide the progress spinner
    #[arg(long)]
    no_progress: bool,
}

impl Cli {
    /// Run with the configuration implied by the parsed flags.
    ///
    /// # Errors
    ///
    /// See [`Cli::execute_with_config`].
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(&config)
    }

    /// Translate the global flags into a [`CliConfig`].
    ///
    /// `--verbose` selects `debug` logging and `--quiet` selects `error`;
    /// otherwise `RUST_LOG` applies. Quiet mode also hides the spinner.
    ///
    /// ```rust
    /// use clap::Parser;
    /// use mdmeta_cli::cli::Cli;
    ///
    /// let cli = Cli::parse_from(["mdmeta", "--verbose", "docs"]);
    /// assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            no_progress: self.no_progress || self.quiet,
            quiet: self.quiet,
        }
    }

    /// Run the extraction pipeline.
    ///
    /// 1. Expand a leading `~` in both paths and normalize the output extension
    /// 2. Collect one record per document under the input path
    /// 3. Write all records in the chosen format
    /// 4. Print the summary
    ///
    /// # Errors
    ///
    /// Returns an error when the input is neither a directory nor a markdown
    /// file, or when the output cannot be written. Per-document failures are reported in the output instead.
    pub fn execute_with_config(self, config: &CliConfig) -> Result<()> {
        let summary = Summary::new(config.quiet);

        let input = expand_path(&self.path);
        let output = self.format.normalize_output_path(&expand_path(&self.output));
        debug!("Input: {}, output: {} ({})", input.display(), output.display(), self.format);

        summary.processing(&self.path);

        let progress =
            if config.no_progress { ProgressBar::hidden() } else { ProgressBar::new_spinner() };
        progress.set_message(format!("Scanning {}", self.path));
        let collected = collect_records(&input, Some(progress.clone()));
        progress.finish_and_clear();
        let records = collected?;

        if records.is_empty() {
            summary.no_documents();
            return Ok(());
        }
        summary.found(records.len());

        save_output(&records, &output, self.format)?;
        summary.saved(&output);
        summary.fields(&records);
        summary.errors(&records);

        Ok(())
    }
}
