//! mdmeta command-line entry point.

use clap::Parser;
use mdmeta_cli::cli::{self, Cli};
use mdmeta_cli::core::user_friendly_error;

fn main() {
    let cli = Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let config = cli.build_config();
    cli::init_logging(&config);

    if let Err(e) = cli.execute_with_config(&config) {
        // Convert to user-friendly error with context and suggestions
        let error_ctx = user_friendly_error(e);
        error_ctx.display();
        std::process::exit(1);
    }
}
