//! pip-import entry point
//!
//! Parses arguments, sets up logging, runs the import and maps failures to a
//! colored diagnostic plus exit status 1.

use anyhow::Result;
use clap::Parser;
use pip_import::cli;
use pip_import::core::user_friendly_error;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.init_logging();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute().await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
