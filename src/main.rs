// ABOUTME: Entry point for the neops CLI application.
// ABOUTME: Parses arguments, sets up logging and runs the container listing.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use neops::output::{Layout, Output};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Skipped containers are reported through Output, so tracing stays quiet
    // unless debug logging is requested.
    let filter = if cli.verbose {
        EnvFilter::new("neops=debug")
    } else {
        EnvFilter::new("error")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let output = Output::new(Layout::from_compact(cli.compact));

    let result = commands::list(&cli.runtime_config(), cli.request_timeout(), &output).await;

    if let Err(e) = result {
        output.error(&e.to_string());
        if let Some(hint) = e.hint() {
            output.hint(hint);
        }
        std::process::exit(1);
    }
}
