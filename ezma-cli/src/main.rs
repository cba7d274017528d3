//! Ezma CLI - Command-line interface
//!
//! Starts the library page server or prints a single resolved page.

mod commands;

use clap::Parser;
use ezma_core::tracing_setup::{CliLogLevel, init_tracing};

#[derive(Parser)]
#[command(name = "ezma")]
#[command(about = "Library directory pages backed by a catalog API")]
struct Cli {
    /// Console log level (RUST_LOG takes precedence)
    #[arg(long, global = true, value_enum, default_value_t = CliLogLevel::Info)]
    log_level: CliLogLevel,

    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_tracing_level(), None)?;

    commands::handle_command(cli.command).await
}
