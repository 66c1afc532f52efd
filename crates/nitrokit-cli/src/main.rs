// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

use clap::{Parser, Subcommand};
use nitrokit_cli::commands;
use nitrokit_cli::manifest::MANIFEST_FILE;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nitrokit")]
#[command(author = "Maravilla Labs")]
#[command(version)]
#[command(about = "Inspect server registrations of a module manifest", long_about = None)]
struct Cli {
    /// Log level: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Path to the module manifest
    #[arg(short, long, global = true, default_value = MANIFEST_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved server configuration as JSON
    Resolve {
        /// Include dev-only handlers
        #[arg(long)]
        dev: bool,
    },
    /// List resolved server handlers
    Handlers,
    /// Print the collected prerender routes
    Prerender,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with the specified log level
    let filter = EnvFilter::try_new(&cli.log_level)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Resolve { dev } => commands::resolve::run(&cli.config, dev),
        Commands::Handlers => commands::handlers::run(&cli.config),
        Commands::Prerender => commands::prerender::run(&cli.config),
    }
}
