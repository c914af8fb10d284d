//! Bizdash - Business Dashboard Metrics
//!
//! Main entry point for the command-line shell.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod cli;

fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Starting Bizdash v{}", env!("CARGO_PKG_VERSION"));

    app::BizdashApp::run(args)
}
