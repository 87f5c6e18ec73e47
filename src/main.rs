//! traefik-labels CLI entry point
//!
//! Reads a compose file, stamps the Traefik routing labels onto one service
//! and prints the updated document to stdout.

use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;
use traefik_labels::compose::{apply_traefik_labels, ComposeDocument};
use traefik_labels::error::Result;

/// Traefik labels helper
#[derive(Parser)]
#[command(name = "traefik-labels")]
#[command(author = "Evoker Industries")]
#[command(version)]
#[command(about = "Add or update Traefik routing labels in a compose file", long_about = None)]
struct Cli {
    /// Compose file name
    file: PathBuf,

    /// Docker service name
    service: String,

    /// Deployment id
    id: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let mut doc = ComposeDocument::parse_file(&cli.file)?;
    tracing::debug!("loaded compose file {}", cli.file.display());

    apply_traefik_labels(&mut doc, &cli.service, &cli.id)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(doc.to_yaml()?.as_bytes())?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        tracing::error!("{}", err);
        process::exit(1);
    }
}
