//! library-checkout binary entry point.
//!
//! Parses the command line, sets up logging on stderr, builds the catalog
//! and runs the menu loop on stdin/stdout.
//!
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use library_checkout::app::{self, SessionConfig};
use library_checkout::error::Result;

/// Browse, check out and return books from a small in-memory library.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Your display name (skips the name prompt)
    #[arg(long)]
    name: Option<String>,

    /// Load books from a file with one `title | author | genre` per line
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Print availability without colors
    #[arg(long)]
    no_color: bool,

    /// Log filter for messages on stderr, e.g. `debug` or `library_checkout=info`
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn init_tracing(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive).map_err(|e| format!("invalid log level '{directive}': {e}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

/// Program entry point: run the session and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let stdout = std::io::stdout();
    let config = SessionConfig {
        user_name: cli.name,
        catalog_path: cli.catalog,
        color: !cli.no_color && stdout.is_terminal(),
    };
    let catalog = config.load_catalog()?;

    let mut input = std::io::stdin().lock();
    let mut output = stdout.lock();
    if let Err(err) = app::run(catalog, &config, &mut input, &mut output) {
        eprintln!("application error: {err}");
    }
    Ok(())
}
