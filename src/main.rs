/// Main entry point for the contact book
///
/// This file sets up logging, parses command line arguments, and starts the
/// interactive shell. Logs go to stderr so they never mix with the shell
/// output on stdout.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use contact_book::{ContactBookApp, DEFAULT_FILE_NAME};

/// Command line arguments for the contact book
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the address book JSON file
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    file: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("contact_book={}", log_level))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting contact book");

    if let Some(parent) = args.file.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let app = ContactBookApp::open(args.file);

    // A pending stdin read lives on a blocking thread that cannot be
    // cancelled, so the runtime is shut down without waiting for it.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(app.run());
    runtime.shutdown_background();
    result?;

    info!("Contact book shutdown complete");
    Ok(())
}
