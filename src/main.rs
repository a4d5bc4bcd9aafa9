//! ddlsmith
//!
//! Schema-to-DDL synthesis engine for PostgreSQL-style dialects.
//!
//! This is the main entry point for the command-line binary.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = ddlsmith_cli::run() {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
