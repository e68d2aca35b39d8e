//! File logging example
//!
//! Demonstrates separate console and file thresholds.
//!
//! Run with: cargo run --example file_logging

use eggshell::prelude::*;
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("=== Eggshell - File Logging Example ===\n");

    let path = PathBuf::from("application.log");
    let logger = Logger::with_options(
        Options::default()
            .print_level(Severity::Notice)
            .file_level(Severity::Debug)
            .file(Some(&path))
            .date_format("Y-m-d H:i:s"),
    )?;

    logger.notice("Application started", &[])?;
    logger.debug("Loading configuration from %s", &[Arg::from("config.json")])?;
    logger.info("Configuration loaded successfully", &[])?;
    logger.warning("Using default settings for %d options", &[Arg::from(3)])?;

    for i in 1..=5 {
        logger.debug("Processing item %d/5", &[Arg::from(i)])?;
        if i == 3 {
            logger.warning("Item %d took longer than expected", &[Arg::from(i)])?;
        }
    }

    logger.notice("Application finished", &[])?;

    println!("\nConsole showed notice and above; {} holds every debug line.", path.display());
    println!("Lines written to file: {}", logger.metrics().file_written());

    let content = std::fs::read_to_string(&path)?;
    for line in content.lines().take(3) {
        println!("  {}", line);
    }

    Ok(())
}
