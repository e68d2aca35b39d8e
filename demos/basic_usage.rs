//! Basic logger usage example
//!
//! Demonstrates the severity ladder, pseudo-levels and the memory buffer.
//!
//! Run with: cargo run --example basic_usage

use eggshell::prelude::*;
use eggshell::{info, warning};

fn main() -> Result<()> {
    println!("=== Eggshell - Basic Usage Example ===\n");

    let logger = Logger::builder()
        .options(
            Options::default()
                .print_level(Severity::Debug)
                .file(None::<String>)
                .file_level(Severity::Emerg)
                .break_level(Severity::Emerg),
        )
        .console(ConsoleAppender::with_colors(true))
        .build()?;

    logger.section_open("Logging at different levels", &[])?;
    logger.alert("This is an alert message", &[])?;
    logger.crit("This is a critical message", &[])?;
    logger.err("This is an error message", &[])?;
    logger.warning("This is a warning message", &[])?;
    logger.notice("This is a notice message", &[])?;
    logger.info("This is an info message", &[])?;
    logger.debug("This is a debug message", &[])?;
    logger.debugv("This debugv message stays below the print threshold", &[])?;

    logger.section_open("Interpolating arguments", &[])?;
    info!(logger, "Copied %d files to %s", 12, "/srv/backup")?;
    warning!(logger, "Disk usage at %.1f%%", 91.25)?;
    logger.info(
        "Connection settings: %s",
        &[Arg::from(vec![Arg::from("db1"), Arg::from(5432), Arg::from(true)])],
    )?;

    logger.section_open("Output of a child process", &[])?;
    logger.stdout(vec!["Compiling eggshell v0.1.0", "Finished dev profile"], &[])?;
    logger.stderr("warning: unused variable `x`", &[])?;

    logger.section_open("Memory buffer", &[])?;
    for (tag, lines) in logger.memory() {
        logger.out(&format!("{:>10}: {} line(s)", tag, lines.len()), &[]);
    }

    logger.flush()?;
    println!("\n=== Example completed successfully ===");
    Ok(())
}
