//! Halt example
//!
//! An event at or above `log-break-level` writes the call path as `trail`
//! lines and comes back as `LoggerError::Halt`. The binary decides how to
//! stop; here it exits with the error's status.
//!
//! Run with: cargo run --example halt

use eggshell::prelude::*;

fn load(logger: &Logger, name: &str) -> Result<Conclusion> {
    logger.mark(Severity::Debug)?;
    if name.ends_with(".missing") {
        return logger.err("Unable to read %s", &[Arg::from(name)]);
    }
    logger.info("Loaded %s", &[Arg::from(name)])
}

fn main() {
    let options = Options::default()
        .print_level(Severity::Debug)
        .file(None::<String>)
        .file_level(Severity::Emerg)
        .break_level(Severity::Err)
        .mark_trace(true)
        .app_root(env!("CARGO_MANIFEST_DIR"));

    let logger = match Logger::with_options(options) {
        Ok(logger) => logger,
        Err(e) => e.terminate(),
    };

    for name in ["users.json", "groups.missing", "never.json"] {
        if let Err(e) = load(&logger, name) {
            e.terminate();
        }
    }
}
