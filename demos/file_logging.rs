//! File logging example
//!
//! Demonstrates logging to both console and file emitters, then replacing
//! the file emitter under the same name.
//!
//! Run with: cargo run --example file_logging

use log_dispatch::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Log Dispatch - File Logging Example ===\n");

    let logger = Logger::new();
    logger.add_handler("console", Arc::new(ConsoleEmitter::new()));
    logger.add_handler("file", Arc::new(FileEmitter::new("application.log")?));

    println!("1. Logging to both console and file:");
    logger.info("Application started");
    logger.debug("Loading configuration...");
    logger.warning("Using default settings for some options");
    logger.error("Failed to load optional plugin");

    println!("\n2. Switching the file emitter to JSON output:");
    // The previous file emitter is flushed and closed by the replacement
    logger.add_handler(
        "file",
        Arc::new(FileEmitter::new("application.jsonl")?.with_output_format(OutputFormat::Json)),
    );

    for i in 1..=5 {
        log_dispatch::info!(logger, "Processing item {}/5", i);
        if i == 3 {
            logger.warning("Item 3 took longer than expected");
        }
    }

    logger.info("All operations completed");
    logger.flush()?;

    let metrics = logger.metrics();
    println!(
        "\nDispatched {} records, {} emitter failures",
        metrics.records_dispatched(),
        metrics.emit_failures()
    );

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' and 'application.jsonl' for the output");

    Ok(())
}
