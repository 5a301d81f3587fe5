//! Basic logger usage example
//!
//! Demonstrates console output, the different log levels and resetting the
//! level of every registered emitter at once.
//!
//! Run with: cargo run --example basic_usage

use log_dispatch::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Log Dispatch - Basic Usage Example ===\n");

    let logger = Logger::new();
    logger.add_handler("console", Arc::new(ConsoleEmitter::new()));

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.trace("This is a trace message");
    logger.info("This is an info message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");

    println!("\n2. Formatted messages:");
    log_dispatch::info!(logger, "Server listening on port {}", 8080);
    log_dispatch::warning!(logger, "Cache hit ratio {:.1}%", 42.857);

    println!("\n3. Resetting the level to WARNING:");
    logger.reset_level("WARNING");
    logger.debug("Debug message (hidden)");
    logger.info("Info message (hidden)");
    logger.warning("Warning message (visible)");
    logger.error("Error message (visible)");

    println!("\n4. Default logger:");
    log_dispatch::global::add_handler(
        "console",
        Arc::new(ConsoleEmitter::new().with_output_format(OutputFormat::Logfmt)),
    );
    log_dispatch::info!("Default logger is named '{}'", default_logger().name());

    logger.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
