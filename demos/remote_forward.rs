//! Remote forwarding example
//!
//! Demonstrates handing severe records to a callback. Messages logged from
//! inside the callback reach the local emitters but are never forwarded
//! again.
//!
//! Run with: cargo run --example remote_forward

use log_dispatch::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Log Dispatch - Remote Forward Example ===\n");

    let logger = Arc::new(Logger::new());
    logger.add_handler("console", Arc::new(ConsoleEmitter::new()));

    let inner = Arc::downgrade(&logger);
    logger.set_remote_forward(Arc::new(move |record: &ForwardRecord<'_>| {
        println!(
            "   -> forwarded [level={} ts={}] {}",
            record.level, record.unix_timestamp, record.message
        );
        // Reaches the console, not the callback
        if let Some(logger) = inner.upgrade() {
            logger.warning(format!("forwarded {} bytes", record.message.len()));
        }
    }));

    println!("1. Default threshold (ERROR):");
    logger.warning("Slow response from upstream");
    logger.error("Upstream returned 503");

    println!("\n2. Lowered threshold (WARNING):");
    logger.set_remote_level(LogLevel::Warning);
    logger.warning("Retry budget at 80%");

    println!("\n3. Forwarding disabled:");
    logger.set_remote_level(LogLevel::Disable);
    logger.fatal("Giving up on upstream");

    let metrics = logger.metrics();
    println!(
        "\nForwards: {}, suppressed: {}",
        metrics.forwards(),
        metrics.forwards_suppressed()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
