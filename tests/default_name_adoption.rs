//! Naming of the default logger by the first registered handler
//!
//! Kept in its own test binary: the default logger is process-wide and
//! this test depends on it starting without a name.

use log_dispatch::{default_logger, ChannelEmitter, Logger};
use std::sync::Arc;

#[test]
fn test_first_seeding_registration_names_default_logger() {
    assert_eq!(default_logger().name(), "");

    // A logger that opted out does not name the default logger
    let private = Logger::builder().seed_default_name(false).build();
    private.add_handler("private", Arc::new(ChannelEmitter::unbounded().0));
    assert_eq!(default_logger().name(), "");

    // The first seeding registration anywhere does
    let service = Logger::new();
    service.add_handler("app", Arc::new(ChannelEmitter::unbounded().0));
    assert_eq!(service.name(), "app");
    assert_eq!(default_logger().name(), "app");

    // Later registrations elsewhere leave it alone
    let worker = Logger::new();
    worker.add_handler("worker", Arc::new(ChannelEmitter::unbounded().0));
    assert_eq!(default_logger().name(), "app");

    // Registering on the default logger itself renames it, last writer wins
    let (emitter, records) = ChannelEmitter::unbounded();
    default_logger().add_handler("console", Arc::new(emitter));
    assert_eq!(default_logger().name(), "console");

    log_dispatch::global::info("named");
    let (source, record) = records.try_recv().expect("record delivered");
    assert_eq!(source, "console");
    assert_eq!(record.message, "named");
}
