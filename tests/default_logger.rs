//! Tests for the process-wide default logger and its free functions
//!
//! All tests share one logger, so each one takes `SERIAL` and removes the
//! handlers it registered.

use log_dispatch::emitters::Delivery;
use log_dispatch::{global, ChannelEmitter, ForwardRecord, LogLevel};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

static SERIAL: Mutex<()> = Mutex::new(());

fn capture(name: &str) -> crossbeam_channel::Receiver<Delivery> {
    let (emitter, receiver) = ChannelEmitter::unbounded();
    global::add_handler(name, Arc::new(emitter));
    receiver
}

fn messages(receiver: &crossbeam_channel::Receiver<Delivery>) -> Vec<(LogLevel, String)> {
    receiver
        .try_iter()
        .map(|(_, record)| (record.level, record.message))
        .collect()
}

#[test]
fn test_free_functions_delegate_to_default_logger() {
    let _serial = SERIAL.lock();
    let receiver = capture("free-functions");

    global::debug("d");
    global::trace("t");
    global::info("i");
    global::warning("w");
    global::error("e");
    global::fatal("f");
    global::log(LogLevel::Info, "explicit");
    global::output(LogLevel::Error.ordinal(), "by ordinal");

    assert_eq!(
        messages(&receiver),
        vec![
            (LogLevel::Debug, "d".to_string()),
            (LogLevel::Trace, "t".to_string()),
            (LogLevel::Info, "i".to_string()),
            (LogLevel::Warning, "w".to_string()),
            (LogLevel::Error, "e".to_string()),
            (LogLevel::Fatal, "f".to_string()),
            (LogLevel::Info, "explicit".to_string()),
            (LogLevel::Error, "by ordinal".to_string()),
        ]
    );
    assert!(global::remove_handler("free-functions"));
}

#[test]
fn test_macros_without_logger_use_default() {
    let _serial = SERIAL.lock();
    let receiver = capture("macros");

    let user = "alice";
    log_dispatch::info!("user {} logged in", user);
    log_dispatch::warning!("quota at {}%", 91);
    log_dispatch::log!(LogLevel::Error, "plain {}", user);

    assert_eq!(
        messages(&receiver),
        vec![
            (LogLevel::Info, "user alice logged in".to_string()),
            (LogLevel::Warning, "quota at 91%".to_string()),
            (LogLevel::Error, "plain alice".to_string()),
        ]
    );
    global::remove_handler("macros");
}

#[test]
fn test_reset_level_through_facade() {
    let _serial = SERIAL.lock();
    let receiver = capture("reset-level");

    global::reset_level("ERROR");
    global::info("filtered");
    global::error("kept");
    global::reset_level("DEBUG");
    global::debug("kept too");

    assert_eq!(
        messages(&receiver),
        vec![
            (LogLevel::Error, "kept".to_string()),
            (LogLevel::Debug, "kept too".to_string()),
        ]
    );
    global::remove_handler("reset-level");
}

#[test]
fn test_remote_forward_through_facade() {
    let _serial = SERIAL.lock();
    let receiver = capture("remote");

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    global::set_remote_forward(Arc::new(move |record: &ForwardRecord<'_>| {
        counter.fetch_add(1, Ordering::SeqCst);
        global::error(format!("echo: {}", record.message));
    }));

    global::warning("below threshold");
    global::error("forward me");

    global::set_remote_level(LogLevel::Disable);
    global::fatal("not forwarded");
    global::set_remote_level(LogLevel::Error);
    global::default_logger().clear_remote_forward();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        messages(&receiver),
        vec![
            (LogLevel::Warning, "below threshold".to_string()),
            (LogLevel::Error, "forward me".to_string()),
            (LogLevel::Error, "echo: forward me".to_string()),
            (LogLevel::Fatal, "not forwarded".to_string()),
        ]
    );
    global::remove_handler("remote");
}

#[test]
fn test_flush_succeeds_on_default_logger() {
    let _serial = SERIAL.lock();
    assert!(global::flush().is_ok());
}
