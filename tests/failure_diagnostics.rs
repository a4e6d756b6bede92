//! Every failed feed writes exactly one error diagnostic.

mod common;

use std::sync::{Mutex, OnceLock};

use common::Harness;
use oil_price_dashboard::domain::errors::AppError;
use oil_price_dashboard::domain::logging::{LogEntry, LogLevel, Logger, init_logger};

struct MemoryLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl Logger for MemoryLogger {
    fn log(&self, entry: LogEntry) {
        self.entries.lock().unwrap().push(entry);
    }
}

static LOGGER: OnceLock<&'static MemoryLogger> = OnceLock::new();

struct Forward(&'static MemoryLogger);

impl Logger for Forward {
    fn log(&self, entry: LogEntry) {
        self.0.log(entry);
    }
}

fn memory_logger() -> &'static MemoryLogger {
    LOGGER.get_or_init(|| {
        let logger: &'static MemoryLogger = Box::leak(Box::new(MemoryLogger { entries: Mutex::new(Vec::new()) }));
        init_logger(Box::new(Forward(logger)));
        logger
    })
}

/// Error entries mentioning `marker`. Tests run in parallel, so each uses its own marker.
fn errors_mentioning(marker: &str) -> usize {
    memory_logger()
        .entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.level == LogLevel::Error && e.message.contains(marker))
        .count()
}

#[test]
fn price_failure_logs_once() {
    memory_logger();
    let (mut harness, responders) = Harness::new();
    harness.initialize();
    responders.prices.send(Err(AppError::NetworkError("price-marker-7f3".to_string()))).unwrap();
    harness.settle();

    assert_eq!(errors_mentioning("price-marker-7f3"), 1);
    assert!(harness.snapshot().is_loading());
}

#[test]
fn event_failure_logs_once_and_is_observable() {
    memory_logger();
    let (mut harness, responders) = Harness::new();
    harness.initialize();
    responders.prices.send(Ok(common::sample_prices())).unwrap();
    responders.events.send(Err(AppError::DecodeError("event-marker-2c9".to_string()))).unwrap();
    harness.settle();

    assert_eq!(errors_mentioning("event-marker-2c9"), 1);
    let state = harness.snapshot();
    assert!(!state.is_loading());
    assert!(state.event_feed().error().is_some());
}
