//! Tests for logging setup.

use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use xscale_core::tracing::setup::{env_filter, init_tracing, LOG_ENV};

/// Serializes tests that touch `XSCALE_LOG`.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

fn filter_level(value: Option<&str>) -> Option<LevelFilter> {
    match value {
        Some(v) => std::env::set_var(LOG_ENV, v),
        None => std::env::remove_var(LOG_ENV),
    }
    let hint = env_filter().max_level_hint();
    std::env::remove_var(LOG_ENV);
    hint
}

#[test]
fn test_unset_uses_default_filter() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    assert_eq!(filter_level(None), Some(LevelFilter::INFO));
}

#[test]
fn test_debug_filter_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    assert_eq!(filter_level(Some("debug")), Some(LevelFilter::DEBUG));
}

#[test]
fn test_per_module_filter_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    assert_eq!(
        filter_level(Some("xscale_merge::source=trace,xscale_merge::paths=warn")),
        Some(LevelFilter::TRACE)
    );
}

#[test]
fn test_invalid_filter_falls_back() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    assert_eq!(filter_level(Some("xscale=loudest")), Some(LevelFilter::INFO));
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
    tracing::info!("still usable after repeated init");
}
