//! Tests for the pagecheck tracing setup.

use std::sync::Mutex;

use pagecheck_core::tracing::init_tracing;

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

/// PAGECHECK_LOG with per-module directives is accepted.
#[test]
fn test_per_module_filtering() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("PAGECHECK_LOG", "pagecheck_audits=debug,pagecheck_core=warn");
    init_tracing();
    std::env::remove_var("PAGECHECK_LOG");
}

/// Calling init_tracing() repeatedly does not panic.
#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing();
}

/// An invalid filter falls back to the default instead of crashing.
#[test]
fn test_invalid_filter_fallback() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("PAGECHECK_LOG", "[[[not a filter");
    init_tracing();
    std::env::remove_var("PAGECHECK_LOG");
}
