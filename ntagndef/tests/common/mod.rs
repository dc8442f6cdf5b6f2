// Shared helpers for the integration tests. Each aggregator pulls this in
// with `#[path = "../common/mod.rs"] mod common;`.
#![allow(dead_code)]

pub mod fixtures;

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
