#![cfg(test)]

//! Logging for unit tests, installed by the constructor in `lib.rs`.
//!
//! Set `TEST_LOG=debug` to see engine and service events while tests run.

pub fn init() {
    lizard_test_support::test_logging::init();
}
