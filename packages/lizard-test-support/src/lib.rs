//! Test support shared by the `lizard` integration test binaries.

pub mod test_logging;
