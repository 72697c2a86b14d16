//! One-time tracing setup for test binaries.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Level in order of precedence: `TEST_LOG`, `RUST_LOG`, then `"warn"`.
pub fn filter_directive() -> String {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string())
}

/// Install a test-captured subscriber once per process.
///
/// Safe to call from every test; later calls do nothing, and a subscriber
/// installed elsewhere first is left alone.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let installed = fmt()
            .with_env_filter(EnvFilter::new(filter_directive()))
            .with_test_writer()
            .without_time()
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!("test logging initialised");
        }
    });
}
