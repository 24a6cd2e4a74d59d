use std::io::IsTerminal;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install a global fmt subscriber for tests, filtered by `TEST_LOG`
/// (defaults to `debug`). Safe to call from every test.
pub fn trace_init() {
    INIT.call_once(|| {
        let level = std::env::var("TEST_LOG").unwrap_or_else(|_| "debug".to_string());

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(level))
            .with_ansi(std::io::stdout().is_terminal())
            .with_test_writer()
            .try_init();
    });
}
