//! Helpers shared by the tests of every crate in the workspace.

pub use pretty_assertions::{assert_eq, assert_ne};
use tracing_subscriber::EnvFilter;

/// Installs a `tracing` subscriber that writes through the test harness.
///
/// The filter is read from `RUST_LOG` and defaults to `debug`. Calling this
/// more than once is fine; only the first call installs anything.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init();
}

/// Runs `op` with a subscriber installed and returns its result.
pub fn run_test<F, Ret>(op: F) -> Ret
where
    F: FnOnce() -> Ret,
{
    init();
    tracing::debug_span!("test").in_scope(op)
}
