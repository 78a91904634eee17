//! Tracing subscriber set-up for test runs

use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::Config;

/// Install the global fmt subscriber.
///
/// The filter comes from RUST_LOG when set, otherwise from
/// `config.log_level`. Output goes through the test writer so cargo captures
/// it per test. Safe to call from every test; only the first call installs
/// anything. Returns whether this call installed the subscriber.
pub fn init(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_test_writer()
        .finish();

    let installed = tracing::subscriber::set_global_default(subscriber).is_ok();
    if installed {
        debug!("Tracing initialized");
    }
    installed
}
