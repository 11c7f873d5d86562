//! Tracing setup for binaries and tools embedding the engine.

use tracing_subscriber::EnvFilter;

/// Default filter when neither the caller nor `RUST_LOG` picks one.
pub const DEFAULT_LEVEL: &str = "mission_core=info,bubble_model=info,warn";

/// Install a compact stderr subscriber.
///
/// `RUST_LOG` takes precedence over `level`. Calling this again after a
/// subscriber is installed does nothing.
pub fn init_subscriber(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    let _ = subscriber.try_init();
}
