//! Tracing initialization.
//! Builds a compact stdout subscriber driven by an EnvFilter.
//!
//! The library itself only emits through the `tracing` facade; whoever hosts it
//! decides the sink. `init` is a convenience for binaries, examples and manual
//! testing. Tests that need to observe events install their own capturing
//! subscriber with `tracing::subscriber::with_default` instead.

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Install a process-wide compact subscriber.
///
/// Level comes from `RUST_LOG` when set, falling back to `default_level`.
/// Returns quietly if a subscriber is already installed, so test binaries can
/// call this from several entry points.
pub fn init(default_level: LevelFilter) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .compact()
        .try_init();
}
