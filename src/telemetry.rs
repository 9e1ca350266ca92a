//! Opt-in tracing bootstrap for hosts embedding `barchart-rs`.
//!
//! The crate itself only emits `tracing` events; it never installs a global
//! subscriber unless the host explicitly asks for one here.

/// Installs a compact `fmt` subscriber when the `telemetry` feature is enabled.
///
/// The filter comes from `RUST_LOG` when set and falls back to `info`.
/// Returns `true` on successful installation, `false` when the feature is
/// disabled or another global subscriber won the race.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
