//! Telemetry helpers for hosts embedding `chart-dashboard`.
//!
//! Tracing setup stays explicit and opt-in: call one of the `init_*`
//! helpers or install your own `tracing` subscriber. Registry writes and
//! panel renders log under the `chart_dashboard` target.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "chart_dashboard=info";

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`,
/// falling back to [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or the host
/// already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-provided fallback filter,
/// e.g. `"chart_dashboard=debug"` from a `--verbose` flag.
#[must_use]
pub fn init_tracing_with_fallback(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
