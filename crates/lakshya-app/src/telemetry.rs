//! Process-wide error reporting and log output.

use tracing_subscriber::EnvFilter;

/// Selects JSON log lines when set to `json`.
pub const LOG_FORMAT_ENV: &str = "LAKSHYA_LOG_FORMAT";

/// Install `color-eyre` and a `tracing` subscriber. `RUST_LOG` overrides the
/// default `info` filter. Call once, at startup.
pub fn init() -> eyre::Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| eyre::eyre!("failed to install tracing subscriber: {e}"))
}
