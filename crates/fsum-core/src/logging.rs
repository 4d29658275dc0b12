//! Logging init: stderr, with `RUST_LOG` filter control.

use tracing_subscriber::EnvFilter;

/// Initialize tracing to stderr. Progress lines and diagnostics share this
/// subscriber; `RUST_LOG` overrides the default level. Call once at startup.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,fsum_core=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
