use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber for the whole process. `RUST_LOG` takes
/// precedence over the configured level. Statement logs from the ORM arrive
/// through the `log` compatibility bridge, so no extra layer is needed.
pub fn setup(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_ansi(std::io::stdout().is_terminal())
        .init();
}
