use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Initializes logging to stderr.
///
/// Defaults to `info`, which shows skip warnings and per-employee delivery
/// results. Set `RUST_LOG` to override, e.g. `RUST_LOG=payslip_mailer=debug`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
