//! Logging setup for programs built on the console helpers
//!
//! The library itself only emits `tracing` events: color switches at `trace`,
//! default substitution and rejected input at `debug`. Binaries that want to
//! see them install a subscriber with one of the functions below.
//!
//! ```bash
//! RUST_LOG=contools=debug cargo run --example console_demo
//! ```

use tracing_subscriber::{fmt, EnvFilter};

/// Install a subscriber filtered by `RUST_LOG`, falling back to `warn`.
///
/// Logs go to stderr so they never interleave with prompts on stdout.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    install(env_filter);
}

/// Install a subscriber with a fixed filter such as `"debug"` or `"contools=trace"`.
pub fn init_with_level(level: &str) {
    install(EnvFilter::new(level));
}

fn install(env_filter: EnvFilter) {
    // A subscriber may already be set by the host program.
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .try_init();
}
