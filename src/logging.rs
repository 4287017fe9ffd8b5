use tracing::dispatcher;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Default filter directive for a given `-v` count.
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. `RUST_LOG` overrides the `-v` level.
///
/// Stdout carries the result line, so diagnostics never go there.
pub fn init_logging(verbosity: u8) {
    if dispatcher::has_been_set() {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
